/// StatusBar widget - displays key hints and board status at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator with connector aligned to the vertical bar
/// - Bottom line: key hints (or an error) │ scale factor and last update time
///
/// Error messages replace the hints and use the error color.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

/// Placeholder shown before the first state update
const NO_UPDATE_TEXT: &str = "--:--:--";

/// Represents a keyboard hint displayed in the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct KeyHint {
    /// The keyboard key (e.g., "q", "s", "1/2")
    pub key: String,
    /// The action description (e.g., "Quit", "Serve")
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Widget for displaying status information and keyboard hints
#[derive(Debug)]
pub struct StatusBar {
    /// Formatted time of the last match-state update
    pub last_update: Option<String>,
    /// Scale factor of the frame being shown
    pub scale_factor: Option<f64>,
    /// Optional error message to display
    pub error_message: Option<String>,
    /// List of keyboard hints to display
    pub hints: Vec<KeyHint>,
}

impl StatusBar {
    /// Create a new StatusBar with the operator console hints
    pub fn new() -> Self {
        Self {
            last_update: None,
            scale_factor: None,
            error_message: None,
            hints: vec![
                KeyHint::new("q", "Quit"),
                KeyHint::new("s", "Serve"),
                KeyHint::new("1/2", "Point"),
                KeyHint::new("g/h", "Game"),
                KeyHint::new("n", "Set"),
                KeyHint::new("c", "Clear"),
                KeyHint::new("r", "Reload"),
            ],
        }
    }

    pub fn with_last_update(mut self, last_update: Option<String>) -> Self {
        self.last_update = last_update;
        self
    }

    pub fn with_scale(mut self, scale_factor: f64) -> Self {
        self.scale_factor = Some(scale_factor);
        self
    }

    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error_message = error;
        self
    }

    pub fn with_hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    /// Build the left side: the error if there is one, otherwise the hints
    fn build_left_text(&self) -> String {
        if let Some(msg) = &self.error_message {
            format!("ERROR: {}", msg)
        } else {
            self.hints
                .iter()
                .map(|hint| format!("{} {}", hint.key, hint.action))
                .collect::<Vec<_>>()
                .join("  ")
        }
    }

    /// Build the right side: scale factor and update time
    fn build_right_text(&self) -> String {
        let scale = match self.scale_factor {
            Some(s) => format!("x{:.2}", s),
            None => "x-.--".to_string(),
        };
        let updated = self.last_update.as_deref().unwrap_or(NO_UPDATE_TEXT);
        format!("{} {}", scale, updated)
    }

    /// Build the top separator line with connector
    fn build_separator_line(&self, area_width: usize, bar_position: u16, config: &DisplayConfig) -> String {
        let left_part = config.box_chars.horizontal.repeat(bar_position as usize);
        let right_part = config
            .box_chars
            .horizontal
            .repeat(area_width.saturating_sub(bar_position as usize + 1));
        format!("{}{}{}", left_part, config.box_chars.connector, right_part)
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let left_text = self.build_left_text();
        let right_text = self.build_right_text();

        // Layout: [ left ] [padding] │ [space] [right] [space]
        let right_width = right_text.chars().count() as u16 + 3;
        let bar_position = area.width.saturating_sub(right_width);

        let separator_line = self.build_separator_line(area.width as usize, bar_position, config);
        buf.set_stringn(area.x, area.y, &separator_line, area.width as usize, Style::default());

        let status_y = area.y + 1;
        let left_style = if self.error_message.is_some() {
            config.error_style()
        } else {
            Style::default()
        };
        if bar_position > 1 {
            buf.set_stringn(area.x + 1, status_y, &left_text, (bar_position - 1) as usize, left_style);
        }

        let right = format!("{} {} ", config.box_chars.vertical, right_text);
        buf.set_stringn(
            area.x + bar_position,
            status_y,
            &right,
            (area.width - bar_position) as usize,
            Style::default(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{assert_buffer, find_text};
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_status_bar_layout() {
        let widget = StatusBar::new()
            .with_hints(vec![KeyHint::new("q", "Quit")])
            .with_scale(1.0)
            .with_last_update(Some("12:00:00".to_string()));
        let buf = render_widget(&widget, 30, 2);

        assert_buffer(
            &buf,
            &[
                "─────────────┬────────────────",
                " q Quit      │ x1.00 12:00:00 ",
            ],
        );
    }

    #[test]
    fn test_status_bar_ascii_without_update() {
        let widget = StatusBar::new().with_hints(vec![KeyHint::new("q", "Quit")]);
        let config = test_config_ascii();
        let buf = render_widget_with_config(&widget, 30, 2, &config);

        assert_buffer(
            &buf,
            &[
                "------------------------------",
                " q Quit      | x-.-- --:--:-- ",
            ],
        );
    }

    #[test]
    fn test_status_bar_error_replaces_hints() {
        let widget = StatusBar::new().with_error(Some("state file missing".to_string()));
        let buf = render_widget(&widget, 80, 2);
        let (x, y) = find_text(&buf, "ERROR: state file missing").unwrap();
        assert_eq!((x, y), (1, 1));
        assert_eq!(buf[(x, y)].fg, test_config().error_fg);
        assert_eq!(find_text(&buf, "Quit"), None);
    }

    #[test]
    fn test_status_bar_default_hints() {
        let widget = StatusBar::default();
        let buf = render_widget(&widget, 120, 2);
        assert!(find_text(&buf, "s Serve").is_some());
        assert!(find_text(&buf, "r Reload").is_some());
    }

    #[test]
    fn test_status_bar_zero_height() {
        let widget = StatusBar::new();
        let buf = render_widget(&widget, 80, 0);
        assert_eq!(buf.area.height, 0);
    }

    #[test]
    fn test_status_bar_narrow_area() {
        let widget = StatusBar::new().with_scale(0.5);
        let buf = render_widget(&widget, 10, 2);
        assert_eq!(buf.area.width, 10);
    }
}
