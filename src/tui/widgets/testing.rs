/// Testing utilities for widget rendering
///
/// This module provides helper functions for testing widgets in isolation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::config::{Config, DisplayConfig};
use super::RenderableWidget;

/// Create a test DisplayConfig with unicode box characters
pub fn test_config() -> DisplayConfig {
    Config::default().display()
}

/// Create a test DisplayConfig with ASCII box characters
pub fn test_config_ascii() -> DisplayConfig {
    Config {
        use_unicode: false,
        ..Config::default()
    }
    .display()
}

/// Render a widget to a buffer and return it for testing
pub fn render_widget(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
) -> Buffer {
    render_widget_with_config(widget, width, height, &test_config())
}

/// Render a widget to a buffer with a custom config
pub fn render_widget_with_config(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
    config: &DisplayConfig,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, config);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    /// Simple test widget for testing the testing utilities
    struct TestWidget {
        text: String,
    }

    impl RenderableWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
            buf.set_string(area.x, area.y, &self.text, Style::default());
        }
    }

    #[test]
    fn test_render_widget() {
        let widget = TestWidget {
            text: "Hello".to_string(),
        };

        let buf = render_widget(&widget, 10, 1);

        assert_eq!(buf[(0, 0)].symbol(), "H");
        assert_eq!(buf[(4, 0)].symbol(), "o");
        assert_eq!(buf[(5, 0)].symbol(), " ");
    }

    #[test]
    fn test_config_creates_unicode() {
        let config = test_config();
        assert_eq!(config.box_chars.horizontal, "─");
        assert_eq!(config.box_chars.serve_marker, "●");
    }

    #[test]
    fn test_config_creates_ascii() {
        let config = test_config_ascii();
        assert_eq!(config.box_chars.horizontal, "-");
        assert_eq!(config.box_chars.serve_marker, "*");
    }
}
