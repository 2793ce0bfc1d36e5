use std::fmt::Write;

use crate::config::DisplayConfig;
use crate::layout::{PxRect, ScoreboardLayout};
use crate::serve::IndicatorState;

/// Box-drawing characters for the tournament box and status bar
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub connector: String,
    pub serve_marker: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            connector: "┬".to_string(),
            serve_marker: "●".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            connector: "-".to_string(),
            serve_marker: "*".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.chars().count()))
}

fn format_rect(rect: &PxRect) -> String {
    format!(
        "x={:>8.2} y={:>8.2} w={:>8.2} h={:>8.2}",
        rect.x, rect.y, rect.width, rect.height
    )
}

fn format_indicator(indicator: IndicatorState) -> &'static str {
    match indicator {
        IndicatorState::ShowMarker => "show-marker",
        IndicatorState::ReserveSpace => "reserve-space",
    }
}

/// Plain-text report of every layout parameter, for the `layout` command
pub fn format_layout_report(layout: &ScoreboardLayout, display: &DisplayConfig) -> String {
    // Writing into a String cannot fail
    let mut out = String::new();
    let scale = &layout.scale;

    out.push_str(&format_header("Scale", true, display));
    let _ = writeln!(out, "{:<18}{:.6}", "scale_factor", scale.scale_factor);
    let _ = writeln!(out, "{:<18}{:.2}", "render_width", scale.render_width);
    let _ = writeln!(out, "{:<18}{:.2}", "render_height", scale.render_height);
    let _ = writeln!(out, "{:<18}{:.2}", "name_font_size", layout.name_font_size);
    let _ = writeln!(out, "{:<18}{:.2}", "score_font_size", layout.score_font_size);
    out.push('\n');

    out.push_str(&format_header("Scores", true, display));
    for row in &layout.players {
        let sets: Vec<String> = row.sets.iter().map(|s| s.to_string()).collect();
        let _ = writeln!(
            out,
            "{:<18}sets=[{}] points={} indicator={}",
            row.name,
            sets.join(", "),
            row.points,
            format_indicator(row.indicator)
        );
    }
    out.push('\n');

    out.push_str(&format_header("Rectangles", true, display));
    for (label, rect) in layout.rects() {
        let _ = writeln!(out, "{:<18}{}", label, format_rect(&rect));
    }
    out.push('\n');

    out.push_str(&format_header("Assets", true, display));
    let _ = writeln!(out, "{:<18}{}", "sponsor", layout.logos.sponsor);
    let _ = writeln!(out, "{:<18}{}", "federation", layout.logos.federation);
    let _ = writeln!(out, "{:<18}{}", "tournament", layout.logos.tournament);
    let _ = writeln!(out, "{:<18}{}", "label", layout.tournament_label);

    out
}
