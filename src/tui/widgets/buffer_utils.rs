/// Buffer utilities for drawing boxes and aligned text
///
/// Low-level drawing primitives for the scoreboard widgets. All functions
/// work with both ASCII and Unicode box characters and clip to their area.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
};
use unicode_width::UnicodeWidthChar;
use crate::formatting::BoxChars;

/// Horizontal placement of text inside a cell rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Draw a simple box border around an area
///
/// # Example
/// ```text
/// ╭───╮
/// │   │
/// ╰───╯
/// ```
pub fn draw_box(
    buf: &mut Buffer,
    area: Rect,
    box_chars: &BoxChars,
    style: Style,
) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    let x = area.x;
    let y = area.y;
    let width = area.width;
    let height = area.height;

    buf.set_string(x, y, &box_chars.top_left, style);
    buf.set_string(x + width - 1, y, &box_chars.top_right, style);
    buf.set_string(x, y + height - 1, &box_chars.bottom_left, style);
    buf.set_string(x + width - 1, y + height - 1, &box_chars.bottom_right, style);

    for i in 1..width - 1 {
        buf.set_string(x + i, y, &box_chars.horizontal, style);
        buf.set_string(x + i, y + height - 1, &box_chars.horizontal, style);
    }

    for i in 1..height - 1 {
        buf.set_string(x, y + i, &box_chars.vertical, style);
        buf.set_string(x + width - 1, y + i, &box_chars.vertical, style);
    }
}

/// Cut `text` to at most `max_width` display columns
///
/// Returns the kept text and its display width.
pub fn truncate_to_width(text: &str, max_width: usize) -> (String, usize) {
    let mut kept = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        kept.push(ch);
        width += ch_width;
    }
    (kept, width)
}

/// Draw one line of text on the middle row of `area`
///
/// Text wider than the area is truncated on the right.
pub fn draw_text(buf: &mut Buffer, area: Rect, text: &str, style: Style, align: Align) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let (text, text_width) = truncate_to_width(text, area.width as usize);
    let slack = area.width - text_width as u16;
    let x = match align {
        Align::Left => area.x,
        Align::Center => area.x + slack / 2,
        Align::Right => area.x + slack,
    };
    let y = area.y + area.height / 2;
    buf.set_string(x, y, &text, style);
}
