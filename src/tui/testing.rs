//! General test utilities for TUI tests.
//!
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use ratatui::buffer::Buffer;

use crate::types::{MatchDisplayState, ServingPlayer};

/// A mid-match state: player 1 serving, one set each, 30-15
pub fn sample_state() -> MatchDisplayState {
    MatchDisplayState::new("E. MORGAN", "R. BIRIA")
        .with_sets(vec![6, 3], vec![4, 6])
        .with_points(30, 15)
        .with_serving(ServingPlayer::Player1)
        .with_tournament("BJK Cup", Some(2024))
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Position (column, row) of the first occurrence of `text` in the buffer
pub fn find_text(buf: &Buffer, text: &str) -> Option<(u16, u16)> {
    buffer_lines(buf).iter().enumerate().find_map(|(y, line)| {
        line.find(text)
            .map(|byte_idx| (line[..byte_idx].chars().count() as u16, y as u16))
    })
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    #[test]
    fn test_find_text_counts_columns_not_bytes() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        buf.set_string(0, 1, "●● 30", Style::default());
        assert_eq!(find_text(&buf, "30"), Some((3, 1)));
        assert_eq!(find_text(&buf, "40"), None);
    }
}
