//! Layout helpers shared by components.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A rectangle of fixed size centered in `area`, shrunk to fit when `area`
/// is smaller.
///
/// # Example
/// ```rust,ignore
/// let parent = Rect::new(0, 0, 100, 50);
/// let popup = centered_fixed(40, 7, parent);
/// assert_eq!(popup, Rect::new(30, 22, 40, 7));
/// ```
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Truncates `text` to `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fixed_is_centered_and_clamped() {
        assert_eq!(centered_fixed(40, 7, Rect::new(0, 0, 100, 50)), Rect::new(30, 22, 40, 7));
        assert_eq!(centered_fixed(40, 7, Rect::new(0, 0, 20, 5)), Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("Ana Silva", 20), "Ana Silva");
        assert_eq!(truncate("Ana Silva", 5), "Ana …");
    }
}
