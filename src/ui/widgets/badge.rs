use crate::recipients::fit::display_width;
use crate::ui::utils::truncate;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// ` +N ` when it fits in `width` cells, then bare `+N`, then `+N` clipped with
/// an ellipsis. The `+` always survives.
pub fn label(trimmed: usize, width: u16) -> String {
    let padded = format!("\u{00A0}+{}\u{00A0}", trimmed);
    if display_width(&padded) <= width as usize {
        return padded;
    }
    truncate(&format!("+{}", trimmed), width as usize)
}

/// Cells the pill actually covers: the label, flush with the right edge of `area`.
pub fn pill_area(area: Rect, trimmed: usize) -> Rect {
    let width = (display_width(&label(trimmed, area.width)) as u16).min(area.width);
    Rect::new(area.right() - width, area.y, width, area.height)
}

/// `+N` pill, right-aligned in its column. Highlighted while the tooltip is open.
pub fn render(f: &mut Frame, area: Rect, trimmed: usize, active: bool, theme: &Theme) {
    let pill = pill_area(area, trimmed);
    if pill.is_empty() {
        return;
    }

    let bg = if active { theme.magenta } else { theme.blue };
    let badge = Paragraph::new(Line::from(Span::styled(
        label(trimmed, area.width),
        Style::default()
            .fg(theme.base)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));

    f.render_widget(badge, pill);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::BADGE_COLUMN_WIDTH;

    #[test]
    fn test_label_padding_dropped_before_plus() {
        assert_eq!(label(3, BADGE_COLUMN_WIDTH), "\u{00A0}+3\u{00A0}");
        assert_eq!(label(9999, BADGE_COLUMN_WIDTH), "+9999");
        assert_eq!(label(12345, BADGE_COLUMN_WIDTH), "+12345");
        assert_eq!(label(1234567, BADGE_COLUMN_WIDTH), "+1234…");
    }

    #[test]
    fn test_pill_area_hugs_label() {
        let slot = Rect::new(31, 1, BADGE_COLUMN_WIDTH, 1);
        assert_eq!(pill_area(slot, 2), Rect::new(33, 1, 4, 1));
        assert_eq!(pill_area(slot, 10_000), Rect::new(31, 1, 6, 1));
        assert!(pill_area(Rect::new(0, 0, 0, 1), 2).is_empty());
    }
}
