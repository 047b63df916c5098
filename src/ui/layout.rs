use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Columns kept free on the right of the recipients row for the `+N` badge.
pub const BADGE_COLUMN_WIDTH: u16 = 6;

/// Rows taken by the bordered recipients container.
pub const CONTAINER_HEIGHT: u16 = 3;

pub struct MainLayout {
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect) -> MainLayout {
    // Footer needs 1 line at the bottom always
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    MainLayout {
        body_area: chunks[0],
        footer_area: chunks[1],
    }
}

/// The bordered box holding the recipients row, `width_percent` of the body wide.
pub fn get_container_area(body: Rect, width_percent: u16) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CONTAINER_HEIGHT), Constraint::Min(0)])
        .split(body);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(width_percent.min(100)),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    cols[0]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipientsLayout {
    pub text: Rect,
    pub badge: Rect,
}

/// Split a single row into the text region and the fixed badge column.
pub fn get_recipients_layout(row: Rect) -> RecipientsLayout {
    let badge_width = BADGE_COLUMN_WIDTH.min(row.width);
    let text = Rect::new(row.x, row.y, row.width - badge_width, row.height.min(1));
    let badge = Rect::new(text.right(), row.y, badge_width, row.height.min(1));
    RecipientsLayout { text, badge }
}

pub struct FrameLayout {
    pub container: Rect,
    pub recipients: RecipientsLayout,
    pub footer: Rect,
}

/// Everything the frame needs, derived from the terminal area alone so that the
/// renderer, the resize handler and pointer hit-testing agree.
pub fn get_frame_layout(area: Rect, width_percent: u16) -> FrameLayout {
    let main = get_main_layout(area);
    let container = get_container_area(main.body_area, width_percent);

    // Inside the rounded border
    let row = Rect::new(
        container.x.saturating_add(1),
        container.y.saturating_add(1),
        container.width.saturating_sub(2),
        container.height.saturating_sub(2).min(1),
    );

    FrameLayout {
        container,
        recipients: get_recipients_layout(row),
        footer: main.footer_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipients_row_split() {
        let layout = get_recipients_layout(Rect::new(1, 1, 40, 1));
        assert_eq!(layout.text, Rect::new(1, 1, 34, 1));
        assert_eq!(layout.badge, Rect::new(35, 1, 6, 1));
    }

    #[test]
    fn test_row_narrower_than_badge_column() {
        let layout = get_recipients_layout(Rect::new(0, 0, 4, 1));
        assert_eq!(layout.text.width, 0);
        assert_eq!(layout.badge.width, 4);
    }

    #[test]
    fn test_full_width_frame() {
        let frame = get_frame_layout(Rect::new(0, 0, 80, 24), 100);
        assert_eq!(frame.container, Rect::new(0, 0, 80, 3));
        assert_eq!(frame.recipients.text, Rect::new(1, 1, 72, 1));
        assert_eq!(frame.recipients.badge, Rect::new(73, 1, 6, 1));
        assert_eq!(frame.footer, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_container_shrinks_with_percentage() {
        let wide = get_frame_layout(Rect::new(0, 0, 100, 24), 100);
        let narrow = get_frame_layout(Rect::new(0, 0, 100, 24), 50);
        assert_eq!(narrow.container.width, 50);
        assert!(narrow.recipients.text.width < wide.recipients.text.width);
    }
}
