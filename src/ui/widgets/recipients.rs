use crate::app::App;
use crate::recipients::fit::OVERFLOW_MARKER;
use crate::ui::layout::RecipientsLayout;
use crate::ui::utils::truncate;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::badge;

/// Draw the recipients row and remember where the badge landed for hit-testing.
pub fn render(f: &mut Frame, layout: RecipientsLayout, app: &mut App) {
    let theme = &app.theme;
    let display = &app.display;

    if !display.is_mounted() {
        app.badge_area = None;
        return;
    }

    let text_style = Style::default().fg(theme.text);

    let line = if display.is_single() {
        let name = &display.recipients()[0];
        Line::from(Span::styled(
            truncate(name, layout.text.width as usize),
            text_style,
        ))
    } else {
        let mut spans = vec![Span::styled(display.visible_text(), text_style)];
        if display.shows_overflow_marker() {
            spans.push(Span::styled(
                OVERFLOW_MARKER,
                Style::default()
                    .fg(theme.overlay)
                    .add_modifier(Modifier::DIM),
            ));
        }
        Line::from(spans)
    };
    f.render_widget(Paragraph::new(line), layout.text);

    if display.shows_badge() {
        badge::render(
            f,
            layout.badge,
            display.trimmed_count(),
            display.tooltip_visible(),
            theme,
        );
        app.badge_area = Some(badge::pill_area(layout.badge, display.trimmed_count()));
    } else {
        app.badge_area = None;
    }
}
