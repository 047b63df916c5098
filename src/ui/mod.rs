pub mod layout;
pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::Theme;

use crate::app::App;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let frame_layout = layout::get_frame_layout(area, app.width_percent);

    // 1. Container
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme.surface))
        .title(Span::styled(
            " To ",
            Style::default()
                .fg(app.theme.blue)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(block, frame_layout.container);

    // 2. Recipients row (records the badge area)
    widgets::recipients::render(f, frame_layout.recipients, app);

    // 3. Footer hint
    let theme = &app.theme;
    let keys = &app.keys;
    let key_style = Style::default()
        .fg(theme.overlay)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(theme.overlay);
    let hint = Line::from(vec![
        Span::styled(format!(" {} ", keys.display(&keys.toggle_tooltip)), key_style),
        Span::styled("names", label_style),
        Span::styled(
            format!(" {}{} ", keys.display(&keys.shrink), keys.display(&keys.grow)),
            key_style,
        ),
        Span::styled("width", label_style),
        Span::styled(format!(" {} ", keys.display(&keys.quit)), key_style),
        Span::styled("quit", label_style),
    ]);
    f.render_widget(
        Paragraph::new(hint).alignment(Alignment::Right),
        frame_layout.footer,
    );

    // 4. Tooltip overlay
    widgets::tooltip::render(f, app);
}
