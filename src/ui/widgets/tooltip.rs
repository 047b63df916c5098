use crate::app::App;
use crate::recipients::fit::display_width;
use crate::ui::utils::wrap_names;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Hidden recipients in a popup pinned to the top-right corner of the frame.
pub fn render(f: &mut Frame, app: &App) {
    let display = &app.display;
    if !display.tooltip_visible() {
        return;
    }

    let theme = &app.theme;
    let screen = f.area();
    if screen.width < 6 || screen.height < 3 {
        return;
    }

    // Borders take two columns, padding another two
    let max_inner = screen.width.saturating_sub(6) as usize;
    let text_width = display_width(&display.hidden_recipients());
    let inner = text_width.min(max_inner).max(1);

    let lines: Vec<Line> = wrap_names(display.hidden(), inner)
        .into_iter()
        .map(Line::from)
        .collect();

    let width = inner as u16 + 4;
    let height = (lines.len() as u16 + 2).min(screen.height);
    let x = screen.width.saturating_sub(width + 1);
    let area = Rect::new(x, 0, width, height).intersection(screen);

    if area.is_empty() {
        return;
    }

    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.tooltip_bg))
        .style(Style::default().bg(theme.tooltip_bg).fg(theme.tooltip_fg));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let padded = Rect::new(
        inner_area.x.saturating_add(1),
        inner_area.y,
        inner_area.width.saturating_sub(2),
        inner_area.height,
    );
    f.render_widget(Paragraph::new(lines), padded);
}
