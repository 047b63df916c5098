use crate::app::App;
use crossterm::event::{Event, MouseEventKind};
use std::time::Instant;

pub mod common;
pub mod container;

pub fn handle_event(event: Event, app: &mut App) {
    match event {
        Event::Key(key) => {
            // 1. Global keys (quit, tooltip)
            if common::handle_common_events(key, app) {
                return;
            }
            // 2. Container width
            container::handle_container_events(key, app);
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                app.on_pointer(mouse.column, mouse.row);
            }
            _ => {}
        },
        Event::Resize(cols, rows) => app.on_terminal_resize(cols, rows, Instant::now()),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::UserConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

    fn app() -> App {
        let config = UserConfig {
            resize_debounce_ms: 0,
            ..Default::default()
        };
        let mut app = App::new(
            vec!["Ada Lovelace".into(), "Grace Hopper".into(), "Alan Turing".into()],
            &config,
        );
        app.mount(120, 24);
        app
    }

    fn press(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_resize_event_refits() {
        let mut app = app();
        handle_event(Event::Resize(30, 24), &mut app);
        assert_eq!(app.display.container_width(), Some(22));
        assert!(app.display.trimmed_count() > 0);
    }

    #[test]
    fn test_mouse_motion_hovers_badge() {
        let mut app = app();
        handle_event(Event::Resize(30, 24), &mut app);
        app.badge_area = Some(ratatui::layout::Rect::new(23, 1, 6, 1));

        let moved = |column, row| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })
        };
        handle_event(moved(25, 1), &mut app);
        assert!(app.display.tooltip_visible());
        handle_event(moved(2, 5), &mut app);
        assert!(!app.display.tooltip_visible());
    }

    #[test]
    fn test_width_keys_route_to_container() {
        let mut app = app();
        handle_event(press('['), &mut app);
        assert_eq!(app.width_percent, 95);
        handle_event(press(']'), &mut app);
        assert_eq!(app.width_percent, 100);
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        handle_event(press('q'), &mut app);
        assert!(!app.is_running);
    }
}
