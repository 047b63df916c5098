use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_common_events(key: KeyEvent, app: &mut App) -> bool {
    if key.kind == KeyEventKind::Release {
        return true;
    }

    let keys = &app.keys;

    // Ctrl-C always quits, whatever the bindings say
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.is_running = false;
        return true;
    }

    // Quit closes the tooltip first (Neovim-style)
    if keys.matches(key, &keys.quit) {
        if app.display.tooltip_visible() {
            app.display.close_tooltip();
        } else {
            app.is_running = false;
        }
        return true;
    }

    if keys.matches(key, &keys.toggle_tooltip) {
        app.display.toggle_tooltip();
        return true;
    }

    if keys.matches(key, &keys.close_tooltip) && app.display.tooltip_visible() {
        app.display.close_tooltip();
        return true;
    }

    false
}
