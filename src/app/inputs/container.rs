use crate::app::App;
use crossterm::event::KeyEvent;

pub fn handle_container_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = app.keys.clone(); // Clone keys to avoid borrowing app

    if keys.matches(key, &keys.shrink) {
        app.shrink();
        return true;
    }
    if keys.matches(key, &keys.grow) {
        app.grow();
        return true;
    }
    false
}
