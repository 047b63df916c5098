use super::config::user::{MAX_WIDTH_PERCENT, MIN_WIDTH_PERCENT};
use super::config::UserConfig;
use super::keys::KeyConfig;
use super::resize::ResizeDebouncer;
use crate::recipients::RecipientsDisplay;
use crate::ui::layout;
use crate::ui::Theme;
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Percentage points added or removed by one shrink/grow key press.
pub const WIDTH_STEP: u16 = 5;

pub struct App {
    pub is_running: bool,
    pub display: RecipientsDisplay,
    pub theme: Theme,
    pub keys: KeyConfig,
    pub width_percent: u16,
    /// Where the badge was last drawn, for pointer hit-testing
    pub badge_area: Option<Rect>,
    pub terminal_size: (u16, u16),
    pub resize: ResizeDebouncer,
}

impl App {
    pub fn new(recipients: Vec<String>, config: &UserConfig) -> Self {
        Self {
            is_running: true,
            display: RecipientsDisplay::new(recipients, config.reserve),
            theme: config.theme.clone(),
            keys: config.keys.clone(),
            width_percent: config.width_percent,
            badge_area: None,
            terminal_size: (0, 0),
            resize: ResizeDebouncer::new(Duration::from_millis(config.resize_debounce_ms)),
        }
    }

    /// Width of the recipients text region for a terminal of `cols` x `rows`.
    pub fn text_width_for(&self, cols: u16, rows: u16) -> u16 {
        let area = Rect::new(0, 0, cols, rows);
        layout::get_frame_layout(area, self.width_percent)
            .recipients
            .text
            .width
    }

    pub fn mount(&mut self, cols: u16, rows: u16) {
        self.terminal_size = (cols, rows);
        let width = self.text_width_for(cols, rows);
        self.display.mount(width);
    }

    pub fn unmount(&mut self) {
        self.display.unmount();
        self.badge_area = None;
    }

    fn apply_size(&mut self, cols: u16, rows: u16) {
        self.terminal_size = (cols, rows);
        let width = self.text_width_for(cols, rows);
        if self.display.resize(width) {
            debug!(
                width,
                visible = self.display.visible().len(),
                trimmed = self.display.trimmed_count(),
                "recipients refit"
            );
        }
    }

    pub fn on_terminal_resize(&mut self, cols: u16, rows: u16, now: Instant) {
        if let Some((cols, rows)) = self.resize.push((cols, rows), now) {
            self.apply_size(cols, rows);
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        if let Some((cols, rows)) = self.resize.poll(now) {
            self.apply_size(cols, rows);
        }
    }

    pub fn set_recipients(&mut self, recipients: Vec<String>) {
        info!(count = recipients.len(), "recipients updated");
        self.display.set_recipients(recipients);
    }

    /// Container width changes are applied at once; only terminal resizes are debounced.
    pub fn set_width_percent(&mut self, percent: u16) {
        let percent = percent.clamp(MIN_WIDTH_PERCENT, MAX_WIDTH_PERCENT);
        if percent == self.width_percent {
            return;
        }
        self.width_percent = percent;
        let (cols, rows) = self.terminal_size;
        self.apply_size(cols, rows);
    }

    pub fn shrink(&mut self) {
        self.set_width_percent(self.width_percent.saturating_sub(WIDTH_STEP));
    }

    pub fn grow(&mut self) {
        self.set_width_percent(self.width_percent.saturating_add(WIDTH_STEP));
    }

    pub fn on_pointer(&mut self, column: u16, row: u16) {
        let over_badge = self
            .badge_area
            .is_some_and(|area| area.contains(Position::new(column, row)));
        self.display.hover_badge(over_badge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let recipients = ["Ada Lovelace", "Grace Hopper", "Alan Turing", "Barbara Liskov"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let config = UserConfig {
            resize_debounce_ms: 0,
            ..Default::default()
        };
        App::new(recipients, &config)
    }

    #[test]
    fn test_mount_measures_from_terminal_size() {
        let mut app = app();
        app.mount(120, 24);
        // 120 - 2 border - 6 badge column
        assert_eq!(app.display.container_width(), Some(112));
        assert_eq!(app.display.trimmed_count(), 0);
    }

    #[test]
    fn test_resize_refits() {
        let mut app = app();
        app.mount(120, 24);
        // Text region 30, budget 26
        app.on_terminal_resize(38, 24, Instant::now());
        assert_eq!(app.display.container_width(), Some(30));
        assert_eq!(app.display.trimmed_count(), 2);
    }

    #[test]
    fn test_debounced_resize_waits_for_tick() {
        let config = UserConfig {
            resize_debounce_ms: 50,
            ..Default::default()
        };
        let mut app = App::new(vec!["Ada".into(), "Grace".into()], &config);
        app.mount(120, 24);

        let start = Instant::now();
        app.on_terminal_resize(10, 24, start);
        assert_eq!(app.display.container_width(), Some(112));

        app.on_tick(start + Duration::from_millis(10));
        assert_eq!(app.display.container_width(), Some(112));

        app.on_tick(start + Duration::from_millis(60));
        assert_eq!(app.display.container_width(), Some(2));
        assert_eq!(app.display.trimmed_count(), 2);
    }

    #[test]
    fn test_width_keys_clamp() {
        let mut app = app();
        app.mount(120, 24);
        app.grow();
        assert_eq!(app.width_percent, 100);

        for _ in 0..30 {
            app.shrink();
        }
        assert_eq!(app.width_percent, MIN_WIDTH_PERCENT);
        assert_eq!(app.display.container_width(), Some(16));
    }

    #[test]
    fn test_pointer_over_badge_toggles_tooltip() {
        let mut app = app();
        app.mount(38, 24);
        app.badge_area = Some(Rect::new(31, 1, 6, 1));

        app.on_pointer(33, 1);
        assert!(app.display.tooltip_visible());

        app.on_pointer(10, 1);
        assert!(!app.display.tooltip_visible());
    }

    #[test]
    fn test_pointer_leave_keeps_keyboard_tooltip() {
        let mut app = app();
        app.mount(38, 24);
        app.badge_area = Some(Rect::new(33, 1, 4, 1));

        app.display.toggle_tooltip();
        app.on_pointer(10, 5);
        assert!(app.display.tooltip_visible());

        app.on_pointer(34, 1);
        app.on_pointer(10, 5);
        assert!(app.display.tooltip_visible());

        app.display.toggle_tooltip();
        assert!(!app.display.tooltip_visible());
    }
}
