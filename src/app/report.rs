use crate::recipients::RecipientsDisplay;
use serde::Serialize;

/// What the widget decided for a given container width, for `--measure`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasureReport {
    pub width: u16,
    pub reserve: u16,
    pub visible: Vec<String>,
    pub trimmed: usize,
    pub hidden: String,
    pub badge: bool,
}

impl MeasureReport {
    pub fn measure(recipients: Vec<String>, width: u16, reserve: u16) -> Self {
        let mut display = RecipientsDisplay::new(recipients, reserve);
        display.mount(width);
        Self::from_display(&display)
    }

    pub fn from_display(display: &RecipientsDisplay) -> Self {
        Self {
            width: display.container_width().unwrap_or(0),
            reserve: display.reserve(),
            visible: display.visible().to_vec(),
            trimmed: display.trimmed_count(),
            hidden: if display.shows_badge() {
                display.hidden_recipients()
            } else {
                String::new()
            },
            badge: display.shows_badge(),
        }
    }
}
