use super::fit::{self, Fit, SEPARATOR};
use tracing::{debug, trace};

/// State behind the recipients widget.
///
/// The widget is "mounted" once it knows the width of its container. Until then
/// nothing is measured and resizes are ignored.
#[derive(Debug, Clone)]
pub struct RecipientsDisplay {
    recipients: Vec<String>,
    reserve: u16,
    container_width: Option<u16>,
    fit: Fit,
    tooltip_visible: bool,
    /// Opened from the keyboard; pointer-leave does not close it
    tooltip_pinned: bool,
}

impl RecipientsDisplay {
    pub fn new(recipients: Vec<String>, reserve: u16) -> Self {
        Self {
            recipients,
            reserve,
            container_width: None,
            fit: Fit::default(),
            tooltip_visible: false,
            tooltip_pinned: false,
        }
    }

    pub fn mount(&mut self, width: u16) {
        debug!(width, count = self.recipients.len(), "recipients widget mounted");
        self.container_width = Some(width);
        self.measure();
    }

    pub fn unmount(&mut self) {
        debug!("recipients widget unmounted");
        self.container_width = None;
        self.close_tooltip();
    }

    pub fn is_mounted(&self) -> bool {
        self.container_width.is_some()
    }

    pub fn container_width(&self) -> Option<u16> {
        self.container_width
    }

    /// Remeasure for a new container width. Returns true when the split between
    /// visible and trimmed recipients changed.
    pub fn resize(&mut self, width: u16) -> bool {
        if !self.is_mounted() {
            trace!(width, "resize before mount, skipping measurement");
            return false;
        }
        let before = self.fit;
        self.container_width = Some(width);
        self.measure();
        before != self.fit
    }

    pub fn set_recipients(&mut self, recipients: Vec<String>) {
        self.recipients = recipients;
        self.measure();
    }

    pub fn set_reserve(&mut self, reserve: u16) {
        self.reserve = reserve;
        self.measure();
    }

    pub fn reserve(&self) -> u16 {
        self.reserve
    }

    fn measure(&mut self) {
        let Some(width) = self.container_width else {
            self.fit = Fit::default();
            return;
        };

        self.fit = if self.is_single() {
            // A lone recipient is drawn whole and clipped with an ellipsis
            Fit {
                visible: 1,
                trimmed: 0,
            }
        } else {
            fit::fit_to_width(&self.recipients, fit::budget(width, self.reserve))
        };

        if !self.shows_badge() {
            self.close_tooltip();
        }

        debug!(
            width,
            visible = self.fit.visible,
            trimmed = self.fit.trimmed,
            "measured recipients"
        );
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    pub fn visible(&self) -> &[String] {
        &self.recipients[..self.fit.visible.min(self.recipients.len())]
    }

    pub fn trimmed_count(&self) -> usize {
        self.fit.trimmed
    }

    pub fn is_single(&self) -> bool {
        self.recipients.len() == 1
    }

    pub fn shows_badge(&self) -> bool {
        !self.is_single() && self.fit.trimmed > 0
    }

    /// `,...` follows the visible names only when there are names to follow.
    pub fn shows_overflow_marker(&self) -> bool {
        self.shows_badge() && self.fit.visible > 0
    }

    pub fn hidden(&self) -> &[String] {
        &self.recipients[self.visible().len()..]
    }

    /// Trimmed recipients, comma-joined in their original order.
    pub fn hidden_recipients(&self) -> String {
        self.hidden().join(SEPARATOR)
    }

    pub fn visible_text(&self) -> String {
        self.visible().join(SEPARATOR)
    }

    pub fn tooltip_visible(&self) -> bool {
        self.tooltip_visible
    }

    /// Pointer entered or left the badge. Leaving only closes a tooltip the
    /// pointer opened.
    pub fn hover_badge(&mut self, hovering: bool) {
        if hovering {
            self.tooltip_visible = self.shows_badge();
        } else if !self.tooltip_pinned {
            self.tooltip_visible = false;
        }
    }

    pub fn toggle_tooltip(&mut self) {
        if self.tooltip_visible {
            self.close_tooltip();
        } else if self.shows_badge() {
            self.tooltip_visible = true;
            self.tooltip_pinned = true;
        }
    }

    pub fn close_tooltip(&mut self) {
        self.tooltip_visible = false;
        self.tooltip_pinned = false;
    }
}
