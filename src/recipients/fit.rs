//! Fit-to-width truncation for a comma-joined recipient list.
//!
//! Widths are terminal cells as reported by `unicode-width`, which is also what
//! ratatui uses when it lays out a `Span`. Measuring here and drawing later
//! therefore agree cell for cell.

use unicode_width::UnicodeWidthStr;

/// Separator placed between recipients when they are joined for display.
pub const SEPARATOR: &str = ", ";

/// Marker drawn after the visible prefix when some recipients were trimmed.
pub const OVERFLOW_MARKER: &str = ",...";

/// Outcome of fitting a recipient list into a width budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fit {
    /// Length of the recipient prefix that fits.
    pub visible: usize,
    /// Recipients left over after the prefix.
    pub trimmed: usize,
}

/// Rendered width of `text` in terminal cells.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Smallest reserve that still leaves room for [`OVERFLOW_MARKER`].
pub const MIN_RESERVE: u16 = OVERFLOW_MARKER.len() as u16;

/// Cells available to recipient text once the reserved margin is taken out.
/// A reserve below [`MIN_RESERVE`] is raised to it so the marker is never clipped.
pub fn budget(container_width: u16, reserve: u16) -> usize {
    container_width.saturating_sub(reserve.max(MIN_RESERVE)) as usize
}

/// Longest prefix of `recipients` whose joined rendering fits in `budget` cells.
///
/// The prefix grows one recipient at a time and the joined text is re-measured at
/// every step; the first recipient that pushes it past the budget ends the scan
/// and everything from it onwards counts as trimmed.
pub fn fit_to_width<S: AsRef<str>>(recipients: &[S], budget: usize) -> Fit {
    let mut joined = String::new();

    for (i, recipient) in recipients.iter().enumerate() {
        let candidate = if i == 0 {
            recipient.as_ref().to_string()
        } else {
            format!("{}{}{}", joined, SEPARATOR, recipient.as_ref())
        };

        if display_width(&candidate) > budget {
            return Fit {
                visible: i,
                trimmed: recipients.len() - i,
            };
        }
        joined = candidate;
    }

    Fit {
        visible: recipients.len(),
        trimmed: 0,
    }
}
