//! The recipients widget: fitting names to a width and tracking what was trimmed.

pub mod display;
pub mod fit;
pub mod source;

pub use display::RecipientsDisplay;
pub use fit::{fit_to_width, Fit};
pub use source::RecipientsError;
