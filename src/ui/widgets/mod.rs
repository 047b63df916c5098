pub mod badge;
pub mod recipients;
pub mod tooltip;
