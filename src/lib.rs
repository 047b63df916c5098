pub mod app;
pub mod logging;
pub mod recipients;
pub mod ui;
