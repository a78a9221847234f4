pub mod api;
pub mod args;
pub mod config;
pub mod habit;
pub mod logging;
pub mod ui;
pub mod worker;
