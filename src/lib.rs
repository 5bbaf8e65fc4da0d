pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod event;
pub mod interpret;
pub mod logging;
pub mod model;
pub mod view;
