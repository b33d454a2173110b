pub mod api;
pub mod cli;
pub mod config;
pub mod form;
pub mod logging;
pub mod shutdown;
