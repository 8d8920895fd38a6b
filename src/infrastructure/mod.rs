// Infrastructure module - Config files and logging setup
pub mod config;
pub mod logging;
