// Export our modules for use in binaries and tests
pub mod animation;
pub mod app;
pub mod chart;
pub mod config;
pub mod db;
pub mod domain;
pub mod export;
pub mod filter;
pub mod logging;
pub mod storage;

pub use domain::{Page, StatKind};
