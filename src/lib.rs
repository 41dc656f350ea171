pub mod batch;
pub mod config;
pub mod logging;

pub use batch::{BatchConverter, Outcome, WorkItem, VIDEO_FILES};
pub use config::Config;
