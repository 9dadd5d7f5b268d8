pub mod app_config;
pub mod snapshot_repo;
pub mod memory_repo;
pub mod report;

pub use app_config::Config;
pub use snapshot_repo::JsonFileStore;
pub use memory_repo::MemoryStore;
pub use report::{render_report, ReportWriter};
