pub mod analyzer;
pub mod args;
pub mod error;
pub mod level;
pub mod message;
pub mod rank;
pub mod report;
pub mod stats;
pub mod utils;

pub use analyzer::{analyze_log_file, ingest_reader, run};
pub use args::{parse_config, Args, RunConfig};
pub use error::LogtallyError;
pub use level::{classify, Level};
pub use message::extract_message;
pub use rank::{rank, RankedEntry};
pub use report::render;
pub use stats::Stats;
