pub mod error;
pub mod reader;
pub mod writer;

pub use error::{LineFault, LogError};
pub use reader::{parse_line, TrialLogReader};
pub use writer::write_log;
