pub mod output;
pub mod progress;

pub use output::{completion_lines, OutputFormatter, OutputMode};
pub use progress::ProgressManager;
