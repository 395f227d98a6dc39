pub mod clash_output;
pub mod merge;

pub use clash_output::{render_output, render_pretty, OutputMode};
pub use merge::merge_configs;
