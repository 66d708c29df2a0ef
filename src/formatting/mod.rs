pub mod report;
pub mod summary;
pub mod utils;

pub use report::{render_error, render_outcome, render_report};
pub use summary::render_summary;
pub use utils::{format_deployment_status, format_relative_time, get_status_icon};
