pub mod status;

pub use status::{fetch_and_print, handle_status};
