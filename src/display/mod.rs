//! Display formatting for terminal output

pub mod notice;
pub mod status;

pub use notice::{Notice, NoticeKind};
pub use status::{format_history, format_status_details, format_status_line};
