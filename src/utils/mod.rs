pub mod format_utils;
pub mod maths_utils;
pub mod time_utils;

pub use format_utils::format_usd;
pub use time_utils::TimeUtils;
