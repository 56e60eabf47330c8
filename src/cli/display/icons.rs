//! Status icons for CLI output

use super::colors::StatusClass;

pub struct StatusIcon;

impl StatusIcon {
    pub const SUCCESS: &'static str = "✓";

    pub const WARNING: &'static str = "⚠";

    pub const ERROR: &'static str = "✗";

    /// Operation still running
    pub const PENDING: &'static str = "⏳";

    pub const UNKNOWN: &'static str = "?";

    /// Marks the newest entry in a version list
    pub const LATEST: &'static str = "★";

    pub fn get_status_icon(status: &str) -> &'static str {
        match StatusClass::of(status) {
            StatusClass::Done => Self::SUCCESS,
            StatusClass::InProgress => Self::PENDING,
            StatusClass::Failed => Self::ERROR,
            StatusClass::Unknown => Self::UNKNOWN,
        }
    }
}
