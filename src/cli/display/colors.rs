//! Color theme for CLI output

use comfy_table::Color as TableColor;

#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub error: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            error: TableColor::Red,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

/// Coarse classification of the free-form status strings the API returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Done,
    InProgress,
    Failed,
    Unknown,
}

impl StatusClass {
    pub fn of(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "ready" | "finished" | "succeeded" | "success" | "done" => Self::Done,
            "failed" | "error" | "cancelled" | "canceled" => Self::Failed,
            "" | "-" | "unknown" => Self::Unknown,
            _ => Self::InProgress,
        }
    }
}

impl ColorTheme {
    /// Get color for an instance or restore job status
    pub fn get_status_color(&self, status: &str) -> TableColor {
        match StatusClass::of(status) {
            StatusClass::Done => self.success,
            StatusClass::InProgress => self.warning,
            StatusClass::Failed => self.error,
            StatusClass::Unknown => self.muted,
        }
    }
}
