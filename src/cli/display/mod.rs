//! Display module for formatted CLI output

pub mod colors;
pub mod icons;
pub mod output;
pub mod printer;
pub mod table;

pub use colors::ColorTheme;
pub use icons::StatusIcon;
pub use output::render_update_result;
pub use printer::Printer;
pub use table::TableRenderer;
