//! Color tokens shared by every stylesheet.

pub const PRIMARY_BLUE: &str = "#1565c0";
pub const PRIMARY_RED: &str = "#c62828";
pub const PRIMARY_GREEN: &str = "#2e7d32";
pub const PRIMARY_WHITE: &str = "#f5f5f5";
pub const PLAIN_WHITE: &str = "#ffffff";
pub const PRIMARY_DARK_GRAY: &str = "#424242";
pub const PRIMARY_LIGHT_GRAY: &str = "#e0e0e0";
