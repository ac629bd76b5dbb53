// Shared ANSI/VT100 control sequences used across the UI.

/// ESC (escape) as a byte value.
pub const ESC_BYTE: u8 = 0x1B;

#[macro_export]
macro_rules! csi {
    ($suffix:literal) => {
        concat!("\x1B[", $suffix)
    };
}

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Bold text.
pub const STYLE_BOLD: &str = crate::csi!("1m");
/// Italic text.
pub const STYLE_ITALIC: &str = crate::csi!("3m");
/// Light gray foreground.
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");
