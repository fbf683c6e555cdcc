// constants.rs - Application-wide Constants
//
// Centralized constants for colors, dimensions, and identity strings.

/// Color derivation
pub mod colors {
    /// Dimmed channel = primary channel * DIM_FACTOR
    pub const DIM_FACTOR: f64 = 0.4;
    /// 8-bit input channels are scaled by this to reach X11's 16-bit depth
    pub const CHANNEL_SCALE: u16 = 256;
}

/// Border thickness defaults
pub mod border {
    /// Default thickness of every side, in pixels
    pub const DEFAULT_WIDTH: u32 = 1;
    /// Separator used by the `t:r:b:l` specifier
    pub const SEPARATOR: char = ':';
}

/// Window identity
pub mod window {
    /// WM_CLASS general name
    pub const CLASS: &str = "rectframe";
    /// WM_CLASS instance name
    pub const INSTANCE: &str = "rectframe";
    /// Title shown by tools like xwininfo
    pub const TITLE: &str = "rectframe border";
}

/// Command line text
pub mod cli {
    pub const USAGE_ARGS: &str = "x y width height #RRGGBB [t:r:b:l]";
    pub const BORDER_FORMAT_MESSAGE: &str = "borders should be entered in the format 't:r:b:l'";
}
