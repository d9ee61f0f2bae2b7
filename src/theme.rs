//! Color palette and filesystem locations for Sourcedex.
//!
//! The palette is a small, opinionated set of colors used directly by the
//! rendering code. The path helpers resolve the per-user config and log
//! directories, creating them on first use.

use std::path::PathBuf;

use ratatui::style::Color;

/// Application theme palette used by rendering code.
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Subtle surface color behind the selection highlight.
    pub surface1: Color,
    /// Muted border/line color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent for the input cursor and interactive highlights.
    pub sapphire: Color,
    /// Accent for active filter values.
    pub mauve: Color,
    /// Warning/attention color (17+ badge).
    pub yellow: Color,
    /// Error/danger color (18+ badge, error screen).
    pub red: Color,
    /// Accent for section headers.
    pub lavender: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
const fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Return the application's default theme palette.
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        base: hex((0x1e, 0x1e, 0x2e)),
        surface1: hex((0x45, 0x47, 0x5a)),
        overlay1: hex((0x7f, 0x84, 0x9c)),
        text: hex((0xcd, 0xd6, 0xf4)),
        subtext0: hex((0xa6, 0xad, 0xc8)),
        sapphire: hex((0x74, 0xc7, 0xec)),
        mauve: hex((0xcb, 0xa6, 0xf7)),
        yellow: hex((0xf9, 0xe2, 0xaf)),
        red: hex((0xf3, 0x8b, 0xa8)),
        lavender: hex((0xb4, 0xbe, 0xfe)),
    }
}

/// Resolve the base user config directory (`$XDG_CONFIG_HOME` or `~/.config`).
fn home_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
}

/// What: Application config directory, created on first use.
///
/// Output:
/// - `~/.config/sourcedex` (or the XDG equivalent), falling back to the
///   working directory when no home is resolvable.
#[must_use]
pub fn config_dir() -> PathBuf {
    let dir = home_config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sourcedex");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Log directory under the config directory, created on first use.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
