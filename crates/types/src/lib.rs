//! Shared types and constants for the falling-blocks workspace.
//!
//! Everything here is plain data with no dependencies, so the engine, the
//! terminal front end and tests can all agree on the same vocabulary.
//!
//! # Board
//!
//! - **Width**: 12 columns by default (indexed 0-11)
//! - **Height**: 20 rows by default (indexed 0-19)
//! - **Spawn**: column `width / 2 - 1`, row -1 (one above the visible area)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_INTERVAL_MS` | 750 | Gravity interval at level 1 |
//! | `MIN_INTERVAL_MS` | 100 | Asymptotic floor added at higher levels |
//! | `TICK_MS` | 16 | Host loop timestep (~60 FPS) |
//! | `SOFT_DROP_RELEASE_MS` | 150 | Synthetic key release for terminals without release events |
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{Command, Rgb, DEFAULT_BOARD_WIDTH};
//!
//! assert_eq!(Command::from_str("softDropBegin"), Some(Command::SoftDropBegin));
//! assert_eq!(Command::Rotate.as_str(), "rotate");
//! assert_eq!(Rgb::from_hex("#264653"), Some(Rgb::new(0x26, 0x46, 0x53)));
//! assert_eq!(DEFAULT_BOARD_WIDTH, 12);
//! ```

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: usize = 12;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: usize = 20;

/// Row new pieces are anchored at, one above the visible grid
pub const SPAWN_ROW: i32 = -1;

/// Gravity interval at level 1
pub const MAX_INTERVAL_MS: u64 = 750;

/// Added to the scaled interval from level 2 on
pub const MIN_INTERVAL_MS: u64 = 100;

/// Points per cleared row (before the multi-row bonus)
pub const SCORE_MULTIPLIER: u32 = 10;

/// Score distance between level-ups
pub const LEVEL_BREAKPOINT: u32 = 100;

/// Host loop timestep in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Soft drop is released after this long without a key repeat.
pub const SOFT_DROP_RELEASE_MS: u32 = 150;

/// Piece palette, one color per catalog shape.
pub const PALETTE: [Rgb; 5] = [
    Rgb::new(0x26, 0x46, 0x53),
    Rgb::new(0x2a, 0x9d, 0x8f),
    Rgb::new(0xe9, 0xc4, 0x6a),
    Rgb::new(0xf4, 0xa2, 0x61),
    Rgb::new(0xe7, 0x6f, 0x51),
];

/// 24-bit RGB color used to tag shapes and locked cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string.
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_blocks_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("e76f51"), Some(Rgb::new(0xe7, 0x6f, 0x51)));
    /// assert_eq!(Rgb::from_hex("#12345"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb` representation
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A cell on the grid
///
/// - `None`: empty
/// - `Some(color)`: locked, holding the color of the shape that filled it
pub type Cell = Option<Rgb>;

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for one step in this direction
    pub fn dx(&self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Commands a host can send to the engine
///
/// Input devices and scripted drivers both speak this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Start (or restart) a game
    Start,
    /// Suspend gravity
    Pause,
    /// Resume gravity after a pause
    Resume,
    /// Pause when running, resume when paused
    TogglePause,
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Down key pressed: cancel gravity and step down once
    SoftDropBegin,
    /// Down key released: restart gravity
    SoftDropEnd,
    /// Rotate the active piece 90° clockwise
    Rotate,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_blocks_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("TOGGLEPAUSE"), Some(Command::TogglePause));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Command::Start),
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            "togglepause" => Some(Command::TogglePause),
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdropbegin" => Some(Command::SoftDropBegin),
            "softdropend" => Some(Command::SoftDropEnd),
            "rotate" => Some(Command::Rotate),
            _ => None,
        }
    }

    /// camelCase name of the command
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::TogglePause => "togglePause",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDropBegin => "softDropBegin",
            Command::SoftDropEnd => "softDropEnd",
            Command::Rotate => "rotate",
        }
    }
}
