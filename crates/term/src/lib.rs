//! Terminal front end for the falling-blocks engine.
//!
//! The engine reports changes through its renderer callbacks; [`Screen`]
//! records them, [`GameView`] lays the recorded state out into a
//! [`FrameBuffer`], and [`TerminalRenderer`] flushes that buffer to the
//! terminal, redrawing only the cells that changed.
//!
//! Board cells are drawn two columns wide to compensate for the aspect
//! ratio of typical terminal glyphs.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
pub use screen::Screen;
