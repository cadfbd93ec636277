//! Render model for presentation collaborators.
//!
//! - `BoardView`: tiles, option labels, end tile, game-over overlay
//! - `Notice`: popup messages raised by a pick
//!
//! Renderers draw these and forward clicks back to the engine; they never
//! inspect correctness themselves.

pub mod board;
pub mod notice;

pub use board::{BoardView, OptionStyle, OptionView, Overlay, TileStatus, TileView, HIDDEN_LABEL};
pub use notice::{Notice, NoticeKind};
