//! Rendering module
//!
//! The core never touches a graphics API. [`scene::draw`] turns a
//! [`GameState`](crate::sim::GameState) into an ordered list of
//! [`DrawCommand`]s, and a backend replays that list. The terminal backend in
//! [`terminal`] is the one the bundled binary uses.

pub mod commands;
pub mod hud;
pub mod scene;
pub mod terminal;

pub use commands::{AssetId, Color, DrawCommand, Font, TextAlign, colors};
pub use scene::draw;
pub use terminal::{Canvas, Cell, Palette, rasterize};
