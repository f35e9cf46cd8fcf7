//! Lost Rovers game library
//!
//! Tile-based exploration game logic that runs without any graphical front-end.

pub mod game;
