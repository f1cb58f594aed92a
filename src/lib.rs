//! Terminal maze-chase game engine.
//!
//! A [`game::Game`] owns the maze and every entity in it. The
//! [`driver::run`] loop draws it, feeds it at most one key per tick from the
//! [`input`] channel, and moves ghosts with a pluggable
//! [`ghost::DirectionSource`].

pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod ghost;
pub mod input;
pub mod level;
pub mod movement;
pub mod render;
pub mod terminal;

pub use error::{Error, Result};
