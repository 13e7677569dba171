//! Robots: a turn-based grid game. The player dodges or fights randomly
//! wandering robots until either the player is caught or every robot is gone.

pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod player;
pub mod render;
pub mod robot;
pub mod types;
pub mod utils;
