//! Tournament Runner
//!
//! This crate provides infrastructure for:
//! - Running matches between move strategies from the standard starting board
//! - Recording every game as a move log plus the pieces each side lost
//! - Saving match results as JSON for later comparison

mod config;
mod game;
mod match_runner;
mod results;

pub use config::*;
pub use game::*;
pub use match_runner::*;
pub use results::*;
