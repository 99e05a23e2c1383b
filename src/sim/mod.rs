//! Simulation: the controllable shape and its constants.

mod config;
mod player;

pub use config::SimConfig;
pub use player::{drift_speed, Player};
