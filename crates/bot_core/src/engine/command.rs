//! Commands ("orders") sent back to the simulator
//!
//! A tick's output is an ordered list; the simulator applies commands in
//! sequence and a later command may override an earlier one on the same
//! tick (e.g. move then catch).

use super::geometry::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Run to `target` at max speed
    Move { target: Point },
    /// Kick toward `target` at max speed
    Kick { target: Point },
    KickWithPower { target: Point, power: f64 },
    Catch,
    Jump { target: Point, height: f64 },
}

impl Command {
    pub fn move_to(target: Point) -> Self {
        Command::Move { target }
    }

    pub fn kick_max(target: Point) -> Self {
        Command::Kick { target }
    }

    pub fn kick_with_power(target: Point, power: f64) -> Self {
        Command::KickWithPower { target, power }
    }

    pub fn jump(target: Point, height: f64) -> Self {
        Command::Jump { target, height }
    }

    pub fn is_kick(&self) -> bool {
        matches!(self, Command::Kick { .. } | Command::KickWithPower { .. })
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Command::Move { .. })
    }

    pub fn target(&self) -> Option<Point> {
        match self {
            Command::Move { target }
            | Command::Kick { target }
            | Command::KickWithPower { target, .. }
            | Command::Jump { target, .. } => Some(*target),
            Command::Catch => None,
        }
    }
}
