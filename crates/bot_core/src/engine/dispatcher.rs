//! Mode dispatcher
//!
//! The host computes the agent's mode each tick (from role and ball
//! possession); the dispatcher only routes it to the matching strategy
//! callback. It keeps no state between calls.
//!
//! Per-tick failures are logged and turned into an empty command list.
//! Formation table defects are not swallowed: they come back as `Err`.

use super::command::Command;
use super::snapshot::Snapshot;
use crate::behaviors::Strategy;
use crate::error::{DecisionError, FormationError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{error, warn};

/// Player state as reported by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerState {
    Supporting,
    HoldingTheBall,
    Defending,
    DisputingTheBall,
}

/// Which behavior runs this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Disputing,
    Defending,
    Holding,
    Supporting,
    /// Goalkeeper, keyed by its raw player state
    Goalkeeping(PlayerState),
}

impl Mode {
    /// Route the simulator's player state, with goalkeepers always handled
    /// by the goalkeeper behavior.
    pub fn from_role(is_goalkeeper: bool, state: PlayerState) -> Mode {
        if is_goalkeeper {
            return Mode::Goalkeeping(state);
        }
        match state {
            PlayerState::Supporting => Mode::Supporting,
            PlayerState::HoldingTheBall => Mode::Holding,
            PlayerState::Defending => Mode::Defending,
            PlayerState::DisputingTheBall => Mode::Disputing,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Disputing => write!(f, "disputing"),
            Mode::Defending => write!(f, "defending"),
            Mode::Holding => write!(f, "holding"),
            Mode::Supporting => write!(f, "supporting"),
            Mode::Goalkeeping(PlayerState::Defending) => write!(f, "goalkeeping-defending"),
            Mode::Goalkeeping(PlayerState::HoldingTheBall) => write!(f, "goalkeeping-holding"),
            Mode::Goalkeeping(PlayerState::Supporting) => write!(f, "goalkeeping-supporting"),
            Mode::Goalkeeping(PlayerState::DisputingTheBall) => {
                write!(f, "goalkeeping-disputing")
            }
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "disputing" => Mode::Disputing,
            "defending" => Mode::Defending,
            "holding" => Mode::Holding,
            "supporting" => Mode::Supporting,
            "goalkeeping-defending" => Mode::Goalkeeping(PlayerState::Defending),
            "goalkeeping-holding" => Mode::Goalkeeping(PlayerState::HoldingTheBall),
            "goalkeeping" | "goalkeeping-supporting" => {
                Mode::Goalkeeping(PlayerState::Supporting)
            }
            "goalkeeping-disputing" => Mode::Goalkeeping(PlayerState::DisputingTheBall),
            other => return Err(format!("unrecognized mode '{other}'")),
        };
        Ok(mode)
    }
}

pub struct Dispatcher<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> Dispatcher<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Runs exactly one behavior for `mode`.
    pub fn dispatch(
        &mut self,
        mode: Mode,
        snapshot: &Snapshot,
    ) -> Result<Vec<Command>, FormationError> {
        let outcome = match mode {
            Mode::Disputing => self.strategy.on_disputing(snapshot),
            Mode::Defending => self.strategy.on_defending(snapshot),
            Mode::Holding => self.strategy.on_holding(snapshot),
            Mode::Supporting => self.strategy.on_supporting(snapshot),
            Mode::Goalkeeping(state) => self.strategy.as_goalkeeper(snapshot, state),
        };

        match outcome {
            Ok(commands) => Ok(commands),
            Err(e) if e.is_recoverable() => {
                warn!(turn = snapshot.turn, %mode, "did not play this turn: {}", e);
                Ok(Vec::new())
            }
            Err(DecisionError::Formation(e)) => {
                error!(turn = snapshot.turn, %mode, "formation table defect: {}", e);
                Err(e)
            }
            Err(e) => {
                error!(turn = snapshot.turn, %mode, "unrecoverable decision failure: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Like [`dispatch`](Self::dispatch) with a wire-format mode string.
    /// Unknown modes are a no-op.
    pub fn dispatch_raw(
        &mut self,
        mode: &str,
        snapshot: &Snapshot,
    ) -> Result<Vec<Command>, FormationError> {
        match mode.parse::<Mode>() {
            Ok(mode) => self.dispatch(mode, snapshot),
            Err(reason) => {
                warn!(turn = snapshot.turn, "{}; skipping turn", reason);
                Ok(Vec::new())
            }
        }
    }

    /// "Getting ready" notification. Never produces commands; logging is
    /// left to the strategy's hook.
    pub fn prepare(&mut self, snapshot: &Snapshot) {
        self.strategy.getting_ready(snapshot);
    }
}
