//! Strategy contract
//!
//! The fixed set of per-mode callbacks a bot must provide. The dispatcher
//! holds "something implementing this", not a class hierarchy.

use crate::engine::command::Command;
use crate::engine::dispatcher::PlayerState;
use crate::engine::snapshot::Snapshot;
use crate::error::DecisionResult;
use tracing::info;

pub trait Strategy {
    /// Ball is loose or contested
    fn on_disputing(&mut self, snapshot: &Snapshot) -> DecisionResult<Vec<Command>>;

    /// Opponent has the ball
    fn on_defending(&mut self, snapshot: &Snapshot) -> DecisionResult<Vec<Command>>;

    /// This agent has the ball
    fn on_holding(&mut self, snapshot: &Snapshot) -> DecisionResult<Vec<Command>>;

    /// A teammate has the ball
    fn on_supporting(&mut self, snapshot: &Snapshot) -> DecisionResult<Vec<Command>>;

    /// Every tick for the goalkeeper, whatever its state
    fn as_goalkeeper(
        &mut self,
        snapshot: &Snapshot,
        state: PlayerState,
    ) -> DecisionResult<Vec<Command>>;

    /// Pre-kickoff notification; informational only.
    fn getting_ready(&mut self, snapshot: &Snapshot) {
        info!(turn = snapshot.turn, "getting ready");
    }
}
