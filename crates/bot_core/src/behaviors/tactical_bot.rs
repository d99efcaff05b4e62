//! The concrete formation-based strategy
//!
//! One instance per agent. The formation table is shared read-only between
//! agents; the RNG is per agent and seeded from the configuration.

use super::traits::Strategy;
use super::{defending, disputing, goalkeeper, holding, supporting, TickContext};
use crate::config::BotConfig;
use crate::engine::command::Command;
use crate::engine::dispatcher::PlayerState;
use crate::engine::formation::FormationTable;
use crate::engine::mapper::Mapper;
use crate::engine::snapshot::{Side, Snapshot};
use crate::error::{ConfigError, DecisionResult};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct TacticalBot {
    number: u32,
    side: Side,
    config: BotConfig,
    formation: Arc<FormationTable>,
    mapper: Mapper,
    rng: ChaCha8Rng,
}

impl TacticalBot {
    /// Validates the configuration and checks the formation fits the grid.
    ///
    /// The RNG seed is `config.seed + number`, so teammates sharing one
    /// configuration do not juke in lockstep.
    pub fn new(
        number: u32,
        side: Side,
        config: BotConfig,
        formation: Arc<FormationTable>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        formation.validate_grid(config.grid.cols, config.grid.rows)?;
        let mapper = Mapper::new(&config.field, config.grid, side)?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(u64::from(number)));

        Ok(Self {
            number,
            side,
            config,
            formation,
            mapper,
            rng,
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    fn context<'a>(&'a self, snapshot: &'a Snapshot) -> TickContext<'a> {
        TickContext::new(
            snapshot.view(self.side, self.number),
            &self.mapper,
            &self.formation,
            &self.config.thresholds,
        )
    }
}

impl Strategy for TacticalBot {
    fn on_disputing(&mut self, snapshot: &Snapshot) -> DecisionResult<Vec<Command>> {
        disputing::on_disputing(&self.context(snapshot))
    }

    fn on_defending(&mut self, snapshot: &Snapshot) -> DecisionResult<Vec<Command>> {
        defending::on_defending(&self.context(snapshot))
    }

    fn on_holding(&mut self, snapshot: &Snapshot) -> DecisionResult<Vec<Command>> {
        // field-level borrows: the context reads while the rng advances
        let ctx = TickContext::new(
            snapshot.view(self.side, self.number),
            &self.mapper,
            &self.formation,
            &self.config.thresholds,
        );
        holding::on_holding(&ctx, &mut self.rng)
    }

    fn on_supporting(&mut self, snapshot: &Snapshot) -> DecisionResult<Vec<Command>> {
        supporting::on_supporting(&self.context(snapshot))
    }

    fn as_goalkeeper(
        &mut self,
        snapshot: &Snapshot,
        state: PlayerState,
    ) -> DecisionResult<Vec<Command>> {
        goalkeeper::as_goalkeeper(&self.context(snapshot), state)
    }

    fn getting_ready(&mut self, snapshot: &Snapshot) {
        info!(
            turn = snapshot.turn,
            number = self.number,
            side = %self.side,
            "getting ready"
        );
    }
}
