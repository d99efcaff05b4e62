//! Per-mode behavior functions
//!
//! Each behavior maps one tick's [`TickContext`] to an ordered command list.
//! None of them keeps state between ticks; randomness (holding only) comes
//! from the caller's seeded generator.

pub mod defending;
pub mod disputing;
pub mod goalkeeper;
pub mod holding;
pub mod supporting;
pub mod tactical_bot;
pub mod traits;

pub use tactical_bot::TacticalBot;
pub use traits::Strategy;

use crate::config::ThresholdsConfig;
use crate::engine::formation::FormationTable;
use crate::engine::geometry::Point;
use crate::engine::mapper::Mapper;
use crate::engine::positioning;
use crate::engine::snapshot::TurnView;
use crate::error::DecisionResult;

/// Everything a behavior may read during one tick.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    pub view: TurnView<'a>,
    pub mapper: &'a Mapper,
    pub formation: &'a FormationTable,
    pub thresholds: &'a ThresholdsConfig,
}

impl<'a> TickContext<'a> {
    pub fn new(
        view: TurnView<'a>,
        mapper: &'a Mapper,
        formation: &'a FormationTable,
        thresholds: &'a ThresholdsConfig,
    ) -> Self {
        Self {
            view,
            mapper,
            formation,
            thresholds,
        }
    }

    pub fn expected_position(&self, number: u32) -> DecisionResult<Point> {
        Ok(positioning::expected_position(
            &self.view,
            self.mapper,
            self.formation,
            number,
        )?)
    }
}
