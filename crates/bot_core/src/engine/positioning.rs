//! Expected-position resolver
//!
//! Phase comes from the ball's team-relative column and possession only.
//! There is no hysteresis: a ball sitting on a boundary can flip the phase
//! every tick.

use super::formation::{FormationTable, Phase};
use super::geometry::Point;
use super::mapper::Mapper;
use super::snapshot::TurnView;
use crate::error::FormationError;

/// Thirds of the grid decide Defensive / Normal / Offensive. With the ball
/// in our possession inside the last quarter the team switches to Attack.
pub fn classify_phase(ball_col: u32, cols: u32, team_has_ball: bool) -> Phase {
    let col = f64::from(ball_col);
    let cols = f64::from(cols);
    let third = cols / 3.0;

    if team_has_ball && col >= cols * 0.75 {
        Phase::Attack
    } else if col < third {
        Phase::Defensive
    } else if col < third * 2.0 {
        Phase::Normal
    } else {
        Phase::Offensive
    }
}

pub fn current_phase(view: &TurnView<'_>, mapper: &Mapper) -> Phase {
    let ball_region = mapper.region_from_point(view.ball().position);
    classify_phase(ball_region.col(), mapper.cols(), view.team_has_ball())
}

/// Center of the formation cell for `number` in the current phase.
pub fn expected_position(
    view: &TurnView<'_>,
    mapper: &Mapper,
    table: &FormationTable,
    number: u32,
) -> Result<Point, FormationError> {
    let phase = current_phase(view, mapper);
    let cell = table.cell(phase, number)?;
    Ok(mapper.region(cell.col, cell.row).center())
}
