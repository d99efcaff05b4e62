//! Defending: the opponent has the ball.
//!
//! The two teammates whose regions are closest to the ball's region press
//! it; everyone else drops one region back toward the own goal.

use super::TickContext;
use crate::engine::command::Command;
use crate::engine::ranking::closest_pair_by_region;
use crate::error::DecisionResult;
use tracing::debug;

pub fn on_defending(ctx: &TickContext<'_>) -> DecisionResult<Vec<Command>> {
    let me = ctx.view.me()?;
    let ball = ctx.view.ball().position;

    let pressers = closest_pair_by_region(&ctx.view, ctx.mapper);
    if pressers.contains(&Some(me.number)) {
        debug!(number = me.number, ?pressers, "pressing the ball");
        return Ok(vec![Command::move_to(ball), Command::Catch]);
    }

    let fallback = ctx.mapper.region_from_point(me.position).back();
    Ok(vec![Command::move_to(fallback.center())])
}
