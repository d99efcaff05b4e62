//! Supporting: a teammate has the ball (or the agent is off the ball).
//!
//! Short-term adjustments are queued first; the last command is always the
//! formation slot so the agent converges back to shape.

use super::TickContext;
use crate::engine::command::Command;
use crate::engine::geometry::distance;
use crate::engine::ranking::{nearest_opponent, nearest_teammate};
use crate::error::DecisionResult;

pub fn on_supporting(ctx: &TickContext<'_>) -> DecisionResult<Vec<Command>> {
    let me = ctx.view.me()?;
    let cfg = &ctx.thresholds.support;
    let ball = ctx.view.ball().position;
    let expected = ctx.expected_position(me.number)?;

    let my_distance = distance(me.position, ball);
    let mate = nearest_teammate(&ctx.view, me.number);
    let team_best = mate.map_or(my_distance, |(d, _)| d.min(my_distance));

    let mut orders = Vec::with_capacity(4);

    match nearest_opponent(&ctx.view) {
        Some((opp_distance, _)) if opp_distance < team_best => {
            orders.push(Command::move_to(me.position.midpoint(&ball)));
        }
        _ => {
            orders.push(Command::move_to(
                me.position.lerp(&expected, cfg.formation_blend),
            ));
        }
    }

    if ball.y < cfg.safe_min_y || ball.y > cfg.safe_max_y {
        let center_y = ctx.mapper.field().center_y();
        orders.push(Command::move_to(me.position.with_y(center_y)));
    }

    if let Some((mate_distance, mate)) = mate {
        if mate_distance <= cfg.support_radius {
            let dx = cfg.support_offset * ctx.view.attack_sign();
            orders.push(Command::move_to(mate.position.offset(dx, 0.0)));
        }
    }

    orders.push(Command::move_to(expected));
    Ok(orders)
}
