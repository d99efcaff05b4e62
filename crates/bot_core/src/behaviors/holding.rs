//! Holding: the agent has the ball.
//!
//! Decision order:
//! 1. optional lateral juke (always queued first)
//! 2. near the attacked goal -> placed shot away from the keeper
//! 3. under pressure -> forward pass, else any separated ally, else an
//!    escape kick to a random point ahead at reduced power
//! 4. otherwise -> kick at the goal center
//!
//! No opponents or no ally ranking falls straight through to the goal kick.

use super::TickContext;
use crate::engine::command::Command;
use crate::engine::geometry::{distance, Point};
use crate::engine::mapper::{is_near, Goal};
use crate::engine::ranking::{nearest_opponent, ranked_allies, AllyGroup};
use crate::engine::snapshot::Player;
use crate::error::{DecisionError, DecisionResult};
use rand::Rng;
use tracing::debug;

pub fn on_holding<R: Rng + ?Sized>(
    ctx: &TickContext<'_>,
    rng: &mut R,
) -> DecisionResult<Vec<Command>> {
    let me = ctx.view.me()?;
    ctx.view.holder().ok_or(DecisionError::MissingBallHolder)?;
    let cfg = &ctx.thresholds.holding;
    let goal = ctx.mapper.attack_goal();
    let mut orders = Vec::with_capacity(2);

    if cfg.juke_enabled {
        let dx = if rng.gen_bool(0.5) {
            cfg.juke_offset
        } else {
            -cfg.juke_offset
        };
        orders.push(Command::move_to(me.position.offset(dx, 0.0)));
    }

    let Some((pressure, _)) = nearest_opponent(&ctx.view) else {
        debug!(number = me.number, "no opponents, kicking at goal");
        orders.push(Command::kick_max(goal.center));
        return Ok(orders);
    };

    let my_region = ctx.mapper.region_from_point(me.position);
    let goal_region = ctx.mapper.region_from_point(goal.center);
    if is_near(&my_region, &goal_region) {
        let target = shot_target(ctx, &goal);
        debug!(number = me.number, "shooting at {}", target);
        orders.push(Command::kick_max(target));
        return Ok(orders);
    }

    if pressure < cfg.pressure_distance {
        let ranking = ranked_allies(&ctx.view);
        if ranking.is_empty() {
            orders.push(Command::kick_max(goal.center));
            return Ok(orders);
        }

        let receiver = forward_receiver(ctx, me, &ranking)
            .or_else(|| separated_receiver(ctx, me, &ranking));
        let order = match receiver {
            Some(ally) => {
                debug!(number = me.number, to = ally.number, pressure, "passing under pressure");
                pass_to(ctx, me, ally)
            }
            None => {
                debug!(number = me.number, pressure, "no safe pass, escape kick");
                escape_kick(ctx, me, rng)
            }
        };
        orders.push(order);
        return Ok(orders);
    }

    orders.push(Command::kick_max(goal.center));
    Ok(orders)
}

/// Aim at the corner away from the opponent keeper. Keeper below center
/// (or missing, or centered) -> high corner; above -> low corner.
fn shot_target(ctx: &TickContext<'_>, goal: &Goal) -> Point {
    let margin = ctx.thresholds.holding.shot_post_margin;
    let high = Point::new(goal.center.x, goal.top_pole.y - margin);
    let low = Point::new(goal.center.x, goal.bottom_pole.y + margin);

    match ctx.view.opponent_goalkeeper() {
        Some(keeper) if keeper.position.y > goal.center.y => low,
        _ => high,
    }
}

/// First of the leading ranked allies standing ahead of the holder.
fn forward_receiver<'a>(
    ctx: &TickContext<'_>,
    me: &Player,
    ranking: &[AllyGroup<'a>],
) -> Option<&'a Player> {
    let sign = ctx.view.attack_sign();
    ranking
        .iter()
        .flat_map(|g| g.allies.iter().copied())
        .take(ctx.thresholds.holding.forward_scan_limit)
        .find(|ally| (ally.position.x - me.position.x) * sign > 0.0)
}

/// Any ranked ally far enough from the holder to receive.
fn separated_receiver<'a>(
    ctx: &TickContext<'_>,
    me: &Player,
    ranking: &[AllyGroup<'a>],
) -> Option<&'a Player> {
    let min = ctx.thresholds.holding.min_pass_separation;
    ranking
        .iter()
        .flat_map(|g| g.allies.iter().copied())
        .find(|ally| distance(ally.position, me.position) >= min)
}

fn pass_to(ctx: &TickContext<'_>, me: &Player, ally: &Player) -> Command {
    let cfg = &ctx.thresholds.holding;
    let power = (distance(me.position, ally.position) * cfg.pass_speed_per_unit)
        .clamp(cfg.min_pass_power, cfg.max_kick_speed);
    Command::kick_with_power(ally.position, power)
}

/// Random point ahead of the holder inside the attacking half.
fn escape_kick<R: Rng + ?Sized>(ctx: &TickContext<'_>, me: &Player, rng: &mut R) -> Command {
    let cfg = &ctx.thresholds.holding;
    let field = ctx.mapper.field();

    let from = ctx.mapper.to_team_view(me.position);
    let ahead = rng.gen_range(cfg.escape_min_ahead..=cfg.escape_max_ahead);
    let x = (from.x + ahead).clamp(field.half_x(), field.width);
    let y = rng.gen_range(cfg.escape_min_y..=cfg.escape_max_y);

    let target = ctx.mapper.from_team_view(Point::new(x, y));
    Command::kick_with_power(target, cfg.escape_kick_power)
}
