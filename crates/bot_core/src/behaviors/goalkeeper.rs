//! Goalkeeper state machine
//!
//! - `Defending`: follow the ball's y on the goal line; jump when a near-post
//!   ball is far above/below the keeper, otherwise catch
//! - `HoldingTheBall`: clear to a fixed target on the attacking side
//! - anything else: follow the ball inside the goal mouth and catch

use super::TickContext;
use crate::engine::command::Command;
use crate::engine::dispatcher::PlayerState;
use crate::error::DecisionResult;
use tracing::debug;

pub fn as_goalkeeper(ctx: &TickContext<'_>, state: PlayerState) -> DecisionResult<Vec<Command>> {
    let me = ctx.view.me()?;
    let cfg = &ctx.thresholds.goalkeeper;
    let ball = ctx.view.ball().position;
    let goal = ctx.mapper.defense_goal();
    let line_x = goal.center.x;

    match state {
        PlayerState::Defending => {
            let track = ball.with_x(line_x);
            let near_post = (ball.x - line_x).abs() <= cfg.near_post_band;
            if near_post && (ball.y - me.position.y).abs() > cfg.jump_vertical_delta {
                debug!(number = me.number, "diving toward {}", track);
                Ok(vec![Command::jump(track, cfg.jump_height)])
            } else {
                Ok(vec![Command::move_to(track), Command::Catch])
            }
        }
        PlayerState::HoldingTheBall => {
            let target = ctx.mapper.from_team_view(cfg.clearance_target);
            debug!(number = me.number, "clearing to {}", target);
            Ok(vec![
                Command::move_to(ball.with_x(line_x)),
                Command::kick_max(target),
            ])
        }
        PlayerState::Supporting | PlayerState::DisputingTheBall => {
            let y = ball.y.clamp(
                goal.bottom_pole.y + cfg.post_margin,
                goal.top_pole.y - cfg.post_margin,
            );
            Ok(vec![Command::move_to(ball.with_x(line_x).with_y(y)), Command::Catch])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::test_support::Fixture;
    use crate::config::BotConfig;
    use crate::engine::geometry::Point;
    use crate::engine::snapshot::{Side, SnapshotBuilder};

    #[test]
    fn near_post_high_ball_means_jump() {
        let fx = Fixture::new(Side::Home);
        let snap = SnapshotBuilder::new()
            .ball(1000.0, 7500.0)
            .player(Side::Home, 1, 0.0, 5000.0)
            .build();

        let orders = as_goalkeeper(&fx.ctx(&snap, 1), PlayerState::Defending).unwrap();
        assert_eq!(orders, vec![Command::jump(Point::new(0.0, 7500.0), 200.0)]);
        assert!(!orders.contains(&Command::Catch));
    }

    #[test]
    fn far_ball_tracks_and_catches() {
        let fx = Fixture::new(Side::Home);
        let snap = SnapshotBuilder::new()
            .ball(6000.0, 7500.0)
            .player(Side::Home, 1, 0.0, 5000.0)
            .build();

        let orders = as_goalkeeper(&fx.ctx(&snap, 1), PlayerState::Defending).unwrap();
        assert_eq!(
            orders,
            vec![Command::move_to(Point::new(0.0, 7500.0)), Command::Catch]
        );
    }

    #[test]
    fn near_post_level_ball_catches() {
        let fx = Fixture::new(Side::Away);
        let snap = SnapshotBuilder::new()
            .ball(19500.0, 5500.0)
            .player(Side::Away, 1, 20000.0, 5000.0)
            .build();

        let orders = as_goalkeeper(&fx.ctx(&snap, 1), PlayerState::Defending).unwrap();
        assert_eq!(
            orders,
            vec![Command::move_to(Point::new(20000.0, 5500.0)), Command::Catch]
        );
    }

    #[test]
    fn holding_clears_to_configured_target() {
        let fx = Fixture::new(Side::Home);
        let snap = SnapshotBuilder::new()
            .ball(300.0, 5000.0)
            .held_by(Side::Home, 1)
            .player(Side::Home, 1, 300.0, 5000.0)
            .build();

        let orders = as_goalkeeper(&fx.ctx(&snap, 1), PlayerState::HoldingTheBall).unwrap();
        assert_eq!(orders[1], Command::kick_max(Point::new(19000.0, 9000.0)));
        assert!(!orders.contains(&Command::Catch));

        let legacy = Fixture::with_config(Side::Away, BotConfig::legacy());
        let snap = SnapshotBuilder::new()
            .ball(19700.0, 5000.0)
            .held_by(Side::Away, 1)
            .player(Side::Away, 1, 19700.0, 5000.0)
            .build();
        let orders = as_goalkeeper(&legacy.ctx(&snap, 1), PlayerState::HoldingTheBall).unwrap();
        assert_eq!(orders[1], Command::kick_max(Point::new(0.0, 5500.0)));
    }

    #[test]
    fn other_states_stay_inside_the_posts() {
        let fx = Fixture::new(Side::Home);
        let snap = SnapshotBuilder::new()
            .ball(9000.0, 9800.0)
            .player(Side::Home, 1, 0.0, 5000.0)
            .build();

        let orders = as_goalkeeper(&fx.ctx(&snap, 1), PlayerState::Supporting).unwrap();
        assert_eq!(
            orders,
            vec![Command::move_to(Point::new(0.0, 5800.0)), Command::Catch]
        );

        let snap = SnapshotBuilder::new()
            .ball(9000.0, 100.0)
            .player(Side::Home, 1, 0.0, 5000.0)
            .build();
        let orders = as_goalkeeper(&fx.ctx(&snap, 1), PlayerState::DisputingTheBall).unwrap();
        assert_eq!(orders[0], Command::move_to(Point::new(0.0, 4200.0)));
    }
}
