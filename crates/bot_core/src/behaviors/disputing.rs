//! Disputing: the ball is loose or contested.
//!
//! Only the agents closest to the ball go for it; everyone else keeps shape.

use super::TickContext;
use crate::engine::command::Command;
use crate::engine::ranking::has_closer_teammate;
use crate::error::DecisionResult;
use tracing::debug;

pub fn on_disputing(ctx: &TickContext<'_>) -> DecisionResult<Vec<Command>> {
    let me = ctx.view.me()?;
    let ball = ctx.view.ball().position;
    let threshold = ctx.thresholds.dispute.closer_teammate_threshold;

    if !has_closer_teammate(&ctx.view, me, threshold) {
        debug!(number = me.number, "claiming loose ball at {}", ball);
        return Ok(vec![Command::move_to(ball), Command::Catch]);
    }

    let target = ctx.expected_position(me.number)?;
    Ok(vec![Command::move_to(target)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::test_support::Fixture;
    use crate::engine::geometry::Point;
    use crate::engine::snapshot::{Side, SnapshotBuilder};
    use crate::error::DecisionError;

    #[test]
    fn closest_player_goes_for_the_ball() {
        let fx = Fixture::new(Side::Home);
        let snap = SnapshotBuilder::new()
            .ball(10000.0, 5000.0)
            .player(Side::Home, 9, 10200.0, 5000.0)
            .player(Side::Home, 2, 3000.0, 2000.0)
            .player(Side::Home, 3, 4000.0, 4000.0)
            .build();

        let orders = on_disputing(&fx.ctx(&snap, 9)).unwrap();
        assert_eq!(
            orders,
            vec![Command::move_to(Point::new(10000.0, 5000.0)), Command::Catch]
        );
    }

    #[test]
    fn others_hold_formation() {
        let fx = Fixture::new(Side::Home);
        let snap = SnapshotBuilder::new()
            .ball(10000.0, 5000.0)
            .player(Side::Home, 9, 10200.0, 5000.0)
            .player(Side::Home, 2, 3000.0, 2000.0)
            .player(Side::Home, 3, 4000.0, 4000.0)
            .build();

        // #2 is farthest: nobody is behind it
        let orders = on_disputing(&fx.ctx(&snap, 2)).unwrap();
        // ball col 5 -> Normal phase, #2 -> (2, 1)
        assert_eq!(orders, vec![Command::move_to(fx.mapper.region(2, 1).center())]);
    }

    #[test]
    fn absent_agent_skips_the_turn() {
        let fx = Fixture::new(Side::Home);
        let snap = SnapshotBuilder::new()
            .player(Side::Home, 4, 6000.0, 5000.0)
            .build();
        assert!(matches!(
            on_disputing(&fx.ctx(&snap, 7)),
            Err(DecisionError::MissingPlayer { number: 7, .. })
        ));
    }
}
