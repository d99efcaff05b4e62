//! End-to-end tick scenarios through the dispatcher.

use bot_core::engine::{Command, Point};
use bot_core::{
    BotConfig, Dispatcher, FormationTable, Mode, PlayerState, Side, Snapshot, SnapshotBuilder,
    TacticalBot,
};
use std::sync::Arc;

fn dispatcher(number: u32, side: Side, config: BotConfig) -> Dispatcher<TacticalBot> {
    let table = Arc::new(FormationTable::standard().expect("standard table"));
    Dispatcher::new(TacticalBot::new(number, side, config, table).expect("valid bot"))
}

fn kicks(commands: &[Command]) -> Vec<Command> {
    commands.iter().copied().filter(Command::is_kick).collect()
}

/// Full 11-a-side kickoff-ish layout, home side in possession of #8.
fn holding_snapshot(opponent_x: f64) -> Snapshot {
    SnapshotBuilder::new()
        .turn(120)
        .ball(8000.0, 5000.0)
        .held_by(Side::Home, 8)
        .player(Side::Home, 1, 0.0, 5000.0)
        .player(Side::Home, 8, 8000.0, 5000.0)
        .player(Side::Home, 4, 7700.0, 5200.0)
        .player(Side::Away, 1, 20000.0, 5000.0)
        .player(Side::Away, 6, opponent_x, 5000.0)
        .build()
}

#[test]
fn unpressured_holder_kicks_at_goal_center() {
    let snap = holding_snapshot(8900.0);
    let mut d = dispatcher(8, Side::Home, BotConfig::default());

    let commands = d.dispatch(Mode::Holding, &snap).unwrap();
    let kicks = kicks(&commands);
    assert_eq!(kicks, vec![Command::kick_max(Point::new(20000.0, 5000.0))]);
    assert!(commands
        .iter()
        .all(|c| !matches!(c, Command::KickWithPower { .. })));
}

#[test]
fn pressured_holder_without_options_escape_kicks() {
    let snap = holding_snapshot(8500.0);
    let mut d = dispatcher(8, Side::Home, BotConfig::default());

    let commands = d.dispatch(Mode::Holding, &snap).unwrap();
    // juke first, then the ball decision
    assert!(commands[0].is_move());
    match kicks(&commands).as_slice() {
        [Command::KickWithPower { target, power }] => {
            assert!(*power < 400.0);
            assert!(target.x >= 10000.0);
            assert!((3500.0..=6500.0).contains(&target.y));
        }
        other => panic!("expected one reduced-power kick, got {other:?}"),
    }
}

#[test]
fn holding_is_reproducible_for_a_seed() {
    let snap = holding_snapshot(8500.0);
    let mut a = dispatcher(8, Side::Home, BotConfig::default().with_seed(2024));
    let mut b = dispatcher(8, Side::Home, BotConfig::default().with_seed(2024));
    for _ in 0..10 {
        assert_eq!(
            a.dispatch(Mode::Holding, &snap).unwrap(),
            b.dispatch(Mode::Holding, &snap).unwrap()
        );
    }
}

#[test]
fn goalkeeper_jumps_for_near_post_high_ball() {
    let snap = SnapshotBuilder::new()
        .ball(1000.0, 7600.0)
        .player(Side::Home, 1, 0.0, 5000.0)
        .player(Side::Away, 9, 1500.0, 7600.0)
        .build();
    let mut d = dispatcher(1, Side::Home, BotConfig::default());

    let commands = d
        .dispatch(Mode::from_role(true, PlayerState::Defending), &snap)
        .unwrap();
    assert!(matches!(commands.as_slice(), [Command::Jump { .. }]));
}

#[test]
fn goalkeeper_holding_clears_without_catch() {
    let snap = SnapshotBuilder::new()
        .ball(200.0, 5000.0)
        .held_by(Side::Home, 1)
        .player(Side::Home, 1, 200.0, 5000.0)
        .build();
    let mut d = dispatcher(1, Side::Home, BotConfig::default());

    let commands = d.dispatch_raw("goalkeeping-holding", &snap).unwrap();
    assert_eq!(kicks(&commands).len(), 1);
    assert!(!commands.contains(&Command::Catch));
}

#[test]
fn loose_ball_is_claimed_by_the_nearest_subset_only() {
    let mut builder = SnapshotBuilder::new()
        .ball(10000.0, 5000.0)
        .player(Side::Home, 1, 0.0, 5000.0);
    for n in 2..=11u32 {
        builder = builder.player(Side::Home, n, 10000.0 - f64::from(n) * 300.0, 5000.0);
    }
    let snap = builder.build();

    let claimers: Vec<u32> = (2..=11)
        .filter(|&n| {
            let mut d = dispatcher(n, Side::Home, BotConfig::default());
            d.dispatch(Mode::Disputing, &snap)
                .unwrap()
                .contains(&Command::Catch)
        })
        .collect();
    // at least 5 teammates farther, the keeper included: #2..#7
    assert_eq!(claimers, vec![2, 3, 4, 5, 6, 7]);
}

#[test]
fn legacy_profile_claims_with_fewer_players() {
    let mut builder = SnapshotBuilder::new().ball(10000.0, 5000.0);
    for n in 2..=11u32 {
        builder = builder.player(Side::Away, n, 10000.0 + f64::from(n) * 300.0, 5000.0);
    }
    let snap = builder.build();

    let claimers = (2..=11)
        .filter(|&n| {
            let mut d = dispatcher(n, Side::Away, BotConfig::legacy());
            d.dispatch(Mode::Disputing, &snap)
                .unwrap()
                .contains(&Command::Catch)
        })
        .count();
    assert_eq!(claimers, 2);
}

#[test]
fn missing_agent_skips_turn_with_no_commands() {
    let snap = SnapshotBuilder::new().ball(5000.0, 5000.0).build();
    for mode in ["disputing", "defending", "holding", "supporting", "goalkeeping"] {
        let mut d = dispatcher(7, Side::Home, BotConfig::default());
        assert_eq!(d.dispatch_raw(mode, &snap), Ok(Vec::new()));
    }
}

#[test]
fn unrecognized_mode_is_a_no_op() {
    let snap = holding_snapshot(8500.0);
    let mut d = dispatcher(8, Side::Home, BotConfig::default());
    assert_eq!(d.dispatch_raw("celebrating", &snap), Ok(Vec::new()));
}

#[test]
fn goalkeeper_routed_through_outfield_mode_surfaces_formation_defect() {
    // #1 has no formation slot; asking it to support is a table/config bug
    let snap = SnapshotBuilder::new()
        .ball(5000.0, 5000.0)
        .player(Side::Home, 1, 0.0, 5000.0)
        .build();
    let mut d = dispatcher(1, Side::Home, BotConfig::default());
    assert!(d.dispatch(Mode::Supporting, &snap).is_err());
}

#[test]
fn supporting_always_ends_on_formation_slot() {
    let snap = SnapshotBuilder::new()
        .ball(12000.0, 9000.0)
        .held_by(Side::Home, 10)
        .player(Side::Home, 10, 12000.0, 9000.0)
        .player(Side::Home, 7, 11000.0, 8000.0)
        .player(Side::Away, 3, 12500.0, 8800.0)
        .build();
    let mut d = dispatcher(7, Side::Home, BotConfig::default());
    let commands = d.dispatch(Mode::Supporting, &snap).unwrap();

    let mapper = d.strategy().mapper();
    // ball col 6, possession but not last quarter -> Normal, #7 -> (8, 2)
    assert_eq!(
        *commands.last().unwrap(),
        Command::move_to(mapper.region(8, 2).center())
    );
    assert!(commands.iter().all(Command::is_move));
}

#[test]
fn preparing_produces_nothing_observable() {
    let snap = SnapshotBuilder::new().build();
    let mut d = dispatcher(5, Side::Away, BotConfig::default());
    d.prepare(&snap);
    assert_eq!(d.strategy().number(), 5);
}
