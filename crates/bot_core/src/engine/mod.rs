//! Decision engine building blocks: geometry, regions, snapshot, commands,
//! formation lookup, ranking helpers and the mode dispatcher.

pub mod command;
pub mod dispatcher;
pub mod formation;
pub mod geometry;
pub mod mapper;
pub mod positioning;
pub mod ranking;
pub mod snapshot;

pub use command::Command;
pub use dispatcher::{Dispatcher, Mode, PlayerState};
pub use formation::{Cell, FormationEntry, FormationTable, Phase};
pub use geometry::{distance, Point};
pub use mapper::{is_near, region_distance, Goal, Mapper, Region};
pub use positioning::{classify_phase, expected_position};
pub use ranking::{
    closest_pair_by_region, has_closer_teammate, nearest_opponent, nearest_teammate,
    ranked_allies, AllyGroup,
};
pub use snapshot::{
    Ball, HolderRef, Player, Side, Snapshot, SnapshotBuilder, Team, TurnView, GOALKEEPER_NUMBER,
};
