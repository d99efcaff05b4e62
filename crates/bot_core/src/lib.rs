//! # bot_core - Reactive Player Decision Engine
//!
//! Per-tick decision logic for an autonomous player in a tick-based team
//! sports simulation. Each tick the host hands over a [`Snapshot`] and a
//! [`Mode`]; the [`Dispatcher`] routes it to one behavior of a
//! [`Strategy`] which returns an ordered list of [`Command`]s.
//!
//! ## Features
//! - stateless across ticks (the formation table is read-only config)
//! - all thresholds in one [`BotConfig`]
//! - seeded randomness: same seed + same snapshots = same commands
//!
//! ```rust
//! use std::sync::Arc;
//! use bot_core::{BotConfig, Dispatcher, FormationTable, Mode, Side, SnapshotBuilder, TacticalBot};
//!
//! let table = Arc::new(FormationTable::standard().unwrap());
//! let bot = TacticalBot::new(9, Side::Home, BotConfig::default(), table).unwrap();
//! let mut dispatcher = Dispatcher::new(bot);
//!
//! let snapshot = SnapshotBuilder::new()
//!     .ball(10000.0, 5000.0)
//!     .player(Side::Home, 9, 10100.0, 5000.0)
//!     .build();
//! let commands = dispatcher.dispatch(Mode::Disputing, &snapshot).unwrap();
//! assert_eq!(commands.len(), 2);
//! ```

pub mod behaviors;
pub mod config;
pub mod engine;
pub mod error;

pub use behaviors::{Strategy, TacticalBot, TickContext};
pub use config::BotConfig;
pub use engine::{
    Command, Dispatcher, FormationTable, Mode, PlayerState, Point, Side, Snapshot,
    SnapshotBuilder,
};
pub use error::{ConfigError, DecisionError, DecisionResult, FormationError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
