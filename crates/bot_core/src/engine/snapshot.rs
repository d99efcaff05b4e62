//! Per-tick world snapshot
//!
//! Delivered by the transport layer, read-only for the whole decision.
//! [`TurnView`] is the agent's window into it: "me", "my team" and
//! "opponents" are resolved from the agent's side and jersey number.

use super::geometry::Point;
use crate::error::{DecisionError, DecisionResult};
use serde::{Deserialize, Serialize};

/// Jersey number reserved for the goalkeeper.
pub const GOALKEEPER_NUMBER: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Defends x = 0, attacks toward +x
    Home,
    /// Defends x = field width, attacks toward -x
    Away,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    /// +1.0 when attacking toward +x
    pub fn attack_sign(self) -> f64 {
        match self {
            Side::Home => 1.0,
            Side::Away => -1.0,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(Side::Home),
            "away" => Ok(Side::Away),
            other => Err(format!("unknown side '{other}' (expected home|away)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub number: u32,
    pub team_side: Side,
    pub position: Point,
}

impl Player {
    pub fn is_goalkeeper(&self) -> bool {
        self.number == GOALKEEPER_NUMBER
    }

    pub fn is(&self, side: Side, number: u32) -> bool {
        self.team_side == side && self.number == number
    }
}

/// Identifies the player holding the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolderRef {
    pub side: Side,
    pub number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Point,
    #[serde(default)]
    pub holder: Option<HolderRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub side: Side,
    #[serde(default)]
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub turn: u32,
    pub ball: Ball,
    pub home_team: Team,
    pub away_team: Team,
}

impl Snapshot {
    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    pub fn player(&self, side: Side, number: u32) -> Option<&Player> {
        self.team(side).players.iter().find(|p| p.number == number)
    }

    /// Player currently holding the ball, looked up through the ball's
    /// holder reference.
    pub fn holder(&self) -> Option<&Player> {
        let holder = self.ball.holder?;
        self.player(holder.side, holder.number)
    }

    pub fn view(&self, side: Side, number: u32) -> TurnView<'_> {
        TurnView::new(self, side, number)
    }
}

/// The acting agent's perspective on a snapshot.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    snapshot: &'a Snapshot,
    side: Side,
    number: u32,
}

impl<'a> TurnView<'a> {
    pub fn new(snapshot: &'a Snapshot, side: Side, number: u32) -> Self {
        Self {
            snapshot,
            side,
            number,
        }
    }

    pub fn snapshot(&self) -> &'a Snapshot {
        self.snapshot
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn me(&self) -> DecisionResult<&'a Player> {
        if self.my_team().is_empty() {
            return Err(DecisionError::EmptyRoster { side: self.side });
        }
        self.snapshot
            .player(self.side, self.number)
            .ok_or(DecisionError::MissingPlayer {
                side: self.side,
                number: self.number,
            })
    }

    pub fn my_team(&self) -> &'a [Player] {
        &self.snapshot.team(self.side).players
    }

    pub fn opponents(&self) -> &'a [Player] {
        &self.snapshot.team(self.side.opposite()).players
    }

    pub fn ball(&self) -> &'a Ball {
        &self.snapshot.ball
    }

    pub fn holder(&self) -> Option<&'a Player> {
        self.snapshot.holder()
    }

    pub fn team_has_ball(&self) -> bool {
        self.snapshot
            .ball
            .holder
            .is_some_and(|h| h.side == self.side)
    }

    pub fn opponent_goalkeeper(&self) -> Option<&'a Player> {
        self.snapshot
            .player(self.side.opposite(), GOALKEEPER_NUMBER)
    }

    pub fn attack_sign(&self) -> f64 {
        self.side.attack_sign()
    }
}

/// Fluent snapshot construction for tests and CLI fixtures.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    snapshot: Snapshot,
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotBuilder {
    /// Empty rosters, loose ball at the center spot.
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot {
                turn: 0,
                ball: Ball {
                    position: Point::new(10000.0, 5000.0),
                    holder: None,
                },
                home_team: Team {
                    side: Side::Home,
                    players: Vec::new(),
                },
                away_team: Team {
                    side: Side::Away,
                    players: Vec::new(),
                },
            },
        }
    }

    pub fn turn(mut self, turn: u32) -> Self {
        self.snapshot.turn = turn;
        self
    }

    pub fn ball(mut self, x: f64, y: f64) -> Self {
        self.snapshot.ball.position = Point::new(x, y);
        self
    }

    /// Marks `(side, number)` as holder; the ball is not moved.
    pub fn held_by(mut self, side: Side, number: u32) -> Self {
        self.snapshot.ball.holder = Some(HolderRef { side, number });
        self
    }

    pub fn player(mut self, side: Side, number: u32, x: f64, y: f64) -> Self {
        let team = match side {
            Side::Home => &mut self.snapshot.home_team,
            Side::Away => &mut self.snapshot.away_team,
        };
        team.players.retain(|p| p.number != number);
        team.players.push(Player {
            number,
            team_side: side,
            position: Point::new(x, y),
        });
        self
    }

    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        SnapshotBuilder::new()
            .ball(5000.0, 5000.0)
            .held_by(Side::Away, 9)
            .player(Side::Home, 1, 0.0, 5000.0)
            .player(Side::Home, 7, 4000.0, 5000.0)
            .player(Side::Away, 1, 20000.0, 5000.0)
            .player(Side::Away, 9, 5000.0, 5000.0)
            .build()
    }

    #[test]
    fn view_resolves_teams_from_side() {
        let snap = sample();
        let view = snap.view(Side::Home, 7);
        assert_eq!(view.me().unwrap().number, 7);
        assert_eq!(view.my_team().len(), 2);
        assert!(view.opponents().iter().all(|p| p.team_side == Side::Away));
        assert!(!view.team_has_ball());
        assert_eq!(view.holder().unwrap().number, 9);
        assert_eq!(view.opponent_goalkeeper().unwrap().position.x, 20000.0);
    }

    #[test]
    fn missing_me_is_an_error() {
        let snap = sample();
        let err = snap.view(Side::Home, 10).me().unwrap_err();
        assert_eq!(
            err,
            DecisionError::MissingPlayer {
                side: Side::Home,
                number: 10
            }
        );
    }

    #[test]
    fn empty_roster_is_reported_before_missing_player() {
        let snap = SnapshotBuilder::new()
            .player(Side::Away, 7, 9000.0, 5000.0)
            .build();
        let err = snap.view(Side::Home, 7).me().unwrap_err();
        assert_eq!(err, DecisionError::EmptyRoster { side: Side::Home });
        assert!(err.is_recoverable());
    }

    #[test]
    fn builder_replaces_duplicate_numbers() {
        let snap = SnapshotBuilder::new()
            .player(Side::Home, 4, 1.0, 1.0)
            .player(Side::Home, 4, 2.0, 2.0)
            .build();
        assert_eq!(snap.home_team.players.len(), 1);
        assert_eq!(snap.home_team.players[0].position, Point::new(2.0, 2.0));
    }

    #[test]
    fn snapshot_parses_from_transport_json() {
        let raw = r#"{
            "turn": 12,
            "ball": {"position": {"x": 100.0, "y": 200.0}, "holder": {"side": "home", "number": 5}},
            "home_team": {"side": "home", "players": [
                {"number": 5, "team_side": "home", "position": {"x": 100.0, "y": 200.0}}
            ]},
            "away_team": {"side": "away"}
        }"#;
        let snap: Snapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snap.turn, 12);
        assert_eq!(snap.holder().unwrap().number, 5);
        assert!(snap.away_team.players.is_empty());
    }

    #[test]
    fn side_parses_case_insensitively() {
        assert_eq!("HOME".parse::<Side>().unwrap(), Side::Home);
        assert!("left".parse::<Side>().is_err());
    }
}
