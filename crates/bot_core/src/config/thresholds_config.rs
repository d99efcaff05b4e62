//! Decision thresholds
//!
//! Every tunable number the behaviors read lives here. Observed policy
//! revisions disagree on several of them (claim count 8 vs 5 vs 4, pressure
//! distance, clearance target), so none is hardcoded at a call site.
//!
//! | Category | Description |
//! |----------|-------------|
//! | Dispute | who claims a loose ball |
//! | Holding | shoot / pass / escape kick |
//! | Support | off-ball positional upkeep |
//! | Goalkeeper | jump / clamp / clearance |
//!
//! Distances are in field units unless the field name says otherwise.
//! Positions marked *team view* assume the team attacks toward +x and are
//! mirrored for the away side.

use crate::engine::geometry::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ThresholdsConfig {
    pub dispute: DisputeThresholds,
    pub holding: HoldingThresholds,
    pub support: SupportThresholds,
    pub goalkeeper: GoalkeeperThresholds,
}

impl ThresholdsConfig {
    /// First observed revision: claim only when 8 teammates are farther,
    /// clear toward the middle of the far goal.
    pub fn legacy() -> Self {
        Self {
            dispute: DisputeThresholds {
                closer_teammate_threshold: 8,
            },
            goalkeeper: GoalkeeperThresholds {
                clearance_target: Point::new(20000.0, 4500.0),
                ..GoalkeeperThresholds::default()
            },
            ..Self::default()
        }
    }

    /// Most conservative revision: only the 4-farther check.
    pub fn cautious() -> Self {
        Self {
            dispute: DisputeThresholds {
                closer_teammate_threshold: 4,
            },
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisputeThresholds {
    /// The agent claims the ball once this many eligible teammates are
    /// farther from it than the agent is (capped by roster size).
    pub closer_teammate_threshold: usize,
}

impl Default for DisputeThresholds {
    fn default() -> Self {
        Self {
            closer_teammate_threshold: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HoldingThresholds {
    /// Nearest opponent closer than this forces a pass
    pub pressure_distance: f64,
    /// Max kick speed accepted by the simulator
    pub max_kick_speed: f64,
    /// Shot aim distance inside the goal post
    pub shot_post_margin: f64,
    /// Only the first N ranked allies are checked for a forward pass
    pub forward_scan_limit: usize,
    /// Fallback pass receivers must be at least this far from the holder
    pub min_pass_separation: f64,
    /// Pass power per field unit of pass length
    pub pass_speed_per_unit: f64,
    pub min_pass_power: f64,
    /// Escape kick target: how far ahead of the holder (team view x)
    pub escape_min_ahead: f64,
    pub escape_max_ahead: f64,
    /// Escape kick target y band
    pub escape_min_y: f64,
    pub escape_max_y: f64,
    /// Must stay below `max_kick_speed`
    pub escape_kick_power: f64,
    /// Queue a random lateral step before the ball decision
    pub juke_enabled: bool,
    pub juke_offset: f64,
}

impl Default for HoldingThresholds {
    fn default() -> Self {
        Self {
            pressure_distance: 800.0,
            max_kick_speed: 400.0,
            shot_post_margin: 300.0,
            forward_scan_limit: 5,
            min_pass_separation: 1000.0,
            pass_speed_per_unit: 0.1,
            min_pass_power: 100.0,
            escape_min_ahead: 1000.0,
            escape_max_ahead: 3000.0,
            escape_min_y: 3500.0,
            escape_max_y: 6500.0,
            escape_kick_power: 200.0,
            juke_enabled: true,
            juke_offset: 100.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SupportThresholds {
    /// Fraction of the way from the agent toward its formation slot
    pub formation_blend: f64,
    /// Ball y outside `[safe_min_y, safe_max_y]` triggers central cover
    pub safe_min_y: f64,
    pub safe_max_y: f64,
    /// A teammate this close to the ball gets a support run
    pub support_radius: f64,
    /// Support run target, ahead of that teammate (team view x)
    pub support_offset: f64,
}

impl Default for SupportThresholds {
    fn default() -> Self {
        Self {
            formation_blend: 0.5,
            safe_min_y: 2000.0,
            safe_max_y: 8000.0,
            support_radius: 1500.0,
            support_offset: 500.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GoalkeeperThresholds {
    /// Ball within this distance of the defended goal line is "near post"
    pub near_post_band: f64,
    /// Vertical keeper-ball gap that turns a catch into a jump
    pub jump_vertical_delta: f64,
    pub jump_height: f64,
    /// Keeper target stays this far inside the posts
    pub post_margin: f64,
    /// Clearance kick target (team view)
    pub clearance_target: Point,
}

impl Default for GoalkeeperThresholds {
    fn default() -> Self {
        Self {
            near_post_band: 1300.0,
            jump_vertical_delta: 2000.0,
            jump_height: 200.0,
            post_margin: 200.0,
            clearance_target: Point::new(19000.0, 9000.0),
        }
    }
}
