//! Field dimensions and region grid size

use serde::{Deserialize, Serialize};

/// Physical field dimensions in field units.
///
/// Home defends the goal at `x = 0`, away defends the goal at `x = width`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    /// Goal line to goal line
    pub width: f64,
    /// Touchline to touchline
    pub height: f64,
    /// Lower goal post y
    pub goal_min_y: f64,
    /// Upper goal post y
    pub goal_max_y: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 20000.0,
            height: 10000.0,
            goal_min_y: 4000.0,
            goal_max_y: 6000.0,
        }
    }
}

impl FieldConfig {
    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }

    pub fn half_x(&self) -> f64 {
        self.width / 2.0
    }
}

/// Region grid used for coarse tactical decisions.
///
/// More columns/rows means finer formation slots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GridConfig {
    pub cols: u32,
    pub rows: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cols: 10, rows: 6 }
    }
}
