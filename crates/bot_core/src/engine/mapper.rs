//! Field partition into a team-relative region grid
//!
//! ## Coordinate Systems
//!
//! **Field units** (snapshot, commands):
//! - x: 0 = home goal line, `width` = away goal line
//! - y: 0..`height`, touchline to touchline
//!
//! **Region grid** (tactics, formations):
//! - col 0 is always next to the team's *own* goal, `cols - 1` next to the goal it attacks
//! - the away side mirrors both axes, so formations are written once for both sides
//!
//! Region distance is measured in grid cells, never in field units.

use super::geometry::Point;
use super::snapshot::Side;
use crate::config::{FieldConfig, GridConfig};
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Grid {
    cols: u32,
    rows: u32,
    region_width: f64,
    region_height: f64,
    field_width: f64,
    field_height: f64,
    side: Side,
}

impl Grid {
    fn region(&self, col: u32, row: u32) -> Region {
        let col = col.min(self.cols - 1);
        let row = row.min(self.rows - 1);

        let x = f64::from(col) * self.region_width + self.region_width / 2.0;
        let y = f64::from(row) * self.region_height + self.region_height / 2.0;
        let center = match self.side {
            Side::Home => Point::new(x, y),
            Side::Away => Point::new(self.field_width - x, self.field_height - y),
        };

        Region {
            col,
            row,
            center,
            grid: *self,
        }
    }
}

/// One cell of the grid.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    col: u32,
    row: u32,
    center: Point,
    grid: Grid,
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.col == other.col && self.row == other.row && self.grid.side == other.grid.side
    }
}

impl Region {
    pub fn col(&self) -> u32 {
        self.col
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// One column toward the attacked goal (clamped at the grid edge).
    pub fn front(&self) -> Region {
        self.grid.region(self.col + 1, self.row)
    }

    /// One column toward the own goal (clamped at the grid edge).
    pub fn back(&self) -> Region {
        self.grid.region(self.col.saturating_sub(1), self.row)
    }

    pub fn left(&self) -> Region {
        self.grid.region(self.col, self.row + 1)
    }

    pub fn right(&self) -> Region {
        self.grid.region(self.col, self.row.saturating_sub(1))
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.col, self.row)
    }
}

/// Distance between two regions in grid cells.
pub fn region_distance(a: &Region, b: &Region) -> f64 {
    let dc = f64::from(a.col) - f64::from(b.col);
    let dr = f64::from(a.row) - f64::from(b.row);
    (dc * dc + dr * dr).sqrt()
}

/// Both row and column within one cell of each other.
pub fn is_near(a: &Region, b: &Region) -> bool {
    a.col.abs_diff(b.col) <= 1 && a.row.abs_diff(b.row) <= 1
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    pub side: Side,
    pub center: Point,
    pub top_pole: Point,
    pub bottom_pole: Point,
}

#[derive(Debug, Clone)]
pub struct Mapper {
    grid: Grid,
    field: FieldConfig,
}

impl Mapper {
    pub fn new(field: &FieldConfig, grid: GridConfig, side: Side) -> Result<Self, ConfigError> {
        if grid.cols == 0 || grid.rows == 0 {
            return Err(ConfigError::Invalid(format!(
                "mapper needs a non-empty grid, got {}x{}",
                grid.cols, grid.rows
            )));
        }
        Ok(Self {
            grid: Grid {
                cols: grid.cols,
                rows: grid.rows,
                region_width: field.width / f64::from(grid.cols),
                region_height: field.height / f64::from(grid.rows),
                field_width: field.width,
                field_height: field.height,
                side,
            },
            field: field.clone(),
        })
    }

    pub fn side(&self) -> Side {
        self.grid.side
    }

    pub fn cols(&self) -> u32 {
        self.grid.cols
    }

    pub fn rows(&self) -> u32 {
        self.grid.rows
    }

    pub fn field(&self) -> &FieldConfig {
        &self.field
    }

    pub fn region(&self, col: u32, row: u32) -> Region {
        self.grid.region(col, row)
    }

    /// Out-of-field points land in the nearest edge region.
    pub fn region_from_point(&self, point: Point) -> Region {
        let cx = (point.x / self.grid.region_width).floor().max(0.0) as u32;
        let cy = (point.y / self.grid.region_height).floor().max(0.0) as u32;
        let col = cx.min(self.grid.cols - 1);
        let row = cy.min(self.grid.rows - 1);

        match self.grid.side {
            Side::Home => self.grid.region(col, row),
            Side::Away => self
                .grid
                .region(self.grid.cols - col - 1, self.grid.rows - row - 1),
        }
    }

    /// Converts a team-view point (attacking toward +x) to field units.
    /// The transform is its own inverse.
    pub fn from_team_view(&self, point: Point) -> Point {
        match self.grid.side {
            Side::Home => point,
            Side::Away => Point::new(
                self.field.width - point.x,
                self.field.height - point.y,
            ),
        }
    }

    pub fn to_team_view(&self, point: Point) -> Point {
        self.from_team_view(point)
    }

    fn goal_at(&self, side: Side) -> Goal {
        let x = match side {
            Side::Home => 0.0,
            Side::Away => self.field.width,
        };
        Goal {
            side,
            center: Point::new(x, self.field.center_y()),
            top_pole: Point::new(x, self.field.goal_max_y),
            bottom_pole: Point::new(x, self.field.goal_min_y),
        }
    }

    /// Goal this team shoots at.
    pub fn attack_goal(&self) -> Goal {
        self.goal_at(self.grid.side.opposite())
    }

    /// Goal this team defends.
    pub fn defense_goal(&self) -> Goal {
        self.goal_at(self.grid.side)
    }

    pub fn is_near(&self, a: &Region, b: &Region) -> bool {
        is_near(a, b)
    }
}
