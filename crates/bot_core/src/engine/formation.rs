//! Formation table: (phase, jersey number) -> region cell
//!
//! Cells are team-relative grid coordinates (col 0 = own goal), so one table
//! serves both sides. The table is built and validated once at startup and is
//! read-only afterwards; share it across agents behind an `Arc`.

use crate::error::{ConfigError, FormationError};
use serde::{Deserialize, Serialize};

pub const FIRST_OUTFIELD_NUMBER: u32 = 2;
pub const LAST_OUTFIELD_NUMBER: u32 = 11;
const OUTFIELD_SLOTS: usize = (LAST_OUTFIELD_NUMBER - FIRST_OUTFIELD_NUMBER + 1) as usize;

/// Team shape, chosen from where the ball is and who has it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Defensive,
    Normal,
    Offensive,
    Attack,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::Defensive,
        Phase::Normal,
        Phase::Offensive,
        Phase::Attack,
    ];

    fn index(self) -> usize {
        match self {
            Phase::Defensive => 0,
            Phase::Normal => 1,
            Phase::Offensive => 2,
            Phase::Attack => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

/// One row of a serialized table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormationEntry {
    pub phase: Phase,
    pub number: u32,
    pub col: u32,
    pub row: u32,
}

/// Built-in 10x6 tactic. Index 0 is player #2.
const STANDARD: [(Phase, [(u32, u32); OUTFIELD_SLOTS]); 4] = [
    (
        Phase::Defensive,
        [(1, 1), (2, 2), (2, 3), (1, 4), (3, 1), (3, 2), (3, 3), (3, 4), (4, 3), (4, 2)],
    ),
    (
        Phase::Normal,
        [(2, 1), (4, 2), (4, 3), (2, 4), (6, 1), (8, 2), (8, 3), (6, 4), (7, 4), (7, 1)],
    ),
    (
        Phase::Offensive,
        [(3, 1), (5, 2), (5, 3), (3, 4), (7, 1), (8, 2), (8, 3), (7, 4), (9, 3), (9, 2)],
    ),
    (
        Phase::Attack,
        [(4, 1), (6, 2), (6, 3), (4, 4), (8, 0), (9, 2), (9, 3), (8, 5), (9, 4), (9, 1)],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormationTable {
    cells: [[Cell; OUTFIELD_SLOTS]; 4],
}

fn slot_index(number: u32) -> Result<usize, FormationError> {
    if (FIRST_OUTFIELD_NUMBER..=LAST_OUTFIELD_NUMBER).contains(&number) {
        Ok((number - FIRST_OUTFIELD_NUMBER) as usize)
    } else {
        Err(FormationError::NumberOutOfRange(number))
    }
}

impl FormationTable {
    /// Builds a table, failing on the first missing, duplicate or
    /// out-of-range entry.
    pub fn from_entries(
        entries: impl IntoIterator<Item = FormationEntry>,
    ) -> Result<Self, FormationError> {
        let mut staged: [[Option<Cell>; OUTFIELD_SLOTS]; 4] = [[None; OUTFIELD_SLOTS]; 4];

        for entry in entries {
            let idx = slot_index(entry.number)?;
            let slot = &mut staged[entry.phase.index()][idx];
            if slot.is_some() {
                return Err(FormationError::DuplicateSlot {
                    phase: entry.phase,
                    number: entry.number,
                });
            }
            *slot = Some(Cell {
                col: entry.col,
                row: entry.row,
            });
        }

        let mut cells = [[Cell { col: 0, row: 0 }; OUTFIELD_SLOTS]; 4];
        for phase in Phase::ALL {
            for (idx, staged_cell) in staged[phase.index()].iter().enumerate() {
                cells[phase.index()][idx] = staged_cell.ok_or(FormationError::MissingSlot {
                    phase,
                    number: idx as u32 + FIRST_OUTFIELD_NUMBER,
                })?;
            }
        }

        Ok(Self { cells })
    }

    /// The built-in tactic for a 10x6 grid.
    pub fn standard() -> Result<Self, FormationError> {
        Self::from_entries(STANDARD.iter().flat_map(|(phase, slots)| {
            slots.iter().enumerate().map(|(idx, &(col, row))| FormationEntry {
                phase: *phase,
                number: idx as u32 + FIRST_OUTFIELD_NUMBER,
                col,
                row,
            })
        }))
    }

    /// Parses a JSON array of [`FormationEntry`].
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let entries: Vec<FormationEntry> = serde_json::from_str(raw)?;
        Ok(Self::from_entries(entries)?)
    }

    pub fn cell(&self, phase: Phase, number: u32) -> Result<Cell, FormationError> {
        Ok(self.cells[phase.index()][slot_index(number)?])
    }

    /// Every cell must fit a `cols x rows` grid.
    pub fn validate_grid(&self, cols: u32, rows: u32) -> Result<(), FormationError> {
        for entry in self.entries() {
            if entry.col >= cols || entry.row >= rows {
                return Err(FormationError::CellOutOfGrid {
                    phase: entry.phase,
                    number: entry.number,
                    col: entry.col,
                    row: entry.row,
                    cols,
                    rows,
                });
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<FormationEntry> {
        Phase::ALL
            .iter()
            .flat_map(|&phase| {
                self.cells[phase.index()]
                    .iter()
                    .enumerate()
                    .map(move |(idx, cell)| FormationEntry {
                        phase,
                        number: idx as u32 + FIRST_OUTFIELD_NUMBER,
                        col: cell.col,
                        row: cell.row,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_covers_every_phase_and_number() {
        let table = FormationTable::standard().unwrap();
        for phase in Phase::ALL {
            for number in FIRST_OUTFIELD_NUMBER..=LAST_OUTFIELD_NUMBER {
                assert!(table.cell(phase, number).is_ok());
            }
        }
        assert_eq!(table.entries().len(), 40);
        assert!(table.validate_grid(10, 6).is_ok());
    }

    #[test]
    fn standard_table_known_cells() {
        let table = FormationTable::standard().unwrap();
        assert_eq!(table.cell(Phase::Defensive, 2).unwrap(), Cell { col: 1, row: 1 });
        assert_eq!(table.cell(Phase::Normal, 7).unwrap(), Cell { col: 8, row: 2 });
        assert_eq!(table.cell(Phase::Offensive, 11).unwrap(), Cell { col: 9, row: 2 });
    }

    #[test]
    fn goalkeeper_and_reserve_numbers_have_no_slot() {
        let table = FormationTable::standard().unwrap();
        assert_eq!(
            table.cell(Phase::Normal, 1),
            Err(FormationError::NumberOutOfRange(1))
        );
        assert_eq!(
            table.cell(Phase::Normal, 12),
            Err(FormationError::NumberOutOfRange(12))
        );
    }

    #[test]
    fn missing_entry_fails_at_build_time() {
        let mut entries = FormationTable::standard().unwrap().entries();
        entries.retain(|e| !(e.phase == Phase::Attack && e.number == 9));
        assert_eq!(
            FormationTable::from_entries(entries),
            Err(FormationError::MissingSlot {
                phase: Phase::Attack,
                number: 9
            })
        );
    }

    #[test]
    fn duplicate_entry_rejected() {
        let mut entries = FormationTable::standard().unwrap().entries();
        entries.push(entries[0]);
        assert!(matches!(
            FormationTable::from_entries(entries),
            Err(FormationError::DuplicateSlot { .. })
        ));
    }

    #[test]
    fn grid_validation_catches_small_grids() {
        let table = FormationTable::standard().unwrap();
        assert!(matches!(
            table.validate_grid(8, 6),
            Err(FormationError::CellOutOfGrid { .. })
        ));
    }

    #[test]
    fn json_entries_round_trip() {
        let table = FormationTable::standard().unwrap();
        let raw = serde_json::to_string(&table.entries()).unwrap();
        assert!(raw.contains("\"DEFENSIVE\""));
        assert_eq!(FormationTable::from_json_str(&raw).unwrap(), table);
    }
}
