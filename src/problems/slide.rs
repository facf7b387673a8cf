//! The sliding-tile puzzle.
//!
//! Numbered tiles fill a grid except for a single empty slot. A move slides a
//! tile orthogonally adjacent to the slot into it. The board is solved when
//! the tiles read in ascending order with the empty slot last.

use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::configuration::Configuration;

/// A numbered tile. `0` stands for the empty slot.
pub type Tile = u8;

const EMPTY: Tile = 0;
const MAX_CELLS: usize = Tile::MAX as usize + 1;

/// A single state of the sliding-tile puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlideConfig {
    rows: usize,
    cols: usize,
    /// Row-major board, rectangular by construction.
    grid: Vec<Vec<Tile>>,
    /// Position of the empty slot. Redundant with `grid`, tracked to avoid
    /// re-scanning on every move.
    empty: (usize, usize),
}

impl SlideConfig {
    /// The goal board, tiles ascending and the empty slot bottom-right.
    #[must_use]
    pub fn solved(rows: usize, cols: usize) -> Self {
        let cells = rows * cols;
        debug_assert!((1..=MAX_CELLS).contains(&cells));

        let mut grid = vec![vec![EMPTY; cols]; rows];
        for i in 0..cells - 1 {
            grid[i / cols][i % cols] = (i + 1) as Tile;
        }

        Self {
            rows,
            cols,
            grid,
            empty: (rows - 1, cols - 1),
        }
    }

    /// A board `moves` random slides away from the solved one.
    ///
    /// The walk can revisit states, so the shortest solution may take fewer
    /// than `moves` slides.
    #[must_use]
    pub fn shuffled<R: rand::Rng>(rows: usize, cols: usize, moves: usize, rng: &mut R) -> Self {
        let mut config = Self::solved(rows, cols);
        for _ in 0..moves {
            let mut successors = config.neighbours();
            if successors.is_empty() {
                break;
            }
            let pick = rng.random_range(0..successors.len());
            config = successors.swap_remove(pick);
        }
        config
    }

    /// Copies `self` with the tile at `(r, c)` slid into the empty slot.
    ///
    /// `(r, c)` must be orthogonally adjacent to the slot.
    #[must_use]
    fn slid(&self, r: usize, c: usize) -> Self {
        let (er, ec) = self.empty;
        debug_assert!(r.abs_diff(er) + c.abs_diff(ec) == 1);

        let mut grid = self.grid.clone();
        grid[er][ec] = grid[r][c];
        grid[r][c] = EMPTY;

        Self {
            rows: self.rows,
            cols: self.cols,
            grid,
            empty: (r, c),
        }
    }
}

impl Configuration for SlideConfig {
    fn is_goal(&self) -> bool {
        let cells = self.rows * self.cols;
        self.grid.iter().flatten().enumerate().all(|(i, &tile)| {
            if i + 1 == cells {
                tile == EMPTY
            } else {
                usize::from(tile) == i + 1
            }
        })
    }

    /// Slides from above, below, left of and right of the empty slot.
    fn neighbours(&self) -> Vec<Self> {
        let (er, ec) = self.empty;
        let mut successors = Vec::with_capacity(4);
        if er > 0 {
            successors.push(self.slid(er - 1, ec));
        }
        if er + 1 < self.rows {
            successors.push(self.slid(er + 1, ec));
        }
        if ec > 0 {
            successors.push(self.slid(er, ec - 1));
        }
        if ec + 1 < self.cols {
            successors.push(self.slid(er, ec + 1));
        }
        successors
    }
}

impl std::fmt::Display for SlideConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in &self.grid {
            for &tile in row {
                if tile == EMPTY {
                    write!(f, " . ")?;
                } else {
                    write!(f, "{tile:2} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum SlideParseError {
    #[error("Missing board dimensions")]
    MissingDimensions,
    #[error("Invalid board dimension {0:?}")]
    InvalidDimension(String),
    #[error("Board has no cells")]
    EmptyBoard,
    #[error("Board of {rows}x{cols} exceeds the {max} cells a tile can number")]
    BoardTooLarge {
        rows: usize,
        cols: usize,
        max: usize,
    },
    #[error("Invalid tile {token:?} at row {r}, column {c}")]
    InvalidTile { token: String, r: usize, c: usize },
    #[error("Tile {tile} out of range for a {rows}x{cols} board")]
    TileOutOfRange {
        tile: usize,
        rows: usize,
        cols: usize,
    },
    #[error("Tile {tile} appears more than once")]
    DuplicateTile { tile: usize },
    #[error("More than one empty cell")]
    MultipleEmptyCells,
    #[error("No empty cell")]
    MissingEmptyCell,
    #[error("Board cut short, expected {expected} cells but found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("Failed to read {p:?} ({e})")]
    IOError { p: PathBuf, e: std::io::Error },
}

fn parse_dimension(token: Option<&str>) -> Result<usize, SlideParseError> {
    let token = token.ok_or(SlideParseError::MissingDimensions)?;
    token
        .parse()
        .map_err(|_| SlideParseError::InvalidDimension(token.to_owned()))
}

impl TryFrom<&str> for SlideConfig {
    type Error = SlideParseError;

    /// Reads the `rows cols` header and then one token per cell, `.` marking
    /// the empty slot.
    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let mut tokens = input.split_whitespace();
        let rows = parse_dimension(tokens.next())?;
        let cols = parse_dimension(tokens.next())?;
        let cells = rows
            .checked_mul(cols)
            .filter(|&cells| cells <= MAX_CELLS)
            .ok_or(SlideParseError::BoardTooLarge {
                rows,
                cols,
                max: MAX_CELLS,
            })?;
        if cells == 0 {
            return Err(SlideParseError::EmptyBoard);
        }

        let mut grid = vec![vec![EMPTY; cols]; rows];
        let mut empty = None;
        let mut seen = vec![false; cells];
        let mut found = 0;
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let Some(token) = tokens.next() else {
                    return Err(SlideParseError::Truncated {
                        expected: cells,
                        found,
                    });
                };
                if token == "." {
                    if empty.replace((r, c)).is_some() {
                        return Err(SlideParseError::MultipleEmptyCells);
                    }
                } else {
                    let tile: usize = token.parse().map_err(|_| SlideParseError::InvalidTile {
                        token: token.to_owned(),
                        r,
                        c,
                    })?;
                    if tile == 0 || tile >= cells {
                        return Err(SlideParseError::TileOutOfRange { tile, rows, cols });
                    }
                    if std::mem::replace(&mut seen[tile], true) {
                        return Err(SlideParseError::DuplicateTile { tile });
                    }
                    *cell = tile as Tile;
                }
                found += 1;
            }
        }
        let empty = empty.ok_or(SlideParseError::MissingEmptyCell)?;

        Ok(Self {
            rows,
            cols,
            grid,
            empty,
        })
    }
}

impl TryFrom<&Path> for SlideConfig {
    type Error = SlideParseError;

    fn try_from(p: &Path) -> Result<Self, Self::Error> {
        let input = std::fs::read_to_string(p).map_err(|e| SlideParseError::IOError {
            p: p.to_owned(),
            e,
        })?;

        Self::try_from(input.as_str())
    }
}
