//! The hoppers solitaire puzzle.
//!
//! Frogs sit on lily pads laid out on a diamond lattice. A frog jumps over a
//! green frog onto the empty pad directly beyond, and the green frog leaves
//! the pond. The puzzle is solved once only the red frog remains.

use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::configuration::Configuration;

/// Contents of one board position.
#[derive(Copy, Clone, Debug, derive_more::Display, PartialEq, Eq, Hash)]
pub enum HoppersCell {
    /// Water between the pads, never enterable.
    #[display("*")]
    Invalid,
    /// An open lily pad.
    #[display(".")]
    Empty,
    /// A green frog, fair game for jumps.
    #[display("G")]
    Green,
    /// The red frog that must end up alone.
    #[display("R")]
    Red,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HoppersCellParseError {
    #[error("Invalid cell character {0:?}, expected one of '*', '.', 'G', 'R'")]
    InvalidCharacter(char),
}

impl TryFrom<char> for HoppersCell {
    type Error = HoppersCellParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '*' => Ok(Self::Invalid),
            '.' => Ok(Self::Empty),
            'G' => Ok(Self::Green),
            'R' => Ok(Self::Red),
            ch => Err(HoppersCellParseError::InvalidCharacter(ch)),
        }
    }
}

/// A single state of the hoppers puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HoppersConfig {
    rows: usize,
    cols: usize,
    /// Row-major board, rectangular by construction.
    grid: Vec<Vec<HoppersCell>>,
}

impl HoppersConfig {
    /// In-bounds position at `(dr, dc)` from `(r, c)`, if any.
    fn offset(&self, r: usize, c: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
        let r = r.checked_add_signed(dr)?;
        let c = c.checked_add_signed(dc)?;
        (r < self.rows && c < self.cols).then_some((r, c))
    }

    /// Jumps the frog at `(r, c)` over `(dr, dc)`, if that move is legal.
    ///
    /// The jumped pad must hold a green frog and the landing pad, one more
    /// step in the same direction, must be empty.
    fn try_jump(&self, successors: &mut Vec<Self>, r: usize, c: usize, dr: isize, dc: isize) {
        let Some((over_r, over_c)) = self.offset(r, c, dr, dc) else {
            return;
        };
        let Some((land_r, land_c)) = self.offset(r, c, 2 * dr, 2 * dc) else {
            return;
        };
        if self.grid[over_r][over_c] != HoppersCell::Green
            || self.grid[land_r][land_c] != HoppersCell::Empty
        {
            return;
        }

        let mut grid = self.grid.clone();
        grid[land_r][land_c] = grid[r][c];
        grid[over_r][over_c] = HoppersCell::Empty;
        grid[r][c] = HoppersCell::Empty;
        successors.push(Self {
            rows: self.rows,
            cols: self.cols,
            grid,
        });
    }
}

impl Configuration for HoppersConfig {
    /// No green frogs left and the red one still on the pond.
    fn is_goal(&self) -> bool {
        let mut has_red = false;
        for row in &self.grid {
            for cell in row {
                match cell {
                    HoppersCell::Green => return false,
                    HoppersCell::Red => has_red = true,
                    HoppersCell::Invalid | HoppersCell::Empty => {}
                }
            }
        }
        has_red
    }

    fn neighbours(&self) -> Vec<Self> {
        let mut successors = Vec::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                if !matches!(self.grid[r][c], HoppersCell::Green | HoppersCell::Red) {
                    continue;
                }
                // Straight jumps only line up on the even rows of the lattice.
                if r % 2 == 0 {
                    for (dr, dc) in [(2, 0), (-2, 0), (0, -2), (0, 2)] {
                        self.try_jump(&mut successors, r, c, dr, dc);
                    }
                }
                for (dr, dc) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
                    self.try_jump(&mut successors, r, c, dr, dc);
                }
            }
        }
        successors
    }
}

impl std::fmt::Display for HoppersConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in &self.grid {
            for cell in row {
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum HoppersParseError {
    #[error("Missing board dimensions")]
    MissingDimensions,
    #[error("Invalid board dimension {0:?}")]
    InvalidDimension(String),
    #[error("Invalid token {token:?} at row {r}, column {c}, expected a single character")]
    InvalidToken { token: String, r: usize, c: usize },
    #[error("Invalid cell at row {r}, column {c} ({e})")]
    InvalidCell {
        e: HoppersCellParseError,
        r: usize,
        c: usize,
    },
    #[error("Board cut short, expected {expected} cells but found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("Failed to read {p:?} ({e})")]
    IOError { p: PathBuf, e: std::io::Error },
}

fn parse_dimension(token: Option<&str>) -> Result<usize, HoppersParseError> {
    let token = token.ok_or(HoppersParseError::MissingDimensions)?;
    token
        .parse()
        .map_err(|_| HoppersParseError::InvalidDimension(token.to_owned()))
}

impl TryFrom<&str> for HoppersConfig {
    type Error = HoppersParseError;

    /// Reads the `rows cols` header and then one token per cell.
    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let mut tokens = input.split_whitespace();
        let rows = parse_dimension(tokens.next())?;
        let cols = parse_dimension(tokens.next())?;

        let mut grid = vec![vec![HoppersCell::Empty; cols]; rows];
        let mut found = 0;
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let Some(token) = tokens.next() else {
                    return Err(HoppersParseError::Truncated {
                        expected: rows * cols,
                        found,
                    });
                };
                let mut chars = token.chars();
                let (Some(ch), None) = (chars.next(), chars.next()) else {
                    return Err(HoppersParseError::InvalidToken {
                        token: token.to_owned(),
                        r,
                        c,
                    });
                };
                *cell = HoppersCell::try_from(ch)
                    .map_err(|e| HoppersParseError::InvalidCell { e, r, c })?;
                found += 1;
            }
        }

        Ok(Self { rows, cols, grid })
    }
}

impl TryFrom<&Path> for HoppersConfig {
    type Error = HoppersParseError;

    fn try_from(p: &Path) -> Result<Self, Self::Error> {
        let input = std::fs::read_to_string(p).map_err(|e| HoppersParseError::IOError {
            p: p.to_owned(),
            e,
        })?;

        Self::try_from(input.as_str())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::solver::solve;

    const POND_1X5: &str = "1 5\nR * G * .";

    #[test]
    fn parses_a_board_and_renders_it_back() {
        let config = HoppersConfig::try_from(POND_1X5).unwrap();

        assert_eq!(config.to_string(), "R * G * . \n");
    }

    #[test]
    fn straight_jump_east_over_a_green_frog() {
        let config = HoppersConfig::try_from(POND_1X5).unwrap();

        let successors = config.neighbours();
        assert_eq!(successors.len(), 1);
        assert_eq!(successors[0].to_string(), ". * . * R \n");
        assert!(successors[0].is_goal());
    }

    #[test]
    fn solves_the_single_jump_pond() {
        let solution = solve(HoppersConfig::try_from(POND_1X5).unwrap());

        assert_eq!(solution.moves(), 1);
        assert_eq!(solution.stats.total, 2);
        assert_eq!(solution.stats.unique, 2);
    }

    #[test]
    fn chains_two_jumps_across_a_longer_pond() {
        let config = HoppersConfig::try_from("1 9\nR * G * . * G * .").unwrap();

        let solution = solve(config);
        assert_eq!(solution.moves(), 2);
        assert_eq!(solution.stats.total, 3);
        assert_eq!(solution.stats.unique, 3);
        assert_eq!(
            solution.path.last().unwrap().to_string(),
            ". * . * . * . * R \n"
        );
    }

    #[test]
    fn clears_a_diamond_pond_with_diagonal_jumps() {
        let pond = indoc! {"
            5 5
            R * . * .
            * G * * *
            . * . * .
            * * * G *
            . * . * .
        "};

        let solution = solve(HoppersConfig::try_from(pond).unwrap());
        assert_eq!(solution.moves(), 2);
        assert_eq!(solution.stats.total, 3);
        assert_eq!(solution.stats.unique, 3);
        let cleared = solution.path.last().unwrap();
        assert!(cleared.to_string().ends_with(". * . * R \n"));
    }

    #[test]
    fn odd_rows_allow_no_straight_jumps() {
        let config = HoppersConfig::try_from("3 5\n* * * * *\nR * G * .\n* * * * *").unwrap();

        assert!(config.neighbours().is_empty());
        assert!(solve(config).is_unsolvable());
    }

    #[test]
    fn diagonal_jumps_work_on_any_row() {
        let config = HoppersConfig::try_from("3 3\nR . .\n. G .\n. . .").unwrap();

        let successors = config.neighbours();
        assert_eq!(successors.len(), 1);
        assert!(successors[0].is_goal());
    }

    #[test]
    fn a_pond_without_the_red_frog_is_never_solved() {
        let green_only = HoppersConfig::try_from("1 3\nG . .").unwrap();
        assert!(!green_only.is_goal());

        let cleared = HoppersConfig::try_from("1 3\n. . .").unwrap();
        assert!(!cleared.is_goal());
    }

    #[test]
    fn loader_rejects_malformed_boards() {
        assert!(matches!(
            HoppersConfig::try_from(""),
            Err(HoppersParseError::MissingDimensions)
        ));
        assert!(matches!(
            HoppersConfig::try_from("two 5\nR * G * ."),
            Err(HoppersParseError::InvalidDimension(_))
        ));
        assert!(matches!(
            HoppersConfig::try_from("1 5\nR * G *"),
            Err(HoppersParseError::Truncated {
                expected: 5,
                found: 4,
            })
        ));
        assert!(matches!(
            HoppersConfig::try_from("1 2\nR frog"),
            Err(HoppersParseError::InvalidToken { .. })
        ));
        assert!(matches!(
            HoppersConfig::try_from("1 2\nR x"),
            Err(HoppersParseError::InvalidCell {
                e: HoppersCellParseError::InvalidCharacter('x'),
                ..
            })
        ));
    }

    #[test]
    fn loader_reports_missing_files() {
        let missing = Path::new("data/hoppers/no-such-pond.txt");

        assert!(matches!(
            HoppersConfig::try_from(missing),
            Err(HoppersParseError::IOError { .. })
        ));
    }

    #[test]
    fn equal_boards_hash_together() {
        let a = HoppersConfig::try_from(POND_1X5).unwrap();
        let b = HoppersConfig::try_from(POND_1X5).unwrap();

        assert_eq!(a, b);
        let mut seen = FxHashSet::default();
        seen.insert(a);
        assert!(seen.contains(&b));
    }
}
