//! The river-crossing puzzle.
//!
//! A pack of pups and wolves starts on the left bank and must end up on the
//! right one. Rowing left to right the boat carries one pup, two pups, or one
//! wolf; only a single pup ever rows it back.

use crate::configuration::Configuration;

/// River bank the boat is moored at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// A single state of the crossing puzzle.
///
/// The herd never changes size, so the right-bank counts are redundant with
/// the left-bank ones. They are carried anyway for rendering, and within one
/// puzzle the derived equality then matches the structural definition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CrossingConfig {
    pups_left: u32,
    wolves_left: u32,
    pups_right: u32,
    wolves_right: u32,
    boat: Side,
}

impl CrossingConfig {
    /// Everyone starts on the left bank, boat included.
    #[must_use]
    pub fn new(pups: u32, wolves: u32) -> Self {
        Self {
            pups_left: pups,
            wolves_left: wolves,
            pups_right: 0,
            wolves_right: 0,
            boat: Side::Left,
        }
    }

    /// Ferries `pups` and `wolves` across, flipping the boat side.
    ///
    /// Availability on the departing bank is the caller's concern.
    #[must_use]
    fn ferry(&self, pups: u32, wolves: u32) -> Self {
        match self.boat {
            Side::Left => Self {
                pups_left: self.pups_left - pups,
                wolves_left: self.wolves_left - wolves,
                pups_right: self.pups_right + pups,
                wolves_right: self.wolves_right + wolves,
                boat: Side::Right,
            },
            Side::Right => Self {
                pups_left: self.pups_left + pups,
                wolves_left: self.wolves_left + wolves,
                pups_right: self.pups_right - pups,
                wolves_right: self.wolves_right - wolves,
                boat: Side::Left,
            },
        }
    }
}

impl Configuration for CrossingConfig {
    /// The left bank must be empty.
    fn is_goal(&self) -> bool {
        self.pups_left == 0 && self.wolves_left == 0
    }

    fn neighbours(&self) -> Vec<Self> {
        let mut successors = Vec::with_capacity(3);
        match self.boat {
            Side::Left => {
                if self.pups_left >= 1 {
                    successors.push(self.ferry(1, 0));
                }
                if self.pups_left >= 2 {
                    successors.push(self.ferry(2, 0));
                }
                if self.wolves_left >= 1 {
                    successors.push(self.ferry(0, 1));
                }
            }
            Side::Right => {
                // Only a pup rows the boat back.
                if self.pups_right >= 1 {
                    successors.push(self.ferry(1, 0));
                }
            }
        }
        successors
    }
}

impl std::fmt::Display for CrossingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.boat {
            Side::Left => write!(
                f,
                "(BOAT)  left=[{}, {}], right=[{}, {}]",
                self.pups_left, self.wolves_left, self.pups_right, self.wolves_right
            ),
            Side::Right => write!(
                f,
                "        left=[{}, {}], right=[{}, {}] (BOAT)",
                self.pups_left, self.wolves_left, self.pups_right, self.wolves_right
            ),
        }
    }
}
