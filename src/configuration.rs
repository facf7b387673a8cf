//! The contract between puzzles and the solver.

use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// A single state of some puzzle.
///
/// This is everything the solver knows about a puzzle: a goal predicate,
/// neighbour enumeration, structural equality with a hash consistent with it,
/// and a rendering for humans. Configurations representing the same abstract
/// state must compare equal and hash identically; the solver relies on that
/// to de-duplicate and never re-checks it.
///
/// Configurations are immutable values. `neighbours` hands out fresh ones and
/// leaves `self` untouched, so a configuration admitted to the search keeps
/// meaning the same state for the whole run.
///
/// ```
/// use puzzles::configuration::Configuration;
/// use puzzles::solver::solve;
///
/// #[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// struct Countdown(u8);
///
/// impl std::fmt::Display for Countdown {
///     fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
///
/// impl Configuration for Countdown {
///     fn is_goal(&self) -> bool {
///         self.0 == 0
///     }
///     fn neighbours(&self) -> Vec<Self> {
///         self.0.checked_sub(1).map(Countdown).into_iter().collect()
///     }
/// }
///
/// let solution = solve(Countdown(3));
/// assert_eq!(solution.moves(), 3);
/// ```
pub trait Configuration: Clone + Debug + Display + Eq + Hash {
    /// Does this configuration satisfy the goal?
    ///
    /// Deterministic and side-effect free.
    fn is_goal(&self) -> bool;

    /// Every configuration one move away, dead ends included.
    ///
    /// Always finite. The order only matters as a tie-break between equally
    /// short paths.
    fn neighbours(&self) -> Vec<Self>;
}
