//! Breadth-first search for the shortest solution of a puzzle.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::configuration::Configuration;

/// Counters describing a completed search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Configurations generated, duplicates included. The start counts too.
    pub total: usize,
    /// Distinct configurations admitted to the predecessor map.
    pub unique: usize,
}

/// What a completed search returns: a shortest path and its counters.
///
/// The two degenerate outcomes stay distinguishable without poking at the
/// path length: [`Solution::is_unsolvable`] for an exhausted search and
/// [`Solution::already_solved`] for a start that needed no moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<C: Configuration> {
    /// Start to goal, inclusive. Empty when no goal is reachable, a single
    /// configuration when the start already was one.
    pub path: Vec<C>,
    pub stats: SearchStats,
}

impl<C: Configuration> Solution<C> {
    /// The search exhausted the reachable space without finding a goal.
    #[inline(always)]
    #[must_use]
    pub fn is_unsolvable(&self) -> bool {
        self.path.is_empty()
    }

    /// The start satisfied the goal before any move was made.
    #[inline(always)]
    #[must_use]
    pub fn already_solved(&self) -> bool {
        self.path.len() == 1
    }

    /// Moves from start to goal. Zero when already solved or unsolvable.
    #[inline(always)]
    #[must_use]
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The configuration one optimal move from the start, if any move helps.
    #[inline(always)]
    #[must_use]
    pub fn hint(&self) -> Option<&C> {
        self.path.get(1)
    }

    /// Renders the counters and the estimated peak footprint of the
    /// predecessor map, which holds every unique configuration and grows
    /// with the reachable space until a goal surfaces.
    pub fn write_memory_stats<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        use size::Size;
        use std::mem::size_of;
        use thousands::Separable;

        writeln!(out, "BfsSearch Stats:")?;
        writeln!(
            out,
            "  - Total:  {}",
            self.stats.total.separate_with_commas()
        )?;
        let s = size_of::<(C, Option<C>)>();
        let l = self.stats.unique;
        writeln!(
            out,
            "  - Unique: {} ({})",
            l.separate_with_commas(),
            Size::from_bytes(l * s)
        )?;
        writeln!(
            out,
            "  - Path:   {}",
            self.path.len().separate_with_commas()
        )?;

        Ok(())
    }

    pub fn print_memory_stats(&self) {
        self.write_memory_stats(std::io::stdout().lock()).unwrap()
    }
}

impl<C: Configuration> std::fmt::Display for Solution<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_unsolvable() {
            write!(
                f,
                "Solution(none, {}/{} configs)",
                self.stats.unique, self.stats.total
            )
        } else {
            write!(
                f,
                "Solution({} moves, {}/{} configs)",
                self.moves(),
                self.stats.unique,
                self.stats.total
            )
        }
    }
}

/// Breadth-first search from a start configuration.
///
/// The frontier is expanded one move-depth at a time, so the first goal to
/// reach the frontier head closes a shortest path.
#[derive(Debug)]
pub struct BfsSearch<C: Configuration> {
    /// Amalgamation of,
    /// - The predecessor links, to rebuild the path once a goal surfaces
    /// - The "Visited Set" (its keys)
    ///
    /// The start is the only configuration mapped to no predecessor, and
    /// entries are never overwritten, so the recorded predecessor is always
    /// one from the shallowest layer that reached the configuration.
    predecessor: FxHashMap<C, Option<C>>,

    /// FIFO frontier of admitted, not yet expanded configurations.
    frontier: VecDeque<C>,

    /// Configurations generated so far, duplicates included.
    total_generated: usize,
}

impl<C: Configuration> BfsSearch<C> {
    #[must_use]
    pub fn new(start: C) -> Self {
        let mut search = Self {
            predecessor: FxHashMap::default(),
            frontier: VecDeque::new(),
            total_generated: 1,
        };
        search.predecessor.insert(start.clone(), None);
        search.frontier.push_back(start);

        search.verify_bookkeeping();
        search
    }

    /// Runs the search to completion.
    ///
    /// The goal-check happens on the frontier head as it comes up for
    /// expansion, never when a configuration is admitted. A goal admitted
    /// mid-layer is only recognised after everything queued ahead of it has
    /// been expanded, which keeps the counters deterministic.
    #[must_use]
    pub fn find_solution(mut self) -> Solution<C> {
        let mut goal: Option<C> = None;
        while let Some(current) = self.frontier.pop_front() {
            if current.is_goal() {
                goal = Some(current);
                break;
            }

            for neighbour in current.neighbours() {
                self.total_generated += 1;
                if !self.predecessor.contains_key(&neighbour) {
                    self.predecessor.insert(neighbour.clone(), Some(current.clone()));
                    self.frontier.push_back(neighbour);
                }
            }
            self.verify_bookkeeping();
        }

        let path = match &goal {
            Some(goal) => self.reconstruct_path(goal),
            None => vec![],
        };
        let stats = SearchStats {
            total: self.total_generated,
            unique: self.predecessor.len(),
        };
        log::debug!(
            "Search done: {} unique of {} generated configurations, path of {}",
            stats.unique,
            stats.total,
            path.len()
        );

        Solution { path, stats }
    }

    /// Walks the predecessor links back from `goal` to the start.
    #[must_use]
    fn reconstruct_path(&self, goal: &C) -> Vec<C> {
        // Built goal-first, reversed into start-first order at the end.
        let mut path = vec![goal.clone()];
        let mut step = self.predecessor.get(goal);
        while let Some(Some(config)) = step {
            path.push(config.clone());
            step = self.predecessor.get(config);
        }
        path.reverse();

        debug_assert!(!path.is_empty());
        path
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    fn verify_bookkeeping(&self) {
        // All good... (hopefully)
    }
    #[inline(always)]
    #[cfg(feature = "verify")]
    fn verify_bookkeeping(&self) {
        debug_assert!(self.frontier.len() <= self.predecessor.len());
        debug_assert!(self.predecessor.len() <= self.total_generated);
        for config in &self.frontier {
            debug_assert!(
                self.predecessor.contains_key(config),
                "Frontier configuration {config:?} has no predecessor entry"
            );
        }
    }
}

/// Solves `start` in the fewest possible moves.
///
/// Runs synchronously to completion and keeps every unique configuration it
/// discovers in memory until it returns; the worst case holds the puzzle's
/// whole reachable space at once. Callers wanting a bound must wrap the call.
#[must_use]
pub fn solve<C: Configuration>(start: C) -> Solution<C> {
    BfsSearch::new(start).find_solution()
}
