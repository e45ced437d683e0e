//! A* search over any [`Topology`].
//!
//! The working state is an arena of [`Node`]s indexed by cell index, built
//! fresh for every search and dropped when it returns. The open node with
//! the lowest `f` is picked by scanning open cells in index order, and on
//! equal `f` the first one found wins. This makes paths fully reproducible.

use std::collections::BTreeSet;

use gridwalk_core::{GridError, GridResult};

use crate::traits::Topology;

/// Lifecycle of a node. Only ever moves forward:
/// `Unevaluated -> Open -> Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeStatus {
    #[default]
    Unevaluated,
    Open,
    Closed,
}

/// Per-cell search bookkeeping. `f == g + h` at all times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub parent: Option<usize>,
    /// Traversal cost multiplier; `<= 0` (or NaN) means impassable.
    pub cost: f64,
    pub g: f64,
    pub h: f64,
    pub f: f64,
    pub status: NodeStatus,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            parent: None,
            cost: 1.0,
            g: 0.0,
            h: 0.0,
            f: 0.0,
            status: NodeStatus::Unevaluated,
        }
    }
}

impl Node {
    #[inline]
    pub fn is_passable(&self) -> bool {
        self.cost > 0.0
    }
}

/// A configured A* query over a borrowed topology.
///
/// ```
/// use gridwalk_core::RectGrid;
/// use gridwalk_paths::PathSearch;
///
/// let grid = RectGrid::new(5, 5, 16.0, 16.0).unwrap();
/// let path = PathSearch::new(&grid).diagonal(true).run(0, 24).unwrap();
/// assert_eq!(path, Some(vec![0, 6, 12, 18, 24]));
/// ```
pub struct PathSearch<'a, T: Topology + ?Sized> {
    topology: &'a T,
    costs: Option<&'a [f64]>,
    diagonal: bool,
    max_expansions: Option<usize>,
}

impl<T: Topology + ?Sized> Clone for PathSearch<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Topology + ?Sized> Copy for PathSearch<'_, T> {}

impl<'a, T: Topology + ?Sized> PathSearch<'a, T> {
    /// Uniform cost 1 everywhere, no diagonals, no expansion cap.
    pub fn new(topology: &'a T) -> Self {
        Self {
            topology,
            costs: None,
            diagonal: false,
            max_expansions: None,
        }
    }

    /// Per-cell cost multipliers, one per cell in index order.
    pub fn costs(mut self, costs: &'a [f64]) -> Self {
        self.costs = Some(costs);
        self
    }

    /// Allow diagonal moves on topologies that have them.
    pub fn diagonal(mut self, allow: bool) -> Self {
        self.diagonal = allow;
        self
    }

    /// Give up, reporting no path, after closing `limit` non-goal nodes.
    pub fn max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Search for the cheapest path from `start` to `goal`.
    ///
    /// Returns the cell indices from `start` to `goal` inclusive, `Ok(None)`
    /// if the goal cannot be reached, or [`GridError::InvalidRange`] if an
    /// endpoint is outside the grid.
    pub fn run(&self, start: usize, goal: usize) -> GridResult<Option<Vec<usize>>> {
        let size = self.topology.size();
        for index in [start, goal] {
            if index >= size {
                return Err(GridError::InvalidRange { index, size });
            }
        }
        if let Some(costs) = self.costs {
            if costs.len() != size {
                return Err(GridError::CostTableSize {
                    expected: size,
                    actual: costs.len(),
                });
            }
        }

        log::debug!("astar: {start} -> {goal} over {size} cells (diagonal: {})", self.diagonal);

        let mut nodes: Vec<Node> = match self.costs {
            Some(costs) => costs
                .iter()
                .map(|&cost| Node {
                    cost,
                    ..Node::default()
                })
                .collect(),
            None => vec![Node::default(); size],
        };
        // Open cells, iterated in index order by the selection scan.
        let mut open: BTreeSet<usize> = BTreeSet::new();

        nodes[start].status = NodeStatus::Open;
        self.score(&mut nodes, start, None, goal);
        open.insert(start);

        let mut nbuf = Vec::with_capacity(8);
        let mut expanded = 0usize;

        loop {
            let Some(current) = lowest_f(&nodes, &open) else {
                log::debug!("astar: {goal} unreachable after {expanded} expansions");
                return Ok(None);
            };
            open.remove(&current);
            nodes[current].status = NodeStatus::Closed;

            if current == goal {
                break;
            }

            if self.max_expansions.is_some_and(|limit| expanded >= limit) {
                log::debug!("astar: expansion limit {expanded} reached before {goal}");
                return Ok(None);
            }
            expanded += 1;

            nbuf.clear();
            self.topology.neighbors(current, self.diagonal, &mut nbuf);

            for &ni in nbuf.iter() {
                let Some(&n) = nodes.get(ni) else {
                    continue;
                };
                if !n.is_passable() {
                    continue;
                }
                match n.status {
                    NodeStatus::Closed => {}
                    NodeStatus::Unevaluated => {
                        nodes[ni].status = NodeStatus::Open;
                        self.score(&mut nodes, ni, Some(current), goal);
                        open.insert(ni);
                    }
                    NodeStatus::Open => {
                        let tentative = nodes[current].g + self.step(ni, current, n.cost);
                        // Ties go to the most recently evaluated parent.
                        if tentative <= n.g {
                            let node = &mut nodes[ni];
                            node.parent = Some(current);
                            node.g = tentative;
                            node.f = tentative + node.h;
                        }
                    }
                }
            }
        }

        log::debug!("astar: reached {goal} after {expanded} expansions");
        Ok(Some(reconstruct(&nodes, goal)))
    }

    #[inline]
    fn step(&self, index: usize, parent: usize, cost: f64) -> f64 {
        self.topology.step_cost(parent, index) * cost
    }

    /// Compute `g`, `h` and `f` of `index` reached from `parent`.
    fn score(&self, nodes: &mut [Node], index: usize, parent: Option<usize>, goal: usize) {
        let g = match parent {
            Some(p) => nodes[p].g + self.step(index, p, nodes[index].cost),
            None => 0.0,
        };
        let h = self.topology.estimate(index, goal);
        let n = &mut nodes[index];
        n.parent = parent;
        n.g = g;
        n.h = h;
        n.f = g + h;
    }
}

/// First open node, in index order, with the lowest `f`.
fn lowest_f(nodes: &[Node], open: &BTreeSet<usize>) -> Option<usize> {
    let mut best: Option<usize> = None;
    for &i in open {
        match best {
            Some(b) if nodes[i].f >= nodes[b].f => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Walk parents back from `goal` and return the path start-first.
fn reconstruct(nodes: &[Node], goal: usize) -> Vec<usize> {
    let mut path = vec![goal];
    let mut ci = goal;
    while let Some(p) = nodes[ci].parent {
        path.push(p);
        ci = p;
    }
    path.reverse();
    path
}

/// `find_path` for every [`Topology`].
pub trait FindPath: Topology {
    /// Cheapest path from `start` to `goal`, optionally weighted by a
    /// per-cell cost table and optionally allowing diagonal moves.
    ///
    /// See [`PathSearch::run`] for the meaning of the result.
    fn find_path(
        &self,
        start: usize,
        goal: usize,
        costs: Option<&[f64]>,
        allow_diagonal: bool,
    ) -> GridResult<Option<Vec<usize>>> {
        let mut search = PathSearch::new(self).diagonal(allow_diagonal);
        if let Some(costs) = costs {
            search = search.costs(costs);
        }
        search.run(start, goal)
    }
}

impl<T: Topology + ?Sized> FindPath for T {}
