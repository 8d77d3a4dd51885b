/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::RandomAccessGraph;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A mutable directed graph stored as a list of successor lists.
///
/// The number of nodes is fixed at construction. Successors are kept in
/// insertion order and each successor list contains no duplicates: adding an
/// arc that is already present, or an arc with an endpoint out of bounds, does
/// nothing.
///
/// # Examples
///
/// ```
/// use frontier_bfs::graph::AdjListGraph;
///
/// let mut graph = AdjListGraph::new(3);
/// assert!(graph.add_arc(0, 2));
/// assert!(graph.add_arc(0, 1));
/// assert!(!graph.add_arc(0, 2));
/// assert!(!graph.add_arc(0, 3));
/// assert_eq!(graph.successors(0), &[2, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjListGraph {
    succ: Vec<Vec<usize>>,
    num_arcs: usize,
}

impl AdjListGraph {
    /// Creates a graph with `num_nodes` nodes and no arcs.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            succ: vec![Vec::new(); num_nodes],
            num_arcs: 0,
        }
    }

    /// Creates a graph with `num_nodes` nodes and the given arcs.
    ///
    /// Arcs are added in order using [`add_arc`](AdjListGraph::add_arc), so
    /// duplicates and arcs with endpoints out of bounds are dropped.
    pub fn from_arcs(num_nodes: usize, arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut graph = Self::new(num_nodes);
        for (src, dst) in arcs {
            graph.add_arc(src, dst);
        }
        graph
    }

    /// Creates a graph with `num_nodes` nodes and `num_arcs` arcs chosen
    /// uniformly at random using a generator seeded with `seed`.
    ///
    /// Random arcs hitting an existing arc are dropped, so the result may
    /// have fewer than `num_arcs` arcs.
    pub fn random(num_nodes: usize, num_arcs: usize, seed: u64) -> Self {
        let mut graph = Self::new(num_nodes);
        if num_nodes == 0 {
            return graph;
        }
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_arcs {
            let src = rng.random_range(0..num_nodes);
            let dst = rng.random_range(0..num_nodes);
            graph.add_arc(src, dst);
        }
        graph
    }

    /// Returns the number of nodes.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    /// Returns the number of arcs.
    #[inline(always)]
    pub fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    /// Adds the arc from `src` to `dst`.
    ///
    /// Returns `true` if the arc was added, `false` if it was already present
    /// or if one of the endpoints is not smaller than the number of nodes.
    pub fn add_arc(&mut self, src: usize, dst: usize) -> bool {
        let num_nodes = self.num_nodes();
        if src >= num_nodes || dst >= num_nodes {
            return false;
        }
        let succ = &mut self.succ[src];
        if succ.contains(&dst) {
            return false;
        }
        succ.push(dst);
        self.num_arcs += 1;
        true
    }

    /// Returns the successors of `node` in insertion order.
    ///
    /// # Panics
    ///
    /// If `node` is not smaller than the number of nodes.
    #[inline(always)]
    pub fn successors(&self, node: usize) -> &[usize] {
        &self.succ[node]
    }

    /// Returns the outdegree of `node`.
    #[inline(always)]
    pub fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }
}

impl RandomAccessGraph for AdjListGraph {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        &self.succ[node]
    }
}
