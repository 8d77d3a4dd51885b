/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{Sequential, Summary, VisitError};
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use nonmax::NonMaxUsize;
use std::collections::VecDeque;
use sux::bits::BitVec;

/// A sequential breadth-first visit.
///
/// This is the classical textbook algorithm, except that distances are not
/// read back from the distance slice: the visit queue contains a separator
/// between nodes at different distances, and the current distance is
/// incremented every time a separator is extracted. To represent the
/// separator in a compact way nodes are stored as [`NonMaxUsize`], so the
/// `None` variant of `Option<NonMaxUsize>` can be used as a separator.
///
/// # Examples
///
/// ```
/// use frontier_bfs::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = AdjListGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (1, 3), (3, 3)]);
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut dists = [0; 4];
/// let summary = visit.distances_from(0, &mut dists, no_logging![]).unwrap();
/// assert_eq!(dists, [0, 1, 2, 2]);
/// assert_eq!(summary.reached, 4);
/// assert_eq!(summary.eccentricity, 2);
/// ```
pub struct Seq<G: RandomAccessGraph> {
    graph: G,
}

impl<G: RandomAccessGraph> Seq<G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    pub fn new(graph: G) -> Self {
        Self { graph }
    }
}

impl<G: RandomAccessGraph> Sequential for Seq<G> {
    fn distances_from(
        &mut self,
        root: usize,
        dists: &mut [usize],
        pl: &mut impl ProgressLog,
    ) -> Result<Summary, VisitError> {
        let num_nodes = self.graph.num_nodes();
        if root >= num_nodes {
            return Err(VisitError::RootOutOfBounds { root, num_nodes });
        }
        assert_eq!(
            dists.len(),
            num_nodes,
            "The distance slice must have one entry per node"
        );

        pl.item_name("node");
        pl.expected_updates(Some(num_nodes));
        pl.start(format!("Visiting from node {} sequentially...", root));

        dists.fill(0);
        let mut visited = BitVec::new(num_nodes);
        let mut queue = VecDeque::new();

        visited.set(root, true);
        queue.push_back(Some(
            NonMaxUsize::new(root).expect("node index should never be usize::MAX"),
        ));
        queue.push_back(None);

        let mut reached = 1;
        let mut distance = 1;

        while let Some(current_node) = queue.pop_front() {
            match current_node {
                Some(node) => {
                    for &succ in self.graph.successors(node.get()) {
                        if !visited[succ] {
                            visited.set(succ, true);
                            dists[succ] = distance;
                            reached += 1;
                            queue.push_back(Some(
                                NonMaxUsize::new(succ)
                                    .expect("node index should never be usize::MAX"),
                            ));
                        }
                    }
                    pl.light_update();
                }
                None => {
                    // We are at the end of the current level, so
                    // we increment the distance and add a separator.
                    if !queue.is_empty() {
                        distance += 1;
                        queue.push_back(None);
                    }
                }
            }
        }

        pl.done();

        Ok(Summary {
            reached,
            eccentricity: distance - 1,
        })
    }
}
