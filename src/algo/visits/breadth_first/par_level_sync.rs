/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::frontier::{Frontier, WriteBatch};
use crate::algo::visits::{Parallel, Summary, VisitError};
use crate::graph::RandomAccessGraph;
use crate::utils::{LevelBarrier, VisitedSet};
use dsi_progress_logger::ProgressLog;
use rayon::ThreadPool;
use std::ops::ControlFlow;

/// The default number of nodes per batch.
pub const DEFAULT_BATCH_SIZE: usize = 256;

/// Level-synchronous parallel breadth-first visits.
///
/// Every thread of the pool runs the same loop: it drains the current frontier
/// in batches of nodes reserved through an atomic cursor, claims the unvisited
/// successors of each node, and appends the claimed nodes to the next frontier
/// through a private batch of slots, again reserved through an atomic cursor.
/// When the current frontier is drained, threads wait on a barrier; the last
/// thread to arrive sorts the next frontier, stamps the distances of its nodes,
/// and swaps the two frontiers. The visit ends when a level is empty.
///
/// Threads synchronize only once per level, and touch shared cursors once per
/// batch: high batch sizes reduce overhead, but may lead to decreased
/// performance on graphs with a skewed outdegree distribution.
///
/// The frontiers have capacity equal to the number of nodes plus the number of
/// threads times the batch size, as each thread can leave a partially filled
/// batch in each level. Batches larger than the graph are useless, so the batch
/// size actually used is at most the number of nodes.
///
/// Successors returned by the graph must be smaller than the number of nodes.
///
/// # Examples
///
/// ```
/// use frontier_bfs::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = AdjListGraph::from_arcs(5, [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);
/// let thread_pool = Threads::NumThreads(4).build().unwrap();
/// let mut visit = breadth_first::ParLevelSync::new(&graph);
/// let mut dists = [0; 5];
/// let summary = visit
///     .par_distances_from(0, &mut dists, &thread_pool, no_logging![])
///     .unwrap();
/// assert_eq!(dists, [0, 1, 1, 2, 3]);
/// assert_eq!(summary.eccentricity, 3);
/// ```
pub struct ParLevelSync<G: RandomAccessGraph> {
    graph: G,
    batch_size: usize,
}

impl<G: RandomAccessGraph> ParLevelSync<G> {
    /// Creates a level-synchronous parallel visit using
    /// [`DEFAULT_BATCH_SIZE`] nodes per batch.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    pub fn new(graph: G) -> Self {
        Self::with_batch_size(graph, DEFAULT_BATCH_SIZE)
    }

    /// Creates a level-synchronous parallel visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    /// * `batch_size`: the number of nodes reserved at once when reading from
    ///   or writing to a frontier.
    ///
    /// # Panics
    ///
    /// If `batch_size` is zero.
    pub fn with_batch_size(graph: G, batch_size: usize) -> Self {
        assert!(batch_size > 0, "The batch size must be positive");
        Self { graph, batch_size }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

/// The state shared by the threads of a visit.
struct Levels<'a> {
    curr: Frontier,
    next: Frontier,
    /// The distance of the nodes being discovered.
    distance: usize,
    reached: usize,
    eccentricity: usize,
    dists: &'a mut [usize],
}

impl Levels<'_> {
    /// Turns the next frontier into the current one, stamping distances.
    fn complete(&mut self) {
        let found = self.next.seal();
        for node in self.next.nodes() {
            self.dists[node] = self.distance;
        }
        log::debug!("Level {}: {} nodes", self.distance, found);

        if found != 0 {
            self.reached += found;
            self.eccentricity = self.distance;
        }
        self.distance += 1;
        std::mem::swap(&mut self.curr, &mut self.next);
        self.next.clear();
    }
}

impl<G: RandomAccessGraph + Sync> Parallel for ParLevelSync<G> {
    fn par_distances_from(
        &mut self,
        root: usize,
        dists: &mut [usize],
        thread_pool: &ThreadPool,
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

        let num_threads = thread_pool.current_num_threads();
        // The root is valid, so the batch size stays positive
        let batch_size = self.batch_size.min(num_nodes);
        let capacity = num_threads
            .checked_mul(batch_size)
            .and_then(|slack| slack.checked_add(num_nodes))
            .expect("frontier capacity should fit in a usize");

        pl.item_name("node");
        pl.expected_updates(Some(num_nodes));
        pl.start(format!(
            "Visiting from node {} using {} threads...",
            root, num_threads
        ));

        dists.fill(0);
        let visited = VisitedSet::new(num_nodes);
        visited.try_claim(root);
        let mut curr = Frontier::with_capacity(capacity);
        curr.start_from(root);

        let barrier = LevelBarrier::new(
            num_threads,
            Levels {
                curr,
                next: Frontier::with_capacity(capacity),
                distance: 1,
                reached: 1,
                eccentricity: 0,
                dists,
            },
        );

        let graph = &self.graph;

        thread_pool.broadcast(|_| {
            barrier.run(
                |levels| {
                    if levels.curr.is_empty() {
                        return ControlFlow::Break(());
                    }
                    let mut batch = WriteBatch::default();
                    while let Some(nodes) = levels.curr.read_batch(batch_size) {
                        for node in nodes {
                            for &succ in graph.successors(node) {
                                if visited.try_claim(succ) {
                                    levels.next.push(&mut batch, succ, batch_size);
                                }
                            }
                        }
                    }
                    levels.next.pad(batch);
                    ControlFlow::Continue(())
                },
                Levels::complete,
            )
        });

        let levels = barrier.into_inner();
        pl.update_with_count(levels.reached);
        pl.done();

        Ok(Summary {
            reached: levels.reached,
            eccentricity: levels.eccentricity,
        })
    }
}
