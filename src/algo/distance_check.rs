/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{breadth_first, Parallel, Sequential, Summary, VisitError};
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use rayon::ThreadPool;

/// Checks a parallel breadth-first visit against a sequential one.
///
/// The check owns a graph and two distance arrays, one filled by
/// [`run_sequential`](DistanceCheck::run_sequential) and one filled by
/// [`run_parallel`](DistanceCheck::run_parallel). Both arrays are zero
/// before the first visit, and each visit overwrites its own array
/// completely.
///
/// # Examples
///
/// ```
/// use frontier_bfs::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = AdjListGraph::from_arcs(5, [(0, 1), (1, 2)]);
/// let thread_pool = Threads::Default.build().unwrap();
/// let mut check = DistanceCheck::new(graph);
/// check.run_sequential(0, no_logging![]).unwrap();
/// check.run_parallel(0, &thread_pool, no_logging![]).unwrap();
/// assert!(check.distances_match());
/// assert_eq!(check.par_distances(), &[0, 1, 2, 0, 0]);
/// ```
pub struct DistanceCheck<G: RandomAccessGraph> {
    graph: G,
    batch_size: usize,
    seq_dists: Box<[usize]>,
    par_dists: Box<[usize]>,
}

impl<G: RandomAccessGraph> DistanceCheck<G> {
    /// Creates a check on `graph` with zeroed distance arrays.
    pub fn new(graph: G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            batch_size: breadth_first::DEFAULT_BATCH_SIZE,
            seq_dists: vec![0; num_nodes].into_boxed_slice(),
            par_dists: vec![0; num_nodes].into_boxed_slice(),
        }
    }

    /// Sets the batch size of the parallel visit.
    ///
    /// # Panics
    ///
    /// If `batch_size` is zero.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        assert!(batch_size > 0, "The batch size must be positive");
        self.batch_size = batch_size;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Returns the distances computed by the last sequential visit.
    pub fn seq_distances(&self) -> &[usize] {
        &self.seq_dists
    }

    /// Returns the distances computed by the last parallel visit.
    pub fn par_distances(&self) -> &[usize] {
        &self.par_dists
    }

    /// Fills the sequential distance array visiting from `root`.
    ///
    /// # Errors
    ///
    /// If `root` is out of bounds; the array is left untouched.
    pub fn run_sequential(
        &mut self,
        root: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<Summary, VisitError> {
        breadth_first::Seq::new(&self.graph).distances_from(root, &mut self.seq_dists, pl)
    }

    /// Returns whether the two distance arrays are equal.
    pub fn distances_match(&self) -> bool {
        self.seq_dists == self.par_dists
    }
}

impl<G: RandomAccessGraph + Sync> DistanceCheck<G> {
    /// Fills the parallel distance array visiting from `root` with all the
    /// threads of `thread_pool`.
    ///
    /// # Errors
    ///
    /// If `root` is out of bounds; the array is left untouched.
    pub fn run_parallel(
        &mut self,
        root: usize,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<Summary, VisitError> {
        breadth_first::ParLevelSync::with_batch_size(&self.graph, self.batch_size)
            .par_distances_from(root, &mut self.par_dists, thread_pool, pl)
    }
}
