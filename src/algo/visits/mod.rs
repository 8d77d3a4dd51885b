/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits computing distances from a root.
//!
//! Implementations write into a caller-provided slice the number of hops of
//! a shortest path from the root to each reachable node. Nodes that cannot be
//! reached, as well as the root, get distance zero: the returned [`Summary`]
//! tells how many nodes were reached.

pub mod breadth_first;

use dsi_progress_logger::ProgressLog;
use rayon::ThreadPool;
use thiserror::Error;

/// Errors returned by visits.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitError {
    /// The visit root is not a node of the graph.
    #[error("Root {root} out of bounds for a graph with {num_nodes} nodes")]
    RootOutOfBounds { root: usize, num_nodes: usize },
}

/// The outcome of a visit.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Summary {
    /// The number of nodes reached by the visit, including the root.
    pub reached: usize,
    /// The largest distance from the root of a reached node.
    pub eccentricity: usize,
}

/// A sequential visit computing distances.
pub trait Sequential {
    /// Computes the distances of all nodes from `root`.
    ///
    /// The content of `dists` is overwritten: reachable nodes get their
    /// distance from `root`, all other nodes get zero.
    ///
    /// # Errors
    ///
    /// If `root` is out of bounds; in this case `dists` is not modified.
    ///
    /// # Panics
    ///
    /// If the length of `dists` is not the number of nodes of the graph.
    ///
    /// # Arguments
    ///
    /// * `root`: the node to start the visit from.
    ///
    /// * `dists`: the slice receiving the distances.
    ///
    /// * `pl`: a progress logger.
    fn distances_from(
        &mut self,
        root: usize,
        dists: &mut [usize],
        pl: &mut impl ProgressLog,
    ) -> Result<Summary, VisitError>;
}

/// A parallel visit computing distances.
pub trait Parallel {
    /// Computes in parallel the distances of all nodes from `root`.
    ///
    /// See [`Sequential::distances_from`] for the contract. All the threads of
    /// `thread_pool` take part in the visit.
    fn par_distances_from(
        &mut self,
        root: usize,
        dists: &mut [usize],
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<Summary, VisitError>;
}
