/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graphs the visits can run on.

mod adj_list;
pub use adj_list::*;

/// A graph providing random access to the successors of its nodes.
///
/// Nodes are identified by indices in `[0..num_nodes())`. Implementations
/// must not change while a visit holds a reference to them, which is
/// guaranteed by the borrow checker as visits borrow the graph immutably.
pub trait RandomAccessGraph {
    /// Returns the number of nodes.
    fn num_nodes(&self) -> usize;

    /// Returns the successors of `node`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `node` is not smaller than
    /// [`num_nodes`](RandomAccessGraph::num_nodes).
    fn successors(&self, node: usize) -> &[usize];
}

impl<G: RandomAccessGraph + ?Sized> RandomAccessGraph for &G {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        (**self).successors(node)
    }
}
