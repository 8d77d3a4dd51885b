/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::{
    ops::Range,
    sync::atomic::{AtomicUsize, Ordering},
};
use sync_cell_slice::SyncCell;

/// Marks slots that do not contain a node. It is larger than any node, so
/// sorting moves unused slots to the end.
pub(crate) const EMPTY: usize = usize::MAX;

/// A fixed-capacity frontier shared by the threads of a parallel visit.
///
/// A frontier plays one of two roles in each round of the visit:
///
/// - as the current frontier, it is read: threads reserve with
///   [`read_batch`](Frontier::read_batch) disjoint batches of its nodes;
/// - as the next frontier, it is written: threads reserve batches of free slots
///   and fill them using a private [`WriteBatch`] and
///   [`push`](Frontier::push), padding the unused part of their last batch
///   with [`pad`](Frontier::pad).
///
/// In both roles the shared cursor is touched once per batch. Between rounds,
/// [`seal`](Frontier::seal) turns a filled next frontier into a valid current
/// frontier.
///
/// A frontier must never be read and written in the same round.
pub(crate) struct Frontier {
    slots: Box<[SyncCell<usize>]>,
    len: usize,
    cursor: AtomicUsize,
}

/// A range of slots of a [`Frontier`] reserved by a thread for writing.
#[derive(Debug, Default)]
pub(crate) struct WriteBatch {
    free: Range<usize>,
}

impl Frontier {
    /// Creates an empty frontier with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| SyncCell::new(EMPTY)).collect(),
            len: 0,
            cursor: AtomicUsize::new(0),
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the frontier contains no nodes, as computed by the
    /// last call to [`seal`](Frontier::seal).
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advances the cursor by `n` and returns the reserved range, clipped to
    /// `limit`.
    #[inline(always)]
    fn reserve(&self, n: usize, limit: usize) -> Range<usize> {
        let start = self.cursor.fetch_add(n, Ordering::Relaxed);
        start.min(limit)..start.saturating_add(n).min(limit)
    }

    /// Reserves the next `batch_size` nodes of the frontier, returning `None`
    /// if the frontier has been drained.
    #[inline]
    pub fn read_batch(&self, batch_size: usize) -> Option<impl Iterator<Item = usize> + '_> {
        let range = self.reserve(batch_size, self.len);
        if range.is_empty() {
            return None;
        }
        // SAFETY: nobody writes into a frontier during the rounds it is read.
        Some(self.slots[range].iter().map(|slot| unsafe { slot.get() }))
    }

    /// Appends `node` using the slots reserved in `batch`, reserving
    /// `batch_size` new slots if `batch` is exhausted.
    ///
    /// # Panics
    ///
    /// If the capacity of the frontier is exhausted.
    #[inline]
    pub fn push(&self, batch: &mut WriteBatch, node: usize, batch_size: usize) {
        if batch.free.is_empty() {
            batch.free = self.reserve(batch_size, self.capacity());
        }
        let index = batch
            .free
            .next()
            .expect("frontier capacity should account for all partially filled batches");
        // SAFETY: each index is handed out by exactly one reservation, and
        // nobody reads a frontier during the rounds it is written.
        unsafe { self.slots[index].set(node) };
    }

    /// Fills the unused slots of `batch` with [`EMPTY`].
    pub fn pad(&self, batch: WriteBatch) {
        for index in batch.free {
            // SAFETY: as in `push`.
            unsafe { self.slots[index].set(EMPTY) };
        }
    }

    /// Sorts the nodes written during the last round, removing padding and
    /// duplicates, and makes them the content of the frontier.
    ///
    /// Returns the new length, and resets the cursor.
    pub fn seal(&mut self) -> usize {
        let filled = (*self.cursor.get_mut()).min(self.capacity());
        let written = &mut self.slots[..filled];
        // SAFETY: we have exclusive access to the slots.
        written.sort_unstable_by_key(|slot| unsafe { slot.get() });
        let nodes = written.partition_point(|slot| unsafe { slot.get() } != EMPTY);

        let mut len = 0;
        for i in 0..nodes {
            let node = *self.slots[i].get_mut();
            if len == 0 || *self.slots[len - 1].get_mut() != node {
                *self.slots[len].get_mut() = node;
                len += 1;
            }
        }

        self.len = len;
        *self.cursor.get_mut() = 0;
        len
    }

    /// Returns an iterator over the nodes of the frontier.
    ///
    /// Exclusive access is required as slots are read without
    /// synchronization.
    pub fn nodes(&mut self) -> impl Iterator<Item = usize> + '_ {
        self.slots[..self.len].iter_mut().map(|slot| *slot.get_mut())
    }

    /// Empties the frontier and resets the cursor.
    pub fn clear(&mut self) {
        self.len = 0;
        *self.cursor.get_mut() = 0;
    }

    /// Makes `root` the only node of the frontier.
    pub fn start_from(&mut self, root: usize) {
        *self.slots[0].get_mut() = root;
        self.len = 1;
        *self.cursor.get_mut() = 0;
    }
}
