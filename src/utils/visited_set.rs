/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::sync::atomic::Ordering;
use sux::bits::AtomicBitVec;

/// A set of nodes that can be claimed concurrently.
///
/// Each node has an atomic flag that can only go from unclaimed to claimed:
/// among all threads calling [`try_claim`](VisitedSet::try_claim) on the same
/// node, exactly one will get `true`.
///
/// All operations use relaxed ordering: visibility across threads is
/// provided by the synchronization between visit rounds.
pub struct VisitedSet {
    bits: AtomicBitVec,
}

impl VisitedSet {
    /// Creates a set of `num_nodes` unclaimed nodes.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            bits: AtomicBitVec::new(num_nodes),
        }
    }

    /// Claims `node`, returning whether this call performed the transition
    /// from unclaimed to claimed.
    ///
    /// # Panics
    ///
    /// If `node` is out of bounds.
    #[inline(always)]
    pub fn try_claim(&self, node: usize) -> bool {
        !self.bits.swap(node, true, Ordering::Relaxed)
    }

    /// Returns whether `node` has been claimed.
    #[inline(always)]
    pub fn is_claimed(&self, node: usize) -> bool {
        self.bits.get(node, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_claim_once() {
        let visited = VisitedSet::new(10);
        assert!(!visited.is_claimed(3));
        assert!(visited.try_claim(3));
        assert!(visited.is_claimed(3));
        assert!(!visited.try_claim(3));
        assert!(!visited.is_claimed(4));
    }

    #[test]
    fn test_concurrent_claims() {
        let visited = VisitedSet::new(1000);
        let winners = std::thread::scope(|s| {
            let handles = (0..4)
                .map(|_| {
                    s.spawn(|| (0..1000).filter(|&node| visited.try_claim(node)).count())
                })
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .sum::<usize>()
        });
        assert_eq!(winners, 1000);
    }
}
