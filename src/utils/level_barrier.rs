/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::{
    cell::UnsafeCell,
    ops::ControlFlow,
    sync::{Condvar, Mutex, PoisonError},
};

/// A reusable barrier owning a state that is shared during rounds and
/// modified exclusively between rounds.
///
/// A fixed number of threads call [`run`](LevelBarrier::run) concurrently.
/// Each round, every thread receives a shared reference to the state and
/// performs its part of the work; then it waits at the barrier. The last
/// thread to arrive executes the completion action with a mutable reference
/// to the state while all other threads are blocked, and then releases them
/// for the next round. The effects of the completion action, and of every
/// write performed by any thread during the round, are visible to all threads
/// in the next round.
///
/// The round closure decides whether to stop by returning
/// [`ControlFlow::Break`]. A thread that stops does not arrive at the
/// barrier, so all threads must take the same decision in the same round.
/// This is naturally the case when the decision depends only on the state,
/// which is not modified during the initial part of a round.
///
/// If a thread panics during a round or during the completion action, the
/// barrier is poisoned: the threads waiting on it, and those arriving later,
/// panic instead of blocking forever.
///
/// # Examples
///
/// ```
/// use frontier_bfs::utils::LevelBarrier;
/// use std::ops::ControlFlow;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// // The state is a pair (counter, rounds)
/// let barrier = LevelBarrier::new(4, (AtomicUsize::new(0), 0));
/// std::thread::scope(|s| {
///     for _ in 0..4 {
///         s.spawn(|| {
///             barrier.run(
///                 |(counter, rounds)| {
///                     if *rounds == 3 {
///                         return ControlFlow::Break(());
///                     }
///                     counter.fetch_add(1, Ordering::Relaxed);
///                     ControlFlow::Continue(())
///                 },
///                 |(_, rounds)| *rounds += 1,
///             )
///         });
///     }
/// });
/// let (counter, rounds) = barrier.into_inner();
/// assert_eq!(counter.into_inner(), 12);
/// assert_eq!(rounds, 3);
/// ```
pub struct LevelBarrier<S> {
    num_threads: usize,
    generation: Mutex<Generation>,
    cvar: Condvar,
    state: UnsafeCell<S>,
}

#[derive(Debug, Default)]
struct Generation {
    arrived: usize,
    id: usize,
    poisoned: bool,
}

impl Generation {
    fn check_poisoned(&self) {
        if self.poisoned {
            panic!("Another thread panicked while running a round");
        }
    }
}

/// Poisons the barrier if dropped while its thread is panicking.
struct PoisonOnPanic<'a, S>(&'a LevelBarrier<S>);

impl<S> Drop for PoisonOnPanic<'_, S> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut generation = self
                .0
                .generation
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            generation.poisoned = true;
            self.0.cvar.notify_all();
        }
    }
}

// SAFETY: during a round the state is only accessed through shared references,
// and the completion action is the only code holding a mutable reference,
// which it does while every other participant is blocked on the barrier.
unsafe impl<S: Send + Sync> Sync for LevelBarrier<S> {}

impl<S> LevelBarrier<S> {
    /// Creates a barrier for `num_threads` threads owning `state`.
    ///
    /// # Panics
    ///
    /// If `num_threads` is zero.
    pub fn new(num_threads: usize, state: S) -> Self {
        assert!(num_threads > 0, "A barrier needs at least one thread");
        Self {
            num_threads,
            generation: Mutex::new(Generation::default()),
            cvar: Condvar::new(),
            state: UnsafeCell::new(state),
        }
    }

    /// Returns the number of threads that must arrive to complete a round.
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Consumes the barrier, returning the state.
    pub fn into_inner(self) -> S {
        self.state.into_inner()
    }

    /// Runs rounds until `round` returns [`ControlFlow::Break`].
    ///
    /// This method must be called by exactly
    /// [`num_threads`](LevelBarrier::num_threads) threads. At each round,
    /// `round` is called with a shared reference to the state; if it does not
    /// break, the thread arrives at the barrier, and the last thread arriving
    /// calls its own `complete` on the state.
    ///
    /// # Panics
    ///
    /// If another thread panicked in `round` or `complete`.
    pub fn run(
        &self,
        mut round: impl FnMut(&S) -> ControlFlow<()>,
        mut complete: impl FnMut(&mut S),
    ) {
        let _poison = PoisonOnPanic(self);
        loop {
            // SAFETY: a mutable reference exists only within `arrive`, and
            // only after all threads have finished their part of the round.
            let state = unsafe { &*self.state.get() };
            if round(state).is_break() {
                return;
            }
            self.arrive(&mut complete);
        }
    }

    fn arrive(&self, complete: &mut impl FnMut(&mut S)) {
        let mut generation = self
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        generation.check_poisoned();
        generation.arrived += 1;
        if generation.arrived < self.num_threads {
            let id = generation.id;
            while generation.id == id {
                generation = self
                    .cvar
                    .wait(generation)
                    .unwrap_or_else(PoisonError::into_inner);
                generation.check_poisoned();
            }
        } else {
            // SAFETY: all other threads are waiting on the condition variable,
            // and they will not touch the state before we release them.
            complete(unsafe { &mut *self.state.get() });
            generation.arrived = 0;
            generation.id = generation.id.wrapping_add(1);
            self.cvar.notify_all();
        }
    }
}
