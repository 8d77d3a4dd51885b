/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Synchronization primitives and configuration used by the visits.

mod level_barrier;
pub use level_barrier::LevelBarrier;

mod visited_set;
pub use visited_set::VisitedSet;

mod threadpool;
pub use threadpool::Threads;
