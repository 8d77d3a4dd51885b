/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.
//!
//! [`Seq`] is a textbook sequential visit; [`ParLevelSync`] is a parallel
//! visit in which all threads expand the same level at the same time,
//! synchronizing on a barrier between levels.

mod frontier;

mod seq;
pub use seq::*;

mod par_level_sync;
pub use par_level_sync::*;
