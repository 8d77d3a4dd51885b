/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{Context, Result};

/// The number of threads of the pool a parallel visit runs on.
///
/// Every thread of the pool takes part in the visit, so the pool should be
/// dedicated to it while the visit runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Threads {
    /// One thread per available hardware thread.
    #[default]
    Default,
    /// The given number of threads.
    NumThreads(usize),
}

impl Threads {
    /// Builds a [rayon thread pool](rayon::ThreadPool) with this number of
    /// threads.
    pub fn build(self) -> Result<rayon::ThreadPool> {
        match self {
            Self::Default => rayon::ThreadPoolBuilder::new()
                .build()
                .context("Could not build default threadpool"),
            Self::NumThreads(num_threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .with_context(|| format!("Could not build threadpool with {} threads", num_threads)),
        }
    }
}

impl From<usize> for Threads {
    /// Zero means [`Threads::Default`].
    fn from(num_threads: usize) -> Self {
        match num_threads {
            0 => Self::Default,
            n => Self::NumThreads(n),
        }
    }
}
