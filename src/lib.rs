/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod algo;
pub mod graph;
pub mod utils;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
    pub use graph::RandomAccessGraph;
}

/// Use `use frontier_bfs::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::visits::breadth_first;
    pub use algo::visits::{Summary, VisitError};
    pub use algo::DistanceCheck;
    pub use graph::AdjListGraph;
    pub use traits::*;
    pub use utils::Threads;
}
