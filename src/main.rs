/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{bail, ensure, Context, Result};
use dsi_progress_logger::prelude::*;
use frontier_bfs::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::str::FromStr;
use std::time::Instant;

const USAGE: &str = "Usage:
    frontier-bfs check <num_nodes> <num_arcs> [root] [seed] [threads]
    frontier-bfs sweep <max_nodes> <step> <csv_path> [arcs_per_node] [seed]";

/// Parses the positional argument of index `index`, if present.
fn arg<T: FromStr>(index: usize, name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    std::env::args()
        .nth(index)
        .map(|value| {
            value
                .parse()
                .with_context(|| format!("Invalid {}: {}", name, value))
        })
        .transpose()
}

/// Parses the mandatory positional argument of index `index`.
fn required_arg<T: FromStr>(index: usize, name: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    arg(index, name)?.with_context(|| format!("No {} provided\n{}", name, USAGE))
}

fn check() -> Result<()> {
    let num_nodes: usize = required_arg(2, "number of nodes")?;
    let num_arcs: usize = required_arg(3, "number of arcs")?;
    let root = arg(4, "root")?.unwrap_or(0);
    let seed = arg(5, "seed")?.unwrap_or(0);
    let threads = Threads::from(arg::<usize>(6, "number of threads")?.unwrap_or(0));

    let mut main_pl = progress_logger![display_memory = true];
    main_pl.info(format_args!(
        "Generating a random graph with {} nodes and {} arcs...",
        num_nodes, num_arcs
    ));
    let graph = AdjListGraph::random(num_nodes, num_arcs, seed);
    let thread_pool = threads.build()?;
    let mut check = DistanceCheck::new(graph);

    let start = Instant::now();
    let seq = check.run_sequential(root, &mut main_pl)?;
    let seq_time = start.elapsed();

    let start = Instant::now();
    let par = check.run_parallel(root, &thread_pool, &mut main_pl)?;
    let par_time = start.elapsed();

    log::info!(
        "Sequential visit: {} nodes reached, eccentricity {}, {:?}",
        seq.reached,
        seq.eccentricity,
        seq_time
    );
    log::info!(
        "Parallel visit ({} threads): {} nodes reached, eccentricity {}, {:?}",
        thread_pool.current_num_threads(),
        par.reached,
        par.eccentricity,
        par_time
    );

    ensure!(
        check.distances_match(),
        "Sequential and parallel distances differ"
    );
    log::info!("Distances match");
    Ok(())
}

fn sweep() -> Result<()> {
    let max_nodes: usize = required_arg(2, "maximum number of nodes")?;
    let step: usize = required_arg(3, "step")?;
    let path: String = required_arg(4, "CSV path")?;
    let arcs_per_node = arg(5, "number of arcs per node")?.unwrap_or(8);
    let seed = arg(6, "seed")?.unwrap_or(0);
    ensure!(step > 0, "The step must be positive");

    let thread_pool = Threads::Default.build()?;
    let mut out = BufWriter::new(
        File::create(&path).with_context(|| format!("Cannot create {}", path))?,
    );
    writeln!(out, "Count,Serial,Parallel")?;

    let mut pl = progress_logger![];
    pl.item_name("graph");
    pl.expected_updates(Some(max_nodes / step));
    pl.start("Timing sequential and parallel visits...");

    for count in (step..=max_nodes).step_by(step) {
        let graph = AdjListGraph::random(count, count.saturating_mul(arcs_per_node), seed);
        let mut check = DistanceCheck::new(graph);

        let start = Instant::now();
        check.run_sequential(0, no_logging![])?;
        let seq_time = start.elapsed();

        let start = Instant::now();
        check.run_parallel(0, &thread_pool, no_logging![])?;
        let par_time = start.elapsed();

        ensure!(
            check.distances_match(),
            "Sequential and parallel distances differ on {} nodes",
            count
        );
        writeln!(
            out,
            "{},{},{}",
            count,
            seq_time.as_secs_f64(),
            par_time.as_secs_f64()
        )?;
        pl.update();
    }

    pl.done();
    out.flush()
        .with_context(|| format!("Cannot write to {}", path))?;
    Ok(())
}

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    match std::env::args()
        .nth(1)
        .with_context(|| format!("No operation provided\n{}", USAGE))?
        .as_str()
    {
        "check" => check(),
        "sweep" => sweep(),
        other => bail!("Unknown operation {}\n{}", other, USAGE),
    }
}
