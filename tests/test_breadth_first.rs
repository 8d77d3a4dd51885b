/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use frontier_bfs::prelude::*;

/// Computes distances level by level, without queues or separators.
fn correct_distances(graph: &AdjListGraph, root: usize) -> Vec<Option<usize>> {
    let mut distances = vec![None; graph.num_nodes()];
    distances[root] = Some(0);
    let mut level = vec![root];
    let mut distance = 0;

    while !level.is_empty() {
        distance += 1;
        let mut next = Vec::new();
        for node in level {
            for &succ in graph.successors(node) {
                if distances[succ].is_none() {
                    distances[succ] = Some(distance);
                    next.push(succ);
                }
            }
        }
        level = next;
    }

    distances
}

fn seq_distances(graph: &AdjListGraph, root: usize) -> Result<(Vec<usize>, Summary)> {
    let mut dists = vec![0; graph.num_nodes()];
    let summary = breadth_first::Seq::new(graph).distances_from(root, &mut dists, no_logging![])?;
    Ok((dists, summary))
}

fn par_distances(
    graph: &AdjListGraph,
    root: usize,
    num_threads: usize,
    batch_size: usize,
) -> Result<(Vec<usize>, Summary)> {
    let thread_pool = Threads::NumThreads(num_threads).build()?;
    let mut dists = vec![0; graph.num_nodes()];
    let summary = breadth_first::ParLevelSync::with_batch_size(graph, batch_size)
        .par_distances_from(root, &mut dists, &thread_pool, no_logging![])?;
    Ok((dists, summary))
}

fn check_against_correct(graph: &AdjListGraph, root: usize, dists: &[usize], summary: Summary) {
    let expected = correct_distances(graph, root);
    for (node, (&dist, expected)) in dists.iter().zip(&expected).enumerate() {
        assert_eq!(dist, expected.unwrap_or(0), "Wrong distance for node {}", node);
    }
    assert_eq!(summary.reached, expected.iter().flatten().count());
    assert_eq!(
        summary.eccentricity,
        expected.iter().flatten().copied().max().unwrap_or(0)
    );
}

#[test]
fn test_path() -> Result<()> {
    let graph = AdjListGraph::from_arcs(4, [(0, 1), (1, 2), (2, 3)]);

    let (dists, summary) = seq_distances(&graph, 0)?;
    assert_eq!(dists, [0, 1, 2, 3]);
    assert_eq!(summary, Summary { reached: 4, eccentricity: 3 });

    for num_threads in [1, 2, 4] {
        let (dists, summary) = par_distances(&graph, 0, num_threads, 1)?;
        assert_eq!(dists, [0, 1, 2, 3]);
        assert_eq!(summary, Summary { reached: 4, eccentricity: 3 });
    }

    Ok(())
}

#[test]
fn test_disconnected() -> Result<()> {
    let graph = AdjListGraph::from_arcs(5, [(0, 1), (1, 2)]);

    let (seq, seq_summary) = seq_distances(&graph, 0)?;
    let (par, par_summary) = par_distances(&graph, 0, 3, 2)?;
    assert_eq!(seq, [0, 1, 2, 0, 0]);
    assert_eq!(par, [0, 1, 2, 0, 0]);
    assert_eq!(seq_summary.reached, 3);
    assert_eq!(par_summary, seq_summary);

    Ok(())
}

#[test]
fn test_diamond() -> Result<()> {
    let graph = AdjListGraph::from_arcs(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);

    for _ in 0..20 {
        for batch_size in [1, 2, 256] {
            let (dists, _) = par_distances(&graph, 0, 4, batch_size)?;
            assert_eq!(dists, [0, 1, 1, 2]);
        }
    }

    let (dists, _) = seq_distances(&graph, 0)?;
    assert_eq!(dists, [0, 1, 1, 2]);

    Ok(())
}

#[test]
fn test_single_node() -> Result<()> {
    let graph = AdjListGraph::new(1);
    let (seq, seq_summary) = seq_distances(&graph, 0)?;
    let (par, par_summary) = par_distances(&graph, 0, 2, 4)?;
    assert_eq!(seq, [0]);
    assert_eq!(par, [0]);
    assert_eq!(seq_summary, Summary { reached: 1, eccentricity: 0 });
    assert_eq!(par_summary, seq_summary);

    Ok(())
}

#[test]
fn test_cycle_and_self_loops() -> Result<()> {
    let graph = AdjListGraph::from_arcs(6, [(0, 0), (0, 1), (1, 2), (2, 3), (3, 0), (3, 3), (4, 5)]);

    for root in 0..6 {
        let (seq, seq_summary) = seq_distances(&graph, root)?;
        let (par, par_summary) = par_distances(&graph, root, 4, 1)?;
        check_against_correct(&graph, root, &seq, seq_summary);
        check_against_correct(&graph, root, &par, par_summary);
    }

    Ok(())
}

#[test]
fn test_root_out_of_bounds() -> Result<()> {
    let graph = AdjListGraph::from_arcs(3, [(0, 1), (1, 2)]);
    let thread_pool = Threads::NumThreads(2).build()?;
    let mut dists = vec![7; 3];
    let expected = VisitError::RootOutOfBounds {
        root: 3,
        num_nodes: 3,
    };

    assert_eq!(
        breadth_first::Seq::new(&graph).distances_from(3, &mut dists, no_logging![]),
        Err(expected)
    );
    assert_eq!(
        breadth_first::ParLevelSync::new(&graph).par_distances_from(
            3,
            &mut dists,
            &thread_pool,
            no_logging![]
        ),
        Err(expected)
    );
    assert_eq!(dists, [7, 7, 7]);

    let empty = AdjListGraph::new(0);
    assert!(breadth_first::Seq::new(&empty)
        .distances_from(0, &mut [], no_logging![])
        .is_err());
    assert!(breadth_first::ParLevelSync::new(&empty)
        .par_distances_from(0, &mut [], &thread_pool, no_logging![])
        .is_err());

    Ok(())
}

#[test]
fn test_distances_are_overwritten() -> Result<()> {
    let graph = AdjListGraph::from_arcs(4, [(0, 1), (1, 2), (3, 0)]);
    let thread_pool = Threads::NumThreads(2).build()?;
    let mut visit = breadth_first::ParLevelSync::new(&graph);
    let mut dists = vec![0; 4];

    visit.par_distances_from(3, &mut dists, &thread_pool, no_logging![])?;
    assert_eq!(dists, [1, 2, 3, 0]);
    visit.par_distances_from(1, &mut dists, &thread_pool, no_logging![])?;
    assert_eq!(dists, [0, 0, 1, 0]);

    let mut seq = breadth_first::Seq::new(&graph);
    let mut dists = vec![9; 4];
    seq.distances_from(2, &mut dists, no_logging![])?;
    assert_eq!(dists, [0, 0, 0, 0]);

    Ok(())
}

#[test]
#[should_panic]
fn test_wrong_distance_length() {
    let graph = AdjListGraph::from_arcs(3, [(0, 1)]);
    let mut dists = vec![0; 2];
    let _ = breadth_first::Seq::new(&graph).distances_from(0, &mut dists, no_logging![]);
}

#[test]
fn test_random_graphs() -> Result<()> {
    for (num_nodes, num_arcs, seed) in [(10, 15, 0), (100, 300, 1), (1000, 2000, 2), (1000, 8000, 3)] {
        let graph = AdjListGraph::random(num_nodes, num_arcs, seed);
        for root in [0, num_nodes / 2, num_nodes - 1] {
            let (seq, seq_summary) = seq_distances(&graph, root)?;
            check_against_correct(&graph, root, &seq, seq_summary);
            for (num_threads, batch_size) in [(1, 256), (2, 1), (4, 3), (8, 64)] {
                let (par, par_summary) = par_distances(&graph, root, num_threads, batch_size)?;
                assert_eq!(par, seq);
                assert_eq!(par_summary, seq_summary);
            }
        }
    }

    Ok(())
}

#[test]
fn test_deterministic() -> Result<()> {
    let graph = AdjListGraph::random(5000, 25000, 7);
    let (first, _) = par_distances(&graph, 0, 8, 16)?;
    for _ in 0..10 {
        let (dists, _) = par_distances(&graph, 0, 8, 16)?;
        assert_eq!(dists, first);
    }

    Ok(())
}

#[cfg_attr(not(feature = "slow_tests"), ignore)]
#[test]
fn test_large_graph() -> Result<()> {
    let graph = AdjListGraph::random(1_000_000, 10_000_000, 11);
    let (seq, seq_summary) = seq_distances(&graph, 0)?;
    for num_threads in [2, 4, 16] {
        let (par, par_summary) = par_distances(&graph, 0, num_threads, 256)?;
        assert_eq!(par, seq);
        assert_eq!(par_summary, seq_summary);
    }

    Ok(())
}

/// A graph whose successors are not all valid nodes.
struct DanglingArcs;

impl RandomAccessGraph for DanglingArcs {
    fn num_nodes(&self) -> usize {
        2
    }

    fn successors(&self, node: usize) -> &[usize] {
        match node {
            0 => &[1, 5],
            _ => &[],
        }
    }
}

#[test]
#[should_panic]
fn test_invalid_successor_panics() {
    let thread_pool = Threads::NumThreads(4).build().unwrap();
    let mut dists = vec![0; 2];
    let _ = breadth_first::ParLevelSync::with_batch_size(DanglingArcs, 1).par_distances_from(
        0,
        &mut dists,
        &thread_pool,
        no_logging![],
    );
}

#[test]
fn test_batch_size() -> Result<()> {
    let graph = AdjListGraph::from_arcs(4, [(0, 1), (1, 2), (1, 3)]);
    assert_eq!(
        breadth_first::ParLevelSync::new(&graph).batch_size(),
        breadth_first::DEFAULT_BATCH_SIZE
    );

    let mut visit = breadth_first::ParLevelSync::with_batch_size(&graph, usize::MAX);
    assert_eq!(visit.batch_size(), usize::MAX);
    let thread_pool = Threads::NumThreads(4).build()?;
    let mut dists = vec![0; 4];
    let summary = visit.par_distances_from(0, &mut dists, &thread_pool, no_logging![])?;
    assert_eq!(dists, [0, 1, 2, 2]);
    assert_eq!(summary, Summary { reached: 4, eccentricity: 2 });

    Ok(())
}
