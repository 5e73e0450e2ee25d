//! Benchmark command
//!
//! Times queries for a batch of random racks.

use crate::core::Rack;
use crate::engine::QueryEngine;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub racks: usize,
    pub dictionary_size: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    pub max_matches: usize,
    pub empty_racks: usize,
    /// Number of racks by length of their longest match (0 = no match)
    pub longest_distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub queries_per_second: f64,
    /// Sequential and parallel scans produced identical results for every rack
    pub scans_agree: bool,
}

/// Deal `count` random racks of `size` tiles
pub fn deal_racks<R: Rng + ?Sized>(rng: &mut R, count: usize, size: usize) -> Vec<Rack> {
    (0..count).map(|_| Rack::deal(rng, size)).collect()
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Run the engine over every rack and collect timing figures
///
/// Each rack is also queried with the opposite scan mode to confirm both
/// produce the same ranking; that cross-check is not included in the timing.
pub fn run_benchmark<W>(
    engine: &QueryEngine,
    dictionary: &[W],
    racks: &[Rack],
    show_progress: bool,
) -> BenchmarkResult
where
    W: AsRef<str> + Sync,
{
    let pb = progress_bar(racks.len(), show_progress);
    let other_mode = engine.with_parallel(!engine.is_parallel());

    let mut total_matches = 0;
    let mut max_matches = 0;
    let mut empty_racks = 0;
    let mut longest_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut duration = Duration::ZERO;
    let mut scans_agree = true;

    for rack in racks {
        pb.set_message(rack.to_string());

        let inventory = rack.inventory();
        let start = Instant::now();
        let results = engine.query(dictionary, &inventory, None);
        duration += start.elapsed();

        if other_mode.query(dictionary, &inventory, None) != results {
            warn!(rack = %rack, "sequential and parallel scans disagree");
            scans_agree = false;
        }

        let matches = results.len();
        total_matches += matches;
        max_matches = max_matches.max(matches);
        if matches == 0 {
            empty_racks += 1;
        }

        let longest = results.entries().first().map_or(0, |e| e.length());
        *longest_distribution.entry(longest).or_insert(0) += 1;

        pb.inc(1);
    }

    pb.finish_and_clear();

    let count = racks.len();
    BenchmarkResult {
        racks: count,
        dictionary_size: dictionary.len(),
        total_matches,
        average_matches: if count == 0 {
            0.0
        } else {
            total_matches as f64 / count as f64
        },
        max_matches,
        empty_racks,
        longest_distribution,
        duration,
        queries_per_second: if duration.is_zero() {
            0.0
        } else {
            count as f64 / duration.as_secs_f64()
        },
        scans_agree,
    }
}
