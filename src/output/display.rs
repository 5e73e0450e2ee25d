//! Display functions for command results

use super::formatters::{mark_wildcards, score_label};
use crate::commands::{BenchmarkResult, FindResult};
use crate::core::{PositionConstraints, Rack};
use crate::engine::report::{group_by_length, summarize};
use crate::engine::{MatchResult, RefineFilter};
use colored::Colorize;

/// Print a result view grouped by word length
pub fn print_results(
    view: &[&MatchResult],
    rack: &Rack,
    constraints: &PositionConstraints,
    filter: &RefineFilter,
) {
    println!("\n{}", "─".repeat(60).cyan());

    if rack.is_empty() {
        println!("Enter letters to see results");
        return;
    }

    let summary = summarize(view, rack);
    if summary.total == 0 {
        println!("No words found with these letters.");
        print_criteria(constraints, filter);
        return;
    }

    println!(
        "Found {} words using letters: {}",
        summary.total.to_string().bright_yellow().bold(),
        summary.letters_used.bright_white().bold()
    );
    if let Some((word, length)) = &summary.longest {
        println!(
            "Longest word: {} ({length} letters)",
            word.bright_green().bold()
        );
    }
    if let Some(best) = summary.best_score {
        println!("Best score: {}", best.to_string().bright_yellow());
    }
    if summary.highlighted > 0 {
        println!(
            "{} shorter words outscore the longest ★",
            summary.highlighted.to_string().bright_yellow().bold()
        );
    }
    print_criteria(constraints, filter);

    for group in group_by_length(view) {
        println!(
            "\n{} {}",
            format!("{} letters", group.length).bright_cyan().bold(),
            format!("({})", group.entries.len()).bright_black()
        );

        for entry in group.entries {
            let word = mark_wildcards(&entry.word, &entry.wildcard_positions);
            let line = format!("  {word:<20} {}", score_label(entry));
            if entry.highlighted {
                println!("{} {}", line.bright_yellow().bold(), "★".bright_yellow());
            } else {
                println!("{line}");
            }
        }
    }
    println!();
}

fn print_criteria(constraints: &PositionConstraints, filter: &RefineFilter) {
    if !constraints.is_empty() {
        println!("Positions: {}", constraints.to_string().bright_magenta());
    }

    let criteria: Vec<String> = [
        ("starts with", filter.prefix()),
        ("ends with", filter.suffix()),
        ("contains", filter.fragment()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| format!("{label} {v}")))
    .collect();

    if !criteria.is_empty() {
        println!("Filter: {}", criteria.join(", ").bright_magenta());
    }
}

/// Print the result of a one-shot query
pub fn print_find_result(result: &FindResult) {
    let view = result.view();
    print_results(&view, &result.rack, &result.constraints, &result.filter);

    let shown = view.len();
    let matched = result.results.len();
    if shown < matched && result.filter.is_empty() {
        println!(
            "{}",
            format!("Showing {shown} of {matched} matches").bright_black()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Racks queried:    {}", result.racks);
    println!("   Dictionary size:  {}", result.dictionary_size);
    println!(
        "   Average matches:  {}",
        format!("{:.1}", result.average_matches)
            .bright_yellow()
            .bold()
    );
    println!("   Most matches:     {}", result.max_matches);
    println!("   Empty racks:      {}", result.empty_racks);
    println!("   Query time:       {:.3}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if result.scans_agree {
        println!("   Scan check:       {}", "sequential = parallel".green());
    } else {
        println!("   Scan check:       {}", "MISMATCH".red().bold());
    }

    println!("\n📈 {}", "Longest match per rack:".bright_cyan().bold());
    let mut lengths: Vec<_> = result.longest_distribution.iter().collect();
    lengths.sort_by(|a, b| b.0.cmp(a.0));
    for (&length, &count) in lengths {
        let pct = (count as f64 / result.racks as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        let label = if length == 0 {
            "none".to_string()
        } else {
            format!("{length:>4}")
        };
        println!("   {label}: {bar} {count:4} ({pct:5.1}%)");
    }
}
