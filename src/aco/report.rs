//! Per-iteration reporting.
//!
//! The engine performs no I/O. After each update phase it hands the
//! [`IterationRecord`] to an [`IterationReporter`]; what happens to it
//! (printing, collecting, discarding) is the reporter's business.

use std::fmt::Write as _;

use super::runner::RunSummary;
use super::types::IterationRecord;

/// Receives one record per iteration.
///
/// Any `FnMut(&IterationRecord)` closure is a reporter.
pub trait IterationReporter {
    /// Called after iteration `record.iteration` has been updated.
    fn on_iteration(&mut self, record: &IterationRecord);

    /// Called once when the run completes.
    fn on_finish(&mut self, _summary: &RunSummary) {}
}

impl<F: FnMut(&IterationRecord)> IterationReporter for F {
    fn on_iteration(&mut self, record: &IterationRecord) {
        self(record)
    }
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl IterationReporter for NullReporter {
    fn on_iteration(&mut self, _record: &IterationRecord) {}
}

/// Keeps every record in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    /// Records in iteration order.
    pub records: Vec<IterationRecord>,
}

impl IterationReporter for RecordingReporter {
    fn on_iteration(&mut self, record: &IterationRecord) {
        self.records.push(record.clone());
    }
}

/// Prints each record to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter {
    /// Print only the per-iteration summary line, not every ant.
    pub summary_only: bool,
}

impl IterationReporter for ConsoleReporter {
    fn on_iteration(&mut self, record: &IterationRecord) {
        print!("{}", format_record(record, self.summary_only));
    }

    fn on_finish(&mut self, summary: &RunSummary) {
        println!(
            "ACO completed: {} iterations, {} failed ants",
            summary.iterations, summary.failed_ants
        );
        println!("Total duration: {} ms", summary.elapsed_ms);
    }
}

/// Renders a record as text, one line per ant.
///
/// ```text
/// Iteration 1 | min cost 19 | mean cost 21.4 | pheromone max 1.0526
/// Ant 0: tour = 3 0 1 4 2 | cost = 19 | weights = 0 0 0.00032 0 0
/// ```
pub fn format_record(record: &IterationRecord, summary_only: bool) -> String {
    let mut out = String::new();
    let _ = write!(out, "Iteration {}", record.iteration);
    if let Some(min) = record.min_cost() {
        let _ = write!(out, " | min cost {min}");
    }
    if let Some(mean) = record.mean_cost() {
        let _ = write!(out, " | mean cost {mean:.4}");
    }
    let _ = writeln!(out, " | pheromone max {:.4}", record.pheromone.max);

    if summary_only {
        return out;
    }

    for ant in &record.ants {
        let _ = write!(out, "Ant {}: tour =", ant.ant);
        for city in ant.tour.cities() {
            let _ = write!(out, " {city}");
        }
        let _ = write!(out, " | cost = {} | weights =", ant.cost);
        for w in &ant.last_step_weights {
            let _ = write!(out, " {w}");
        }
        out.push('\n');
    }
    for failure in &record.failures {
        let _ = writeln!(out, "Ant {}: failed ({})", failure.ant, failure.error);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::types::{AntFailure, AntRecord, PheromoneStats, Tour};
    use crate::error::{AcoError, SelectionFailureCause};

    fn record() -> IterationRecord {
        IterationRecord {
            iteration: 3,
            ants: vec![AntRecord {
                ant: 0,
                tour: Tour::new(vec![2, 0, 1]),
                cost: 12.0,
                last_step_weights: vec![0.0, 0.5, 0.0],
            }],
            failures: vec![AntFailure {
                ant: 1,
                error: AcoError::SelectionFailure {
                    step: 1,
                    cause: SelectionFailureCause::ZeroTotalWeight,
                },
            }],
            pheromone: PheromoneStats {
                min: 0.5,
                max: 0.75,
                mean: 0.6,
            },
        }
    }

    #[test]
    fn test_format_record() {
        let text = format_record(&record(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Iteration 3 | min cost 12 | mean cost 12.0000 | pheromone max 0.7500"
        );
        assert_eq!(lines[1], "Ant 0: tour = 2 0 1 | cost = 12 | weights = 0 0.5 0");
        assert_eq!(
            lines[2],
            "Ant 1: failed (selection failed at step 1: total desirability is zero)"
        );
    }

    #[test]
    fn test_format_summary_only() {
        let text = format_record(&record(), true);
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_recording_and_closure_reporters() {
        let mut recorder = RecordingReporter::default();
        recorder.on_iteration(&record());
        assert_eq!(recorder.records.len(), 1);

        let mut seen = Vec::new();
        let mut closure = |r: &IterationRecord| seen.push(r.iteration);
        closure.on_iteration(&record());
        assert_eq!(seen, vec![3]);
    }
}
