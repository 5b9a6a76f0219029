//! Simulation report generation.

use crate::core::constants::TICKS_PER_SECOND;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of a single simulated play-through.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub final_level: u32,
    pub final_evolution: String,
    pub final_wins: u32,
    pub total_kills: u32,
    pub boss_kills: u32,
    pub apples_collected: u32,
    pub shields_collected: u32,
    pub pets_owned: u32,
    pub total_ticks: u64,
    pub died: bool,
    pub reached_target: bool,
    /// Tick at which each level was reached (index = level, 0 = not reached)
    pub level_up_ticks: Vec<u64>,
}

impl RunStats {
    pub fn survival_seconds(&self) -> f64 {
        self.total_ticks as f64 / TICKS_PER_SECOND as f64
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_reached_target: u32,
    pub runs_died: u32,
    pub runs_timed_out: u32,

    pub avg_final_level: f64,
    pub avg_total_kills: f64,
    pub avg_boss_kills: f64,
    pub avg_final_wins: f64,
    pub avg_pets_owned: f64,
    pub avg_survival_seconds: f64,

    pub level_distribution: BTreeMap<u32, u32>,
    /// Average seconds to reach each level, over runs that reached it (index = level)
    pub avg_seconds_to_level: Vec<Option<f64>>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let avg_final_level = average(&runs, |r| r.final_level as f64);
        let avg_total_kills = average(&runs, |r| r.total_kills as f64);
        let avg_boss_kills = average(&runs, |r| r.boss_kills as f64);
        let avg_final_wins = average(&runs, |r| r.final_wins as f64);
        let avg_pets_owned = average(&runs, |r| r.pets_owned as f64);
        let avg_survival_seconds = average(&runs, RunStats::survival_seconds);

        let runs_reached_target = runs.iter().filter(|r| r.reached_target).count() as u32;
        let runs_died = runs.iter().filter(|r| r.died).count() as u32;
        let runs_timed_out = runs
            .iter()
            .filter(|r| !r.died && !r.reached_target)
            .count() as u32;

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        let max_level = runs.iter().map(|r| r.final_level).max().unwrap_or(1) as usize;
        let mut avg_seconds_to_level = vec![None; max_level + 1];
        for (level, slot) in avg_seconds_to_level.iter_mut().enumerate().skip(2) {
            let reached: Vec<f64> = runs
                .iter()
                .filter(|r| r.final_level as usize >= level)
                .filter_map(|r| r.level_up_ticks.get(level).copied())
                .map(|t| t as f64 / TICKS_PER_SECOND as f64)
                .collect();
            if !reached.is_empty() {
                *slot = Some(reached.iter().sum::<f64>() / reached.len() as f64);
            }
        }

        Self {
            num_runs,
            runs_reached_target,
            runs_died,
            runs_timed_out,
            avg_final_level,
            avg_total_kills,
            avg_boss_kills,
            avg_final_wins,
            avg_pets_owned,
            avg_survival_seconds,
            level_distribution,
            avg_seconds_to_level,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} reached target, {} died, {} timed out\n\n",
            self.num_runs, self.runs_reached_target, self.runs_died, self.runs_timed_out
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Level:     {:.1}\n",
            self.avg_final_level
        ));
        report.push_str(&format!(
            "  Avg Survival:        {:.0}s\n",
            self.avg_survival_seconds
        ));
        report.push_str(&format!(
            "  Avg Kills:           {:.1}\n",
            self.avg_total_kills
        ));
        report.push_str(&format!(
            "  Avg Boss Kills:      {:.2}\n",
            self.avg_boss_kills
        ));
        report.push_str(&format!(
            "  Avg Unspent Wins:    {:.1}\n",
            self.avg_final_wins
        ));
        report.push_str(&format!(
            "  Avg Pets Owned:      {:.1}\n\n",
            self.avg_pets_owned
        ));

        report.push_str("── FINAL LEVEL DISTRIBUTION ─────────────────────────────────────\n");
        for (level, count) in &self.level_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Level {:2}: {:>5.1}% {}\n", level, pct, bar));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let death_rate = self.runs_died as f64 / self.num_runs.max(1) as f64;
        let rating = if death_rate < 0.2 {
            "TOO EASY - Most players survive the whole run"
        } else if death_rate < 0.6 {
            "GOOD - Challenging but fair"
        } else if death_rate < 0.9 {
            "HARD - Most runs end in death"
        } else {
            "TOO HARD - Nearly every run dies"
        };
        report.push_str(&format!("  Death Rate: {:.1}%\n", death_rate * 100.0));
        report.push_str(&format!("  Rating:     {}\n", rating));
        if self.avg_final_level < 3.0 {
            report.push_str("  ⚠️  Most runs die before bosses appear - early game too hard?\n");
        }
        if self.avg_pets_owned < 1.0 && self.avg_total_kills > 10.0 {
            report.push_str("  ⚠️  Few pets bought despite kills - pet costs too high?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Average time to reach each level.
    pub fn level_curve_text(&self) -> String {
        let mut report = String::new();
        report.push_str("── LEVEL CURVE ──────────────────────────────────────────────────\n");
        report.push_str("  Level   Avg Time   Since Prev\n");
        report.push_str("  ─────   ────────   ──────────\n");

        let mut previous = 0.0;
        for (level, seconds) in self.avg_seconds_to_level.iter().enumerate() {
            if let Some(seconds) = seconds {
                report.push_str(&format!(
                    "  {:5}   {:7.1}s   {:+9.1}s\n",
                    level,
                    seconds,
                    seconds - previous
                ));
                previous = *seconds;
            }
        }
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn average(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    runs.iter().map(f).sum::<f64>() / runs.len().max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(final_level: u32, died: bool, level_up_ticks: Vec<u64>) -> RunStats {
        RunStats {
            final_level,
            final_evolution: String::new(),
            final_wins: 2,
            total_kills: 10,
            boss_kills: 0,
            apples_collected: 1,
            shields_collected: 0,
            pets_owned: 1,
            total_ticks: 6000,
            died,
            reached_target: false,
            level_up_ticks,
        }
    }

    #[test]
    fn test_report_averages() {
        let runs = vec![
            run(3, true, vec![0, 0, 600, 1800]),
            run(2, false, vec![0, 0, 1200]),
        ];
        let report = SimReport::from_runs(runs);

        assert_eq!(report.num_runs, 2);
        assert_eq!(report.runs_died, 1);
        assert_eq!(report.runs_timed_out, 1);
        assert!((report.avg_final_level - 2.5).abs() < 1e-9);
        assert!((report.avg_survival_seconds - 100.0).abs() < 1e-9);
        assert_eq!(report.level_distribution.get(&3), Some(&1));
    }

    #[test]
    fn test_level_curve_averages_runs_that_reached_level() {
        let runs = vec![
            run(3, true, vec![0, 0, 600, 1800]),
            run(2, false, vec![0, 0, 1200]),
        ];
        let report = SimReport::from_runs(runs);

        // Level 2: (10s + 20s) / 2; level 3: only the first run
        assert_eq!(report.avg_seconds_to_level[2], Some(15.0));
        assert_eq!(report.avg_seconds_to_level[3], Some(30.0));
        assert!(report.level_curve_text().contains("15.0s"));
    }

    #[test]
    fn test_empty_report_does_not_divide_by_zero() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.avg_final_level, 0.0);
        assert!(report.to_text().contains("Runs: 0 total"));
    }

    #[test]
    fn test_json_skips_run_stats() {
        let report = SimReport::from_runs(vec![run(2, true, vec![0, 0, 60])]);
        let json = report.to_json();
        assert!(json.contains("avg_final_level"));
        assert!(!json.contains("run_stats"));
    }
}
