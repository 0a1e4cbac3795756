use std::collections::BTreeMap;
use std::fmt::Write;

use crate::outcomes::{MatchOutcome, OutcomeRow};
use crate::summary::{OutcomeSummary, ScoreBucket};

const BAR_WIDTH: usize = 40;

pub fn percent(proportion: f64) -> String {
    format!("{:.1}%", proportion * 100.0)
}

/// Title line: both teams with their total xG.
pub fn headline(home_team: &str, away_team: &str, home_xg: &[f64], away_xg: &[f64]) -> String {
    let total_home: f64 = home_xg.iter().sum();
    let total_away: f64 = away_xg.iter().sum();
    format!("{home_team} (home) {total_home:.2} xG - {away_team} (away) {total_away:.2} xG")
}

/// The summary narrative: actual result, win/draw/loss rates, and how often
/// the exact observed scoreline came up.
pub fn narrative(
    summary: &OutcomeSummary,
    home_team: &str,
    away_team: &str,
    observed_home_goals: u32,
    observed_away_goals: u32,
) -> String {
    let home = percent(summary.rate(MatchOutcome::HomeWin).proportion);
    let away = percent(summary.rate(MatchOutcome::AwayWin).proportion);
    let draw = percent(summary.rate(MatchOutcome::Draw).proportion);
    let exact = percent(summary.exact_match_proportion);
    format!(
        "Actual outcome: {home_team} {observed_home_goals} - {away_team} {observed_away_goals}\n\
         {home_team} wins in {home} of simulations\n\
         {away_team} wins in {away} of simulations\n\
         Match is drawn in {draw} of simulations\n\
         Exact scoreline observed in {exact} of simulations"
    )
}

/// Full-time margin histogram over the batch, one line per margin value.
pub fn margin_histogram(rows: &[OutcomeRow]) -> String {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for row in rows {
        *counts.entry(row.margin).or_insert(0) += 1;
    }
    let max = counts.values().copied().max().unwrap_or(0);
    let total = rows.len().max(1) as f64;

    let mut out = String::from("Full time margin (home goals - away goals)\n");
    for (margin, count) in counts {
        let bar = "#".repeat(bar_len(count, max));
        let share = percent(count as f64 / total);
        let _ = writeln!(out, "{margin:>4}  {share:>6}  {bar}");
    }
    out
}

/// Ranked scoreline table, most likely first, one line per distinct score.
pub fn score_table(buckets: &[ScoreBucket]) -> String {
    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    let mut out = String::from("Match score (home - away)\n");
    for bucket in buckets {
        let bar = "#".repeat(bar_len(bucket.count, max));
        let share = percent(bucket.proportion);
        let _ = writeln!(
            out,
            "{:>5}  {share:>6}  {bar} ({})",
            bucket.final_score,
            bucket.outcome.label()
        );
    }
    out
}

fn bar_len(count: usize, max: usize) -> usize {
    if max == 0 {
        0
    } else {
        (count * BAR_WIDTH).div_ceil(max)
    }
}
