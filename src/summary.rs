use std::collections::HashMap;

use serde::Serialize;

use crate::error::SimError;
use crate::outcomes::{MatchOutcome, OutcomeRow};

/// Count and share of one result category over a batch.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OutcomeRate {
    pub outcome: MatchOutcome,
    pub count: usize,
    pub proportion: f64,
}

/// Win/draw/loss rates over a whole batch plus how often the simulation
/// reproduced the actually observed scoreline.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeSummary {
    pub trials: usize,
    /// Always three entries, in `MatchOutcome::ORDERED` order, even when a
    /// category never occurred.
    pub rates: [OutcomeRate; 3],
    pub exact_match_proportion: f64,
}

impl OutcomeSummary {
    pub fn rate(&self, outcome: MatchOutcome) -> OutcomeRate {
        self.rates[MatchOutcome::ORDERED
            .iter()
            .position(|&o| o == outcome)
            .unwrap_or(0)]
    }
}

/// Counts rows per result category and scores the observed result against the
/// batch. A summary over zero trials is undefined and fails with `EmptyBatch`;
/// an observed scoreline that was never simulated is simply a 0.0 proportion.
pub fn summarize(
    rows: &[OutcomeRow],
    observed_home_goals: u32,
    observed_away_goals: u32,
) -> Result<OutcomeSummary, SimError> {
    if rows.is_empty() {
        return Err(SimError::EmptyBatch);
    }

    let mut counts = [0usize; 3];
    let mut exact = 0usize;
    for row in rows {
        match row.outcome {
            MatchOutcome::HomeWin => counts[0] += 1,
            MatchOutcome::Draw => counts[1] += 1,
            MatchOutcome::AwayWin => counts[2] += 1,
        }
        if row.home_goals == observed_home_goals && row.away_goals == observed_away_goals {
            exact += 1;
        }
    }

    let total = rows.len();
    let rates = std::array::from_fn(|i| OutcomeRate {
        outcome: MatchOutcome::ORDERED[i],
        count: counts[i],
        proportion: counts[i] as f64 / total as f64,
    });

    Ok(OutcomeSummary {
        trials: total,
        rates,
        exact_match_proportion: exact as f64 / total as f64,
    })
}

/// One distinct simulated scoreline with its share of the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBucket {
    pub final_score: String,
    pub margin: i32,
    pub outcome: MatchOutcome,
    pub count: usize,
    pub proportion: f64,
}

/// Groups the batch by final score and ranks scorelines by simulated
/// likelihood. Ties are broken by ascending score string so the ranking is
/// stable across runs.
pub fn rank_scores(rows: &[OutcomeRow]) -> Vec<ScoreBucket> {
    let mut grouped: HashMap<&str, ScoreBucket> = HashMap::new();
    for row in rows {
        grouped
            .entry(row.final_score.as_str())
            .and_modify(|bucket| bucket.count += 1)
            .or_insert_with(|| ScoreBucket {
                final_score: row.final_score.clone(),
                margin: row.margin,
                outcome: row.outcome,
                count: 1,
                proportion: 0.0,
            });
    }

    let total = rows.len() as f64;
    let mut buckets: Vec<ScoreBucket> = grouped.into_values().collect();
    for bucket in &mut buckets {
        bucket.proportion = bucket.count as f64 / total;
    }
    buckets.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.final_score.cmp(&b.final_score))
    });
    buckets
}
