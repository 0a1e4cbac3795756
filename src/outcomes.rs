use serde::Serialize;

use crate::error::SimError;

/// Match result category, in the fixed display order used everywhere:
/// home win, draw, away win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl MatchOutcome {
    pub const ORDERED: [MatchOutcome; 3] =
        [MatchOutcome::HomeWin, MatchOutcome::Draw, MatchOutcome::AwayWin];

    pub fn from_margin(margin: i32) -> Self {
        if margin > 0 {
            MatchOutcome::HomeWin
        } else if margin < 0 {
            MatchOutcome::AwayWin
        } else {
            MatchOutcome::Draw
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchOutcome::HomeWin => "Home win",
            MatchOutcome::Draw => "Draw",
            MatchOutcome::AwayWin => "Away win",
        }
    }
}

/// One simulated trial, labeled. Derived deterministically from the paired
/// goal counts and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeRow {
    pub home_goals: u32,
    pub away_goals: u32,
    pub margin: i32,
    pub outcome: MatchOutcome,
    pub final_score: String,
}

impl OutcomeRow {
    fn new(home_goals: u32, away_goals: u32) -> Self {
        let margin = home_goals as i32 - away_goals as i32;
        Self {
            home_goals,
            away_goals,
            margin,
            outcome: MatchOutcome::from_margin(margin),
            final_score: format!("{home_goals}-{away_goals}"),
        }
    }
}

/// Pairs the two teams' per-trial goal totals by position and labels each
/// trial. Trial order is preserved in the output.
pub fn aggregate(home_goals: &[u32], away_goals: &[u32]) -> Result<Vec<OutcomeRow>, SimError> {
    if home_goals.len() != away_goals.len() {
        return Err(SimError::InvalidInput(format!(
            "paired goal sequences differ in length: {} home vs {} away",
            home_goals.len(),
            away_goals.len()
        )));
    }
    Ok(home_goals
        .iter()
        .zip(away_goals)
        .map(|(&h, &a)| OutcomeRow::new(h, a))
        .collect())
}
