use xgsim_terminal::config::SimConfig;
use xgsim_terminal::error::SimError;
use xgsim_terminal::outcomes::{MatchOutcome, aggregate};
use xgsim_terminal::simulate::simulate_chances;

#[test]
fn outcome_always_matches_margin_sign() {
    let cfg = SimConfig::default();
    let mut rng = cfg.rng();
    let home = simulate_chances(&mut rng, cfg.n_trials, &[0.4, 0.2, 0.6, 0.1]).unwrap();
    let away = simulate_chances(&mut rng, cfg.n_trials, &[0.3, 0.3, 0.5]).unwrap();

    let rows = aggregate(&home, &away).unwrap();
    assert_eq!(rows.len(), cfg.n_trials);
    for row in &rows {
        assert_eq!(row.margin, row.home_goals as i32 - row.away_goals as i32);
        match row.outcome {
            MatchOutcome::HomeWin => assert!(row.margin > 0),
            MatchOutcome::AwayWin => assert!(row.margin < 0),
            MatchOutcome::Draw => assert_eq!(row.margin, 0),
        }
        assert_eq!(
            row.final_score,
            format!("{}-{}", row.home_goals, row.away_goals)
        );
    }
}

#[test]
fn trial_order_is_preserved() {
    let rows = aggregate(&[3, 0, 1, 1], &[0, 2, 1, 0]).unwrap();
    let scores: Vec<&str> = rows.iter().map(|r| r.final_score.as_str()).collect();
    assert_eq!(scores, vec!["3-0", "0-2", "1-1", "1-0"]);
}

#[test]
fn mismatched_trial_counts_are_rejected() {
    let err = aggregate(&[1, 2, 3], &[1, 2]).unwrap_err();
    assert!(matches!(err, SimError::InvalidInput(_)));
}
