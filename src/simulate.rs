use rand::Rng;

use crate::error::SimError;

/// Simulates goals scored given a list of xG chances.
///
/// Each trial replays every shot as an independent Bernoulli draw: a uniform
/// `u` in `[0, 1)` is pulled from `rng` and the shot scores when `xg >= u`.
/// Returns one goal total per trial. An empty chance list is not an error;
/// every trial simply scores zero.
pub fn simulate_chances<R: Rng>(
    rng: &mut R,
    n_trials: usize,
    xg_of_chances: &[f64],
) -> Result<Vec<u32>, SimError> {
    if n_trials == 0 {
        return Err(SimError::InvalidInput(
            "trial count must be positive".to_string(),
        ));
    }
    // Upstream parsing already filters these out; rejecting here keeps a
    // nonsensical probability from silently skewing the whole batch.
    if let Some(bad) = xg_of_chances.iter().find(|p| !(0.0 < **p && **p < 1.0)) {
        return Err(SimError::InvalidInput(format!(
            "shot probability {bad} outside the open interval (0, 1)"
        )));
    }

    let mut goals_scored = vec![0u32; n_trials];
    for goals in goals_scored.iter_mut() {
        for &shot_xg in xg_of_chances {
            let random: f64 = rng.gen_range(0.0..1.0);
            if shot_xg >= random {
                *goals += 1;
            }
        }
    }
    Ok(goals_scored)
}
