use anyhow::{Context, Result, bail};
use serde::Serialize;

use xgsim_terminal::config::SimConfig;
use xgsim_terminal::outcomes::aggregate;
use xgsim_terminal::parse::xg_to_values;
use xgsim_terminal::report;
use xgsim_terminal::simulate::simulate_chances;
use xgsim_terminal::summary::{OutcomeSummary, ScoreBucket, rank_scores, summarize};

// Demonstration inputs used when no shot lists are supplied.
const DEFAULT_HOME_SHOTS: &str = "0.29, 0.07, 0.04, 0.09, 0.05, 0.06, 0.03, 0.04, 0.13, \
    0.01, 0.04, 0.05, 0.1, 0.12, 0.04, 0.02, 0.13, 0.04, 0.15, 0.03, 0.05, 0.29, 0.16, 0.16";
const DEFAULT_AWAY_SHOTS: &str = "0.1, 0.06, 0.7, 0.06";

const USAGE: &str = "\
Usage: xgsim_terminal [options]

Options:
  --home <xg list>       home shot xG values, comma separated
  --away <xg list>       away shot xG values, comma separated
  --score <H-A>          observed final score (default 0-1)
  --home-team <name>     home team label (default \"Home team\")
  --away-team <name>     away team label (default \"Away team\")
  --trials <n>           number of simulated matches
  --seed <n>             random seed
  --json                 emit the summary and score distribution as JSON

Malformed or out-of-range xG entries are dropped, not fatal.
XGSIM_TRIALS and XGSIM_SEED set the trial count and seed when the
flags are omitted.";

struct Args {
    home_shots: String,
    away_shots: String,
    observed_home: u32,
    observed_away: u32,
    home_team: String,
    away_team: String,
    config: SimConfig,
    json: bool,
}

fn parse_args(argv: &mut impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        home_shots: DEFAULT_HOME_SHOTS.to_string(),
        away_shots: DEFAULT_AWAY_SHOTS.to_string(),
        observed_home: 0,
        observed_away: 1,
        home_team: "Home team".to_string(),
        away_team: "Away team".to_string(),
        config: SimConfig::from_env(),
        json: false,
    };

    while let Some(flag) = argv.next() {
        match flag.as_str() {
            "--home" => args.home_shots = expect_value(argv, "--home")?,
            "--away" => args.away_shots = expect_value(argv, "--away")?,
            "--score" => {
                let (h, a) = parse_score(&expect_value(argv, "--score")?)?;
                args.observed_home = h;
                args.observed_away = a;
            }
            "--home-team" => args.home_team = expect_value(argv, "--home-team")?,
            "--away-team" => args.away_team = expect_value(argv, "--away-team")?,
            "--trials" => {
                let n: usize = expect_value(argv, "--trials")?
                    .parse()
                    .context("--trials expects an integer")?;
                if n == 0 {
                    bail!("--trials must be positive");
                }
                args.config.n_trials = n;
            }
            "--seed" => {
                args.config.seed = expect_value(argv, "--seed")?
                    .parse()
                    .context("--seed expects an integer")?;
            }
            "--json" => args.json = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => bail!("unknown option {other:?}\n\n{USAGE}"),
        }
    }
    Ok(args)
}

fn expect_value(argv: &mut impl Iterator<Item = String>, name: &str) -> Result<String> {
    argv.next().with_context(|| format!("{name} expects a value"))
}

fn parse_score(raw: &str) -> Result<(u32, u32)> {
    let (h, a) = raw
        .split_once('-')
        .with_context(|| format!("score {raw:?} should look like 2-1"))?;
    let home = h
        .trim()
        .parse()
        .with_context(|| format!("bad home goals in {raw:?}"))?;
    let away = a
        .trim()
        .parse()
        .with_context(|| format!("bad away goals in {raw:?}"))?;
    Ok((home, away))
}

#[derive(Serialize)]
struct JsonReport<'a> {
    config: SimConfig,
    home_team: &'a str,
    away_team: &'a str,
    total_home_xg: f64,
    total_away_xg: f64,
    observed_home_goals: u32,
    observed_away_goals: u32,
    summary: &'a OutcomeSummary,
    scores: &'a [ScoreBucket],
}

fn main() -> Result<()> {
    let args = parse_args(&mut std::env::args().skip(1))?;

    let home_xg = xg_to_values(&args.home_shots);
    let away_xg = xg_to_values(&args.away_shots);

    // One seeded generator per run; home draws first, then away, so a fixed
    // seed reproduces the exact batch.
    let mut rng = args.config.rng();
    let home_goals = simulate_chances(&mut rng, args.config.n_trials, &home_xg)?;
    let away_goals = simulate_chances(&mut rng, args.config.n_trials, &away_xg)?;

    let rows = aggregate(&home_goals, &away_goals)?;
    let summary = summarize(&rows, args.observed_home, args.observed_away)?;
    let scores = rank_scores(&rows);

    if args.json {
        let out = JsonReport {
            config: args.config,
            home_team: &args.home_team,
            away_team: &args.away_team,
            total_home_xg: home_xg.iter().sum(),
            total_away_xg: away_xg.iter().sum(),
            observed_home_goals: args.observed_home,
            observed_away_goals: args.observed_away,
            summary: &summary,
            scores: &scores,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{}",
        report::headline(&args.home_team, &args.away_team, &home_xg, &away_xg)
    );
    println!(
        "{} simulations, seed {}\n",
        args.config.n_trials, args.config.seed
    );
    println!(
        "{}\n",
        report::narrative(
            &summary,
            &args.home_team,
            &args.away_team,
            args.observed_home,
            args.observed_away,
        )
    );
    println!("{}", report::margin_histogram(&rows));
    println!("{}", report::score_table(&scores));
    Ok(())
}
