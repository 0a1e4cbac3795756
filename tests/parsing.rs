use xgsim_terminal::error::SimError;
use xgsim_terminal::parse::{parse_probability, xg_to_values};

#[test]
fn parses_a_real_shot_list() {
    let raw = "0.29, 0.07, 0.04, 0.09, 0.05, 0.06, 0.03, 0.04, 0.13, 0.01, 0.04, 0.05, \
               0.1, 0.12, 0.04, 0.02, 0.13, 0.04, 0.15, 0.03, 0.05, 0.29, 0.16, 0.16";
    let values = xg_to_values(raw);
    assert_eq!(values.len(), 24);
    assert_eq!(values[0], 0.29);
    assert_eq!(values[23], 0.16);
}

#[test]
fn trailing_comma_is_tolerated() {
    assert_eq!(xg_to_values("0.1, 0.06, 0.7, 0.06,"), vec![0.1, 0.06, 0.7, 0.06]);
}

#[test]
fn malformed_tokens_are_dropped_silently() {
    assert_eq!(xg_to_values("0.3, abc, 0.2"), vec![0.3, 0.2]);
    assert_eq!(xg_to_values("0.3;0.2"), Vec::<f64>::new());
}

#[test]
fn boundary_and_out_of_range_values_are_dropped() {
    // 0 and 1 carry no information and must not reach the simulator.
    assert_eq!(xg_to_values("0, 0.5, 1, 1.7, -0.3"), vec![0.5]);
}

#[test]
fn strict_parse_reports_the_offending_token() {
    let err = parse_probability(" 1.7 ").unwrap_err();
    assert_eq!(err, SimError::MalformedProbabilityString("1.7".to_string()));
}
