use approx::assert_relative_eq;
use graphcalc::{
    ErrorKind, describe,
    error::StatsError,
    statistics::{max, mean, median, min, quartile, std_dev, sum},
};
use rstest::rstest;

const SAMPLE: [f64; 14] = [12.0, 15.0, 18.0, 22.0, 25.0, 28.0, 30.0, 32.0, 35.0, 38.0, 40.0,
                           42.0, 45.0, 48.0];

#[test]
fn describe_small_series() {
    let stats = describe(&[1.0, 2.0, 3.0, 4.0]).unwrap();

    assert_eq!(stats.count, 4);
    assert_eq!(stats.sum, 10.0);
    assert_eq!(stats.mean, 2.5);
    assert_eq!(stats.median, 2.5);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 4.0);
    assert_relative_eq!(stats.std_dev, 1.25_f64.sqrt());
}

#[test]
fn describe_matches_individual_functions() {
    let stats = describe(&SAMPLE).unwrap();

    assert_eq!(stats.sum, sum(&SAMPLE).unwrap());
    assert_eq!(stats.mean, mean(&SAMPLE).unwrap());
    assert_eq!(stats.median, median(&SAMPLE).unwrap());
    assert_eq!(stats.std_dev, std_dev(&SAMPLE).unwrap());
    assert_eq!(stats.min, min(&SAMPLE).unwrap());
    assert_eq!(stats.max, max(&SAMPLE).unwrap());
    assert_eq!(stats.q1, quartile(&SAMPLE, 0.25).unwrap());
    assert_eq!(stats.q3, quartile(&SAMPLE, 0.75).unwrap());
}

#[test]
fn nearest_rank_quartiles() {
    let stats = describe(&SAMPLE).unwrap();

    // floor(0.25 * 14) = 3 and floor(0.75 * 14) = 10
    assert_eq!(stats.q1, 22.0);
    assert_eq!(stats.q3, 40.0);
    assert_eq!(stats.iqr(), 18.0);
    assert_eq!(stats.range(), 36.0);
    assert_eq!(stats.median, 31.0);
    assert_eq!(stats.sum, 430.0);
}

#[test]
fn quartiles_ignore_input_order() {
    let mut shuffled = SAMPLE;
    shuffled.reverse();
    shuffled.swap(2, 9);

    assert_eq!(quartile(&shuffled, 0.25).unwrap(), 22.0);
    assert_eq!(median(&shuffled).unwrap(), 31.0);
}

#[rstest]
#[case(0.0, 12.0)]
#[case(-0.5, 12.0)]
#[case(1.0, 48.0)]
#[case(2.0, 48.0)]
fn quartile_rank_is_clamped(#[case] p: f64, #[case] expected: f64) {
    assert_eq!(quartile(&SAMPLE, p).unwrap(), expected);
}

#[test]
fn odd_count_median_is_the_middle_sample() {
    assert_eq!(median(&[5.0, 1.0, 3.0]).unwrap(), 3.0);
}

#[test]
fn single_sample() {
    let stats = describe(&[7.0]).unwrap();

    assert_eq!(stats.count, 1);
    assert_eq!(stats.mean, 7.0);
    assert_eq!(stats.median, 7.0);
    assert_eq!(stats.std_dev, 0.0);
    assert_eq!(stats.q1, 7.0);
    assert_eq!(stats.q3, 7.0);
}

#[test]
fn population_standard_deviation() {
    // Mean 5, squared deviations sum to 32 over 8 samples.
    let s = std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    assert_eq!(s, 2.0);
}

#[test]
fn negative_values() {
    let stats = describe(&[-3.0, -1.0, 4.0]).unwrap();

    assert_eq!(stats.min, -3.0);
    assert_eq!(stats.max, 4.0);
    assert_eq!(stats.median, -1.0);
    assert_eq!(stats.mean, 0.0);
}

#[test]
fn input_is_not_modified() {
    let series = vec![9.0, 3.0, 7.0, 1.0];
    let before = series.clone();

    describe(&series).unwrap();
    median(&series).unwrap();
    quartile(&series, 0.75).unwrap();

    assert_eq!(series, before);
}

#[test]
fn empty_series_is_an_error_everywhere() {
    let empty: [f64; 0] = [];

    assert_eq!(describe(&empty), Err(StatsError::EmptySeries));
    assert_eq!(sum(&empty), Err(StatsError::EmptySeries));
    assert_eq!(mean(&empty), Err(StatsError::EmptySeries));
    assert_eq!(median(&empty), Err(StatsError::EmptySeries));
    assert_eq!(std_dev(&empty), Err(StatsError::EmptySeries));
    assert_eq!(min(&empty), Err(StatsError::EmptySeries));
    assert_eq!(max(&empty), Err(StatsError::EmptySeries));
    assert_eq!(quartile(&empty, 0.5), Err(StatsError::EmptySeries));

    assert_eq!(StatsError::EmptySeries.kind(), ErrorKind::EmptySeries);
}

#[test]
fn statistics_serialize_to_json() {
    let stats = describe(&[1.0, 2.0, 3.0]).unwrap();
    let json = serde_json::to_value(stats).unwrap();

    assert_eq!(json["count"], 3);
    assert_eq!(json["mean"], 2.0);
    assert_eq!(json["q1"], 1.0);
}
