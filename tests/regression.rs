use approx::assert_abs_diff_eq;
use graphcalc::{ErrorKind, FitQuality, error::StatsError, regress};

const XS: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
const YS: [f64; 6] = [2.0, 4.0, 5.0, 4.0, 5.0, 7.0];

#[test]
fn fits_a_noisy_line() {
    let fit = regress(&XS, &YS).unwrap();

    // Σx = 21, Σy = 27, Σxy = 108, Σx² = 91, Σy² = 135
    assert_abs_diff_eq!(fit.slope, 81.0 / 105.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fit.intercept, 1.8, epsilon = 1e-12);
    assert_abs_diff_eq!(fit.r_squared, 0.7714, epsilon = 1e-4);
    assert_abs_diff_eq!(fit.correlation, 0.8783, epsilon = 1e-4);
    assert_eq!(fit.equation, "y = 0.7714x + 1.8000");
}

#[test]
fn r_squared_is_the_square_of_the_correlation() {
    let fit = regress(&XS, &YS).unwrap();
    assert_abs_diff_eq!(fit.r_squared, fit.correlation.powi(2), epsilon = 1e-12);
}

#[test]
fn perfect_negative_line() {
    let fit = regress(&[1.0, 2.0, 3.0, 4.0], &[8.0, 6.0, 4.0, 2.0]).unwrap();

    assert_abs_diff_eq!(fit.slope, -2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fit.intercept, 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fit.correlation, -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fit.r_squared, 1.0, epsilon = 1e-12);
    assert_eq!(fit.equation, "y = -2.0000x + 10.0000");
    assert_eq!(fit.fit_quality(), FitQuality::Excellent);
}

#[test]
fn negative_intercept_folds_into_the_operator() {
    let fit = regress(&[0.0, 1.0, 2.0], &[-1.0, 1.0, 3.0]).unwrap();
    assert_eq!(fit.equation, "y = 2.0000x - 1.0000");
}

#[test]
fn predict_follows_the_line() {
    let fit = regress(&XS, &YS).unwrap();

    assert_abs_diff_eq!(fit.predict(0.0), fit.intercept);
    assert_abs_diff_eq!(fit.predict(10.0), 10.0 * fit.slope + fit.intercept, epsilon = 1e-12);
}

#[test]
fn two_points_are_enough() {
    let fit = regress(&[0.0, 2.0], &[1.0, 2.0]).unwrap();

    assert_abs_diff_eq!(fit.slope, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(fit.intercept, 1.0, epsilon = 1e-12);
}

#[test]
fn x_values_far_from_the_origin_keep_their_precision() {
    let fit = regress(&[1e8, 1e8 + 1.0, 1e8 + 2.0], &[1.0, 2.0, 3.0]).unwrap();

    assert_abs_diff_eq!(fit.slope, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fit.intercept, 1.0 - 1e8, epsilon = 1e-6);
    assert_abs_diff_eq!(fit.correlation, 1.0, epsilon = 1e-12);
}

#[test]
fn timestamps_as_x_values() {
    let start = 1.7e9;
    let fit = regress(&[start, start + 60.0, start + 120.0], &[1.0, 2.0, 3.0]).unwrap();

    assert_abs_diff_eq!(fit.slope, 1.0 / 60.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fit.intercept, 2.0 - (start + 60.0) / 60.0, epsilon = 1e-6);
    assert_abs_diff_eq!(fit.correlation, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fit.r_squared, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fit.predict(start + 180.0), 4.0, epsilon = 1e-6);
}

#[test]
fn nearly_constant_x_is_still_a_fit() {
    // Differences far below the magnitude of the values are real variance.
    let base = 1e12;
    let fit = regress(&[base, base + 0.5, base + 1.0], &[0.0, 1.0, 2.0]).unwrap();

    assert_abs_diff_eq!(fit.slope, 2.0, epsilon = 1e-9);
}

#[test]
fn constant_offset_x_is_degenerate() {
    assert_eq!(regress(&[0.1, 0.1, 0.1], &[1.0, 2.0, 3.0]),
               Err(StatsError::DegenerateFit { axis: "x" }));
    assert_eq!(regress(&[1.0, 2.0, 3.0], &[1.7e9, 1.7e9, 1.7e9]),
               Err(StatsError::DegenerateFit { axis: "y" }));
}

#[test]
fn constant_x_is_degenerate() {
    let err = regress(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).unwrap_err();

    assert_eq!(err, StatsError::DegenerateFit { axis: "x" });
    assert_eq!(err.kind(), ErrorKind::DegenerateFit);
}

#[test]
fn constant_y_is_degenerate() {
    let err = regress(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]).unwrap_err();
    assert_eq!(err, StatsError::DegenerateFit { axis: "y" });
}

#[test]
fn length_mismatch() {
    let err = regress(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();

    assert_eq!(err, StatsError::LengthMismatch { x_len: 3, y_len: 2 });
    assert_eq!(err.kind(), ErrorKind::LengthMismatch);
}

#[test]
fn too_few_points() {
    assert_eq!(regress(&[1.0], &[2.0]),
               Err(StatsError::InsufficientData { got: 1, min: 2 }));
    assert_eq!(regress(&[], &[]),
               Err(StatsError::InsufficientData { got: 0, min: 2 }));
}

#[test]
fn length_mismatch_is_checked_first() {
    // Both too short and mismatched: the mismatch is reported.
    assert!(matches!(regress(&[1.0], &[]), Err(StatsError::LengthMismatch { .. })));
    // Both constant and mismatched.
    assert!(matches!(regress(&[1.0, 1.0, 1.0], &[2.0, 2.0]),
                     Err(StatsError::LengthMismatch { .. })));
}

#[test]
fn fit_quality_buckets() {
    assert_eq!(FitQuality::from_r_squared(0.95), FitQuality::Excellent);
    assert_eq!(FitQuality::from_r_squared(0.9), FitQuality::Good);
    assert_eq!(FitQuality::from_r_squared(0.75), FitQuality::Good);
    assert_eq!(FitQuality::from_r_squared(0.6), FitQuality::Moderate);
    assert_eq!(FitQuality::from_r_squared(0.5), FitQuality::Weak);
    assert_eq!(FitQuality::from_r_squared(0.1), FitQuality::Weak);
}

#[test]
fn fit_quality_description() {
    let fit = regress(&XS, &YS).unwrap();
    let quality = fit.fit_quality();

    assert_eq!(quality, FitQuality::Good);
    assert_eq!(quality.describe(fit.r_squared),
               "Good fit - The line explains 77% of the variation");
    assert_eq!(FitQuality::Weak.describe(0.25),
               "Weak fit - The line explains only 25% of the variation");
}

#[test]
fn result_serializes_to_json() {
    let fit = regress(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
    let json = serde_json::to_value(&fit).unwrap();

    assert_eq!(json["slope"], 2.0);
    assert_eq!(json["intercept"], 1.0);
    assert_eq!(json["equation"], "y = 2.0000x + 1.0000");
    assert_eq!(serde_json::to_value(FitQuality::Excellent).unwrap(), "Excellent");
}
