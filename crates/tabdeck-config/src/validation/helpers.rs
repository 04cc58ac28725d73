/// Records `name` when `value` falls outside `min..=max`.
pub(crate) fn validate_range(
    errors: &mut Vec<String>,
    name: &str,
    value: usize,
    min: usize,
    max: usize,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} must be within {min}..={max}, got {value}"));
    }
}

/// Ratios are fractions of the window and must lie in `(0, 1]`.
pub(crate) fn validate_ratio(errors: &mut Vec<String>, name: &str, value: f64) {
    let fits = value > 0.0 && value <= 1.0;
    if !fits {
        errors.push(format!("{name} must be in (0, 1], got {value}"));
    }
}
