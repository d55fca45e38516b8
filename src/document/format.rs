//! Number formatting for attribute values and text content

/// Format a float the way NRML consumers expect to read it back.
///
/// Uses the shortest representation that round-trips, always with a
/// fractional part (`50.0`, not `50`). Very small and very large
/// magnitudes switch to exponent notation with a signed, two-digit
/// exponent (`1e-07`, `1e+16`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// Join a sequence of floats with single spaces, preserving order
pub fn join_floats(values: &[f64]) -> String {
    values
        .iter()
        .map(|&value| format_float(value))
        .collect::<Vec<_>>()
        .join(" ")
}
