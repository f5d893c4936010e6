//! Natural decimal rendering of floats.

/// Render a float as the shortest text that reads back to the same value.
///
/// Integral values keep a trailing `.0`. Magnitudes below `1e-4` or from
/// `1e16` up switch to exponent form with a sign and at least two
/// exponent digits (`1e+16`, `2.5e-05`). Non-finite values render as
/// `inf`, `-inf` and `nan`.
pub fn render_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_negative() { "-inf" } else { "inf" };
        return text.to_string();
    }

    // Debug output is shortest round-trip, keeps `.0` on integral values and
    // uses exponent form below 1e-4 and from 1e16; only the exponent differs.
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// Render an integral float as plain digits, with no fraction or exponent.
///
/// Every digit is exact (`1e20` is `100000000000000000000`) and negative
/// zero renders as `0`.
pub fn render_integral(value: f64) -> String {
    // adding positive zero turns -0.0 into 0.0
    format!("{:.0}", value.trunc() + 0.0)
}
