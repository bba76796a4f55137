/// Parses the longest decimal prefix of `input`, returning `NaN` when there is none.
///
/// Leading whitespace is skipped, an optional sign is accepted, and `Infinity` reads as an
/// infinite value. Trailing text after the number is ignored, so `"18 g/mol"` reads as `18.0`.
/// An exponent is only consumed when at least one exponent digit follows the `e`.
pub fn parse_float(input: &str) -> f64 {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if text[pos..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &text[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &text[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return f64::NAN;
    }

    let mut exponent = "";
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = &text[pos + 1..end];
        }
    }

    let mut normalized = String::with_capacity(pos + 4);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_digits);
    }
    if !exponent.is_empty() {
        normalized.push('e');
        normalized.push_str(exponent);
    }

    normalized.parse().unwrap_or(f64::NAN)
}

/// Parses the leading base-10 integer of `input`, ignoring any text that follows it.
///
/// Returns `None` when the text (after leading whitespace and an optional sign) does not start
/// with a digit. `"2H2"` yields `Some(2.0)` while `"H2O"` yields `None`.
pub fn parse_int(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: Option<f64> = None;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        value = Some(value.unwrap_or(0.0) * 10.0 + f64::from(digit - b'0'));
    }

    value.map(|v| if negative { -v } else { v })
}

/// Rounds to the nearest integer, with ties going towards positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds to two decimal places, with ties going towards positive infinity.
pub fn round_to_hundredths(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

/// Euclidean greatest common divisor over floating-point values.
///
/// Uses the floating-point remainder at each step, so non-integral inputs yield the largest
/// value both are (exactly) multiples of. Returns `NaN` when either input is not finite.
pub fn gcd(a: f64, b: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }

    let (mut a, mut b) = (a, b);
    while b != 0.0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Magnitude from which numbers are written with an exponent instead of positional digits.
const POSITIONAL_LIMIT: f64 = 1e21;

/// The integer and fraction digits of `|value|`, exact to the last binary digit.
fn exact_decimal(value: f64) -> (String, String) {
    let expanded = format!("{:.1100}", value.abs());
    match expanded.split_once('.') {
        Some((int, frac)) => (int.to_string(), frac.to_string()),
        None => (expanded, String::new()),
    }
}

/// Keeps the first `keep` digits, rounding up when the rest is at least one half.
///
/// The result gains a leading `1` when the carry runs past the first digit.
fn round_digits(digits: &[u8], keep: usize) -> Vec<u8> {
    let mut kept: Vec<u8> = digits.iter().take(keep).copied().collect();
    kept.resize(keep, b'0');

    if digits.get(keep).is_some_and(|d| *d >= b'5') {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, b'1');
                break;
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }
    kept
}

fn ascii(digits: &[u8]) -> &str {
    std::str::from_utf8(digits).unwrap_or_default()
}

/// Writes `value` in fixed point with `fraction_digits` digits after the point.
///
/// Ties round to the larger magnitude (`0.0625` gives `0.063`), unlike `format!("{:.3}")`,
/// which rounds them to even. Non-finite values and magnitudes of `1e21` or more are written
/// as by [`number_to_string`].
pub fn to_fixed(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() || value.abs() >= POSITIONAL_LIMIT {
        return number_to_string(value);
    }

    let (int, frac) = exact_decimal(value);
    let digits: Vec<u8> = int.bytes().chain(frac.bytes()).collect();
    let rounded = round_digits(&digits, int.len() + fraction_digits);
    let int_len = rounded.len() - fraction_digits;

    let mut out = String::with_capacity(rounded.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(ascii(&rounded[..int_len]));
    if fraction_digits > 0 {
        out.push('.');
        out.push_str(ascii(&rounded[int_len..]));
    }
    out
}

/// Writes `value` as a mantissa with `fraction_digits` digits and a signed exponent.
///
/// `1234500.0` gives `1.235e+6`; ties round to the larger magnitude. Zero is `0.000e+0`.
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return number_to_string(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (int, frac) = exact_decimal(value);
    let digits: Vec<u8> = int.bytes().chain(frac.bytes()).collect();

    let (mantissa, exponent) = match digits.iter().position(|d| *d != b'0') {
        None => (vec![b'0'; fraction_digits + 1], 0),
        Some(first) => {
            let mut exponent = int.len() as i64 - 1 - first as i64;
            let mut mantissa = round_digits(&digits[first..], fraction_digits + 1);
            if mantissa.len() > fraction_digits + 1 {
                mantissa.truncate(fraction_digits + 1);
                exponent += 1;
            }
            (mantissa, exponent)
        }
    };

    let mut out = format!("{}{}", sign, ascii(&mantissa[..1]));
    if fraction_digits > 0 {
        out.push('.');
        out.push_str(ascii(&mantissa[1..]));
    }
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    out.push_str(&format!("e{}{}", exponent_sign, exponent.abs()));
    out
}

/// Writes `value` with the fewest digits that read back to it.
///
/// Magnitudes from `1e21` up and below `1e-6` use an exponent (`1e+22`, `1e-7`); everything
/// else is positional (`2.5`, `0.000001`, `3`). Non-finite values are `NaN`, `Infinity` and
/// `-Infinity`.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let shortest = format!("{:e}", value.abs());
    let (mantissa, exponent) = shortest.split_once('e').unwrap_or((&shortest, "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i64;
    let n = exponent.parse::<i64>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        format!("{}.{}", &digits[..n as usize], &digits[n as usize..])
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exponent_sign = if n - 1 < 0 { '-' } else { '+' };
        let fraction = if k > 1 {
            format!(".{}", &digits[1..])
        } else {
            String::new()
        };
        format!("{}{}e{}{}", &digits[..1], fraction, exponent_sign, (n - 1).abs())
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}
