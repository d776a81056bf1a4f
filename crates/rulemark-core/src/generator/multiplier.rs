//! Fixed-point scaling for the modulo generator
//!
//! Tick intervals are floats, but the modulo walk runs on integers. The
//! multiplier is chosen so that every interval of a subsection becomes an
//! exact integer:
//!
//! - Intervals with a short decimal form use one power of ten beyond their
//!   decimal digits (`0.05` has 2 digits, so `1000`), never less than `100`.
//! - Intervals like `1/3` fall back to a continued-fraction approximation,
//!   and the multiplier becomes `lcm(denominators) * 100`.

use tracing::{debug, warn};

/// Largest denominator the rational fallback will accept
const MAX_DENOMINATOR: i64 = 1000;

/// Smallest multiplier ever used
const MIN_MULTIPLIER: i64 = 100;

/// Integer scaling chosen for one subsection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedPoint {
    /// Values are multiplied by this before rounding
    pub multiplier: i64,
    /// False when an interval needed the rational fallback
    pub decimal: bool,
}

impl FixedPoint {
    /// Scale `value` to the nearest integer
    pub fn to_fixed(&self, value: f64) -> i64 {
        (value * self.multiplier as f64).round() as i64
    }

    /// Scale an integer coordinate back to a value
    pub fn to_value(&self, fixed: i64) -> f64 {
        fixed as f64 / self.multiplier as f64
    }
}

/// Pick a multiplier that makes every positive interval an integer
pub fn fixed_point_multiplier(intervals: &[f64], max_decimal_digits: u32) -> FixedPoint {
    let positive: Vec<f64> = intervals.iter().copied().filter(|i| *i > 0.0).collect();

    let digits: Option<Vec<u32>> = positive
        .iter()
        .map(|&interval| decimal_digits(interval, max_decimal_digits))
        .collect();

    if let Some(digits) = digits {
        let most = digits.into_iter().max().unwrap_or(0);
        return FixedPoint {
            multiplier: 10i64.pow(most + 1).max(MIN_MULTIPLIER),
            decimal: true,
        };
    }

    let mut denominator = 1i64;
    for &interval in &positive {
        let part = match decimal_digits(interval, max_decimal_digits) {
            Some(d) => 10i64.pow(d),
            None => match rational_denominator(interval) {
                Some(q) => q,
                None => {
                    let multiplier = 10i64.pow(max_decimal_digits + 1);
                    warn!(
                        interval,
                        multiplier, "interval has no exact fixed-point form; ticks may drift"
                    );
                    return FixedPoint {
                        multiplier,
                        decimal: false,
                    };
                }
            },
        };
        denominator = lcm(denominator, part);
    }

    let multiplier = denominator * MIN_MULTIPLIER;
    debug!(?intervals, multiplier, "using rational fixed-point");
    FixedPoint {
        multiplier,
        decimal: false,
    }
}

/// Digits after the decimal point up to the last nonzero one
///
/// Relies on `f64`'s shortest round-trip `Display`, which never uses
/// exponent notation. Returns `None` above `max_digits`.
fn decimal_digits(value: f64, max_digits: u32) -> Option<u32> {
    let text = value.abs().to_string();
    let digits = match text.split_once('.') {
        Some((_, fraction)) => fraction.trim_end_matches('0').len() as u32,
        None => 0,
    };
    (digits <= max_digits).then_some(digits)
}

/// Denominator of a close rational approximation, via continued fractions
fn rational_denominator(value: f64) -> Option<i64> {
    let tolerance = value.abs() * 1e-9;
    // Convergents h/k, seeded with h(-2)/k(-2) = 0/1 and h(-1)/k(-1) = 1/0
    let (mut h_prev, mut h) = (0i64, 1i64);
    let (mut k_prev, mut k) = (1i64, 0i64);
    let mut x = value;

    for _ in 0..32 {
        let a = x.floor();
        if a > i64::MAX as f64 / 2.0 {
            return None;
        }
        let a = a as i64;
        let h_next = a.checked_mul(h)?.checked_add(h_prev)?;
        let k_next = a.checked_mul(k)?.checked_add(k_prev)?;
        if k_next > MAX_DENOMINATOR {
            return None;
        }
        if (h_next as f64 / k_next as f64 - value).abs() <= tolerance {
            return Some(k_next);
        }
        (h_prev, h) = (h, h_next);
        (k_prev, k) = (k, k_next);

        let fraction = x - x.floor();
        if fraction == 0.0 {
            return None;
        }
        x = 1.0 / fraction;
    }
    None
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a.abs()
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: i64, b: i64) -> i64 {
    a / gcd(a, b) * b
}
