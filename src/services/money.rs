use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use serde::{Serialize, Serializer};

/// Fixed-point dollar amount in millionths of a dollar.
///
/// Catalog prices are whole cents and rates are basis points, so
/// `amount * bps / 10_000` never truncates at this scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

const MICROS_PER_DOLLAR: i64 = 1_000_000;
const MICROS_PER_CENT: i64 = 10_000;
const BPS_SCALE: i64 = 10_000;

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * MICROS_PER_DOLLAR)
    }

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents * MICROS_PER_CENT)
    }

    pub const fn micros(&self) -> i64 {
        self.0
    }

    /// Share of this amount at `bps` basis points (1000 = 10%).
    /// `None` if the intermediate product leaves the `i64` range.
    pub const fn apply_rate(&self, bps: u32) -> Option<Self> {
        match self.0.checked_mul(bps as i64) {
            Some(scaled) => Some(Money(scaled / BPS_SCALE)),
            None => None,
        }
    }

    pub const fn checked_mul(self, factor: i64) -> Option<Self> {
        match self.0.checked_mul(factor) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Rounded half away from zero to whole cents. Display only.
    pub fn rounded_cents(&self) -> i64 {
        let half = MICROS_PER_CENT / 2;
        if self.0 >= 0 {
            (self.0 + half) / MICROS_PER_CENT
        } else {
            (self.0 - half) / MICROS_PER_CENT
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.rounded_cents();
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.abs();
        write!(f, "{}{}.{:02}", sign, cents / 100, cents % 100)
    }
}

// Serialized as a two-decimal string so clients never see binary floats.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}
