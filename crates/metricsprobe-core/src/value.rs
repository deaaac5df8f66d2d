//! Numeric input conversions for instrument recording.
//!
//! Counters store `i64` deltas; any integer type is accepted and widened,
//! with out-of-range values reported instead of silently wrapped.
//! Recorders store `f64`; integers are widened with `as`, so very large
//! magnitudes may lose precision.

use std::fmt::Display;

use crate::error::{MetricsError, Result};

/// Integer types a counter accepts.
pub trait CounterValue: Copy + Display {
    fn to_i64(self) -> Result<i64>;
}

/// Integer or floating point types a recorder accepts.
pub trait RecordValue: Copy + Display {
    fn to_f64(self) -> f64;
}

macro_rules! counter_value {
    ($($t:ty),*) => {
        $(
            impl CounterValue for $t {
                fn to_i64(self) -> Result<i64> {
                    i64::try_from(self).map_err(|_| MetricsError::OutOfRange {
                        value: self.to_string(),
                        target: "i64",
                    })
                }
            }
        )*
    };
}

macro_rules! record_value {
    ($($t:ty),*) => {
        $(
            impl RecordValue for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

counter_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
record_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn counter_widening_rejects_overflow() {
        assert_eq!(5u8.to_i64().unwrap(), 5);
        assert_eq!((-3i32).to_i64().unwrap(), -3);
        assert_eq!(i64::MAX.to_i64().unwrap(), i64::MAX);

        let err = u64::MAX.to_i64().unwrap_err();
        assert_eq!(err.code().as_str(), "OUT_OF_RANGE");
        assert!(err.to_string().contains(&u64::MAX.to_string()));
    }

    #[test]
    fn record_widening_to_float() {
        assert_eq!(7i32.to_f64(), 7.0);
        assert_eq!(2.5f32.to_f64(), 2.5);
        assert_eq!(u64::MAX.to_f64(), u64::MAX as f64);
    }
}
