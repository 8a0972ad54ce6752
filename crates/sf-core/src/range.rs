//! Inclusive applicability intervals.

use core::fmt;

use crate::{Real, SfError, SfResult, ensure_finite};

/// Closed interval `[min, max]` with finite, ordered bounds.
///
/// Both ends are part of the interval, so a catalog row rated `0..=600` gpm
/// accepts exactly 600 gpm and rejects 600.5.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InclusiveRange {
    min: Real,
    max: Real,
}

impl InclusiveRange {
    /// Build a range, rejecting non-finite or inverted bounds.
    pub fn new(min: Real, max: Real, what: &'static str) -> SfResult<Self> {
        let min = ensure_finite(min, what)?;
        let max = ensure_finite(max, what)?;
        if min > max {
            return Err(SfError::InvertedRange { what, min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Real {
        self.min
    }

    pub fn max(&self) -> Real {
        self.max
    }

    pub fn contains(&self, value: Real) -> bool {
        self.min <= value && value <= self.max
    }
}

impl fmt::Display for InclusiveRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let r = InclusiveRange::new(4751.0, 8000.0, "recirc").unwrap();
        assert!(r.contains(4751.0));
        assert!(r.contains(8000.0));
        assert!(r.contains(7200.0));
        assert!(!r.contains(4750.9));
        assert!(!r.contains(8000.1));
    }

    #[test]
    fn degenerate_range_is_allowed() {
        let r = InclusiveRange::new(5.0, 5.0, "point").unwrap();
        assert!(r.contains(5.0));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = InclusiveRange::new(7334.0, 1667.0, "tonnage").unwrap_err();
        assert!(matches!(err, SfError::InvertedRange { what: "tonnage", .. }));
        assert!(err.to_string().contains("7334"));
    }

    #[test]
    fn nan_bound_is_rejected() {
        assert!(InclusiveRange::new(Real::NAN, 1.0, "x").is_err());
        assert!(InclusiveRange::new(0.0, Real::INFINITY, "x").is_err());
    }

    #[test]
    fn nan_is_never_contained() {
        let r = InclusiveRange::new(0.0, 10.0, "x").unwrap();
        assert!(!r.contains(Real::NAN));
    }

    #[test]
    fn display_uses_dash() {
        let r = InclusiveRange::new(0.0, 600.0, "x").unwrap();
        assert_eq!(r.to_string(), "0-600");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ordered_bounds_contain_their_endpoints(
                a in -1.0e6_f64..1.0e6,
                b in -1.0e6_f64..1.0e6,
            ) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                let r = InclusiveRange::new(lo, hi, "p").unwrap();
                prop_assert!(r.contains(lo));
                prop_assert!(r.contains(hi));
                prop_assert!(r.contains(lo + (hi - lo) / 2.0));
            }
        }
    }
}
