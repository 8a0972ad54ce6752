use crate::SfError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, SfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SfError::NonFinite { what, value: v })
    }
}

pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, SfError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(SfError::NonPositive { what, value: v })
    }
}

/// Keep an optional sizing input only if it is usable: finite and non-negative.
///
/// Anything else reads as "not supplied".
pub fn usable_sizing_input(v: Option<Real>) -> Option<Real> {
    v.filter(|x| x.is_finite() && *x >= 0.0)
}
