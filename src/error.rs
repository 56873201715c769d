// Error types for IntSar-3D transforms

use std::fmt;

use thiserror::Error;

/// Which side of an open range a value fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSide {
    /// The value was not strictly greater than the lower bound.
    Lower,
    /// The value was not strictly less than the upper bound.
    Upper,
}

/// A parameter setter was handed a value outside its open range.
///
/// Renders as e.g. `near value (5) more than far value (3)`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{name} value ({value}) {relation} {bound_name} value ({bound})", relation = Relation::of(.value, .bound, .side))]
pub struct RangeViolation {
    /// Name of the rejected parameter.
    pub name: &'static str,
    /// The rejected value.
    pub value: f32,
    /// Name of the bound that was violated.
    pub bound_name: &'static str,
    /// The violated bound.
    pub bound: f32,
    /// Which side was violated.
    pub side: BoundSide,
}

enum Relation {
    Less,
    Equal,
    More,
}

impl Relation {
    fn of(value: &f32, bound: &f32, side: &BoundSide) -> Self {
        if value == bound {
            Relation::Equal
        } else {
            match side {
                BoundSide::Lower => Relation::Less,
                BoundSide::Upper => Relation::More,
            }
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Relation::Less => "less than",
            Relation::Equal => "equal to",
            Relation::More => "more than",
        })
    }
}

pub type Result<T, E = RangeViolation> = std::result::Result<T, E>;

/// A named bound for [`check_range`].
#[derive(Debug, Clone, Copy)]
pub struct Bound {
    pub name: &'static str,
    pub value: f32,
}

impl Bound {
    pub const fn new(name: &'static str, value: f32) -> Self {
        Self { name, value }
    }
}

/// Checks `lower < value < upper`, strictly.
///
/// NaN fails the lower check.
pub fn check_range(lower: Bound, name: &'static str, value: f32, upper: Bound) -> Result<()> {
    let side = if !(value > lower.value) {
        Some((lower, BoundSide::Lower))
    } else if !(value < upper.value) {
        Some((upper, BoundSide::Upper))
    } else {
        None
    };

    match side {
        None => Ok(()),
        Some((bound, side)) => {
            let err = RangeViolation {
                name,
                value,
                bound_name: bound.name,
                bound: bound.value,
                side,
            };
            log::debug!("rejected {}: {}", name, err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO: Bound = Bound::new("zero", 0.0);
    const TEN: Bound = Bound::new("ten", 10.0);

    #[test]
    fn inside_range_passes() {
        assert!(check_range(ZERO, "x", 5.0, TEN).is_ok());
    }

    #[test]
    fn bounds_are_open() {
        let err = check_range(ZERO, "x", 0.0, TEN).unwrap_err();
        assert_eq!(err.side, BoundSide::Lower);
        assert_eq!(err.to_string(), "x value (0) equal to zero value (0)");

        let err = check_range(ZERO, "x", 10.0, TEN).unwrap_err();
        assert_eq!(err.side, BoundSide::Upper);
        assert_eq!(err.bound_name, "ten");
    }

    #[test]
    fn names_the_violated_bound() {
        let far = Bound::new("far", 3.0);
        let err = check_range(ZERO, "near", 5.0, far).unwrap_err();
        assert_eq!(err.to_string(), "near value (5) more than far value (3)");

        let err = check_range(ZERO, "near", -1.0, far).unwrap_err();
        assert_eq!(err.to_string(), "near value (-1) less than zero value (0)");
    }

    #[test]
    fn nan_is_rejected() {
        let err = check_range(ZERO, "x", f32::NAN, TEN).unwrap_err();
        assert_eq!(err.side, BoundSide::Lower);
    }
}
