//! Numeric handlers: integers, byte counts with unit suffixes, and floats.
//!
//! All three share [`Bounds`] for optional inclusive range checks.

use std::fmt::Display;
use std::num::{IntErrorKind, ParseIntError};

use crate::store::OptionStore;

use super::ValidationError;

/// Multiplier for the `K` suffix.
pub const KIB: u64 = 1024;

/// Multiplier for the `M` suffix.
pub const MIB: u64 = 1024 * 1024;

/// Optional inclusive lower and upper bounds.
///
/// `None` means the side is unbounded, so every representable value is a
/// legitimate bound (no sentinel collisions).
///
/// # Example
///
/// ```
/// use optval::handler::Bounds;
///
/// let bounds = Bounds::between(1, 16);
/// assert!(bounds.check(&16).is_ok());
/// assert!(bounds.check(&17).is_err());
/// assert!(Bounds::<i64>::unbounded().check(&i64::MIN).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<T> {
    /// Inclusive minimum, if any
    pub min: Option<T>,
    /// Inclusive maximum, if any
    pub max: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> Bounds<T> {
    /// No lower or upper bound.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Bounds from optional sides.
    #[must_use]
    pub const fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    /// Lower bound only.
    #[must_use]
    pub const fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Upper bound only.
    #[must_use]
    pub const fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Both bounds.
    #[must_use]
    pub const fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

impl<T: PartialOrd + Display> Bounds<T> {
    /// Returns the first set side that does not compare equal to itself
    /// (a float `NaN`). Such a bound would never reject anything.
    #[must_use]
    pub fn incomparable(&self) -> Option<&T> {
        [&self.min, &self.max]
            .into_iter()
            .flatten()
            .find(|bound| bound.partial_cmp(bound).is_none())
    }

    /// Returns `false` if both sides are set and `min > max`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }

    /// Checks that `value` lies within the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BelowMinimum`] or
    /// [`ValidationError::AboveMaximum`] when `value` is out of range.
    pub fn check(&self, value: &T) -> Result<(), ValidationError> {
        if let Some(min) = &self.min {
            if value < min {
                return Err(ValidationError::BelowMinimum {
                    value: value.to_string(),
                    min: min.to_string(),
                });
            }
        }
        if let Some(max) = &self.max {
            if value > max {
                return Err(ValidationError::AboveMaximum {
                    value: value.to_string(),
                    max: max.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Base-10 integer with optional bounds.
///
/// The stored value is the decimal form of the parsed integer, so `"+7"` and
/// `"007"` are both stored as `"7"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberHandler {
    name: String,
    bounds: Bounds<i64>,
}

impl NumberHandler {
    /// Creates an unbounded integer handler.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_bounds(name, Bounds::unbounded())
    }

    /// Creates an integer handler with the given bounds.
    #[must_use]
    pub fn with_bounds(name: impl Into<String>, bounds: Bounds<i64>) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }

    /// Returns the bound option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the configured bounds.
    #[must_use]
    pub const fn bounds(&self) -> &Bounds<i64> {
        &self.bounds
    }

    /// Parses `arg` as an integer and stores its decimal form.
    ///
    /// # Errors
    ///
    /// Returns an error if `arg` is not an integer or is out of bounds.
    pub fn parse_arg<S: OptionStore + ?Sized>(
        &self,
        store: &mut S,
        arg: &str,
    ) -> Result<(), ValidationError> {
        let value = arg
            .parse::<i64>()
            .map_err(|e| integer_error(arg, &e))?;
        self.bounds.check(&value)?;
        store.put(&self.name, &value.to_string());
        Ok(())
    }
}

/// Byte count with an optional `K` (KiB) or `M` (MiB) suffix.
///
/// An empty string and a bare suffix (`"K"`, `"M"`) are accepted as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitNumberHandler {
    name: String,
    bounds: Bounds<u64>,
}

impl UnitNumberHandler {
    /// Creates an unbounded byte-count handler.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_bounds(name, Bounds::unbounded())
    }

    /// Creates a byte-count handler with bounds on the expanded value.
    #[must_use]
    pub fn with_bounds(name: impl Into<String>, bounds: Bounds<u64>) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }

    /// Returns the bound option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the configured bounds.
    #[must_use]
    pub const fn bounds(&self) -> &Bounds<u64> {
        &self.bounds
    }

    /// Expands the unit suffix and stores the byte count in decimal.
    ///
    /// # Errors
    ///
    /// Returns an error on an unknown suffix, a non-numeric body, overflow,
    /// or a value out of bounds.
    pub fn parse_arg<S: OptionStore + ?Sized>(
        &self,
        store: &mut S,
        arg: &str,
    ) -> Result<(), ValidationError> {
        let bytes = parse_unit_number(arg)?;
        self.bounds.check(&bytes)?;
        store.put(&self.name, &bytes.to_string());
        Ok(())
    }
}

/// Parses `"<digits>[K|M]"` into a byte count.
///
/// A missing digit part counts as zero.
///
/// # Errors
///
/// Returns an error on an unknown suffix, non-numeric digits or overflow.
pub fn parse_unit_number(arg: &str) -> Result<u64, ValidationError> {
    let (digits, multiplier) = if let Some(digits) = arg.strip_suffix('K') {
        (digits, KIB)
    } else if let Some(digits) = arg.strip_suffix('M') {
        (digits, MIB)
    } else {
        match arg.chars().last() {
            Some(suffix) if !suffix.is_ascii_digit() => {
                return Err(ValidationError::UnknownUnit {
                    value: arg.to_string(),
                    suffix,
                });
            }
            _ => (arg, 1),
        }
    };

    if digits.is_empty() {
        return Ok(0);
    }

    let base = digits
        .parse::<u64>()
        .map_err(|e| integer_error(arg, &e))?;

    base.checked_mul(multiplier)
        .ok_or_else(|| ValidationError::Overflow {
            value: arg.to_string(),
        })
}

fn integer_error(arg: &str, error: &ParseIntError) -> ValidationError {
    let value = arg.to_string();
    match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ValidationError::Overflow { value }
        }
        _ => ValidationError::NotInteger { value },
    }
}

/// Decimal floating-point number with optional bounds.
///
/// Once validated, the value is stored exactly as the caller wrote it
/// (`"1.0"` stays `"1.0"`).
#[derive(Debug, Clone, PartialEq)]
pub struct FloatNumberHandler {
    name: String,
    bounds: Bounds<f64>,
}

impl FloatNumberHandler {
    /// Creates an unbounded float handler.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_bounds(name, Bounds::unbounded())
    }

    /// Creates a float handler with the given bounds.
    #[must_use]
    pub fn with_bounds(name: impl Into<String>, bounds: Bounds<f64>) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }

    /// Returns the bound option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the configured bounds.
    #[must_use]
    pub const fn bounds(&self) -> &Bounds<f64> {
        &self.bounds
    }

    /// Validates `arg` as a finite float in range and stores it verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if `arg` is not a finite number or is out of bounds.
    pub fn parse_arg<S: OptionStore + ?Sized>(
        &self,
        store: &mut S,
        arg: &str,
    ) -> Result<(), ValidationError> {
        let value = arg
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ValidationError::NotFloat {
                value: arg.to_string(),
            })?;
        self.bounds.check(&value)?;
        store.put(&self.name, arg);
        Ok(())
    }
}
