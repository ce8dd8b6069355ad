//! Form field parsing, validation, and calculation requests.
//!
//! Turns raw text fields (dimensions, aspect ratio components, step value)
//! into validated parameters and runs the snapping calculation, producing a
//! [`CalcResult`] the caller can render directly. Nothing here fails loudly:
//! validation problems come back as the result's error message, alongside
//! whatever partial numbers were still computable.
//!
//! # Example
//!
//! ```
//! use texsnap::form::{AspectField, CalcRequest};
//!
//! let request = CalcRequest {
//!     width: "111",
//!     height: "",
//!     aspect: AspectField::Ratio { width: "2", height: "3" },
//!     step_value: "4",
//!     ..CalcRequest::new()
//! };
//! let result = request.resolve();
//! assert_eq!(result.width, Some(112));
//! assert_eq!(result.height, Some(168));
//! assert!(result.error.is_none());
//! ```

mod parse;
mod request;

pub use self::request::{ASPECT_PRESETS, AspectField, AspectPreset, CalcRequest};

use alloc::string::String;
use core::fmt;

use crate::constraint::AspectRatio;

use self::parse::{parse_dimension, parse_positive};

/// Step rule selection as it appears on the form, before the step value
/// itself has been parsed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StepMode {
    /// Snap to multiples of the step field.
    #[default]
    DivisibleBy,
    /// Snap to powers of two.
    PowerOfTwo,
}

/// Why raw form fields failed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamError {
    /// The dimension field is not a non-negative integer.
    InvalidDimension,
    /// An aspect component is not a positive integer.
    InvalidAspectRatio,
    /// The step field is not a positive integer.
    InvalidStep,
    /// Power-of-two stepping with an aspect ratio whose simplified
    /// components are not both powers of two.
    IncompatibleAspect {
        /// The simplified pair, for display.
        aspect: AspectRatio,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension => f.write_str("Input dimension must be a non-negative integer."),
            Self::InvalidAspectRatio => {
                f.write_str("Aspect ratio components must be positive integers.")
            }
            Self::InvalidStep => f.write_str("Step value must be a positive integer."),
            Self::IncompatibleAspect { aspect } => write!(
                f,
                "For Power of 2 stepping with a fixed aspect ratio, both simplified aspect ratio \
                 components (currently {}:{}) must themselves be powers of two. Consider 'None' \
                 aspect ratio for independent Power of 2 dimensions.",
                aspect.width, aspect.height
            ),
        }
    }
}

impl core::error::Error for ParamError {}

/// Validated parameters for an aspect-coupled calculation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Parsed driving dimension.
    pub value: u32,
    /// Simplified aspect pair.
    pub aspect: AspectRatio,
    /// Parsed step. `Some` only in divisible-by mode.
    pub step: Option<u32>,
}

/// Validate raw field text and simplify the aspect pair.
///
/// Checks run in order — driving value, aspect components, step
/// (divisible-by mode), power-of-two compatibility of the simplified pair —
/// and the first failure wins. A missing or empty step field falls back to
/// a step of 1.
pub fn normalize(
    value: &str,
    aspect_width: &str,
    aspect_height: &str,
    mode: StepMode,
    step: Option<&str>,
) -> Result<Params, ParamError> {
    let value = parse_dimension(value).ok_or(ParamError::InvalidDimension)?;

    let (w, h) = match (parse_positive(aspect_width), parse_positive(aspect_height)) {
        (Some(w), Some(h)) => (w, h),
        _ => return Err(ParamError::InvalidAspectRatio),
    };
    let aspect = AspectRatio::new(w, h).simplify();

    match mode {
        StepMode::DivisibleBy => {
            let step_text = match step {
                Some(s) if !s.is_empty() => s,
                _ => "1",
            };
            let step = parse_positive(step_text).ok_or(ParamError::InvalidStep)?;
            Ok(Params {
                value,
                aspect,
                step: Some(step),
            })
        }
        StepMode::PowerOfTwo => {
            if !aspect.is_power_of_two_pair() {
                return Err(ParamError::IncompatibleAspect { aspect });
            }
            Ok(Params {
                value,
                aspect,
                step: None,
            })
        }
    }
}

/// Outcome of a calculation request.
///
/// An axis is `None` when no input was supplied for it. In independent mode
/// an error can sit alongside a partially computed result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalcResult {
    /// Snapped width, when the width axis produced one.
    pub width: Option<u32>,
    /// Snapped height, when the height axis produced one.
    pub height: Option<u32>,
    /// Human-readable problem description, when anything went wrong.
    pub error: Option<String>,
}

impl CalcResult {
    pub(crate) fn error_only(message: impl Into<String>) -> Self {
        Self {
            width: None,
            height: None,
            error: Some(message.into()),
        }
    }
}
