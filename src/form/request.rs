//! Calculation requests assembled from raw form fields.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::constraint::{DrivingAxis, Rounding, StepConstraint};

use super::parse::{is_blank, parse_dimension, parse_positive};
use super::{CalcResult, StepMode, normalize};

/// Aspect ratio selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AspectField<'a> {
    /// No linked ratio; each axis snaps independently.
    #[default]
    Independent,
    /// Ratio taken from two raw component fields.
    Ratio {
        /// Width component text.
        width: &'a str,
        /// Height component text.
        height: &'a str,
    },
}

/// Named aspect ratio offered by the form's dropdown.
///
/// Components are field text: a chosen preset flows through the same
/// validation funnel as hand-typed components, including simplification
/// (235:100 validates as 47:20).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AspectPreset {
    /// Display label.
    pub name: &'static str,
    /// Width component text.
    pub width: &'static str,
    /// Height component text.
    pub height: &'static str,
}

impl AspectPreset {
    /// Field pair for a calculation request.
    pub const fn field(&self) -> AspectField<'static> {
        AspectField::Ratio {
            width: self.width,
            height: self.height,
        }
    }
}

/// Ratios offered in the aspect dropdown. "Custom" and "None" entries are
/// [`AspectField`] variants rather than presets.
pub const ASPECT_PRESETS: &[AspectPreset] = &[
    AspectPreset { name: "Square (1:1)", width: "1", height: "1" },
    AspectPreset { name: "Landscape (2:1)", width: "2", height: "1" },
    AspectPreset { name: "Portrait (1:2)", width: "1", height: "2" },
    AspectPreset { name: "Landscape (3:2)", width: "3", height: "2" },
    AspectPreset { name: "Portrait (2:3)", width: "2", height: "3" },
    AspectPreset { name: "Landscape (4:3)", width: "4", height: "3" },
    AspectPreset { name: "Portrait (3:4)", width: "3", height: "4" },
    AspectPreset { name: "Widescreen (16:9)", width: "16", height: "9" },
    AspectPreset { name: "Tallscreen (9:16)", width: "9", height: "16" },
    AspectPreset { name: "Cinematic (2.35:1)", width: "235", height: "100" },
];

/// One calculation over the current form state.
///
/// Mirrors the form fields verbatim; dimension and step fields stay raw text
/// so validation happens in one place. [`resolve`](Self::resolve) runs the
/// whole calculation and never fails — problems come back as the error
/// message inside [`CalcResult`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CalcRequest<'a> {
    /// Width field text. Empty when the user left it blank.
    pub width: &'a str,
    /// Height field text.
    pub height: &'a str,
    /// Aspect ratio selection.
    pub aspect: AspectField<'a>,
    /// Step rule selection.
    pub step_mode: StepMode,
    /// Step field text, read in divisible-by mode only.
    pub step_value: &'a str,
    /// Rounding direction.
    pub rounding: Rounding,
    /// Axis preferred as the anchor when both dimension fields are filled.
    pub driving: DrivingAxis,
}

impl CalcRequest<'_> {
    /// Empty request: blank fields, independent axes, divisible-by stepping,
    /// nearest rounding, width as the preferred anchor.
    pub const fn new() -> Self {
        Self {
            width: "",
            height: "",
            aspect: AspectField::Independent,
            step_mode: StepMode::DivisibleBy,
            step_value: "",
            rounding: Rounding::Nearest,
            driving: DrivingAxis::Width,
        }
    }

    /// Run the calculation for the current field values.
    pub fn resolve(&self) -> CalcResult {
        match self.aspect {
            AspectField::Independent => self.resolve_independent(),
            AspectField::Ratio { width, height } => self.resolve_coupled(width, height),
        }
    }

    /// Each filled axis snaps on its own; field problems accumulate into one
    /// space-joined message while valid axes still produce numbers.
    fn resolve_independent(&self) -> CalcResult {
        let width_text = self.width.trim();
        let height_text = self.height.trim();
        if width_text.is_empty() && height_text.is_empty() {
            return CalcResult::error_only(NO_INPUT);
        }

        let mut errors: Vec<&'static str> = Vec::new();

        // Unlike the coupled path, a blank step field is an error here.
        let constraint = match self.step_mode {
            StepMode::DivisibleBy => match parse_positive(self.step_value) {
                Some(step) => Some(StepConstraint::DivisibleBy(step)),
                None => {
                    errors.push("Step value must be a positive integer.");
                    None
                }
            },
            StepMode::PowerOfTwo => Some(StepConstraint::PowerOfTwo),
        };

        let width = self.snap_field(
            width_text,
            "Input width must be a non-negative integer.",
            constraint,
            &mut errors,
        );
        let height = self.snap_field(
            height_text,
            "Input height must be a non-negative integer.",
            constraint,
            &mut errors,
        );

        CalcResult {
            width,
            height,
            error: (!errors.is_empty()).then(|| errors.join(" ")),
        }
    }

    fn snap_field(
        &self,
        text: &str,
        message: &'static str,
        constraint: Option<StepConstraint>,
        errors: &mut Vec<&'static str>,
    ) -> Option<u32> {
        if text.is_empty() {
            return None;
        }
        match parse_dimension(text) {
            Some(value) => constraint.map(|c| c.snap(value, self.rounding)),
            None => {
                errors.push(message);
                None
            }
        }
    }

    /// One axis anchors, the other follows the ratio; validation errors
    /// short-circuit before the solver runs.
    fn resolve_coupled(&self, aspect_width: &str, aspect_height: &str) -> CalcResult {
        let width_blank = is_blank(self.width);
        let height_blank = is_blank(self.height);
        if width_blank && height_blank {
            return CalcResult::error_only(NO_INPUT);
        }

        // The preferred axis anchors the calculation; when its field is
        // blank the other one takes over.
        let (axis, value_text) = match self.driving {
            DrivingAxis::Width if width_blank => (DrivingAxis::Height, self.height),
            DrivingAxis::Height if height_blank => (DrivingAxis::Width, self.width),
            DrivingAxis::Width => (DrivingAxis::Width, self.width),
            DrivingAxis::Height => (DrivingAxis::Height, self.height),
        };

        let step = (self.step_mode == StepMode::DivisibleBy).then_some(self.step_value);
        let params = match normalize(value_text, aspect_width, aspect_height, self.step_mode, step)
        {
            Ok(params) => params,
            Err(e) => return CalcResult::error_only(e.to_string()),
        };

        let constraint = match params.step {
            Some(step) => StepConstraint::DivisibleBy(step),
            None => StepConstraint::PowerOfTwo,
        };

        match constraint.snap_coupled(params.value, axis, params.aspect, self.rounding) {
            Some(size) => CalcResult {
                width: Some(size.width),
                height: Some(size.height),
                error: None,
            },
            None => CalcResult::error_only("Calculation failed. Check parameters."),
        }
    }
}

impl Default for CalcRequest<'_> {
    fn default() -> Self {
        Self::new()
    }
}

const NO_INPUT: &str = "Please enter at least one dimension.";
