//! End-to-end tests for form requests → snapped dimensions.
//!
//! Exercises the full path: raw field text through validation, driving-axis
//! selection, and both solvers, checking the exact numbers and error strings
//! a rendering layer would display.

use texsnap::form::{ASPECT_PRESETS, AspectField, CalcRequest, CalcResult, StepMode};
use texsnap::{DrivingAxis, Rounding};

/// Request with a 2:3 ratio and a step of 4, the form's classic setup.
fn ratio_request<'a>(width: &'a str, height: &'a str) -> CalcRequest<'a> {
    CalcRequest {
        width,
        height,
        aspect: AspectField::Ratio { width: "2", height: "3" },
        step_value: "4",
        ..CalcRequest::new()
    }
}

fn independent_request<'a>(width: &'a str, height: &'a str) -> CalcRequest<'a> {
    CalcRequest {
        width,
        height,
        step_value: "4",
        ..CalcRequest::new()
    }
}

fn dimensions(result: &CalcResult) -> (Option<u32>, Option<u32>) {
    (result.width, result.height)
}

mod aspect_mode {
    use super::*;

    #[test]
    fn width_drives_both_axes() {
        let result = ratio_request("111", "").resolve();
        assert_eq!(dimensions(&result), (Some(112), Some(168)));
        assert_eq!(result.error, None);
    }

    #[test]
    fn rounding_direction_is_honored() {
        let down = CalcRequest { rounding: Rounding::Down, ..ratio_request("111", "") };
        assert_eq!(dimensions(&down.resolve()), (Some(104), Some(156)));

        let up = CalcRequest { rounding: Rounding::Up, ..ratio_request("111", "") };
        assert_eq!(dimensions(&up.resolve()), (Some(112), Some(168)));
    }

    #[test]
    fn blank_step_field_falls_back_to_one() {
        // Step 1 admits every multiplier: 111/2 = 55.5 ties between 55 and
        // 56, and the tie keeps the lower one.
        let request = CalcRequest { step_value: "", ..ratio_request("111", "") };
        assert_eq!(dimensions(&request.resolve()), (Some(110), Some(165)));
    }

    #[test]
    fn blank_preferred_axis_falls_back_to_the_other() {
        // Driving axis prefers width, but only height is filled.
        let result = ratio_request("", "150").resolve();
        assert_eq!(dimensions(&result), (Some(96), Some(144)));
        assert_eq!(result.error, None);
    }

    #[test]
    fn explicit_height_driving_axis() {
        let request = CalcRequest {
            driving: DrivingAxis::Height,
            ..ratio_request("111", "150")
        };
        assert_eq!(dimensions(&request.resolve()), (Some(96), Some(144)));
    }

    #[test]
    fn preferred_axis_wins_when_both_filled() {
        let result = ratio_request("111", "150").resolve();
        assert_eq!(dimensions(&result), (Some(112), Some(168)));
    }

    #[test]
    fn zero_driving_value_collapses_to_zero() {
        let result = ratio_request("0", "").resolve();
        assert_eq!(dimensions(&result), (Some(0), Some(0)));
        assert_eq!(result.error, None);
    }

    #[test]
    fn power_of_two_with_compatible_ratio() {
        let request = CalcRequest {
            width: "100",
            aspect: AspectField::Ratio { width: "8", height: "4" },
            step_mode: StepMode::PowerOfTwo,
            ..CalcRequest::new()
        };
        // 8:4 simplifies to 2:1; targetN = 50 brackets {32, 64} and the
        // width candidate 128 is nearer to 100 than 64.
        assert_eq!(dimensions(&request.resolve()), (Some(128), Some(64)));
    }
}

mod errors {
    use super::*;

    #[test]
    fn both_axes_blank() {
        let result = ratio_request("", "  ").resolve();
        assert_eq!(dimensions(&result), (None, None));
        assert_eq!(result.error.as_deref(), Some("Please enter at least one dimension."));
    }

    #[test]
    fn both_axes_blank_independent_mode() {
        let result = independent_request("", "").resolve();
        assert_eq!(dimensions(&result), (None, None));
        assert_eq!(result.error.as_deref(), Some("Please enter at least one dimension."));
    }

    #[test]
    fn negative_driving_value() {
        let result = ratio_request("-1", "").resolve();
        assert_eq!(dimensions(&result), (None, None));
        assert_eq!(
            result.error.as_deref(),
            Some("Input dimension must be a non-negative integer.")
        );
    }

    #[test]
    fn bad_aspect_component() {
        let request = CalcRequest {
            aspect: AspectField::Ratio { width: "2", height: "0" },
            ..ratio_request("111", "")
        };
        assert_eq!(
            request.resolve().error.as_deref(),
            Some("Aspect ratio components must be positive integers.")
        );
    }

    #[test]
    fn bad_step_value() {
        let request = CalcRequest { step_value: "-4", ..ratio_request("111", "") };
        assert_eq!(
            request.resolve().error.as_deref(),
            Some("Step value must be a positive integer.")
        );
    }

    #[test]
    fn incompatible_power_of_two_aspect_names_the_pair() {
        let request = CalcRequest {
            width: "50",
            aspect: AspectField::Ratio { width: "3", height: "5" },
            step_mode: StepMode::PowerOfTwo,
            ..CalcRequest::new()
        };
        let error = request.resolve().error.expect("must fail");
        assert!(error.contains("currently 3:5"), "unexpected message: {error}");
        assert!(error.contains("powers of two"));
    }

    #[test]
    fn driving_value_error_wins_over_aspect_error() {
        let request = CalcRequest {
            aspect: AspectField::Ratio { width: "0", height: "3" },
            ..ratio_request("abc", "")
        };
        assert_eq!(
            request.resolve().error.as_deref(),
            Some("Input dimension must be a non-negative integer.")
        );
    }
}

mod independent_mode {
    use super::*;

    #[test]
    fn axes_snap_separately() {
        let result = independent_request("111", "150").resolve();
        // 150/4 = 37.5 ties between 148 and 152; the tie keeps 148
        assert_eq!(dimensions(&result), (Some(112), Some(148)));
        assert_eq!(result.error, None);
    }

    #[test]
    fn blank_axis_stays_absent() {
        let result = independent_request("111", "").resolve();
        assert_eq!(dimensions(&result), (Some(112), None));
        assert_eq!(result.error, None);

        let result = independent_request("", "150").resolve();
        assert_eq!(dimensions(&result), (None, Some(148)));
    }

    #[test]
    fn partial_result_survives_a_field_error() {
        let result = independent_request("111", "abc").resolve();
        assert_eq!(dimensions(&result), (Some(112), None));
        assert_eq!(
            result.error.as_deref(),
            Some("Input height must be a non-negative integer.")
        );
    }

    #[test]
    fn field_errors_concatenate() {
        let result = independent_request("x", "y").resolve();
        assert_eq!(dimensions(&result), (None, None));
        assert_eq!(
            result.error.as_deref(),
            Some(
                "Input width must be a non-negative integer. \
                 Input height must be a non-negative integer."
            )
        );
    }

    #[test]
    fn step_error_comes_first_and_blocks_snapping() {
        let request = CalcRequest { step_value: "", ..independent_request("111", "y") };
        let result = request.resolve();
        // A blank step is an error here, unlike the aspect-coupled path.
        assert_eq!(dimensions(&result), (None, None));
        assert_eq!(
            result.error.as_deref(),
            Some(
                "Step value must be a positive integer. \
                 Input height must be a non-negative integer."
            )
        );
    }

    #[test]
    fn power_of_two_ignores_step_field() {
        let request = CalcRequest {
            width: "100",
            height: "33",
            step_mode: StepMode::PowerOfTwo,
            step_value: "garbage",
            ..CalcRequest::new()
        };
        // 100 → 128 (28 below vs 36 above); 33 → 32
        assert_eq!(dimensions(&request.resolve()), (Some(128), Some(32)));
    }

    #[test]
    fn zero_dimension_is_reported_not_absent() {
        let result = independent_request("0", "").resolve();
        assert_eq!(dimensions(&result), (Some(0), None));
    }
}

mod presets {
    use super::*;

    #[test]
    fn every_preset_resolves() {
        for preset in ASPECT_PRESETS {
            let request = CalcRequest {
                width: "1024",
                aspect: preset.field(),
                step_value: "4",
                ..CalcRequest::new()
            };
            let result = request.resolve();
            assert_eq!(result.error, None, "preset {} errored", preset.name);
            assert!(result.width.is_some() && result.height.is_some());
        }
    }

    #[test]
    fn cinematic_preset_simplifies_before_solving() {
        // 235:100 reduces to 47:20; step 1 keeps the driving axis on a
        // whole multiplier: 1024/47 = 21.8 → N = 22 → 1034×440.
        let request = CalcRequest {
            width: "1024",
            aspect: AspectField::Ratio { width: "235", height: "100" },
            step_value: "1",
            ..CalcRequest::new()
        };
        assert_eq!(dimensions(&request.resolve()), (Some(1034), Some(440)));
    }
}
