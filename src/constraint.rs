//! Dimension snapping for step constraints.
//!
//! Computes the admissible dimension nearest to (or below/above) a requested
//! value, either per axis or with both axes coupled through a fixed aspect
//! ratio. Pure arithmetic — no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use texsnap::{AspectRatio, DrivingAxis, Rounding, StepConstraint};
//!
//! // One axis on its own:
//! assert_eq!(StepConstraint::DivisibleBy(4).snap(111, Rounding::Nearest), 112);
//!
//! // Both axes locked to 2:3, anchored on the width:
//! let size = StepConstraint::DivisibleBy(4)
//!     .snap_coupled(111, DrivingAxis::Width, AspectRatio::new(2, 3), Rounding::Nearest)
//!     .unwrap();
//! assert_eq!((size.width, size.height), (112, 168));
//! ```

// Inherent f64 methods take over on std; the trait supplies them for no_std.
#[allow(unused_imports)]
use num_traits::Float;

use crate::arith::{gcd, is_power_of_two, lcm};

/// Quantization rule an output dimension must satisfy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StepConstraint {
    /// Dimension must be a multiple of the given step.
    DivisibleBy(u32),
    /// Dimension must be a power of two.
    PowerOfTwo,
}

/// Which admissible candidate to choose when the input falls between two.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Closest candidate. Ties resolve toward the lower one.
    #[default]
    Nearest,
    /// Largest admissible value not above the input.
    Down,
    /// Smallest admissible value not below the input.
    Up,
}

/// Axis whose entered value anchors an aspect-coupled calculation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrivingAxis {
    /// The width field anchors; height is derived.
    #[default]
    Width,
    /// The height field anchors; width is derived.
    Height,
}

/// Aspect ratio as a pair of positive integers.
///
/// The solvers operate on the *simplified* pair exclusively; run
/// [`simplify`](Self::simplify) (or the `form` module's validation, which
/// does it for you) before coupling dimensions through a ratio.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    /// Width component.
    pub width: u32,
    /// Height component.
    pub height: u32,
}

impl AspectRatio {
    /// Create a new aspect ratio.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reduce to lowest terms: `235:100` becomes `47:20`.
    pub fn simplify(self) -> Self {
        let g = gcd(self.width as i64, self.height as i64) as u32;
        if g == 0 {
            return self;
        }
        Self {
            width: self.width / g,
            height: self.height / g,
        }
    }

    /// Whether both components are powers of two.
    ///
    /// Power-of-two stepping with a fixed aspect ratio is only solvable when
    /// this holds for the simplified pair.
    pub fn is_power_of_two_pair(self) -> bool {
        is_power_of_two(self.width as i64) && is_power_of_two(self.height as i64)
    }

    /// Component along the given axis.
    fn component(self, axis: DrivingAxis) -> u32 {
        match axis {
            DrivingAxis::Width => self.width,
            DrivingAxis::Height => self.height,
        }
    }
}

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl StepConstraint {
    /// Snap a single dimension to the nearest admissible value.
    ///
    /// Zero stays zero — no constraint applies to an empty dimension.
    /// `DivisibleBy(0)` is invalid and echoes the input unchanged; callers
    /// validate steps before reaching this layer.
    pub fn snap(self, value: u32, rounding: Rounding) -> u32 {
        if value == 0 {
            return 0;
        }
        let target = value as f64;
        let (low, high) = match self {
            Self::DivisibleBy(0) => return value,
            Self::DivisibleBy(step) => {
                let step = step as f64;
                let m = target / step;
                // Rounding down to 0 is admissible; rounding up is not.
                lift_bounds(m.floor() * step, m.ceil() * step, 0.0, step)
            }
            Self::PowerOfTwo => {
                let p = target.log2();
                lift_bounds(p.floor().exp2(), p.ceil().exp2(), 1.0, 1.0)
            }
        };
        let chosen = match rounding {
            Rounding::Down => low,
            Rounding::Up => high,
            Rounding::Nearest => {
                if low_wins(target, low, high) {
                    low
                } else {
                    high
                }
            }
        };
        chosen.round() as u32
    }

    /// Snap one driving dimension and derive the other through a fixed
    /// aspect ratio, keeping both axes admissible.
    ///
    /// Dimensions are modelled as `width = n × aspect.width`,
    /// `height = n × aspect.height` for an integer multiplier `n`; the
    /// search runs over `n` alone, then both axes scale back out.
    ///
    /// `aspect` must already be simplified — the multiplier arithmetic
    /// assumes coprime components. Returns `None` for degenerate
    /// parameters: a zero aspect component, or a zero step in divisible-by
    /// mode.
    pub fn snap_coupled(
        self,
        driving: u32,
        axis: DrivingAxis,
        aspect: AspectRatio,
        rounding: Rounding,
    ) -> Option<Size> {
        if aspect.width == 0 || aspect.height == 0 {
            return None;
        }
        let target_n = if driving == 0 {
            0.0
        } else {
            driving as f64 / aspect.component(axis) as f64
        };

        let (n_low, n_high) = match self {
            Self::DivisibleBy(0) => return None,
            Self::DivisibleBy(step) => {
                // n·aspect.width ≡ 0 (mod step) iff n is a multiple of
                // step / gcd(aspect.width, step); same for height. Both must
                // hold, so n steps by the lcm of the two terms.
                let common_w = gcd(aspect.width as i64, step as i64);
                let common_h = gcd(aspect.height as i64, step as i64);
                if common_w == 0 || common_h == 0 {
                    // Not reachable for positive step and aspect components.
                    return Some(Size::new(0, 0));
                }
                let l = lcm(step as i64 / common_w, step as i64 / common_h) as f64;
                if l == 0.0 {
                    if driving > 0 {
                        return Some(Size::new(0, 0));
                    }
                    (0.0, 0.0)
                } else {
                    let m = target_n / l;
                    if driving > 0 {
                        lift_bounds(m.floor() * l, m.ceil() * l, 0.0, l)
                    } else {
                        (m.floor() * l, m.ceil() * l)
                    }
                }
            }
            Self::PowerOfTwo => {
                // Components are powers of two here, so n itself must be one
                // for both scaled axes to stay powers of two.
                if target_n <= 0.0 {
                    (0.0, 0.0)
                } else {
                    let p = target_n.log2();
                    lift_bounds(p.floor().exp2(), p.ceil().exp2(), 1.0, 1.0)
                }
            }
        };

        let chosen_n = match rounding {
            Rounding::Down => n_low,
            Rounding::Up => n_high,
            Rounding::Nearest => {
                // Distance is judged on the driving axis, where the user
                // typed the value. Ties keep the lower candidate.
                let scale = aspect.component(axis) as f64;
                if low_wins(driving as f64, n_low * scale, n_high * scale) {
                    n_low
                } else {
                    n_high
                }
            }
        };

        Some(Size::new(
            (chosen_n * aspect.width as f64).round() as u32,
            (chosen_n * aspect.height as f64).round() as u32,
        ))
    }
}

// ============================================================================
// Internal arithmetic
// ============================================================================

/// Candidate bounds for a positive input must never collapse to a sole
/// non-positive value: raise each bound to the smallest admissible value for
/// its side of the bracket.
fn lift_bounds(low: f64, high: f64, min_low: f64, min_high: f64) -> (f64, f64) {
    (low.max(min_low), high.max(min_high))
}

/// Whether `low` is at least as close to `target` as `high` is.
/// Equal distances keep the lower candidate.
fn low_wins(target: f64, low: f64, high: f64) -> bool {
    (target - low).abs() <= (target - high).abs()
}
