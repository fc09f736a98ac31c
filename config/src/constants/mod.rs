//! # Configuration Constants
//!
//! Centralized constants for the polykit filter pipeline. Geometry
//! tolerances and sweep-parameter limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Sweep**: Angular resolution limits and defaults

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// SWEEP CONSTANTS
// =============================================================================

/// Minimum number of angular steps for a sweep operation.
///
/// Sweep filters clamp a non-positive caller-supplied resolution up to this
/// value instead of failing, consistent with the toolkit-wide clamp policy
/// for bounded numeric parameters.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_RESOLUTION;
///
/// let requested: u32 = 0;
/// assert_eq!(requested.max(MIN_RESOLUTION), 1);
/// ```
pub const MIN_RESOLUTION: u32 = 1;

/// Default number of angular steps for a sweep operation.
///
/// Matches the rotational extrusion filter's construction default of twelve
/// intermediate steps over the sweep angle.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_RESOLUTION, MIN_RESOLUTION};
///
/// assert!(DEFAULT_RESOLUTION >= MIN_RESOLUTION);
/// ```
pub const DEFAULT_RESOLUTION: u32 = 12;

/// Degrees in a full revolution.
///
/// A sweep whose angle is an exact multiple of this value, with no axial
/// translation and no radius change, closes on itself: the terminal ring
/// reuses the initial ring and no end caps are generated.
///
/// # Example
///
/// ```rust
/// use config::constants::FULL_TURN_DEGREES;
///
/// let angle: f64 = 720.0;
/// assert_eq!(angle % FULL_TURN_DEGREES, 0.0);
/// ```
pub const FULL_TURN_DEGREES: f64 = 360.0;

#[cfg(test)]
mod tests;
