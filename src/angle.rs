//! Provides angle canonicalization for Euler rotations in degrees.
//!
//! Every orientation keeps its three angles inside one [`AngleRange`].
//! [`normalize`] restores that after a small mutation with a single
//! add/subtract of 360; [`wrap`] is the full modulo reduction used when a
//! displacement may exceed one range width.
//!
//! # Examples
//! ```
//! use gimbal::angle::{normalize, AngleRange};
//!
//! assert_eq!(normalize(370.0, AngleRange::Unsigned), 10.0);
//! assert_eq!(normalize(190.0, AngleRange::Signed), -170.0);
//! ```

use serde::{Deserialize, Serialize};

/// Width of one full turn in degrees.
pub const FULL_TURN: f32 = 360.0;

/// The canonical half-open range an orientation's angles live in.
///
/// # Examples
/// ```
/// use gimbal::angle::AngleRange;
///
/// assert!(AngleRange::Signed.contains(-180.0));
/// assert!(!AngleRange::Signed.contains(180.0));
/// assert!(AngleRange::Unsigned.contains(0.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleRange {
    /// `[0, 360)`
    Unsigned,
    /// `[-180, 180)`
    #[default]
    Signed,
}

impl AngleRange {
    /// Returns the inclusive lower bound.
    pub fn lower(self) -> f32 {
        match self {
            AngleRange::Unsigned => 0.0,
            AngleRange::Signed => -180.0,
        }
    }

    /// Returns the exclusive upper bound.
    pub fn upper(self) -> f32 {
        self.lower() + FULL_TURN
    }

    /// Checks whether `angle` already lies in this range.
    pub fn contains(self, angle: f32) -> bool {
        angle >= self.lower() && angle < self.upper()
    }

    /// Checks whether a single [`normalize`] step is enough for `angle`.
    ///
    /// # Examples
    /// ```
    /// use gimbal::angle::AngleRange;
    ///
    /// assert!(AngleRange::Unsigned.within_one_turn(-359.0));
    /// assert!(!AngleRange::Unsigned.within_one_turn(725.0));
    /// ```
    pub fn within_one_turn(self, angle: f32) -> bool {
        angle >= self.lower() - FULL_TURN && angle < self.upper() + FULL_TURN
    }
}

/// Brings `angle` into `range` with at most one correction step.
///
/// Callers guarantee the value moved by no more than one full turn since it
/// was last in range; use [`wrap`] otherwise.
///
/// # Examples
/// ```
/// use gimbal::angle::{normalize, AngleRange};
///
/// assert_eq!(normalize(360.0, AngleRange::Unsigned), 0.0);
/// assert_eq!(normalize(-5.0, AngleRange::Unsigned), 355.0);
/// assert_eq!(normalize(-180.0, AngleRange::Signed), -180.0);
/// assert_eq!(normalize(180.0, AngleRange::Signed), -180.0);
/// ```
pub fn normalize(angle: f32, range: AngleRange) -> f32 {
    if angle >= range.upper() {
        angle - FULL_TURN
    } else if angle < range.lower() {
        let lifted = angle + FULL_TURN;
        // a tiny undershoot can round up onto the open upper bound
        if lifted >= range.upper() {
            range.lower()
        } else {
            lifted
        }
    } else {
        angle
    }
}

/// Reduces any finite `angle` into `range`.
///
/// Non-finite input yields the range's zero angle.
///
/// # Examples
/// ```
/// use gimbal::angle::{wrap, AngleRange};
///
/// assert_eq!(wrap(1090.0, AngleRange::Unsigned), 10.0);
/// assert_eq!(wrap(-540.0, AngleRange::Signed), -180.0);
/// ```
pub fn wrap(angle: f32, range: AngleRange) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let reduced = (angle - range.lower()).rem_euclid(FULL_TURN) + range.lower();
    // rem_euclid may round up to exactly one full turn for tiny negatives
    normalize(reduced, range)
}

/// Returns the signed shortest arc from `from` to `to`, in `[-180, 180)`.
///
/// # Examples
/// ```
/// use gimbal::angle::shortest_delta;
///
/// assert_eq!(shortest_delta(170.0, -170.0), 20.0);
/// assert_eq!(shortest_delta(10.0, 350.0), -20.0);
/// ```
pub fn shortest_delta(from: f32, to: f32) -> f32 {
    wrap(to - from, AngleRange::Signed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGES: [AngleRange; 2] = [AngleRange::Unsigned, AngleRange::Signed];

    #[test]
    fn test_normalize_lands_in_range_and_is_idempotent() {
        for range in RANGES {
            let mut angle = range.lower() - FULL_TURN + 0.5;
            while angle < range.upper() + FULL_TURN {
                let once = normalize(angle, range);
                assert!(range.contains(once), "{angle} -> {once} for {range:?}");
                assert_eq!(normalize(once, range), once);
                angle += 7.25;
            }
        }
    }

    #[test]
    fn test_normalize_bounds() {
        assert_eq!(normalize(0.0, AngleRange::Unsigned), 0.0);
        assert_eq!(normalize(359.5, AngleRange::Unsigned), 359.5);
        assert_eq!(normalize(179.5, AngleRange::Signed), 179.5);
        assert_eq!(normalize(-180.5, AngleRange::Signed), 179.5);
    }

    #[test]
    fn test_normalize_tiny_undershoot_stays_below_upper_bound() {
        let once = normalize(-1e-6, AngleRange::Unsigned);
        assert_eq!(once, 0.0);
        assert_eq!(normalize(once, AngleRange::Unsigned), once);

        for range in RANGES {
            for undershoot in [1e-7, 1e-6, 1e-5] {
                let once = normalize(range.lower() - undershoot, range);
                assert!(range.contains(once), "{undershoot} below {range:?} -> {once}");
                assert_eq!(normalize(once, range), once);
            }
        }
    }

    #[test]
    fn test_normalize_is_single_step() {
        // Two turns out is the caller's problem, not ours
        assert_eq!(normalize(800.0, AngleRange::Unsigned), 440.0);
    }

    #[test]
    fn test_wrap_handles_many_turns() {
        assert_eq!(wrap(800.0, AngleRange::Unsigned), 80.0);
        assert_eq!(wrap(-800.0, AngleRange::Unsigned), 280.0);
        assert_eq!(wrap(900.0, AngleRange::Signed), -180.0);
        assert!(AngleRange::Unsigned.contains(wrap(-1e-6, AngleRange::Unsigned)));
        assert_eq!(wrap(f32::NAN, AngleRange::Signed), 0.0);
    }

    #[test]
    fn test_shortest_delta_crosses_seam() {
        assert_eq!(shortest_delta(350.0, 10.0), 20.0);
        assert_eq!(shortest_delta(-170.0, 170.0), -20.0);
        assert_eq!(shortest_delta(0.0, 90.0), 90.0);
        assert_eq!(shortest_delta(0.0, 180.0), -180.0);
    }
}
