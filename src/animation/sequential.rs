//! Provides the sequential strategy: one axis at a time, in priority order.
//!
//! Euler composition is order dependent, so finishing one axis before the
//! next starts keeps every intermediate pose on a predictable path.

use crate::animation::{advance, canonical_target, step_length, AxisPlan, Tuning};
use crate::orientation::Orientation;

/// Advances the first unfinished axis toward `target` and reports completion.
///
/// Axes already within `tuning.epsilon` are snapped to the target. Returns
/// `true` once all three are snapped, including on the tick where the last
/// one arrives.
///
/// # Examples
/// ```
/// use gimbal::animation::{tick_sequential, Tuning};
/// use gimbal::orientation::Orientation;
///
/// let mut orientation = Orientation::default();
/// let done = tick_sequential(&mut orientation, [30.0, 30.0, 0.0], 100.0, 0.1, &Tuning::default());
/// assert!(!done);
/// // X moves first in XYZ mode; Y waits.
/// assert_eq!(orientation.rotation, [10.0, 0.0, 0.0]);
/// ```
pub fn tick_sequential(
    orientation: &mut Orientation,
    target: [f32; 3],
    rate_deg_per_sec: f32,
    delta_seconds: f32,
    tuning: &Tuning,
) -> bool {
    let target = canonical_target(orientation, target);
    let step = step_length(rate_deg_per_sec, delta_seconds);
    let mut advanced = false;

    for axis in tuning.priority.order(orientation.euler_mode) {
        let i = axis.index();
        let plan = AxisPlan::new(orientation.rotation[i], target[i], tuning.direction);

        if plan.gap <= tuning.epsilon {
            orientation.rotation[i] = plan.target;
            continue;
        }

        if advanced {
            return false;
        }
        advanced = true;

        let now = advance(orientation, axis, &plan, step);
        log::trace!("sequential: {} -> {} (target {})", axis, now, plan.target);

        let remaining = AxisPlan::new(now, plan.target, tuning.direction);
        if remaining.gap > tuning.epsilon {
            return false;
        }
        orientation.rotation[i] = plan.target;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::AngleRange;
    use crate::animation::PriorityOrder;
    use crate::euler::{Axis, EulerMode};

    fn run(orientation: &mut Orientation, target: [f32; 3], rate: f32, dt: f32, tuning: &Tuning) -> usize {
        for tick in 1..=10_000 {
            if tick_sequential(orientation, target, rate, dt, tuning) {
                return tick;
            }
        }
        panic!("sequential animation did not converge");
    }

    #[test]
    fn test_single_axis_takes_ten_ticks() {
        let mut o = Orientation::default();
        let ticks = run(&mut o, [0.0, 90.0, 0.0], 90.0, 0.1, &Tuning::default());
        assert_eq!(ticks, 10);
        assert_eq!(o.rotation, [0.0, 90.0, 0.0]);
    }

    #[test]
    fn test_axes_finish_in_named_order() {
        let mut o = Orientation::default();
        o.euler_mode = EulerMode::ZXY;
        let tuning = Tuning::default();
        let target = [20.0, 20.0, 20.0];

        let mut finished = Vec::new();
        for _ in 0..100 {
            let done = tick_sequential(&mut o, target, 100.0, 0.1, &tuning);
            for axis in Axis::ALL {
                if o.angle(axis) == target[axis.index()] && !finished.contains(&axis) {
                    finished.push(axis);
                }
            }
            if done {
                break;
            }
        }
        assert_eq!(finished, vec![Axis::Z, Axis::X, Axis::Y]);
    }

    #[test]
    fn test_reversed_priority_starts_with_last_named_axis() {
        let mut o = Orientation::default();
        let tuning = Tuning {
            priority: PriorityOrder::Reversed,
            ..Tuning::default()
        };
        tick_sequential(&mut o, [30.0, 30.0, 30.0], 100.0, 0.1, &tuning);
        assert_eq!(o.rotation, [0.0, 0.0, 10.0]);
    }

    #[test]
    fn test_already_at_target_is_done_immediately() {
        let mut o = Orientation::with_rotation([10.0, 20.0, 30.0], EulerMode::XYZ, AngleRange::Signed);
        assert!(tick_sequential(&mut o, [10.0, 20.0, 30.02], 0.0, 0.0, &Tuning::default()));
        assert_eq!(o.rotation, [10.0, 20.0, 30.02]);
    }

    #[test]
    fn test_zero_rate_never_moves() {
        let mut o = Orientation::default();
        for _ in 0..5 {
            assert!(!tick_sequential(&mut o, [45.0, 0.0, 0.0], 0.0, 0.1, &Tuning::default()));
        }
        assert_eq!(o.rotation, [0.0; 3]);
    }

    #[test]
    fn test_huge_step_is_clamped_to_target() {
        let mut o = Orientation::new(AngleRange::Unsigned);
        assert!(!tick_sequential(&mut o, [350.0, 10.0, 0.0], 1.0e6, 1.0, &Tuning::default()));
        assert_eq!(o.rotation, [350.0, 0.0, 0.0]);
        assert!(tick_sequential(&mut o, [350.0, 10.0, 0.0], 1.0e6, 1.0, &Tuning::default()));
        assert_eq!(o.rotation, [350.0, 10.0, 0.0]);
    }
}
