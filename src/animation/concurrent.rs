//! Provides the concurrent strategy: all axes move at once and arrive together.

use crate::animation::{advance, canonical_target, step_length, AxisPlan, Tuning};
use crate::euler::Axis;
use crate::orientation::Orientation;

/// Advances all three axes toward `target`, each scaled by its share of the
/// longest remaining distance, and reports completion.
///
/// Completion is the Euclidean norm of the per-axis gaps dropping to
/// `tuning.epsilon`; all three axes are then snapped to the target together.
///
/// # Examples
/// ```
/// use gimbal::animation::{tick_concurrent, Tuning};
/// use gimbal::orientation::Orientation;
///
/// let mut orientation = Orientation::default();
/// tick_concurrent(&mut orientation, [40.0, 20.0, 0.0], 100.0, 0.1, &Tuning::default());
/// assert_eq!(orientation.rotation, [10.0, 5.0, 0.0]);
/// ```
pub fn tick_concurrent(
    orientation: &mut Orientation,
    target: [f32; 3],
    rate_deg_per_sec: f32,
    delta_seconds: f32,
    tuning: &Tuning,
) -> bool {
    let target = canonical_target(orientation, target);

    if arrived(orientation, target, tuning) {
        orientation.rotation = target;
        return true;
    }

    let plans = Axis::ALL.map(|axis| {
        AxisPlan::new(orientation.rotation[axis.index()], target[axis.index()], tuning.direction)
    });
    let longest = plans.iter().map(|p| p.distance).fold(0.0_f32, f32::max);
    let step = step_length(rate_deg_per_sec, delta_seconds);

    for (axis, plan) in Axis::ALL.into_iter().zip(plans.iter()) {
        let share = if longest > 0.0 { plan.distance / longest } else { 0.0 };
        advance(orientation, axis, plan, step * share);
    }
    log::trace!("concurrent: {:?} (target {:?})", orientation.rotation, target);

    if arrived(orientation, target, tuning) {
        orientation.rotation = target;
        return true;
    }
    false
}

fn arrived(orientation: &Orientation, target: [f32; 3], tuning: &Tuning) -> bool {
    let norm = Axis::ALL
        .iter()
        .map(|axis| {
            let i = axis.index();
            AxisPlan::new(orientation.rotation[i], target[i], tuning.direction).gap
        })
        .map(|gap| gap * gap)
        .sum::<f32>()
        .sqrt();
    norm <= tuning.epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::AngleRange;
    use crate::euler::EulerMode;

    #[test]
    fn test_single_axis_takes_ten_ticks() {
        let mut o = Orientation::default();
        let tuning = Tuning::default();
        let mut ticks = 0;
        loop {
            ticks += 1;
            if tick_concurrent(&mut o, [0.0, 90.0, 0.0], 90.0, 0.1, &tuning) {
                break;
            }
            assert!(ticks < 100);
        }
        assert_eq!(ticks, 10);
        assert_eq!(o.rotation, [0.0, 90.0, 0.0]);
    }

    #[test]
    fn test_proportional_steps() {
        let mut o = Orientation::new(AngleRange::Unsigned);
        tick_concurrent(&mut o, [80.0, 40.0, 350.0], 80.0, 0.5, &Tuning::default());
        // 40 deg budget, X is longest; Z is 10 deg away going negative
        assert_eq!(o.rotation, [40.0, 20.0, 355.0]);
    }

    #[test]
    fn test_norm_within_epsilon_snaps_all_axes() {
        let mut o = Orientation::with_rotation([0.02, -0.02, 0.01], EulerMode::XYZ, AngleRange::Signed);
        assert!(tick_concurrent(&mut o, [0.0; 3], 0.0, 0.0, &Tuning::default()));
        assert_eq!(o.rotation, [0.0; 3]);
    }

    #[test]
    fn test_per_axis_gaps_alone_are_not_enough() {
        // each axis is within 0.05, the vector is not
        let mut o = Orientation::with_rotation([0.04, 0.04, 0.04], EulerMode::XYZ, AngleRange::Signed);
        assert!(!tick_concurrent(&mut o, [0.0; 3], 0.0, 0.0, &Tuning::default()));
        assert_eq!(o.rotation, [0.04, 0.04, 0.04]);
    }
}
