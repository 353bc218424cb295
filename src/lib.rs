//! Provides the orientation and animation engine behind the Euler rotation demo.
//!
//! A gimbal is three nested rotation rings and a pointing arrow. The user
//! turns it with three Euler angles under one of six axis orders, or animates
//! it toward a target orientation. This crate owns the math; drawing, widgets
//! and the event loop belong to the host application, which reads a
//! [`pose::GimbalPose`] each frame.
//!
//! - [`angle`] keeps angles in a canonical range
//! - [`euler`] resolves the six Euler orders and builds rotation matrices
//! - [`orientation`] is the per-gimbal state
//! - [`animation`] holds the sequential and concurrent strategies and the
//!   [`Animator`] state machine
//! - [`controls`], [`scene`] and [`pose`] connect input, sessions and the
//!   renderer
//!
//! # Examples
//! ```
//! use gimbal::{Animator, Orientation, Strategy, Tuning};
//!
//! let mut orientation = Orientation::default();
//! let mut animator = Animator::new(Strategy::Concurrent, Tuning::default());
//! animator.play([170.0, 0.0, 0.0], 90.0).unwrap();
//! for _ in 0..200 {
//!     if animator.tick(&mut orientation, 1.0 / 60.0) {
//!         break;
//!     }
//! }
//! assert_eq!(orientation.rotation, [170.0, 0.0, 0.0]);
//! ```

pub mod angle;
pub mod animation;
pub mod controls;
pub mod error;
pub mod euler;
pub mod orientation;
pub mod pose;
pub mod scene;

pub use angle::AngleRange;
pub use animation::{Animator, DirectionPolicy, PriorityOrder, Strategy, Tuning};
pub use error::{GimbalError, Result};
pub use euler::{Axis, EulerMode};
pub use orientation::{Gimbal, Orientation};
