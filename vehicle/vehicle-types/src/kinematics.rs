//! Kinematic value types: pose, twist, acceleration.
//!
//! Positions are in a local planar frame in meters; orientation is a unit
//! quaternion `[w, x, y, z]`.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3D pose in the local map frame.
///
/// # Example
///
/// ```
/// use vehicle_types::{Point3, Pose};
///
/// let pose = Pose::from_position(Point3::new(10.0, -3.0, 0.5));
/// assert!((pose.position.x - 10.0).abs() < 1e-12);
/// assert_eq!(pose.orientation, [1.0, 0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    /// Position in meters.
    pub position: Point3<f64>,
    /// Orientation as unit quaternion `[w, x, y, z]`.
    pub orientation: [f64; 4],
}

impl Pose {
    /// Creates a pose from position and orientation.
    #[must_use]
    pub const fn new(position: Point3<f64>, orientation: [f64; 4]) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Creates the identity pose (at origin, no rotation).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            position: Point3::origin(),
            orientation: [1.0, 0.0, 0.0, 0.0],
        }
    }

    /// Creates a pose at the given position with no rotation.
    #[must_use]
    pub const fn from_position(position: Point3<f64>) -> Self {
        Self {
            position,
            orientation: [1.0, 0.0, 0.0, 0.0],
        }
    }

    /// Returns the quaternion norm (should be ~1.0 for valid poses).
    #[must_use]
    pub fn quaternion_norm(&self) -> f64 {
        let [w, x, y, z] = self.orientation;
        w.mul_add(w, x.mul_add(x, y.mul_add(y, z * z))).sqrt()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

/// Linear and angular velocity in the body frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Twist {
    /// Linear velocity in m/s.
    pub linear: Vector3<f64>,
    /// Angular velocity in rad/s.
    pub angular: Vector3<f64>,
}

impl Twist {
    /// Creates a twist from linear and angular velocity.
    #[must_use]
    pub const fn new(linear: Vector3<f64>, angular: Vector3<f64>) -> Self {
        Self { linear, angular }
    }

    /// Returns the ground speed (norm of the linear component).
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.linear.norm()
    }
}

impl Default for Twist {
    fn default() -> Self {
        Self {
            linear: Vector3::zeros(),
            angular: Vector3::zeros(),
        }
    }
}

/// Linear and angular acceleration in the body frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Accel {
    /// Linear acceleration in m/s².
    pub linear: Vector3<f64>,
    /// Angular acceleration in rad/s².
    pub angular: Vector3<f64>,
}

impl Accel {
    /// Creates an acceleration from linear and angular components.
    #[must_use]
    pub const fn new(linear: Vector3<f64>, angular: Vector3<f64>) -> Self {
        Self { linear, angular }
    }
}

impl Default for Accel {
    fn default() -> Self {
        Self {
            linear: Vector3::zeros(),
            angular: Vector3::zeros(),
        }
    }
}
