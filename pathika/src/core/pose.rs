//! Head pose and the corrective rig offset.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A tracked head pose in tracking-space coordinates.
///
/// Sampled once per frame from the host's head tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadPose {
    /// Head position in meters (+Y up).
    pub position: Vec3,
    /// Head orientation.
    pub rotation: Quat,
}

impl Default for HeadPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl HeadPose {
    /// Create a new head pose.
    #[inline]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Head pose looking level, rotated `yaw_degrees` about the vertical axis.
    #[inline]
    pub fn from_position_yaw(position: Vec3, yaw_degrees: f32) -> Self {
        Self::new(position, Quat::from_rotation_y(yaw_degrees.to_radians()))
    }

    /// Heading in degrees: the rotation about +Y that takes +Z onto the
    /// ground-plane projection of the view direction.
    #[inline]
    pub fn yaw_degrees(&self) -> f32 {
        let forward = self.rotation * Vec3::Z;
        forward.x.atan2(forward.z).to_degrees()
    }

    /// Are all components finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite()
    }
}

/// Corrective transform between the tracked (real) and rendered (virtual) pose.
///
/// `virtual = R_y(yaw) * real + translation`. Applied as the local transform
/// of the parent node of the tracked camera, the rendered camera ends up at
/// the virtual pose while the tracker keeps reporting the real one. The
/// translation never has a height component: pitch, roll and head height
/// pass through unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RigOffset {
    /// Ground-plane translation in meters.
    pub translation: Vec3,
    /// Yaw about the vertical axis in degrees.
    pub yaw_degrees: f32,
}

impl Default for RigOffset {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigOffset {
    /// The no-op offset.
    #[inline]
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            yaw_degrees: 0.0,
        }
    }

    /// Offset that maps `real` onto `virtual_position` with the given yaw.
    pub fn aligning(real: &HeadPose, virtual_position: Vec3, yaw_degrees: f32) -> Self {
        let rotated = Quat::from_rotation_y(yaw_degrees.to_radians()) * real.position;
        let mut translation = virtual_position - rotated;
        translation.y = 0.0;
        Self {
            translation,
            yaw_degrees,
        }
    }

    /// Rotation part of the offset.
    #[inline]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw_degrees.to_radians())
    }

    /// Map a real head pose to its virtual counterpart.
    #[inline]
    pub fn apply(&self, real: &HeadPose) -> HeadPose {
        let rotation = self.rotation();
        HeadPose {
            position: rotation * real.position + self.translation,
            rotation: rotation * real.rotation,
        }
    }

    /// Local (rotation, translation) for the parent node of the tracked camera.
    #[inline]
    pub fn parent_transform(&self) -> (Quat, Vec3) {
        (self.rotation(), self.translation)
    }

    /// The offset that undoes this one.
    pub fn inverse(&self) -> Self {
        let inverse_rotation = Quat::from_rotation_y(-self.yaw_degrees.to_radians());
        Self {
            translation: -(inverse_rotation * self.translation),
            yaw_degrees: -self.yaw_degrees,
        }
    }
}
