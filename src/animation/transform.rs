use glam::{Mat4, Quat, Vec3};

/// A spatial pose: translation, per-axis scale and a rotation angle.
///
/// `rotation` is an angle in radians about +Z (the quad lies in the XY plane).
/// Plain value type; clips copy poses rather than sharing them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub scale: Vec3,
    pub rotation: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        scale: Vec3::ONE,
        rotation: 0.0,
    };

    #[must_use]
    pub fn new(translation: Vec3, scale: Vec3, rotation: f32) -> Self {
        Self {
            translation,
            scale,
            rotation,
        }
    }

    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Matrix uploaded for drawing.
    ///
    /// Only `translation` is applied; `scale` and `rotation` are not part of
    /// this matrix. Use [`Transform::to_trs_matrix`] for the full composition.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
    }

    /// Full `T * Rz * S` composition.
    #[must_use]
    pub fn to_trs_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_rotation_z(self.rotation),
            self.translation,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
