//! World transform component

use std::any::Any;

use crate::foundation::math::{trs_matrix, Mat3, Vec2};
use crate::scene::component::Component;

/// Position, rotation and non-uniform scale of an entity, with the derived
/// world matrix.
///
/// The matrix is recomputed eagerly on every setter call, never lazily:
/// callers always observe an up-to-date matrix, at the cost of redundant
/// recomputation when several setters run back to back. Composition order
/// is translate, rotate, scale — see
/// [`trs_matrix`](crate::foundation::math::trs_matrix).
///
/// Inputs are not validated. Zero or negative scale produces a degenerate
/// or mirrored transform, which is allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    position: Vec2,
    rotation_deg: f32,
    scale: Vec2,
    matrix: Mat3,
}

impl Default for Transform {
    fn default() -> Self {
        let position = Vec2::zeros();
        let rotation_deg = 0.0;
        let scale = Vec2::new(1.0, 1.0);
        Self {
            position,
            rotation_deg,
            scale,
            matrix: trs_matrix(position, rotation_deg, scale),
        }
    }
}

impl Transform {
    /// Set the world position and recompute the matrix.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.update_matrix();
    }

    /// The world position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Set the rotation in degrees and recompute the matrix.
    pub fn set_rotation(&mut self, rotation_deg: f32) {
        self.rotation_deg = rotation_deg;
        self.update_matrix();
    }

    /// The rotation in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation_deg
    }

    /// Set the scale and recompute the matrix.
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
        self.update_matrix();
    }

    /// The scale factors
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// The cached world matrix
    pub fn matrix(&self) -> &Mat3 {
        &self.matrix
    }

    fn update_matrix(&mut self) {
        self.matrix = trs_matrix(self.position, self.rotation_deg, self.scale);
    }
}

impl Component for Transform {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point2;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_identity() {
        let transform = Transform::default();
        assert_eq!(*transform.matrix(), Mat3::identity());
        assert_eq!(transform.scale(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_matrix_maps_origin_to_position() {
        let mut transform = Transform::default();
        transform.set_position(Vec2::new(150.0, -40.0));

        let p = transform.matrix().transform_point(&Point2::origin());
        assert_relative_eq!(p, Point2::new(150.0, -40.0), epsilon = 1e-6);
    }

    #[test]
    fn test_matrix_scales_before_translating() {
        let mut transform = Transform::default();
        transform.set_position(Vec2::new(10.0, 0.0));
        transform.set_scale(Vec2::new(2.0, 4.0));

        let p = transform.matrix().transform_point(&Point2::new(3.0, 1.0));
        assert_relative_eq!(p, Point2::new(16.0, 4.0), epsilon = 1e-5);
    }

    #[test]
    fn test_each_setter_refreshes_matrix() {
        let mut transform = Transform::default();

        transform.set_rotation(90.0);
        let after_rotation = *transform.matrix();

        transform.set_scale(Vec2::new(2.0, 2.0));
        assert_ne!(*transform.matrix(), after_rotation);
        assert_eq!(transform.rotation(), 90.0);
    }

    #[test]
    fn test_negative_scale_accepted() {
        let mut transform = Transform::default();
        transform.set_scale(Vec2::new(-1.0, 1.0));

        let p = transform.matrix().transform_point(&Point2::new(5.0, 0.0));
        assert_relative_eq!(p, Point2::new(-5.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_convention() {
        let mut transform = Transform::default();
        transform.set_rotation(90.0);

        // Counter-clockwise in the standard mathematical sense.
        let p = transform.matrix().transform_point(&Point2::new(1.0, 0.0));
        assert_relative_eq!(p, Point2::new(0.0, 1.0), epsilon = 1e-6);
    }
}
