//! Math utilities and types
//!
//! Provides the fundamental math types for 2D rendering and gameplay code.
//! World transforms are homogeneous 3x3 matrices.

pub use nalgebra::{Matrix3, Rotation2, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3x3 homogeneous matrix type
pub type Mat3 = Matrix3<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Convert degrees to radians
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * constants::DEG_TO_RAD
}

/// Convert radians to degrees
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * constants::RAD_TO_DEG
}

/// Build a homogeneous 2D matrix from a position, rotation and scale.
///
/// The composition order is translate, then rotate, then scale, applied as
/// successive transformations of the identity matrix. This order is a hard
/// contract of the transform system: reordering changes the result for any
/// combination of rotation and non-uniform scale.
pub fn trs_matrix(position: Vec2, rotation_deg: f32, scale: Vec2) -> Mat3 {
    Mat3::new_translation(&position)
        * Rotation2::new(deg_to_rad(rotation_deg)).to_homogeneous()
        * Mat3::new_nonuniform_scaling(&scale)
}

/// Axis-aligned integer rectangle addressing a sub-region of a texture.
///
/// A negative extent selects the region mirrored along that axis, which is
/// how reversed sprite-sheet frames are sampled without duplicating pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceRect {
    /// Left edge in pixels
    pub x: i32,
    /// Top edge in pixels
    pub y: i32,
    /// Horizontal extent in pixels, negative when mirrored
    pub w: i32,
    /// Vertical extent in pixels, negative when mirrored
    pub h: i32,
}

impl SourceRect {
    /// Create a rectangle from its origin and extents
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}
