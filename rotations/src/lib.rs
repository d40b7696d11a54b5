pub mod euler_angles;
pub mod rotation_matrix;

use nalgebra::Vector3;

/// Trait defining rotation and transformation operations.
///
/// A rotation maps the axes of an old frame onto the axes of a new frame.
/// `rotate` moves a vector along with the frame, `transform` re-expresses a
/// fixed vector given in the old frame in the components of the new frame.
pub trait RotationTrait {
    /// Rotates a vector by the rotation.
    ///
    /// # Arguments
    ///
    /// * `v` - The vector to be rotated.
    ///
    /// # Returns
    ///
    /// The rotated vector.
    fn rotate(&self, v: &Vector3<f64>) -> Vector3<f64>;

    /// Transforms a vector from the old frame into the new frame.
    ///
    /// # Arguments
    ///
    /// * `v` - The vector to be transformed.
    ///
    /// # Returns
    ///
    /// The transformed vector.
    fn transform(&self, v: &Vector3<f64>) -> Vector3<f64>;

    fn inv(&self) -> Self;

    fn identity() -> Self;
}
