use crate::models::vector::Vector;

/// Heading from `center` towards `pointer`, in radians.
/// Zero points right; positive angles turn clockwise on screen.
pub fn heading(center: Vector, pointer: Vector) -> f64 {
    (pointer - center).angle()
}
