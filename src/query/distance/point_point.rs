use na::{Matrix3, Point3, RealField, SMatrix, SVector};

/// Squared distance between two points.
///
/// The result is bitwise symmetric: `point_point_distance2(a, b) == point_point_distance2(b, a)`.
#[inline]
pub fn point_point_distance2<T: RealField + Copy>(a: &Point3<T>, b: &Point3<T>) -> T {
    (a - b).norm_squared()
}

/// Gradient of [`point_point_distance2`] with respect to `[a, b]`.
///
/// Swapping the arguments swaps the two 3-blocks of the result.
#[inline]
pub fn point_point_distance2_gradient<T: RealField + Copy>(
    a: &Point3<T>,
    b: &Point3<T>,
) -> SVector<T, 6> {
    let two = T::one() + T::one();
    let d = (a - b) * two;
    let mut grad = SVector::<T, 6>::zeros();
    grad.fixed_rows_mut::<3>(0).copy_from(&d);
    grad.fixed_rows_mut::<3>(3).copy_from(&-d);
    grad
}

/// Hessian of [`point_point_distance2`] with respect to `[a, b]`.
///
/// This is the constant matrix `2 [[I, -I], [-I, I]]`.
#[inline]
pub fn point_point_distance2_hessian<T: RealField + Copy>(
    _a: &Point3<T>,
    _b: &Point3<T>,
) -> SMatrix<T, 6, 6> {
    let two = T::one() + T::one();
    let diag = Matrix3::from_diagonal_element(two);
    let mut hessian = SMatrix::<T, 6, 6>::zeros();
    hessian.fixed_view_mut::<3, 3>(0, 0).copy_from(&diag);
    hessian.fixed_view_mut::<3, 3>(3, 3).copy_from(&diag);
    hessian.fixed_view_mut::<3, 3>(0, 3).copy_from(&-diag);
    hessian.fixed_view_mut::<3, 3>(3, 0).copy_from(&-diag);
    hessian
}
