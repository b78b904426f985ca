use super::plane::{plane_distance2, plane_distance2_gradient, plane_distance2_hessian};
use super::point_edge::{
    point_edge_distance2, point_edge_distance2_gradient, point_edge_distance2_hessian,
};
use super::scatter::{scatter_gradient, scatter_hessian};
use na::{Matrix3, Point3, RealField, SMatrix, SVector};

/// Squared distance between the lines supporting the edges `(ea0, ea1)` and `(eb0, eb1)`.
///
/// Parallel edges (including zero-length ones) have no unique common normal: the
/// distance from `ea0` to the line through `(eb0, eb1)` is returned instead.
#[inline]
pub fn edge_edge_distance2<T: RealField + Copy>(
    ea0: &Point3<T>,
    ea1: &Point3<T>,
    eb0: &Point3<T>,
    eb1: &Point3<T>,
) -> T {
    let (a, b) = (ea1 - ea0, eb1 - eb0);

    if a.cross(&b).norm_squared() == T::zero() {
        return point_edge_distance2(ea0, eb0, eb1);
    }

    plane_distance2(&(ea0 - eb0), &a, &b)
}

/// Gradient of [`edge_edge_distance2`] with respect to `[ea0, ea1, eb0, eb1]`.
#[inline]
pub fn edge_edge_distance2_gradient<T: RealField + Copy>(
    ea0: &Point3<T>,
    ea1: &Point3<T>,
    eb0: &Point3<T>,
    eb1: &Point3<T>,
) -> SVector<T, 12> {
    let (a, b) = (ea1 - ea0, eb1 - eb0);
    let mut grad = SVector::<T, 12>::zeros();

    if a.cross(&b).norm_squared() == T::zero() {
        let sub = point_edge_distance2_gradient(ea0, eb0, eb1);
        scatter_gradient(&sub, &[0, 2, 3], &mut grad);
        return grad;
    }

    let local = plane_distance2_gradient(&(ea0 - eb0), &a, &b);
    let g_r = local.fixed_rows::<3>(0).into_owned();
    let g_a = local.fixed_rows::<3>(3).into_owned();
    let g_b = local.fixed_rows::<3>(6).into_owned();

    grad.fixed_rows_mut::<3>(0).copy_from(&(g_r - g_a));
    grad.fixed_rows_mut::<3>(3).copy_from(&g_a);
    grad.fixed_rows_mut::<3>(6).copy_from(&(-g_r - g_b));
    grad.fixed_rows_mut::<3>(9).copy_from(&g_b);
    grad
}

/// Hessian of [`edge_edge_distance2`] with respect to `[ea0, ea1, eb0, eb1]`.
#[inline]
pub fn edge_edge_distance2_hessian<T: RealField + Copy>(
    ea0: &Point3<T>,
    ea1: &Point3<T>,
    eb0: &Point3<T>,
    eb1: &Point3<T>,
) -> SMatrix<T, 12, 12> {
    let (a, b) = (ea1 - ea0, eb1 - eb0);

    if a.cross(&b).norm_squared() == T::zero() {
        let sub = point_edge_distance2_hessian(ea0, eb0, eb1);
        let mut hessian = SMatrix::<T, 12, 12>::zeros();
        scatter_hessian(&sub, &[0, 2, 3], &mut hessian);
        return hessian;
    }

    let local = plane_distance2_hessian(&(ea0 - eb0), &a, &b);
    let jacobian = edge_edge_jacobian::<T>();
    jacobian.transpose() * local * jacobian
}

/// `∂(r, a, b) / ∂(ea0, ea1, eb0, eb1)` with `r = ea0 - eb0`, `a = ea1 - ea0`, `b = eb1 - eb0`.
fn edge_edge_jacobian<T: RealField + Copy>() -> SMatrix<T, 9, 12> {
    let id = Matrix3::<T>::identity();
    let mut jacobian = SMatrix::<T, 9, 12>::zeros();
    jacobian.fixed_view_mut::<3, 3>(0, 0).copy_from(&id);
    jacobian.fixed_view_mut::<3, 3>(0, 6).copy_from(&-id);
    jacobian.fixed_view_mut::<3, 3>(3, 0).copy_from(&-id);
    jacobian.fixed_view_mut::<3, 3>(3, 3).copy_from(&id);
    jacobian.fixed_view_mut::<3, 3>(6, 6).copy_from(&-id);
    jacobian.fixed_view_mut::<3, 3>(6, 9).copy_from(&id);
    jacobian
}
