use super::point_point::{
    point_point_distance2, point_point_distance2_gradient, point_point_distance2_hessian,
};
use super::scatter::{scatter_gradient, scatter_hessian};
use na::{Matrix3, Point3, RealField, SMatrix, SVector, Vector3};

// With `r = p - e0` and `e = e1 - e0`, the squared distance from `p` to the
// line is `f(r, e) = r·r - (r·e)² / (e·e)`. Derivatives are first taken in
// `(r, e)` then pulled back through the constant linear map to `[p, e0, e1]`.

/// Squared distance between the point `p` and the line supporting the edge `(e0, e1)`.
///
/// A zero-length edge (`e0 == e1`) reduces exactly to `point_point_distance2(p, e0)`.
#[inline]
pub fn point_edge_distance2<T: RealField + Copy>(
    p: &Point3<T>,
    e0: &Point3<T>,
    e1: &Point3<T>,
) -> T {
    let r = p - e0;
    let e = e1 - e0;
    let q = e.norm_squared();

    if q == T::zero() {
        return point_point_distance2(p, e0);
    }

    let s = r.dot(&e);
    r.norm_squared() - s * s / q
}

/// Gradient of [`point_edge_distance2`] with respect to `[p, e0, e1]`.
///
/// For a zero-length edge the `e1` block is zero and the `[p, e0]` blocks are the
/// point-point gradient.
#[inline]
pub fn point_edge_distance2_gradient<T: RealField + Copy>(
    p: &Point3<T>,
    e0: &Point3<T>,
    e1: &Point3<T>,
) -> SVector<T, 9> {
    let r = p - e0;
    let e = e1 - e0;
    let q = e.norm_squared();
    let mut grad = SVector::<T, 9>::zeros();

    if q == T::zero() {
        scatter_gradient(&point_point_distance2_gradient(p, e0), &[0, 1], &mut grad);
        return grad;
    }

    let two = T::one() + T::one();
    let s = r.dot(&e);
    let g_r = (r - e * (s / q)) * two;
    let g_e = (e * (s / q) - r) * (two * s / q);

    grad.fixed_rows_mut::<3>(0).copy_from(&g_r);
    grad.fixed_rows_mut::<3>(3).copy_from(&(-g_r - g_e));
    grad.fixed_rows_mut::<3>(6).copy_from(&g_e);
    grad
}

/// Hessian of [`point_edge_distance2`] with respect to `[p, e0, e1]`.
///
/// For a zero-length edge the rows and columns of `e1` are zero and the `[p, e0]`
/// blocks are the point-point Hessian.
#[inline]
pub fn point_edge_distance2_hessian<T: RealField + Copy>(
    p: &Point3<T>,
    e0: &Point3<T>,
    e1: &Point3<T>,
) -> SMatrix<T, 9, 9> {
    let r = p - e0;
    let e = e1 - e0;
    let q = e.norm_squared();

    if q == T::zero() {
        let mut hessian = SMatrix::<T, 9, 9>::zeros();
        scatter_hessian(&point_point_distance2_hessian(p, e0), &[0, 1], &mut hessian);
        return hessian;
    }

    let local = line_distance2_hessian(&r, &e, q);
    let jacobian = line_jacobian::<T>();
    jacobian.transpose() * local * jacobian
}

/// Hessian of `f(r, e)` in the local variables `[r, e]`.
fn line_distance2_hessian<T: RealField + Copy>(
    r: &Vector3<T>,
    e: &Vector3<T>,
    q: T,
) -> SMatrix<T, 6, 6> {
    let two = T::one() + T::one();
    let four = two * two;
    let eight = four * two;
    let s = r.dot(e);
    let q2 = q * q;
    let q3 = q2 * q;
    let id = Matrix3::identity();

    let ee = e * e.transpose();
    let er = e * r.transpose();
    let re = r * e.transpose();
    let rr = r * r.transpose();

    let h_rr = id * two - ee * (two / q);
    let h_re = (er + id * s) * (-two / q) + ee * (four * s / q2);
    let h_ee = rr * (-two / q) + (re + er) * (four * s / q2) + id * (two * s * s / q2)
        - ee * (eight * s * s / q3);

    let mut hessian = SMatrix::<T, 6, 6>::zeros();
    hessian.fixed_view_mut::<3, 3>(0, 0).copy_from(&h_rr);
    hessian.fixed_view_mut::<3, 3>(0, 3).copy_from(&h_re);
    hessian.fixed_view_mut::<3, 3>(3, 0).copy_from(&h_re.transpose());
    hessian.fixed_view_mut::<3, 3>(3, 3).copy_from(&h_ee);
    hessian
}

/// `∂(r, e) / ∂(p, e0, e1)`.
fn line_jacobian<T: RealField + Copy>() -> SMatrix<T, 6, 9> {
    let id = Matrix3::<T>::identity();
    let mut jacobian = SMatrix::<T, 6, 9>::zeros();
    jacobian.fixed_view_mut::<3, 3>(0, 0).copy_from(&id);
    jacobian.fixed_view_mut::<3, 3>(0, 3).copy_from(&-id);
    jacobian.fixed_view_mut::<3, 3>(3, 3).copy_from(&-id);
    jacobian.fixed_view_mut::<3, 3>(3, 6).copy_from(&id);
    jacobian
}
