use super::plane::{plane_distance2, plane_distance2_gradient, plane_distance2_hessian};
use super::point_edge::{
    point_edge_distance2, point_edge_distance2_gradient, point_edge_distance2_hessian,
};
use super::scatter::{scatter_gradient, scatter_hessian};
use na::{Matrix3, Point3, RealField, SMatrix, SVector};

/// Squared distance between the point `p` and the plane supporting the triangle `(t0, t1, t2)`.
///
/// A triangle with zero area has no supporting plane: the distance to the line
/// through its longest edge is returned instead (which in turn reduces to a
/// point-point distance if the triangle collapsed to a single point).
#[inline]
pub fn point_triangle_distance2<T: RealField + Copy>(
    p: &Point3<T>,
    t0: &Point3<T>,
    t1: &Point3<T>,
    t2: &Point3<T>,
) -> T {
    let (a, b) = (t1 - t0, t2 - t0);

    if a.cross(&b).norm_squared() == T::zero() {
        let [i, j] = longest_edge(t0, t1, t2);
        let t = [t0, t1, t2];
        return point_edge_distance2(p, t[i], t[j]);
    }

    plane_distance2(&(p - t0), &a, &b)
}

/// Gradient of [`point_triangle_distance2`] with respect to `[p, t0, t1, t2]`.
#[inline]
pub fn point_triangle_distance2_gradient<T: RealField + Copy>(
    p: &Point3<T>,
    t0: &Point3<T>,
    t1: &Point3<T>,
    t2: &Point3<T>,
) -> SVector<T, 12> {
    let (a, b) = (t1 - t0, t2 - t0);
    let mut grad = SVector::<T, 12>::zeros();

    if a.cross(&b).norm_squared() == T::zero() {
        let [i, j] = longest_edge(t0, t1, t2);
        let t = [t0, t1, t2];
        let sub = point_edge_distance2_gradient(p, t[i], t[j]);
        scatter_gradient(&sub, &[0, i + 1, j + 1], &mut grad);
        return grad;
    }

    let local = plane_distance2_gradient(&(p - t0), &a, &b);
    let (g_r, g_a, g_b) = (
        local.fixed_rows::<3>(0).into_owned(),
        local.fixed_rows::<3>(3).into_owned(),
        local.fixed_rows::<3>(6).into_owned(),
    );

    grad.fixed_rows_mut::<3>(0).copy_from(&g_r);
    grad.fixed_rows_mut::<3>(3).copy_from(&(-g_r - g_a - g_b));
    grad.fixed_rows_mut::<3>(6).copy_from(&g_a);
    grad.fixed_rows_mut::<3>(9).copy_from(&g_b);
    grad
}

/// Hessian of [`point_triangle_distance2`] with respect to `[p, t0, t1, t2]`.
#[inline]
pub fn point_triangle_distance2_hessian<T: RealField + Copy>(
    p: &Point3<T>,
    t0: &Point3<T>,
    t1: &Point3<T>,
    t2: &Point3<T>,
) -> SMatrix<T, 12, 12> {
    let (a, b) = (t1 - t0, t2 - t0);

    if a.cross(&b).norm_squared() == T::zero() {
        let [i, j] = longest_edge(t0, t1, t2);
        let t = [t0, t1, t2];
        let sub = point_edge_distance2_hessian(p, t[i], t[j]);
        let mut hessian = SMatrix::<T, 12, 12>::zeros();
        scatter_hessian(&sub, &[0, i + 1, j + 1], &mut hessian);
        return hessian;
    }

    let local = plane_distance2_hessian(&(p - t0), &a, &b);
    let jacobian = point_triangle_jacobian::<T>();
    jacobian.transpose() * local * jacobian
}

/// `∂(r, a, b) / ∂(p, t0, t1, t2)` with `r = p - t0`, `a = t1 - t0`, `b = t2 - t0`.
fn point_triangle_jacobian<T: RealField + Copy>() -> SMatrix<T, 9, 12> {
    let id = Matrix3::<T>::identity();
    let mut jacobian = SMatrix::<T, 9, 12>::zeros();
    for row in 0..3 {
        jacobian
            .fixed_view_mut::<3, 3>(row * 3, 3)
            .copy_from(&-id);
    }
    jacobian.fixed_view_mut::<3, 3>(0, 0).copy_from(&id);
    jacobian.fixed_view_mut::<3, 3>(3, 6).copy_from(&id);
    jacobian.fixed_view_mut::<3, 3>(6, 9).copy_from(&id);
    jacobian
}

/// Vertex indices of the longest edge of a triangle.
fn longest_edge<T: RealField + Copy>(t0: &Point3<T>, t1: &Point3<T>, t2: &Point3<T>) -> [usize; 2] {
    let l01 = (t1 - t0).norm_squared();
    let l12 = (t2 - t1).norm_squared();
    let l20 = (t0 - t2).norm_squared();

    if l01 >= l12 && l01 >= l20 {
        [0, 1]
    } else if l12 >= l20 {
        [1, 2]
    } else {
        [2, 0]
    }
}
