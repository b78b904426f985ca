//! Squared distance from a point to a plane given by two spanning vectors.
//!
//! With `n = a × b`, `g = n·r` and `w = n·n`, the squared distance is `f = g² / w`.
//! It is the common core of the point-triangle (point-plane) and edge-edge
//! (line-line) kernels; only the map from the primitive DOFs to `(r, a, b)` differs.
//! All functions here assume `w > 0`.

use na::{Matrix3, RealField, SMatrix, SVector, Vector3};

#[inline]
pub(crate) fn plane_distance2<T: RealField + Copy>(
    r: &Vector3<T>,
    a: &Vector3<T>,
    b: &Vector3<T>,
) -> T {
    let n = a.cross(b);
    let g = n.dot(r);
    g * g / n.norm_squared()
}

/// The partial derivatives `(∂f/∂r, ∂f/∂n)`.
#[inline]
fn normal_gradient<T: RealField + Copy>(
    r: &Vector3<T>,
    n: &Vector3<T>,
) -> (Vector3<T>, Vector3<T>) {
    let two = T::one() + T::one();
    let g = n.dot(r);
    let w = n.norm_squared();
    let f_r = n * (two * g / w);
    let f_n = r * (two * g / w) - n * (two * g * g / (w * w));
    (f_r, f_n)
}

/// Gradient in the local variables `[r, a, b]`.
#[inline]
pub(crate) fn plane_distance2_gradient<T: RealField + Copy>(
    r: &Vector3<T>,
    a: &Vector3<T>,
    b: &Vector3<T>,
) -> SVector<T, 9> {
    let n = a.cross(b);
    let (f_r, f_n) = normal_gradient(r, &n);

    let mut grad = SVector::<T, 9>::zeros();
    grad.fixed_rows_mut::<3>(0).copy_from(&f_r);
    // ∂n/∂a = -[b]×, ∂n/∂b = [a]×.
    grad.fixed_rows_mut::<3>(3).copy_from(&b.cross(&f_n));
    grad.fixed_rows_mut::<3>(6).copy_from(&f_n.cross(a));
    grad
}

/// Hessian in the local variables `[r, a, b]`.
pub(crate) fn plane_distance2_hessian<T: RealField + Copy>(
    r: &Vector3<T>,
    a: &Vector3<T>,
    b: &Vector3<T>,
) -> SMatrix<T, 9, 9> {
    let two = T::one() + T::one();
    let four = two * two;
    let eight = four * two;

    let n = a.cross(b);
    let g = n.dot(r);
    let w = n.norm_squared();
    let w2 = w * w;
    let w3 = w2 * w;
    let id = Matrix3::identity();

    let nn = n * n.transpose();
    let nr = n * r.transpose();
    let rn = r * n.transpose();
    let rr = r * r.transpose();

    // Hessian of f in (r, n).
    let f_rr = nn * (two / w);
    let f_rn = (nr + id * g) * (two / w) - nn * (four * g / w2);
    let f_nn = rr * (two / w) - (rn + nr) * (four * g / w2) - id * (two * g * g / w2)
        + nn * (eight * g * g / w3);

    let mut h_rn = SMatrix::<T, 6, 6>::zeros();
    h_rn.fixed_view_mut::<3, 3>(0, 0).copy_from(&f_rr);
    h_rn.fixed_view_mut::<3, 3>(0, 3).copy_from(&f_rn);
    h_rn.fixed_view_mut::<3, 3>(3, 0).copy_from(&f_rn.transpose());
    h_rn.fixed_view_mut::<3, 3>(3, 3).copy_from(&f_nn);

    // ∂(r, n) / ∂(r, a, b).
    let mut k = SMatrix::<T, 6, 9>::zeros();
    k.fixed_view_mut::<3, 3>(0, 0).copy_from(&id);
    k.fixed_view_mut::<3, 3>(3, 3).copy_from(&-b.cross_matrix());
    k.fixed_view_mut::<3, 3>(3, 6).copy_from(&a.cross_matrix());

    let mut hessian = k.transpose() * h_rn * k;

    // n is bilinear in (a, b): Σ_k f_n[k] ∂²n_k / ∂a∂b = -[f_n]×.
    let (_, f_n) = normal_gradient(r, &n);
    let fx = f_n.cross_matrix();
    let mut ab = hessian.fixed_view_mut::<3, 3>(3, 6);
    ab -= fx;
    let mut ba = hessian.fixed_view_mut::<3, 3>(6, 3);
    ba += fx;
    hessian
}
