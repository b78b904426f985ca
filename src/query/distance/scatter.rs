use na::{RealField, SMatrix, SVector};

/// Copies the per-point blocks of `sub` into the point slots `slots` of `out`.
///
/// `sub` holds `slots.len()` points of 3 coordinates each; slots not listed are left untouched.
#[inline]
pub(crate) fn scatter_gradient<T: RealField + Copy, const M: usize, const N: usize>(
    sub: &SVector<T, M>,
    slots: &[usize],
    out: &mut SVector<T, N>,
) {
    debug_assert_eq!(M, slots.len() * 3);
    for (i, slot) in slots.iter().enumerate() {
        out.fixed_rows_mut::<3>(slot * 3)
            .copy_from(&sub.fixed_rows::<3>(i * 3));
    }
}

/// Copies the 3×3 point-pair blocks of `sub` into the matching slots of `out`.
#[inline]
pub(crate) fn scatter_hessian<T: RealField + Copy, const M: usize, const N: usize>(
    sub: &SMatrix<T, M, M>,
    slots: &[usize],
    out: &mut SMatrix<T, N, N>,
) {
    debug_assert_eq!(M, slots.len() * 3);
    for (i, si) in slots.iter().enumerate() {
        for (j, sj) in slots.iter().enumerate() {
            out.fixed_view_mut::<3, 3>(si * 3, sj * 3)
                .copy_from(&sub.fixed_view::<3, 3>(i * 3, j * 3));
        }
    }
}
