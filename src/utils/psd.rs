use na::{DMatrix, RealField, SMatrix};

/// Projects a symmetric matrix onto the cone of positive semi-definite matrices.
///
/// The matrix is eigen-decomposed and its negative eigenvalues are replaced by
/// zero. Newton solvers apply this to contact and elastic Hessians evaluated far
/// from rest, where they may be indefinite.
///
/// Only the lower-triangular part of `m` is read.
pub fn project_psd<T: RealField + Copy, const N: usize>(m: &SMatrix<T, N, N>) -> SMatrix<T, N, N> {
    // Statically-sized eigen-decomposition requires `N` to be a `DimSub<U1>`,
    // which const generics cannot express.
    let dyn_m = DMatrix::from_column_slice(N, N, m.as_slice());
    let mut eigen = dyn_m.symmetric_eigen();

    if eigen.eigenvalues.iter().all(|e| *e >= T::zero()) {
        return *m;
    }

    eigen
        .eigenvalues
        .iter_mut()
        .for_each(|e| *e = e.max(T::zero()));
    let projected = eigen.recompose();

    SMatrix::from_column_slice(projected.as_slice())
}
