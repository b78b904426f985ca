use crate::kernel::Kernel;
use crate::query::distance::*;
use na::{Point3, RealField, SMatrix, SVector};

/// Two points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointPoint<T: RealField + Copy> {
    /// The first point.
    pub a: Point3<T>,
    /// The second point.
    pub b: Point3<T>,
}

/// A point and the line supporting an edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointEdge<T: RealField + Copy> {
    /// The point.
    pub p: Point3<T>,
    /// The edge endpoints.
    pub e: [Point3<T>; 2],
}

/// A point and the plane supporting a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointTriangle<T: RealField + Copy> {
    /// The point.
    pub p: Point3<T>,
    /// The triangle vertices.
    pub t: [Point3<T>; 3],
}

/// The lines supporting two edges.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EdgeEdge<T: RealField + Copy> {
    /// The endpoints of the first edge.
    pub ea: [Point3<T>; 2],
    /// The endpoints of the second edge.
    pub eb: [Point3<T>; 2],
}

impl<T: RealField + Copy> PointPoint<T> {
    /// Creates a point-point pair.
    pub fn new(a: Point3<T>, b: Point3<T>) -> Self {
        Self { a, b }
    }
}

impl<T: RealField + Copy> PointEdge<T> {
    /// Creates a point-edge pair.
    pub fn new(p: Point3<T>, e0: Point3<T>, e1: Point3<T>) -> Self {
        Self { p, e: [e0, e1] }
    }
}

impl<T: RealField + Copy> PointTriangle<T> {
    /// Creates a point-triangle pair.
    pub fn new(p: Point3<T>, t0: Point3<T>, t1: Point3<T>, t2: Point3<T>) -> Self {
        Self { p, t: [t0, t1, t2] }
    }
}

impl<T: RealField + Copy> EdgeEdge<T> {
    /// Creates an edge-edge pair.
    pub fn new(ea0: Point3<T>, ea1: Point3<T>, eb0: Point3<T>, eb1: Point3<T>) -> Self {
        Self {
            ea: [ea0, ea1],
            eb: [eb0, eb1],
        }
    }
}

impl<T: RealField + Copy> Kernel<T, 6> for PointPoint<T> {
    #[inline]
    fn value(&self) -> T {
        point_point_distance2(&self.a, &self.b)
    }

    #[inline]
    fn gradient(&self) -> SVector<T, 6> {
        point_point_distance2_gradient(&self.a, &self.b)
    }

    #[inline]
    fn hessian(&self) -> SMatrix<T, 6, 6> {
        point_point_distance2_hessian(&self.a, &self.b)
    }
}

impl<T: RealField + Copy> Kernel<T, 9> for PointEdge<T> {
    #[inline]
    fn value(&self) -> T {
        point_edge_distance2(&self.p, &self.e[0], &self.e[1])
    }

    #[inline]
    fn gradient(&self) -> SVector<T, 9> {
        point_edge_distance2_gradient(&self.p, &self.e[0], &self.e[1])
    }

    #[inline]
    fn hessian(&self) -> SMatrix<T, 9, 9> {
        point_edge_distance2_hessian(&self.p, &self.e[0], &self.e[1])
    }
}

impl<T: RealField + Copy> Kernel<T, 12> for PointTriangle<T> {
    #[inline]
    fn value(&self) -> T {
        let [t0, t1, t2] = &self.t;
        point_triangle_distance2(&self.p, t0, t1, t2)
    }

    #[inline]
    fn gradient(&self) -> SVector<T, 12> {
        let [t0, t1, t2] = &self.t;
        point_triangle_distance2_gradient(&self.p, t0, t1, t2)
    }

    #[inline]
    fn hessian(&self) -> SMatrix<T, 12, 12> {
        let [t0, t1, t2] = &self.t;
        point_triangle_distance2_hessian(&self.p, t0, t1, t2)
    }
}

impl<T: RealField + Copy> Kernel<T, 12> for EdgeEdge<T> {
    #[inline]
    fn value(&self) -> T {
        let ([ea0, ea1], [eb0, eb1]) = (&self.ea, &self.eb);
        edge_edge_distance2(ea0, ea1, eb0, eb1)
    }

    #[inline]
    fn gradient(&self) -> SVector<T, 12> {
        let ([ea0, ea1], [eb0, eb1]) = (&self.ea, &self.eb);
        edge_edge_distance2_gradient(ea0, ea1, eb0, eb1)
    }

    #[inline]
    fn hessian(&self) -> SMatrix<T, 12, 12> {
        let ([ea0, ea1], [eb0, eb1]) = (&self.ea, &self.eb);
        edge_edge_distance2_hessian(ea0, ea1, eb0, eb1)
    }
}
