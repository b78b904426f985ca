//! Distances between bounded primitives, dispatched on their closest sub-features.

use super::edge_edge::{
    edge_edge_distance2, edge_edge_distance2_gradient, edge_edge_distance2_hessian,
};
use super::point_edge::{
    point_edge_distance2, point_edge_distance2_gradient, point_edge_distance2_hessian,
};
use super::point_point::{
    point_point_distance2, point_point_distance2_gradient, point_point_distance2_hessian,
};
use super::point_triangle::{
    point_triangle_distance2, point_triangle_distance2_gradient,
    point_triangle_distance2_hessian,
};
use super::scatter::{scatter_gradient, scatter_hessian};
use crate::query::distance_type::{
    edge_edge_distance_type, point_edge_distance_type, point_triangle_distance_type,
    EdgeEdgeDistanceType, PointEdgeDistanceType, PointTriangleDistanceType,
};
use na::{Point3, RealField, SMatrix, SVector};

/// Squared distance between the point `p` and the segment `(e0, e1)`.
#[inline]
pub fn point_segment_distance2<T: RealField + Copy>(
    p: &Point3<T>,
    e0: &Point3<T>,
    e1: &Point3<T>,
) -> T {
    let e = [e0, e1];
    match point_edge_distance_type(p, e0, e1) {
        PointEdgeDistanceType::Vertex(i) => point_point_distance2(p, e[i]),
        PointEdgeDistanceType::Edge => point_edge_distance2(p, e0, e1),
    }
}

/// Gradient of [`point_segment_distance2`] with respect to `[p, e0, e1]`.
pub fn point_segment_distance2_gradient<T: RealField + Copy>(
    p: &Point3<T>,
    e0: &Point3<T>,
    e1: &Point3<T>,
) -> SVector<T, 9> {
    let e = [e0, e1];
    match point_edge_distance_type(p, e0, e1) {
        PointEdgeDistanceType::Vertex(i) => {
            let mut grad = SVector::<T, 9>::zeros();
            scatter_gradient(&point_point_distance2_gradient(p, e[i]), &[0, i + 1], &mut grad);
            grad
        }
        PointEdgeDistanceType::Edge => point_edge_distance2_gradient(p, e0, e1),
    }
}

/// Hessian of [`point_segment_distance2`] with respect to `[p, e0, e1]`.
pub fn point_segment_distance2_hessian<T: RealField + Copy>(
    p: &Point3<T>,
    e0: &Point3<T>,
    e1: &Point3<T>,
) -> SMatrix<T, 9, 9> {
    let e = [e0, e1];
    match point_edge_distance_type(p, e0, e1) {
        PointEdgeDistanceType::Vertex(i) => {
            let mut hessian = SMatrix::<T, 9, 9>::zeros();
            scatter_hessian(&point_point_distance2_hessian(p, e[i]), &[0, i + 1], &mut hessian);
            hessian
        }
        PointEdgeDistanceType::Edge => point_edge_distance2_hessian(p, e0, e1),
    }
}

/// Squared distance between the point `p` and the solid triangle `(t0, t1, t2)`.
#[inline]
pub fn point_triangle_closest_distance2<T: RealField + Copy>(
    p: &Point3<T>,
    t0: &Point3<T>,
    t1: &Point3<T>,
    t2: &Point3<T>,
) -> T {
    let t = [t0, t1, t2];
    match point_triangle_distance_type(p, t0, t1, t2) {
        PointTriangleDistanceType::Vertex(i) => point_point_distance2(p, t[i]),
        PointTriangleDistanceType::Edge(i) => point_edge_distance2(p, t[i], t[(i + 1) % 3]),
        PointTriangleDistanceType::Face => point_triangle_distance2(p, t0, t1, t2),
    }
}

/// Gradient of [`point_triangle_closest_distance2`] with respect to `[p, t0, t1, t2]`.
pub fn point_triangle_closest_distance2_gradient<T: RealField + Copy>(
    p: &Point3<T>,
    t0: &Point3<T>,
    t1: &Point3<T>,
    t2: &Point3<T>,
) -> SVector<T, 12> {
    let t = [t0, t1, t2];
    let mut grad = SVector::<T, 12>::zeros();

    match point_triangle_distance_type(p, t0, t1, t2) {
        PointTriangleDistanceType::Vertex(i) => {
            scatter_gradient(&point_point_distance2_gradient(p, t[i]), &[0, i + 1], &mut grad)
        }
        PointTriangleDistanceType::Edge(i) => {
            let j = (i + 1) % 3;
            let sub = point_edge_distance2_gradient(p, t[i], t[j]);
            scatter_gradient(&sub, &[0, i + 1, j + 1], &mut grad)
        }
        PointTriangleDistanceType::Face => {
            grad = point_triangle_distance2_gradient(p, t0, t1, t2);
        }
    }

    grad
}

/// Hessian of [`point_triangle_closest_distance2`] with respect to `[p, t0, t1, t2]`.
pub fn point_triangle_closest_distance2_hessian<T: RealField + Copy>(
    p: &Point3<T>,
    t0: &Point3<T>,
    t1: &Point3<T>,
    t2: &Point3<T>,
) -> SMatrix<T, 12, 12> {
    let t = [t0, t1, t2];
    let mut hessian = SMatrix::<T, 12, 12>::zeros();

    match point_triangle_distance_type(p, t0, t1, t2) {
        PointTriangleDistanceType::Vertex(i) => {
            let sub = point_point_distance2_hessian(p, t[i]);
            scatter_hessian(&sub, &[0, i + 1], &mut hessian)
        }
        PointTriangleDistanceType::Edge(i) => {
            let j = (i + 1) % 3;
            let sub = point_edge_distance2_hessian(p, t[i], t[j]);
            scatter_hessian(&sub, &[0, i + 1, j + 1], &mut hessian)
        }
        PointTriangleDistanceType::Face => {
            hessian = point_triangle_distance2_hessian(p, t0, t1, t2);
        }
    }

    hessian
}

/// Squared distance between the segments `(ea0, ea1)` and `(eb0, eb1)`.
#[inline]
pub fn segment_segment_distance2<T: RealField + Copy>(
    ea0: &Point3<T>,
    ea1: &Point3<T>,
    eb0: &Point3<T>,
    eb1: &Point3<T>,
) -> T {
    let (ea, eb) = ([ea0, ea1], [eb0, eb1]);
    match edge_edge_distance_type(ea0, ea1, eb0, eb1) {
        EdgeEdgeDistanceType::VertexVertex(i, j) => point_point_distance2(ea[i], eb[j]),
        EdgeEdgeDistanceType::VertexEdge(i) => point_edge_distance2(ea[i], eb0, eb1),
        EdgeEdgeDistanceType::EdgeVertex(j) => point_edge_distance2(eb[j], ea0, ea1),
        EdgeEdgeDistanceType::EdgeEdge => edge_edge_distance2(ea0, ea1, eb0, eb1),
    }
}

/// Gradient of [`segment_segment_distance2`] with respect to `[ea0, ea1, eb0, eb1]`.
pub fn segment_segment_distance2_gradient<T: RealField + Copy>(
    ea0: &Point3<T>,
    ea1: &Point3<T>,
    eb0: &Point3<T>,
    eb1: &Point3<T>,
) -> SVector<T, 12> {
    let (ea, eb) = ([ea0, ea1], [eb0, eb1]);
    let mut grad = SVector::<T, 12>::zeros();

    match edge_edge_distance_type(ea0, ea1, eb0, eb1) {
        EdgeEdgeDistanceType::VertexVertex(i, j) => {
            let sub = point_point_distance2_gradient(ea[i], eb[j]);
            scatter_gradient(&sub, &[i, 2 + j], &mut grad)
        }
        EdgeEdgeDistanceType::VertexEdge(i) => {
            let sub = point_edge_distance2_gradient(ea[i], eb0, eb1);
            scatter_gradient(&sub, &[i, 2, 3], &mut grad)
        }
        EdgeEdgeDistanceType::EdgeVertex(j) => {
            let sub = point_edge_distance2_gradient(eb[j], ea0, ea1);
            scatter_gradient(&sub, &[2 + j, 0, 1], &mut grad)
        }
        EdgeEdgeDistanceType::EdgeEdge => {
            grad = edge_edge_distance2_gradient(ea0, ea1, eb0, eb1);
        }
    }

    grad
}

/// Hessian of [`segment_segment_distance2`] with respect to `[ea0, ea1, eb0, eb1]`.
pub fn segment_segment_distance2_hessian<T: RealField + Copy>(
    ea0: &Point3<T>,
    ea1: &Point3<T>,
    eb0: &Point3<T>,
    eb1: &Point3<T>,
) -> SMatrix<T, 12, 12> {
    let (ea, eb) = ([ea0, ea1], [eb0, eb1]);
    let mut hessian = SMatrix::<T, 12, 12>::zeros();

    match edge_edge_distance_type(ea0, ea1, eb0, eb1) {
        EdgeEdgeDistanceType::VertexVertex(i, j) => {
            let sub = point_point_distance2_hessian(ea[i], eb[j]);
            scatter_hessian(&sub, &[i, 2 + j], &mut hessian)
        }
        EdgeEdgeDistanceType::VertexEdge(i) => {
            let sub = point_edge_distance2_hessian(ea[i], eb0, eb1);
            scatter_hessian(&sub, &[i, 2, 3], &mut hessian)
        }
        EdgeEdgeDistanceType::EdgeVertex(j) => {
            let sub = point_edge_distance2_hessian(eb[j], ea0, ea1);
            scatter_hessian(&sub, &[2 + j, 0, 1], &mut hessian)
        }
        EdgeEdgeDistanceType::EdgeEdge => {
            hessian = edge_edge_distance2_hessian(ea0, ea1, eb0, eb1);
        }
    }

    hessian
}
