//! Non-persistent geometric queries on primitive pairs.
//!
//! # General cases
//! The kernels exported by [`query::distance`](crate::query::distance) compute the squared
//! distance between two primitives together with its gradient and Hessian:
//!
//! * [`point_point_distance2()`] between two points.
//! * [`point_edge_distance2()`] between a point and the line supporting an edge.
//! * [`point_triangle_distance2()`] between a point and the plane supporting a triangle.
//! * [`edge_edge_distance2()`] between the lines supporting two edges.
//!
//! The `*_closest_*`/`*_segment_*` variants first classify which sub-features of the
//! two primitives are closest (see [`query::distance_type`](crate::query::distance_type))
//! and dispatch to the matching kernel, yielding the true primitive-primitive distance.
//!
//! # Specific cases
//! The functions have the form `[pair]_distance2[_gradient|_hessian]()` where `[pair]` names
//! the two primitives. Gradients and Hessians are laid out by concatenating the three
//! coordinates of each input point in argument order.

pub use self::distance::{
    edge_edge_distance2, edge_edge_distance2_gradient, edge_edge_distance2_hessian,
    point_edge_distance2, point_edge_distance2_gradient, point_edge_distance2_hessian,
    point_point_distance2, point_point_distance2_gradient, point_point_distance2_hessian,
    point_segment_distance2, point_segment_distance2_gradient, point_segment_distance2_hessian,
    point_triangle_closest_distance2, point_triangle_closest_distance2_gradient,
    point_triangle_closest_distance2_hessian, point_triangle_distance2,
    point_triangle_distance2_gradient, point_triangle_distance2_hessian,
    segment_segment_distance2, segment_segment_distance2_gradient,
    segment_segment_distance2_hessian,
};
pub use self::distance_type::{
    edge_edge_distance_type, point_edge_distance_type, point_triangle_distance_type,
    EdgeEdgeDistanceType, PointEdgeDistanceType, PointTriangleDistanceType,
};
pub use self::pair::{EdgeEdge, PointEdge, PointPoint, PointTriangle};

pub mod distance;
pub mod distance_type;
mod pair;
