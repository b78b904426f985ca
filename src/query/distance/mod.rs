//! Squared-distance kernels and their derivatives.

pub use self::closest::{
    point_segment_distance2, point_segment_distance2_gradient, point_segment_distance2_hessian,
    point_triangle_closest_distance2, point_triangle_closest_distance2_gradient,
    point_triangle_closest_distance2_hessian, segment_segment_distance2,
    segment_segment_distance2_gradient, segment_segment_distance2_hessian,
};
pub use self::edge_edge::{
    edge_edge_distance2, edge_edge_distance2_gradient, edge_edge_distance2_hessian,
};
pub use self::point_edge::{
    point_edge_distance2, point_edge_distance2_gradient, point_edge_distance2_hessian,
};
pub use self::point_point::{
    point_point_distance2, point_point_distance2_gradient, point_point_distance2_hessian,
};
pub use self::point_triangle::{
    point_triangle_distance2, point_triangle_distance2_gradient,
    point_triangle_distance2_hessian,
};

mod closest;
mod edge_edge;
mod plane;
mod point_edge;
mod point_point;
mod point_triangle;
mod scatter;
