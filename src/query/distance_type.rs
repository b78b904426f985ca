//! Classification of the closest sub-features of a primitive pair.
//!
//! The raw kernels of [`query::distance`](crate::query::distance) measure distances
//! between supporting lines and planes. To obtain the distance between the actual
//! bounded primitives, the assembler first classifies which vertex, edge or face of
//! each primitive is closest, then evaluates the matching kernel.

use na::{Point3, RealField, Vector3};

/// The closest sub-feature of an edge to a point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PointEdgeDistanceType {
    /// The point is closest to the edge endpoint with the given index (0 or 1).
    Vertex(usize),
    /// The point projects inside the edge.
    Edge,
}

/// The closest sub-feature of a triangle to a point.
///
/// Edge `i` joins the vertices `i` and `(i + 1) % 3`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PointTriangleDistanceType {
    /// The point is closest to the triangle vertex with the given index.
    Vertex(usize),
    /// The point is closest to the interior of the edge with the given index.
    Edge(usize),
    /// The point projects inside the triangle.
    Face,
}

/// The closest sub-features of two edges `A` and `B`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum EdgeEdgeDistanceType {
    /// Endpoint `.0` of `A` is closest to endpoint `.1` of `B`.
    VertexVertex(usize, usize),
    /// Endpoint `.0` of `A` is closest to the interior of `B`.
    VertexEdge(usize),
    /// The interior of `A` is closest to endpoint `.0` of `B`.
    EdgeVertex(usize),
    /// The interiors of both edges are closest.
    EdgeEdge,
}

/// Classifies the closest feature of the edge `(e0, e1)` to the point `p`.
#[inline]
pub fn point_edge_distance_type<T: RealField + Copy>(
    p: &Point3<T>,
    e0: &Point3<T>,
    e1: &Point3<T>,
) -> PointEdgeDistanceType {
    let e = e1 - e0;
    let q = e.norm_squared();

    if q == T::zero() {
        return PointEdgeDistanceType::Vertex(0);
    }

    let t = (p - e0).dot(&e) / q;
    if t < T::zero() {
        PointEdgeDistanceType::Vertex(0)
    } else if t > T::one() {
        PointEdgeDistanceType::Vertex(1)
    } else {
        PointEdgeDistanceType::Edge
    }
}

/// Classifies the closest feature of the triangle `(t0, t1, t2)` to the point `p`.
pub fn point_triangle_distance_type<T: RealField + Copy>(
    p: &Point3<T>,
    t0: &Point3<T>,
    t1: &Point3<T>,
    t2: &Point3<T>,
) -> PointTriangleDistanceType {
    let normal = (t1 - t0).cross(&(t2 - t0));

    if normal.norm_squared() == T::zero() {
        return flat_point_triangle_distance_type(p, [t0, t1, t2]);
    }

    let t = [t0, t1, t2];
    // For each edge: the parameter of the projection along the edge, and the
    // signed coordinate along the in-plane outward direction `edge × normal`.
    let mut params = [(T::zero(), T::zero()); 3];

    for i in 0..3 {
        let origin = t[i];
        let edge = t[(i + 1) % 3] - origin;
        let outward = edge.cross(&normal);
        let v = p - origin;
        params[i] = (
            v.dot(&edge) / edge.norm_squared(),
            v.dot(&outward) / outward.norm_squared(),
        );

        if params[i].0 > T::zero() && params[i].0 < T::one() && params[i].1 >= T::zero() {
            return PointTriangleDistanceType::Edge(i);
        }
    }

    if params[0].0 <= T::zero() && params[2].0 >= T::one() {
        PointTriangleDistanceType::Vertex(0)
    } else if params[1].0 <= T::zero() && params[0].0 >= T::one() {
        PointTriangleDistanceType::Vertex(1)
    } else if params[2].0 <= T::zero() && params[1].0 >= T::one() {
        PointTriangleDistanceType::Vertex(2)
    } else {
        PointTriangleDistanceType::Face
    }
}

/// Zero-area triangle: the closest feature is found among the three edges.
fn flat_point_triangle_distance_type<T: RealField + Copy>(
    p: &Point3<T>,
    t: [&Point3<T>; 3],
) -> PointTriangleDistanceType {
    let mut best = (T::max_value().unwrap_or_else(T::one), PointTriangleDistanceType::Face);

    for i in 0..3 {
        let (a, b) = (t[i], t[(i + 1) % 3]);
        let (dist2, ty) = match point_edge_distance_type(p, a, b) {
            PointEdgeDistanceType::Vertex(0) => {
                ((p - a).norm_squared(), PointTriangleDistanceType::Vertex(i))
            }
            PointEdgeDistanceType::Vertex(_) => (
                (p - b).norm_squared(),
                PointTriangleDistanceType::Vertex((i + 1) % 3),
            ),
            PointEdgeDistanceType::Edge => (
                super::distance::point_edge_distance2(p, a, b),
                PointTriangleDistanceType::Edge(i),
            ),
        };

        if dist2 < best.0 || matches!(best.1, PointTriangleDistanceType::Face) {
            best = (dist2, ty);
        }
    }

    best.1
}

/// Classifies the closest features of the edges `(ea0, ea1)` and `(eb0, eb1)`.
///
/// Edges whose directions satisfy `sin²θ ≤ ε` (machine epsilon of `T`), or whose
/// `‖d₁‖²‖d₂‖²` and `(d₁·d₂)²` agree within a few ulps, are treated as parallel and
/// never classify as [`EdgeEdgeDistanceType::EdgeEdge`]. Both tests are relative, so
/// the classification does not depend on the scale of the input.
pub fn edge_edge_distance_type<T: RealField + Copy>(
    ea0: &Point3<T>,
    ea1: &Point3<T>,
    eb0: &Point3<T>,
    eb1: &Point3<T>,
) -> EdgeEdgeDistanceType {
    let (s, t) = segment_segment_closest_parameters(ea0, ea1, eb0, eb1);
    let zero = T::zero();
    let one = T::one();

    let vertex_a = if s == zero {
        Some(0)
    } else if s == one {
        Some(1)
    } else {
        None
    };
    let vertex_b = if t == zero {
        Some(0)
    } else if t == one {
        Some(1)
    } else {
        None
    };

    match (vertex_a, vertex_b) {
        (Some(i), Some(j)) => EdgeEdgeDistanceType::VertexVertex(i, j),
        (Some(i), None) => EdgeEdgeDistanceType::VertexEdge(i),
        (None, Some(j)) => EdgeEdgeDistanceType::EdgeVertex(j),
        (None, None) => EdgeEdgeDistanceType::EdgeEdge,
    }
}

/// Parameters `(s, t)` in `[0, 1]²` of the closest points `ea0 + s (ea1 - ea0)` and
/// `eb0 + t (eb1 - eb0)` between two segments.
///
/// Endpoints are reported as exactly `0` or `1`.
pub(crate) fn segment_segment_closest_parameters<T: RealField + Copy>(
    ea0: &Point3<T>,
    ea1: &Point3<T>,
    eb0: &Point3<T>,
    eb1: &Point3<T>,
) -> (T, T) {
    // Inspired by Real-time collision detection by Christer Ericson.
    let d1: Vector3<T> = ea1 - ea0;
    let d2: Vector3<T> = eb1 - eb0;
    let r: Vector3<T> = ea0 - eb0;

    let zero = T::zero();
    let one = T::one();
    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let mut s;
    let mut t;

    if a == zero && e == zero {
        s = zero;
        t = zero;
    } else if a == zero {
        s = zero;
        t = na::clamp(f / e, zero, one);
    } else {
        let c = d1.dot(&r);
        if e == zero {
            t = zero;
            s = na::clamp(-c / a, zero, one);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Relative and ulps error to test collinearity.
            if denom > T::default_epsilon() * ae && !ulps_eq!(ae, bb, epsilon = zero) {
                s = na::clamp((b * f - c * e) / denom, zero, one);
            } else {
                s = zero;
            }

            t = (b * s + f) / e;

            if t < zero {
                t = zero;
                s = na::clamp(-c / a, zero, one);
            } else if t > one {
                t = one;
                s = na::clamp((b - c) / a, zero, one);
            }
        }
    }

    (s, t)
}
