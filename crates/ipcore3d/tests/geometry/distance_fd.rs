use super::fd::{self, check_derivatives, flatten, point};
use ipcore3d::query;
use na::{Point3, SVector};
use oorandom::Rand64;

const SAMPLES: usize = 64;

#[test]
fn point_point_derivatives() {
    let mut rng = Rand64::new(1);

    for _ in 0..SAMPLES {
        let x: SVector<f64, 6> = flatten(&[fd::random_point(&mut rng), fd::random_point(&mut rng)]);
        check_derivatives(
            |x| query::point_point_distance2(&point(x, 0), &point(x, 1)),
            |x| query::point_point_distance2_gradient(&point(x, 0), &point(x, 1)),
            |x| query::point_point_distance2_hessian(&point(x, 0), &point(x, 1)),
            &x,
        );
    }
}

#[test]
fn point_point_is_symmetric() {
    let mut rng = Rand64::new(2);

    for _ in 0..SAMPLES {
        let a = fd::random_point(&mut rng);
        let b = fd::random_point(&mut rng);
        let g_ab = query::point_point_distance2_gradient(&a, &b);
        let g_ba = query::point_point_distance2_gradient(&b, &a);

        assert_eq!(
            query::point_point_distance2(&a, &b),
            query::point_point_distance2(&b, &a)
        );
        assert_eq!(g_ab.fixed_rows::<3>(0), g_ba.fixed_rows::<3>(3));
        assert_eq!(g_ab.fixed_rows::<3>(3), g_ba.fixed_rows::<3>(0));
    }
}

#[test]
fn point_edge_derivatives() {
    let mut rng = Rand64::new(3);

    for _ in 0..SAMPLES {
        let pts = [
            fd::random_point(&mut rng),
            fd::random_point(&mut rng),
            fd::random_point(&mut rng),
        ];
        if (pts[2] - pts[1]).norm() < 0.2 {
            continue;
        }

        let x: SVector<f64, 9> = flatten(&pts);
        check_derivatives(
            |x| query::point_edge_distance2(&point(x, 0), &point(x, 1), &point(x, 2)),
            |x| query::point_edge_distance2_gradient(&point(x, 0), &point(x, 1), &point(x, 2)),
            |x| query::point_edge_distance2_hessian(&point(x, 0), &point(x, 1), &point(x, 2)),
            &x,
        );
    }
}

#[test]
fn point_triangle_derivatives() {
    let mut rng = Rand64::new(4);

    for _ in 0..SAMPLES {
        let pts = [
            fd::random_point(&mut rng),
            fd::random_point(&mut rng),
            fd::random_point(&mut rng),
            fd::random_point(&mut rng),
        ];
        if (pts[2] - pts[1]).cross(&(pts[3] - pts[1])).norm() < 0.2 {
            continue;
        }

        let x: SVector<f64, 12> = flatten(&pts);
        check_derivatives(
            |x| query::point_triangle_distance2(&point(x, 0), &point(x, 1), &point(x, 2), &point(x, 3)),
            |x| {
                query::point_triangle_distance2_gradient(
                    &point(x, 0),
                    &point(x, 1),
                    &point(x, 2),
                    &point(x, 3),
                )
            },
            |x| {
                query::point_triangle_distance2_hessian(
                    &point(x, 0),
                    &point(x, 1),
                    &point(x, 2),
                    &point(x, 3),
                )
            },
            &x,
        );
    }
}

#[test]
fn edge_edge_derivatives() {
    let mut rng = Rand64::new(5);

    for _ in 0..SAMPLES {
        let pts = [
            fd::random_point(&mut rng),
            fd::random_point(&mut rng),
            fd::random_point(&mut rng),
            fd::random_point(&mut rng),
        ];
        let ea = pts[1] - pts[0];
        let eb = pts[3] - pts[2];
        if ea.cross(&eb).norm() < 0.2 * ea.norm() * eb.norm() || ea.norm() < 0.2 || eb.norm() < 0.2
        {
            continue;
        }

        let x: SVector<f64, 12> = flatten(&pts);
        check_derivatives(
            |x| query::edge_edge_distance2(&point(x, 0), &point(x, 1), &point(x, 2), &point(x, 3)),
            |x| {
                query::edge_edge_distance2_gradient(
                    &point(x, 0),
                    &point(x, 1),
                    &point(x, 2),
                    &point(x, 3),
                )
            },
            |x| {
                query::edge_edge_distance2_hessian(
                    &point(x, 0),
                    &point(x, 1),
                    &point(x, 2),
                    &point(x, 3),
                )
            },
            &x,
        );
    }
}

#[test]
fn zero_length_edge_reduces_to_point_point() {
    let mut rng = Rand64::new(6);

    for _ in 0..SAMPLES {
        let p = fd::random_point(&mut rng);
        let e = fd::random_point(&mut rng);

        let d2 = query::point_edge_distance2(&p, &e, &e);
        let g = query::point_edge_distance2_gradient(&p, &e, &e);
        let h = query::point_edge_distance2_hessian(&p, &e, &e);
        let g_pp = query::point_point_distance2_gradient(&p, &e);
        let h_pp = query::point_point_distance2_hessian(&p, &e);

        assert_eq!(d2, query::point_point_distance2(&p, &e));
        assert_eq!(g.fixed_rows::<6>(0), g_pp);
        assert!(g.fixed_rows::<3>(6).iter().all(|x| *x == 0.0));
        assert_eq!(h.fixed_view::<6, 6>(0, 0), h_pp);
        assert!(h.rows(6, 3).iter().all(|x| *x == 0.0));
        assert!(h.columns(6, 3).iter().all(|x| *x == 0.0));
    }
}

#[test]
fn parallel_edges_fall_back_to_point_edge() {
    let ea0 = Point3::<f64>::new(0.0, 0.0, 0.0);
    let ea1 = Point3::new(1.0, 0.0, 0.0);
    let eb0 = Point3::new(0.3, 2.0, 1.0);
    let eb1 = Point3::new(1.7, 2.0, 1.0);

    assert_relative_eq!(query::edge_edge_distance2(&ea0, &ea1, &eb0, &eb1), 5.0);
    let g = query::edge_edge_distance2_gradient(&ea0, &ea1, &eb0, &eb1);
    assert!(g.iter().all(|x| x.is_finite()));
    assert!(g.fixed_rows::<3>(3).iter().all(|x| *x == 0.0));
}
