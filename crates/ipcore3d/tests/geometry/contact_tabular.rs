use ipcore3d::contact::{Barrier, CombineRule, ContactCoefficient, ContactPotential, ContactTabular};
use ipcore3d::kernel::Kernel;
use ipcore3d::math::{Real, Vector};
use ipcore3d::query::PointPoint;
use na::Point3;

#[test]
fn tabular_drives_contact_stiffness_and_friction() {
    let mut tabular = ContactTabular::new().with_rule(CombineRule::Average);
    let ice = tabular.create("ice");
    let rubber = tabular.create("rubber");

    tabular.insert(ice, ice, 0.0, 1.0e6).unwrap();
    tabular.insert(rubber, rubber, 1.0, 3.0e6).unwrap();

    let coeff = tabular.coefficient(ice, rubber);
    assert_relative_eq!(coeff.mu(), 0.5);
    assert_relative_eq!(coeff.kappa(), 2.0e6);

    let barrier = Barrier::<Real>::new(0.1).unwrap();
    let pair = PointPoint::<Real>::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.05, 0.0));
    let potential = ContactPotential::from_coefficient(pair, &coeff, barrier);
    assert_relative_eq!(
        potential.value(),
        coeff.kappa() * barrier.value(0.05 * 0.05),
        max_relative = 1.0e-5
    );

    // The friction force is bounded by the barrier normal force.
    let normal = barrier.normal_force(coeff.kappa(), 0.05 * 0.05);
    let clamped = coeff.clamp_tangential_force(&Vector::new(normal, 0.0, normal), normal);
    assert_relative_eq!(clamped.norm(), 0.5 * normal, max_relative = 1.0e-5);
}

#[test]
fn unregistered_elements_use_the_default_model() {
    let mut tabular = ContactTabular::new();
    let a = tabular.create("a");
    let b = tabular.create("b");

    tabular.default_model(0.2, 5.0e8).unwrap();
    assert_eq!(
        tabular.coefficient(a, b),
        ContactCoefficient::new(5.0e8, 0.2).unwrap()
    );
    assert_eq!(tabular.name(b), Some("b"));
}
