use ipcore3d::animation::{AnimationFilter, FilterError};
use oorandom::Rand64;

#[test]
fn filter_visits_each_flagged_entry_once_in_order() {
    let mut rng = Rand64::new(40);
    let flags: Vec<bool> = (0..1000).map(|_| rng.rand_float() < 0.3).collect();
    let filter = AnimationFilter::new(&flags);
    let mut visits = vec![0u32; flags.len()];
    let mut order = Vec::new();

    filter
        .for_each_mut(&mut visits, |i, v| {
            *v += 1;
            order.push(i);
        })
        .unwrap();

    for (i, v) in visits.iter().enumerate() {
        assert_eq!(*v, flags[i] as u32);
    }
    assert!(order.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(order, filter.indices());
    assert_eq!(filter.len() + filter.free_indices().count(), flags.len());
}

#[test]
fn filter_rejects_mismatched_items() {
    let flags = vec![true; 4];
    let filter = AnimationFilter::new(&flags);

    assert_eq!(
        filter.for_each(&[0; 5], |_, _| ()),
        Err(FilterError::LengthMismatch {
            expected: 4,
            got: 5
        })
    );
}

#[test]
fn per_vertex_mask_for_three_dof_vertices() {
    let flags = [false, true];
    let filter = AnimationFilter::new(&flags);
    assert_eq!(filter.dof_mask(3), [false, false, false, true, true, true]);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_filter_matches_serial() {
    let mut rng = Rand64::new(41);
    let flags: Vec<bool> = (0..10_000).map(|_| rng.rand_float() < 0.5).collect();
    let filter = AnimationFilter::new(&flags);

    let mut serial = vec![0usize; flags.len()];
    let mut parallel = vec![0usize; flags.len()];
    filter.for_each_mut(&mut serial, |i, v| *v = i * 2).unwrap();
    filter
        .par_for_each_mut(&mut parallel, |i, v| *v = i * 2)
        .unwrap();

    assert_eq!(serial, parallel);
}
