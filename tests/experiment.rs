use bst_bench::experiment::{ClosestQuery, KthLargestQuery, Query};
use bst_bench::{Error, ExperimentRunner, OrderedTree};
use rand::RngCore;

#[test]
fn two_sizes_give_two_ordered_results() {
    let mut runner = ExperimentRunner::seeded(42);
    let results = runner
        .run(&[100, 200], 5, &mut ClosestQuery::default())
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].size, 100);
    assert_eq!(results[1].size, 200);
    for r in &results {
        assert!(r.mean_time >= 0.0);
        assert!(r.confidence_half_width >= 0.0);
    }
}

#[test]
fn kth_largest_sweep_completes() {
    let mut runner = ExperimentRunner::seeded(42);
    let results = runner.run(&[50, 100, 150], 3, &mut KthLargestQuery).unwrap();
    let sizes: Vec<usize> = results.iter().map(|r| r.size).collect();
    assert_eq!(sizes, vec![50, 100, 150]);
}

#[test]
fn invalid_configuration_is_reported() {
    let mut runner = ExperimentRunner::seeded(42);
    assert!(matches!(
        runner.run(&[100], 1, &mut KthLargestQuery),
        Err(Error::InvalidConfiguration(_))
    ));
    assert!(matches!(
        runner.run(&[0, 100], 5, &mut KthLargestQuery),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn seed_determines_trees() {
    fn record(seed: u64) -> Vec<Vec<i64>> {
        let mut seen = Vec::new();
        let mut builder = |_: &OrderedTree<i64>, keys: &[i64], rng: &mut dyn RngCore| {
            seen.push(keys.to_vec());
            Query::Closest((rng.next_u32() % 1000) as i64)
        };
        ExperimentRunner::seeded(seed)
            .run(&[10, 20], 3, &mut builder)
            .unwrap();
        seen
    }

    let first = record(9);
    assert_eq!(first.len(), 6);
    assert_eq!(first, record(9));
    assert_ne!(first, record(10));
}

#[test]
fn empty_target_range_is_a_configuration_error() {
    assert!(matches!(
        ClosestQuery::new(5..5),
        Err(Error::InvalidConfiguration(_))
    ));
}
