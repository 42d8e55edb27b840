use crate::binary_tree::OrderedTree;
use crate::error::{Error, Result};
use crate::stats::Summary;
use crate::timer;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::Serialize;
use std::ops::Range;

/// Keys are drawn uniformly from this range unless the runner is told otherwise.
pub const DEFAULT_KEY_RANGE: Range<i64> = 0..1_000_000;

/// Timing statistics for one input size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExperimentResult {
    pub size: usize,
    pub mean_time: f64,
    pub confidence_half_width: f64,
}

/// A query operation together with its input, ready to be timed against a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Closest(i64),
    KthLargest(usize),
}

impl Query {
    pub fn run(&self, tree: &OrderedTree<i64>) -> Result<i64> {
        match *self {
            Query::Closest(target) => tree.find_closest(target).copied(),
            Query::KthLargest(k) => tree.kth_largest(k).copied(),
        }
    }
}

/// Picks the query for a trial, given the freshly built tree and the keys it was built from.
pub trait QueryBuilder {
    fn build(&mut self, tree: &OrderedTree<i64>, keys: &[i64], rng: &mut dyn RngCore) -> Query;
}

impl<F> QueryBuilder for F
where
    F: FnMut(&OrderedTree<i64>, &[i64], &mut dyn RngCore) -> Query,
{
    fn build(&mut self, tree: &OrderedTree<i64>, keys: &[i64], rng: &mut dyn RngCore) -> Query {
        self(tree, keys, rng)
    }
}

/// Nearest-value lookup of a target drawn uniformly from `targets`.
#[derive(Debug, Clone)]
pub struct ClosestQuery {
    targets: Range<i64>,
}

impl ClosestQuery {
    pub fn new(targets: Range<i64>) -> Result<Self> {
        if targets.is_empty() {
            return Err(Error::InvalidConfiguration(format!(
                "target range {targets:?} is empty"
            )));
        }
        Ok(ClosestQuery { targets })
    }

    pub fn targets(&self) -> Range<i64> {
        self.targets.clone()
    }
}

impl Default for ClosestQuery {
    fn default() -> Self {
        ClosestQuery {
            targets: DEFAULT_KEY_RANGE,
        }
    }
}

impl QueryBuilder for ClosestQuery {
    fn build(&mut self, _tree: &OrderedTree<i64>, _keys: &[i64], rng: &mut dyn RngCore) -> Query {
        Query::Closest(rng.random_range(self.targets.clone()))
    }
}

/// Median rank lookup: `k = size / 2`, at least 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct KthLargestQuery;

impl QueryBuilder for KthLargestQuery {
    fn build(&mut self, _tree: &OrderedTree<i64>, keys: &[i64], _rng: &mut dyn RngCore) -> Query {
        Query::KthLargest((keys.len() / 2).max(1))
    }
}

/// Sizes `step, 2 * step, ...` up to and including `max_size`.
pub fn sweep(step: usize, max_size: usize) -> Result<Vec<usize>> {
    if step == 0 {
        return Err(Error::InvalidConfiguration("step must be positive".into()));
    }
    if max_size < step {
        return Err(Error::InvalidConfiguration(format!(
            "max size {max_size} is smaller than step {step}"
        )));
    }
    Ok((step..=max_size).step_by(step).collect())
}

/// Builds a fresh tree per trial from random keys, times a query on it, and summarises
/// the timings per input size.
pub struct ExperimentRunner<R> {
    rng: R,
    key_range: Range<i64>,
}

impl ExperimentRunner<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ExperimentRunner<R> {
    pub fn new(rng: R) -> Self {
        ExperimentRunner {
            rng,
            key_range: DEFAULT_KEY_RANGE,
        }
    }

    pub fn with_key_range(mut self, key_range: Range<i64>) -> Self {
        self.key_range = key_range;
        self
    }

    pub fn key_range(&self) -> Range<i64> {
        self.key_range.clone()
    }

    /// `size` independent uniform keys, in generation order.
    pub fn generate_keys(&mut self, size: usize) -> Vec<i64> {
        let range = self.key_range.clone();
        (0..size)
            .map(|_| self.rng.random_range(range.clone()))
            .collect()
    }

    pub fn run<Q>(
        &mut self,
        sizes: &[usize],
        repetitions: usize,
        query_builder: &mut Q,
    ) -> Result<Vec<ExperimentResult>>
    where
        Q: QueryBuilder + ?Sized,
    {
        self.validate(sizes, repetitions)?;

        let mut results = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let mut times = Vec::with_capacity(repetitions);
            for _ in 0..repetitions {
                times.push(self.trial(size, query_builder)?);
            }
            let summary = Summary::from_samples(&times)?;
            results.push(ExperimentResult {
                size,
                mean_time: summary.mean,
                confidence_half_width: summary.half_width,
            });
        }
        Ok(results)
    }

    fn trial<Q>(&mut self, size: usize, query_builder: &mut Q) -> Result<f64>
    where
        Q: QueryBuilder + ?Sized,
    {
        let keys = self.generate_keys(size);
        let tree: OrderedTree<i64> = keys.iter().copied().collect();
        let query = query_builder.build(&tree, &keys, &mut self.rng);
        let (elapsed, outcome) = timer::measure(|| query.run(&tree));
        outcome?;
        Ok(elapsed)
    }

    fn validate(&self, sizes: &[usize], repetitions: usize) -> Result<()> {
        if repetitions < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "repetitions must be at least 2, got {repetitions}"
            )));
        }
        if sizes.contains(&0) {
            return Err(Error::InvalidConfiguration(
                "input sizes must be positive".into(),
            ));
        }
        if sizes.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::InvalidConfiguration(
                "input sizes must be strictly ascending".into(),
            ));
        }
        if self.key_range.is_empty() {
            return Err(Error::InvalidConfiguration(format!(
                "key range {:?} is empty",
                self.key_range
            )));
        }
        Ok(())
    }
}
