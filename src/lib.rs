//! An unbalanced binary search tree with nearest-value and order-statistic queries, and
//! a driver that measures how their latency scales with the number of stored keys.

pub mod binary_tree;
pub mod error;
pub mod experiment;
pub mod report;
pub mod stats;
pub mod timer;
pub mod tree;

pub use binary_tree::OrderedTree;
pub use error::{Error, Result};
pub use experiment::{ExperimentResult, ExperimentRunner};
