use bst_bench::experiment::{self, ClosestQuery, KthLargestQuery, QueryBuilder};
use bst_bench::report::{self, Format};
use bst_bench::{ExperimentRunner, Result};
use clap::{Parser, ValueEnum};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum QueryKind {
    Closest,
    KthLargest,
    Both,
}

#[derive(Parser)]
#[command(name = "bst-benchmark")]
#[command(about = "Measures BST query latency against the number of stored keys")]
struct Args {
    #[arg(long, default_value = "1000000")]
    max_size: usize,

    #[arg(long, default_value = "100000")]
    step: usize,

    #[arg(long, default_value = "10")]
    repetitions: usize,

    #[arg(long, default_value = "42")]
    seed: u64,

    /// Keys and closest-value targets are drawn from 0..key-max.
    #[arg(long, default_value = "1000000")]
    key_max: i64,

    #[arg(long, value_enum, default_value = "both")]
    query: QueryKind,

    #[arg(long, value_enum, default_value = "table")]
    format: Format,
}

fn run_sweep<Q: QueryBuilder>(args: &Args, title: &str, builder: &mut Q) -> Result<()> {
    let sizes = experiment::sweep(args.step, args.max_size)?;
    eprintln!(
        "Running {} experiments over {} sizes with {} repetitions (seed {})",
        title,
        sizes.len(),
        args.repetitions,
        args.seed
    );

    let mut runner = ExperimentRunner::seeded(args.seed).with_key_range(0..args.key_max);
    let results = runner.run(&sizes, args.repetitions, builder)?;

    report::write_series(&mut io::stdout().lock(), title, &results, args.format)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if matches!(args.query, QueryKind::Closest | QueryKind::Both) {
        let mut builder = ClosestQuery::new(0..args.key_max)?;
        run_sweep(&args, "closest", &mut builder)?;
    }
    if matches!(args.query, QueryKind::KthLargest | QueryKind::Both) {
        run_sweep(&args, "kth-largest", &mut KthLargestQuery)?;
    }
    Ok(())
}
