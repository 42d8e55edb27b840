use crate::error::Result;
use crate::experiment::ExperimentResult;
use serde::Serialize;
use std::io::Write;

/// Output format for a result series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Table,
    Csv,
    Json,
}

#[derive(Serialize)]
struct Series<'a> {
    title: &'a str,
    results: &'a [ExperimentResult],
}

pub fn write_series<W: Write>(
    out: &mut W,
    title: &str,
    results: &[ExperimentResult],
    format: Format,
) -> Result<()> {
    match format {
        Format::Table => {
            writeln!(out, "{title}")?;
            writeln!(out, "{:>10}  {:>14}  {:>14}", "size", "mean (s)", "95% ci (s)")?;
            for r in results {
                writeln!(
                    out,
                    "{:>10}  {:>14.9}  ±{:>13.9}",
                    r.size, r.mean_time, r.confidence_half_width
                )?;
            }
        }
        Format::Csv => {
            writeln!(out, "size,mean_time,confidence_half_width")?;
            for r in results {
                writeln!(out, "{},{},{}", r.size, r.mean_time, r.confidence_half_width)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &Series { title, results })?;
            writeln!(out)?;
        }
    }
    Ok(())
}
