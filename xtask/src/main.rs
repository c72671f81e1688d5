use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "cartograph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion benchmarks and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Baseline name results are saved under
        #[arg(long, default_value = "current")]
        baseline: String,

        /// Earlier baseline to compare against in the report
        #[arg(long)]
        compare: Option<String>,

        /// Only run these bench targets (defaults to all)
        #[arg(long = "target", value_name = "BENCH")]
        targets: Vec<String>,
    },
}

const BENCH_TARGETS: &[&str] = &[
    "graph_benchmark",
    "partition_benchmark",
    "priority_queue_benchmark",
];

const CRITERION_DIR: &str = "target/criterion";
const REPORT_PATH: &str = "benchmark_results/report.md";

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// workload ("group/function") -> baseline -> mean time in ns
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            baseline,
            compare,
            targets,
        } => {
            if !report_only {
                let targets = select_targets(&targets)?;
                run_benchmarks(&targets, &baseline, quick)?;
            }
            generate_report(&baseline, compare.as_deref())?;
        }
    }

    Ok(())
}

fn select_targets(requested: &[String]) -> Result<Vec<&'static str>> {
    if requested.is_empty() {
        return Ok(BENCH_TARGETS.to_vec());
    }
    requested
        .iter()
        .map(|name| {
            BENCH_TARGETS
                .iter()
                .copied()
                .find(|t| *t == name.as_str())
                .with_context(|| format!("unknown bench target `{name}` (known: {BENCH_TARGETS:?})"))
        })
        .collect()
}

fn run_benchmarks(targets: &[&str], baseline: &str, quick: bool) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["bench", "--no-run"])
        .status()
        .context("failed to spawn cargo")?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    for &target in targets {
        println!("\n>>> Running {target} (baseline `{baseline}`)");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.args(["bench", "--bench", target]);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(baseline);

        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench {target}"))?;

        if status.success() {
            println!("Finished {target} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: benchmark {target} failed");
        }
    }

    Ok(())
}

fn generate_report(baseline: &str, compare: Option<&str>) -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new(CRITERION_DIR);
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    let report_path = PathBuf::from(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&report_path)
        .with_context(|| format!("cannot create {}", report_path.display()))?;

    writeln!(file, "# Benchmark Report")?;
    writeln!(file)?;
    match compare {
        Some(old) => {
            writeln!(file, "| Workload | {baseline} (mean) | Ops/s | {old} (mean) | Speedup |")?;
            writeln!(file, "|---|---|---|---|---|")?;
        }
        None => {
            writeln!(file, "| Workload | {baseline} (mean) | Ops/s |")?;
            writeln!(file, "|---|---|---|")?;
        }
    }

    for (workload, baselines) in &results {
        let Some(&time_ns) = baselines.get(baseline) else {
            continue;
        };
        write!(
            file,
            "| {workload} | {} | {} |",
            format_time(time_ns),
            format_ops(1e9 / time_ns)
        )?;
        if let Some(old) = compare {
            match baselines.get(old) {
                Some(&old_ns) => write!(file, " {} | **{:.2}x** |", format_time(old_ns), old_ns / time_ns)?,
                None => write!(file, " N/A | - |")?,
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns >= 1e6 {
        format!("{:.2} ms", ns / 1e6)
    } else if ns >= 1e3 {
        format!("{:.2} µs", ns / 1e3)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks `target/criterion`, where each run leaves
/// `<group>/<function>/<baseline>/estimates.json`.
fn collect_results(root: &Path, dir: &Path, results: &mut Results) -> Result<()> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Ok(());
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        let Some(workload_dir) = baseline_dir.parent() else {
            continue;
        };
        let baseline = baseline_dir
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        // "new" and "change" are criterion scratch directories.
        if matches!(baseline.as_str(), "report" | "new" | "change") {
            continue;
        }
        let workload = workload_dir
            .strip_prefix(root)
            .unwrap_or(workload_dir)
            .to_string_lossy()
            .replace('\\', "/");

        let content = fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let estimates: Estimates = serde_json::from_str(&content)
            .with_context(|| format!("malformed {}", path.display()))?;
        if estimates.mean.point_estimate > 0.0 {
            results
                .entry(workload)
                .or_default()
                .insert(baseline, estimates.mean.point_estimate);
        }
    }
    Ok(())
}
