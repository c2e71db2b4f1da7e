//! Purpose: Micro-benchmark harness comparing operator cost across source shapes.
//! Role: Binary crate; emits machine-readable JSON on stdout and a table on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
//! Notes: Baselines are "good enough" for trend tracking, not lab-grade profiling.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use lockstep::api::{Error, ErrorKind, SeqExt, SeqStreamExt, to_exit_code};
use lockstep::stream::fold as stream_fold;

#[derive(Debug, Parser)]
#[command(
    name = "lockstep-bench",
    version,
    about = "Benchmark lockstep operators over vec, deque, and opaque sources"
)]
struct BenchCli {
    /// Source shapes to measure (vec|deque|opaque).
    #[arg(long, value_delimiter = ',', default_values_t = default_shapes())]
    shapes: Vec<String>,

    /// Element counts per source.
    #[arg(long, value_delimiter = ',', default_values_t = [10_000usize, 100_000])]
    lens: Vec<usize>,

    /// Repetitions per bench; durations are summed across reps.
    #[arg(long, default_value_t = 5)]
    reps: u32,

    /// Bucket size for the batch benches.
    #[arg(long, default_value_t = 64)]
    batch_size: usize,

    /// Output format (json|table|both).
    #[arg(long, default_value = "both")]
    format: String,

    /// Also write the JSON report to this path.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn default_shapes() -> Vec<String> {
    vec!["vec".to_string(), "deque".to_string(), "opaque".to_string()]
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Shape {
    Vec,
    Deque,
    Opaque,
}

impl Shape {
    fn parse(input: &str) -> Result<Self, Error> {
        match input.trim() {
            "vec" => Ok(Self::Vec),
            "deque" => Ok(Self::Deque),
            "opaque" => Ok(Self::Opaque),
            _ => Err(Error::new(ErrorKind::Usage)
                .with_message("invalid --shapes entry (use vec|deque|opaque)")),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Vec => "vec",
            Self::Deque => "deque",
            Self::Opaque => "opaque",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum BenchFormat {
    Json,
    Table,
    Both,
}

impl BenchFormat {
    fn parse(input: &str) -> Result<Self, Error> {
        match input.trim() {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            "both" => Ok(Self::Both),
            _ => Err(Error::new(ErrorKind::Usage)
                .with_message("invalid --format (use json|table|both)")),
        }
    }
}

#[derive(Debug, Serialize)]
struct BenchEntry {
    bench: String,
    shape: Shape,
    len: usize,
    reps: u32,
    duration_ms: f64,
    ns_per_elem: f64,
    checksum: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

#[derive(Debug, Serialize)]
struct SystemInfo {
    os: &'static str,
    arch: &'static str,
    cpus: usize,
}

#[derive(Debug, Serialize)]
struct Params {
    shapes: Vec<Shape>,
    lens: Vec<usize>,
    reps: u32,
    batch_size: usize,
    debug_build: bool,
}

#[derive(Debug, Serialize)]
struct BenchReport {
    name: &'static str,
    version: &'static str,
    ts: String,
    system: SystemInfo,
    params: Params,
    results: Vec<BenchEntry>,
}

/// Suppresses the size hint so operators see a source of unknown length.
struct Opaque<I>(I);

impl<I: Iterator> Iterator for Opaque<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

fn main() {
    let cli = BenchCli::parse();
    init_tracing();
    if let Err(err) = run(cli) {
        eprintln!("lockstep-bench: {err}");
        std::process::exit(to_exit_code(err.kind()));
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: BenchCli) -> Result<(), Error> {
    let start = SystemTime::now();
    let shapes = cli
        .shapes
        .iter()
        .map(|input| Shape::parse(input))
        .collect::<Result<Vec<_>, _>>()?;
    let format = BenchFormat::parse(&cli.format)?;
    if cli.batch_size == 0 {
        return Err(Error::new(ErrorKind::Usage).with_message("--batch-size must be non-zero"));
    }
    if cli.lens.iter().any(|len| *len == 0) {
        return Err(Error::new(ErrorKind::Usage).with_message("--lens entries must be non-zero"));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message("failed to build bench runtime")
                .with_source(err)
        })?;

    let mut results = Vec::new();
    for shape in &shapes {
        for len in &cli.lens {
            tracing::debug!(shape = shape.label(), len, "running bench set");
            run_shape_benches(
                *shape,
                *len,
                cli.reps,
                cli.batch_size,
                &runtime,
                &mut results,
            )?;
        }
    }

    let report = BenchReport {
        name: "lockstep",
        version: env!("CARGO_PKG_VERSION"),
        ts: rfc3339_now(start),
        system: SystemInfo {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            cpus: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        },
        params: Params {
            shapes,
            lens: cli.lens.clone(),
            reps: cli.reps,
            batch_size: cli.batch_size,
            debug_build: cfg!(debug_assertions),
        },
        results,
    };

    if let Some(path) = &cli.out {
        write_report_file(path, &report)?;
    }
    emit_report(&report, format)
}

fn run_shape_benches(
    shape: Shape,
    len: usize,
    reps: u32,
    batch_size: usize,
    runtime: &tokio::runtime::Runtime,
    results: &mut Vec<BenchEntry>,
) -> Result<(), Error> {
    let data: Vec<u64> = (0..len as u64).collect();
    match shape {
        Shape::Vec => collect_benches(
            shape,
            len,
            reps,
            batch_size,
            runtime,
            || data.clone().into_iter(),
            results,
        ),
        Shape::Deque => collect_benches(
            shape,
            len,
            reps,
            batch_size,
            runtime,
            || VecDeque::from(data.clone()).into_iter(),
            results,
        ),
        Shape::Opaque => collect_benches(
            shape,
            len,
            reps,
            batch_size,
            runtime,
            || Opaque(data.clone().into_iter()),
            results,
        ),
    }
}

fn collect_benches<I, M>(
    shape: Shape,
    len: usize,
    reps: u32,
    batch_size: usize,
    runtime: &tokio::runtime::Runtime,
    make: M,
    results: &mut Vec<BenchEntry>,
) -> Result<(), Error>
where
    I: Iterator<Item = u64>,
    M: Fn() -> I,
{
    let (dur, checksum) = time_reps(reps, || {
        let zipped = make().zip(make());
        let start = Instant::now();
        let mut sum = 0u64;
        for (a, b) in zipped {
            sum = sum.wrapping_add(a ^ b);
        }
        Ok((start.elapsed(), sum))
    })?;
    results.push(entry(
        "std_zip",
        shape,
        len,
        reps,
        dur,
        checksum,
        Some("std baseline"),
    ));

    let (dur, checksum) = time_reps(reps, || {
        let zipped = make().zip_shortest(make());
        let start = Instant::now();
        let mut sum = 0u64;
        for (a, b) in zipped {
            sum = sum.wrapping_add(a ^ b);
        }
        Ok((start.elapsed(), sum))
    })?;
    results.push(entry("zip_shortest", shape, len, reps, dur, checksum, None));

    let (dur, checksum) = time_reps(reps, || {
        let zipped = make().equi_zip(make());
        let start = Instant::now();
        let mut sum = 0u64;
        for pair in zipped {
            let (a, b) = pair?;
            sum = sum.wrapping_add(a.wrapping_mul(3) ^ b);
        }
        Ok((start.elapsed(), sum))
    })?;
    results.push(entry("equi_zip", shape, len, reps, dur, checksum, None));

    let (dur, checksum) = time_reps(reps, || {
        let batches = make().batch(batch_size);
        let start = Instant::now();
        let mut sum = 0u64;
        for bucket in batches {
            sum = sum
                .wrapping_add(bucket.len() as u64)
                .wrapping_add(bucket.first().copied().unwrap_or(0));
        }
        Ok((start.elapsed(), sum))
    })?;
    results.push(entry(
        "batch",
        shape,
        len,
        reps,
        dur,
        checksum,
        Some("bucket capacity follows the size hint"),
    ));

    let (dur, checksum) = time_reps(reps, || {
        let groups = make().group_adjacent(|value| value / 8);
        let start = Instant::now();
        let mut sum = 0u64;
        for (key, body) in groups {
            sum = sum.wrapping_add(key).wrapping_add(body.len() as u64);
        }
        Ok((start.elapsed(), sum))
    })?;
    results.push(entry(
        "group_adjacent",
        shape,
        len,
        reps,
        dur,
        checksum,
        None,
    ));

    let (dur, checksum) = time_reps(reps, || {
        let windows = make().batch(16);
        let start = Instant::now();
        let mut sum = 0u64;
        for window in windows {
            if window.len() == 16 {
                let folded = window
                    .into_iter()
                    .fold16(|a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p| {
                        a ^ b ^ c ^ d ^ e ^ f ^ g ^ h ^ i ^ j ^ k ^ l ^ m ^ n ^ o ^ p
                    })?;
                sum = sum.wrapping_add(folded);
            }
        }
        Ok((start.elapsed(), sum))
    })?;
    results.push(entry(
        "fold16",
        shape,
        len,
        reps,
        dur,
        checksum,
        Some("full 16-element windows only"),
    ));

    let (dur, checksum) = time_reps(reps, || {
        let mut zipped = tokio_stream::iter(make()).equi_zip(tokio_stream::iter(make()));
        runtime.block_on(async {
            let start = Instant::now();
            let mut sum = 0u64;
            while let Some(pair) = zipped.next_tuple().await {
                let (a, b) = pair?;
                sum = sum.wrapping_add(a ^ b);
            }
            Ok((start.elapsed(), sum))
        })
    })?;
    results.push(entry(
        "equi_zip_stream",
        shape,
        len,
        reps,
        dur,
        checksum,
        Some("current-thread runtime"),
    ));

    let (dur, checksum) = time_reps(reps, || {
        let mut batches = tokio_stream::iter(make()).batch(batch_size);
        runtime.block_on(async {
            let start = Instant::now();
            let mut sum = 0u64;
            while let Some(bucket) = batches.next_batch().await {
                sum = sum.wrapping_add(bucket.len() as u64);
            }
            Ok((start.elapsed(), sum))
        })
    })?;
    results.push(entry(
        "batch_stream",
        shape,
        len,
        reps,
        dur,
        checksum,
        Some("current-thread runtime"),
    ));

    let (dur, checksum) = time_reps(reps, || {
        let windows = make().batch(16);
        runtime.block_on(async {
            let start = Instant::now();
            let mut sum = 0u64;
            for window in windows {
                if window.len() == 16 {
                    let folded = stream_fold::fold16(
                        tokio_stream::iter(window),
                        |a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p| {
                            a ^ b ^ c ^ d ^ e ^ f ^ g ^ h ^ i ^ j ^ k ^ l ^ m ^ n ^ o ^ p
                        },
                    )
                    .await?;
                    sum = sum.wrapping_add(folded);
                }
            }
            Ok((start.elapsed(), sum))
        })
    })?;
    results.push(entry(
        "fold16_stream",
        shape,
        len,
        reps,
        dur,
        checksum,
        Some("full 16-element windows only"),
    ));

    Ok(())
}

fn time_reps(
    reps: u32,
    mut rep: impl FnMut() -> Result<(Duration, u64), Error>,
) -> Result<(Duration, u64), Error> {
    let mut total = Duration::ZERO;
    let mut checksum = 0u64;
    for _ in 0..reps {
        let (dur, sum) = rep()?;
        total += dur;
        checksum = checksum.wrapping_add(sum);
    }
    Ok((total, checksum))
}

fn entry(
    bench: &str,
    shape: Shape,
    len: usize,
    reps: u32,
    duration: Duration,
    checksum: u64,
    notes: Option<&str>,
) -> BenchEntry {
    let elems = (len.max(1) as u64) * u64::from(reps.max(1));
    BenchEntry {
        bench: bench.to_string(),
        shape,
        len,
        reps,
        duration_ms: duration.as_secs_f64() * 1000.0,
        ns_per_elem: duration.as_nanos() as f64 / elems as f64,
        checksum,
        notes: notes.map(|s| s.to_string()),
    }
}

fn emit_report(report: &BenchReport, format: BenchFormat) -> Result<(), Error> {
    let json = || {
        serde_json::to_string_pretty(report).map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message("report encode failed")
                .with_source(err)
        })
    };
    match format {
        BenchFormat::Json => {
            println!("{}", json()?);
            Ok(())
        }
        BenchFormat::Table => emit_table(report),
        BenchFormat::Both => {
            println!("{}", json()?);
            emit_table(report)
        }
    }
}

fn emit_table(report: &BenchReport) -> Result<(), Error> {
    let mut stderr = io::stderr().lock();
    let table_err = |err: io::Error| {
        Error::new(ErrorKind::Io)
            .with_message("failed to write bench table")
            .with_source(err)
    };

    writeln!(stderr, "lockstep bench (table)").map_err(table_err)?;
    writeln!(
        stderr,
        "{:>16}  {:>8}  {:>10}  {:>6}  {:>12}  {}",
        "bench", "shape", "len", "reps", "ns/elem", "notes"
    )
    .map_err(table_err)?;

    for item in &report.results {
        writeln!(
            stderr,
            "{:>16}  {:>8}  {:>10}  {:>6}  {:>12.1}  {}",
            item.bench,
            item.shape.label(),
            item.len,
            item.reps,
            item.ns_per_elem,
            item.notes.as_deref().unwrap_or(""),
        )
        .map_err(table_err)?;
    }

    Ok(())
}

fn write_report_file(path: &Path, report: &BenchReport) -> Result<(), Error> {
    let bytes = serde_json::to_vec_pretty(report).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("report encode failed")
            .with_source(err)
    })?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|err| {
                Error::new(ErrorKind::Io)
                    .with_message(format!("failed to create {}", parent.display()))
                    .with_source(err)
            })?;
        }
    }
    std::fs::write(path, bytes).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message(format!("failed to write report to {}", path.display()))
            .with_source(err)
    })
}

fn rfc3339_now(ts: SystemTime) -> String {
    let dur = ts.duration_since(UNIX_EPOCH).unwrap_or_default();
    let secs = dur.as_secs() as i64;
    let nsec = dur.subsec_nanos();
    let tm = time::OffsetDateTime::from_unix_timestamp(secs)
        .unwrap_or_else(|_| time::OffsetDateTime::UNIX_EPOCH);
    let tm = tm.replace_nanosecond(nsec).unwrap_or(tm);
    tm.format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}
