use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rotrect::prelude::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod args;
mod provenance;
mod report;
mod table;

use args::{parse_irect, parse_point, parse_rect};
use provenance::Payload;
use report::{PairRow, RectReport};

#[derive(Parser)]
#[command(name = "rotrect-cli")]
#[command(about = "Oriented-rectangle queries, sampling and batch evaluation")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Max log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value_t = tracing::Level::INFO)]
    log_level: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print corners, center, bounds and query results for one rectangle
    Query {
        /// Rectangle as x,y,w,h[,angle[,ox,oy]]
        #[arg(long, allow_hyphen_values = true, value_parser = parse_rect)]
        rect: OrientedRect,
        /// Second rectangle for intersects/contains
        #[arg(long, allow_hyphen_values = true, value_parser = parse_rect)]
        other: Option<OrientedRect>,
        /// Point as x,y for contains_point
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        point: Option<Vec2<f32>>,
        /// Integer rectangle as x,y,w,h for intersects_rect/contains_rect
        #[arg(long, allow_hyphen_values = true, value_parser = parse_irect)]
        aabb_rect: Option<IRect>,
    },
    /// Write a table of random rectangle pairs (.parquet or CSV)
    Sample {
        #[arg(long, default_value_t = 1000)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Positions are drawn from [-extent, extent]
        #[arg(long, default_value_t = RectCfg::default().extent)]
        extent: f32,
        /// Keep every rectangle axis-aligned
        #[arg(long)]
        no_rotate: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Evaluate intersects/contains for every pair in a table
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Query {
            rect,
            other,
            point,
            aabb_rect,
        } => query(rect, other, point, aabb_rect),
        Action::Sample {
            count,
            seed,
            extent,
            no_rotate,
            out,
        } => {
            let cfg = RectCfg {
                extent,
                rotate: !no_rotate,
                ..RectCfg::default()
            };
            sample(cfg, count, seed, &out, cmd.tag)
        }
        Action::Batch { input, out } => batch(&input, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn query(
    rect: OrientedRect,
    other: Option<OrientedRect>,
    point: Option<Vec2<f32>>,
    aabb_rect: Option<IRect>,
) -> Result<()> {
    tracing::debug!(?rect, "query");
    let mut out = RectReport::describe(&rect);
    if let Some(p) = point {
        out = out.with_point(&rect, p);
    }
    if let Some(o) = other {
        out = out.with_other(&rect, &o);
    }
    if let Some(r) = aabb_rect {
        out = out.with_irect(&rect, r);
    }
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn sample(cfg: RectCfg, count: u64, seed: u64, out: &Path, tag: Option<String>) -> Result<()> {
    cfg.validate()?;
    tracing::info!(count, seed, out = %out.display(), tag = ?tag, "sample");
    let pairs: Vec<_> = (0..count)
        .map(|index| draw_pair(cfg, ReplayToken { seed, index }))
        .collect();
    table::write_pairs(out, &pairs)?;

    let params = json!({
        "count": count,
        "seed": seed,
        "extent": cfg.extent,
        "size_min": cfg.size_min,
        "size_max": cfg.size_max,
        "rotate": cfg.rotate,
        "centered_origin": cfg.centered_origin,
        "pair_spread": cfg.pair_spread,
    });
    let sidecar = provenance::write_sidecar(out, Payload::new("sample", params).tagged(tag))?;
    tracing::info!(sidecar = %sidecar.display(), "sample_done");
    Ok(())
}

/// Evaluate every pair of the table at `input`.
fn evaluate(input: &Path) -> Result<Vec<PairRow>> {
    let pairs = table::read_pairs(input)?;
    Ok(pairs
        .iter()
        .enumerate()
        .map(|(row, (a, b))| PairRow::evaluate(row, a, b))
        .collect())
}

fn batch(input: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "batch");
    let rows = evaluate(input)?;
    let hits = rows.iter().filter(|r| r.intersects).count();
    let nested = rows
        .iter()
        .filter(|r| r.a_contains_b || r.b_contains_a)
        .count();
    tracing::info!(rows = rows.len(), hits, nested, "batch_counts");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = json!({
        "input": input.to_string_lossy(),
        "rows": rows.len(),
        "intersecting": hits,
        "nested": nested,
    });
    provenance::write_sidecar(out, Payload::new("batch", params).tagged(tag))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let mut obj = provenance::header(tag.as_deref());
    obj["params"] = json!({});
    obj["outputs"] = json!([]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
