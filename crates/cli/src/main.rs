use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use planimetry::{ContainmentCfg, HeronMode, Point, Shape, DEFAULT_AREA_EPS};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod selfcheck;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Areas and point containment for 2D shapes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print area, side count and edge-count check of a shape (JSON file)
    Area {
        #[arg(long)]
        shape: PathBuf,
    },
    /// Decide whether a point lies inside a shape (rectangles only)
    Contains {
        #[arg(long)]
        shape: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        /// Area tolerance; absolute unless --relative
        #[arg(long, default_value_t = DEFAULT_AREA_EPS)]
        eps: f64,
        /// Interpret --eps as a fraction of the shape's area
        #[arg(long)]
        relative: bool,
        /// Keep negative Heron radicands (NaN sub-areas) instead of clamping to zero
        #[arg(long)]
        unguarded: bool,
    },
    /// Run the built-in rectangle scenarios and print pass/fail lines
    Selfcheck,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Area { shape } => area(shape),
        Action::Contains {
            shape,
            x,
            y,
            eps,
            relative,
            unguarded,
        } => {
            let cfg = if relative {
                ContainmentCfg::relative(eps)
            } else {
                ContainmentCfg::absolute(eps)
            };
            let heron = if unguarded {
                HeronMode::Unguarded
            } else {
                HeronMode::Clamped
            };
            contains(shape, Point::new(x, y), cfg.with_heron(heron))
        }
        Action::Selfcheck => selfcheck(),
    }
}

fn summary(shape: &Shape) -> serde_json::Value {
    serde_json::json!({
        "kind": shape.kind().as_str(),
        "area": shape.area(),
        "side_count": shape.side_count(),
        "structurally_valid": shape.is_structurally_valid(),
    })
}

fn area(path: PathBuf) -> Result<()> {
    tracing::info!(shape = %path.display(), "area");
    let shape = input::load_shape(&path)?;
    println!("{}", serde_json::to_string_pretty(&summary(&shape))?);
    Ok(())
}

fn contains(path: PathBuf, point: Point, cfg: ContainmentCfg) -> Result<()> {
    tracing::info!(shape = %path.display(), x = point.x(), y = point.y(), cfg = ?cfg, "contains");
    let shape = input::load_shape(&path)?;
    let contained = shape.contains_point(point, &cfg);
    if contained.is_none() {
        tracing::warn!(kind = %shape.kind(), "shape has no containment test");
    }
    let mut obj = summary(&shape);
    obj["point"] = serde_json::json!([point.x(), point.y()]);
    obj["contained"] = serde_json::json!(contained);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn selfcheck() -> Result<()> {
    tracing::info!("selfcheck");
    let outcomes = selfcheck::run()?;
    for o in &outcomes {
        println!("{}", o.line());
    }
    let failed = outcomes.iter().filter(|o| !o.passed).count();
    if failed > 0 {
        bail!("{failed} of {} scenarios failed", outcomes.len());
    }
    Ok(())
}
