use anyhow::{ensure, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rathull::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

use report::{write_report, HullReport, RandomParams};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Exact rational convex hulls")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the hull of a built-in point set
    Demo {
        #[arg(long, value_enum, default_value_t = Scenario::Fractions)]
        scenario: Scenario,
    },
    /// Hull of a seeded random rational point set, as JSON
    Random {
        #[arg(long, default_value_t = 64)]
        count: usize,
        #[arg(long, default_value_t = 16)]
        bound: i64,
        #[arg(long, default_value_t = 8)]
        max_den: i64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Scenario {
    /// Five integer points, two of them interior
    Integers,
    /// Three points on a line
    Collinear,
    /// Fractional coordinates with one interior point
    Fractions,
    /// A repeated corner point
    Duplicates,
}

impl Scenario {
    fn points(self) -> Vec<Point2> {
        let ints = |c: &[(i64, i64)]| -> Vec<Point2> {
            c.iter().map(|&(x, y)| Point2::from_ints(x, y)).collect()
        };
        match self {
            Scenario::Integers => ints(&[(0, 0), (10, 0), (10, 10), (6, 5), (4, 1)]),
            Scenario::Collinear => ints(&[(0, 0), (1, 1), (2, 2)]),
            Scenario::Fractions => vec![
                Point2::new(Rational::new(0, 1), Rational::new(0, 1)),
                Point2::new(Rational::new(1, 1), Rational::new(0, 1)),
                Point2::new(Rational::new(1, 1), Rational::new(1, 1)),
                Point2::new(Rational::new(1, 2), Rational::new(1, 4)),
            ],
            Scenario::Duplicates => ints(&[(0, 0), (0, 0), (1, 0), (0, 1)]),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo { scenario } => demo(scenario),
        Action::Random {
            count,
            bound,
            max_den,
            seed,
            index,
            out,
        } => random(
            RandomParams {
                count,
                bound,
                max_den,
                seed,
                index,
            },
            out,
        ),
    }
}

fn demo(scenario: Scenario) -> Result<()> {
    let points = scenario.points();
    tracing::info!(?scenario, input_len = points.len(), "demo");
    let hull = convex_hull(&points);
    println!("No. of points in hull: {}", hull.len());
    for p in &hull {
        println!("{p}");
    }
    Ok(())
}

fn random(params: RandomParams, out: Option<String>) -> Result<()> {
    ensure!(params.bound >= 1, "--bound must be at least 1");
    ensure!(params.max_den >= 1, "--max-den must be at least 1");
    let cfg = GridCfg {
        count: params.count,
        bound: params.bound,
        max_den: params.max_den,
    };
    ensure!(
        cfg.fits_exact_range(),
        "--bound {} with --max-den {} can overflow i64 inside orientation tests",
        params.bound,
        params.max_den
    );
    let input = draw_points(cfg, ReplayToken::new(params.seed, params.index));
    let hull = convex_hull(&input);
    tracing::info!(
        input_len = input.len(),
        hull_len = hull.len(),
        seed = params.seed,
        index = params.index,
        "random"
    );
    let report = HullReport::new(params, &input, &hull);
    match out {
        Some(path) => {
            write_report(&path, &report)?;
            tracing::info!(out = path.as_str(), "wrote report");
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
