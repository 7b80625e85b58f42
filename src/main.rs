use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use morris::{tree, Traversal, TraversalConfig, TraversalReport, Tree};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "morris", about = "In-order traversal of binary trees in O(1) extra space")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Traverse the built-in sample tree (1 / (2 / 4, 5), 3).
    Demo,
    /// Traverse a tree given in level order, e.g. "1,2,3,null,5".
    Traverse {
        /// Breadth-first values; `null`, `#` or `_` mark missing nodes.
        #[arg(allow_hyphen_values = true)]
        level_order: String,
        /// Print thread accounting after the sequence.
        #[arg(long)]
        stats: bool,
        /// Cross-check against a stack-based traversal and verify links were restored.
        #[arg(long)]
        check: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo => run_demo()?,
        Commands::Traverse {
            level_order,
            stats,
            check,
        } => run_traverse(&level_order, stats, check)?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo() -> Result<()> {
    let mut tree = tree::sample();
    let mut values = Vec::new();
    Traversal::default()
        .run(&mut tree, &mut values)
        .context("traversal of sample tree failed")?;

    println!("{}", demo_line(&values));
    Ok(())
}

fn demo_line(values: &[i64]) -> String {
    format!("Morris In-order Traversal: {}", join(values))
}

fn run_traverse(level_order: &str, stats: bool, check: bool) -> Result<()> {
    let mut tree: Tree<i64> = level_order
        .parse()
        .with_context(|| format!("invalid level-order tree '{}'", level_order))?;

    let traversal = Traversal::new(TraversalConfig {
        verify_restoration: check,
        profile: stats,
    });

    let (values, report) = if check {
        traversal.check(&mut tree).context("verification failed")?
    } else {
        let mut values = Vec::new();
        let report = traversal
            .run(&mut tree, &mut values)
            .context("traversal failed")?;
        (values, report)
    };

    println!("{}", join(&values));
    if check {
        println!("check: ok");
    }
    if stats {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &TraversalReport) {
    match &report.profile {
        Some(profile) => println!("{}", profile.report()),
        None => println!("{:?}", report.stats),
    }
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
