#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use csv::Writer;
use log::LevelFilter;
use netdesign::{
    dataset, LinkReport, MultiCommodityLp, NetworkDesigner, SubtourElimination, TopologySearch,
    TreeMilp,
};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Spanning tree grown until every demand can be routed
    Search,
    /// Cheapest connected N-1 edge selection via component cuts
    Tree,
}

/// Design a minimum-cost campus network over the built-in data set
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(long, value_enum, default_value_t = Mode::Search)]
    mode: Mode,

    /// Upper bound on the capacity of each link (Gbps)
    #[arg(long)]
    link_capacity: Option<f64>,

    /// Upper bound on the total capacity of all links (Gbps)
    #[arg(long)]
    capacity_budget: Option<f64>,

    /// Give up after this many solver calls
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Write the link table here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// Function to write the link table
fn write_csv(links: &[LinkReport], output: Option<&PathBuf>) -> Result<(), Box<dyn Error>> {
    let sink: Box<dyn io::Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut wtr = Writer::from_writer(sink);
    for link in links {
        wtr.serialize(link)?;
    }
    wtr.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    let model = dataset::campus()?;
    log::info!("Total traffic = {} Gbps", model.total_demand());
    log::info!("  Commodities = {}", model.commodities().len());

    let links = match cli.mode {
        Mode::Search => {
            let mut lp = MultiCommodityLp::new();
            if let Some(limit) = cli.link_capacity {
                lp = lp.with_link_capacity(limit)?;
            }
            if let Some(budget) = cli.capacity_budget {
                lp = lp.with_capacity_budget(budget)?;
            }
            let mut search = TopologySearch::new(lp);
            if let Some(limit) = cli.max_iterations {
                search = search.with_iteration_limit(limit);
            }
            let topology = search.run(&model)?;
            search.check(&model, &topology)?;
            log::info!("    Connected = {}", topology.is_connected());
            topology.links(&model)
        }
        Mode::Tree => {
            let mut subtour = SubtourElimination::new(TreeMilp);
            if let Some(limit) = cli.max_iterations {
                subtour = subtour.with_round_limit(limit);
            }
            let selection = subtour.run(&model)?;
            subtour.check(&model, &selection)?;
            selection.links(&model)
        }
    };

    write_csv(&links, cli.output.as_ref())
}
