use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path as FsPath, PathBuf};

use anstream::print;
use anstream::println;
use clap::Parser;
use clap::ValueEnum;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use reach::algorithms::unordered::UnorderedSearch;
use reach::config::OrderedFrontier;
use reach::config::SearchOrder;
use reach::problems::crossing;
use reach::problems::crossing::CrossingSpace;
use reach::problems::crossing::CrossingState;
use reach::space::Path;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Order {
    BreadthFirst,
    DepthFirst,
}

impl From<Order> for SearchOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::BreadthFirst => SearchOrder::BreadthFirst,
            Order::DepthFirst => SearchOrder::DepthFirst,
        }
    }
}

/// Solves the farmer, cabbage, goat and wolf river crossing.
#[derive(Parser, Debug)]
#[clap(long_version = reach::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_enum, default_value_t = Order::BreadthFirst)]
    pub order: Order,

    /// Stop after this many solutions.
    #[arg(long)]
    pub max_paths: Option<usize>,

    /// Org-mode report with the solutions found.
    #[arg(short, long, env = "REACH_LOGS")]
    pub output: Option<PathBuf>,

    /// Print search statistics.
    #[arg(long)]
    pub stats: bool,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn write_report<G>(
    output: &FsPath,
    order: SearchOrder,
    paths: &[Path<CrossingState>],
    search: &UnorderedSearch<&CrossingSpace, CrossingState, OrderedFrontier, G>,
) -> std::io::Result<()>
where
    G: FnMut(&CrossingState) -> bool,
{
    let file = File::create(output)?;
    let mut out = BufWriter::new(file);

    writeln!(out, ":PROPERTIES:")?;
    writeln!(out, ":VERSION: {:?}", reach::build::PKG_VERSION)?;
    writeln!(out, ":BUILD_IS_DEBUG: {}", shadow_rs::is_debug())?;
    writeln!(out, ":END:")?;
    writeln!(out, "#+title: River crossing")?;
    writeln!(
        out,
        "#+date: {}",
        chrono::Local::now().format("<%Y-%m-%d %a %H:%M>")
    )?;
    writeln!(out)?;
    writeln!(out, "* Search")?;
    writeln!(out, "- Order: {order}")?;
    writeln!(out, "- Solutions: {}", paths.len())?;
    for (i, path) in paths.iter().enumerate() {
        writeln!(out, "** Solution {i} ({} trips)", path.len())?;
        writeln!(out, "#+begin_src text\n#  {}\n{path}#+end_src", crossing::HEADER)?;
    }
    writeln!(out, "* Stats")?;
    writeln!(out, "#+begin_src text")?;
    search.write_memory_stats(&mut out)?;
    writeln!(out, "#+end_src")?;

    out.flush()
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    args.color.write_global();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let order = SearchOrder::from(args.order);
    let space = crossing::state_space();
    let mut search = space.search(crossing::goal, order);

    let paths: Vec<_> = search
        .by_ref()
        .take(args.max_paths.unwrap_or(usize::MAX))
        .collect();

    if paths.is_empty() {
        println!("{}", "No solution".red().bold());
    }
    for (i, path) in paths.iter().enumerate() {
        println!(
            "{} {i} ({} trips)",
            "Solution".green().bold(),
            path.len().yellow()
        );
        println!("#  {}", crossing::HEADER.bold());
        print!("{path}");
    }

    if args.stats {
        search.print_memory_stats();
    }
    if let Some(output) = &args.output {
        write_report(output, order, &paths, &search)?;
        println!("Report written to {:?}", output.yellow());
    }

    Ok(())
}
