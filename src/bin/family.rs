use anstream::println;
use clap::Parser;
use clap::ValueEnum;
use hrsw::Stopwatch;
use human_duration::human_duration;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use reach::config::CostOrder;
use reach::problems::family;
use reach::problems::family::CostProfile;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Profile {
    /// Fewest transitions first.
    Depth,
    /// Son 1 makes more noise while waiting.
    #[value(name = "son1-first")]
    Son1First,
    /// Son 2 makes more noise while waiting.
    #[value(name = "son2-first")]
    Son2First,
    /// Every profile, one after the other.
    All,
}

impl Profile {
    fn cost_profiles(self) -> Vec<CostProfile> {
        match self {
            Profile::Depth => vec![CostProfile::Depth],
            Profile::Son1First => vec![CostProfile::Son1First],
            Profile::Son2First => vec![CostProfile::Son2First],
            Profile::All => CostProfile::ALL.to_vec(),
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Order {
    Ascending,
    Descending,
}

impl From<Order> for CostOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Ascending => CostOrder::Ascending,
            Order::Descending => CostOrder::Descending,
        }
    }
}

/// Solves the Japanese family river crossing.
#[derive(Parser, Debug)]
#[clap(long_version = reach::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_enum, default_value_t = Profile::All)]
    pub profile: Profile,

    #[arg(long, value_enum, default_value_t = Order::Ascending)]
    pub order: Order,

    /// Stop after this many solutions per profile.
    #[arg(long)]
    pub max_paths: Option<usize>,

    /// Print search statistics.
    #[arg(long)]
    pub stats: bool,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn main() {
    let args = Args::parse();
    args.color.write_global();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let order = CostOrder::from(args.order);
    for profile in args.profile.cost_profiles() {
        println!(
            "-- Solve using {} as a cost ({order}) --",
            profile.to_string().cyan()
        );

        let mut stopwatch = Stopwatch::new_started();
        let space = family::state_space(profile).with_order(order);
        let mut search = space.search(family::goal);

        let mut solutions = 0usize;
        while solutions < args.max_paths.unwrap_or(usize::MAX) {
            let Some((path, cost)) = search.find_next_goal_with_cost() else {
                break;
            };
            solutions += 1;
            println!(
                "{} ({} transitions, {cost}):",
                "Solution".green().bold(),
                path.len().yellow()
            );
            println!("{}", family::HEADER.bold());
            for state in &path {
                println!("{state}");
            }
        }
        stopwatch.stop();

        if solutions == 0 {
            println!("{}", "No solution".red().bold());
        }
        println!(
            "Found {solutions} solutions in {}",
            human_duration(&stopwatch.elapsed()).yellow()
        );
        if args.stats {
            search.print_memory_stats();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_every_solution_by_default() {
        let args = Args::try_parse_from(["family"]).unwrap();
        assert_eq!(args.max_paths, None);
        assert!(matches!(args.profile, Profile::All));

        let args = Args::try_parse_from(["family", "--max-paths", "2"]).unwrap();
        assert_eq!(args.max_paths, Some(2));
    }
}
