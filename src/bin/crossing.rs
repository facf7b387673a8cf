use anstream::println;
use clap::Parser;
use owo_colors::OwoColorize;

use puzzles::problems::crossing::CrossingConfig;
use puzzles::solver::solve;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(long_version = puzzles::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg()]
    pub pups: u32,

    #[arg()]
    pub wolves: u32,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn main() {
    let args = Args::parse();
    args.color.write_global();
    println!("Pups: {}, Wolves: {}", args.pups, args.wolves);

    let solution = solve(CrossingConfig::new(args.pups, args.wolves));
    println!("Total configs: {}", solution.stats.total);
    println!("Unique configs: {}", solution.stats.unique);

    if solution.is_unsolvable() {
        println!("{}", "No solution found!".red());
    } else if solution.already_solved() {
        println!("{}", "Already solved!".green());
    } else {
        for (i, config) in solution.path.iter().enumerate() {
            println!("Step {i}: {config}");
        }
    }
}
