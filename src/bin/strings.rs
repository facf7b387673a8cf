use std::process::ExitCode;

use anstream::eprintln;
use anstream::println;
use clap::Parser;
use owo_colors::OwoColorize;

use puzzles::problems::strings::StringsConfig;
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
    pub start: String,

    #[arg()]
    pub end: String,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.color.write_global();
    println!("Start: {}, End: {}", args.start, args.end);

    let config = match StringsConfig::new(&args.start, &args.end) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    let solution = solve(config);
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

    ExitCode::SUCCESS
}
