//! mazer: solve grid mazes from text files.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use wayfind_maze::Maze;

#[derive(Parser)]
#[command(name = "mazer")]
#[command(version, about = "Solve grid mazes with best-first search")]
struct Cli {
    /// Maze text files: '#' walls, spaces, one 'S' start, one 'F' finish.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Also print per-cell distances from the start.
    #[arg(short, long)]
    dists: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    for file in &cli.files {
        log::info!("processing {}", file.display());
        let text = fs::read_to_string(file)?;
        let maze = Maze::parse(&text)?;

        println!("{}:", file.display());
        println!("{maze}");
        println!();

        let solution = maze.solve()?;
        match solution.path() {
            Some(path) => {
                println!("{}", maze.render(path));
                println!();
                println!("shortest path: {} steps", path.len() - 1);
            }
            None => {
                println!("no path from {} to {}", maze.start(), maze.finish());
            }
        }

        if cli.dists {
            let all = maze.solve_all()?;
            println!();
            println!("distances from {}:", maze.start());
            print!("{}", maze.render_dists(&all));
        }
        println!();
    }

    Ok(())
}
