use std::{
    fs::File,
    io,
    io::prelude::*,
};

use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use amaze::{
    cells::Direction,
    config::MazeConfig,
    errors::*,
    grid_displays::PositionDisplay,
    grid_traits::MazeView,
    maze::Maze,
    session::{MazeSession, MoveOutcome},
};

const USAGE: &str = "Amaze

Usage:
    amaze_driver -h | --help
    amaze_driver [--rows=<n>] [--columns=<n>] [--central-square=<k>] [--seed=<n>] [--moves=<dirs>] [--save-edges=<path>] [--quiet]

Options:
    -h --help               Show this screen.
    --rows=<n>              Number of cells from West to East [default: 32].
    --columns=<n>           Number of cells from South to North [default: 32].
    --central-square=<k>    Start the maze from an open k*k room in the middle of the grid, 0 for none [default: 5].
    --seed=<n>              Seed for the random walks. A random seed is chosen and logged if not given.
    --moves=<dirs>          Walk through the maze from the entrance, one letter per move out of N, S, E and W. Reports each outcome.
    --save-edges=<path>     Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
    --quiet                 Do not print the maze.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: usize,
    flag_columns: usize,
    flag_central_square: usize,
    flag_seed: Option<u64>,
    flag_moves: String,
    flag_save_edges: String,
    flag_quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let config = MazeConfig::new(args.flag_rows, args.flag_columns)
        .with_central_square(args.flag_central_square);
    let seed = args.flag_seed.unwrap_or_else(rand::random);
    info!("Building {} x {} maze with seed {}", config.rows, config.columns, seed);

    let mut session = MazeSession::from_seed(config, seed)
        .chain_err(|| format!("Cannot build a maze from {:?}", config))?;

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(session.maze(), &args.flag_save_edges)?;
    }

    if !args.flag_quiet {
        println!("{}", session.maze());
    }

    if !args.flag_moves.is_empty() {
        let moves = parse_moves(&args.flag_moves)?;
        for direction in moves {
            let outcome = session.try_move(direction);
            match outcome {
                MoveOutcome::Blocked => println!("{:?}: blocked at {}", direction, session.position()),
                MoveOutcome::Moved(cell) => println!("{:?}: moved to {}", direction, cell),
                MoveOutcome::Escaped => println!("{:?}: escaped, a new maze awaits", direction),
            }
        }

        if !args.flag_quiet {
            let position = PositionDisplay::new(session.maze(), session.position());
            println!("{}", session.maze().display_with(&position));
        }
    }

    Ok(())
}

fn parse_moves(letters: &str) -> Result<Vec<Direction>> {
    letters.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            Direction::from_letter(c)
                .ok_or_else(|| Error::from(format!("Unknown move '{}', expected one of NSEW", c)))
        })
        .collect()
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze: &Maze, file_path: &str) -> Result<()> {

    let dimensions = maze.dimensions();
    let mut graph_data = String::new();
    graph_data.push_str(&format!("{} {}\n", dimensions.size().0, maze.passages_count().0));

    for (src, dst) in maze.passages() {
        let index_a = dimensions
            .linear_index(src)
            .expect("Passages iter should give valid cells");
        let index_b = dimensions
            .linear_index(dst)
            .expect("Passages iter should give valid cells");
        graph_data.push_str(&format!("{} {}\n", index_a + 1, index_b + 1));
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    Ok(())
}
