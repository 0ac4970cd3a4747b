use ball_solitaire::engine::Board;
use ball_solitaire::solver::solve_bfs;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Row of the initially empty cell (0-3)
    #[clap(short, long, default_value_t = 0)]
    row: usize,

    /// Column of the initially empty cell (0-3)
    #[clap(short, long, default_value_t = 2)]
    col: usize,

    /// Print the first N solution sequences after the count
    #[clap(short, long)]
    show: Option<usize>,

    /// Suppress periodic progress output
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let board = Board::new(args.row, args.col).unwrap_or_else(|error| {
        eprintln!("Invalid start cell: {}", error);
        std::process::exit(1);
    });

    println!(
        "Enumerating every full solution with the empty cell at ({}, {})...\n",
        args.row, args.col
    );

    let quiet = args.quiet;
    let solutions = solve_bfs(&board, |progress| {
        if !quiet {
            println!(
                "{} states in frontier, {} solutions found ({} states expanded)",
                progress.frontier, progress.solutions, progress.expanded
            );
        }
    });

    println!("\nThere are {} solutions.", solutions.len());

    if let Some(show) = args.show {
        for (i, solution) in solutions.iter().take(show).enumerate() {
            let sequence: Vec<String> = solution.moves.iter().map(|mv| mv.to_string()).collect();
            println!("Solution {}: {}", i + 1, sequence.join(", "));
        }
    }
}
