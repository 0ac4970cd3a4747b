use ball_solitaire::engine::{Board, Cell, BOARD_SIZE};
use ball_solitaire::session::Session;
use std::io::{self, Write};

fn print_help() {
    println!();
    println!("+=== *BALL SOLITAIRE* ===+");
    println!("Kick a ball so it leapfrogs an adjacent ball into an empty");
    println!("square two spaces away; the jumped ball disappears. Keep");
    println!("removing balls until only one remains.");
    println!();
    println!("Commands:");
    println!("  help   - prints this guide");
    println!("  reset  - restarts the game");
    println!("  quit   - exits the game");
    println!();
    println!("Game input format: [c][r] [d]");
    println!("  [c] - column of the ball to kick (A-D)");
    println!("  [r] - row of the ball to kick (1-4)");
    println!("  [d] - direction to kick: u, d, l or r");
    println!();
    println!("Examples:");
    println!("  a1 r   [kick to right]");
    println!("  c4 u   [kick upward]");
    println!("  b2 d   [kick downward]");
    println!("  d3 l   [kick to left]");
    println!();
}

/// Draws the board the way the session's user addresses it: columns A-D,
/// rows 1-4, 'O' for a ball and a blank for an empty square. The core stays
/// agnostic to these glyphs; everything here goes through `Board::get`.
fn render_board(board: &Board) -> String {
    let mut output = String::new();
    output.push_str("    A B C D  \n");
    output.push_str("  + - - - - +\n");
    for row in 0..BOARD_SIZE {
        output.push_str(&format!("{} |", row + 1));
        for col in 0..BOARD_SIZE {
            let glyph = match board.get(row, col) {
                Cell::Ball => 'O',
                Cell::Empty => ' ',
            };
            output.push(' ');
            output.push(glyph);
        }
        output.push_str(" |\n");
    }
    output.push_str("  + - - - - +");
    output
}

fn main() {
    let mut session = Session::new();

    print_help();
    println!(" === GAME START ===");

    while !session.is_won() {
        println!();
        println!("{}", render_board(session.board()));

        print!("Input: ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }
        let trimmed = input.trim();

        match trimmed.to_lowercase().as_str() {
            "quit" | "exit" | "stop" => {
                println!("Thanks for playing!");
                return;
            }
            "reset" => {
                session.reset();
                println!();
                println!(" === GAME START ===");
            }
            "help" => print_help(),
            _ => {
                if let Err(error) = session.apply_command(trimmed) {
                    println!("{}", error);
                }
            }
        }
    }

    println!();
    println!("{}", render_board(session.board()));
    println!();
    println!("=== YOU SOLVED THE PUZZLE! ===");
    println!();
    println!("Your move sequence:");
    for mv in session.moves() {
        println!("{}", mv);
    }
}
