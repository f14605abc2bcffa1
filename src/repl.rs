//! The interactive read-evaluate-print loop.
//!
//! Single-threaded and synchronous: the loop blocks on stdin between
//! commands, so the book has exactly one writer and needs no locking.

use crate::book::AddressBook;
use crate::commands::{execute, parse_input};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the prompt loop until `exit`/`close` or end of input.
///
/// Mutates the book in place; the caller persists it afterwards.
pub fn run(book: &mut AddressBook, window_days: u64) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    println!("Welcome to the assistant bot!");

    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input counts as a clean shutdown
            info!("Input stream closed");
            println!("Good bye!");
            return Ok(());
        }

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };

        match command.as_str() {
            "exit" | "close" => {
                println!("Good bye!");
                return Ok(());
            }
            "hello" => println!("How can I help you?"),
            _ => println!("{}", execute(&command, &args, book, window_days)),
        }
    }
}
