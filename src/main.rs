// decal: C declaration column aligner

mod align;
mod buffer;
mod decl;
mod ui;

use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use buffer::Buffer;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("decal");

    if args.len() != 2 && args.len() != 4 {
        eprintln!("Error: expected a file, optionally followed by a line range");
        eprintln!();
        eprintln!("Usage: {} <file.c> [<first-line> <last-line>]", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!(
            "  {} demos/declarations.c          # Pick ranges interactively",
            program_name
        );
        eprintln!(
            "  {} demos/declarations.c 3 7      # Align lines 3-7, print to stdout",
            program_name
        );
        std::process::exit(1);
    }

    let file = &args[1];
    if !Path::new(file).exists() {
        eprintln!("Error: File '{}' not found", file);
        eprintln!(
            "Usage: {} <file.c> [<first-line> <last-line>]",
            program_name
        );
        std::process::exit(1);
    }

    let buffer = Buffer::load(file)?;

    if args.len() == 4 {
        run_batch(buffer, &args[2], &args[3]);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(buffer);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Align one 1-based inclusive line range and print the whole file to stdout
fn run_batch(mut buffer: Buffer, start_arg: &str, end_arg: &str) {
    let start = parse_line_number(start_arg);
    let end = parse_line_number(end_arg);

    if start > end || end > buffer.len() {
        eprintln!(
            "Error: invalid range {}-{} for a {}-line file",
            start,
            end,
            buffer.len()
        );
        std::process::exit(1);
    }

    if let Err(e) = buffer.align_range(start - 1, end - 1) {
        let align::AlignError::MalformedLine { line_number, cause } = e;
        eprintln!("Error: line {}: {}", start + line_number - 1, cause);
        std::process::exit(1);
    }

    for line in buffer.lines() {
        println!("{}", line);
    }
}

fn parse_line_number(arg: &str) -> usize {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Error: '{}' is not a valid line number", arg);
            std::process::exit(1);
        }
    }
}
