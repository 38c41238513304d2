//! The interactive read-execute-print loop.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use wayfarer_engine::{ParserConfig, execute, parse, render_location};

pub fn run(script: &[String]) -> Result<(), String> {
    let mut state = crate::world::demo_world().map_err(|e| e.to_string())?;
    let config = ParserConfig::default();

    if !script.is_empty() {
        for input in script {
            println!("> {input}");
            let result = execute(parse(input, &config), &mut state);
            super::print_result(&result);
            if result.quit {
                break;
            }
        }
        return Ok(());
    }

    println!("{}", "Wayfarer".bold());
    println!("Type 'look' to look around, 'quit' to leave.\n");
    println!("{}\n", render_location(&state));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let result = execute(parse(input, &config), &mut state);
        super::print_result(&result);
        if result.quit {
            break;
        }
    }

    Ok(())
}
