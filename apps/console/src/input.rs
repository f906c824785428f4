//! Line input helpers for the console shell.

use std::io::{self, Write};

/// Prompts and reads one trimmed line from stdin.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompts until the user enters a whole number.
pub fn prompt_i64(label: &str) -> io::Result<i64> {
    loop {
        let raw = prompt(label)?;
        match raw.parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}
