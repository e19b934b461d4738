// Interactive console surface for the registration demo.
//
// Responsibilities
// - Print the banners and prompts, read the registrant's answers, and hold the
//   program open for a final line of input before exit.
//
// Boundaries
// - Thin shell, excluded from coverage (see Cargo.toml scripts metadata):
//   everything observable is tested through the ConsoleSink adapters instead.
// - Only the line terminator is stripped from answers. No other trimming, no
//   validation: empty input is a legal registrant.

use std::io::{self, BufRead, Write};

use crate::core::registrant::Registrant;

pub fn print_welcome() {
    println!("Welcome to the registration console!");
}

/// Prompt for and read the registrant's name and email, in that order.
pub fn read_registrant() -> io::Result<Registrant> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let name = prompt_line(&mut input, "Please enter your name: ")?;
    let email = prompt_line(&mut input, "Please enter your email address: ")?;
    Ok(Registrant { name, email })
}

/// Print the farewell banner and hold the program open until the user sends
/// one more line, so the transcript stays on screen.
pub fn print_thanks_and_wait() -> io::Result<()> {
    println!("Thanks for registering!");
    let mut discard = String::new();
    io::stdin().lock().read_line(&mut discard)?;
    Ok(())
}

fn prompt_line(input: &mut impl BufRead, prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}
