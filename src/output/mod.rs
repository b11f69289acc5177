//! Terminal output styling for the tfid CLI

use owo_colors::OwoColorize;

/// Print the result header line
pub fn header(message: &str) {
    println!("{}", message.bright_white().bold());
}

/// Print one import ID format as a "- " bullet
pub fn bullet(text: &str) {
    // Brighter grey dash, softer pastel teal value: RGB(120, 180, 195)
    println!(
        "{} {}",
        "-".truecolor(160, 160, 160),
        text.truecolor(120, 180, 195)
    );
}

/// Print an error message with a red X
pub fn error(message: &str) {
    // Pastel coral/salmon: RGB(255, 160, 160)
    eprintln!(
        "{} {}",
        "✗".truecolor(255, 160, 160).bold(),
        message.bright_white()
    );
}

/// Print a warning message with a yellow warning symbol
pub fn warning(message: &str) {
    // Pastel cream/yellow: RGB(255, 230, 160)
    println!(
        "{} {}",
        "⚠".truecolor(255, 230, 160).bold(),
        message.bright_white()
    );
}
