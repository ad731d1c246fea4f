use colored::*;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 48;

/// Widest representation label, `dotted-quad`.
const KEY_WIDTH: usize = 11;

pub fn header(msg: &str) {
    let formatted = format!("⟦ {} ⟧", msg);
    let width = console::measure_text_width(&formatted);

    let dash_count = TOTAL_WIDTH.saturating_sub(width);
    let left = dash_count / 2;
    let right = dash_count - left;

    let line = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    );
    println!("{}", line.bright_black());
}

pub fn aligned_line(key: &str, value: &str) {
    let dots = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    println!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.color(colors::TEXT_DEFAULT)
    );
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    println!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    );
}
