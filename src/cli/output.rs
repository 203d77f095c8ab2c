//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, Cell, Position};

/// Create a progress bar over a known number of positions
pub fn create_position_progress(total: u64) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} positions ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Describe a search value from X's point of view
pub fn describe_value(value: i32) -> &'static str {
    match value {
        v if v > 0 => "X wins",
        v if v < 0 => "O wins",
        _ => "draw",
    }
}

/// Render a board as a grid with row and column labels
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    0   1   2\n");
    for (r, row) in board.cells().iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|&cell| match cell {
                Cell::Empty => " ".to_string(),
                other => other.to_char().to_string(),
            })
            .collect();
        out.push_str(&format!("{r}   {}\n", cells.join(" | ")));
        if r < 2 {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}

/// `"(r, c)"` list for a slice of positions
pub fn format_positions(positions: &[Position]) -> String {
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(549_946), "549,946");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn renders_labelled_grid() {
        let board = Board::from_string("X...O....").unwrap();
        let rendered = render_board(&board);
        assert!(rendered.starts_with("    0   1   2\n"));
        assert!(rendered.contains("0   X |   |  \n"));
        assert!(rendered.contains("1     | O |  \n"));
    }

    #[test]
    fn value_descriptions() {
        assert_eq!(describe_value(1), "X wins");
        assert_eq!(describe_value(0), "draw");
        assert_eq!(describe_value(-1), "O wins");
    }
}
