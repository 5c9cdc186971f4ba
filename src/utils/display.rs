//! Display and output formatting utilities

use crate::config::CellCharset;
use crate::life::Grid;

/// ANSI sequence that clears the terminal and homes the cursor, used
/// between animation frames.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Renders grids to terminal text with a configurable glyph set.
pub struct GridRenderer {
    live: char,
    dead: char,
}

impl GridRenderer {
    pub fn new(charset: CellCharset) -> Self {
        let (live, dead) = match charset {
            CellCharset::Blocks => ('█', '·'),
            // The digit display mirrors the seed bit convention:
            // 0 is live, 1 is dead.
            CellCharset::Digits => ('0', '1'),
        };
        Self { live, dead }
    }

    /// Render a grid in compact form, one row per line.
    pub fn render(&self, grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height * (grid.width + 1));
        for row in 0..grid.height {
            for col in 0..grid.width {
                output.push(if grid.cells[grid.index(row, col)] {
                    self.live
                } else {
                    self.dead
                });
            }
            output.push('\n');
        }
        output
    }

    /// Render a grid with row and column numbers in the margins.
    pub fn render_with_coords(&self, grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..grid.width {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for row in 0..grid.height {
            output.push_str(&format!("{:2} ", row));
            for col in 0..grid.width {
                let glyph = if grid.cells[grid.index(row, col)] {
                    self.live
                } else {
                    self.dead
                };
                output.push(' ');
                output.push(glyph);
            }
            output.push('\n');
        }

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        Grid::from_rows(vec![
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap()
    }

    #[test]
    fn test_block_rendering() {
        let renderer = GridRenderer::new(CellCharset::Blocks);
        assert_eq!(renderer.render(&sample_grid()), "█·█\n·█·\n");
    }

    #[test]
    fn test_digit_rendering_matches_seed_polarity() {
        let renderer = GridRenderer::new(CellCharset::Digits);
        assert_eq!(renderer.render(&sample_grid()), "010\n101\n");
    }

    #[test]
    fn test_coordinate_rendering() {
        let renderer = GridRenderer::new(CellCharset::Blocks);
        let output = renderer.render_with_coords(&sample_grid());
        assert!(output.contains(" 0 1 2"));
        assert!(output.lines().count() == 3);
        assert!(output.starts_with("   "));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
