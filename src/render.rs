//! Draws an index buffer as terminal cells with 256-color background escape sequences.

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
};
use std::io::{self, Write};

/// The text printed for each cell. Two columns make the cells roughly square.
pub const CELL: &str = "  ";

/// Writes `indices` as rows of `columns` cells.
///
/// Each cell sets the background to its palette index and prints [`CELL`].
/// Every row ends by resetting the style and starting a new line,
/// and one more reset line follows the last row.
/// If `columns` is zero, only the final reset line is written.
///
/// # Errors
/// Returns any error from writing to `out`.
///
/// # Examples
/// ```
/// # fn main() -> std::io::Result<()> {
/// let mut out = Vec::new();
/// termquant::render(&mut out, &[196, 21], 2)?;
/// assert_eq!(out, b"\x1b[48;5;196m  \x1b[48;5;21m  \x1b[0m\n\x1b[0m\n");
/// # Ok(())
/// # }
/// ```
pub fn render(out: &mut impl Write, indices: &[u8], columns: usize) -> io::Result<()> {
    if columns > 0 {
        for row in indices.chunks(columns) {
            for &index in row {
                queue!(out, SetBackgroundColor(Color::AnsiValue(index)), Print(CELL))?;
            }
            queue!(out, ResetColor, Print("\n"))?;
        }
    }

    queue!(out, ResetColor, Print("\n"))?;
    out.flush()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rendered(indices: &[u8], columns: usize) -> String {
        let mut out = Vec::new();
        render(&mut out, indices, columns).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn rows_are_reset() {
        let expected = concat!(
            "\x1b[48;5;0m  \x1b[48;5;15m  \x1b[0m\n",
            "\x1b[48;5;231m  \x1b[48;5;232m  \x1b[0m\n",
            "\x1b[0m\n",
        );
        assert_eq!(rendered(&[0, 15, 231, 232], 2), expected);
    }

    #[test]
    fn single_column() {
        assert_eq!(
            rendered(&[9, 10], 1),
            "\x1b[48;5;9m  \x1b[0m\n\x1b[48;5;10m  \x1b[0m\n\x1b[0m\n",
        );
    }

    #[test]
    fn empty_grid() {
        assert_eq!(rendered(&[], 0), "\x1b[0m\n");
        assert_eq!(rendered(&[], 48), "\x1b[0m\n");
    }
}
