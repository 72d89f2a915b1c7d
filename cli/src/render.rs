use std::fmt;

use minesweeper_core::{Board, CellView};

/// Text projection of a board: mines-left line, column header, one labelled line per row.
pub struct BoardView<'a>(pub &'a Board);

fn symbol(view: CellView) -> char {
    match view {
        CellView::Hidden => '.',
        CellView::Flagged => 'F',
        CellView::RevealedMine => '*',
        CellView::RevealedCount(0) => ' ',
        // counts never exceed eight
        CellView::RevealedCount(count) => char::from(b'0' + count),
    }
}

fn digits(max_index: u8) -> usize {
    max_index.to_string().len()
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let col_width = digits(board.width() - 1);
        let row_width = digits(board.height() - 1);

        writeln!(f, "Mines left: {}", board.mines_left())?;

        write!(f, "{:row_width$} ", "")?;
        for x in 0..board.width() {
            write!(f, " {x:>col_width$}")?;
        }
        writeln!(f)?;

        for (y, row) in board.rows().enumerate() {
            write!(f, "{y:>row_width$} ")?;
            for view in row {
                write!(f, " {:>col_width$}", symbol(view))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
