//! Tic-tac-toe board rules: move application, win/draw detection, and the
//! computer's move selection.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::EngineError;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Index of the center cell, preferred by the computer when no line is at
/// stake.
const CENTER: usize = 4;

/// A tic-tac-toe board, row-major from the top-left corner.
pub type Board = [Cell; BOARD_CELLS];

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    /// Nobody played here yet.
    Empty,
    /// The human player's mark.
    Player,
    /// The computer's mark.
    Computer,
}

/// One of the two sides placing marks on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Player => Cell::Player,
            Mark::Computer => Cell::Computer,
        }
    }
}

/// Progress of a board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStatus {
    /// The game continues.
    Ongoing,
    /// One side completed a line.
    Won(Mark),
    /// The board is full with no line completed.
    Draw,
}

/// Place `mark` at `index`, rejecting out-of-range and occupied cells. The
/// board is only written on success.
pub fn place_mark(board: &mut Board, index: usize, mark: Mark) -> Result<(), EngineError> {
    if index >= BOARD_CELLS {
        return Err(EngineError::CellOutOfRange { index });
    }
    if board[index] != Cell::Empty {
        return Err(EngineError::CellOccupied { index });
    }
    board[index] = mark.into();
    Ok(())
}

/// Evaluate the board: a completed line wins, a full board draws, anything
/// else is still ongoing.
pub fn status(board: &Board) -> BoardStatus {
    for line in LINES {
        match (board[line[0]], board[line[1]], board[line[2]]) {
            (Cell::Player, Cell::Player, Cell::Player) => return BoardStatus::Won(Mark::Player),
            (Cell::Computer, Cell::Computer, Cell::Computer) => {
                return BoardStatus::Won(Mark::Computer);
            }
            _ => {}
        }
    }

    if board.iter().all(|cell| *cell != Cell::Empty) {
        BoardStatus::Draw
    } else {
        BoardStatus::Ongoing
    }
}

/// Pick the computer's next cell, or `None` when the board is full.
///
/// Deterministic greedy policy: complete an own winning line, otherwise
/// block the player's winning line, otherwise take the center, otherwise the
/// lowest-index empty cell. Determinism keeps replies reproducible in tests.
pub fn computer_move(board: &Board) -> Option<usize> {
    if let Some(index) = completing_cell(board, Cell::Computer) {
        return Some(index);
    }
    if let Some(index) = completing_cell(board, Cell::Player) {
        return Some(index);
    }
    if board[CENTER] == Cell::Empty {
        return Some(CENTER);
    }
    board.iter().position(|cell| *cell == Cell::Empty)
}

/// Find an empty cell that would complete a line for `side`, if any.
fn completing_cell(board: &Board, side: Cell) -> Option<usize> {
    LINES.iter().find_map(|line| {
        let marks = line.iter().filter(|&&i| board[i] == side).count();
        if marks != 2 {
            return None;
        }
        line.iter().copied().find(|&i| board[i] == Cell::Empty)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(cells: [&str; BOARD_CELLS]) -> Board {
        cells.map(|cell| match cell {
            "X" => Cell::Player,
            "O" => Cell::Computer,
            _ => Cell::Empty,
        })
    }

    #[test]
    fn completing_a_row_wins() {
        let mut board = board_from(["X", "X", "", "O", "O", "", "", "", ""]);
        place_mark(&mut board, 2, Mark::Player).unwrap();
        assert_eq!(status(&board), BoardStatus::Won(Mark::Player));
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let board = board_from(["X", "O", "X", "X", "O", "O", "O", "X", "X"]);
        assert_eq!(status(&board), BoardStatus::Draw);
    }

    #[test]
    fn no_win_reported_without_a_line() {
        let board = board_from(["X", "O", "X", "", "O", "", "X", "", ""]);
        assert_eq!(status(&board), BoardStatus::Ongoing);
    }

    #[test]
    fn no_board_without_a_completed_line_reports_a_win() {
        // Every one of the 3^9 cell assignments, reachable or not.
        for code in 0..3usize.pow(BOARD_CELLS as u32) {
            let mut board = [Cell::Empty; BOARD_CELLS];
            let mut digits = code;
            for cell in board.iter_mut() {
                *cell = match digits % 3 {
                    0 => Cell::Empty,
                    1 => Cell::Player,
                    _ => Cell::Computer,
                };
                digits /= 3;
            }

            let has_line = LINES.iter().any(|line| {
                board[line[0]] != Cell::Empty
                    && board[line[0]] == board[line[1]]
                    && board[line[1]] == board[line[2]]
            });
            let won = matches!(status(&board), BoardStatus::Won(_));
            assert_eq!(won, has_line, "board #{code}: {board:?}");
        }
    }

    #[test]
    fn columns_and_diagonals_are_checked() {
        let column = board_from(["O", "X", "", "O", "X", "", "", "X", ""]);
        assert_eq!(status(&column), BoardStatus::Won(Mark::Player));

        let diagonal = board_from(["O", "X", "", "X", "O", "", "", "", "O"]);
        assert_eq!(status(&diagonal), BoardStatus::Won(Mark::Computer));
    }

    #[test]
    fn occupied_cell_rejected_and_board_untouched() {
        let mut board = board_from(["X", "", "", "", "", "", "", "", ""]);
        let before = board;
        assert_eq!(
            place_mark(&mut board, 0, Mark::Computer),
            Err(EngineError::CellOccupied { index: 0 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_range_cell_rejected() {
        let mut board = [Cell::Empty; BOARD_CELLS];
        assert_eq!(
            place_mark(&mut board, 9, Mark::Player),
            Err(EngineError::CellOutOfRange { index: 9 })
        );
    }

    #[test]
    fn computer_completes_its_own_line_first() {
        // Computer can win at 5; blocking the player at 2 must wait.
        let board = board_from(["X", "X", "", "O", "O", "", "", "", ""]);
        assert_eq!(computer_move(&board), Some(5));
    }

    #[test]
    fn computer_blocks_the_player() {
        let board = board_from(["X", "X", "", "", "O", "", "", "", ""]);
        assert_eq!(computer_move(&board), Some(2));
    }

    #[test]
    fn computer_prefers_center_then_first_empty() {
        let board = board_from(["X", "", "", "", "", "", "", "", ""]);
        assert_eq!(computer_move(&board), Some(4));

        let center_taken = board_from(["X", "", "", "", "O", "", "", "", ""]);
        assert_eq!(computer_move(&center_taken), Some(1));
    }

    #[test]
    fn computer_has_no_move_on_a_full_board() {
        let board = board_from(["X", "O", "X", "X", "O", "O", "O", "X", "X"]);
        assert_eq!(computer_move(&board), None);
    }
}
