use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;
use crate::game_state::piece_classification::{is_black, is_red};

/// Crown the piece on `(row, col)` if `color`, the pre-move regular color of
/// the piece that just landed there, has reached its promotion row.
///
/// Returns whether a promotion happened. Kings and unrecognized codes are
/// left alone.
pub fn promote_if_needed(board: &mut Board, row: i32, col: i32, color: PieceCode) -> CheckersResult<bool> {
    let crowned = if is_red(color) && row == Side::Red.promotion_row(board.size()) {
        RED_KING
    } else if is_black(color) && row == Side::Black.promotion_row(board.size()) {
        BLACK_KING
    } else {
        return Ok(false);
    };
    board.set_piece(row, col, crowned)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_is_crowned_on_row_zero_only() {
        let mut board = Board::new(8);
        board.set_piece(0, 1, RED).expect("in bounds");
        board.set_piece(1, 2, RED).expect("in bounds");
        assert_eq!(promote_if_needed(&mut board, 0, 1, RED), Ok(true));
        assert_eq!(promote_if_needed(&mut board, 1, 2, RED), Ok(false));
        assert_eq!(board.get_piece(0, 1), Ok(RED_KING));
        assert_eq!(board.get_piece(1, 2), Ok(RED));
    }

    #[test]
    fn black_is_crowned_on_the_last_row_only() {
        let mut board = Board::new(8);
        board.set_piece(7, 0, BLACK).expect("in bounds");
        board.set_piece(6, 1, BLACK).expect("in bounds");
        assert_eq!(promote_if_needed(&mut board, 7, 0, BLACK), Ok(true));
        assert_eq!(promote_if_needed(&mut board, 6, 1, BLACK), Ok(false));
        assert_eq!(board.get_piece(7, 0), Ok(BLACK_KING));
        assert_eq!(board.get_piece(6, 1), Ok(BLACK));
    }

    #[test]
    fn kings_and_unknown_codes_are_skipped() {
        let mut board = Board::new(8);
        board.set_piece(0, 1, RED_KING).expect("in bounds");
        assert_eq!(promote_if_needed(&mut board, 0, 1, RED_KING), Ok(false));
        assert_eq!(promote_if_needed(&mut board, 7, 0, 9), Ok(false));
        assert_eq!(board.get_piece(0, 1), Ok(RED_KING));
    }
}
