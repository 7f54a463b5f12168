use crate::board::{Board, BOARD_SIZE};
use crate::player_colour::PlayerColour;

/// Picks a column for `me`: take a win, else block `rival`'s win, else fall
/// back to the column picked by `seed`, skipping full ones.
///
/// Returns `None` only when every column is full.
pub fn choose_column(board: &Board, me: PlayerColour, rival: PlayerColour, seed: u32) -> Option<usize> {
    if let Some(col) = completing_column(board, me) {
        return Some(col);
    }

    if let Some(col) = completing_column(board, rival) {
        return Some(col);
    }

    let start = seed as usize % BOARD_SIZE;
    (0..BOARD_SIZE)
        .map(|step| (start + step) % BOARD_SIZE)
        .find(|&col| !board.is_column_full(col))
}

fn completing_column(board: &Board, colour: PlayerColour) -> Option<usize> {
    (0..BOARD_SIZE).find(|&col| {
        let mut trial = board.clone();
        trial.drop_token(col, colour).is_ok() && trial.is_win(colour)
    })
}
