use super::*;

fn board(state: [i32; 10]) -> Board {
    Board::from_state(&state).unwrap()
}

#[test]
fn test_new_board_is_empty() {
    let b = Board::new(Player::O);
    assert_eq!(b.empty_cells().count(), 9);
    assert_eq!(b.to_move, Player::O);
    assert_eq!(b.status(), GameStatus::InProgress);
}

#[test]
fn test_state_round_trip() {
    let state = [1, 2, 0, 0, 1, 0, 2, 0, 0, 2];
    assert_eq!(board(state).to_state(), state);
}

#[test]
fn test_from_state_rejects_bad_input() {
    assert_eq!(
        Board::from_state(&[0; 9]),
        Err(Error::InvalidStateLength { expected: 10, got: 9 })
    );
    assert_eq!(
        Board::from_state(&[0, 0, 3, 0, 0, 0, 0, 0, 0, 1]),
        Err(Error::InvalidCell { index: 2, value: 3 })
    );
    assert_eq!(
        Board::from_state(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        Err(Error::InvalidTurn { value: 0 })
    );
}

#[test]
fn test_winner_columns_rows_diagonals() {
    assert_eq!(board([2, 0, 0, 2, 1, 0, 2, 1, 0, 1]).winner(), Some(Player::O));
    assert_eq!(board([0, 0, 0, 1, 1, 1, 2, 2, 0, 2]).winner(), Some(Player::X));
    assert_eq!(board([1, 2, 0, 2, 1, 0, 0, 0, 1, 2]).winner(), Some(Player::X));
    assert_eq!(board([1, 0, 2, 1, 2, 0, 2, 0, 0, 1]).winner(), Some(Player::O));
    assert_eq!(board([1, 1, 0, 2, 2, 0, 0, 0, 0, 1]).winner(), None);
}

#[test]
fn test_full_board_with_line_is_a_win_not_a_tie() {
    let b = board([1, 1, 1, 2, 2, 1, 1, 2, 2, 2]);
    assert!(b.is_tie());
    assert_eq!(b.winner(), Some(Player::X));
    assert_eq!(b.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_full_board_without_line_is_tied() {
    let b = board([1, 2, 1, 1, 2, 2, 2, 1, 1, 2]);
    assert!(b.is_tie());
    assert_eq!(b.winner(), None);
    assert_eq!(b.status(), GameStatus::Tied);
}

#[test]
fn test_successors_always_pass_the_turn() {
    let b = Board::new(Player::X);

    let success = b.successor(4, Outcome::Success);
    assert_eq!(success.cell(4), Some(Player::X));
    assert_eq!(success.to_move, Player::O);

    let neutral = b.successor(4, Outcome::Neutral);
    assert_eq!(neutral.cells, b.cells);
    assert_eq!(neutral.to_move, Player::O);

    let failure = b.successor(4, Outcome::Failure);
    assert_eq!(failure.cell(4), Some(Player::O));
    assert_eq!(failure.to_move, Player::O);

    // Source board is untouched
    assert_eq!(b, Board::new(Player::X));
}

#[test]
fn test_apply_validates_moves() {
    let mut b = Board::new(Player::X);
    assert_eq!(b.apply(9, Outcome::Success), Err(Error::CellOutOfRange { index: 9 }));
    assert_eq!(b.apply(0, Outcome::Success), Ok(GameStatus::InProgress));
    assert_eq!(b.apply(0, Outcome::Success), Err(Error::CellOccupied { index: 0 }));

    let mut won = board([1, 1, 1, 2, 2, 0, 0, 0, 0, 2]);
    assert_eq!(won.apply(5, Outcome::Success), Err(Error::GameOver));
}

#[test]
fn test_apply_reports_win() {
    let mut b = board([1, 1, 0, 2, 2, 0, 0, 0, 0, 1]);
    assert_eq!(b.apply(2, Outcome::Success), Ok(GameStatus::Won(Player::X)));
}

#[test]
fn test_display() {
    let b = board([1, 0, 2, 0, 1, 0, 0, 0, 0, 2]);
    assert_eq!(b.to_string(), "X.O\n.X.\n...\nO to move");
}
