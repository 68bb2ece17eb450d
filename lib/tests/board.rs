use golife_lib::Board;

/// Builds a board with the given live cells.
fn board_with(columns: usize, rows: usize, live: &[(isize, isize)]) -> Board {
    let mut board = Board::new(columns, rows);
    for &(column, row) in live {
        board.set_at(column, row, true);
    }
    board
}

#[test]
fn dimensions() {
    let board = Board::new(7, 4);
    assert_eq!(board.columns(), 7);
    assert_eq!(board.rows(), 4);
    assert_eq!(board.total_size(), 28);
    assert_eq!(board.cells().len(), 28);
    assert!(!board.is_stalled());
}

#[test]
fn starts_dead() {
    let board = Board::new(6, 6);
    assert!((0..board.total_size()).all(|index| !board.get(index)));
}

#[test]
fn index_mapping() {
    let board = Board::new(4, 3);
    assert_eq!(board.index_of(3, 1), 7);
    assert_eq!(board.coords_of(7), Some((3, 1)));
    assert_eq!(board.coords_of(11), Some((3, 2)));
    assert_eq!(board.coords_of(12), None);
}

#[test]
fn get_set_toggle() {
    let mut board = Board::new(5, 5);
    board.set(12, true);
    assert!(board.get(12));
    assert!(board.get_at(2, 2));

    board.toggle(12);
    assert!(!board.get(12));
    board.toggle_at(2, 2);
    assert!(board.get(12));

    board.set_at(2, 2, false);
    assert!(!board.get(12));
}

#[test]
fn out_of_range_reads_are_dead() {
    let board = board_with(3, 3, &[(0, 0), (2, 2)]);
    assert!(!board.get(9));
    assert!(!board.get(usize::MAX));
    assert!(!board.get_at(-1, 0));
    assert!(!board.get_at(0, -1));
    assert!(!board.get_at(3, 0));
    assert!(!board.get_at(0, 3));
}

#[test]
fn out_of_range_writes_are_no_ops() {
    let mut board = board_with(3, 3, &[(1, 1)]);
    let before = board.cells().to_vec();

    board.set(9, true);
    board.set(usize::MAX, true);
    board.toggle(9);
    board.set_at(-1, 1, true);
    board.set_at(1, -1, true);
    board.set_at(3, 1, true);
    board.set_at(1, 3, true);
    board.toggle_at(-1, -1);
    board.toggle_at(3, 3);

    assert_eq!(board.cells(), &before[..]);
}

#[test]
fn clear_kills_everything() {
    let mut board = Board::with_seed(8, 8, 7);
    board.randomize();
    board.clear();
    assert!(board.cells().iter().all(|&alive| !alive));
}

#[test]
fn randomize_is_roughly_half_alive() {
    // 1600 cells; a fair coin stays well within this band.
    let mut board = Board::with_seed(40, 40, 1);
    board.randomize();
    let live = board.cells().iter().filter(|&&alive| alive).count();
    assert!((640..=960).contains(&live), "live cells: {live}");
}

#[test]
fn randomize_is_reproducible_with_a_seed() {
    let mut first = Board::with_seed(16, 16, 42);
    let mut second = Board::with_seed(16, 16, 42);
    first.randomize();
    second.randomize();
    assert_eq!(first.cells(), second.cells());
}

#[test]
fn advance_is_deterministic() {
    // A glider; only `randomize` draws from the random source.
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    let mut first = board_with(10, 10, &glider);
    let mut second = board_with(10, 10, &glider);
    for _ in 0..10 {
        first.advance();
        second.advance();
        assert_eq!(first.cells(), second.cells());
    }
}

#[test]
fn lone_cell_dies() {
    let mut board = board_with(5, 5, &[(2, 2)]);
    board.advance();
    assert!(board.cells().iter().all(|&alive| !alive));
    assert!(!board.is_stalled());
}

#[test]
fn block_stalls_after_one_advance() {
    let mut board = board_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
    let before = board.cells().to_vec();

    board.advance();
    assert_eq!(board.cells(), &before[..]);
    assert!(board.is_stalled());

    // Idempotent once converged.
    for _ in 0..3 {
        board.advance();
        assert_eq!(board.cells(), &before[..]);
        assert!(board.is_stalled());
    }
}

#[test]
fn blinker_oscillates() {
    let mut board = board_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
    let horizontal = board.cells().to_vec();

    board.advance();
    let vertical = board_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
    assert_eq!(board.cells(), vertical.cells());
    assert!(!board.is_stalled());

    board.advance();
    assert_eq!(board.cells(), &horizontal[..]);
    assert!(!board.is_stalled());
}

#[test]
fn mutation_after_stall_is_picked_up() {
    let mut board = board_with(5, 5, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
    board.advance();
    assert!(board.is_stalled());

    // A fifth cell next to the block breaks the still life.
    board.toggle_at(3, 1);
    let before = board.cells().to_vec();
    board.advance();
    assert_ne!(board.cells(), &before[..]);
    assert!(!board.is_stalled());
}

#[test]
fn one_by_one_always_dies_then_stalls() {
    let mut board = board_with(1, 1, &[(0, 0)]);
    board.advance();
    assert!(!board.get(0));
    assert!(!board.is_stalled());

    board.advance();
    assert!(!board.get(0));
    assert!(board.is_stalled());
}

#[test]
fn degenerate_boards() {
    let mut empty = Board::new(0, 0);
    assert_eq!(empty.total_size(), 0);
    assert!(!empty.get(0));
    empty.set(0, true);
    empty.toggle_at(0, 0);
    empty.randomize();
    empty.advance();
    assert!(empty.is_stalled());

    // A single row decays per the rule with no special-casing.
    let mut row = board_with(5, 1, &[(1, 0), (2, 0), (3, 0)]);
    row.advance();
    assert_eq!(row.cells(), &[false, false, true, false, false]);
    row.advance();
    assert!(row.cells().iter().all(|&alive| !alive));
}

#[test]
fn display_plaintext() {
    let board = board_with(3, 2, &[(0, 0), (2, 1)]);
    assert_eq!(board.to_string(), "O..\n..O\n");
}
