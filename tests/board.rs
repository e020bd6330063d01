use lifeboard::Board;

const N: usize = 64;
const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn board_from_rows(rows: &[&str]) -> Board {
    let mut board = Board::blank(rows.len(), rows[0].len());
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            board.set_cell(r, c, ch == '#');
        }
    }
    board
}

#[test]
fn test_neighbor_count_full_ring() {
    let board = board_from_rows(&[
        "###", //
        "#.#", //
        "###", //
    ]);
    assert_eq!(board.neighbor_count(1, 1), 8);
    assert_eq!(board.neighbor_count(0, 0), 2);
    assert_eq!(board.neighbor_count(0, 1), 4);
    assert_eq!(board.neighbor_count(2, 2), 2);
}

#[test]
fn test_neighbor_count_outside_is_dead() {
    let mut board = Board::blank(3, 3);
    assert_eq!(board.neighbor_count(0, 0), 0);
    board.set_cell(0, 1, true);
    assert_eq!(board.neighbor_count(0, 0), 1);
    assert_eq!(board.neighbor_count(2, 2), 0);
}

#[test]
fn test_lone_cell_dies() {
    let mut board = Board::blank(5, 5);
    board.set_cell(2, 2, true);
    let next = board.next_generation();
    assert_eq!(next.population(), 0);
}

#[test]
fn test_overcrowded_cells_die() {
    let board = board_from_rows(&[
        ".#.", //
        "###", //
        ".#.", //
    ]);
    assert_eq!(board.neighbor_count(1, 1), 4);
    let next = board.next_generation();
    assert!(!next.is_alive(1, 1));
    // the arms survive on 3 neighbors and the corners are born
    let ring = board_from_rows(&[
        "###", //
        "#.#", //
        "###", //
    ]);
    assert_eq!(next.cells(), ring.cells());
    // in the ring the edge cells sit at 4 and die in turn, while the
    // center sees all 8 and stays dead
    let after = next.next_generation();
    assert!(!after.is_alive(1, 1));
    let corners = board_from_rows(&[
        "#.#", //
        "...", //
        "#.#", //
    ]);
    assert_eq!(after.cells(), corners.cells());
}

#[test]
fn test_block_is_a_still_life() {
    let board = board_from_rows(&[
        "....", //
        ".##.", //
        ".##.", //
        "....", //
    ]);
    let next = board.next_generation();
    assert_eq!(next.cells(), board.cells());
}

#[test]
fn test_corner_block_survives_against_the_border() {
    let board = board_from_rows(&[
        "##..", //
        "##..", //
        "....", //
        "....", //
    ]);
    let next = board.next_generation();
    assert_eq!(next.cells(), board.cells());
}

#[test]
fn test_blinker_oscillates_with_period_two() {
    let board = board_from_rows(&[
        ".....", //
        ".....", //
        ".###.", //
        ".....", //
        ".....", //
    ]);
    let next = board.next_generation();
    assert_eq!(next.population(), 3);
    for row in 1..4 {
        assert!(next.is_alive(row, 2), "row={}", row);
    }
    let again = next.next_generation();
    assert_eq!(again.cells(), board.cells());
    assert_eq!(again.generation(), 2);
}

#[test]
fn test_blinker_fills_a_tight_grid() {
    let board = board_from_rows(&[
        "...", //
        "###", //
        "...", //
    ]);
    let next = board.next_generation();
    assert_eq!(next.population(), 3);
    for &(row, col) in &[(0, 1), (1, 1), (2, 1)] {
        assert!(next.is_alive(row, col), "row={} col={}", row, col);
    }
    assert_eq!(next.next_generation().cells(), board.cells());
}

#[test]
fn test_corner_cells_do_not_wrap_around() {
    let mut board = Board::blank(5, 5);
    for &(row, col) in &[(0, 0), (0, 4), (4, 0), (4, 4)] {
        board.set_cell(row, col, true);
    }
    // On a wrapping field each corner would see the other three as
    // neighbors and survive; against a dead border they all starve.
    let next = board.next_generation();
    assert_eq!(next.population(), 0);
}

#[test]
fn test_derivation_leaves_the_predecessor_intact() {
    let mut board = Board::blank(N, N);
    board.randomize(Some(SEED), FILL_RATE);
    let before = board.cells().to_vec();

    let first = board.next_generation();
    let second = board.next_generation();

    assert_eq!(board.cells(), &before[..]);
    assert_eq!(board.generation(), 0);
    assert_eq!(first.cells(), second.cells());
    assert_eq!(first.generation(), 1);
}

#[test]
fn test_toggle_flips_and_restores() {
    let mut board = Board::blank(3, 3);
    assert!(board.toggle_cell(1, 2));
    assert!(board.is_alive(1, 2));
    assert!(!board.toggle_cell(1, 2));
    assert!(!board.is_alive(1, 2));
    // out of range nothing flips and the reported state stays dead
    assert!(!board.toggle_cell(9, 9));
    assert_eq!(board.population(), 0);
}

#[test]
fn test_set_cell_if_different_reports_changes() {
    let mut board = Board::blank(3, 3);
    assert!(board.set_cell_if_different(0, 0, true));
    assert!(!board.set_cell_if_different(0, 0, true));
    assert!(board.set_cell_if_different(0, 0, false));
    // out of range is a no-op
    assert!(!board.set_cell_if_different(9, 9, true));
    assert_eq!(board.population(), 0);
}

#[test]
fn test_edits_do_not_advance_the_generation() {
    let mut board = Board::blank(N, N);
    board.set_cell(1, 1, true);
    board.toggle_cell(2, 2);
    board.set_cell_if_different(3, 3, true);
    board.randomize(Some(SEED), FILL_RATE);
    assert_eq!(board.generation(), 0);
    assert_eq!(board.next_generation().generation(), 1);
}

#[test]
fn test_randomize_is_reproducible() {
    let mut a = Board::blank(N, N);
    let mut b = Board::blank(N, N);
    a.randomize(Some(SEED), FILL_RATE);
    b.randomize(Some(SEED), FILL_RATE);
    assert_eq!(a.cells(), b.cells());
    assert!(a.population() > 0);
    assert!(a.population() < N * N);
}

#[test]
fn test_randomize_honors_extreme_fill_rates() {
    let mut board = Board::blank(N, N);
    board.randomize(Some(SEED), 1.);
    assert_eq!(board.population(), N * N);
    board.randomize(Some(SEED), 0.);
    assert_eq!(board.population(), 0);
}
