//! Validates board slicing, move legality, conservation, and the end-to-end
//! shuffle scenario

#![allow(clippy::unwrap_used)]

use tileshuffle::PuzzleError;
use tileshuffle::io::pgm;
use tileshuffle::puzzle::Board;
use tileshuffle::raster::Raster;

fn gradient_raster(width: usize, height: usize) -> Raster {
    let pixels: Vec<u8> = (0..width * height)
        .map(|i| ((i * 31 + i / width * 7) % 256) as u8)
        .collect();
    Raster::from_vec(pixels, width, height).unwrap()
}

/// Sorted multiset of the pixel blocks currently owned by board slots
fn tile_multiset(board: &Board) -> Vec<Vec<u8>> {
    let mut blocks = Vec::new();
    for row in 0..board.size() {
        for col in 0..board.size() {
            if let Some(pixels) = board.tile_pixels(row, col) {
                blocks.push(pixels.to_vec());
            }
        }
    }
    blocks.sort();
    blocks
}

/// Sorted multiset of a raster's grid blocks of the given extent
fn block_multiset(raster: &Raster, block_width: usize, block_height: usize) -> Vec<Vec<u8>> {
    let mut blocks = Vec::new();
    for top in (0..raster.height()).step_by(block_height) {
        for left in (0..raster.width()).step_by(block_width) {
            blocks.push(
                raster
                    .extract_block(top, left, block_width, block_height)
                    .unwrap(),
            );
        }
    }
    blocks.sort();
    blocks
}

#[test]
fn test_zero_move_render_reproduces_source_except_empty_slot() {
    let source = gradient_raster(60, 60);
    let mut board = Board::new(3, 20, 20, 7).unwrap();
    board.initialize(&source).unwrap();

    let rendered = board.render().unwrap();
    assert_eq!(rendered.dimensions(), (60, 60));
    assert_eq!((board.tile_width(), board.tile_height()), (20, 20));

    for row in 0..3 {
        for col in 0..3 {
            let block = rendered.extract_block(row * 20, col * 20, 20, 20).unwrap();
            if (row, col) == (2, 2) {
                assert!(block.iter().all(|&p| p == 0), "empty slot must be black");
            } else {
                let expected = source.extract_block(row * 20, col * 20, 20, 20).unwrap();
                assert_eq!(block, expected, "slot ({row}, {col}) altered by slicing");
            }
        }
    }
}

#[test]
fn test_moves_stay_adjacent_and_never_reverse() {
    let source = gradient_raster(80, 80);
    let mut board = Board::new(4, 20, 20, 99).unwrap();
    board.initialize(&source).unwrap();

    let mut previous_empty = board.empty_position();
    let mut previous_delta: Option<(isize, isize)> = None;

    for _ in 0..200 {
        let delta = board.apply_random_move().unwrap();
        let empty = board.empty_position();

        // Exactly one slot is empty
        assert_eq!(board.tile_count(), 15);

        // The new empty position is orthogonally adjacent to the previous one
        let row_step = empty.0.abs_diff(previous_empty.0);
        let col_step = empty.1.abs_diff(previous_empty.1);
        assert_eq!(row_step + col_step, 1, "move was not orthogonal");

        // Never the exact inverse of the preceding move
        if let Some((prev_drow, prev_dcol)) = previous_delta {
            assert_ne!(delta, (-prev_drow, -prev_dcol), "move undid its predecessor");
        }

        previous_empty = empty;
        previous_delta = Some(delta);
    }
}

#[test]
fn test_tiles_are_conserved_across_moves() {
    let source = gradient_raster(90, 90);
    let mut board = Board::new(3, 30, 30, 5).unwrap();
    board.initialize(&source).unwrap();

    let initial = tile_multiset(&board);
    assert_eq!(initial.len(), 8);

    for _ in 0..100 {
        board.apply_random_move().unwrap();
    }

    assert_eq!(tile_multiset(&board), initial);
}

#[test]
fn test_same_seed_gives_same_move_sequence() {
    let source = gradient_raster(40, 40);

    let mut first = Board::new(4, 10, 10, 1234).unwrap();
    let mut second = Board::new(4, 10, 10, 1234).unwrap();
    first.initialize(&source).unwrap();
    second.initialize(&source).unwrap();

    for _ in 0..50 {
        assert_eq!(
            first.apply_random_move().unwrap(),
            second.apply_random_move().unwrap()
        );
        assert_eq!(first.empty_position(), second.empty_position());
    }
}

#[test]
fn test_single_slot_board_rejects_moves() {
    let source = gradient_raster(10, 10);
    let mut board = Board::new(1, 10, 10, 0).unwrap();
    board.initialize(&source).unwrap();

    assert_eq!(board.tile_count(), 0);
    assert!(matches!(
        board.apply_random_move(),
        Err(PuzzleError::NoLegalMove { position: (0, 0) })
    ));

    // The lone slot renders as an all-black frame
    let rendered = board.render().unwrap();
    assert!(rendered.pixels().iter().all(|&p| p == 0));
}

#[test]
fn test_end_to_end_shuffle_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("move").to_string_lossy().to_string();

    let source = gradient_raster(100, 100);
    let mut board = Board::new(2, 50, 50, 21).unwrap();
    board.initialize(&source).unwrap();

    // The board owns three of the four source blocks; the fourth slot is empty
    let empty_block = vec![0u8; 50 * 50];
    let mut expected: Vec<Vec<u8>> = Vec::new();
    for (row, col) in [(0, 0), (0, 1), (1, 0)] {
        expected.push(source.extract_block(row * 50, col * 50, 50, 50).unwrap());
    }
    expected.push(empty_block);
    expected.sort();

    for move_number in 1..=3 {
        board.apply_random_move().unwrap();
        let path = board.save_state(&base, move_number).unwrap();
        assert!(path.exists(), "per-move file {} missing", path.display());

        let frame = pgm::decode(&path).unwrap();
        assert_eq!(frame.dimensions(), (100, 100));
        assert_eq!(
            block_multiset(&frame, 50, 50),
            expected,
            "move {move_number} changed tile content rather than arrangement"
        );
    }
}
