//! Pieces tests - catalog, piece factory and rotation

use rand::rngs::StdRng;
use rand::SeedableRng;

use blockfall::core::{
    definition, get_random_tetromino, random_tetromino, rotate_tetromino, Shape, Tetromino,
    TETROMINOES,
};
use blockfall::types::{PieceKind, Position, BOARD_WIDTH};

// ============== Catalog ==============

#[test]
fn test_catalog_covers_all_kinds() {
    assert_eq!(TETROMINOES.len(), 7);
    for kind in PieceKind::ALL {
        let def = definition(kind);
        assert!(def.shape.rows() > 0);
        assert!(!def.color.is_empty());
    }
}

#[test]
fn test_catalog_shapes() {
    assert_eq!(
        definition(PieceKind::I).shape.to_matrix(),
        vec![vec![1, 1, 1, 1], vec![0; 4], vec![0; 4], vec![0; 4]]
    );
    assert_eq!(definition(PieceKind::O).shape.to_matrix(), vec![vec![1, 1], vec![1, 1]]);
    assert_eq!(
        definition(PieceKind::T).shape.to_matrix(),
        vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 0, 0]]
    );
    assert_eq!(
        definition(PieceKind::S).shape.to_matrix(),
        vec![vec![0, 1, 1], vec![1, 1, 0], vec![0, 0, 0]]
    );
    assert_eq!(
        definition(PieceKind::Z).shape.to_matrix(),
        vec![vec![1, 1, 0], vec![0, 1, 1], vec![0, 0, 0]]
    );
}

#[test]
fn test_j_and_l_are_mirrors() {
    let j = definition(PieceKind::J).shape;
    let l = definition(PieceKind::L).shape;
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(j.is_occupied(r, c), l.is_occupied(r, 2 - c));
        }
    }
}

// ============== Factory ==============

#[test]
fn test_random_piece_is_valid() {
    for _ in 0..100 {
        let piece = get_random_tetromino();
        assert!(PieceKind::ALL.contains(&piece.kind));
        assert_eq!(piece.position.y, 0);
        assert!(piece.position.x >= 0);
        assert!((piece.position.x as u8) < BOARD_WIDTH);
        assert_eq!(piece.shape, definition(piece.kind).shape);
        assert_eq!(piece.color, definition(piece.kind).color);
    }
}

#[test]
fn test_random_piece_fits_horizontally() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..100 {
        let piece = random_tetromino(&mut rng);
        for (x, _) in piece.cells() {
            assert!((0..BOARD_WIDTH as i16).contains(&x));
        }
    }
}

#[test]
fn test_random_piece_serializes_type_tag() {
    let piece = Tetromino::spawn(PieceKind::T);
    let value = serde_json::to_value(piece).unwrap();
    assert_eq!(value["type"], "T");
    assert_eq!(value["color"], "purple");
    assert_eq!(value["position"], serde_json::json!({ "x": 3, "y": 0 }));
    assert_eq!(value["shape"], serde_json::json!([[0, 1, 0], [1, 1, 1], [0, 0, 0]]));
}

// ============== Rotation ==============

#[test]
fn test_rotation_keeps_square_dimensions() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let piece = random_tetromino(&mut rng);
        let rotated = rotate_tetromino(&piece);
        assert_eq!(rotated.rows(), piece.shape.rows());
        assert_eq!(rotated.cols(), piece.shape.cols());
    }
}

#[test]
fn test_rotation_transposes_rectangles() {
    let shape = Shape::try_from_rows(&[vec![1, 1, 1], vec![0, 1, 0]]).unwrap();
    let piece = Tetromino {
        shape,
        ..Tetromino::spawn(PieceKind::T)
    };
    let rotated = rotate_tetromino(&piece);
    assert_eq!((rotated.rows(), rotated.cols()), (3, 2));
    assert_eq!(rotated.to_matrix(), vec![vec![0, 1], vec![1, 1], vec![0, 1]]);
}

#[test]
fn test_o_rotation_is_identical() {
    let piece = Tetromino {
        position: Position::new(4, 0),
        ..Tetromino::spawn(PieceKind::O)
    };
    let rotated = rotate_tetromino(&piece);
    assert_eq!(rotated, piece.shape);
    assert_eq!(
        serde_json::to_string(&rotated).unwrap(),
        serde_json::to_string(&piece.shape).unwrap()
    );
}

#[test]
fn test_t_rotation() {
    let piece = Tetromino::spawn(PieceKind::T);
    assert_eq!(
        rotate_tetromino(&piece).to_matrix(),
        vec![vec![0, 1, 0], vec![0, 1, 1], vec![0, 1, 0]]
    );
}

#[test]
fn test_i_rotation_becomes_vertical() {
    let piece = Tetromino::spawn(PieceKind::I);
    let rotated = rotate_tetromino(&piece);
    for r in 0..4 {
        assert!(rotated.is_occupied(r, 3));
        for c in 0..3 {
            assert!(!rotated.is_occupied(r, c));
        }
    }
}

#[test]
fn test_rotation_leaves_piece_untouched() {
    let piece = Tetromino::spawn(PieceKind::S);
    let copy = piece;
    let _ = rotate_tetromino(&piece);
    assert_eq!(piece, copy);
    assert_eq!(definition(PieceKind::S).shape, copy.shape);
}
