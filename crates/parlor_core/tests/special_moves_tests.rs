use parlor_core::{
    CastlingRight, Color, Move, Position, Square, apply_move, find_legal_move, is_castle_safe,
    legal_moves, legal_moves_from,
};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn fen(f: &str) -> Position {
    Position::from_fen(f).unwrap()
}

fn play(pos: &Position, from: &str, to: &str) -> Position {
    let mv = find_legal_move(pos, sq(from), sq(to))
        .unwrap_or_else(|| panic!("{from}{to} should be legal in {}", pos.to_fen()));
    apply_move(pos, mv).unwrap()
}

fn en_passant_moves(pos: &Position) -> Vec<Move> {
    legal_moves(pos)
        .into_iter()
        .filter(|m| m.is_en_passant)
        .collect()
}

#[test]
fn en_passant_is_offered_once_right_after_the_double_push() {
    let pos = fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    let pos = play(&pos, "d7", "d5");
    assert_eq!(pos.en_passant, Some(sq("d6")));

    let ep = en_passant_moves(&pos);
    assert_eq!(ep.len(), 1);
    assert_eq!(ep[0].to_string(), "e5d6");

    let taken = apply_move(&pos, ep[0]).unwrap();
    assert!(taken.piece_at(sq("d5")).is_none());
    assert!(taken.piece_at(sq("d6")).is_some());
}

#[test]
fn en_passant_expires_after_one_ply() {
    let pos = fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    let pos = play(&pos, "d7", "d5");
    let pos = play(&pos, "e1", "d2");
    let pos = play(&pos, "e8", "f7");
    assert!(pos.en_passant.is_none());
    assert!(en_passant_moves(&pos).is_empty());
    assert!(find_legal_move(&pos, sq("e5"), sq("d6")).is_none());
}

#[test]
fn both_castles_available_with_clear_safe_paths() {
    let pos = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let castles: Vec<_> = legal_moves_from(&pos, sq("e1"))
        .into_iter()
        .filter_map(|m| m.castle)
        .collect();
    assert_eq!(castles.len(), 2);
    assert!(castles.contains(&CastlingRight::WhiteKingside));
    assert!(castles.contains(&CastlingRight::WhiteQueenside));

    let castled = play(&pos, "e1", "g1");
    assert_eq!(castled.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");
}

#[test]
fn no_castling_through_an_attacked_square() {
    // The rook on f2 covers f1
    let pos = fen("4k3/8/8/8/8/8/5r2/R3K2R w KQ - 0 1");
    assert!(!is_castle_safe(&pos, CastlingRight::WhiteKingside));
    assert!(find_legal_move(&pos, sq("e1"), sq("g1")).is_none());
    assert!(find_legal_move(&pos, sq("e1"), sq("c1")).is_some());
}

#[test]
fn no_castling_out_of_check() {
    let pos = fen("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1");
    assert!(find_legal_move(&pos, sq("e1"), sq("g1")).is_none());
    assert!(find_legal_move(&pos, sq("e1"), sq("c1")).is_none());
}

#[test]
fn attacked_b1_does_not_stop_queenside_castling() {
    let pos = fen("4k3/8/8/8/8/8/1r6/R3K2R w KQ - 0 1");
    assert!(find_legal_move(&pos, sq("e1"), sq("c1")).is_some());
}

#[test]
fn occupied_b1_blocks_queenside_castling() {
    let pos = fen("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1");
    assert!(find_legal_move(&pos, sq("e1"), sq("c1")).is_none());
    assert!(find_legal_move(&pos, sq("e1"), sq("g1")).is_some());
}

#[test]
fn rights_are_lost_for_good_once_the_rook_moves() {
    let pos = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let pos = play(&pos, "h1", "h2");
    let pos = play(&pos, "a8", "b8");
    let pos = play(&pos, "h2", "h1");
    let pos = play(&pos, "b8", "a8");

    assert!(find_legal_move(&pos, sq("e1"), sq("g1")).is_none());
    assert!(find_legal_move(&pos, sq("e1"), sq("c1")).is_some());
    assert!(!pos.castling.has(CastlingRight::WhiteKingside));
    assert!(!pos.castling.has(CastlingRight::BlackQueenside));
    assert!(pos.castling.has(CastlingRight::BlackKingside));
}

#[test]
fn king_move_drops_both_rights() {
    let pos = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let pos = play(&pos, "e1", "f1");
    let pos = play(&pos, "a8", "a7");
    let pos = play(&pos, "f1", "e1");
    for right in CastlingRight::for_color(Color::White) {
        assert!(!pos.castling.has(right));
    }
    assert!(legal_moves_from(&pos, sq("e1")).iter().all(|m| m.castle.is_none()));
}
