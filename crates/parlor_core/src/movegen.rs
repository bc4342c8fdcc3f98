use crate::attacks::{DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS};
use crate::board::Position;
use crate::types::*;

const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Generate all legal moves for the side to move.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(pos, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);
    out.retain(|&mv| play_if_legal(pos, mv).is_some());
}

/// Legal moves paired with the positions they lead to.
pub fn legal_successors(pos: &Position) -> Vec<(Move, Position)> {
    let mut pseudo = Vec::with_capacity(64);
    pseudo_moves(pos, &mut pseudo);
    pseudo
        .into_iter()
        .filter_map(|mv| play_if_legal(pos, mv).map(|next| (mv, next)))
        .collect()
}

/// Plays a pseudo-legal move on a throwaway copy and keeps the result only
/// if the mover's king is not left attacked.
fn play_if_legal(pos: &Position, mv: Move) -> Option<Position> {
    if let Some(right) = mv.castle
        && !is_castle_safe(pos, right)
    {
        return None;
    }
    let mut next = pos.clone();
    next.make_move(mv).ok()?;
    (!next.in_check(pos.side_to_move)).then_some(next)
}

/// Legal moves starting on `from`, for move highlighting.
pub fn legal_moves_from(pos: &Position, from: Square) -> Vec<Move> {
    let mut moves = legal_moves(pos);
    moves.retain(|mv| mv.from == from);
    moves
}

/// Resolves a from/to request to the matching legal move, if there is one.
pub fn find_legal_move(pos: &Position, from: Square, to: Square) -> Option<Move> {
    legal_moves(pos)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to)
}

/// King not in check, and neither the square it crosses nor the one it
/// lands on is attacked.
pub fn is_castle_safe(pos: &Position, right: CastlingRight) -> bool {
    let color = right.color();
    let enemy = color.other();
    let row = right.king_from().row;
    !pos.in_check(color)
        && right
            .king_path()
            .iter()
            .all(|&col| !pos.is_square_attacked(Square::new(row, col), enemy))
}

/// Candidate moves for the side to move, ignoring self-check.
pub fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    let side = pos.side_to_move;
    for (from, pc) in pos.pieces() {
        if pc.color != side {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, side, out),
            PieceKind::Knight => gen_steps(pos, from, side, &KNIGHT_OFFSETS, out),
            PieceKind::Bishop => gen_slider(pos, from, side, &DIAGONALS, out),
            PieceKind::Rook => gen_slider(pos, from, side, &ORTHOGONALS, out),
            PieceKind::Queen => gen_slider(pos, from, side, &QUEEN_DIRS, out),
            PieceKind::King => {
                gen_steps(pos, from, side, &KING_OFFSETS, out);
                gen_castle(pos, from, side, out);
            }
        }
    }
}

/// Builds a plain or capturing move; `None` when `to` holds a friendly piece.
fn step_to(pos: &Position, from: Square, to: Square, c: Color) -> Option<Move> {
    match pos.piece_at(to) {
        Some(pc) if pc.color == c => None,
        target => Some(Move {
            captured: target.map(|pc| pc.kind),
            ..Move::new(from, to)
        }),
    }
}

fn push_pawn_move(mut mv: Move, c: Color, out: &mut Vec<Move>) {
    if mv.to.row == c.promotion_row() {
        mv.promotion = Some(PieceKind::Queen);
    }
    out.push(mv);
}

fn gen_pawn(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>) {
    let dir = c.forward();

    // forward 1, then 2 from the start row
    if let Some(one) = from.offset(dir, 0)
        && pos.is_empty(one)
    {
        push_pawn_move(Move::new(from, one), c, out);

        if from.row == c.pawn_start_row()
            && let Some(two) = from.offset(2 * dir, 0)
            && pos.is_empty(two)
        {
            out.push(Move::new(from, two));
        }
    }

    // captures + en-passant
    for dc in [-1, 1] {
        let Some(to) = from.offset(dir, dc) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(target) if target.color != c => {
                let mv = Move {
                    captured: Some(target.kind),
                    ..Move::new(from, to)
                };
                push_pawn_move(mv, c, out);
            }
            None if pos.en_passant == Some(to) && from.row == c.en_passant_capture_row() => {
                out.push(Move {
                    is_en_passant: true,
                    captured: Some(PieceKind::Pawn),
                    ..Move::new(from, to)
                })
            }
            _ => {}
        }
    }
}

fn gen_steps(pos: &Position, from: Square, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc)
            && let Some(mv) = step_to(pos, from, to, c)
        {
            out.push(mv);
        }
    }
}

fn gen_slider(pos: &Position, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move {
                        captured: Some(pc.kind),
                        ..Move::new(from, to)
                    });
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

/// Castling when the right is held and the squares between king and rook
/// are empty. Check safety is left to the legality filter.
fn gen_castle(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>) {
    for right in CastlingRight::for_color(c) {
        if from != right.king_from()
            || !pos.castling.has(right)
            || pos.piece_at(right.rook_from()) != Some(Piece::new(c, PieceKind::Rook))
        {
            continue;
        }
        let row = from.row;
        if right
            .between()
            .iter()
            .all(|&col| pos.is_empty(Square::new(row, col)))
        {
            out.push(Move {
                castle: Some(right),
                ..Move::new(from, right.king_to())
            });
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
