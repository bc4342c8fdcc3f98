use crate::error::FenError;
use crate::types::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    pub fn has(&self, right: CastlingRight) -> bool {
        match right {
            CastlingRight::WhiteKingside => self.wk,
            CastlingRight::WhiteQueenside => self.wq,
            CastlingRight::BlackKingside => self.bk,
            CastlingRight::BlackQueenside => self.bq,
        }
    }

    /// Rights only ever go from held to cleared; there is no setter back.
    pub fn clear(&mut self, right: CastlingRight) {
        match right {
            CastlingRight::WhiteKingside => self.wk = false,
            CastlingRight::WhiteQueenside => self.wq = false,
            CastlingRight::BlackKingside => self.bk = false,
            CastlingRight::BlackQueenside => self.bq = false,
        }
    }

    pub fn clear_color(&mut self, color: Color) {
        for right in CastlingRight::for_color(color) {
            self.clear(right);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// `board[row][col]`, row 0 = rank 8.
    pub board: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square skipped by a pawn that just advanced two rows.
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    /// Most recently applied move, kept for highlighting only.
    pub last_move: Option<Move>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn empty() -> Self {
        Position {
            board: [[None; 8]; 8],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            last_move: None,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty();
        p.castling = CastlingRights::all();

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            p.board[0][col] = Some(Piece::new(Color::Black, kind));
            p.board[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            p.board[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[7][col] = Some(Piece::new(Color::White, kind));
        }
        p
    }

    /// Parses Forsyth-Edwards Notation. The move counters are optional.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let mut pos = Position::empty();

        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::RowCount(rows.len()));
        }
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0usize;
            for ch in row_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                } else {
                    let piece = Piece::from_fen_char(ch).ok_or(FenError::BadPiece(ch))?;
                    if col >= 8 {
                        return Err(FenError::RowWidth {
                            row,
                            files: col + 1,
                        });
                    }
                    pos.board[row][col] = Some(piece);
                    col += 1;
                }
            }
            if col != 8 {
                return Err(FenError::RowWidth { row, files: col });
            }
        }

        pos.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::BadSide(other.to_string())),
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => pos.castling.wk = true,
                    'Q' => pos.castling.wq = true,
                    'k' => pos.castling.bk = true,
                    'q' => pos.castling.bq = true,
                    _ => return Err(FenError::BadCastling(c)),
                }
            }
        }

        pos.en_passant = match parts[3] {
            "-" => None,
            field => {
                let sq: Square = field.parse()?;
                if sq.row != pos.side_to_move.en_passant_target_row() {
                    return Err(FenError::BadEnPassant(sq));
                }
                Some(sq)
            }
        };

        if let Some(hm) = parts.get(4) {
            pos.halfmove_clock = hm
                .parse()
                .map_err(|_| FenError::BadCounter(hm.to_string()))?;
        }
        if let Some(fm) = parts.get(5) {
            pos.fullmove_number = fm
                .parse()
                .map_err(|_| FenError::BadCounter(fm.to_string()))?;
        }

        Ok(pos)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);
        for (row, cells) in self.board.iter().enumerate() {
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some(pc) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(pc.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let rights: String = CastlingRight::ALL
            .into_iter()
            .filter(|&r| self.castling.has(r))
            .map(CastlingRight::fen_char)
            .collect();
        if rights.is_empty() {
            fen.push('-');
        } else {
            fen.push_str(&rights);
        }

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.row as usize][sq.col as usize]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board[sq.row as usize][sq.col as usize] = pc;
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Occupied squares with their pieces, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
