//! [`Position`]: the mutable board state move generation, search and
//! evaluation all operate on.

use std::fmt;

use anyhow::Context;

use crate::chess::core::{
    CastlingRights, File, Move, MoveList, Piece, PieceKind, Player, Rank, Square,
};

const KNIGHT_OFFSETS: [i16; 8] = [-33, -31, -18, -14, 14, 18, 31, 33];
const BISHOP_OFFSETS: [i16; 4] = [-17, -15, 15, 17];
const ROOK_OFFSETS: [i16; 4] = [-16, -1, 1, 16];
const KING_OFFSETS: [i16; 8] = [-17, -16, -15, -1, 1, 15, 16, 17];

/// 0x88 indices of the starting king/rook squares, used to recognize
/// castling and to revoke castling rights when those squares change hands.
const WHITE_KING_START: u8 = 4;
const WHITE_KINGSIDE_ROOK: u8 = 7;
const WHITE_QUEENSIDE_ROOK: u8 = 0;
const BLACK_KING_START: u8 = 116;
const BLACK_KINGSIDE_ROOK: u8 = 119;
const BLACK_QUEENSIDE_ROOK: u8 = 112;

/// Everything [`Position::undo_move`] needs to invert a [`Move`] exactly:
/// the piece it captured (if any), and the position's prior castling
/// rights, en-passant target, halfmove clock and fullmove number. Storing
/// this alongside the move (rather than reconstructing it from the move
/// alone, as a minimal implementation might) is what makes undo exact
/// rather than approximate.
#[derive(Copy, Clone, Debug)]
struct Undo {
    mv: Move,
    captured: Piece,
    castling_rights: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u32,
}

/// A chess position: piece placement, side to move, castling rights,
/// en-passant target, and the move counters a FEN string carries.
///
/// Squares are addressed with the [0x88 scheme]: `board` has 128 slots and
/// every odd-numbered rank of 8 is padding that move generation skips via
/// [`Square::offset`]'s bounds check.
///
/// [0x88 scheme]: https://www.chessprogramming.org/0x88
pub struct Position {
    board: [Piece; 128],
    side_to_move: Player,
    castling_rights: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u32,
    history: Vec<Undo>,
}

impl Clone for Position {
    fn clone(&self) -> Self {
        Self {
            board: self.board,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            history: self.history.clone(),
        }
    }
}

impl Position {
    /// The starting position of a standard chess game.
    #[must_use]
    pub fn starting() -> Self {
        Self::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("the starting position FEN is well-formed")
    }

    /// Parses a position from Forsyth-Edwards Notation. Accepts both the
    /// 4-field (board, side, castling, en-passant) and 6-field (with
    /// halfmove clock and fullmove number) variants; a missing halfmove
    /// clock/fullmove number defaults to `0`/`1`.
    pub fn from_fen(fen: &str) -> anyhow::Result<Self> {
        let mut fields = fen.split_whitespace();
        let board_field = fields.next().context("FEN is missing the board field")?;
        let side_field = fields.next().context("FEN is missing the side-to-move field")?;
        let castling_field = fields
            .next()
            .context("FEN is missing the castling-rights field")?;
        let en_passant_field = fields
            .next()
            .context("FEN is missing the en-passant field")?;
        let halfmove_field = fields.next().unwrap_or("0");
        let fullmove_field = fields.next().unwrap_or("1");

        let mut board = [Piece::Empty; 128];
        let mut rank = 7u8;
        let mut file = 0u8;
        for c in board_field.chars() {
            if c == '/' {
                if file != 8 {
                    anyhow::bail!("FEN board field has the wrong number of files in a rank: \"{board_field}\"");
                }
                if rank == 0 {
                    anyhow::bail!("FEN board field has too many ranks: \"{board_field}\"");
                }
                rank -= 1;
                file = 0;
                continue;
            }
            if ('1'..='8').contains(&c) {
                file += c.to_digit(10).expect("validated above to be an ASCII digit") as u8;
                if file > 8 {
                    anyhow::bail!("FEN board field overflows a rank: \"{board_field}\"");
                }
            } else {
                let piece = Piece::try_from(c)
                    .with_context(|| format!("invalid piece in FEN board field: \"{board_field}\""))?;
                if file >= 8 {
                    anyhow::bail!("FEN board field overflows a rank: \"{board_field}\"");
                }
                let square = Square::new(File::try_from(file)?, Rank::try_from(rank)?);
                board[square.index() as usize] = piece;
                file += 1;
            }
        }
        if file != 8 || rank != 0 {
            anyhow::bail!("FEN board field has the wrong number of files or ranks: \"{board_field}\"");
        }

        let side_to_move = Player::try_from(side_field)?;
        let castling_rights = CastlingRights::try_from(castling_field)?;
        let en_passant = match en_passant_field {
            "-" => None,
            square => Some(Square::try_from(square).with_context(|| {
                format!("invalid en-passant target in FEN: \"{en_passant_field}\"")
            })?),
        };
        let halfmove_clock = halfmove_field
            .parse()
            .with_context(|| format!("invalid halfmove clock in FEN: \"{halfmove_field}\""))?;
        let fullmove_number = fullmove_field
            .parse()
            .with_context(|| format!("invalid fullmove number in FEN: \"{fullmove_field}\""))?;

        Ok(Self {
            board,
            side_to_move,
            castling_rights,
            en_passant,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
        })
    }

    #[must_use]
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    #[must_use]
    pub fn at(&self, square: Square) -> Piece {
        self.board[square.index() as usize]
    }

    #[must_use]
    fn king_square(&self, player: Player) -> Option<Square> {
        let king = Piece::new(player, PieceKind::King);
        (0..128u8)
            .filter_map(|index| Square::try_from(index).ok())
            .find(|&square| self.at(square) == king)
    }

    /// Whether `square` is attacked by any piece belonging to `by`. Used
    /// both to detect check and to validate that castling does not move a
    /// king through or into attack.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Player) -> bool {
        let pawn_dir: i16 = if by == Player::White { 16 } else { -16 };
        let pawn = Piece::new(by, PieceKind::Pawn);
        for delta in [-1i16, 1] {
            if let Some(origin) = square.offset(-pawn_dir + delta) {
                if self.at(origin) == pawn {
                    return true;
                }
            }
        }

        let knight = Piece::new(by, PieceKind::Knight);
        for &offset in &KNIGHT_OFFSETS {
            if let Some(target) = square.offset(offset) {
                if self.at(target) == knight {
                    return true;
                }
            }
        }

        let bishop = Piece::new(by, PieceKind::Bishop);
        let queen = Piece::new(by, PieceKind::Queen);
        for &offset in &BISHOP_OFFSETS {
            let mut target = square.offset(offset);
            while let Some(at) = target {
                let occupant = self.at(at);
                if !occupant.is_empty() {
                    if occupant == bishop || occupant == queen {
                        return true;
                    }
                    break;
                }
                target = at.offset(offset);
            }
        }

        let rook = Piece::new(by, PieceKind::Rook);
        for &offset in &ROOK_OFFSETS {
            let mut target = square.offset(offset);
            while let Some(at) = target {
                let occupant = self.at(at);
                if !occupant.is_empty() {
                    if occupant == rook || occupant == queen {
                        return true;
                    }
                    break;
                }
                target = at.offset(offset);
            }
        }

        let king = Piece::new(by, PieceKind::King);
        for &offset in &KING_OFFSETS {
            if let Some(target) = square.offset(offset) {
                if self.at(target) == king {
                    return true;
                }
            }
        }

        false
    }

    /// Whether the side to move's king is currently attacked.
    #[must_use]
    pub fn in_check(&self) -> bool {
        match self.king_square(self.side_to_move) {
            Some(square) => self.is_attacked(square, !self.side_to_move),
            None => false,
        }
    }

    fn push_pawn_moves(&self, moves: &mut MoveList, from: Square, to: Square, promotion_rank: Rank) {
        if to.rank() == promotion_rank {
            for kind in [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight] {
                moves.push(Move::new(from, to, Piece::new(self.side_to_move, kind)));
            }
        } else {
            moves.push(Move::new(from, to, Piece::Empty));
        }
    }

    fn generate_pawn_moves(&self, moves: &mut MoveList, from: Square) {
        let us = self.side_to_move;
        let (push, double_rank, promotion_rank, capture_offsets) = match us {
            Player::White => (16i16, Rank::Two, Rank::Eight, [15i16, 17]),
            Player::Black => (-16i16, Rank::Seven, Rank::One, [-17i16, -15]),
        };

        if let Some(forward) = from.offset(push) {
            if self.at(forward).is_empty() {
                self.push_pawn_moves(moves, from, forward, promotion_rank);
                if from.rank() == double_rank {
                    if let Some(double) = forward.offset(push) {
                        if self.at(double).is_empty() {
                            moves.push(Move::new(from, double, Piece::Empty));
                        }
                    }
                }
            }
        }

        for offset in capture_offsets {
            let Some(target) = from.offset(offset) else {
                continue;
            };
            let occupant = self.at(target);
            if occupant.is_enemy_of(us) {
                self.push_pawn_moves(moves, from, target, promotion_rank);
            } else if Some(target) == self.en_passant {
                moves.push(Move::en_passant(from, target));
            }
        }
    }

    fn generate_knight_or_king_moves(&self, moves: &mut MoveList, from: Square, offsets: &[i16]) {
        let us = self.side_to_move;
        for &offset in offsets {
            let Some(target) = from.offset(offset) else {
                continue;
            };
            let occupant = self.at(target);
            if occupant.is_empty() || occupant.is_enemy_of(us) {
                moves.push(Move::new(from, target, Piece::Empty));
            }
        }
    }

    fn generate_sliding_moves(&self, moves: &mut MoveList, from: Square, offsets: &[i16]) {
        let us = self.side_to_move;
        for &offset in offsets {
            let mut target = from.offset(offset);
            while let Some(at) = target {
                let occupant = self.at(at);
                if occupant.is_empty() {
                    moves.push(Move::new(from, at, Piece::Empty));
                } else {
                    if occupant.is_enemy_of(us) {
                        moves.push(Move::new(from, at, Piece::Empty));
                    }
                    break;
                }
                target = at.offset(offset);
            }
        }
    }

    /// Castling is the one move kind that cannot be derived from a single
    /// origin square's attack pattern: it additionally requires the
    /// traversed squares to be empty and not attacked. Mirrors the
    /// original's hardcoded king/rook squares rather than deriving them,
    /// since both sides' back ranks are fixed in standard chess.
    fn generate_castles(&self, moves: &mut MoveList, king_square: Square) {
        let us = self.side_to_move;
        let them = !us;
        let (kingside_right, kingside_empty, kingside_path, kingside_to) = match us {
            Player::White => (CastlingRights::WHITE_KINGSIDE, [5u8, 6], [5u8, 6], 6u8),
            Player::Black => (CastlingRights::BLACK_KINGSIDE, [117u8, 118], [117u8, 118], 118u8),
        };
        if self.castling_rights.contains(kingside_right)
            && kingside_empty.iter().all(|&sq| self.empty_at(sq))
            && !self.is_attacked(king_square, them)
            && kingside_path.iter().all(|&sq| !self.attacked_at(sq, them))
        {
            moves.push(Move::castle(king_square, Square::try_from(kingside_to).expect("on-board")));
        }

        let (queenside_right, queenside_empty, queenside_path, queenside_to) = match us {
            Player::White => (CastlingRights::WHITE_QUEENSIDE, [1u8, 2, 3], [3u8, 2], 2u8),
            Player::Black => (CastlingRights::BLACK_QUEENSIDE, [113u8, 114, 115], [115u8, 114], 114u8),
        };
        if self.castling_rights.contains(queenside_right)
            && queenside_empty.iter().all(|&sq| self.empty_at(sq))
            && !self.is_attacked(king_square, them)
            && queenside_path.iter().all(|&sq| !self.attacked_at(sq, them))
        {
            moves.push(Move::castle(king_square, Square::try_from(queenside_to).expect("on-board")));
        }
    }

    fn empty_at(&self, index: u8) -> bool {
        self.at(Square::try_from(index).expect("on-board")).is_empty()
    }

    fn attacked_at(&self, index: u8, by: Player) -> bool {
        self.is_attacked(Square::try_from(index).expect("on-board"), by)
    }

    /// Generates every pseudo-legal move for the side to move: legal except
    /// possibly for leaving that side's own king in check. Use
    /// [`Position::legal_moves`] when that filtering matters.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let us = self.side_to_move;
        for index in 0..128u8 {
            let Ok(square) = Square::try_from(index) else {
                continue;
            };
            let piece = self.at(square);
            if piece.is_empty() || piece.player() != Some(us) {
                continue;
            }
            match piece.kind().expect("occupied square always has a kind") {
                PieceKind::Pawn => self.generate_pawn_moves(&mut moves, square),
                PieceKind::Knight => {
                    self.generate_knight_or_king_moves(&mut moves, square, &KNIGHT_OFFSETS);
                }
                PieceKind::Bishop => self.generate_sliding_moves(&mut moves, square, &BISHOP_OFFSETS),
                PieceKind::Rook => self.generate_sliding_moves(&mut moves, square, &ROOK_OFFSETS),
                PieceKind::Queen => {
                    self.generate_sliding_moves(&mut moves, square, &BISHOP_OFFSETS);
                    self.generate_sliding_moves(&mut moves, square, &ROOK_OFFSETS);
                }
                PieceKind::King => {
                    self.generate_knight_or_king_moves(&mut moves, square, &KING_OFFSETS);
                    self.generate_castles(&mut moves, square);
                }
            }
        }
        moves
    }

    /// Generates every legal move: pseudo-legal moves that do not leave the
    /// mover's own king in check. Implemented with make/undo rather than
    /// clone-and-test, which [`Position::undo_move`]'s exact restoration
    /// makes safe.
    #[must_use]
    pub fn legal_moves(&mut self) -> MoveList {
        let us = self.side_to_move;
        let mut legal = MoveList::new();
        for mv in self.pseudo_legal_moves() {
            self.make_move(mv);
            let king_in_check = match self.king_square(us) {
                Some(square) => self.is_attacked(square, !us),
                None => false,
            };
            self.undo_move();
            if !king_in_check {
                legal.push(mv);
            }
        }
        legal
    }

    fn revoke_castling_rights_for(&mut self, square: Square) {
        match square.index() {
            WHITE_KING_START => {
                self.castling_rights
                    .remove(CastlingRights::WHITE_KINGSIDE | CastlingRights::WHITE_QUEENSIDE);
            }
            BLACK_KING_START => {
                self.castling_rights
                    .remove(CastlingRights::BLACK_KINGSIDE | CastlingRights::BLACK_QUEENSIDE);
            }
            WHITE_KINGSIDE_ROOK => self.castling_rights.remove(CastlingRights::WHITE_KINGSIDE),
            WHITE_QUEENSIDE_ROOK => self.castling_rights.remove(CastlingRights::WHITE_QUEENSIDE),
            BLACK_KINGSIDE_ROOK => self.castling_rights.remove(CastlingRights::BLACK_KINGSIDE),
            BLACK_QUEENSIDE_ROOK => self.castling_rights.remove(CastlingRights::BLACK_QUEENSIDE),
            _ => {}
        }
    }

    /// Applies `mv`, pushing enough state onto the history stack for
    /// [`Position::undo_move`] to invert it exactly.
    pub fn make_move(&mut self, mv: Move) {
        let us = self.side_to_move;
        let piece = self.at(mv.from());
        let captured = self.at(mv.to());

        self.history.push(Undo {
            mv,
            captured,
            castling_rights: self.castling_rights,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });

        self.board[mv.to().index() as usize] = piece;
        self.board[mv.from().index() as usize] = Piece::Empty;

        if mv.is_en_passant() {
            let captured_square = mv
                .to()
                .offset(if us == Player::White { -16 } else { 16 })
                .expect("en-passant capture square is always on-board");
            self.board[captured_square.index() as usize] = Piece::Empty;
        }

        if !mv.promotion().is_empty() {
            self.board[mv.to().index() as usize] = mv.promotion();
        }

        if mv.is_castle() {
            let (rook_from, rook_to) = match mv.to().index() {
                6 => (WHITE_KINGSIDE_ROOK, 5),
                2 => (WHITE_QUEENSIDE_ROOK, 3),
                118 => (BLACK_KINGSIDE_ROOK, 117),
                114 => (BLACK_QUEENSIDE_ROOK, 115),
                _ => unreachable!("castling move generation only produces these destinations"),
            };
            let rook_from = Square::try_from(rook_from).expect("on-board");
            let rook_to = Square::try_from(rook_to).expect("on-board");
            self.board[rook_to.index() as usize] = self.board[rook_from.index() as usize];
            self.board[rook_from.index() as usize] = Piece::Empty;
        }

        self.revoke_castling_rights_for(mv.from());
        self.revoke_castling_rights_for(mv.to());

        let is_pawn_move = piece.kind() == Some(PieceKind::Pawn);
        self.en_passant = if is_pawn_move {
            let delta = i16::from(mv.to().index()) - i16::from(mv.from().index());
            if delta == 32 {
                mv.from().offset(16)
            } else if delta == -32 {
                mv.from().offset(-16)
            } else {
                None
            }
        } else {
            None
        };

        self.halfmove_clock = if is_pawn_move || !captured.is_empty() {
            0
        } else {
            self.halfmove_clock + 1
        };
        if us == Player::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = !us;
    }

    /// Inverts the most recent [`Position::make_move`] call, restoring the
    /// position -- including castling rights and the en-passant target --
    /// exactly as it was before that move.
    pub fn undo_move(&mut self) {
        let Some(undo) = self.history.pop() else {
            return;
        };
        let mv = undo.mv;
        self.side_to_move = !self.side_to_move;
        let us = self.side_to_move;

        let moved_piece = if mv.promotion().is_empty() {
            self.board[mv.to().index() as usize]
        } else {
            Piece::new(us, PieceKind::Pawn)
        };
        self.board[mv.from().index() as usize] = moved_piece;
        self.board[mv.to().index() as usize] = undo.captured;

        if mv.is_en_passant() {
            let captured_square = mv
                .to()
                .offset(if us == Player::White { -16 } else { 16 })
                .expect("en-passant capture square is always on-board");
            self.board[captured_square.index() as usize] = Piece::new(!us, PieceKind::Pawn);
        }

        if mv.is_castle() {
            let (rook_from, rook_to) = match mv.to().index() {
                6 => (WHITE_KINGSIDE_ROOK, 5),
                2 => (WHITE_QUEENSIDE_ROOK, 3),
                118 => (BLACK_KINGSIDE_ROOK, 117),
                114 => (BLACK_QUEENSIDE_ROOK, 115),
                _ => unreachable!("castling move generation only produces these destinations"),
            };
            let rook_from = Square::try_from(rook_from).expect("on-board");
            let rook_to = Square::try_from(rook_to).expect("on-board");
            self.board[rook_from.index() as usize] = self.board[rook_to.index() as usize];
            self.board[rook_to.index() as usize] = Piece::Empty;
        }

        self.castling_rights = undo.castling_rights;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;
    }

    /// Parses `input` as long algebraic notation and, if it names a legal
    /// move in this position, applies it. Rejects the move without
    /// mutating the position otherwise -- moves that merely look
    /// plausible are never applied without being checked against the
    /// legal-move list.
    pub fn apply_long_algebraic(&mut self, input: &str) -> anyhow::Result<()> {
        let candidate = Move::from_long_algebraic(input)?;
        let legal = self.legal_moves();
        let matched = legal
            .into_iter()
            .find(|mv| {
                mv.from() == candidate.from()
                    && mv.to() == candidate.to()
                    && mv.promotion().kind() == candidate.promotion().kind()
            })
            .with_context(|| format!("illegal move: \"{input}\""))?;
        self.make_move(matched);
        Ok(())
    }

    /// Counts the leaf nodes of the legal-move tree rooted at this
    /// position, `depth` plies deep. Used to validate move generation
    /// against known reference counts.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }
        nodes
    }
}

impl fmt::Display for Position {
    /// Renders the position as FEN.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..8u8).rev() {
            let mut empty = 0u8;
            for file in 0..8u8 {
                let square = Square::new(
                    File::try_from(file).map_err(|_| fmt::Error)?,
                    Rank::try_from(rank).map_err(|_| fmt::Error)?,
                );
                let piece = self.at(square);
                if piece.is_empty() {
                    empty += 1;
                } else {
                    if empty > 0 {
                        write!(f, "{empty}")?;
                        empty = 0;
                    }
                    write!(f, "{piece}")?;
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }
        write!(f, " {} {}", self.side_to_move, self.castling_rights)?;
        match self.en_passant {
            Some(square) => write!(f, " {square}")?,
            None => write!(f, " -")?,
        }
        write!(f, " 0 1")
    }
}

impl fmt::Debug for Position {
    /// Renders a human-readable ASCII board dump, rank 8 at the top.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "FEN: {self}")?;
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let square = Square::new(
                    File::try_from(file).map_err(|_| fmt::Error)?,
                    Rank::try_from(rank).map_err(|_| fmt::Error)?,
                );
                write!(f, "{} ", self.at(square))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Position, Square};

    #[test]
    fn starting_position_fen_roundtrip() {
        let position = Position::starting();
        assert_eq!(
            position.to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn fen_accepts_four_or_six_fields() {
        let four = Position::from_fen("8/8/8/8/8/8/8/4K2k w - -").unwrap();
        let six = Position::from_fen("8/8/8/8/8/8/8/4K2k w - - 5 12").unwrap();
        assert_eq!(four.to_string(), "8/8/8/8/8/8/8/4K2k w - - 0 1");
        assert_eq!(six.to_string(), "8/8/8/8/8/8/8/4K2k w - - 0 1");
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let mut position = Position::starting();
        assert_eq!(position.legal_moves().len(), 20);
    }

    #[test]
    fn perft_matches_known_counts() {
        let mut position = Position::starting();
        assert_eq!(position.perft(1), 20);
        assert_eq!(position.perft(2), 400);
        assert_eq!(position.perft(3), 8_902);
    }

    #[test]
    fn make_undo_restores_position_exactly() {
        let mut position = Position::starting();
        let before = position.to_string();
        let mv = position.legal_moves()[0];
        position.make_move(mv);
        assert_ne!(position.to_string(), before);
        position.undo_move();
        assert_eq!(position.to_string(), before);
    }

    #[test]
    fn make_undo_restores_castling_rights_and_en_passant() {
        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let before = position.to_string();
        position.apply_long_algebraic("e1g1").unwrap();
        assert_eq!(position.to_string(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 0 1");
        position.undo_move();
        assert_eq!(position.to_string(), before);
    }

    #[test]
    fn en_passant_capture() {
        let mut position =
            Position::from_fen("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        position.apply_long_algebraic("d4e3").unwrap();
        assert!(position.at(Square::try_from("e4").unwrap()).is_empty());
    }

    #[test]
    fn illegal_move_is_rejected_without_mutation() {
        let mut position = Position::starting();
        let before = position.to_string();
        assert!(position.apply_long_algebraic("e2e5").is_err());
        assert_eq!(position.to_string(), before);
    }

    #[test]
    fn checkmate_has_no_legal_moves_and_is_in_check() {
        // Fool's mate.
        let mut position = Position::starting();
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            position.apply_long_algebraic(mv).unwrap();
        }
        assert!(position.in_check());
        assert!(position.legal_moves().is_empty());
    }

    #[test]
    fn stalemate_has_no_legal_moves_and_is_not_in_check() {
        let mut position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!position.in_check());
        assert!(position.legal_moves().is_empty());
    }
}
