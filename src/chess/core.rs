//! Board primitives commonly used within [`crate::chess`]: files, ranks,
//! squares addressed with the [0x88 scheme], pieces, colors, castling rights
//! and moves.
//!
//! [0x88 scheme]: https://www.chessprogramming.org/0x88

use std::fmt;

use anyhow::{bail, Context};
use arrayvec::ArrayVec;
use bitflags::bitflags;

/// Width of the playable board. The underlying 0x88 addressing allocates 16
/// columns per rank; only the first 8 are on-board.
pub const BOARD_WIDTH: u8 = 8;

/// A column of the chessboard, normally denoted by a lowercase letter in
/// algebraic notation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    const ALL: [Self; 8] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];

    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for File {
    type Error = anyhow::Error;

    fn try_from(file: u8) -> anyhow::Result<Self> {
        Self::ALL
            .get(file as usize)
            .copied()
            .with_context(|| format!("unknown file: expected within 0..{BOARD_WIDTH}, got {file}"))
    }
}

impl TryFrom<char> for File {
    type Error = anyhow::Error;

    fn try_from(file: char) -> anyhow::Result<Self> {
        match file {
            'a'..='h' => Ok(Self::ALL[(file as u8 - b'a') as usize]),
            _ => bail!("unknown file: expected within 'a'..='h', got '{file}'"),
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", (b'a' + *self as u8) as char)
    }
}

/// A row of the chessboard. Zero-based: rank 1 is [`Rank::One`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Rank {
    const ALL: [Self; 8] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
    ];

    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The rank on which a player's pawns start.
    #[must_use]
    pub(crate) fn pawns_starting(player: Player) -> Self {
        match player {
            Player::White => Self::Two,
            Player::Black => Self::Seven,
        }
    }

    /// The rank on which a player's king and rooks start.
    #[must_use]
    pub(crate) fn backrank(player: Player) -> Self {
        match player {
            Player::White => Self::One,
            Player::Black => Self::Eight,
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = anyhow::Error;

    fn try_from(rank: u8) -> anyhow::Result<Self> {
        Self::ALL
            .get(rank as usize)
            .copied()
            .with_context(|| format!("unknown rank: expected within 0..{BOARD_WIDTH}, got {rank}"))
    }
}

impl TryFrom<char> for Rank {
    type Error = anyhow::Error;

    fn try_from(rank: char) -> anyhow::Result<Self> {
        match rank {
            '1'..='8' => Ok(Self::ALL[(rank as u8 - b'1') as usize]),
            _ => bail!("unknown rank: expected within '1'..='8', got '{rank}'"),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}

/// A relative direction on the board, used to probe neighboring squares
/// without leaving the 0x88 board's implicit bounds check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub(crate) enum Direction {
    Up,
    Down,
}

impl Direction {
    #[must_use]
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    #[must_use]
    const fn offset(self) -> i16 {
        match self {
            Self::Up => 16,
            Self::Down => -16,
        }
    }
}

/// A square on the 0x88 board: `rank * 16 + file`. Off-board indices (those
/// with `index & 0x88 != 0`) are reachable via arithmetic but are never valid
/// [`Square`] values -- they exist only transiently as `i16` candidates while
/// probing neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Mask that isolates the off-board bits of the 0x88 scheme.
    const OFF_BOARD_MASK: u8 = 0x88;

    #[must_use]
    pub fn new(file: File, rank: Rank) -> Self {
        Self(rank.index() * 16 + file.index())
    }

    #[must_use]
    pub fn file(self) -> File {
        File::try_from(self.0 & 7).expect("square invariant: file is always 0..8")
    }

    #[must_use]
    pub fn rank(self) -> Rank {
        Rank::try_from(self.0 >> 4).expect("square invariant: rank is always 0..8")
    }

    /// The raw 0x88 index, `rank * 16 + file`.
    #[must_use]
    pub(crate) fn index(self) -> u8 {
        self.0
    }

    #[must_use]
    fn is_on_board(candidate: i16) -> bool {
        (0..=0xFF).contains(&candidate) && (candidate as u8) & Self::OFF_BOARD_MASK == 0
    }

    /// Offsets a square by a raw 0x88 delta (e.g. a knight jump of `+33`),
    /// returning `None` if the result falls off the board. This is the core
    /// primitive that lets 0x88 addressing detect edge wraparound without
    /// separate file/rank bounds checks.
    #[must_use]
    pub(crate) fn offset(self, delta: i16) -> Option<Self> {
        let candidate = i16::from(self.0) + delta;
        if Self::is_on_board(candidate) {
            Some(Self(candidate as u8))
        } else {
            None
        }
    }

    #[must_use]
    pub(crate) fn shift(self, direction: Direction) -> Option<Self> {
        self.offset(direction.offset())
    }
}

impl TryFrom<u8> for Square {
    type Error = anyhow::Error;

    fn try_from(index: u8) -> anyhow::Result<Self> {
        if index & Self::OFF_BOARD_MASK != 0 {
            bail!("unknown square index: {index} is off the 0x88 board");
        }
        Ok(Self(index))
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    fn try_from(square: &str) -> anyhow::Result<Self> {
        let bytes = square.as_bytes();
        if bytes.len() != 2 {
            bail!("unknown square: expected two chars, got '{square}'");
        }
        let file = File::try_from(bytes[0] as char)?;
        let rank = Rank::try_from(bytes[1] as char)?;
        Ok(Self::new(file, rank))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// The side to move or own a piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Player {
    White,
    Black,
}

impl std::ops::Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl TryFrom<&str> for Player {
    type Error = anyhow::Error;

    fn try_from(player: &str) -> anyhow::Result<Self> {
        match player {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => bail!("unknown side to move: expected 'w' or 'b', got '{player}'"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", if *self == Self::White { 'w' } else { 'b' })
    }
}

/// Kind of a piece, independent of color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value in centipawns. The king's value is never added to the
    /// evaluation (see [`crate::evaluation::material`]); it exists here so
    /// move ordering can compute MVV-LVA deltas uniformly.
    #[must_use]
    pub(crate) const fn value(self) -> i32 {
        match self {
            Self::Pawn => 100,
            Self::Knight => 320,
            Self::Bishop => 330,
            Self::Rook => 500,
            Self::Queen => 900,
            Self::King => 20_000,
        }
    }
}

/// A piece on the board, or the empty square.
///
/// `Piece`'s integer ordering is part of the move generator's public
/// contract: every White piece must compare less than every Black piece, and
/// [`Piece::Empty`] must compare less than any piece. The generator uses this
/// to answer "is this square occupied by an enemy?" with a single comparison
/// against [`Piece::Empty`] and the mover's color boundary instead of
/// matching on color explicitly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Piece {
    Empty,
    WhitePawn,
    WhiteKnight,
    WhiteBishop,
    WhiteRook,
    WhiteQueen,
    WhiteKing,
    BlackPawn,
    BlackKnight,
    BlackBishop,
    BlackRook,
    BlackQueen,
    BlackKing,
}

impl Piece {
    #[must_use]
    pub fn new(player: Player, kind: PieceKind) -> Self {
        match (player, kind) {
            (Player::White, PieceKind::Pawn) => Self::WhitePawn,
            (Player::White, PieceKind::Knight) => Self::WhiteKnight,
            (Player::White, PieceKind::Bishop) => Self::WhiteBishop,
            (Player::White, PieceKind::Rook) => Self::WhiteRook,
            (Player::White, PieceKind::Queen) => Self::WhiteQueen,
            (Player::White, PieceKind::King) => Self::WhiteKing,
            (Player::Black, PieceKind::Pawn) => Self::BlackPawn,
            (Player::Black, PieceKind::Knight) => Self::BlackKnight,
            (Player::Black, PieceKind::Bishop) => Self::BlackBishop,
            (Player::Black, PieceKind::Rook) => Self::BlackRook,
            (Player::Black, PieceKind::Queen) => Self::BlackQueen,
            (Player::Black, PieceKind::King) => Self::BlackKing,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    #[must_use]
    pub fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::WhitePawn
            | Self::WhiteKnight
            | Self::WhiteBishop
            | Self::WhiteRook
            | Self::WhiteQueen
            | Self::WhiteKing => Some(Player::White),
            Self::BlackPawn
            | Self::BlackKnight
            | Self::BlackBishop
            | Self::BlackRook
            | Self::BlackQueen
            | Self::BlackKing => Some(Player::Black),
        }
    }

    #[must_use]
    pub fn kind(self) -> Option<PieceKind> {
        match self {
            Self::Empty => None,
            Self::WhitePawn | Self::BlackPawn => Some(PieceKind::Pawn),
            Self::WhiteKnight | Self::BlackKnight => Some(PieceKind::Knight),
            Self::WhiteBishop | Self::BlackBishop => Some(PieceKind::Bishop),
            Self::WhiteRook | Self::BlackRook => Some(PieceKind::Rook),
            Self::WhiteQueen | Self::BlackQueen => Some(PieceKind::Queen),
            Self::WhiteKing | Self::BlackKing => Some(PieceKind::King),
        }
    }

    /// Whether this piece belongs to the opponent of `player`, i.e. is a
    /// legal capture target for `player`. Relies on the White-less-than-Black
    /// ordering: everything is an enemy of `player` iff it falls on the other
    /// side of the `Empty`/White/Black ordering boundary.
    #[must_use]
    pub(crate) fn is_enemy_of(self, player: Player) -> bool {
        match player {
            Player::White => self >= Self::BlackPawn,
            Player::Black => self != Self::Empty && self <= Self::WhiteKing,
        }
    }

    /// Algebraic notation symbol used in FEN: uppercase for White, lowercase
    /// for Black.
    fn algebraic_symbol(self) -> Option<char> {
        let symbol = match self.kind()? {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        Some(match self.player()? {
            Player::White => symbol.to_ascii_uppercase(),
            Player::Black => symbol,
        })
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let player = if symbol.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        let kind = match symbol.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => bail!("unknown piece symbol: expected within \"PNBRQKpnbrqk\", got '{symbol}'"),
        };
        Ok(Self::new(player, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.algebraic_symbol().unwrap_or('.'))
    }
}

bitflags! {
    /// Castling rights still available to each side. Bits follow a
    /// FEN-adjacent encoding: White kingside=1, White queenside=2, Black
    /// kingside=4, Black queenside=8. Rights only ever get cleared over the
    /// life of a game, never set.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct CastlingRights: u8 {
        const WHITE_KINGSIDE = 0b0001;
        const WHITE_QUEENSIDE = 0b0010;
        const BLACK_KINGSIDE = 0b0100;
        const BLACK_QUEENSIDE = 0b1000;
    }
}

impl TryFrom<&str> for CastlingRights {
    type Error = anyhow::Error;

    fn try_from(fen: &str) -> anyhow::Result<Self> {
        if fen == "-" {
            return Ok(Self::empty());
        }
        let mut rights = Self::empty();
        for symbol in fen.chars() {
            rights |= match symbol {
                'K' => Self::WHITE_KINGSIDE,
                'Q' => Self::WHITE_QUEENSIDE,
                'k' => Self::BLACK_KINGSIDE,
                'q' => Self::BLACK_QUEENSIDE,
                _ => bail!("unknown castling rights symbol: '{symbol}' in \"{fen}\""),
            };
        }
        Ok(rights)
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        if self.contains(Self::WHITE_KINGSIDE) {
            write!(f, "K")?;
        }
        if self.contains(Self::WHITE_QUEENSIDE) {
            write!(f, "Q")?;
        }
        if self.contains(Self::BLACK_KINGSIDE) {
            write!(f, "k")?;
        }
        if self.contains(Self::BLACK_QUEENSIDE) {
            write!(f, "q")?;
        }
        Ok(())
    }
}

/// A single ply: origin, destination, promotion piece (if any), and the two
/// flags the generator needs to disambiguate special moves that `(from, to)`
/// alone cannot: en-passant captures and castling.
///
/// The captured piece and the prior castling/en-passant state are *not*
/// stored here -- they belong to the position's undo history (see
/// [`crate::chess::position::Position::make_move`]), not to the move itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Piece,
    en_passant: bool,
    castle: bool,
}

impl Move {
    #[must_use]
    pub(crate) fn new(from: Square, to: Square, promotion: Piece) -> Self {
        Self {
            from,
            to,
            promotion,
            en_passant: false,
            castle: false,
        }
    }

    #[must_use]
    pub(crate) fn en_passant(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: Piece::Empty,
            en_passant: true,
            castle: false,
        }
    }

    #[must_use]
    pub(crate) fn castle(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: Piece::Empty,
            en_passant: false,
            castle: true,
        }
    }

    #[must_use]
    pub fn from(&self) -> Square {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> Square {
        self.to
    }

    #[must_use]
    pub fn promotion(&self) -> Piece {
        self.promotion
    }

    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        self.en_passant
    }

    #[must_use]
    pub fn is_castle(&self) -> bool {
        self.castle
    }

    /// Parses a move in long algebraic notation (`e2e4`, `e7e8q`). The
    /// result is a "raw" move: it does not know whether it is an en-passant
    /// capture or a castle, because that requires consulting a [`Position`].
    /// [`crate::chess::position::Position::apply_long_algebraic`] fills in
    /// those flags by matching against the legal moves of the position it is
    /// applied to.
    ///
    /// [`Position`]: crate::chess::position::Position
    pub fn from_long_algebraic(input: &str) -> anyhow::Result<Self> {
        if input == "0000" {
            bail!("the null move has no origin/destination squares");
        }
        if input.len() != 4 && input.len() != 5 {
            bail!("unknown move: expected 4 or 5 chars, got '{input}'");
        }
        let from = Square::try_from(&input[0..2])?;
        let to = Square::try_from(&input[2..4])?;
        let promotion = match input.as_bytes().get(4) {
            None => Piece::Empty,
            Some(b'q') => Piece::WhiteQueen,
            Some(b'r') => Piece::WhiteRook,
            Some(b'b') => Piece::WhiteBishop,
            Some(b'n') => Piece::WhiteKnight,
            Some(c) => bail!("unknown promotion piece: '{}'", *c as char),
        };
        Ok(Self::new(from, to, promotion))
    }

    /// Renders the null move, `0000`, used when no legal moves exist at the
    /// root of a search.
    #[must_use]
    pub fn null() -> String {
        "0000".to_string()
    }
}

impl fmt::Display for Move {
    /// Long algebraic notation: `<from><to>[<promotion>]`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion.kind() {
            let symbol = match kind {
                PieceKind::Queen => 'q',
                PieceKind::Rook => 'r',
                PieceKind::Bishop => 'b',
                PieceKind::Knight => 'n',
                _ => unreachable!("pawns only promote to queen/rook/bishop/knight"),
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// A fixed-capacity list of candidate moves. 218 is the widely cited upper
/// bound on the number of legal moves in any reachable chess position;
/// [`Move`] is small enough that stack storage avoids allocation entirely in
/// the hottest path of the engine.
pub type MoveList = ArrayVec<Move, 256>;
