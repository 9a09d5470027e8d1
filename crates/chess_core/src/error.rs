//! Errors raised while building positions from external input.

use thiserror::Error;

/// Reasons a FEN string can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {0}")]
    MissingFields(usize),

    #[error("expected 8 ranks in board section, found {0}")]
    RankCount(usize),

    #[error("invalid piece character '{0}'")]
    PieceChar(char),

    #[error("rank {rank} describes {files} files")]
    RankWidth { rank: usize, files: i8 },

    #[error("invalid side to move '{0}'")]
    SideToMove(String),

    #[error("invalid castling character '{0}'")]
    CastlingChar(char),

    #[error("invalid en-passant square '{0}'")]
    EnPassant(String),

    #[error("invalid move counter '{0}'")]
    Counter(String),
}
