//! Pawn terms: repeated early pushes, hanging pawns and their would-be
//! defenders, and early f-pawn advances.

use chess_core::{BoardState, Color, Coord, Piece, PieceKind};

use super::{CENTER, Weights, covers, has, hanging_pawns, is_central, phase, pieces, rel};

const KNIGHT_FILES: [i8; 2] = [1, 6];
const BISHOP_FILES: [i8; 2] = [2, 5];

// =============================================================================
// Pawn double move
// =============================================================================

pub(crate) fn pawn_double_move<B: BoardState>(board: &B, w: &Weights) -> i32 {
    if phase::piece_count(board) < w.double_move_min_pieces {
        return 0;
    }
    let mut score = 0;
    for color in [Color::White, Color::Black] {
        for file in 0..8 {
            score -= color.sign() * double_move_penalty(board, w, color, file);
        }
    }
    score
}

/// Penalty for the first `color` pawn on `file`, scanning from its own back
/// rank, if it stands further than one double step from its start.
fn double_move_penalty<B: BoardState>(board: &B, w: &Weights, color: Color, file: i8) -> i32 {
    let Some((rank, at)) = (0..8)
        .map(|r| (r, rel(color, file, r)))
        .find(|&(_, at)| has(board, at, color, PieceKind::Pawn))
    else {
        return 0;
    };
    if rank <= 3 || board.attacked_at(at, color.other()) {
        return 0;
    }

    let mut penalty = w.pawn_double_move;
    if file == 3 || file == 4 {
        penalty += w.pawn_double_move_center_file;
    }
    let controls_center = CENTER
        .iter()
        .any(|c| (c.file - at.file).abs() == 1 && c.rank == at.rank + color.forward());
    if !controls_center && (2..=5).contains(&file) {
        penalty += w.pawn_lost_center_control;
    }
    penalty
}

// =============================================================================
// Undefended pawns
// =============================================================================

pub(crate) fn undefended_pawns<B: BoardState>(board: &B, w: &Weights) -> i32 {
    if phase::past_opening_by_origin(board, w) {
        return 0;
    }
    let mut score = 0;
    for color in [Color::White, Color::Black] {
        for pawn in hanging_pawns(board, color) {
            let pawn_at = Coord::from_sq(pawn);
            let mut pawn_score = -w.undefended_pawn + potential_defenders(board, w, pawn_at, color);

            // Attackers we could take back.
            for (from, pc) in pieces(board) {
                if pc.color == color {
                    continue;
                }
                let hits_pawn = board
                    .pseudo_legal_moves_from(from)
                    .iter()
                    .any(|mv| mv.to == pawn);
                if hits_pawn && board.is_attacked(from, color) {
                    pawn_score += w.attacker_capturable;
                }
            }

            score += color.sign() * pawn_score;
        }
    }
    score
}

fn defender_base(w: &Weights, kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Knight => w.defender_knight,
        PieceKind::Bishop => w.defender_bishop,
        PieceKind::Rook => w.defender_rook,
        PieceKind::Queen => w.defender_queen,
        PieceKind::Pawn | PieceKind::King => 0,
    }
}

fn minor_on_home(pc: Piece, at: Coord) -> bool {
    let files: &[i8] = match pc.kind {
        PieceKind::Knight => &KNIGHT_FILES,
        PieceKind::Bishop => &BISHOP_FILES,
        _ => return false,
    };
    files.iter().any(|&f| rel(pc.color, f, 0) == at)
}

/// Bonus for `color` pieces that could step next to (or a knight's jump
/// from) the hanging pawn on a square the enemy does not attack. Each piece
/// counts once, with its best such move.
///
/// Taking the best move rather than the first generated one keeps the term
/// independent of move order, so mirrored positions score exactly negated.
fn potential_defenders<B: BoardState>(board: &B, w: &Weights, pawn: Coord, color: Color) -> i32 {
    let enemy = color.other();
    let mut bonus = 0;

    for (s, pc) in pieces(board) {
        if pc.color != color || pc.kind == PieceKind::Pawn {
            continue;
        }
        let mut base = defender_base(w, pc.kind);
        if minor_on_home(pc, Coord::from_sq(s)) {
            base += w.defender_from_home;
        }

        let best = board
            .pseudo_legal_moves_from(s)
            .into_iter()
            .map(|mv| mv.to_coord())
            .filter(|&to| covers(to, pawn) && !board.attacked_at(to, enemy))
            .map(|to| {
                if is_central(to) {
                    base + w.defender_central
                } else {
                    base
                }
            })
            .max();
        bonus += best.unwrap_or(0);
    }

    bonus
}

// =============================================================================
// Minor pieces developing to defend
// =============================================================================

/// Knights and bishops still at home that can develop onto a safe square
/// covering a hanging pawn. Every such move counts.
pub(crate) fn minor_defense<B: BoardState>(board: &B, w: &Weights) -> i32 {
    if phase::past_opening_by_origin(board, w) {
        return 0;
    }
    let mut score = 0;
    for color in [Color::White, Color::Black] {
        let hanging: Vec<Coord> = hanging_pawns(board, color)
            .into_iter()
            .map(Coord::from_sq)
            .collect();
        if hanging.is_empty() {
            continue;
        }

        let mut bonus = 0;
        for (s, pc) in pieces(board) {
            if pc.color != color || !minor_on_home(pc, Coord::from_sq(s)) {
                continue;
            }
            for mv in board.pseudo_legal_moves_from(s) {
                let to = mv.to_coord();
                if hanging.iter().any(|&p| covers(to, p)) && !board.attacked_at(to, color.other()) {
                    bonus += w.minor_defense;
                    if is_central(to) {
                        bonus += w.minor_defense_central;
                    }
                }
            }
        }
        score += color.sign() * bonus;
    }
    score
}

// =============================================================================
// Early f-pawn
// =============================================================================

pub(crate) fn early_f_pawn<B: BoardState>(board: &B, w: &Weights) -> i32 {
    if !phase::is_opening(board, w) {
        return 0;
    }
    let mut score = 0;
    for color in [Color::White, Color::Black] {
        if board.piece_on(rel(color, 5, 1)).is_some() {
            continue;
        }
        let mut penalty = 0;
        if has(board, rel(color, 5, 2), color, PieceKind::Pawn) {
            penalty += w.f_pawn_one_step;
        }
        if has(board, rel(color, 5, 3), color, PieceKind::Pawn) {
            penalty += w.f_pawn_two_steps;
        }
        score -= color.sign() * penalty;
    }
    score
}
