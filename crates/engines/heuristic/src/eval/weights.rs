//! Named evaluation weights.
//!
//! Every heuristic literal lives here. The defaults are the tuned values the
//! engine ships with; a config file may override any subset of them.

use serde::{Deserialize, Serialize};

/// Tunable constants for every evaluation term, in centipawns unless noted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    // --- piece placement (knights) ---
    /// Maximum centralisation bonus; decreases by one per step of distance
    pub knight_center_max: i32,
    /// Enemy pawn two ranks away can push to attack the knight
    pub knight_push_threat: i32,
    /// Enemy pawn already attacks the knight
    pub knight_pawn_attack: i32,
    /// Enemy pawn beside the knight with its push square free
    pub knight_side_pawn: i32,

    // --- center control ---
    pub center_pawn: i32,
    pub center_piece: i32,
    /// Occupancy multiplier while in the opening
    pub center_opening_factor: i32,
    pub center_occupant_attacked: i32,
    pub center_attack: i32,
    pub center_attack_opening: i32,

    // --- early queen ---
    pub queen_moved: i32,
    /// Per square of Manhattan distance from d1/d8
    pub queen_distance: i32,

    // --- piece development ---
    pub undeveloped_minor: i32,
    /// Undeveloped minor penalty while that side has a pawn under attack
    pub undeveloped_minor_urgent: i32,
    pub knight_good_square: i32,
    pub bishop_good_square: i32,
    /// Extra good-square bonus while that side has a pawn under attack
    pub good_square_urgent: i32,
    pub misplaced_minor: i32,
    pub rook_moved: i32,

    // --- king ---
    pub king_left_home_rank: i32,
    pub king_per_rank: i32,
    pub castled: i32,
    pub kingside_rights: i32,
    pub queenside_rights: i32,

    // --- king pawn shield ---
    pub shield_pawn_pushed: i32,
    pub shield_file_exposed: i32,
    pub shield_diagonal_exposed: i32,

    // --- pawn double move ---
    pub pawn_double_move: i32,
    pub pawn_double_move_center_file: i32,
    pub pawn_lost_center_control: i32,

    // --- undefended pawns ---
    pub undefended_pawn: i32,
    pub attacker_capturable: i32,

    // --- potential defenders ---
    pub defender_knight: i32,
    pub defender_bishop: i32,
    pub defender_rook: i32,
    pub defender_queen: i32,
    pub defender_from_home: i32,
    pub defender_central: i32,

    // --- minor pieces developing to defend ---
    pub minor_defense: i32,
    pub minor_defense_central: i32,

    // --- early f-pawn ---
    pub f_pawn_one_step: i32,
    pub f_pawn_two_steps: i32,

    // --- phase gates (piece counts, not centipawns) ---
    /// Opening while fewer than this many pieces left their back rank
    pub opening_developed_below: u32,
    /// Opening-only terms switch off once more than this many pieces have
    /// left their origin squares
    pub opening_developed_max: u32,
    /// Double-move term needs at least this many pieces on the board
    pub double_move_min_pieces: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            knight_center_max: 3,
            knight_push_threat: 15,
            knight_pawn_attack: 25,
            knight_side_pawn: 20,

            center_pawn: 20,
            center_piece: 10,
            center_opening_factor: 2,
            center_occupant_attacked: 5,
            center_attack: 5,
            center_attack_opening: 15,

            queen_moved: 15,
            queen_distance: 2,

            undeveloped_minor: 40,
            undeveloped_minor_urgent: 80,
            knight_good_square: 50,
            bishop_good_square: 45,
            good_square_urgent: 30,
            misplaced_minor: 20,
            rook_moved: 15,

            king_left_home_rank: 50,
            king_per_rank: 10,
            castled: 40,
            kingside_rights: 15,
            queenside_rights: 10,

            shield_pawn_pushed: 80,
            shield_file_exposed: 50,
            shield_diagonal_exposed: 60,

            pawn_double_move: 20,
            pawn_double_move_center_file: 10,
            pawn_lost_center_control: 10,

            undefended_pawn: 120,
            attacker_capturable: 100,

            defender_knight: 70,
            defender_bishop: 65,
            defender_rook: 30,
            defender_queen: 10,
            defender_from_home: 40,
            defender_central: 25,

            minor_defense: 35,
            minor_defense_central: 15,

            f_pawn_one_step: 30,
            f_pawn_two_steps: 60,

            opening_developed_below: 7,
            opening_developed_max: 6,
            double_move_min_pieces: 28,
        }
    }
}
