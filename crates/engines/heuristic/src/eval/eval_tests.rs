use super::*;
use chess_core::Position;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

fn term(t: Term, fen: &str) -> i32 {
    Evaluator::new().term(t, &pos(fen))
}

#[test]
fn test_startpos_is_balanced() {
    let eval = Evaluator::new();
    let start = Position::startpos();
    for (t, score) in eval.breakdown(&start) {
        assert_eq!(score, 0, "{t} should be 0 in the starting position");
    }
    assert_eq!(eval.evaluate(&start), 0);
}

#[test]
fn test_material_queen_removed() {
    // Black queen missing
    let fen = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    assert_eq!(term(Term::Material, fen), 900);
    assert_eq!(term(Term::Material, &pos(fen).mirrored().to_fen()), -900);
}

#[test]
fn test_after_e4_center_control() {
    // e4 pawn doubled for the opening (40) plus White hitting d5 (15).
    let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    assert_eq!(term(Term::CenterControl, fen), 55);
    assert_eq!(Evaluator::new().evaluate(&pos(fen)), 55);
}

#[test]
fn test_knight_penalties_stack() {
    // Knight on e4: centre bonus 3, d6 pawn can push to d5 (15), f5 pawn
    // already attacks (25), f4 pawn beside with f3 free (20). All apply.
    let fen = "k7/8/3p4/5p2/4Np2/8/8/7K w - - 0 1";
    assert_eq!(term(Term::PiecePlacement, fen), 3 - 15 - 25 - 20);
}

#[test]
fn test_knight_push_threat_needs_unguarded_square() {
    // Same d6 pawn, but the c4 bishop now covers d5.
    let fen = "k7/8/3p4/8/2B1N3/8/8/7K w - - 0 1";
    assert_eq!(term(Term::PiecePlacement, fen), 3);
    let fen = "k7/8/3p4/8/4N3/8/8/7K w - - 0 1";
    assert_eq!(term(Term::PiecePlacement, fen), 3 - 15);
}

#[test]
fn test_knight_centralisation() {
    assert_eq!(term(Term::PiecePlacement, "k7/8/8/8/3N4/8/8/7K w - - 0 1"), 3);
    assert_eq!(term(Term::PiecePlacement, "k7/8/8/8/8/2N5/8/7K w - - 0 1"), 1);
    assert_eq!(term(Term::PiecePlacement, "k7/8/8/8/8/8/8/N6K w - - 0 1"), 0);
}

#[test]
fn test_early_queen() {
    // h5 is 8 steps from d1: 15 + 2 * 8
    assert_eq!(term(Term::EarlyQueen, "4k3/8/8/7Q/8/8/8/4K3 w - - 0 1"), -31);
    assert_eq!(term(Term::EarlyQueen, "3qk3/8/8/8/8/8/8/3QK3 w - - 0 1"), 0);
}

#[test]
fn test_development_good_and_bad_squares() {
    // Nf3: three minors at home (-120), knight on a good square (+50).
    let fen = "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b KQkq - 1 1";
    assert_eq!(term(Term::PieceDevelopment, fen), -70 + 160);
    // Nh3 instead: not a good square and not attacked (-20).
    let fen = "rnbqkbnr/pppppppp/8/8/8/7N/PPPPPPPP/RNBQKB1R b KQkq - 1 1";
    assert_eq!(term(Term::PieceDevelopment, fen), -140 + 160);
}

#[test]
fn test_development_urgent_when_pawn_attacked() {
    // 1.e4 d5: White's e4 pawn is attacked, so its four home minors cost 80.
    let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2";
    assert_eq!(term(Term::PieceDevelopment, fen), -320 + 320);
}

#[test]
fn test_early_king() {
    assert_eq!(term(Term::EarlyKing, "4k3/8/8/8/8/8/4K3/8 w - - 0 1"), -60);
    assert_eq!(term(Term::EarlyKing, "8/4k3/8/8/8/8/4K3/8 w - - 0 1"), 0);
    // Sliding along the back rank is not penalised
    assert_eq!(term(Term::EarlyKing, "4k3/8/8/8/8/8/8/3K4 w - - 0 1"), 0);
}

#[test]
fn test_castling() {
    assert_eq!(term(Term::Castling, "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), 0);
    // White castled (+40), Black home with only the a8 rook (-10)
    assert_eq!(term(Term::Castling, "r3k3/8/8/8/8/8/8/5RK1 w - - 0 1"), 30);
}

#[test]
fn test_pawn_double_move() {
    // e-pawn pushed to e5: 20 + centre file 10 + lost centre control 10
    let fen = "rnbqkbnr/pppppppp/8/4P3/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
    assert_eq!(term(Term::PawnDoubleMove, fen), -40);
    // Attacked by the d6 pawn: no penalty for White, but Black's d-pawn on
    // d6 is within its double step.
    let fen = "rnbqkbnr/ppp1pppp/3p4/4P3/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";
    assert_eq!(term(Term::PawnDoubleMove, fen), 0);
}

#[test]
fn test_hanging_pawn_and_defenders() {
    // 1.e4 d5. e4 hangs (-120). Best defending moves: Nc3 and Nf3 (135 each),
    // Bd3 (130), Qf3 (35). The d5 attacker can be taken (+100).
    let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2";
    assert_eq!(term(Term::UndefendedPawns, fen), -120 + 135 + 135 + 130 + 35 + 100);
    // Nc3, Nf3, Bd3: 35 + 15 central each
    assert_eq!(term(Term::MinorDefenseDevelopment, fen), 150);
}

#[test]
fn test_king_pawn_shield() {
    assert_eq!(term(Term::KingPawnShield, "5rk1/8/8/8/8/5P2/8/6K1 w - - 0 1"), -130);
    // Bishop on the opened g1-a7 diagonal
    assert_eq!(term(Term::KingPawnShield, "5rk1/b7/8/8/8/5P2/8/6K1 w - - 0 1"), -190);
    // A blocker on d4 shuts the diagonal
    assert_eq!(term(Term::KingPawnShield, "5rk1/b7/8/8/3P4/5P2/8/6K1 w - - 0 1"), -130);
    // f-pawn still on f2
    assert_eq!(term(Term::KingPawnShield, "5rk1/8/8/8/8/8/5P2/6K1 w - - 0 1"), 0);
}

#[test]
fn test_early_f_pawn() {
    let f3 = "rnbqkbnr/pppppppp/8/8/8/5P2/PPPPP1PP/RNBQKBNR b KQkq - 0 1";
    let f4 = "rnbqkbnr/pppppppp/8/8/5P2/8/PPPPP1PP/RNBQKBNR b KQkq - 0 1";
    assert_eq!(term(Term::EarlyFPawn, f3), -30);
    assert_eq!(term(Term::EarlyFPawn, f4), -60);
    assert_eq!(term(Term::EarlyFPawn, &pos(f4).mirrored().to_fen()), 60);
}

#[test]
fn test_extension_points_score_zero() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3";
    for t in Term::ALL.into_iter().filter(|t| t.is_extension_point()) {
        assert_eq!(term(t, fen), 0, "{t}");
    }
}

#[test]
fn test_missing_kings_do_not_fault() {
    let fen = "8/pppppppp/8/8/8/5P2/PPPPP1PP/8 w - - 0 1";
    let eval = Evaluator::new();
    let board = pos(fen);
    for t in [Term::EarlyKing, Term::Castling, Term::KingPawnShield] {
        assert_eq!(eval.term(t, &board), 0, "{t}");
    }
    // The rest of the sum still works
    assert_eq!(eval.term(Term::Material, &board), 0);
    let _ = eval.evaluate(&board);
}

#[test]
fn test_disabled_term_excluded() {
    let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    let mut eval = Evaluator::new();
    eval.set_enabled(Term::CenterControl, false);
    assert_eq!(eval.evaluate(&pos(fen)), 0);
    assert!(eval.breakdown(&pos(fen)).iter().all(|(t, _)| *t != Term::CenterControl));
    // term() still reports it on request
    assert_eq!(eval.term(Term::CenterControl, &pos(fen)), 55);
}

#[test]
fn test_weights_scale_terms() {
    let weights = Weights {
        queen_moved: 100,
        ..Weights::default()
    };
    let eval = Evaluator::with_weights(weights);
    assert_eq!(eval.term(Term::EarlyQueen, &pos("4k3/8/8/7Q/8/8/8/4K3 w - - 0 1")), -116);
}

#[test]
fn test_phase_counts() {
    let start = Position::startpos();
    assert_eq!(phase::developed_by_rank(&start), 0);
    assert_eq!(phase::developed_by_origin(&start), 0);
    assert_eq!(phase::piece_count(&start), 32);

    // A knight on b3 has left its rank but not its file.
    let b3 = pos("4k3/8/8/8/8/1N6/8/4K3 w - - 0 1");
    assert_eq!(phase::developed_by_rank(&b3), 1);
    assert_eq!(phase::developed_by_origin(&b3), 0);

    // A queen on d2 counts for both.
    let d2 = pos("4k3/8/8/8/8/8/3Q4/4K3 w - - 0 1");
    assert_eq!(phase::developed_by_rank(&d2), 1);
    assert_eq!(phase::developed_by_origin(&d2), 1);
}

#[test]
fn test_term_names_round_trip() {
    for t in Term::ALL {
        assert_eq!(t.to_string(), t.name());
    }
    assert_eq!(Term::ALL[Term::EarlyFPawn.idx()], Term::EarlyFPawn);
}
