use super::*;

#[test]
fn test_default_config() {
    let config = EngineConfig::default();
    assert_eq!(config.depth, 2);
    assert!(config.alpha_beta);
    assert!(config.disabled_terms.is_empty());
    assert_eq!(config.weights, Weights::default());
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
}

#[test]
fn test_partial_weight_override() {
    let config = EngineConfig::from_toml_str(
        r#"
        depth = 3

        [weights]
        undefended_pawn = 150
        "#,
    )
    .unwrap();
    assert_eq!(config.depth, 3);
    assert_eq!(config.weights.undefended_pawn, 150);
    // Untouched weights keep their defaults
    assert_eq!(config.weights.castled, 40);
    assert_eq!(config.weights.knight_push_threat, 15);
}

#[test]
fn test_disabled_terms_by_name() {
    let config = EngineConfig::from_toml_str(
        r#"
        alpha_beta = false
        disabled_terms = ["early_f_pawn", "king_pawn_shield"]
        "#,
    )
    .unwrap();
    assert!(!config.alpha_beta);
    assert_eq!(
        config.disabled_terms,
        vec![Term::EarlyFPawn, Term::KingPawnShield]
    );

    let evaluator = config.evaluator();
    assert!(!evaluator.is_enabled(Term::EarlyFPawn));
    assert!(!evaluator.is_enabled(Term::KingPawnShield));
    assert!(evaluator.is_enabled(Term::Material));
}

#[test]
fn test_unknown_term_rejected() {
    let err = EngineConfig::from_toml_str(r#"disabled_terms = ["tempo"]"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_wrong_type_rejected() {
    let err = EngineConfig::from_toml_str(r#"depth = "deep""#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_depth_out_of_range() {
    for depth in [0, MAX_DEPTH + 1] {
        let err = EngineConfig::from_toml_str(&format!("depth = {depth}")).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDepth { depth: d, max: MAX_DEPTH } if d == depth
        ));
    }
    assert!(EngineConfig::from_toml_str(&format!("depth = {MAX_DEPTH}")).is_ok());
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("heuristic_engine_no_such_config.toml");
    let err = EngineConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("heuristic_engine_no_such_config.toml"));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("heuristic_engine_cfg_{}.toml", std::process::id()));
    std::fs::write(&path, "depth = 4\n[weights]\nqueen_moved = 25\n").unwrap();
    let config = EngineConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.depth, 4);
    assert_eq!(config.weights.queen_moved, 25);
}

#[test]
fn test_printed_config_loads_back() {
    let mut config = EngineConfig::default();
    config.depth = 5;
    config.disabled_terms.push(Term::Castling);
    let text = config.to_toml().unwrap();
    assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
}
