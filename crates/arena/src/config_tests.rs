use super::*;

#[test]
fn test_default_tiers() {
    let tiers = TierConfig::default();
    assert_eq!(tiers.player(PlayerKind::Human), PlayerConfig::human());
    assert_eq!(tiers.player(PlayerKind::Easy), PlayerConfig::automated(4, None, 3000));
    assert_eq!(tiers.player(PlayerKind::Medium), PlayerConfig::automated(5, None, 3000));
    assert_eq!(tiers.player(PlayerKind::Hard), PlayerConfig::automated(6, None, 3000));
    assert_eq!(
        tiers.player(PlayerKind::Master),
        PlayerConfig::automated(7, Some(15), 3000)
    );
}

#[test]
fn test_player_kind_parsing() {
    assert_eq!("Master".parse::<PlayerKind>().unwrap(), PlayerKind::Master);
    assert_eq!("easy".parse::<PlayerKind>().unwrap(), PlayerKind::Easy);
    assert!(matches!(
        "grandmaster".parse::<PlayerKind>(),
        Err(ArenaError::UnknownPlayerKind(_))
    ));
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let tiers = TierConfig::from_toml_str(
        r#"
        time_budget_ms = 500

        [hard]
        search_depth = 3
        max_search_depth = 5
        time_budget_ms = 50
        "#,
    )
    .unwrap();

    assert_eq!(tiers.player(PlayerKind::Hard), PlayerConfig::automated(3, Some(5), 50));
    assert_eq!(tiers.player(PlayerKind::Easy), PlayerConfig::automated(4, None, 500));
    assert_eq!(tiers.master, TierConfig::default().master);
}

#[test]
fn test_toml_round_trip() {
    let tiers = TierConfig::default();
    let parsed = TierConfig::from_toml_str(&tiers.to_toml_string().unwrap()).unwrap();
    assert_eq!(parsed, tiers);
}

#[test]
fn test_invalid_toml_is_reported() {
    let err = TierConfig::from_toml_str("[easy]\nsearch_depth = \"deep\"").unwrap_err();
    assert!(matches!(err, ArenaError::Config(_)));
}

#[test]
fn test_search_limits() {
    assert!(PlayerConfig::human().search_limits().is_none());

    let limits = PlayerConfig::automated(7, Some(15), 3000).search_limits().unwrap();
    assert_eq!(limits.min_depth, 7);
    assert_eq!(limits.max_depth, Some(15));
    assert_eq!(limits.move_time, Duration::from_millis(3000));
}

#[test]
fn test_serialized_tiers_omit_unset_overrides() {
    let toml = TierConfig::default().to_toml_string().unwrap();
    assert!(toml.contains("time_budget_ms = 3000"));
    assert!(toml.contains("[master]"));
    assert!(toml.contains("max_search_depth = 15"));
    assert_eq!(toml.matches("max_search_depth").count(), 1);
}
