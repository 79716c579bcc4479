use dtree_duel::{Advantage, ConfigError, DuelConfig};

#[test]
fn defaults_match_the_reference_duel() {
    let config = DuelConfig::default();
    assert_eq!(config.critical_health, 25);
    assert_eq!(config.health_kit, "Health Kit");
    assert_eq!(config.power_up, "Power Up");
    assert_eq!(config.advantage, Advantage::Engage);
    assert!(config.validate().is_ok());
}

#[test]
fn validate_rejects_unusable_values() {
    let bad_threshold = DuelConfig {
        critical_health: 0,
        ..DuelConfig::default()
    };
    assert!(matches!(bad_threshold.validate(), Err(ConfigError::Invalid(_))));

    let empty_name = DuelConfig {
        power_up: "  ".into(),
        ..DuelConfig::default()
    };
    assert!(matches!(empty_name.validate(), Err(ConfigError::Invalid(_))));

    let clash = DuelConfig {
        power_up: "Health Kit".into(),
        ..DuelConfig::default()
    };
    assert!(matches!(clash.validate(), Err(ConfigError::Invalid(_))));
}

#[cfg(feature = "serde")]
mod yaml {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = DuelConfig::from_yaml_str("critical_health: 40\nadvantage: hold\n").unwrap();
        assert_eq!(config.critical_health, 40);
        assert_eq!(config.advantage, Advantage::Hold);
        assert_eq!(config.health_kit, "Health Kit");
    }

    #[test]
    fn invalid_yaml_values_are_rejected() {
        assert!(matches!(
            DuelConfig::from_yaml_str("critical_health: -1\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            DuelConfig::from_yaml_str("critical_health: [1, 2]\n"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn config_json_roundtrip() {
        let config = DuelConfig {
            critical_health: 30,
            advantage: Advantage::Hold,
            ..DuelConfig::default()
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let roundtrip: DuelConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(roundtrip, config);
    }
}
