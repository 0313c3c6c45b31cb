//! Snapshot tests for the Google client

#[cfg(test)]
mod snapshot_tests {
    use crate::GoogleConfig;
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_config_snapshot() {
        let config = GoogleConfig {
            api_key: "test_api_key_redacted".to_string(),
            embedding_model: "models/embedding-001".to_string(),
            chat_model: "models/gemini-2.0-flash".to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        };

        assert_yaml_snapshot!(config, @r###"
        ---
        api_key: test_api_key_redacted
        embedding_model: models/embedding-001
        chat_model: models/gemini-2.0-flash
        api_base: "https://generativelanguage.googleapis.com/v1beta"
        "###);
    }

    #[test]
    fn test_default_models() {
        let config = GoogleConfig::new("test_key");
        assert_eq!(config.embedding_model, "models/embedding-001");
        assert_eq!(config.chat_model, "models/gemini-2.0-flash");
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let app_config = docchat_core::AppConfig::default();
        assert!(GoogleConfig::from_config(&app_config).is_err());

        let app_config = docchat_core::AppConfig {
            google_api_key: Some("AIza-test".to_string()),
            google_embedding_model: Some("models/text-embedding-004".to_string()),
            ..Default::default()
        };
        let config = GoogleConfig::from_config(&app_config).unwrap();
        assert_eq!(config.api_key, "AIza-test");
        assert_eq!(config.embedding_model, "models/text-embedding-004");
    }
}
