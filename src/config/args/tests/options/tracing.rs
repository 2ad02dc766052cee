#[cfg(test)]
mod tests {
    use crate::config::args::tests::{create_config_file, init_dummy_tracing_subscriber};
    use crate::config::args::*;

    #[test]
    fn with_default_value() {
        init_dummy_tracing_subscriber();

        let config_file = create_config_file();
        let config_path = config_file.path().to_string_lossy().to_string();
        let args = vec!["s3cli", "--config", &config_path, "list-bucket"];

        let config = build_config_from_args(args).unwrap();
        let tracing_config = config.tracing_config.unwrap();

        assert_eq!(tracing_config.tracing_level, log::Level::Warn);
        assert!(!tracing_config.json_tracing);
        assert!(!tracing_config.aws_sdk_tracing);
        assert!(!tracing_config.span_events_tracing);
        assert!(!tracing_config.disable_color_tracing);
    }

    #[test]
    fn with_custom_value() {
        init_dummy_tracing_subscriber();

        let config_file = create_config_file();
        let config_path = config_file.path().to_string_lossy().to_string();
        let args = vec![
            "s3cli",
            "--config",
            &config_path,
            "-vv",
            "--json-tracing",
            "--aws-sdk-tracing",
            "--span-events-tracing",
            "--disable-color-tracing",
            "list-bucket",
        ];

        let config = build_config_from_args(args).unwrap();
        let tracing_config = config.tracing_config.unwrap();

        assert_eq!(tracing_config.tracing_level, log::Level::Debug);
        assert!(tracing_config.json_tracing);
        assert!(tracing_config.aws_sdk_tracing);
        assert!(tracing_config.span_events_tracing);
        assert!(tracing_config.disable_color_tracing);
    }

    #[test]
    fn with_quiet() {
        init_dummy_tracing_subscriber();

        let config_file = create_config_file();
        let config_path = config_file.path().to_string_lossy().to_string();
        let args = vec!["s3cli", "--config", &config_path, "-qq", "list-bucket"];

        let config = build_config_from_args(args).unwrap();

        assert!(config.tracing_config.is_none());
    }
}
