#[cfg(test)]
mod tests {
    use crate::config::args::tests::{create_config_file, init_dummy_tracing_subscriber};
    use crate::config::args::*;

    #[test]
    fn with_default_value() {
        init_dummy_tracing_subscriber();

        let config_file = create_config_file();
        let config_path = config_file.path().to_string_lossy().to_string();
        let args = vec!["s3cli", "--config", &config_path, "list-object", "bucket"];

        let config = build_config_from_args(args).unwrap();

        if let Command::ListObject { window, .. } = config.command {
            assert_eq!(window, PageWindow::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE).unwrap());
            assert_eq!(window.start_index(), 0);
            assert_eq!(window.end_index(), 20);
        } else {
            // skipcq: RS-W1021
            assert!(false, "list-object not found");
        }
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
            "list-object",
            "bucket",
            "--page",
            "3",
            "--pagesize",
            "1000",
        ];

        let config = build_config_from_args(args).unwrap();

        if let Command::ListObject { window, .. } = config.command {
            assert_eq!(window.page(), 3);
            assert_eq!(window.page_size(), 1000);
        } else {
            // skipcq: RS-W1021
            assert!(false, "list-object not found");
        }
    }

    #[test]
    fn with_zero_page() {
        init_dummy_tracing_subscriber();

        let args = vec!["s3cli", "--page", "0", "list-object", "bucket"];

        assert!(parse_from_args(args).is_err());
    }

    #[test]
    fn with_zero_page_size() {
        init_dummy_tracing_subscriber();

        let args = vec!["s3cli", "--pagesize", "0", "list-object", "bucket"];

        assert!(parse_from_args(args).is_err());
    }

    #[test]
    fn with_too_large_page_size() {
        init_dummy_tracing_subscriber();

        let args = vec!["s3cli", "--pagesize", "1001", "list-object", "bucket"];

        assert!(parse_from_args(args).is_err());
    }

    #[test]
    fn with_negative_page() {
        init_dummy_tracing_subscriber();

        let args = vec!["s3cli", "list-object", "bucket", "--page=-1"];

        assert!(parse_from_args(args).is_err());
    }
}
