#[cfg(test)]
mod tests {
    use crate::config::args::tests::{create_config_file, init_dummy_tracing_subscriber};
    use crate::config::args::*;

    #[test]
    fn with_key_list() {
        init_dummy_tracing_subscriber();

        let config_file = create_config_file();
        let config_path = config_file.path().to_string_lossy().to_string();
        let args = vec![
            "s3cli",
            "--config",
            &config_path,
            "delete-object",
            "bucket",
            "--key",
            "a.txt,b.txt",
        ];

        let config = build_config_from_args(args).unwrap();

        assert_eq!(
            config.command,
            Command::DeleteObject {
                bucket: "bucket".to_string(),
                keys: KeySource::List("a.txt,b.txt".to_string()),
                confirm: false,
            }
        );
    }

    #[test]
    fn with_key_file_and_confirm() {
        init_dummy_tracing_subscriber();

        let config_file = create_config_file();
        let config_path = config_file.path().to_string_lossy().to_string();
        let keys_file = tempfile::NamedTempFile::new().unwrap();
        let keys_path = keys_file.path().to_string_lossy().to_string();
        let args = vec![
            "s3cli",
            "--config",
            &config_path,
            "delete-object",
            "bucket",
            "--file",
            &keys_path,
            "--confirm",
        ];

        let config = build_config_from_args(args).unwrap();

        assert_eq!(
            config.command,
            Command::DeleteObject {
                bucket: "bucket".to_string(),
                keys: KeySource::File(keys_file.path().to_path_buf()),
                confirm: true,
            }
        );
    }

    #[test]
    fn tracing_level_is_raised_to_info() {
        init_dummy_tracing_subscriber();

        let config_file = create_config_file();
        let config_path = config_file.path().to_string_lossy().to_string();
        let args = vec![
            "s3cli",
            "--config",
            &config_path,
            "--json-tracing",
            "delete-object",
            "bucket",
            "--key",
            "a.txt",
        ];

        let config = build_config_from_args(args).unwrap();
        let tracing_config = config.tracing_config.unwrap();

        assert_eq!(tracing_config.tracing_level, log::Level::Info);
        assert!(tracing_config.json_tracing);
    }

    #[test]
    fn tracing_level_is_raised_to_info_with_quiet() {
        init_dummy_tracing_subscriber();

        let config_file = create_config_file();
        let config_path = config_file.path().to_string_lossy().to_string();
        let args = vec![
            "s3cli",
            "--config",
            &config_path,
            "-qq",
            "delete-object",
            "bucket",
            "--key",
            "a.txt",
        ];

        let config = build_config_from_args(args).unwrap();

        assert_eq!(
            config.tracing_config.unwrap().tracing_level,
            log::Level::Info
        );
    }

    #[test]
    fn tracing_level_is_kept_when_more_verbose() {
        init_dummy_tracing_subscriber();

        let config_file = create_config_file();
        let config_path = config_file.path().to_string_lossy().to_string();
        let args = vec![
            "s3cli",
            "--config",
            &config_path,
            "-vvv",
            "delete-object",
            "bucket",
            "--key",
            "a.txt",
        ];

        let config = build_config_from_args(args).unwrap();

        assert_eq!(
            config.tracing_config.unwrap().tracing_level,
            log::Level::Trace
        );
    }
}
