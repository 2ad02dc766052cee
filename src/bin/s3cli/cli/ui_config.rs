use s3cli::Config;

pub fn is_progress_indicator_needed(config: &Config) -> bool {
    if !config.command.is_transfer() {
        return false;
    }

    let Some(tracing_config) = config.tracing_config.as_ref() else {
        return true;
    };

    if log::Level::Warn < tracing_config.tracing_level {
        return false;
    }

    !tracing_config.json_tracing
}
