use indicatif::{HumanBytes, HumanDuration, ProgressBar, ProgressStyle};
use tokio::time::Instant;

const TRANSFER_TEMPLATE: &str =
    "{prefix:.cyan} {msg}... [{bar:15.green/white}] {bytes}/{total_bytes} {bytes_per_sec}";
const PROGRESS_CHARS: &str = "=> ";

/// Returns a byte progress bar for a transfer, or a hidden one when `show_progress` is false.
///
/// The length is set by the transfer once the size is known.
pub fn create_transfer_indicator(prefix: &str, key: &str, show_progress: bool) -> ProgressBar {
    if !show_progress {
        return ProgressBar::hidden();
    }

    let progress_bar = ProgressBar::new(0);
    progress_bar.set_style(
        ProgressStyle::with_template(TRANSFER_TEMPLATE)
            .unwrap()
            .progress_chars(PROGRESS_CHARS),
    );
    progress_bar.set_prefix(prefix.to_string());
    progress_bar.set_message(key.to_string());

    progress_bar
}

pub fn finish_transfer_indicator(progress_bar: &ProgressBar, transferred: u64, start_time: Instant) {
    let elapsed = start_time.elapsed();
    let bytes_per_sec = if elapsed.as_secs_f64() < 1.0 {
        transferred
    } else {
        (transferred as f64 / elapsed.as_secs_f64()) as u64
    };

    progress_bar.set_style(ProgressStyle::with_template("{prefix:.cyan} {msg}").unwrap());
    progress_bar.finish_with_message(format!(
        "{} | {}/sec,  duration {}",
        HumanBytes(transferred),
        HumanBytes(bytes_per_sec),
        HumanDuration(elapsed),
    ));
}
