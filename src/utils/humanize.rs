use humansize::{BINARY, format_size};

/// Format a byte count, e.g. `4.37 GiB`
pub fn format_file_size(bytes: u64) -> String {
    format_size(bytes, BINARY)
}

/// Format seconds as `1h 52min 04s`, dropping the hour part when zero
pub fn format_duration(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs.round() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h {:02}min {:02}s", hours, minutes, seconds)
    } else {
        format!("{}min {:02}s", minutes, seconds)
    }
}
