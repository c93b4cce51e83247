//! Text helpers for the now-playing embed.

use std::time::Duration;

const BAR_FILLED: char = '▬';
const BAR_MARKER: char = '🔘';

/// `mm:ss` below one hour, `hh:mm:ss` from one hour on.
pub fn format_time(duration: Duration) -> String {
    let total = duration.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Progress bar of `width` cells with a marker at the current position.
///
/// Unknown or zero totals put the marker at the start.
pub fn progress_bar(position: Duration, total: Option<Duration>, width: usize) -> String {
    let width = width.max(1);
    let index = match total {
        Some(total) if !total.is_zero() => {
            let ratio = position.as_secs_f64() / total.as_secs_f64();
            ((ratio.clamp(0.0, 1.0) * (width - 1) as f64).round()) as usize
        }
        _ => 0,
    };

    (0..width)
        .map(|i| if i == index { BAR_MARKER } else { BAR_FILLED })
        .collect()
}
