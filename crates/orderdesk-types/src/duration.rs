//! Human-readable rendering of requested durations.
//!
//! Notifications print durations in the compact `72h0m0s` / `1.5s` / `250ms`
//! form that operators already type into delegation requests.

use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;

/// Render `d` compactly: hours and minutes are only printed once they are
/// non-zero (and then every smaller unit follows), sub-second durations use
/// `ms`, `µs` or `ns`.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }

    if d.as_secs() == 0 {
        return if nanos < NANOS_PER_MICRO {
            format!("{nanos}ns")
        } else if nanos < NANOS_PER_MILLI {
            format!(
                "{}µs",
                with_fraction(nanos / NANOS_PER_MICRO, nanos % NANOS_PER_MICRO, 3)
            )
        } else {
            format!(
                "{}ms",
                with_fraction(nanos / NANOS_PER_MILLI, nanos % NANOS_PER_MILLI, 6)
            )
        };
    }

    let secs = d.as_secs();
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&with_fraction(
        u128::from(seconds),
        u128::from(d.subsec_nanos()),
        9,
    ));
    out.push('s');
    out
}

/// `whole.rem` with `rem` zero-padded to `digits` and trailing zeros trimmed.
fn with_fraction(whole: u128, rem: u128, digits: usize) -> String {
    if rem == 0 {
        return whole.to_string();
    }
    let frac = format!("{rem:0digits$}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}
