//! Clock helpers usable from native tests and the browser.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Current time as epoch milliseconds. Outside the browser this returns 0 —
/// timestamps are display-only and never drive ordering.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "browser")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "browser"))]
    {
        0.0
    }
}

/// Format epoch milliseconds as `HH:MM` wall-clock time.
#[must_use]
pub fn format_clock_time(epoch_ms: f64) -> String {
    if !epoch_ms.is_finite() {
        return "00:00".to_owned();
    }
    #[allow(clippy::cast_possible_truncation)]
    let minutes = (epoch_ms / 60_000.0).floor() as i64;
    let minute_of_day = minutes.rem_euclid(24 * 60);
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}
