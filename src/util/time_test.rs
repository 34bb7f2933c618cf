use super::*;

#[test]
fn format_clock_time_formats_midnight() {
    assert_eq!(format_clock_time(0.0), "00:00");
}

#[test]
fn format_clock_time_formats_hours_and_minutes() {
    // 14h05m into a day.
    let ms = f64::from((14 * 60 + 5) * 60) * 1000.0;
    assert_eq!(format_clock_time(ms), "14:05");
}

#[test]
fn format_clock_time_wraps_across_days() {
    let one_day_ms = 86_400_000.0;
    assert_eq!(format_clock_time(one_day_ms + 3_600_000.0), "01:00");
}

#[test]
fn format_clock_time_handles_negative_values() {
    assert_eq!(format_clock_time(-60_000.0), "23:59");
}

#[test]
fn format_clock_time_defaults_non_finite_input() {
    assert_eq!(format_clock_time(f64::NAN), "00:00");
    assert_eq!(format_clock_time(f64::INFINITY), "00:00");
}

#[cfg(not(feature = "browser"))]
#[test]
fn now_ms_is_stubbed_outside_the_browser() {
    assert!((now_ms() - 0.0).abs() < f64::EPSILON);
}
