// Tests for output formatting helpers

use memex::cli::output::{format_bytes, format_duration, format_relative_time};

#[test]
fn test_format_bytes_units() {
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(2048), "2.0 KB");
    assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
    assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.0 GB");
}

#[test]
fn test_format_duration_ranges() {
    assert_eq!(format_duration(0.25), "250ms");
    assert_eq!(format_duration(2.5), "2.50s");
    assert_eq!(format_duration(90.0), "1m 30.0s");
}

#[test]
fn test_format_relative_time() {
    let now = chrono::Utc::now().timestamp();

    assert_eq!(format_relative_time(now), "just now");
    assert_eq!(format_relative_time(now - 3 * 3600), "3h ago");
    assert_eq!(format_relative_time(now - 2 * 86400 - 5), "2d ago");
    assert_eq!(format_relative_time(now + 3600), "in the future");
}
