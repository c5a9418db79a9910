//! Wall-clock stamps for human eyes: `[HH:MM:SS:mmm]`, local time, no date.

use chrono::{Local, Timelike};

/// Zero-pads each field; milliseconds always take three digits.
#[must_use]
pub fn format_clock(hour: u32, minute: u32, second: u32, millis: u32) -> String {
    format!("[{hour:02}:{minute:02}:{second:02}:{millis:03}]")
}

/// Current local time via [`format_clock`].
#[must_use]
pub fn now() -> String {
    let time = Local::now().time();
    // Leap seconds report nanos past 999_999_999.
    let millis = (time.nanosecond() / 1_000_000).min(999);
    format_clock(time.hour(), time.minute(), time.second(), millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digit_fields() {
        assert_eq!(format_clock(9, 5, 3, 7), "[09:05:03:007]");
    }

    #[test]
    fn pads_two_digit_millis() {
        assert_eq!(format_clock(10, 0, 0, 42), "[10:00:00:042]");
    }

    #[test]
    fn leaves_full_width_fields() {
        assert_eq!(format_clock(23, 59, 59, 123), "[23:59:59:123]");
    }

    #[test]
    fn now_has_fixed_shape() {
        let stamp = now();
        assert_eq!(stamp.len(), "[00:00:00:000]".len());
        assert!(stamp.starts_with('[') && stamp.ends_with(']'));
    }
}
