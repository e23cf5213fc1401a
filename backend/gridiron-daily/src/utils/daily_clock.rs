//! Civil-date handling for the daily game.
//!
//! The game day rolls over at midnight Pacific (America/Los_Angeles) for
//! every player, regardless of where they are. Seeding, the one-play-a-day
//! gate and the "next game in" countdown all go through this module so they
//! can never disagree about what "today" means.

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::America::Los_Angeles;
use chrono_tz::Tz;
use lazy_static::lazy_static;
use regex::Regex;

/// The fixed game timezone.
pub const GAME_TZ: Tz = Los_Angeles;

lazy_static! {
    static ref LOOSE_DATE_KEY_RE: Regex =
        Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("valid date-key regex");
    static ref DATE_KEY_RE: Regex =
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date-key regex");
}

/// The current instant on the Pacific civil clock.
pub fn pacific_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&GAME_TZ)
}

/// Today's date key (`YYYY-MM-DD`) on the Pacific civil clock.
pub fn pacific_date_key() -> String {
    pacific_now().format("%Y-%m-%d").to_string()
}

/// The date key a given UTC instant falls on in the game timezone.
pub fn date_key_at(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&GAME_TZ)
        .format("%Y-%m-%d")
        .to_string()
}

/// Zero-pad a `YYYY-M-D`-shaped key to canonical `YYYY-MM-DD`.
/// Anything else passes through unchanged.
pub fn normalize_date_key(s: &str) -> String {
    match LOOSE_DATE_KEY_RE.captures(s) {
        Some(caps) => format!("{}-{:0>2}-{:0>2}", &caps[1], &caps[2], &caps[3]),
        None => s.to_string(),
    }
}

/// True if `s` is a canonical `YYYY-MM-DD` date key.
pub fn is_date_key(s: &str) -> bool {
    DATE_KEY_RE.is_match(s) && chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Seconds from `now` until the next civil midnight in the game timezone.
pub fn seconds_until_next_midnight(now: DateTime<Tz>) -> i64 {
    let next_day = now.date_naive() + Duration::days(1);
    let next_midnight_naive = next_day
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time");
    // US DST shifts at 02:00, so local midnight is never skipped or
    // duplicated; `earliest` only hedges against exotic tz data.
    let next_midnight = GAME_TZ
        .from_local_datetime(&next_midnight_naive)
        .earliest()
        .unwrap_or_else(|| GAME_TZ.from_utc_datetime(&next_midnight_naive));
    (next_midnight - now).num_seconds().max(0)
}

/// Format a second count as zero-padded `HH:MM:SS` for the reset countdown.
pub fn format_hms(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Display countdown until the next game day (`HH:MM:SS`). Recomputed by
/// callers every second for display; never used for gating decisions.
pub fn time_until_next_midnight() -> String {
    format_hms(seconds_until_next_midnight(pacific_now()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_follows_pacific_day_not_utc() {
        // 07:59 UTC in January is 23:59 PST the previous day.
        let before = Utc.with_ymd_and_hms(2025, 1, 15, 7, 59, 0).unwrap();
        assert_eq!(date_key_at(before), "2025-01-14");
        let after = Utc.with_ymd_and_hms(2025, 1, 15, 8, 1, 0).unwrap();
        assert_eq!(date_key_at(after), "2025-01-15");
    }

    #[test]
    fn date_key_respects_daylight_saving() {
        // In July the offset is -07:00, so the day flips at 07:00 UTC.
        let before = Utc.with_ymd_and_hms(2025, 7, 1, 6, 59, 0).unwrap();
        assert_eq!(date_key_at(before), "2025-06-30");
        let after = Utc.with_ymd_and_hms(2025, 7, 1, 7, 1, 0).unwrap();
        assert_eq!(date_key_at(after), "2025-07-01");
    }

    #[test]
    fn normalize_pads_single_digit_fields() {
        assert_eq!(normalize_date_key("2026-2-7"), "2026-02-07");
        assert_eq!(normalize_date_key("2026-02-07"), "2026-02-07");
        assert_eq!(normalize_date_key("not-a-date"), "not-a-date");
    }

    #[test]
    fn is_date_key_rejects_malformed_keys() {
        assert!(is_date_key("2025-01-15"));
        assert!(!is_date_key("2025-1-15"));
        assert!(!is_date_key("2025-13-40"));
        assert!(!is_date_key("20250115"));
    }

    #[test]
    fn countdown_to_midnight_is_exact() {
        let now = GAME_TZ.with_ymd_and_hms(2025, 1, 15, 23, 59, 30).unwrap();
        assert_eq!(seconds_until_next_midnight(now), 30);
        let noon = GAME_TZ.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(seconds_until_next_midnight(noon), 12 * 3600);
    }

    #[test]
    fn hms_formatting_zero_pads() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(30), "00:00:30");
        assert_eq!(format_hms(3661), "01:01:01");
        assert_eq!(format_hms(-5), "00:00:00");
    }
}
