use chrono::{DateTime, Datelike, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

const MINUTES_IN_DAY: i64 = DAY / MINUTE;
const MINUTES_IN_MONTH: i64 = MONTH / MINUTE;

/// Approximate distance between `ts` and `now` in words, with an "ago" /
/// "in" suffix ("15 minutes ago", "about 2 hours ago", "in 3 days").
///
/// Buckets follow date-fns `formatDistance`: "about" for 1-2 months, and
/// "about" / "over" / "almost" N years depending on the calendar months
/// left over.
pub fn relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let (earlier, later) = if ts <= now { (ts, now) } else { (now, ts) };
    let distance = distance_in_words(earlier, later);

    if ts > now {
        format!("in {}", distance)
    } else {
        format!("{} ago", distance)
    }
}

fn rounded(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Whole calendar months from `earlier` to `later`
fn calendar_months(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month()) - i64::from(earlier.month());
    let later_in_month = (later.day(), later.time());
    let earlier_in_month = (earlier.day(), earlier.time());
    if months > 0 && later_in_month < earlier_in_month {
        months -= 1;
    }
    months
}

fn distance_in_words(earlier: DateTime<Utc>, later: DateTime<Utc>) -> String {
    let seconds = later.signed_duration_since(earlier).num_seconds();
    let minutes = rounded(seconds, MINUTE);

    if minutes == 0 {
        "less than a minute".to_string()
    } else if minutes < 45 {
        plural(minutes, "minute")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < MINUTES_IN_DAY {
        format!("about {}", plural(rounded(minutes, 60), "hour"))
    } else if minutes < 42 * 60 {
        "1 day".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        plural(rounded(minutes, MINUTES_IN_DAY), "day")
    } else if minutes < 2 * MINUTES_IN_MONTH {
        format!("about {}", plural(rounded(minutes, MINUTES_IN_MONTH), "month"))
    } else {
        let months = calendar_months(earlier, later);
        if months < 12 {
            plural(rounded(minutes, MINUTES_IN_MONTH).max(1), "month")
        } else {
            let years = months / 12;
            match months % 12 {
                0..3 => format!("about {}", plural(years, "year")),
                3..9 => format!("over {}", plural(years, "year")),
                _ => format!("almost {}", plural(years + 1, "year")),
            }
        }
    }
}
