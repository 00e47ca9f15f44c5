use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Timelike};

/// `MM-DD` key used to match stored birthdays.
pub fn month_day(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

/// Six-field cron expression (UTC) that fires daily at `local_time` for a host
/// at `offset`. A DST change shifts the trigger by an hour until restart.
pub fn daily_cron_expression(local_time: NaiveTime, offset: FixedOffset) -> String {
    let local_secs = i64::from(local_time.num_seconds_from_midnight());
    let utc_secs = (local_secs - i64::from(offset.local_minus_utc())).rem_euclid(86_400);
    let hour = utc_secs / 3600;
    let minute = (utc_secs % 3600) / 60;
    format!("0 {minute} {hour} * * *")
}

/// Whether the daily trigger time has already passed on `now`'s date.
pub fn is_past_trigger<Tz: TimeZone>(now: &DateTime<Tz>, trigger: NaiveTime) -> bool {
    now.time() >= trigger
}

/// The host's current UTC offset.
pub fn local_offset() -> FixedOffset {
    chrono::Local::now().offset().fix()
}
