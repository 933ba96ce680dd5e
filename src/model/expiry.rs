//! Expiry 输入解析与时间显示格式化

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{Result, TaskError};

/// 默认显示格式，如 "Jan 5, 2026 3:07 PM"
pub const DEFAULT_DATETIME_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

/// 不带时区的日期时间格式（按本地时间解释）
const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// 解析 expiry 输入（本地时区）
///
/// 空白输入返回 `Ok(None)`，表示没有 expiry。
pub fn parse_expiry(input: &str) -> Result<Option<DateTime<Utc>>> {
    parse_expiry_in(input, &Local)
}

/// 在指定时区下解析 expiry 输入
///
/// 支持的格式：
/// - RFC 3339（带 offset），直接取该时刻
/// - `YYYY-MM-DD HH:mm[:ss]`、`YYYY-MM-DDTHH:mm[:ss]`、`YYYY/MM/DD HH:mm`，按 `tz` 解释
/// - `YYYY-MM-DD`，取当天 UTC 零点
pub fn parse_expiry_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<Option<DateTime<Utc>>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }

    for fmt in LOCAL_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            // DST 跳过的时刻不存在；重复的时刻取较早的一个
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .ok_or_else(|| TaskError::invalid_expiry(trimmed));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Some(midnight.and_utc()));
        }
    }

    Err(TaskError::invalid_expiry(trimmed))
}

/// 格式化时间用于显示（本地时区）
pub fn format_timestamp(ts: DateTime<Utc>, fmt: &str) -> String {
    format_timestamp_in(ts, &Local, fmt)
}

/// 在指定时区下格式化时间；格式串无效时退回默认格式
pub fn format_timestamp_in<Tz: TimeZone>(ts: DateTime<Utc>, tz: &Tz, fmt: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = ts.with_timezone(tz);
    let mut out = String::new();
    if write!(out, "{}", local.format(fmt)).is_err() {
        return local.format(DEFAULT_DATETIME_FORMAT).to_string();
    }
    out
}

/// 检查 strftime 格式串是否合法
pub fn is_valid_datetime_format(fmt: &str) -> bool {
    !fmt.trim().is_empty() && StrftimeItems::new(fmt).all(|item| !matches!(item, Item::Error))
}
