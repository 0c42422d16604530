/*
 * Copyright (c) 2025 William Stadtwald Demchick <william.demchick@gmail.com>
 *
 * Permission to use, copy, modify, and distribute this software for any
 * purpose with or without fee is hereby granted, provided that the above
 * copyright notice and this permission notice appear in all copies.
 *
 * THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
 * WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
 * MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR
 * ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
 * WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN
 * ACTION OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF
 * OR IN CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.
 */

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum InvalidExpiration {
    #[error("expected a whole number of days or an ISO-8601 date-time")]
    NotADateTime,

    #[error("expiry falls outside the representable date range")]
    OutOfRange
}

/// When the generated file should stop being trusted. Either relative to the
/// moment the tool runs, or pinned to an absolute instant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Expiration {
    DaysFromNow(i64),
    Absolute(DateTime<Utc>)
}

impl Expiration {
    pub fn resolve(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, InvalidExpiration> {
        match self {
            Self::DaysFromNow(days) =>
                if *days < 0 {
                    now.checked_sub_days(Days::new(days.unsigned_abs())).ok_or(InvalidExpiration::OutOfRange)
                } else {
                    now.checked_add_days(Days::new(days.unsigned_abs())).ok_or(InvalidExpiration::OutOfRange)
                },
            Self::Absolute(instant) => Ok(*instant)
        }
    }
}

impl std::str::FromStr for Expiration {
    type Err = InvalidExpiration;

    /// A value counts as a day offset only when the integer it parses to
    /// round-trips back to the exact input, so "6" is six days from now while
    /// "06", "+6" and "6.0" fall through to date-time parsing (and fail
    /// there). Absolute values accept RFC 3339, a naive ISO-8601 date-time
    /// read as UTC, or a bare date read as UTC midnight.
    fn from_str(value: &str) -> Result<Self, InvalidExpiration> {
        if let Ok(days) = value.parse::<i64>() {
            if days.to_string() == value {
                return Ok(Self::DaysFromNow(days));
            }
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
            Ok(Self::Absolute(instant.with_timezone(&Utc)))
        } else if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
            Ok(Self::Absolute(naive.and_utc()))
        } else if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(Self::Absolute(date.and_time(NaiveTime::MIN).and_utc()))
        } else {
            Err(InvalidExpiration::NotADateTime)
        }
    }
}

/// Serialization used for the Expires line: RFC 3339 in UTC, whole seconds.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
