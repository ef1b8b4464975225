//! Wire format for dates: plain `yyyy-mm-dd`, no time component.
//!
//! The report contract carries calendar dates (deprecation dates, the audit
//! reference date), not timestamps, so RFC 3339 would over-specify.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parse a `yyyy-mm-dd` string into a [`Date`].
pub fn parse_date(input: &str) -> Result<Date, time::error::Parse> {
    Date::parse(input, FORMAT)
}

/// Format a [`Date`] as `yyyy-mm-dd`.
pub fn format_date(date: Date) -> String {
    // The format description is infallible for any valid Date.
    date.format(FORMAT).expect("yyyy-mm-dd formatting")
}

/// Serde adapter for `Option<Date>` fields on the wire.
pub mod option {
    use super::{FORMAT, parse_date};
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => {
                let s = d.format(FORMAT).map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&s)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| parse_date(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
