//! Remaining-time arithmetic against a deprecation schedule.
//!
//! All inputs are caller-supplied; nothing here reads a clock. The reference
//! date comes in with the evaluation request so identical inputs always
//! produce identical reports.

use time::Date;

/// Roughly one quarter, the horizon behind the "within 1 qtr" messaging.
pub const DEFAULT_EXPIRY_HORIZON_DAYS: i64 = 92;

const DAYS_PER_QUARTER: i64 = 91;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expiry {
    /// Whole days until the deprecation date; negative once past it.
    pub remaining_days: i64,
    pub deprecation_date: Date,
    /// True only inside `0..=horizon`. Already-expired is NOT expiring soon;
    /// the calling rule surfaces that as unsupported instead.
    pub is_expiring_soon: bool,
}

pub fn compute_expiry(deprecation_date: Date, current_date: Date, horizon_days: i64) -> Expiry {
    let remaining_days = (deprecation_date - current_date).whole_days();
    Expiry {
        remaining_days,
        deprecation_date,
        is_expiring_soon: (0..=horizon_days).contains(&remaining_days),
    }
}

/// Quarter count used in "will be deprecated within N qtr(s)" messages.
/// Expects non-negative `days`; a same-day deprecation still reads "1 qtr".
pub fn remaining_quarters(days: i64) -> i64 {
    let days = days.max(1);
    (days + DAYS_PER_QUARTER - 1) / DAYS_PER_QUARTER
}
