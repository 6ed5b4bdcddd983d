//! Deadline urgency.
//!
//! The classifier takes an already-computed day count and never reads the
//! clock; [`days_until`] is the helper callers use to get that count from a
//! deadline timestamp.

use agri_ops_status_models::{UrgencyClassification, UrgencyTier};
use chrono::{DateTime, TimeZone};

use crate::labels::LabelTable;

const DAYS_PLACEHOLDER: &str = "{days}";

/// Classifies a deadline by whole days remaining.
///
/// Zero or negative is overdue, one day is critical, two to three urgent,
/// four to seven soon, anything later normal.
#[must_use]
pub const fn classify_urgency(days_remaining: i64) -> UrgencyClassification {
    let tier = UrgencyTier::from_days(days_remaining);
    let palette = tier.palette();

    UrgencyClassification {
        tier,
        days_remaining,
        color_key: palette.color,
        background_key: palette.background,
        border_key: palette.border,
        is_actionable: tier.is_actionable(),
    }
}

/// Renders the tier's message template from `labels`.
///
/// `{days}` is replaced with the absolute day count. A table without a
/// template for the tier yields the tier's canonical name.
#[must_use]
pub fn urgency_message(classification: &UrgencyClassification, labels: &LabelTable) -> String {
    let template = labels
        .urgency_template(classification.tier)
        .unwrap_or_else(|| classification.tier.as_ref());

    template.replace(
        DAYS_PLACEHOLDER,
        &classification.days_remaining.unsigned_abs().to_string(),
    )
}

/// Calendar days from `now` to `deadline`, using each timestamp's local
/// date in its own time zone.
///
/// Convert both to the farm's time zone first; a deadline late in the
/// evening UTC may already be the next day in Vietnam.
#[must_use]
pub fn days_until<Tz: TimeZone>(deadline: &DateTime<Tz>, now: &DateTime<Tz>) -> i64 {
    (deadline.date_naive() - now.date_naive()).num_days()
}

#[cfg(test)]
mod tests {
    use agri_ops_status_models::Locale;
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn boundary_tiers() {
        assert_eq!(classify_urgency(-5).tier, UrgencyTier::Overdue);
        assert_eq!(classify_urgency(0).tier, UrgencyTier::Overdue);
        assert_eq!(classify_urgency(1).tier, UrgencyTier::Critical);
        assert_eq!(classify_urgency(3).tier, UrgencyTier::Urgent);
        assert_eq!(classify_urgency(7).tier, UrgencyTier::Soon);
        assert_eq!(classify_urgency(8).tier, UrgencyTier::Normal);
    }

    #[test]
    fn carries_palette_and_banner_flag() {
        let overdue = classify_urgency(0);
        assert_eq!(overdue.color_key, "#DC2626");
        assert_eq!(overdue.background_key, "#FEE2E2");
        assert_eq!(overdue.border_key, "#FCA5A5");
        assert!(overdue.is_actionable);

        assert!(classify_urgency(2).is_actionable);
        assert!(!classify_urgency(5).is_actionable);
        assert!(!classify_urgency(30).is_actionable);
    }

    #[test]
    fn classification_is_pure() {
        assert_eq!(classify_urgency(3), classify_urgency(3));
        assert_eq!(classify_urgency(-1), classify_urgency(-1));
    }

    #[test]
    fn messages_substitute_days() {
        let en = LabelTable::builtin(Locale::En);
        assert_eq!(urgency_message(&classify_urgency(1), en), "Due tomorrow");
        assert_eq!(
            urgency_message(&classify_urgency(3), en),
            "Only 3 days left"
        );
        assert_eq!(urgency_message(&classify_urgency(10), en), "10 days left");
        assert_eq!(urgency_message(&classify_urgency(-2), en), "Overdue");

        let vi = LabelTable::builtin(Locale::Vi);
        assert_eq!(urgency_message(&classify_urgency(5), vi), "Còn 5 ngày");
    }

    #[test]
    fn overdue_template_uses_absolute_days() {
        let table = LabelTable::from_toml_str("[urgency]\noverdue = \"{days} days overdue\"").unwrap();
        assert_eq!(
            urgency_message(&classify_urgency(-3), &table),
            "3 days overdue"
        );
        // No template for this tier.
        assert_eq!(urgency_message(&classify_urgency(6), &table), "soon");
    }

    #[test]
    fn counts_calendar_days() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 23, 0, 0).unwrap();
        let deadline = Utc.with_ymd_and_hms(2024, 6, 13, 1, 0, 0).unwrap();
        assert_eq!(days_until(&deadline, &now), 3);
        assert_eq!(days_until(&now, &deadline), -3);
        assert_eq!(days_until(&now, &now), 0);
    }

    #[test]
    fn local_date_decides_the_day() {
        let vietnam = FixedOffset::east_opt(7 * 3600).unwrap();
        // 18:00 UTC on the 10th is already the 11th in Vietnam.
        let now = Utc
            .with_ymd_and_hms(2024, 6, 10, 18, 0, 0)
            .unwrap()
            .with_timezone(&vietnam);
        let deadline = Utc
            .with_ymd_and_hms(2024, 6, 12, 2, 0, 0)
            .unwrap()
            .with_timezone(&vietnam);
        assert_eq!(days_until(&deadline, &now), 1);
    }
}
