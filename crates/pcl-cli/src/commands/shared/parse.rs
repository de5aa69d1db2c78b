use std::fmt::Display;
use std::str::FromStr;

/// Parse a user-supplied value, naming the flag in the error.
pub fn parse_value<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>()
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Like [`parse_value`] for an optional flag.
pub fn parse_optional<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    raw.map(|raw| parse_value(raw, field)).transpose()
}

#[cfg(test)]
mod tests {
    use pcl_core::enums::{DashboardTab, PaymentMethod, PaymentStatus, StatusFilter};

    use super::{parse_optional, parse_value};

    #[test]
    fn parses_hyphenated_tab() {
        let tab: DashboardTab = parse_value("project-payments", "tab").expect("tab should parse");
        assert_eq!(tab, DashboardTab::ProjectPayments);
    }

    #[test]
    fn parses_status_filter_all() {
        let filter: StatusFilter<PaymentStatus> =
            parse_value("ALL", "status").expect("filter should parse");
        assert!(filter.is_all());
    }

    #[test]
    fn errors_name_the_field() {
        let err = parse_value::<PaymentMethod>("cash", "payment method").expect_err("should fail");
        assert!(err.to_string().contains("invalid payment method 'cash'"));
    }

    #[test]
    fn optional_none_stays_none() {
        let parsed: Option<PaymentMethod> = parse_optional(None, "method").expect("no value");
        assert!(parsed.is_none());
    }
}
