use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::errors::ProductError;

const EXPIRATION_FORMAT: &str = "%d/%m/%Y";

// chrono accepts single-digit days and short years, so the shape is checked first.
static EXPIRATION_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").ok());

/// Expiration date in `DD/MM/YYYY` form, e.g. `28/01/2022`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiration(NaiveDate);

impl Expiration {
    pub fn parse(raw: &str) -> Result<Self, ProductError> {
        let well_formed = EXPIRATION_SHAPE
            .as_ref()
            .is_some_and(|shape| shape.is_match(raw));
        if !well_formed {
            return Err(ProductError::InvalidDateFormat);
        }

        NaiveDate::parse_from_str(raw, EXPIRATION_FORMAT)
            .map(Self)
            .map_err(|_| ProductError::InvalidDateFormat)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for Expiration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(EXPIRATION_FORMAT))
    }
}

impl std::str::FromStr for Expiration {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_parse_day_month_year() {
        let expiration = Expiration::parse("28/01/2022").unwrap();
        assert_eq!(
            expiration.date(),
            NaiveDate::from_ymd_opt(2022, 1, 28).unwrap()
        );
    }

    #[test]
    fn should_reject_iso_format() {
        assert!(matches!(
            Expiration::parse("2022-01-28"),
            Err(ProductError::InvalidDateFormat)
        ));
    }

    #[test]
    fn should_reject_month_out_of_range() {
        assert!(matches!(
            Expiration::parse("01/13/2022"),
            Err(ProductError::InvalidDateFormat)
        ));
    }

    #[test]
    fn should_reject_day_not_in_month() {
        assert!(Expiration::parse("30/02/2022").is_err());
        assert!(Expiration::parse("29/02/2024").is_ok());
    }

    #[test]
    fn should_reject_unpadded_or_short_components() {
        assert!(Expiration::parse("1/01/2022").is_err());
        assert!(Expiration::parse("01/1/2022").is_err());
        assert!(Expiration::parse("01/01/22").is_err());
        assert!(Expiration::parse("").is_err());
        assert!(Expiration::parse(" 28/01/2022").is_err());
    }

    #[test]
    fn should_display_in_source_format() {
        let expiration: Expiration = "05/11/2023".parse().unwrap();
        assert_eq!(expiration.to_string(), "05/11/2023");
    }

    proptest! {
        #[test]
        fn should_round_trip_any_valid_calendar_date(
            year in 1000i32..=9999,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let raw = format!("{:02}/{:02}/{:04}", day, month, year);
            let expiration = Expiration::parse(&raw).unwrap();
            prop_assert_eq!(expiration.to_string(), raw);
        }
    }
}
