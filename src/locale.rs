use crate::calendar::YearMonth;
use time::{Month, Weekday};

/// Language used for month and weekday names
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum Locale {
    #[default]
    English,
    Arabic,
}

static ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static ARABIC_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

// Indexed by days from Sunday
static ENGLISH_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// The customary one-letter forms, from the last letter of each day's name
static ARABIC_WEEKDAYS: [&str; 7] = ["ح", "ن", "ث", "ر", "خ", "ج", "س"];

impl Locale {
    pub(crate) fn month_name(self, month: Month) -> &'static str {
        let i = usize::from(u8::from(month) - 1);
        match self {
            Locale::English => ENGLISH_MONTHS[i],
            Locale::Arabic => ARABIC_MONTHS[i],
        }
    }

    pub(crate) fn weekday_abbrev(self, wd: Weekday) -> &'static str {
        let i = usize::from(wd.number_days_from_sunday());
        match self {
            Locale::English => ENGLISH_WEEKDAYS[i],
            Locale::Arabic => ARABIC_WEEKDAYS[i],
        }
    }

    pub(crate) fn month_title(self, ym: YearMonth) -> String {
        format!("{} {}", self.month_name(ym.month()), ym.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_title() {
        let ym = YearMonth::new(2024, Month::March);
        assert_eq!(Locale::English.month_title(ym), "March 2024");
        assert_eq!(Locale::Arabic.month_title(ym), "مارس 2024");
    }

    #[test]
    fn test_english_matches_time() {
        let mut month = Month::January;
        for _ in 0..12 {
            assert_eq!(Locale::English.month_name(month), month.to_string());
            month = month.next();
        }
    }

    #[test]
    fn test_weekday_abbrev() {
        assert_eq!(Locale::English.weekday_abbrev(Weekday::Sunday), "Sun");
        assert_eq!(Locale::English.weekday_abbrev(Weekday::Saturday), "Sat");
        assert_eq!(Locale::Arabic.weekday_abbrev(Weekday::Sunday), "ح");
        assert_eq!(Locale::Arabic.weekday_abbrev(Weekday::Monday), "ن");
        assert_eq!(Locale::Arabic.weekday_abbrev(Weekday::Friday), "ج");
    }
}
