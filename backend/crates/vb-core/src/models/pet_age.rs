use chrono::{Datelike, NaiveDate};

/// Describe the age of a pet born on `birth` as of `today`.
///
/// Produces "N months" under a year, "N years" on a whole-year boundary and
/// "N years and M months" otherwise, with singular forms for 1. Birth dates
/// after `today` read as "0 months".
pub fn describe_age(birth: NaiveDate, today: NaiveDate) -> String {
    let mut months = (today.year() - birth.year()) * 12 + today.month() as i32
        - birth.month() as i32;
    if today.day() < birth.day() {
        months -= 1;
    }
    let months = months.max(0);

    let years = months / 12;
    let remaining = months % 12;

    if years == 0 {
        plural(remaining, "month")
    } else if remaining == 0 {
        plural(years, "year")
    } else {
        format!("{} and {}", plural(years, "year"), plural(remaining, "month"))
    }
}

fn plural(count: i32, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
