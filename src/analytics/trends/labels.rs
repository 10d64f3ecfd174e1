use chrono::{Datelike, NaiveDate};

/// Month names as the reporting surfaces display them (pt-BR, lower case).
const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// `dd/mm`: the label of a day bucket.
pub fn day_label(date: NaiveDate) -> String {
    format!("{:02}/{:02}", date.day(), date.month())
}

/// `dd/mm - dd/mm`: the label of a week bucket, spanning Monday to Sunday.
pub fn week_label(week_start: NaiveDate) -> String {
    let week_end = week_start + chrono::Duration::days(6);
    format!("{} - {}", day_label(week_start), day_label(week_end))
}

/// `<month> <year>`: the label of a month bucket.
pub fn month_label(date: NaiveDate) -> String {
    format!("{} {}", month_name(date), date.year())
}

/// `dd/mm/yyyy`: full dates in report metadata.
pub fn full_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}
