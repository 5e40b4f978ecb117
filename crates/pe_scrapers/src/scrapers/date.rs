use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use scraper::{Html, Selector};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

lazy_static! {
    static ref LOOSE_DATE: Regex =
        Regex::new(r"(\d{4})\s*[-./년]\s*(\d{1,2})\s*[-./월]\s*(\d{1,2})").expect("date pattern");
    static ref SCRIPT: Selector = Selector::parse("script").expect("script selector");
    static ref PUBLISHED_META: Selector =
        Selector::parse("meta[property='article:published_time']").expect("meta selector");
}

fn date_from_captures(caps: &Captures) -> Option<NaiveDate> {
    let year = caps.get(1)?.as_str().parse().ok()?;
    let month = caps.get(2)?.as_str().parse().ok()?;
    let day = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Find the first valid calendar date in free text, as `YYYY-MM-DD`.
pub fn normalize_date(text: &str) -> Option<String> {
    LOOSE_DATE
        .captures_iter(text)
        .find_map(|caps| date_from_captures(&caps))
        .map(|date| date.format(DATE_FORMAT).to_string())
}

/// Publication date of a detail page.
///
/// `script_pattern` runs over inline script text and must capture year,
/// month and day as groups 1 to 3. The `article:published_time` meta tag
/// comes next, then `today`.
pub fn parse_date(document: &Html, script_pattern: &Regex, today: NaiveDate) -> String {
    let from_script = document.select(&SCRIPT).find_map(|script| {
        let text = script.text().collect::<String>();
        script_pattern
            .captures_iter(&text)
            .find_map(|caps| date_from_captures(&caps))
    });
    if let Some(date) = from_script {
        return date.format(DATE_FORMAT).to_string();
    }

    let from_meta = document
        .select(&PUBLISHED_META)
        .filter_map(|meta| meta.value().attr("content"))
        .find_map(normalize_date);
    if let Some(date) = from_meta {
        return date;
    }

    today.format(DATE_FORMAT).to_string()
}
