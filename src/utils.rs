use chrono::{NaiveDate, Utc};

pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("${:.2}", value)
    }
}

pub fn format_signed_currency(amount: f64, is_income: bool) -> String {
    if is_income {
        format!("+{}", format_currency(amount))
    } else {
        format!("-{}", format_currency(amount))
    }
}

fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%m/%d").to_string()
}

pub fn format_date_full(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Form date inputs hold `yyyy-mm-dd` strings; empty or garbage is `None`.
pub fn parse_form_date(value: &str) -> Option<NaiveDate> {
    parse_date(value.trim())
}

pub fn today_date() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn today_string() -> String {
    format_date_full(today_date())
}

/// Relative-time label for activity feeds and the dashboard header.
pub fn relative_from(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();
    match days {
        d if d < 0 => {
            let ahead = -d;
            if ahead == 1 {
                "in 1 day".to_string()
            } else {
                format!("in {} days", ahead)
            }
        }
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=29 => {
            let weeks = days / 7;
            if weeks == 1 {
                "1 week ago".to_string()
            } else {
                format!("{} weeks ago", weeks)
            }
        }
        30..=364 => {
            let months = days / 30;
            if months == 1 {
                "1 month ago".to_string()
            } else {
                format!("{} months ago", months)
            }
        }
        _ => {
            let years = days / 365;
            if years == 1 {
                "1 year ago".to_string()
            } else {
                format!("{} years ago", years)
            }
        }
    }
}

/// Monotonic token source for debounced side effects. A task captures the
/// token at schedule time and only fires if no newer edit superseded it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debouncer {
    seq: u32,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&mut self) -> u32 {
        self.seq = self.seq.wrapping_add(1);
        self.seq
    }

    pub fn is_current(&self, token: u32) -> bool {
        self.seq == token
    }
}
