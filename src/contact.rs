use crate::config::SiteConfig;
use crate::dates::{format_iso, DateRange};

/// Visitor-entered fields of the booking request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub nights: u32,
    /// What the nights field shows; may be empty or out of range mid-edit.
    pub nights_text: String,
}

/// How the form leaves the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Plain `<form method="POST">` to the relay.
    Relay { action: String },
    /// `mailto:` link for the visitor's mail client.
    MailTo { href: String },
}

fn iso_or_dash(d: Option<chrono::NaiveDate>) -> String {
    d.map(format_iso).unwrap_or_else(|| "-".to_string())
}

impl ContactDraft {
    pub fn new(cfg: &SiteConfig) -> Self {
        Self {
            nights: cfg.nights.default,
            nights_text: cfg.nights.default.to_string(),
            ..Self::default()
        }
    }

    /// Keeps the raw text in the field. A number updates `nights` (clamped);
    /// empty or garbage keeps the previous count.
    pub fn with_nights_input(self, raw: &str, cfg: &SiteConfig) -> Self {
        let nights = match raw.trim().parse::<u32>() {
            Ok(n) => cfg.nights.clamp(n),
            Err(_) => self.nights,
        };
        Self { nights, nights_text: raw.to_string(), ..self }
    }

    /// Field lost focus: show the count that will actually be sent.
    pub fn settle_nights(self) -> Self {
        Self { nights_text: self.nights.to_string(), ..self }
    }

    pub fn mail_body(&self, range: &DateRange) -> String {
        format!(
            "Nome: {}\nEmail: {}\nTelefono: {}\nCheck\u{2011}in: {}\nCheck\u{2011}out: {}\nNotti: {}\n\nMessaggio:\n{}",
            self.name,
            self.email,
            self.phone,
            iso_or_dash(range.check_in()),
            iso_or_dash(range.check_out()),
            self.nights,
            self.message,
        )
    }

    pub fn mailto_href(&self, range: &DateRange, cfg: &SiteConfig) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            cfg.booking_recipient,
            urlencoding::encode(&cfg.booking_subject),
            urlencoding::encode(&self.mail_body(range)),
        )
    }

    pub fn submission(&self, range: &DateRange, cfg: &SiteConfig) -> Submission {
        match cfg.relay() {
            Some(action) => Submission::Relay { action: action.to_string() },
            None => Submission::MailTo { href: self.mailto_href(range, cfg) },
        }
    }
}
