use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Simple syntactic email check: `<local>@<domain>.<tld>` with no whitespace
    /// and a single `@`. No DNS/MX verification.
    /// - Valid: "a@b.com", "first.last@mail.example.org"
    /// - Invalid: "ab.com", "a@bcom", "a @b.com", "a@b@c.com"
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}
