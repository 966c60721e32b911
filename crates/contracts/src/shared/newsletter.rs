use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/newsletter`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterResponse {
    pub subscribed: bool,
}

/// Whitespace as browsers define it for `\s`. Unlike Unicode `White_Space`
/// it includes U+FEFF and leaves out U+0085.
const WS: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^[^{ws}]+@[^{ws}]+$", ws = WS)).expect("email pattern is valid")
});

/// Loose address check: no whitespace anywhere and an `@` with at least one
/// character on each side.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
