use once_cell::sync::Lazy;
use regex::Regex;

/// Terms that mark a message as a possible scam. Matched as lowercase substrings.
pub const SUSPICIOUS_TERMS: &[&str] = &[
    "otp",
    "one time password",
    "password",
    "pin",
    "verify",
    "verify now",
    "account",
    "bank",
    "login",
    "click",
    "link",
    "bit.ly",
    "tinyurl",
    "shorturl",
    "free",
    "win",
    "winner",
    "lottery",
    "congratulations",
    "prize",
    "limited",
    "urgent",
    "immediately",
    "transfer",
    "refund",
    "offer",
    "reward",
    "scan",
    "qr",
    "scan qr",
    "security alert",
    "blocked",
    "debit",
    "credit",
    "update now",
    "suspicious",
];

/// Phrases that add to the score without being reported as indicators.
pub const URGENCY_PHRASES: &[&str] = &[
    "urgent",
    "immediately",
    "verify now",
    "security alert",
    "blocked",
];

pub const LINK_INDICATOR: &str = "contains link/URL";
pub const NUMERIC_SEQUENCE_INDICATOR: &str = "numeric sequence (possible OTP/account)";

// Case folding and word boundaries are ASCII-only, so non-ASCII letters never
// stand in for ASCII ones and always count as separators. The tail classes
// exclude the ECMAScript whitespace set, which has U+FEFF but not U+0085.
pub static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i-u:https?://)",
        r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
        r"|(?i-u:[a-z0-9-])+\.(?i-u:com|in|net|xyz|online|org|co)/",
        r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]*",
        r"|(?-u:\b)(?i-u:bit\.ly|tinyurl|goo\.gl)(?-u:\b)",
    ))
    .unwrap()
});

pub static NUMERIC_SEQUENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)[0-9]{4,8}(?-u:\b)").unwrap());

/// ECMAScript whitespace: Unicode White_Space without NEL, plus the byte
/// order mark.
pub fn is_message_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Strips surrounding whitespace, keeping NEL and dropping the byte order
/// mark, unlike `str::trim`.
pub fn trim_message(text: &str) -> &str {
    text.trim_matches(is_message_whitespace)
}
