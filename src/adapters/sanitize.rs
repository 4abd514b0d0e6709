//! Log redaction for survey health data.
//!
//! Survey values (blood pressure, age, sleep hours, ...) must not end up in
//! log files. Call sites avoid logging them, and this writer scrubs formatted
//! log lines as a second layer:
//! - blood pressure readings (`120/80`)
//! - survey fields rendered as JSON or `key=value` pairs
//! - bearer tokens and e-mail addresses
//!
//! Input per call is capped (see `SLEEPWISE_SANITIZE_MAX_BYTES`).

use regex::{Regex, RegexSet};
use std::sync::OnceLock;
use tracing_subscriber::fmt::MakeWriter;

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

const DEFAULT_SANITIZE_MAX_BYTES: usize = 16 * 1024;

struct Rule {
    regex: Regex,
    replacement: &'static str,
}

struct Patterns {
    set: RegexSet,
    rules: Vec<Rule>,
}

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| {
        let survey_keys = "gender|age|occupation|sleepDuration|qualityOfSleep|activityLevel|stressLevel|bmiCategory|bloodPressure|heartRate|dailySteps";
        let table: Vec<(String, &'static str)> = vec![
            // JSON payload fragments: "age":25 / "gender":"Male"
            (
                format!(r#""({survey_keys})"\s*:\s*(?:"[^"]*"|-?[0-9][0-9.eE+-]*)"#),
                r#""$1":"[REDACTED]""#,
            ),
            // Structured fields: age=25 / sleepDuration="7.5"
            (
                format!(r#"\b({survey_keys})\s*=\s*(?:"[^"]*"|\S+)"#),
                "$1=[REDACTED]",
            ),
            (r"\b[0-9]{2,3}/[0-9]{2,3}\b".to_string(), "[REDACTED-BP]"),
            (
                r"(?i)\bbearer\s+[A-Za-z0-9._~+/-]{8,}=*".to_string(),
                "Bearer [REDACTED-TOKEN]",
            ),
            (
                r"(?i)\b[a-z0-9._%+-]{1,64}@(?:[a-z0-9-]{1,63}\.)+[a-z]{2,}\b".to_string(),
                "[REDACTED-EMAIL]",
            ),
        ];

        let set = RegexSet::new(table.iter().map(|(p, _)| p.as_str())).expect("Valid regex set");
        let rules = table
            .into_iter()
            .map(|(pattern, replacement)| Rule {
                regex: Regex::new(&pattern).expect("Valid regex"),
                replacement,
            })
            .collect();

        Patterns { set, rules }
    })
}

fn max_sanitize_bytes() -> usize {
    std::env::var("SLEEPWISE_SANITIZE_MAX_BYTES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&v| v > 0)
        .unwrap_or(DEFAULT_SANITIZE_MAX_BYTES)
}

fn truncate_to_char_boundary(input: &str, max_bytes: usize) -> (&str, bool) {
    if input.len() <= max_bytes {
        return (input, false);
    }
    let mut end = max_bytes;
    while end > 0 && !input.is_char_boundary(end) {
        end -= 1;
    }
    (&input[..end], true)
}

/// Redact survey data from a string.
#[must_use]
pub fn sanitize(input: &str) -> String {
    sanitize_with_limit(input, max_sanitize_bytes())
}

fn sanitize_with_limit(input: &str, max_bytes: usize) -> String {
    let patterns = patterns();
    let (prefix, truncated) = truncate_to_char_boundary(input, max_bytes);

    let mut result = prefix.to_string();
    for idx in patterns.set.matches(prefix).into_iter() {
        let rule = &patterns.rules[idx];
        result = rule.regex.replace_all(&result, rule.replacement).into_owned();
    }

    if truncated {
        result.push_str(" [TRUNCATED]");
    }
    result
}

/// Whether a string looks like it carries survey data.
#[must_use]
pub fn contains_health_data(input: &str) -> bool {
    let (prefix, _) = truncate_to_char_boundary(input, max_sanitize_bytes());
    patterns().set.is_match(prefix)
}

/// A `tracing_subscriber` writer that sanitizes each formatted log line
/// before it reaches the underlying sink.
#[derive(Debug, Clone)]
pub struct SanitizingMakeWriter<M> {
    inner: M,
}

impl<M> SanitizingMakeWriter<M> {
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

pub struct SanitizingWriter<W> {
    inner: W,
    buffer: Vec<u8>,
}

impl<W: std::io::Write> SanitizingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
        }
    }

    fn write_sanitized(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        let text = String::from_utf8_lossy(bytes);
        self.inner.write_all(sanitize(&text).as_bytes())
    }

    fn flush_lines(&mut self) -> std::io::Result<()> {
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            self.write_sanitized(&line)?;
        }
        Ok(())
    }
}

impl<W: std::io::Write> std::io::Write for SanitizingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);

        // A single line with no newline must not grow without bound.
        let hard_cap = max_sanitize_bytes().saturating_mul(2);
        if self.buffer.len() > hard_cap {
            let pending = std::mem::take(&mut self.buffer);
            self.write_sanitized(&pending)?;
            self.inner.write_all(b"\n")?;
            return Ok(buf.len());
        }

        self.flush_lines()?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_lines()?;
        if !self.buffer.is_empty() {
            let pending = std::mem::take(&mut self.buffer);
            self.write_sanitized(&pending)?;
        }
        self.inner.flush()
    }
}

impl<'a, M> MakeWriter<'a> for SanitizingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = SanitizingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        SanitizingWriter::new(self.inner.make_writer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sanitize_blood_pressure() {
        let sanitized = sanitize("reading 135/85 recorded");
        assert!(sanitized.contains("[REDACTED-BP]"));
        assert!(!sanitized.contains("135/85"));
    }

    #[test]
    fn test_blood_pressure_rule_matches_ascii_digits_only() {
        assert!(contains_health_data("bp 90/60"));
        assert!(!contains_health_data("ratio ١٢٠/٨٠"));
    }

    #[test]
    fn test_sanitize_json_payload() {
        let input = r#"body={"gender":"Female","age":41,"sleepDuration":6.5}"#;
        let sanitized = sanitize(input);
        assert!(!sanitized.contains("Female"));
        assert!(!sanitized.contains("41"));
        assert!(!sanitized.contains("6.5"));
        assert!(sanitized.contains(r#""sleepDuration":"[REDACTED]""#));
    }

    #[test]
    fn test_sanitize_structured_fields() {
        let sanitized = sanitize("validation failed age=0 dailySteps=\"-3\"");
        assert!(sanitized.contains("age=[REDACTED]"));
        assert!(sanitized.contains("dailySteps=[REDACTED]"));
        assert!(!sanitized.contains("-3"));
    }

    #[test]
    fn test_sanitize_token_and_email() {
        let sanitized = sanitize("Authorization: Bearer abcdefgh12345678 from user@example.org");
        assert!(sanitized.contains("[REDACTED-TOKEN]"));
        assert!(sanitized.contains("[REDACTED-EMAIL]"));
    }

    #[test]
    fn test_plain_text_untouched() {
        let input = "Prediction received label=Insomnia";
        assert!(!contains_health_data(input));
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn test_truncates_large_inputs() {
        let sanitized = sanitize_with_limit("héllo wörld and more", 2);
        assert!(sanitized.ends_with("[TRUNCATED]"));
    }

    #[test]
    fn test_writer_sanitizes_lines() {
        let mut out = Vec::new();
        {
            let mut writer = SanitizingWriter::new(&mut out);
            writer.write_all(b"bp 120/80\npartial 90/").expect("write");
            writer.write_all(b"60").expect("write");
            writer.flush().expect("flush");
        }
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text, "bp [REDACTED-BP]\npartial [REDACTED-BP]");
    }
}
