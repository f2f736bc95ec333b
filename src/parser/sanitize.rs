use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use regex::Regex;

/// Publication date shapes seen in feeds beyond RFC 2822 and RFC 3339.
const EXTRA_DATE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%d %b %Y %H:%M:%S %z"];

/// Cleans free text for display: strips markup tags and stray angle
/// brackets, collapses whitespace runs, trims. Idempotent, and `None`
/// passes through untouched.
pub fn sanitize_text(raw: Option<&str>) -> Option<String> {
    let raw = raw?;

    let tags = Regex::new(r"<[^>]*>").unwrap();
    let stripped = tags.replace_all(raw, " ");
    let stripped = stripped.replace(['<', '>'], " ");
    let stripped = stripped.replace("&nbsp;", " ");

    let runs = Regex::new(r"\s+").unwrap();
    Some(runs.replace_all(&stripped, " ").trim().to_string())
}

/// Parses a feed publication date into a canonical UTC timestamp.
///
/// Null or unparsable input yields `None`, never an error; the validator
/// later rejects items without a usable date.
pub fn to_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in EXTRA_DATE_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(raw, format) {
            return Some(parsed.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_sanitize_none_passes_through() {
        assert_eq!(sanitize_text(None), None);
    }

    #[test]
    fn test_sanitize_strips_tags() {
        assert_eq!(
            sanitize_text(Some("Breaking: <b>markets</b> fall")).as_deref(),
            Some("Breaking: markets fall")
        );
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(
            sanitize_text(Some("  too \n\t many   spaces ")).as_deref(),
            Some("too many spaces")
        );
    }

    #[test]
    fn test_sanitize_removes_stray_brackets_and_nbsp() {
        assert_eq!(
            sanitize_text(Some("a < b&nbsp;c")).as_deref(),
            Some("a b c")
        );
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            "plain title",
            "<p>wrapped</p>",
            "  spaced   out  ",
            "<<b>>nested",
            "a < b&nbsp;c",
            "",
        ];
        for input in inputs {
            let once = sanitize_text(Some(input));
            let twice = sanitize_text(once.as_deref());
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_to_date_rfc2822() {
        let parsed = to_date(Some("Mon, 01 Jan 2024 00:00:00 GMT")).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_to_date_rfc2822_with_offset_normalizes_to_utc() {
        let parsed = to_date(Some("Thu, 28 Dec 2023 06:30:00 +0230")).unwrap();
        assert_eq!(parsed.hour(), 4);
        assert_eq!(parsed.minute(), 0);
    }

    #[test]
    fn test_to_date_rfc3339() {
        let parsed = to_date(Some("2024-01-15T12:00:00Z")).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-15T12:00:00+00:00");
    }

    #[test]
    fn test_to_date_plain_format() {
        assert!(to_date(Some("2024-01-15 12:00:00")).is_some());
    }

    #[test]
    fn test_to_date_unparsable_is_none() {
        assert_eq!(to_date(Some("yesterday-ish")), None);
        assert_eq!(to_date(Some("")), None);
        assert_eq!(to_date(None), None);
    }
}
