//! Relative date phrase resolution.
//!
//! Resolves a small closed set of phrases against an explicit `now`:
//!
//! - `today`
//! - `tomorrow`, `tmrw`
//! - `<N> days`, `<N> days from now`, `<N> days ago`
//! - `next <weekday>` (first three letters of the weekday name)
//!
//! Matching is case-insensitive on the trimmed phrase and the first
//! matching rule wins. Anything else is [`ParseResult::Unresolved`].

use crate::consts::DAYS_PER_WEEK;
use crate::date::CalendarDate;
use crate::types::Weekday;

/// Outcome of resolving a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseResult {
    Resolved(CalendarDate),
    /// No rule recognized the phrase
    Unresolved,
}

impl ParseResult {
    pub const fn date(&self) -> Option<CalendarDate> {
        match self {
            Self::Resolved(date) => Some(*date),
            Self::Unresolved => None,
        }
    }

    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

impl From<ParseResult> for Option<CalendarDate> {
    fn from(result: ParseResult) -> Self {
        result.date()
    }
}

impl From<Option<CalendarDate>> for ParseResult {
    fn from(date: Option<CalendarDate>) -> Self {
        date.map_or(Self::Unresolved, Self::Resolved)
    }
}

/// A rule: receives the trimmed, lowercased phrase and `now`.
pub type Matcher = fn(&str, CalendarDate) -> Option<CalendarDate>;

/// Ordered list of named matchers; the first to return a date wins.
#[derive(Debug, Clone)]
pub struct RelativeDateResolver {
    matchers: Vec<(&'static str, Matcher)>,
}

/// The built-in rules, in evaluation order.
pub static DEFAULT_MATCHERS: [(&str, Matcher); 4] = [
    ("today", match_today),
    ("tomorrow", match_tomorrow),
    ("day_offset", match_day_offset),
    ("next_weekday", match_next_weekday),
];

impl Default for RelativeDateResolver {
    fn default() -> Self {
        Self {
            matchers: DEFAULT_MATCHERS.to_vec(),
        }
    }
}

impl RelativeDateResolver {
    /// Resolver with no rules; every phrase is unresolved until rules are pushed.
    pub const fn empty() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Appends a rule after the existing ones.
    #[must_use]
    pub fn with_matcher(mut self, name: &'static str, matcher: Matcher) -> Self {
        self.matchers.push((name, matcher));
        self
    }

    /// Rule names in evaluation order.
    pub fn matcher_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.matchers.iter().map(|(name, _)| *name)
    }

    pub fn resolve(&self, phrase: &str, now: CalendarDate) -> ParseResult {
        resolve_with(&self.matchers, phrase, now)
    }

    /// Like [`RelativeDateResolver::resolve`]; a missing phrase is unresolved.
    pub fn resolve_optional(&self, phrase: Option<&str>, now: CalendarDate) -> ParseResult {
        phrase.map_or(ParseResult::Unresolved, |p| self.resolve(p, now))
    }
}

/// Resolves `phrase` with [`DEFAULT_MATCHERS`].
pub fn resolve_relative_date(phrase: &str, now: CalendarDate) -> ParseResult {
    resolve_with(&DEFAULT_MATCHERS, phrase, now)
}

fn resolve_with(matchers: &[(&str, Matcher)], phrase: &str, now: CalendarDate) -> ParseResult {
    let normalized = phrase.trim().to_lowercase();
    if normalized.is_empty() {
        tracing::debug!("empty phrase left unresolved");
        return ParseResult::Unresolved;
    }

    for (name, matcher) in matchers {
        if let Some(date) = matcher(&normalized, now) {
            tracing::debug!(phrase = %normalized, rule = name, %date, "resolved relative date");
            return ParseResult::Resolved(date);
        }
    }

    tracing::debug!(phrase = %normalized, "relative date unresolved");
    ParseResult::Unresolved
}

pub fn match_today(phrase: &str, now: CalendarDate) -> Option<CalendarDate> {
    (phrase == "today").then_some(now)
}

pub fn match_tomorrow(phrase: &str, now: CalendarDate) -> Option<CalendarDate> {
    match phrase {
        "tomorrow" | "tmrw" => now.add_days(1).ok(),
        _ => None,
    }
}

/// `<N> day(s)` with an optional `from now` or `ago` tail. Any phrase
/// containing "ago" counts backwards.
pub fn match_day_offset(phrase: &str, now: CalendarDate) -> Option<CalendarDate> {
    let digits_end = phrase
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(phrase.len());
    if digits_end == 0 {
        return None;
    }
    let count: i64 = phrase[..digits_end].parse().ok()?;

    let rest = phrase[digits_end..].trim_start();
    let tail = rest
        .strip_prefix("days")
        .or_else(|| rest.strip_prefix("day"))?;

    // Require a word boundary after "day(s)"
    if !(tail.is_empty() || tail.starts_with(char::is_whitespace)) {
        return None;
    }
    let tail: Vec<&str> = tail.split_whitespace().collect();
    match tail.as_slice() {
        [] | ["from", "now"] | ["ago"] => {}
        _ => return None,
    }

    let offset = if phrase.contains("ago") { -count } else { count };
    now.add_days(offset).ok()
}

/// `next <weekday>`: the next occurrence strictly after `now`, so the same
/// weekday resolves a full week ahead.
pub fn match_next_weekday(phrase: &str, now: CalendarDate) -> Option<CalendarDate> {
    let mut words = phrase.split_whitespace();
    if words.next()? != "next" {
        return None;
    }
    let target = Weekday::from_prefix(words.next()?)?;
    if words.next().is_some() {
        return None;
    }

    let week = i64::from(DAYS_PER_WEEK);
    let distance = match (i64::from(target.index()) - i64::from(now.weekday().index()) + week) % week {
        0 => week,
        d => d,
    };
    now.add_days(distance).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    // Friday 2024-03-15
    fn now() -> CalendarDate {
        date(2024, 2, 15)
    }

    fn resolve(phrase: &str) -> ParseResult {
        resolve_relative_date(phrase, now())
    }

    #[test]
    fn test_today_any_case() {
        assert_eq!(resolve("today"), ParseResult::Resolved(now()));
        assert_eq!(resolve("Today"), ParseResult::Resolved(now()));
        assert_eq!(resolve("  TODAY  "), ParseResult::Resolved(now()));
    }

    #[test]
    fn test_tomorrow() {
        assert_eq!(resolve("tomorrow"), ParseResult::Resolved(date(2024, 2, 16)));
        assert_eq!(resolve("Tmrw"), ParseResult::Resolved(date(2024, 2, 16)));
        assert_eq!(
            resolve_relative_date("tomorrow", date(2024, 1, 29)),
            ParseResult::Resolved(date(2024, 2, 1))
        );
    }

    #[test]
    fn test_day_offsets() {
        assert_eq!(resolve("3 days"), ParseResult::Resolved(date(2024, 2, 18)));
        assert_eq!(resolve("3 days from now"), ParseResult::Resolved(date(2024, 2, 18)));
        assert_eq!(resolve("3 days ago"), ParseResult::Resolved(date(2024, 2, 12)));
        assert_eq!(resolve("3days"), ParseResult::Resolved(date(2024, 2, 18)));
        assert_eq!(resolve("1 day ago"), ParseResult::Resolved(date(2024, 2, 14)));
        assert_eq!(resolve("0 days"), ParseResult::Resolved(now()));
        assert_eq!(
            resolve("20   Days   FROM   now"),
            ParseResult::Resolved(date(2024, 3, 4))
        );
    }

    #[test]
    fn test_day_offsets_cross_year() {
        assert_eq!(
            resolve_relative_date("10 days ago", date(2024, 0, 5)),
            ParseResult::Resolved(date(2023, 11, 26))
        );
    }

    #[test]
    fn test_day_offset_rejections() {
        assert_eq!(resolve("in 3 days"), ParseResult::Unresolved);
        assert_eq!(resolve("days"), ParseResult::Unresolved);
        assert_eq!(resolve("3 weeks"), ParseResult::Unresolved);
        assert_eq!(resolve("3 dayz"), ParseResult::Unresolved);
        assert_eq!(resolve("3 days later"), ParseResult::Unresolved);
        assert_eq!(resolve("-3 days"), ParseResult::Unresolved);
        assert_eq!(resolve("99999999999999999999999 days"), ParseResult::Unresolved);
        assert_eq!(resolve("9999999999999 days"), ParseResult::Unresolved);
    }

    #[test]
    fn test_next_weekday_skips_same_day() {
        // now is a Friday
        assert_eq!(resolve("next Friday"), ParseResult::Resolved(date(2024, 2, 22)));
        assert_eq!(resolve("next fri"), ParseResult::Resolved(date(2024, 2, 22)));
    }

    #[test]
    fn test_next_weekday_distances() {
        let cases = [
            ("next saturday", date(2024, 2, 16)),
            ("next sunday", date(2024, 2, 17)),
            ("next monday", date(2024, 2, 18)),
            ("next tuesday", date(2024, 2, 19)),
            ("next wednesday", date(2024, 2, 20)),
            ("next thursday", date(2024, 2, 21)),
        ];
        for (phrase, expected) in cases {
            assert_eq!(resolve(phrase), ParseResult::Resolved(expected), "{phrase}");
        }
    }

    #[test]
    fn test_next_weekday_rejections() {
        assert_eq!(resolve("next"), ParseResult::Unresolved);
        assert_eq!(resolve("next fr"), ParseResult::Unresolved);
        assert_eq!(resolve("next week"), ParseResult::Unresolved);
        assert_eq!(resolve("next friday please"), ParseResult::Unresolved);
        assert_eq!(resolve("friday"), ParseResult::Unresolved);
    }

    #[test]
    fn test_next_weekday_uses_three_letter_prefix() {
        // "mon" is the prefix of "month" too
        assert_eq!(resolve("next month"), ParseResult::Resolved(date(2024, 2, 18)));
        assert_eq!(resolve("next satellite"), ParseResult::Resolved(date(2024, 2, 16)));
    }

    #[test]
    fn test_unresolved() {
        assert_eq!(resolve(""), ParseResult::Unresolved);
        assert_eq!(resolve("   "), ParseResult::Unresolved);
        assert_eq!(resolve("yesterday"), ParseResult::Unresolved);
        assert_eq!(resolve("someday"), ParseResult::Unresolved);
    }

    #[test]
    fn test_resolve_optional() {
        let resolver = RelativeDateResolver::default();
        assert_eq!(resolver.resolve_optional(None, now()), ParseResult::Unresolved);
        assert_eq!(
            resolver.resolve_optional(Some("today"), now()),
            ParseResult::Resolved(now())
        );
    }

    #[test]
    fn test_matchers_are_independent() {
        assert_eq!(match_today("today", now()), Some(now()));
        assert_eq!(match_today("tomorrow", now()), None);
        assert_eq!(match_tomorrow("today", now()), None);
        assert_eq!(match_day_offset("next friday", now()), None);
        assert_eq!(match_next_weekday("3 days", now()), None);
    }

    #[test]
    fn test_first_match_wins() {
        fn always_epoch(_: &str, _: CalendarDate) -> Option<CalendarDate> {
            CalendarDate::new(1970, 0, 1).ok()
        }

        let resolver = RelativeDateResolver::default().with_matcher("fallback", always_epoch);
        assert_eq!(resolver.resolve("today", now()), ParseResult::Resolved(now()));
        assert_eq!(
            resolver.resolve("whenever", now()),
            ParseResult::Resolved(date(1970, 0, 1))
        );
        assert_eq!(
            resolver.matcher_names().collect::<Vec<_>>(),
            vec!["today", "tomorrow", "day_offset", "next_weekday", "fallback"]
        );
    }

    #[test]
    fn test_default_resolver_uses_builtin_table() {
        let resolver = RelativeDateResolver::default();
        assert!(
            resolver
                .matcher_names()
                .eq(DEFAULT_MATCHERS.iter().map(|(name, _)| *name))
        );

        for phrase in ["today", "tmrw", "4 days ago", "next sun", "nope", ""] {
            assert_eq!(
                resolve_relative_date(phrase, now()),
                resolver.resolve(phrase, now()),
                "{phrase}"
            );
        }
    }

    #[test]
    fn test_empty_resolver() {
        let resolver = RelativeDateResolver::empty();
        assert_eq!(resolver.resolve("today", now()), ParseResult::Unresolved);
    }

    #[test]
    fn test_parse_result_conversions() {
        let resolved = ParseResult::Resolved(now());
        assert!(resolved.is_resolved());
        assert_eq!(Option::<CalendarDate>::from(resolved), Some(now()));
        assert!(!ParseResult::Unresolved.is_resolved());
        assert_eq!(ParseResult::from(None), ParseResult::Unresolved);
    }
}
