//! Best-effort extraction of an airport pair from free text.
//!
//! Queries arrive as prose ("LAX to JFK", "lax-jfk", "flight from SFO LAX").
//! The parser recognises two surface syntaxes over 3-letter codes: the
//! TO/space form (`LAX TO JFK`, `LAX JFK`) and the hyphen form (`LAX-JFK`).
//! Matching is deliberately loose (find the first plausible pair, not
//! strict validation) but the precedence is explicit:
//! candidate start positions are scanned left to right, and at each position
//! the TO/space form is tried before the hyphen form. The first pair found
//! ends the scan; an identical pair (`LAX LAX`) rejects the whole query
//! rather than resuming the search.

/// A parsed origin/destination pair of uppercase IATA codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    /// Departure airport code.
    pub from: String,
    /// Arrival airport code.
    pub to: String,
}

/// Extract a route from free text, or `None` when no pair can be found.
///
/// Input is uppercased before matching, so case is irrelevant. Codes must be
/// standalone 3-letter alphabetic tokens: a code embedded in a longer word
/// (`LAXTOJFK`) never matches.
///
/// # Examples
/// ```
/// use flightscore::domain::route::parse_route;
///
/// let route = parse_route("lax to jfk").expect("parses");
/// assert_eq!((route.from.as_str(), route.to.as_str()), ("LAX", "JFK"));
/// assert!(parse_route("LAX LAX").is_none());
/// ```
#[must_use]
pub fn parse_route(text: &str) -> Option<RouteQuery> {
    let chars: Vec<char> = text.to_uppercase().chars().collect();
    for start in 0..chars.len() {
        let Some(route) = route_at(&chars, start) else {
            continue;
        };
        if route.from == route.to {
            return None;
        }
        return Some(route);
    }
    None
}

/// Try to match a full pair with its first code starting at `start`.
fn route_at(chars: &[char], start: usize) -> Option<RouteQuery> {
    let from = code_at(chars, start)?;
    let rest = start + 3;
    let to = to_or_space_arm(chars, rest).or_else(|| hyphen_arm(chars, rest))?;
    Some(RouteQuery { from, to })
}

/// TO/space form: optional whitespace, then the literal keyword `TO` (with
/// optional whitespace before the second code), or, when the gap contains
/// at least one actual space, the second code at the first non-whitespace
/// position.
fn to_or_space_arm(chars: &[char], rest: usize) -> Option<String> {
    let gap_end = skip_whitespace(chars, rest);
    if chars.get(gap_end) == Some(&'T') && chars.get(gap_end + 1) == Some(&'O') {
        let code_pos = skip_whitespace(chars, gap_end + 2);
        if let Some(code) = code_at(chars, code_pos) {
            return Some(code);
        }
    }
    let gap = chars.get(rest..gap_end)?;
    if gap.contains(&' ') {
        return code_at(chars, gap_end);
    }
    None
}

/// Hyphen form: optional whitespace, `-`, optional whitespace, second code.
fn hyphen_arm(chars: &[char], rest: usize) -> Option<String> {
    let dash = skip_whitespace(chars, rest);
    if chars.get(dash) != Some(&'-') {
        return None;
    }
    code_at(chars, skip_whitespace(chars, dash + 1))
}

/// Match exactly three ASCII uppercase letters at `pos`, delimited by word
/// boundaries on both sides.
fn code_at(chars: &[char], pos: usize) -> Option<String> {
    if pos > 0 && chars.get(pos - 1).copied().is_some_and(is_word) {
        return None;
    }
    let letters = chars.get(pos..pos.checked_add(3)?)?;
    if !letters.iter().all(char::is_ascii_uppercase) {
        return None;
    }
    if chars.get(pos + 3).copied().is_some_and(is_word) {
        return None;
    }
    Some(letters.iter().collect())
}

fn skip_whitespace(chars: &[char], mut pos: usize) -> usize {
    while chars.get(pos).copied().is_some_and(char::is_whitespace) {
        pos += 1;
    }
    pos
}

/// Word characters for boundary purposes: ASCII alphanumerics plus
/// underscore.
fn is_word(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
