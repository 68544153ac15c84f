//! Timeline extraction
//!
//! Lines are walked with an explicit cursor. A timed line may consume the
//! route line right after it; a route line found anywhere else is attached
//! to the latest item still missing a route. Items are deduplicated by time
//! (first occurrence wins, later corrections are dropped) and sorted.

use super::clock::{ClockTime, Period};
use super::text::{first_capture, is_match, non_empty_lines};
use super::types::{Route, RouteType, TimelineItem};
use regex::{Captures, Regex};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// Turns a grammar's captures into a time and the raw action text
type Extract = for<'t> fn(&Captures<'t>) -> Option<(ClockTime, &'t str)>;

/// One time-prefix grammar
struct TimeGrammar {
    label: &'static str,
    pattern: Regex,
    extract: Extract,
}

static TIME_GRAMMARS: LazyLock<Vec<TimeGrammar>> = LazyLock::new(|| {
    let table: [(&'static str, &str, Extract); 4] = [
        ("24h", r"^(\d{1,2}):(\d{2})\s*(.+)$", extract_24h),
        ("o-clock", r"^(\d{1,2})点\s*(.+)$", extract_o_clock),
        (
            "period-o-clock",
            r"^(上午|下午|晚上|凌晨)(\d{1,2})点\s*(.+)$",
            extract_period_o_clock,
        ),
        (
            "12h",
            r"(?i)^(\d{1,2}):(\d{2})\s*(AM|PM|上午|下午|晚上|凌晨)\s*(.+)$",
            extract_12h,
        ),
    ];

    table
        .into_iter()
        .filter_map(|(label, pattern, extract)| {
            Regex::new(pattern).ok().map(|pattern| TimeGrammar {
                label,
                pattern,
                extract,
            })
        })
        .collect()
});

// A period marker standing on its own, not the start of a word like 下午茶
static PERIOD_PREFIX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:am|pm)(?:[^a-z]|$)|(?:上午|下午|晚上|凌晨)(?:[\s\-:：|]|$))").ok()
});

static ROUTE_LINE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^路线[：:]\s*(公交|地铁|驾驶|步行)[\s\-–—]*(.+)$").ok()
});

static LIST_ITEM: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:[-*•·]|\d+[.、)）])\s*(.+)$").ok());

static EMBEDDED_TIME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}):(\d{2})|(\d{1,2})点").ok());

/// Characters allowed between the time prefix and the action
const ACTION_SEPARATORS: &[char] = &['-', '–', '—', ':', '：', '|'];

/// A timeline record before ids are assigned
#[derive(Debug)]
struct Entry {
    time: ClockTime,
    action: String,
    route: Option<Route>,
}

/// Parse a timeline; empty only when the text carries no usable time
pub fn extract_timeline(text: &str) -> Vec<TimelineItem> {
    let lines = non_empty_lines(text);

    let entries = scan(&lines);
    if !entries.is_empty() {
        return finalize(entries);
    }

    let entries = scan_list_items(&lines);
    if entries.is_empty() {
        debug!("No timeline entries found");
    } else {
        debug!("Recovered {} timeline entries from list items", entries.len());
    }
    finalize(entries)
}

fn scan(lines: &[&str]) -> Vec<Entry> {
    let mut entries: Vec<Entry> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if let Some((time, action)) = match_time_prefix(line) {
            let mut entry = Entry {
                time,
                action,
                route: None,
            };
            if let Some(route) = lines.get(i + 1).and_then(|next| parse_route(next)) {
                entry.route = Some(route);
                i += 1;
            }
            entries.push(entry);
        } else if let Some(route) = parse_route(line) {
            attach_orphan_route(&mut entries, route);
        }

        i += 1;
    }

    entries
}

/// Try each grammar in priority order; the first that yields a valid time wins
fn match_time_prefix(line: &str) -> Option<(ClockTime, String)> {
    TIME_GRAMMARS.iter().find_map(|grammar| {
        let caps = grammar.pattern.captures(line)?;
        let (time, action) = (grammar.extract)(&caps)?;
        let action = clean_action(action)?;
        debug!("Line matched '{}' grammar at {}", grammar.label, time);
        Some((time, action))
    })
}

fn extract_24h<'t>(caps: &Captures<'t>) -> Option<(ClockTime, &'t str)> {
    let hour = caps.get(1)?.as_str();
    let action = caps.get(3)?.as_str();
    // `9:30 PM ...` belongs to the 12-hour grammar
    if hour.parse::<u32>().ok()? <= 12 && is_match(&PERIOD_PREFIX, action) {
        return None;
    }
    let time = ClockTime::from_digits(hour, Some(caps.get(2)?.as_str()))?;
    Some((time, action))
}

fn extract_o_clock<'t>(caps: &Captures<'t>) -> Option<(ClockTime, &'t str)> {
    let time = ClockTime::from_digits(caps.get(1)?.as_str(), None)?;
    Some((time, caps.get(2)?.as_str()))
}

fn extract_period_o_clock<'t>(caps: &Captures<'t>) -> Option<(ClockTime, &'t str)> {
    let period = Period::parse(caps.get(1)?.as_str())?;
    let hour = caps.get(2)?.as_str().parse::<u32>().ok()?;
    let time = ClockTime::from_hm(period.o_clock_to_24h(hour), 0)?;
    Some((time, caps.get(3)?.as_str()))
}

fn extract_12h<'t>(caps: &Captures<'t>) -> Option<(ClockTime, &'t str)> {
    let hour = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let minute = caps.get(2)?.as_str().parse::<u32>().ok()?;
    let period = Period::parse(caps.get(3)?.as_str())?;
    let time = ClockTime::from_hm(period.clock_hour_to_24h(hour), minute)?;
    Some((time, caps.get(4)?.as_str()))
}

fn clean_action(action: &str) -> Option<String> {
    let action = action
        .trim_start_matches(|c: char| c.is_whitespace() || ACTION_SEPARATORS.contains(&c))
        .trim();
    if action.is_empty() {
        None
    } else {
        Some(action.to_string())
    }
}

/// `路线：地铁 - 乘坐地铁1号线` → route; `None` when the description is empty
fn parse_route(line: &str) -> Option<Route> {
    let caps = ROUTE_LINE.as_ref()?.captures(line)?;
    let route_type: RouteType = caps.get(1)?.as_str().parse().ok()?;
    let description = caps
        .get(2)?
        .as_str()
        .trim_start_matches(|c: char| c.is_whitespace() || ACTION_SEPARATORS.contains(&c))
        .trim();
    if description.is_empty() {
        return None;
    }
    Some(Route {
        route_type,
        description: description.to_string(),
    })
}

fn attach_orphan_route(entries: &mut [Entry], route: Route) {
    match entries.iter_mut().rev().find(|entry| entry.route.is_none()) {
        Some(entry) => {
            debug!("Attaching orphan route to {}", entry.time);
            entry.route = Some(route);
        }
        None => debug!("Discarding route line with nothing to attach to"),
    }
}

/// Second pass over bulleted/numbered lines that embed a time somewhere
fn scan_list_items(lines: &[&str]) -> Vec<Entry> {
    lines
        .iter()
        .filter_map(|line| {
            let body = first_capture(&LIST_ITEM, line)?;
            let (time, whole) = EMBEDDED_TIME
                .as_ref()?
                .captures_iter(body)
                .find_map(|caps| Some((embedded_time(&caps)?, caps.get(0)?)))?;

            let stripped = format!("{} {}", &body[..whole.start()], &body[whole.end()..])
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            let action = clean_action(&stripped).unwrap_or_else(|| body.trim().to_string());

            Some(Entry {
                time,
                action,
                route: None,
            })
        })
        .collect()
}

/// First valid reading of an `HH:MM` or `H点` match
fn embedded_time(caps: &Captures<'_>) -> Option<ClockTime> {
    match (caps.get(1), caps.get(2), caps.get(3)) {
        (Some(hour), Some(minute), _) => {
            ClockTime::from_digits(hour.as_str(), Some(minute.as_str()))
        }
        (_, _, Some(hour)) => ClockTime::from_digits(hour.as_str(), None),
        _ => None,
    }
}

/// Drop repeated times (first wins), sort by time of day, assign ids
fn finalize(entries: Vec<Entry>) -> Vec<TimelineItem> {
    let mut seen = HashSet::new();
    let mut unique: Vec<Entry> = entries
        .into_iter()
        .filter(|entry| {
            let first = seen.insert(entry.time);
            if !first {
                debug!("Dropping duplicate timeline entry at {}", entry.time);
            }
            first
        })
        .collect();

    unique.sort_by_key(|entry| entry.time.sort_key());

    unique
        .into_iter()
        .enumerate()
        .map(|(index, entry)| TimelineItem {
            id: format!("timeline-{}", index + 1),
            time: entry.time.as_hhmm(),
            action: entry.action,
            route: entry.route,
        })
        .collect()
}
