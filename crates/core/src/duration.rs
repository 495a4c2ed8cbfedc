//! Lecture duration text, e.g. `"9min"`, and the aggregated section label.
//!
//! Durations are user-authored free text. Parsing is lenient: anything that
//! does not contain `<digits>min` counts as zero minutes. Only ASCII digits
//! count.

use std::num::IntErrorKind;
use std::sync::LazyLock;

use regex::Regex;

static MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)min").expect("minutes pattern is valid"));

/// Extracts the leading integer of the first `<N>min` occurrence.
///
/// Returns `0` when the text contains no such occurrence. Values that do not
/// fit in a `u32` saturate.
#[must_use]
pub fn parse_minutes(text: &str) -> u32 {
    let Some(digits) = MINUTES.captures(text).and_then(|caps| caps.get(1)) else {
        return 0;
    };
    match digits.as_str().parse::<u32>() {
        Ok(minutes) => minutes,
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => u32::MAX,
        Err(_) => 0,
    }
}

/// Renders a minute total as `"{H}hr {M}min"`, `"{H}hr"` or `"{M}min"`.
#[must_use]
pub fn format_minutes(total: u32) -> String {
    if total < 60 {
        return format!("{total}min");
    }
    let hours = total / 60;
    let minutes = total % 60;
    if minutes > 0 {
        format!("{hours}hr {minutes}min")
    } else {
        format!("{hours}hr")
    }
}

/// Sums the minutes of every duration string.
#[must_use]
pub fn total_minutes<'a>(durations: impl IntoIterator<Item = &'a str>) -> u32 {
    durations
        .into_iter()
        .map(parse_minutes)
        .fold(0, u32::saturating_add)
}
