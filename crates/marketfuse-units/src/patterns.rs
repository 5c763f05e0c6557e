//! Listing text patterns.

use std::sync::LazyLock;

use regex::Regex;

/// `"3 Family"`, `"two-family"`, `"4 Unit"`. A trailing `room` is captured so
/// `"2 family rooms"` can be rejected.
static STYLE_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2}|two|three|four|five|six)[\s-]*(?:family|fam|units?|plex)\b(?P<room>\s*rooms?\b)?",
    )
    .unwrap()
});

/// Named small multi-family buildings.
static PLEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(duplex|triplex|tri-plex|fourplex|four-plex|quadplex|quadruplex)\b")
        .unwrap()
});

/// Explicit counts in free text: `"4 units"`, `"three apartments"`, `"2-family"`.
static DESCRIPTION_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2}|two|three|four|five|six|seven|eight)[\s-]*(?:units?|apartments|apts|family|doors)\b(?P<room>\s*rooms?\b)?",
    )
    .unwrap()
});

/// Generic multi-family classification without a count.
static MULTI_FAMILY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(multi[\s-]?family|multi[\s-]?unit|residential income|income property|mfr)\b")
        .unwrap()
});

/// Property types that are a single dwelling.
static SINGLE_UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(single[\s-]?family|one[\s-]?family|1[\s-]?family|sfr|sfh|condo(?:minium)?|town\s?(?:house|home)|co-?op|detached|mobile home|manufactured)\b",
    )
    .unwrap()
});

/// A multi-unit count and the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CountMatch {
    pub units: u32,
    pub matched: String,
}

/// Count from a structured style field. Counts below two are not multi-unit
/// and are left to the single-unit check.
pub(crate) fn style_count(style: &str) -> Option<CountMatch> {
    first_count(&STYLE_COUNT_RE, style).or_else(|| plex_count(style))
}

/// Count stated in a free-text description.
pub(crate) fn description_count(description: &str) -> Option<CountMatch> {
    first_count(&DESCRIPTION_COUNT_RE, description).or_else(|| plex_count(description))
}

/// The matched generic multi-family phrase, if any.
pub(crate) fn multi_family(text: &str) -> Option<&str> {
    MULTI_FAMILY_RE.find(text).map(|m| m.as_str())
}

/// The matched single-dwelling type, if any.
pub(crate) fn single_unit(text: &str) -> Option<&str> {
    SINGLE_UNIT_RE.find(text).map(|m| m.as_str())
}

fn first_count(re: &Regex, text: &str) -> Option<CountMatch> {
    re.captures_iter(text).find_map(|caps| {
        if caps.name("room").is_some() {
            return None;
        }
        let units = parse_count(caps.get(1)?.as_str())?;
        let matched = caps.get(0)?.as_str().to_string();
        (units >= 2).then_some(CountMatch { units, matched })
    })
}

fn plex_count(text: &str) -> Option<CountMatch> {
    let m = PLEX_RE.find(text)?;
    let units = match m.as_str().to_ascii_lowercase().as_str() {
        "duplex" => 2,
        "triplex" | "tri-plex" => 3,
        _ => 4,
    };
    Some(CountMatch {
        units,
        matched: m.as_str().to_string(),
    })
}

fn parse_count(token: &str) -> Option<u32> {
    match token.to_ascii_lowercase().as_str() {
        "one" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        "six" => Some(6),
        "seven" => Some(7),
        "eight" => Some(8),
        digits => digits.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_counts() {
        assert_eq!(style_count("3 Family").map(|m| m.units), Some(3));
        assert_eq!(style_count("Two-Family").map(|m| m.units), Some(2));
        assert_eq!(style_count("Duplex").map(|m| m.units), Some(2));
        assert_eq!(style_count("Fourplex").map(|m| m.units), Some(4));
        assert_eq!(style_count("1 Family"), None);
        assert_eq!(style_count("Single Family"), None);
    }

    #[test]
    fn description_counts_skip_bedroom_phrases() {
        let m = description_count("Well kept building, 4 units all rented").unwrap();
        assert_eq!(m.units, 4);
        assert_eq!(m.matched, "4 units");
        assert!(description_count("each unit has 2 bedrooms").is_none());
        assert!(description_count("Triplex near campus").is_some());
    }

    #[test]
    fn family_rooms_are_not_unit_counts() {
        assert!(description_count("Open plan with 3 family rooms").is_none());
        assert!(description_count("2 Family Room fireplaces").is_none());
        assert!(style_count("2 family rooms").is_none());
        let m = description_count("two family rooms upstairs, sold as a 3-family").unwrap();
        assert_eq!(m.units, 3);
        assert_eq!(m.matched, "3-family");
    }

    #[test]
    fn bare_quad_is_not_a_plex() {
        assert!(description_count("Steps from the quad and library").is_none());
        assert!(style_count("Quad").is_none());
        assert_eq!(description_count("Brick quadplex").map(|m| m.units), Some(4));
        assert_eq!(style_count("Quadruplex").map(|m| m.units), Some(4));
    }

    #[test]
    fn classifications() {
        assert_eq!(multi_family("Multi-Family"), Some("Multi-Family"));
        assert_eq!(multi_family("Residential Income"), Some("Residential Income"));
        assert!(single_unit("Single Family Residence").is_some());
        assert!(single_unit("Townhouse").is_some());
        assert!(single_unit("Condominium").is_some());
        assert!(single_unit("Farm").is_none());
    }
}
