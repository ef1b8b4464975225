//! Loose semantic-version primitives.
//!
//! Resolvers hand this workspace whatever the ecosystem wrote down: clean
//! versions, caret ranges, `v`-prefixes, git URLs, `file:` links. [`coerce`]
//! extracts a version where one plausibly exists and returns `None`
//! otherwise; callers must treat `None` as "skip, do not check", never as a
//! failure.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Best-effort extraction of a `major.minor.patch` from a loosely formatted
/// string. Missing components default to zero (`"10.*"` coerces to `10.0.0`,
/// `"^1.2"` to `1.2.0`). Strings with no leading version-like digits
/// (`"file:../local"`, `"latest"`) coerce to `None`.
pub fn coerce(input: &str) -> Option<Version> {
    let start = input.find(|c: char| c.is_ascii_digit())?;
    let (major_digits, rest) = split_leading_digits(&input[start..]);
    let major: u64 = major_digits.parse().ok()?;
    let (minor, rest) = coerce_component(rest);
    let (patch, _) = coerce_component(rest);
    Some(Version::new(major, minor, patch))
}

fn coerce_component(input: &str) -> (u64, &str) {
    let Some(rest) = input.strip_prefix('.') else {
        return (0, input);
    };
    let (digits, tail) = split_leading_digits(rest);
    match digits.parse() {
        Ok(n) => (n, tail),
        Err(_) => (0, input),
    }
}

fn split_leading_digits(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input.split_at(end)
}

/// Non-negative count of major versions `resolved` is behind `latest`;
/// zero when `resolved >= latest`.
pub fn major_diff(resolved: Version, latest: Version) -> u64 {
    if resolved >= latest {
        0
    } else {
        latest.major.saturating_sub(resolved.major)
    }
}

/// Standard semantic-range satisfaction over `||` alternatives of
/// whitespace-separated comparators (`^`, `~`, `>=`, `>`, `<=`, `<`, `=`,
/// bare versions, `x`/`*` wildcards). Malformed comparators fail the
/// containing alternative rather than the whole call.
pub fn satisfies_range(version: Version, range: &str) -> bool {
    range
        .split("||")
        .any(|alternative| satisfies_alternative(version, alternative))
}

fn satisfies_alternative(version: Version, clause: &str) -> bool {
    let mut tokens = clause.split_whitespace();
    while let Some(token) = tokens.next() {
        // An operator separated from its operand by whitespace (`>= 14.*`).
        let joined;
        let comparator = if matches!(token, ">" | ">=" | "<" | "<=" | "=" | "^" | "~") {
            match tokens.next() {
                Some(operand) => {
                    joined = format!("{token}{operand}");
                    joined.as_str()
                }
                None => return false,
            }
        } else {
            token
        };
        if !satisfies_comparator(version, comparator) {
            return false;
        }
    }
    // An empty alternative (`*`-like) matches everything.
    true
}

fn satisfies_comparator(version: Version, comparator: &str) -> bool {
    if let Some(rest) = comparator.strip_prefix(">=") {
        return parse_partial(rest).is_some_and(|p| version >= p.lower());
    }
    if let Some(rest) = comparator.strip_prefix('>') {
        return parse_partial(rest).is_some_and(|p| match p.block_upper() {
            // `>10.*` admits nothing inside the 10.x block.
            Some(upper) => version >= upper,
            None => version > p.lower(),
        });
    }
    if let Some(rest) = comparator.strip_prefix("<=") {
        return parse_partial(rest).is_some_and(|p| match p.block_upper() {
            Some(upper) => version < upper,
            None => version <= p.lower(),
        });
    }
    if let Some(rest) = comparator.strip_prefix('<') {
        return parse_partial(rest).is_some_and(|p| version < p.lower());
    }
    if let Some(rest) = comparator.strip_prefix('^') {
        return parse_partial(rest).is_some_and(|p| {
            let lower = p.lower();
            let upper = if lower.major > 0 || p.minor.is_none() {
                Version::new(lower.major + 1, 0, 0)
            } else if lower.minor > 0 || p.patch.is_none() {
                Version::new(0, lower.minor + 1, 0)
            } else {
                Version::new(0, 0, lower.patch + 1)
            };
            version >= lower && version < upper
        });
    }
    if let Some(rest) = comparator.strip_prefix('~') {
        return parse_partial(rest).is_some_and(|p| {
            let lower = p.lower();
            let upper = if p.minor.is_some() {
                Version::new(lower.major, lower.minor + 1, 0)
            } else {
                Version::new(lower.major + 1, 0, 0)
            };
            version >= lower && version < upper
        });
    }
    let bare = comparator.strip_prefix('=').unwrap_or(comparator);
    parse_partial(bare).is_some_and(|p| match p.block_upper() {
        Some(upper) => version >= p.lower() && version < upper,
        None if p.is_any() => true,
        None => version == p.lower(),
    })
}

/// A version with trailing components possibly unspecified (`14`, `14.1`,
/// `14.*`). Unspecified components widen comparisons to the whole block.
struct Partial {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
}

impl Partial {
    fn lower(&self) -> Version {
        Version::new(
            self.major.unwrap_or(0),
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0),
        )
    }

    /// Exclusive upper bound of the wildcard block, `None` when the partial
    /// is fully specified or unbounded (`*`).
    fn block_upper(&self) -> Option<Version> {
        match (self.major, self.minor, self.patch) {
            (None, _, _) => None,
            (Some(major), None, _) => Some(Version::new(major + 1, 0, 0)),
            (Some(major), Some(minor), None) => Some(Version::new(major, minor + 1, 0)),
            (Some(_), Some(_), Some(_)) => None,
        }
    }

    fn is_any(&self) -> bool {
        self.major.is_none()
    }
}

fn parse_partial(input: &str) -> Option<Partial> {
    let trimmed = input.trim().trim_start_matches('v');
    if trimmed.is_empty() {
        return None;
    }
    let mut components = [None, None, None];
    for (i, part) in trimmed.splitn(3, '.').enumerate() {
        if matches!(part, "*" | "x" | "X") {
            break;
        }
        // Tolerate pre-release/build suffixes on the last component.
        let digits = part
            .split(|c: char| !c.is_ascii_digit())
            .next()
            .unwrap_or("");
        components[i] = Some(digits.parse().ok()?);
    }
    if components[0].is_none() && !matches!(trimmed, "*" | "x" | "X") {
        return None;
    }
    Some(Partial {
        major: components[0],
        minor: components[1],
        patch: components[2],
    })
}
