//! Anchored recognition of the semantic version grammar.
//!
//! This is a hand-rolled recognizer over the input bytes rather than a
//! compiled pattern: the grammar is fixed and regular, and walking bytes
//! directly keeps parsing single-pass with no pathological inputs.
//!
//! The grammar, anchored at both ends (no partial matches, no whitespace
//! tolerance):
//!
//! ```text
//! version     := "v"? numeric "." numeric "." numeric prerelease? buildmeta?
//! numeric     := "0" | [1-9] digit*
//! prerelease  := "-" ident ("." ident)*
//! buildmeta   := "+" ident ("." ident)*
//! ident       := [0-9A-Za-z-]+
//! ```
//!
//! with one extra rule: a prerelease `ident` that is *purely* numeric must
//! not have a leading zero (`0` alone is fine). Build identifiers are exempt.

/// The five components of a matched version string. The numeric components
/// are already converted; the metadata components borrow from the input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Captures<'vs> {
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    pub(crate) prerelease: &'vs str,
    pub(crate) build: &'vs str,
}

/// Returns whether `text` is a syntactically valid semantic version.
pub(crate) fn matches(text: &str) -> bool {
    extract(text).is_some()
}

/// Matches `text` against the grammar, returning its components on success
/// and `None` on any mismatch. A numeric component wider than `u64` is a
/// mismatch, not a wrap.
pub(crate) fn extract(text: &str) -> Option<Captures<'_>> {
    let rest = text.strip_prefix('v').unwrap_or(text);

    let bytes = rest.as_bytes();
    let (major, bytes) = numeric(bytes)?;
    let bytes = eat(bytes, b'.')?;
    let (minor, bytes) = numeric(bytes)?;
    let bytes = eat(bytes, b'.')?;
    let (patch, bytes) = numeric(bytes)?;

    let mut prerelease = "";
    let mut build = "";
    let mut bytes = bytes;

    if let [b'-', tail @ ..] = bytes {
        let len = identifiers(tail, IdentRule::Prerelease)?;
        // everything consumed so far is ASCII, so slicing `rest` by byte
        // offsets stays on char boundaries
        let start = rest.len() - tail.len();
        prerelease = &rest[start..start + len];
        bytes = &tail[len..];
    }

    if let [b'+', tail @ ..] = bytes {
        let len = identifiers(tail, IdentRule::Build)?;
        let start = rest.len() - tail.len();
        build = &rest[start..start + len];
        bytes = &tail[len..];
    }

    if !bytes.is_empty() {
        return None;
    }

    Some(Captures {
        major,
        minor,
        patch,
        prerelease,
        build,
    })
}

/// Consumes `expected` from the front of `bytes`, or fails the match.
fn eat(bytes: &[u8], expected: u8) -> Option<&[u8]> {
    match bytes {
        [first, tail @ ..] if *first == expected => Some(tail),
        _ => None,
    }
}

/// Consumes a numeric component: one or more ASCII digits, no leading zero
/// unless the component is exactly `0`, value within `u64`.
fn numeric(bytes: &[u8]) -> Option<(u64, &[u8])> {
    let end = bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len());
    if end == 0 {
        return None;
    }
    if bytes[0] == b'0' && end > 1 {
        return None;
    }

    let mut value: u64 = 0;
    for digit in &bytes[..end] {
        value = value
            .checked_mul(10)?
            .checked_add(u64::from(digit - b'0'))?;
    }

    Some((value, &bytes[end..]))
}

#[derive(Clone, Copy)]
enum IdentRule {
    /// Purely-numeric identifiers must not have a leading zero.
    Prerelease,
    /// Anything goes, leading zeros included.
    Build,
}

/// Consumes `ident ("." ident)*` from the front of `bytes`, returning the
/// number of bytes consumed. Every identifier must be non-empty (so `..` and
/// trailing `.` fail), and prerelease identifiers are checked against the
/// numeric leading-zero rule.
fn identifiers(bytes: &[u8], rule: IdentRule) -> Option<usize> {
    let mut idx = 0;
    loop {
        let start = idx;
        while idx < bytes.len() && is_ident_byte(bytes[idx]) {
            idx += 1;
        }
        if idx == start {
            return None;
        }

        if let IdentRule::Prerelease = rule {
            let ident = &bytes[start..idx];
            if ident.len() > 1 && ident[0] == b'0' && ident.iter().all(u8::is_ascii_digit) {
                return None;
            }
        }

        if idx < bytes.len() && bytes[idx] == b'.' {
            idx += 1;
            continue;
        }
        return Some(idx);
    }
}

fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_ok() {
        let inputs = [
            "0.0.0",
            "1.2.3",
            "v1.2.3",
            "10.20.30",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-0.3.7",
            "1.0.0-x.7.z.92",
            "1.0.0-x-y-z.--",
            "1.0.0-alpha+001",
            "1.0.0+20130313144700",
            "1.0.0-beta+exp.sha.5114f85",
            "1.0.0+21AF26D3---117B344092BD",
            "1.2.3-0123abc", // not purely numeric, so the leading zero is fine
            "1.2.3+0123",    // build identifiers may have leading zeros
            "18446744073709551615.0.0", // u64::MAX
        ];

        for input in inputs {
            assert!(matches(input), "{input:?} should match");
        }
    }

    #[test]
    fn test_matches_err() {
        let inputs = [
            "",
            "v",
            "1",
            "1.2",
            "1.2.3.4",
            "01.2.3",
            "1.02.3",
            "1.2.03",
            "00.1.1",
            "1.2.3-0123",
            "1.2.3-alpha..1",
            "1.2.3-alpha.",
            "1.2.3-",
            "1.2.3+",
            "1.2.3+build..1",
            "1.2.3-rc.1+",
            "V1.2.3",
            "vv1.2.3",
            " 1.2.3",
            "1.2.3 ",
            "1.2 .3",
            "1.2.3-rc.1 ",
            "-1.2.3",
            "1.2.3-rc.1+build.α",
            "1.2.3-ünïcödé",
            "moby dick",
            "18446744073709551616.0.0", // u64::MAX + 1
            "1.2.3-rc.1+build\u{0}123",
        ];

        for input in inputs {
            assert!(!matches(input), "{input:?} should not match");
        }
    }

    #[test]
    fn test_extract_components() {
        let args = [
            ("1.2.4", (1, 2, 4, "", "")),
            ("v2.3.7-rc.1", (2, 3, 7, "rc.1", "")),
            ("4.16.3-rc.1+build.123", (4, 16, 3, "rc.1", "build.123")),
            ("0.0.0+only-build", (0, 0, 0, "", "only-build")),
            ("1.0.0-0", (1, 0, 0, "0", "")),
        ];

        for (input, (major, minor, patch, prerelease, build)) in args {
            let expected = Captures {
                major,
                minor,
                patch,
                prerelease,
                build,
            };
            assert_eq!(Some(expected), extract(input), "for input {input:?}");
        }
    }

    #[test]
    fn test_extract_mismatch_is_none() {
        assert_eq!(None, extract("not a version"));
    }

    #[test]
    fn test_long_input_does_not_blow_up() {
        // a single huge digit run overflows u64 and fails cleanly
        let huge_numeric = "9".repeat(1_000_000);
        assert!(!matches(&huge_numeric));

        // a huge but otherwise well-formed prerelease is fine
        let huge_prerelease = format!("1.2.3-{}", "a".repeat(1_000_000));
        assert!(matches(&huge_prerelease));
    }
}
