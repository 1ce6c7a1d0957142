//! Version ordering for Maven release strings.
//!
//! Ordering is syntactic, not semver-aware: versions are split on `.` and
//! `-` into segments and compared positionally. Numeric segments compare
//! numerically, non-numeric segments lexicographically, and a numeric
//! segment always sorts before a non-numeric one at the same position. A
//! missing trailing segment is padded as `0` against a numeric segment and
//! as the empty string against a non-numeric one, so `1.0 < 1.0.0-beta`
//! while `1.0 == 1.0.0`.

use std::cmp::Ordering;

#[derive(Debug)]
enum Segment<'a> {
    Num(u64),
    Text(&'a str),
}

fn split(version: &str) -> Vec<Segment<'_>> {
    version
        .split(['.', '-'])
        .map(|part| match part.parse::<u64>() {
            Ok(n) => Segment::Num(n),
            Err(_) => Segment::Text(part),
        })
        .collect()
}

fn compare_at(a: Option<&Segment<'_>>, b: Option<&Segment<'_>>) -> Ordering {
    match (a, b) {
        (Some(Segment::Num(x)), Some(Segment::Num(y))) => x.cmp(y),
        (Some(Segment::Text(x)), Some(Segment::Text(y))) => x.cmp(y),
        (Some(Segment::Num(_)), Some(Segment::Text(_))) => Ordering::Less,
        (Some(Segment::Text(_)), Some(Segment::Num(_))) => Ordering::Greater,
        (None, Some(Segment::Num(y))) => 0u64.cmp(y),
        (Some(Segment::Num(x)), None) => x.cmp(&0u64),
        (None, Some(Segment::Text(y))) => "".cmp(*y),
        (Some(Segment::Text(x)), None) => (*x).cmp(""),
        (None, None) => Ordering::Equal,
    }
}

/// Compare two version strings under the total order described above.
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = split(a);
    let right = split(b);

    for i in 0..left.len().max(right.len()) {
        let ord = compare_at(left.get(i), right.get(i));
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Sort a list of version strings ascending (oldest first).
pub fn sort_versions(versions: &mut [String]) {
    versions.sort_by(|a, b| compare_versions(a, b));
}
