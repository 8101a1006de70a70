//! Compiler versions and the requirements that the default standard rows declare over them
//!
//! Ranges are [`semver`] requirements. Compiler versions rarely carry the three
//! components semver wants, so [`CompilerVersion`] reads them leniently and pads
//! them when they're matched against a range.
use core::fmt;
use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;

/// A dotted numeric compiler version, like `9`, `5.13` or `11.2.0`.
///
/// Missing trailing components count as zero, so `9` and `9.0` are the same version.
#[derive(Debug, Clone, Eq)]
pub struct CompilerVersion {
    components: Vec<u64>,
}

fn numeric_prefix() -> &'static Regex {
    static NUMERIC_PREFIX: OnceLock<Regex> = OnceLock::new();
    NUMERIC_PREFIX.get_or_init(|| Regex::new(r"^\d+(\.\d+)*").expect("valid version regex"))
}

impl CompilerVersion {
    /// Reads the leading dotted numeric part of `raw` (`10.2-beta` reads as `10.2`).
    /// Returns [`None`] when `raw` does not start with a digit.
    pub fn parse(raw: &str) -> Option<Self> {
        let matched = numeric_prefix().find(raw.trim())?;
        let components = matched
            .as_str()
            .split('.')
            .map(str::parse::<u64>)
            .collect::<Result<Vec<_>, _>>()
            .ok()?;
        Some(Self { components })
    }

    fn component(&self, idx: usize) -> u64 {
        self.components.get(idx).copied().unwrap_or(0)
    }

    /// The `major.minor.patch` form, zero padded. A fourth component (`19.29.30133.0`)
    /// has no place in it and is dropped.
    pub fn to_semver(&self) -> semver::Version {
        semver::Version::new(self.component(0), self.component(1), self.component(2))
    }
}

impl PartialEq for CompilerVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for CompilerVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CompilerVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|idx| self.component(idx).cmp(&other.component(idx)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for CompilerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(u64::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// The set of versions a default standard row applies to
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum VersionReq {
    Any,
    Exact(CompilerVersion),
    /// Comparators made only of `>`, `>=`, `<` and `<=`
    Range(semver::VersionReq),
}

/// How narrow a [`VersionReq`] is. Higher wins when several rows match the same version.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Specificity {
    Any,
    OneSided,
    Bounded,
    Exact,
}

fn is_lower_bound(op: semver::Op) -> bool {
    matches!(op, semver::Op::Greater | semver::Op::GreaterEq)
}

fn is_upper_bound(op: semver::Op) -> bool {
    matches!(op, semver::Op::Less | semver::Op::LessEq)
}

impl VersionReq {
    /// Parses `""` (any), `9` or `==9` (exact), or comma separated comparators
    /// like `>=6, <11`.
    ///
    /// A comparator on a partial version bounds whole releases, the way semver reads
    /// it: `<=6` accepts `6.9`, while `>5` starts at `6`.
    ///
    /// ```rust
    /// use cppstd::version::{CompilerVersion, VersionReq};
    ///
    /// let req = VersionReq::parse(">=6, <11").unwrap();
    /// assert!(req.matches(&CompilerVersion::parse("9").unwrap()));
    /// assert!(!req.matches(&CompilerVersion::parse("11.1").unwrap()));
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return Some(VersionReq::Any);
        }
        if let Some(exact) = raw.strip_prefix("==") {
            return CompilerVersion::parse(exact).map(VersionReq::Exact);
        }
        if raw.starts_with(|c: char| c.is_ascii_digit()) {
            return CompilerVersion::parse(raw)
                .filter(|v| v.to_string() == raw)
                .map(VersionReq::Exact);
        }

        let req = semver::VersionReq::parse(raw).ok()?;
        let ranged = !req.comparators.is_empty()
            && req
                .comparators
                .iter()
                .all(|c| is_lower_bound(c.op) || is_upper_bound(c.op));
        ranged.then_some(VersionReq::Range(req))
    }

    pub fn matches(&self, version: &CompilerVersion) -> bool {
        match self {
            VersionReq::Any => true,
            VersionReq::Exact(expected) => version == expected,
            VersionReq::Range(req) => req.matches(&version.to_semver()),
        }
    }

    pub fn specificity(&self) -> Specificity {
        match self {
            VersionReq::Any => Specificity::Any,
            VersionReq::Exact(_) => Specificity::Exact,
            VersionReq::Range(req) => {
                let lower = req.comparators.iter().any(|c| is_lower_bound(c.op));
                let upper = req.comparators.iter().any(|c| is_upper_bound(c.op));
                if lower && upper {
                    Specificity::Bounded
                } else {
                    Specificity::OneSided
                }
            }
        }
    }
}
