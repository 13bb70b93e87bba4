//! Dotted version identifiers (e.g. "0.1.15")

use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Num(u64),
	Text(Box<str>),
}

impl Segment {
	fn parse(s: &str) -> Self {
		match s.parse::<u64>() {
			Ok(n) => Segment::Num(n),
			Err(_) => Segment::Text(s.into()),
		}
	}

	fn compare(&self, other: &Segment) -> Ordering {
		match (self, other) {
			(Segment::Num(a), Segment::Num(b)) => a.cmp(b),
			(Segment::Text(a), Segment::Text(b)) => a.cmp(b),
			(Segment::Num(a), Segment::Text(b)) => a.to_string().as_str().cmp(&**b),
			(Segment::Text(a), Segment::Num(b)) => (**a).cmp(b.to_string().as_str()),
		}
	}
}

/// Version identifier compared segment by segment.
///
/// Parsing never fails: numeric segments compare numerically, anything else
/// lexically, and a missing segment sorts before a present one
/// (`1.2 < 1.2.0`). The original text is kept for display.
#[derive(Debug, Clone, SerializeDisplay, DeserializeFromStr)]
pub struct Version {
	raw: Box<str>,
	segments: Vec<Segment>,
}

impl Version {
	pub fn new(raw: &str) -> Self {
		let trimmed = raw.trim();
		let segments = if trimmed.is_empty() {
			Vec::new()
		} else {
			trimmed.split('.').map(Segment::parse).collect()
		};
		Self { raw: raw.into(), segments }
	}

	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// Numeric segment at `idx`, if present and numeric
	pub fn numeric(&self, idx: usize) -> Option<u64> {
		match self.segments.get(idx)? {
			Segment::Num(n) => Some(*n),
			Segment::Text(_) => None,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}
}

impl FromStr for Version {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Version::new(s))
	}
}

impl fmt::Display for Version {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.raw)
	}
}

impl Ord for Version {
	fn cmp(&self, other: &Self) -> Ordering {
		for (a, b) in self.segments.iter().zip(other.segments.iter()) {
			let ord = a.compare(b);
			if ord != Ordering::Equal {
				return ord;
			}
		}
		self.segments.len().cmp(&other.segments.len())
	}
}

impl PartialOrd for Version {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for Version {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Version {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_numeric_ordering() {
		assert!(Version::new("0.1.9") < Version::new("0.1.10"));
		assert!(Version::new("1.0.0") > Version::new("0.99.99"));
		assert_eq!(Version::new("0.1.15"), Version::new("0.1.15"));
	}

	#[test]
	fn test_missing_segment_sorts_first() {
		assert!(Version::new("1.2") < Version::new("1.2.0"));
	}

	#[test]
	fn test_text_segments() {
		assert!(Version::new("1.0.beta") < Version::new("1.0.rc"));
		assert_eq!(Version::new("1.0.beta").numeric(1), Some(0));
		assert_eq!(Version::new("1.0.beta").numeric(2), None);
	}

	#[test]
	fn test_parse_never_fails() {
		let empty: Version = "".parse().unwrap();
		assert!(empty.is_empty());
		assert!(empty < Version::new("0"));

		let odd: Version = "not a version".parse().unwrap();
		assert_eq!(odd.to_string(), "not a version");
	}

	#[test]
	fn test_serde_as_string() {
		let v = Version::new("0.2.4");
		assert_eq!(serde_json::to_string(&v).unwrap(), r#""0.2.4""#);
		let back: Version = serde_json::from_str(r#""0.2.4""#).unwrap();
		assert_eq!(back, v);
	}
}

// vim: ts=4
