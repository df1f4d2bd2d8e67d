use crate::error::GenerateError;
use crate::Params;

use byte_parser::{ParseIterator, StrParser};
use regex::Regex;

/// Matches one path segment.
pub const DEFAULT_CONSTRAINT: &str = "[^/]+";

/// A part of a route pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
	Literal(&'a str),
	Placeholder(Placeholder<'a>),
}

/// `{name}`, `{name?}` or `{name:regex}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
	pub name: &'a str,
	pub constraint: Option<&'a str>,
	pub optional: bool,
}

impl<'a> Placeholder<'a> {
	fn parse(inner: &'a str) -> Self {
		let (name, constraint) = match inner.split_once(':') {
			Some((name, constraint)) => (name, Some(constraint)),
			None => (inner, None),
		};

		match name.strip_suffix('?') {
			Some(name) => Self {
				name,
				constraint,
				optional: true,
			},
			None => Self {
				name,
				constraint,
				optional: false,
			},
		}
	}

	pub fn constraint(&self) -> &'a str {
		self.constraint.unwrap_or(DEFAULT_CONSTRAINT)
	}
}

/// A route pattern split into literals and placeholders.
///
/// A brace which is never closed, or which encloses nothing, is kept as
/// literal text. Braces inside a constraint must be balanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern<'a> {
	raw: &'a str,
	segments: Vec<Segment<'a>>,
}

impl<'a> Pattern<'a> {
	pub fn parse(raw: &'a str) -> Self {
		let mut parser = StrParser::new(raw);
		let mut segments = vec![];

		'template_loop: loop {
			let literal = {
				let mut parser = parser.record();
				parser.consume_while_byte_fn(|&b| b != b'{');
				parser.to_str()
			};
			if !literal.is_empty() {
				segments.push(Segment::Literal(literal));
			}

			// either we're at the end or we found a {
			if parser.next().is_none() {
				return Self { raw, segments };
			}

			let mut parser = parser.record();
			let mut depth = 0usize;

			loop {
				parser.consume_while_byte_fn(|&b| b != b'}' && b != b'{');
				match parser.peek() {
					Some(b'{') => {
						depth += 1;
						parser.next();
					}
					Some(b'}') if depth > 0 => {
						depth -= 1;
						parser.next();
					}
					Some(b'}') => {
						let inner = parser.to_str();
						parser.next();

						if inner.is_empty() {
							segments.push(Segment::Literal("{}"));
						} else {
							segments.push(Segment::Placeholder(
								Placeholder::parse(inner),
							));
						}

						continue 'template_loop;
					}
					Some(b) => unreachable!("reached byte {b}"),
					None => {
						// unclosed, the rest including the { is literal
						let rest = parser.to_str();
						let start = raw.len() - rest.len() - 1;
						segments.push(Segment::Literal(&raw[start..]));

						return Self { raw, segments };
					}
				}
			}
		}
	}

	pub fn as_str(&self) -> &'a str {
		self.raw
	}

	pub fn segments(&self) -> &[Segment<'a>] {
		&self.segments
	}

	pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder<'a>> {
		self.segments.iter().filter_map(|s| match s {
			Segment::Placeholder(p) => Some(p),
			Segment::Literal(_) => None,
		})
	}

	/// Builds the anchored expression matching this pattern.
	///
	/// An optional placeholder becomes a group which also contains the slash
	/// in front of it, so `/blog/{year?}` matches `/blog` and `/blog/2024`.
	pub fn to_regex_string(&self) -> String {
		let mut expr = String::from("^");

		for segment in &self.segments {
			match segment {
				Segment::Literal(lit) => expr.push_str(&regex::escape(lit)),
				Segment::Placeholder(p) if p.optional => {
					if expr.ends_with('/') {
						expr.pop();
					}
					expr.push_str(&format!(
						"(?:/(?P<{}>{}))?",
						p.name,
						p.constraint()
					));
				}
				Segment::Placeholder(p) => {
					expr.push_str(&format!("(?P<{}>{})", p.name, p.constraint()));
				}
			}
		}

		expr.push('$');
		expr
	}

	pub fn compile(&self) -> Result<Regex, regex::Error> {
		Regex::new(&self.to_regex_string())
	}

	/// Returns the named captures with a non empty value.
	pub fn captures(regex: &Regex, uri: &str) -> Option<Params> {
		let caps = regex.captures(uri)?;

		let params = regex
			.capture_names()
			.flatten()
			.filter_map(|name| caps.name(name).map(|m| (name, m.as_str())))
			.filter(|(_, value)| !value.is_empty())
			.collect();

		Some(params)
	}

	/// Replaces every placeholder with its value.
	///
	/// Required placeholders need a value. An optional placeholder becomes
	/// `/value` if a value exists or disappears together with the slash in
	/// front of it.
	pub fn reconstruct(&self, params: &Params) -> Result<String, GenerateError> {
		let mut path = String::with_capacity(self.raw.len());

		for segment in &self.segments {
			match segment {
				Segment::Literal(lit) => path.push_str(lit),
				Segment::Placeholder(p) if p.optional => {
					if path.ends_with('/') {
						path.pop();
					}
					if let Some(value) = params.get(p.name) {
						path.push('/');
						path.push_str(value);
					}
				}
				Segment::Placeholder(p) => {
					let value = params.get(p.name).ok_or_else(|| {
						GenerateError::MissingParameter {
							name: p.name.to_string(),
							pattern: self.raw.to_string(),
						}
					})?;
					path.push_str(value);
				}
			}
		}

		Ok(path)
	}
}
