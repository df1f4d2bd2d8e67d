use super::Parser;
use crate::routes::{Pattern, Route, RouteMatch};
use crate::Result;

use std::sync::Arc;

/// Matches routes containing placeholders.
///
/// - `{name}` matches one path segment
/// - `{name:regex}` matches `regex`
/// - `{name?}` optionally matches a slash followed by one segment
///
/// Extracted values overwrite the defaults of the route.
///
/// Patterns are compiled on every attempt, a route whose pattern does not
/// compile never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternParser;

impl PatternParser {
	pub fn new() -> Self {
		Self
	}
}

impl Parser for PatternParser {
	fn parse(&self, uri: &str, routes: &[Arc<Route>]) -> Result<Option<RouteMatch>> {
		for route in routes.iter().filter(|route| self.supports(route)) {
			let regex = match Pattern::parse(route.pattern()).compile() {
				Ok(regex) => regex,
				Err(e) => {
					tracing::warn!(
						"skipping route {:?}, pattern does not compile: {e}",
						route.pattern()
					);
					continue;
				}
			};

			let Some(extracted) = Pattern::captures(&regex, uri) else {
				continue;
			};

			tracing::trace!("{uri:?} matches {:?}", route.pattern());

			let params = route.parameters().merge(&extracted);
			return Ok(Some(RouteMatch::new(route.clone(), params)));
		}

		Ok(None)
	}

	fn supports(&self, route: &Route) -> bool {
		route.pattern().contains('{')
	}
}
