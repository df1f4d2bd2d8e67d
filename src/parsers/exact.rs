use super::Parser;
use crate::routes::{Route, RouteMatch};
use crate::Result;

use std::sync::Arc;

/// Matches routes whose pattern equals the uri.
///
/// Only routes without any `{`, `*` or `:` in their pattern are considered.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactParser;

impl ExactParser {
	pub fn new() -> Self {
		Self
	}
}

impl Parser for ExactParser {
	fn parse(&self, uri: &str, routes: &[Arc<Route>]) -> Result<Option<RouteMatch>> {
		let route = routes
			.iter()
			.filter(|route| self.supports(route))
			.find(|route| route.pattern() == uri);

		Ok(route.map(|route| {
			RouteMatch::new(route.clone(), route.parameters().clone())
		}))
	}

	fn supports(&self, route: &Route) -> bool {
		!route.pattern().contains(['{', '*', ':'])
	}
}
