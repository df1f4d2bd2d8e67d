use super::{Handler, Route};
use crate::Params;

use std::sync::Arc;

/// The outcome of a successful match.
///
/// Carries the matched route together with the parameters of the match,
/// which are the defaults of the route merged with the values extracted from
/// the uri.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
	route: Arc<Route>,
	parameters: Params,
	module: Option<String>,
}

impl RouteMatch {
	pub fn new(route: Arc<Route>, parameters: Params) -> Self {
		Self {
			route,
			parameters,
			module: None,
		}
	}

	/// Tags the match with a module, the router does not interpret it.
	pub fn with_module(mut self, module: impl Into<String>) -> Self {
		self.module = Some(module.into());
		self
	}

	pub fn route(&self) -> &Route {
		&self.route
	}

	pub fn handler(&self) -> &Handler {
		self.route.handler()
	}

	pub fn name(&self) -> Option<&str> {
		self.route.get_name()
	}

	pub fn parameters(&self) -> &Params {
		&self.parameters
	}

	pub fn param(&self, key: impl AsRef<str>) -> Option<&str> {
		self.parameters.get(key)
	}

	pub fn module(&self) -> Option<&str> {
		self.module.as_deref()
	}

	pub fn into_parameters(self) -> Params {
		self.parameters
	}
}
