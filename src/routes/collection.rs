use super::Route;
use crate::{Error, Result};

use std::collections::HashMap;
use std::slice;
use std::sync::Arc;

/// The registry of all routes.
///
/// Routes are keyed by their pattern and, if they have one, by their name.
/// Adding a route with an existing pattern replaces the old route but keeps
/// its position, the same goes for names.
///
/// There is no internal locking. Build the collection completely before
/// sharing it, if you need to register routes while matching wrap it in a
/// lock yourself.
#[derive(Debug, Clone, Default)]
pub struct Collection {
	routes: Vec<Arc<Route>>,
	by_pattern: HashMap<String, usize>,
	by_name: HashMap<String, Arc<Route>>,
}

impl Collection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(&mut self, route: Route) -> &mut Self {
		let route = Arc::new(route);

		if let Some(name) = route.get_name() {
			self.by_name.insert(name.to_string(), route.clone());
		}

		match self.by_pattern.get(route.pattern()) {
			Some(&idx) => {
				tracing::debug!("replacing route {:?}", route.pattern());
				self.routes[idx] = route;
			}
			None => {
				self.by_pattern
					.insert(route.pattern().to_string(), self.routes.len());
				self.routes.push(route);
			}
		}

		self
	}

	pub fn get(&self, pattern: impl AsRef<str>) -> Option<&Route> {
		self.by_pattern
			.get(pattern.as_ref())
			.map(|&idx| &*self.routes[idx])
	}

	pub fn has(&self, pattern: impl AsRef<str>) -> bool {
		self.by_pattern.contains_key(pattern.as_ref())
	}

	/// Returns all routes in the order they were first added.
	pub fn all(&self) -> &[Arc<Route>] {
		&self.routes
	}

	pub fn iter(&self) -> slice::Iter<'_, Arc<Route>> {
		self.routes.iter()
	}

	/// ## Errors
	/// Returns `Error::NamedRouteNotFound` if no route has that name.
	pub fn get_by_name(&self, name: impl AsRef<str>) -> Result<&Route> {
		let name = name.as_ref();
		self.by_name
			.get(name)
			.map(|route| &**route)
			.ok_or_else(|| Error::NamedRouteNotFound(name.to_string()))
	}

	pub fn has_by_name(&self, name: impl AsRef<str>) -> bool {
		self.by_name.contains_key(name.as_ref())
	}

	pub fn len(&self) -> usize {
		self.routes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

impl<'a> IntoIterator for &'a Collection {
	type Item = &'a Arc<Route>;
	type IntoIter = slice::Iter<'a, Arc<Route>>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl FromIterator<Route> for Collection {
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = Route>,
	{
		let mut collection = Self::new();
		for route in iter {
			collection.add(route);
		}
		collection
	}
}
