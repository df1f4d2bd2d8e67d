//! The strategies a [`Router`](crate::Router) uses to match a uri.
//!
//! Parsers are asked in the order they were added to the router, the first
//! one returning a match wins. So to prefer literal routes over
//! parameterized ones add the [`ExactParser`] before the [`PatternParser`].

use crate::routes::{Route, RouteMatch};
use crate::Result;

use std::sync::Arc;

mod exact;
pub use exact::ExactParser;

mod pattern;
pub use pattern::PatternParser;

#[cfg(feature = "fs")]
#[cfg_attr(docsrs, doc(cfg(feature = "fs")))]
mod fs;
#[cfg(feature = "fs")]
pub use fs::FsParser;

/// A matching strategy.
///
/// Implement this trait and add an instance to the router to extend the
/// matching, the router itself does not need to know about it.
pub trait Parser: Send + Sync {
	/// Tries to match the uri, `routes` are in registration order.
	///
	/// ## Errors
	/// Stops the whole chain, so only for failures which make matching
	/// impossible. Not finding a match is `Ok(None)`.
	fn parse(&self, uri: &str, routes: &[Arc<Route>]) -> Result<Option<RouteMatch>>;

	/// Returns true if this parser is able to handle the route.
	fn supports(&self, route: &Route) -> bool;
}

impl<P> Parser for Box<P>
where
	P: Parser + ?Sized,
{
	fn parse(&self, uri: &str, routes: &[Arc<Route>]) -> Result<Option<RouteMatch>> {
		(**self).parse(uri, routes)
	}

	fn supports(&self, route: &Route) -> bool {
		(**self).supports(route)
	}
}
