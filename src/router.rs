use crate::config::RouteConfig;
use crate::error::GenerateError;
use crate::generator::{RequestContext, UrlGenerator, UrlReferenceType};
use crate::parsers::Parser;
use crate::routes::{Collection, Route, RouteMatch};
use crate::{Error, Params, Result};

use std::fmt;
use std::sync::Arc;

use http::{Method, Request};

/// Matches uris against registered routes and generates urls from them.
///
/// The router is built once and then only read. It does no locking, if
/// routes need to be added while requests are matched, the embedding
/// application has to synchronize that.
///
/// ## Example
/// ```
/// use fire_router::{Router, Route, Params, parsers::{ExactParser, PatternParser}};
///
/// let mut router = Router::new();
/// router
/// 	.add_parser(ExactParser::new())
/// 	.add_parser(PatternParser::new());
///
/// router.add_route(Route::new("/", "Home::index").name("home"));
/// router.add_route(Route::new("/users/{id:\\d+}", "Users::show").name("user"));
///
/// let matched = router.match_uri("/users/42").unwrap();
/// assert_eq!(matched.name(), Some("user"));
/// assert_eq!(matched.param("id"), Some("42"));
///
/// let path = router.path("user", &Params::from([("id", 7)])).unwrap();
/// assert_eq!(path, "/users/7");
/// ```
#[derive(Default)]
pub struct Router {
	parsers: Vec<Box<dyn Parser>>,
	routes: Collection,
	generator: UrlGenerator,
}

impl Router {
	/// Creates a router without any parsers, nothing will match until one
	/// is added.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a router using the given url generator.
	pub fn with_generator(generator: UrlGenerator) -> Self {
		Self {
			generator,
			..Self::default()
		}
	}

	/// Appends a parser, parsers added first take precedence.
	pub fn add_parser<P>(&mut self, parser: P) -> &mut Self
	where
		P: Parser + 'static,
	{
		self.parsers.push(Box::new(parser));
		self
	}

	/// Adds a route, replacing any route with the same pattern.
	pub fn add_route(&mut self, route: Route) -> &mut Self {
		self.routes.add(route);
		self
	}

	/// Validates the config and adds the resulting route.
	///
	/// ## Errors
	/// Returns `Error::InvalidRoute` if the config is incomplete or
	/// `Error::InvalidPattern` if its path does not compile.
	pub fn add_config(&mut self, config: RouteConfig) -> Result<&mut Self> {
		let route = config.into_route()?;
		Ok(self.add_route(route))
	}

	pub fn routes(&self) -> &Collection {
		&self.routes
	}

	/// Matches the uri as is.
	///
	/// ## Errors
	/// Returns `Error::RouteNotFound` if no parser matched, or the error of
	/// a parser.
	pub fn match_uri(&self, uri: &str) -> Result<RouteMatch> {
		self.match_routes(uri, self.routes.all())
	}

	/// Matches the path of the current request context.
	///
	/// The path gets normalized so that it starts with exactly one slash and
	/// does not end with one. Without a context `/` is matched.
	pub fn match_current(&self) -> Result<RouteMatch> {
		let path = self
			.generator
			.context()
			.map(|ctx| ctx.path_info())
			.unwrap_or("/");

		self.match_uri(&normalize_uri(path))
	}

	/// Matches only routes which allow the method.
	pub fn match_method(&self, method: &Method, uri: &str) -> Result<RouteMatch> {
		let routes: Vec<_> = self
			.routes
			.iter()
			.filter(|route| route.allows_method(method))
			.cloned()
			.collect();

		self.match_routes(uri, &routes)
	}

	/// Matches a request, respecting the method restrictions of the routes.
	///
	/// The uri is the normalized path info of the
	/// [`RequestContext`] derived from the request.
	pub fn match_request<B>(&self, req: &Request<B>) -> Result<RouteMatch> {
		let ctx = RequestContext::from_request(req);
		self.match_method(ctx.method(), &normalize_uri(ctx.path_info()))
	}

	fn match_routes(&self, uri: &str, routes: &[Arc<Route>]) -> Result<RouteMatch> {
		for parser in &self.parsers {
			if let Some(matched) = parser.parse(uri, routes)? {
				tracing::debug!("matched {uri:?} to {:?}", matched.route().pattern());
				return Ok(matched);
			}
		}

		tracing::debug!("no route found for {uri:?}");
		Err(Error::RouteNotFound(uri.to_string()))
	}

	/// Generates a url for a named route.
	///
	/// ## Errors
	/// See [`UrlGenerator::generate`].
	pub fn generate(
		&self,
		name: &str,
		params: &Params,
		reference_type: UrlReferenceType,
	) -> std::result::Result<String, GenerateError> {
		self.generator
			.generate(&self.routes, name, params, reference_type)
	}

	/// Generates an absolute path, like `/users/1`.
	pub fn path(
		&self,
		name: &str,
		params: &Params,
	) -> std::result::Result<String, GenerateError> {
		self.generate(name, params, UrlReferenceType::AbsolutePath)
	}

	/// Generates an absolute url, like `https://example.com/users/1`.
	pub fn url(
		&self,
		name: &str,
		params: &Params,
	) -> std::result::Result<String, GenerateError> {
		self.generate(name, params, UrlReferenceType::AbsoluteUrl)
	}

	pub fn set_context(&mut self, context: RequestContext) -> &mut Self {
		self.generator.set_context(context);
		self
	}

	pub fn context(&self) -> Option<&RequestContext> {
		self.generator.context()
	}
}

impl fmt::Debug for Router {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("parsers", &self.parsers.len())
			.field("routes", &self.routes)
			.field("generator", &self.generator)
			.finish()
	}
}

/// Trims all leading and trailing slashes and adds back a single leading one.
pub fn normalize_uri(uri: &str) -> String {
	format!("/{}", uri.trim_matches('/'))
}
