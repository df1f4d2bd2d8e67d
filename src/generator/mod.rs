//! Reverse routing, building paths and urls from a route name.

use crate::error::GenerateError;
use crate::routes::{Collection, Pattern};
use crate::Params;

mod context;
pub use context::{ContextOverrides, RequestContext};

/// How a generated url should look like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UrlReferenceType {
	/// `https://example.com/base/users/1`
	AbsoluteUrl,
	/// `/users/1`
	#[default]
	AbsolutePath,
	/// Not supported.
	RelativePath,
	/// `//example.com/base/users/1`
	NetworkPath,
}

/// Generates paths from named routes.
///
/// Without a [`RequestContext`] only the path gets returned, regardless of
/// the requested [`UrlReferenceType`].
///
/// ## Example
/// ```
/// use fire_router::{
/// 	Collection, Route, Params, UrlGenerator, UrlReferenceType, RequestContext
/// };
///
/// let mut routes = Collection::new();
/// routes.add(Route::new("/users/{id:\\d+}", "Users::show").name("user.show"));
///
/// let mut ctx = RequestContext::new();
/// ctx.set_scheme("https").set_host("example.com");
/// let generator = UrlGenerator::with_context(ctx);
///
/// let params = Params::from([("id", 42)]);
/// let url = generator
/// 	.generate(&routes, "user.show", &params, UrlReferenceType::AbsoluteUrl)
/// 	.unwrap();
/// assert_eq!(url, "https://example.com/users/42");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UrlGenerator {
	context: Option<RequestContext>,
}

impl UrlGenerator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_context(context: RequestContext) -> Self {
		Self {
			context: Some(context),
		}
	}

	pub fn set_context(&mut self, context: RequestContext) -> &mut Self {
		self.context = Some(context);
		self
	}

	pub fn context(&self) -> Option<&RequestContext> {
		self.context.as_ref()
	}

	/// Generates the url for the route named `name`.
	///
	/// `params` overwrite the default parameters of the route.
	///
	/// ## Errors
	/// - `RouteNotFound` if no route has that name
	/// - `MissingParameter` if a required placeholder has no value
	/// - `NotImplemented` for relative paths
	pub fn generate(
		&self,
		routes: &Collection,
		name: &str,
		params: &Params,
		reference_type: UrlReferenceType,
	) -> Result<String, GenerateError> {
		let route = routes
			.get_by_name(name)
			.map_err(|_| GenerateError::RouteNotFound(name.to_string()))?;

		let params = route.parameters().merge(params);
		let path = Pattern::parse(route.pattern()).reconstruct(&params)?;

		let Some(ctx) = &self.context else {
			return Ok(path);
		};

		match reference_type {
			UrlReferenceType::AbsolutePath => Ok(path),
			UrlReferenceType::AbsoluteUrl => Ok(format!(
				"{}://{}{}{}{path}",
				ctx.scheme(),
				ctx.host(),
				ctx.port_suffix(),
				ctx.base_url()
			)),
			UrlReferenceType::NetworkPath => Ok(format!(
				"//{}{}{}{path}",
				ctx.host(),
				ctx.port_suffix(),
				ctx.base_url()
			)),
			UrlReferenceType::RelativePath => {
				Err(GenerateError::NotImplemented(reference_type))
			}
		}
	}
}
