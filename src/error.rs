use crate::generator::UrlReferenceType;

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned while registering routes, matching a uri or generating
/// a url.
///
/// None of these conditions are retried internally, the caller decides what
/// to do with them (for example render a 404 page for
/// [`is_not_found`](Error::is_not_found)).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// No parser produced a match for the uri.
	#[error("No route found for \"{0}\"")]
	RouteNotFound(String),

	/// No route is registered under this name.
	#[error("No route named \"{0}\" exists")]
	NamedRouteNotFound(String),

	/// The pattern of a route could not be compiled.
	#[error("Invalid route pattern \"{pattern}\": {source}")]
	InvalidPattern {
		pattern: String,
		source: regex::Error,
	},

	/// A directory given to a filesystem parser does not exist or is not a
	/// directory.
	#[error("Invalid directory {}: {source}", .path.display())]
	InvalidDirectory { path: PathBuf, source: io::Error },

	/// A route definition is missing required values.
	#[error("Invalid route configuration: {0}")]
	InvalidRoute(String),

	#[error(transparent)]
	Generate(#[from] GenerateError),
}

impl Error {
	/// Returns true if this error means that nothing could be found for the
	/// given uri or name.
	pub fn is_not_found(&self) -> bool {
		matches!(
			self,
			Self::RouteNotFound(_)
				| Self::NamedRouteNotFound(_)
				| Self::Generate(GenerateError::RouteNotFound(_))
		)
	}
}

/// Errors returned by the [`UrlGenerator`](crate::UrlGenerator).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GenerateError {
	#[error(
		"Unable to generate a URL for the named route \"{0}\" as such route \
		 does not exist"
	)]
	RouteNotFound(String),

	#[error(
		"Parameter \"{name}\" is required for route \"{pattern}\" but was not \
		 provided"
	)]
	MissingParameter { name: String, pattern: String },

	#[error("{0:?} generation is not implemented yet")]
	NotImplemented(UrlReferenceType),
}
