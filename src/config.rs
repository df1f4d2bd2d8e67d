use crate::routes::{Pattern, Route};
use crate::{Error, Params, Result};

use http::Method;

/// A route described by plain values, for example loaded from a settings
/// file by the embedding application.
///
/// Use [`Router::add_config`](crate::Router::add_config) to register it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteConfig {
	pub name: Option<String>,
	#[cfg_attr(feature = "serde", serde(alias = "route"))]
	pub path: Option<String>,
	pub handler: Option<String>,
	pub defaults: Params,
	pub methods: Vec<String>,
}

impl RouteConfig {
	pub fn new(
		name: impl Into<String>,
		path: impl Into<String>,
		handler: impl Into<String>,
	) -> Self {
		Self {
			name: Some(name.into()),
			path: Some(path.into()),
			handler: Some(handler.into()),
			..Self::default()
		}
	}

	/// Validates the config and converts it into a `Route`.
	///
	/// ## Errors
	/// Returns `Error::InvalidRoute` if the name, the path or the handler is
	/// missing or if a method is not valid, `Error::InvalidPattern` if the
	/// path does not compile.
	pub fn into_route(self) -> Result<Route> {
		let name = self.name.filter(|n| !n.is_empty()).ok_or_else(|| {
			Error::InvalidRoute(format!(
				"Name is required in route \"{}\".",
				self.path.as_deref().unwrap_or_default()
			))
		})?;

		let path = self.path.filter(|p| !p.is_empty()).ok_or_else(|| {
			Error::InvalidRoute(format!("Path is required in route \"{name}\"."))
		})?;

		if path.contains('{') {
			Pattern::parse(&path).compile().map_err(|source| {
				Error::InvalidPattern {
					pattern: path.clone(),
					source,
				}
			})?;
		}

		let handler = self.handler.filter(|h| !h.is_empty()).ok_or_else(|| {
			Error::InvalidRoute(format!(
				"Handler is required in route \"{name}\"."
			))
		})?;

		let methods = self
			.methods
			.iter()
			.map(|m| {
				Method::from_bytes(m.to_ascii_uppercase().as_bytes()).map_err(
					|_| {
						Error::InvalidRoute(format!(
							"Invalid method \"{m}\" in route \"{name}\"."
						))
					},
				)
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(Route::new(path, handler)
			.name(name)
			.params(self.defaults)
			.methods(methods))
	}
}
