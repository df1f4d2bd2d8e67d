use std::fmt;

use http::uri::Authority;
use http::{header, Method, Request};

/// Values which take precedence over what can be read from a request.
///
/// Insert them into the extensions of a request before calling
/// [`RequestContext::from_request`], for example when running behind a proxy
/// which rewrites the host or the scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextOverrides {
	pub scheme: Option<String>,
	pub host: Option<String>,
	pub port: Option<u16>,
	/// The path info, already stripped of the base path.
	pub uri: Option<String>,
	/// The path where the application is mounted.
	pub base_path: Option<String>,
}

/// Information about the current request needed to build absolute urls.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RequestContext {
	base_url: String,
	#[cfg_attr(feature = "serde", serde(with = "method_serde"))]
	method: Method,
	host: String,
	scheme: String,
	http_port: u16,
	https_port: u16,
	path_info: String,
	query_string: String,
}

impl RequestContext {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a context from a request.
	///
	/// [`ContextOverrides`] found in the extensions of the request are
	/// preferred over the values of the request itself.
	pub fn from_request<B>(req: &Request<B>) -> Self {
		let default_overrides = ContextOverrides::default();
		let overrides = req
			.extensions()
			.get::<ContextOverrides>()
			.unwrap_or(&default_overrides);

		let uri = req.uri();
		let host_header = req
			.headers()
			.get(header::HOST)
			.and_then(|v| v.to_str().ok())
			.and_then(|v| v.parse::<Authority>().ok());

		let scheme = overrides
			.scheme
			.as_deref()
			.or(uri.scheme_str())
			.unwrap_or("http")
			.to_string();

		let host = overrides
			.host
			.as_deref()
			.or(uri.host())
			.or(host_header.as_ref().map(|a| a.host()))
			.unwrap_or("localhost")
			.to_string();

		let port = overrides
			.port
			.or(uri.port_u16())
			.or(host_header.as_ref().and_then(|a| a.port_u16()));

		let base_url = overrides.base_path.clone().unwrap_or_default();

		let path = match overrides.uri.as_deref() {
			Some(path) if !path.is_empty() => path,
			_ => {
				let path = uri.path();
				let base = base_url.trim_end_matches('/');
				match path.strip_prefix(base) {
					Some("") if !base.is_empty() => "/",
					Some(rest) if !base.is_empty() && rest.starts_with('/') => rest,
					_ => path,
				}
			}
		};
		let path_info = format!("/{}", path.trim_start_matches('/'));

		let mut ctx = Self {
			base_url,
			method: req.method().clone(),
			host,
			scheme,
			path_info,
			query_string: uri.query().unwrap_or("").to_string(),
			..Self::default()
		};

		match (ctx.scheme.as_str(), port) {
			("http", Some(port)) => ctx.http_port = port,
			("https", Some(port)) => ctx.https_port = port,
			_ => {}
		}

		ctx
	}

	/// The path the application is mounted on, prefixed to generated urls.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn set_base_url(&mut self, base_url: impl Into<String>) -> &mut Self {
		self.base_url = base_url.into();
		self
	}

	pub fn method(&self) -> &Method {
		&self.method
	}

	pub fn set_method(&mut self, method: Method) -> &mut Self {
		self.method = method;
		self
	}

	pub fn host(&self) -> &str {
		&self.host
	}

	pub fn set_host(&mut self, host: impl Into<String>) -> &mut Self {
		self.host = host.into();
		self
	}

	pub fn scheme(&self) -> &str {
		&self.scheme
	}

	pub fn set_scheme(&mut self, scheme: impl Into<String>) -> &mut Self {
		self.scheme = scheme.into();
		self
	}

	pub fn http_port(&self) -> u16 {
		self.http_port
	}

	pub fn set_http_port(&mut self, port: u16) -> &mut Self {
		self.http_port = port;
		self
	}

	pub fn https_port(&self) -> u16 {
		self.https_port
	}

	pub fn set_https_port(&mut self, port: u16) -> &mut Self {
		self.https_port = port;
		self
	}

	/// The requested path without the base url.
	pub fn path_info(&self) -> &str {
		&self.path_info
	}

	pub fn set_path_info(&mut self, path_info: impl Into<String>) -> &mut Self {
		self.path_info = path_info.into();
		self
	}

	pub fn query_string(&self) -> &str {
		&self.query_string
	}

	pub fn set_query_string(
		&mut self,
		query_string: impl Into<String>,
	) -> &mut Self {
		self.query_string = query_string.into();
		self
	}

	/// Returns the port matching the scheme.
	pub fn port(&self) -> u16 {
		if self.scheme == "https" {
			self.https_port
		} else {
			self.http_port
		}
	}

	/// Returns `:port` if the port is not the default one for the scheme.
	pub(crate) fn port_suffix(&self) -> String {
		let standard = if self.scheme == "https" { 443 } else { 80 };
		match self.port() {
			port if port == standard => String::new(),
			port => format!(":{port}"),
		}
	}
}

impl Default for RequestContext {
	fn default() -> Self {
		Self {
			base_url: String::new(),
			method: Method::GET,
			host: "localhost".into(),
			scheme: "http".into(),
			http_port: 80,
			https_port: 443,
			path_info: "/".into(),
			query_string: String::new(),
		}
	}
}

impl fmt::Display for RequestContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"method={}, baseUrl={}, pathInfo={}, host={}, scheme={}, \
			 httpPort={}, httpsPort={}, queryString={}",
			self.method,
			self.base_url,
			self.path_info,
			self.host,
			self.scheme,
			self.http_port,
			self.https_port,
			self.query_string
		)
	}
}

#[cfg(feature = "serde")]
mod method_serde {
	use http::Method;
	use serde::de::Error;
	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S>(method: &Method, s: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		s.serialize_str(method.as_str())
	}

	pub fn deserialize<'de, D>(d: D) -> Result<Method, D::Error>
	where
		D: Deserializer<'de>,
	{
		let s = String::deserialize(d)?;
		Method::from_bytes(s.as_bytes()).map_err(D::Error::custom)
	}
}
