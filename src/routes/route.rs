use crate::Params;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use http::Method;

/// The closure type stored in [`Handler::Callable`].
pub type Callback = dyn Fn(&Params) -> String + Send + Sync;

/// What a route resolves to.
///
/// The router never looks inside a handler, it is only handed back in a
/// [`RouteMatch`](crate::RouteMatch) and interpreted by a dispatcher.
#[derive(Clone)]
pub enum Handler {
	/// A file which gets rendered depending on its extension.
	File(PathBuf),
	/// A `Target::action` pair.
	Action { target: String, action: String },
	/// A structured configuration.
	Config(BTreeMap<String, String>),
	/// A closure which receives the merged parameters.
	Callable(Arc<Callback>),
}

impl Handler {
	pub fn file(path: impl Into<PathBuf>) -> Self {
		Self::File(path.into())
	}

	pub fn action(target: impl Into<String>, action: impl Into<String>) -> Self {
		Self::Action {
			target: target.into(),
			action: action.into(),
		}
	}

	pub fn callable<F>(f: F) -> Self
	where
		F: Fn(&Params) -> String + Send + Sync + 'static,
	{
		Self::Callable(Arc::new(f))
	}

	/// Returns the path if this is a file handler.
	pub fn as_file(&self) -> Option<&Path> {
		match self {
			Self::File(path) => Some(path.as_path()),
			_ => None,
		}
	}

	/// A short name of the variant, used in logs and errors.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::File(_) => "file",
			Self::Action { .. } => "action",
			Self::Config(_) => "config",
			Self::Callable(_) => "callable",
		}
	}
}

/// `"Target::action"` becomes an action, everything else a file path.
impl From<&str> for Handler {
	fn from(s: &str) -> Self {
		match s.split_once("::") {
			Some((target, action)) => Self::action(target, action),
			None => Self::file(s),
		}
	}
}

impl From<String> for Handler {
	fn from(s: String) -> Self {
		s.as_str().into()
	}
}

impl From<PathBuf> for Handler {
	fn from(path: PathBuf) -> Self {
		Self::File(path)
	}
}

impl From<BTreeMap<String, String>> for Handler {
	fn from(config: BTreeMap<String, String>) -> Self {
		Self::Config(config)
	}
}

impl fmt::Debug for Handler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::File(path) => f.debug_tuple("File").field(path).finish(),
			Self::Action { target, action } => f
				.debug_struct("Action")
				.field("target", target)
				.field("action", action)
				.finish(),
			Self::Config(config) => {
				f.debug_tuple("Config").field(config).finish()
			}
			Self::Callable(_) => f.write_str("Callable(..)"),
		}
	}
}

/// Callables are only equal if they point to the same closure.
impl PartialEq for Handler {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::File(a), Self::File(b)) => a == b,
			(
				Self::Action {
					target: ta,
					action: aa,
				},
				Self::Action {
					target: tb,
					action: ab,
				},
			) => ta == tb && aa == ab,
			(Self::Config(a), Self::Config(b)) => a == b,
			(Self::Callable(a), Self::Callable(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

/// A registered pattern to handler binding.
///
/// ## Example
/// ```
/// use fire_router::{Route, Handler};
///
/// let route = Route::new("/users/{id:\\d+}", "Users::show")
/// 	.name("user.show")
/// 	.param("format", "html");
///
/// assert_eq!(route.get_name(), Some("user.show"));
/// assert_eq!(route.handler(), &Handler::action("Users", "show"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
	pattern: String,
	handler: Handler,
	name: Option<String>,
	parameters: Params,
	methods: Vec<Method>,
	roles: Vec<String>,
}

impl Route {
	/// Creates a new unnamed route without any parameters.
	///
	/// ## Panics
	/// If the pattern is empty.
	#[track_caller]
	pub fn new(pattern: impl Into<String>, handler: impl Into<Handler>) -> Self {
		let pattern = pattern.into();
		assert!(!pattern.is_empty(), "a route pattern cannot be empty");

		Self {
			pattern,
			handler: handler.into(),
			name: None,
			parameters: Params::new(),
			methods: vec![],
			roles: vec![],
		}
	}

	/// Sets the name used for url generation.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Adds a default parameter.
	pub fn param<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		V: ToString,
	{
		self.parameters.insert(key, value);
		self
	}

	/// Adds all default parameters.
	pub fn params(mut self, params: Params) -> Self {
		self.parameters.extend(params.iter());
		self
	}

	/// Restricts the route to the given methods.
	pub fn methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
		self.methods = methods.into_iter().collect();
		self
	}

	pub fn roles<I, S>(mut self, roles: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.roles = roles.into_iter().map(Into::into).collect();
		self
	}

	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	pub fn handler(&self) -> &Handler {
		&self.handler
	}

	pub fn get_name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn parameters(&self) -> &Params {
		&self.parameters
	}

	pub fn get_methods(&self) -> &[Method] {
		&self.methods
	}

	/// Returns true if the route has no method restriction or lists the
	/// method.
	pub fn allows_method(&self, method: &Method) -> bool {
		self.methods.is_empty() || self.methods.contains(method)
	}

	pub fn get_roles(&self) -> &[String] {
		&self.roles
	}

	pub fn has_role(&self, role: &str) -> bool {
		self.roles.iter().any(|r| r == role)
	}

	/// Returns true if the route declares no roles or lists the role.
	pub fn is_role_allowed(&self, role: &str) -> bool {
		self.roles.is_empty() || self.has_role(role)
	}
}
