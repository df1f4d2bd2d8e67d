//! Turns a [`RouteMatch`] into output.
//!
//! The router only resolves handlers, this is a minimal dispatcher covering
//! every [`Handler`] variant. Embedding applications with their own
//! controller or template layer can match on the handler themselves.

use crate::routes::{Handler, RouteMatch};
use crate::Params;

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

type Renderer = Box<dyn Fn(&Path, &Params) -> String + Send + Sync>;
type Action = Box<dyn Fn(&Params) -> String + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DispatchError {
	#[error("File not found: {}", .0.display())]
	FileNotFound(PathBuf),

	#[error("Unsupported file type: {0}")]
	UnsupportedFile(String),

	#[error("Target not found: {0}")]
	TargetNotFound(String),

	#[error("Action not found: {target}::{action}")]
	ActionNotFound { target: String, action: String },

	#[error("Unable to dispatch handler of type: {0}")]
	UnrecognizedHandler(&'static str),
}

/// Calls the handler of a match.
///
/// - files are rendered by the renderer registered for their extension
/// - actions are looked up by target and action name
/// - callables are called directly
/// - configs are rejected
///
/// ## Example
/// ```
/// use fire_router::{Router, Route, Handler, parsers::ExactParser};
/// use fire_router::dispatch::Dispatcher;
///
/// let mut router = Router::new();
/// router.add_parser(ExactParser::new());
/// router.add_route(Route::new("/hello", "Greeter::hello"));
///
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.add_action("Greeter", "hello", |_| "Hello, World!".into());
///
/// let matched = router.match_uri("/hello").unwrap();
/// assert_eq!(dispatcher.dispatch(&matched).unwrap(), "Hello, World!");
/// ```
#[derive(Default)]
pub struct Dispatcher {
	renderers: HashMap<String, Renderer>,
	targets: HashMap<String, HashMap<String, Action>>,
}

impl Dispatcher {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a renderer for files with the extension `ext` (without the
	/// dot). Only the last extension counts, `page.html.twig` is `twig`.
	pub fn add_renderer<F>(&mut self, ext: impl Into<String>, f: F) -> &mut Self
	where
		F: Fn(&Path, &Params) -> String + Send + Sync + 'static,
	{
		self.renderers.insert(ext.into(), Box::new(f));
		self
	}

	pub fn add_action<F>(
		&mut self,
		target: impl Into<String>,
		action: impl Into<String>,
		f: F,
	) -> &mut Self
	where
		F: Fn(&Params) -> String + Send + Sync + 'static,
	{
		self.targets
			.entry(target.into())
			.or_default()
			.insert(action.into(), Box::new(f));
		self
	}

	/// ## Errors
	/// If the handler cannot be dispatched, see [`DispatchError`].
	pub fn dispatch(&self, matched: &RouteMatch) -> Result<String, DispatchError> {
		let params = matched.parameters();

		match matched.handler() {
			Handler::File(path) => self.render_file(path, params),
			Handler::Action { target, action } => {
				let actions = self
					.targets
					.get(target)
					.ok_or_else(|| DispatchError::TargetNotFound(target.clone()))?;

				let f = actions.get(action).ok_or_else(|| {
					DispatchError::ActionNotFound {
						target: target.clone(),
						action: action.clone(),
					}
				})?;

				Ok(f(params))
			}
			Handler::Callable(f) => Ok(f(params)),
			h @ Handler::Config(_) => {
				Err(DispatchError::UnrecognizedHandler(h.kind()))
			}
		}
	}

	fn render_file(
		&self,
		path: &Path,
		params: &Params,
	) -> Result<String, DispatchError> {
		if !path.is_file() {
			return Err(DispatchError::FileNotFound(path.to_path_buf()));
		}

		let ext = path
			.extension()
			.and_then(|e| e.to_str())
			.unwrap_or_default();

		let renderer = self
			.renderers
			.get(ext)
			.ok_or_else(|| DispatchError::UnsupportedFile(ext.to_string()))?;

		tracing::debug!("rendering {path:?} as {ext}");

		Ok(renderer(path, params))
	}
}

impl fmt::Debug for Dispatcher {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Dispatcher")
			.field("renderers", &self.renderers.keys().collect::<Vec<_>>())
			.field("targets", &self.targets.keys().collect::<Vec<_>>())
			.finish()
	}
}
