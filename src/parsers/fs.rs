use super::Parser;
use crate::routes::{Handler, Route, RouteMatch};
use crate::{Error, Result};

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Matches uris directly against files on disk.
///
/// For the uri `/blog/post` and the suffix `.md` every directory is checked
/// for a file `blog/post.md`. Directories added later are checked first,
/// suffixes in the order they were given.
///
/// The registered routes are ignored, a route is synthesized for every hit
/// with the absolute file path as handler and the uri as `uri` parameter.
///
/// Every attempt touches the filesystem, nothing gets cached.
///
/// ## Example
/// ```no_run
/// use fire_router::{Router, parsers::FsParser};
///
/// let mut router = Router::new();
/// router.add_parser(FsParser::new(["./pages"], [".html.twig", ".md"])?);
/// # Ok::<(), fire_router::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FsParser {
	directories: Vec<PathBuf>,
	suffixes: Vec<String>,
}

impl FsParser {
	/// ## Errors
	/// If one of the directories does not exist or is not a directory.
	pub fn new<D, P, S, E>(directories: D, suffixes: S) -> Result<Self>
	where
		D: IntoIterator<Item = P>,
		P: AsRef<Path>,
		S: IntoIterator<Item = E>,
		E: Into<String>,
	{
		let mut parser = Self {
			directories: vec![],
			suffixes: suffixes.into_iter().map(Into::into).collect(),
		};

		for dir in directories {
			parser.add_directory(dir)?;
		}

		Ok(parser)
	}

	/// Adds a directory which takes precedence over all previously added
	/// ones. Adding a directory twice does nothing.
	///
	/// ## Errors
	/// If the directory does not exist or is not a directory.
	pub fn add_directory(&mut self, dir: impl AsRef<Path>) -> Result<&mut Self> {
		let dir = dir.as_ref();
		let invalid = |source| Error::InvalidDirectory {
			path: dir.to_path_buf(),
			source,
		};

		let real = dir.canonicalize().map_err(invalid)?;
		if !real.is_dir() {
			return Err(invalid(io::Error::new(
				io::ErrorKind::Other,
				"expected folder found file",
			)));
		}

		if !self.directories.contains(&real) {
			self.directories.insert(0, real);
		}

		Ok(self)
	}

	/// The directories in the order they are checked.
	pub fn directories(&self) -> &[PathBuf] {
		&self.directories
	}

	pub fn suffixes(&self) -> &[String] {
		&self.suffixes
	}

	fn has_valid_suffix(&self, path: &Path) -> bool {
		let path = path.to_string_lossy();
		self.suffixes.iter().any(|s| path.ends_with(s.as_str()))
	}
}

impl Parser for FsParser {
	fn parse(&self, uri: &str, _routes: &[Arc<Route>]) -> Result<Option<RouteMatch>> {
		let path = uri.trim_start_matches('/');

		// don't allow to leave the directories
		if path.split('/').any(|part| part == "..") {
			tracing::warn!("rejected path traversal in {uri:?}");
			return Ok(None);
		}

		for dir in &self.directories {
			for suffix in &self.suffixes {
				let file = dir.join(format!("{path}{suffix}"));

				if !file.is_file() {
					continue;
				}

				tracing::info!("serving {uri:?} from {file:?}");

				let route = Route::new(format!("/{path}"), Handler::File(file))
					.param("uri", uri);
				let params = route.parameters().clone();

				return Ok(Some(RouteMatch::new(Arc::new(route), params)));
			}
		}

		Ok(None)
	}

	fn supports(&self, route: &Route) -> bool {
		route
			.handler()
			.as_file()
			.map_or(false, |path| self.has_valid_suffix(path))
	}
}
