//! Routes, the registry holding them and the result of a match.

mod route;
pub use route::{Callback, Handler, Route};

mod route_match;
pub use route_match::RouteMatch;

mod collection;
pub use collection::Collection;

pub mod pattern;
pub use pattern::Pattern;
