use fire_router::dispatch::{DispatchError, Dispatcher};
use fire_router::parsers::{ExactParser, PatternParser};
use fire_router::{Handler, Route, Router};

use std::collections::BTreeMap;
use std::path::Path;

fn pages() -> &'static Path {
	Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/pages"))
}

fn router() -> Router {
	let mut router = Router::new();
	router
		.add_parser(ExactParser::new())
		.add_parser(PatternParser::new());
	router
		.add_route(Route::new("/", pages().join("about.md")))
		.add_route(Route::new("/twig", pages().join("about.html.twig")))
		.add_route(Route::new("/missing", pages().join("missing.md")))
		.add_route(Route::new("/users/{id}", "Users::show"))
		.add_route(Route::new("/orders/{id}", "Orders::show"))
		.add_route(Route::new("/users/{id}/edit", "Users::edit"))
		.add_route(Route::new(
			"/hello/{name}",
			Handler::callable(|params| {
				format!("Hello, {}!", params.get("name").unwrap_or("World"))
			}),
		))
		.add_route(Route::new("/config", BTreeMap::<String, String>::new()));
	router
}

fn dispatcher() -> Dispatcher {
	let mut dispatcher = Dispatcher::new();
	dispatcher
		.add_renderer("md", |path, _| {
			std::fs::read_to_string(path).unwrap()
		})
		.add_action("Users", "show", |params| {
			format!("user {}", params.get("id").unwrap())
		});
	dispatcher
}

fn dispatch(uri: &str) -> Result<String, DispatchError> {
	let matched = router().match_uri(uri).unwrap();
	dispatcher().dispatch(&matched)
}

#[test]
fn files() {
	assert_eq!(dispatch("/").unwrap(), "# About\n");
	assert_eq!(
		dispatch("/twig").unwrap_err(),
		DispatchError::UnsupportedFile("twig".into())
	);
	assert_eq!(
		dispatch("/missing").unwrap_err(),
		DispatchError::FileNotFound(pages().join("missing.md"))
	);
}

#[test]
fn actions() {
	assert_eq!(dispatch("/users/5").unwrap(), "user 5");
	assert_eq!(
		dispatch("/orders/5").unwrap_err(),
		DispatchError::TargetNotFound("Orders".into())
	);
	assert_eq!(
		dispatch("/users/5/edit").unwrap_err(),
		DispatchError::ActionNotFound {
			target: "Users".into(),
			action: "edit".into()
		}
	);
}

#[test]
fn callables() {
	assert_eq!(dispatch("/hello/fire").unwrap(), "Hello, fire!");
}

#[test]
fn configs_are_rejected() {
	let err = dispatch("/config").unwrap_err();
	assert_eq!(err, DispatchError::UnrecognizedHandler("config"));
	assert_eq!(err.to_string(), "Unable to dispatch handler of type: config");
}

#[test]
fn handler_kinds() {
	let router = router();
	let kind = |uri: &str| router.match_uri(uri).unwrap().handler().kind();

	assert_eq!(kind("/"), "file");
	assert_eq!(kind("/users/1"), "action");
	assert_eq!(kind("/hello/x"), "callable");
	assert_eq!(kind("/config"), "config");
}
