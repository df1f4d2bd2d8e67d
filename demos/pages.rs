use fire_router::dispatch::Dispatcher;
use fire_router::parsers::{ExactParser, FsParser};
use fire_router::{Route, Router};

use std::fs;
use std::path::Path;

fn main() {
	tracing_subscriber::fmt::init();

	let root = Path::new(env!("CARGO_MANIFEST_DIR"));

	let mut router = Router::new();
	router
		.add_parser(ExactParser::new())
		.add_parser(
			FsParser::new(
				[root.join("tests/pages")],
				[".html.twig", ".md"],
			)
			.expect("pages folder missing"),
		);

	router.add_route(Route::new("/", root.join("README.md")).name("home"));

	let mut dispatcher = Dispatcher::new();
	dispatcher
		.add_renderer("md", |path, _| {
			fs::read_to_string(path).unwrap_or_default()
		})
		.add_renderer("twig", |path, params| {
			let tmpl = fs::read_to_string(path).unwrap_or_default();
			tmpl.replace("{{ title }}", params.get("uri").unwrap_or_default())
		});

	for uri in ["/", "/about", "/blog/post", "/missing"] {
		match router.match_uri(uri) {
			Ok(matched) => match dispatcher.dispatch(&matched) {
				Ok(out) => println!("{uri}:\n{out}"),
				Err(e) => println!("{uri}: 500 {e}"),
			},
			Err(e) if e.is_not_found() => println!("{uri}: 404 {e}"),
			Err(e) => println!("{uri}: 500 {e}"),
		}
	}
}
