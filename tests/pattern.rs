use fire_router::parsers::{Parser, PatternParser};
use fire_router::routes::pattern::{Placeholder, Segment};
use fire_router::routes::Pattern;
use fire_router::{Params, Route};

use std::sync::Arc;

use tracing_test::traced_test;

fn routes(list: &[(&str, &str)]) -> Vec<Arc<Route>> {
	list.iter()
		.map(|(pattern, handler)| Arc::new(Route::new(*pattern, *handler)))
		.collect()
}

#[test]
fn segments() {
	let pattern = Pattern::parse("/users/{id:\\d{2,4}}/posts/{slug}{ext?}");
	assert_eq!(
		pattern.segments(),
		&[
			Segment::Literal("/users/"),
			Segment::Placeholder(Placeholder {
				name: "id",
				constraint: Some("\\d{2,4}"),
				optional: false
			}),
			Segment::Literal("/posts/"),
			Segment::Placeholder(Placeholder {
				name: "slug",
				constraint: None,
				optional: false
			}),
			Segment::Placeholder(Placeholder {
				name: "ext",
				constraint: None,
				optional: true
			}),
		]
	);

	let names: Vec<_> = pattern.placeholders().map(|p| p.name).collect();
	assert_eq!(names, ["id", "slug", "ext"]);
}

#[test]
fn unclosed_braces_are_literal() {
	let pattern = Pattern::parse("/a/{}/b/{open");
	assert_eq!(
		pattern.segments(),
		&[
			Segment::Literal("/a/"),
			Segment::Literal("{}"),
			Segment::Literal("/b/"),
			Segment::Literal("{open"),
		]
	);
	assert_eq!(pattern.to_regex_string(), "^/a/\\{\\}/b/\\{open$");
}

#[test]
fn regex_string() {
	let cases = [
		("/users/{id}", "^/users/(?P<id>[^/]+)$"),
		("/users/{id:\\d+}", "^/users/(?P<id>\\d+)$"),
		("/blog/{year?}", "^/blog(?:/(?P<year>[^/]+))?$"),
		(
			"/blog/{year}/{month?}",
			"^/blog/(?P<year>[^/]+)(?:/(?P<month>[^/]+))?$",
		),
		("/file.{ext}", "^/file\\.(?P<ext>[^/]+)$"),
	];

	for (pattern, expected) in cases {
		assert_eq!(Pattern::parse(pattern).to_regex_string(), expected);
	}
}

#[test]
fn extracts_parameters() {
	let parser = PatternParser::new();
	let routes = routes(&[("/users/{id}", "Users::show")]);

	let matched = parser.parse("/users/42", &routes).unwrap().unwrap();
	assert_eq!(matched.parameters(), &Params::from([("id", "42")]));

	assert!(parser.parse("/users/42/edit", &routes).unwrap().is_none());
	assert!(parser.parse("/users/", &routes).unwrap().is_none());
}

#[test]
fn constraint() {
	let parser = PatternParser::new();
	let routes = routes(&[("/users/{id:\\d+}", "Users::show")]);

	assert!(parser.parse("/users/abc", &routes).unwrap().is_none());
	// anchored at both ends
	assert!(parser.parse("/users/12abc", &routes).unwrap().is_none());
	assert!(parser.parse("/prefix/users/12", &routes).unwrap().is_none());

	let matched = parser.parse("/users/12", &routes).unwrap().unwrap();
	assert_eq!(matched.param("id"), Some("12"));
}

#[test]
fn optional() {
	let parser = PatternParser::new();
	let routes = routes(&[("/blog/{year?}", "Blog::archive")]);

	let matched = parser.parse("/blog", &routes).unwrap().unwrap();
	assert!(matched.parameters().is_empty());

	let matched = parser.parse("/blog/2024", &routes).unwrap().unwrap();
	assert_eq!(matched.parameters(), &Params::from([("year", "2024")]));

	assert!(parser.parse("/blog/", &routes).unwrap().is_none());
	assert!(parser.parse("/blog2024", &routes).unwrap().is_none());
}

#[test]
fn optional_with_constraint() {
	let parser = PatternParser::new();
	let routes = routes(&[("/blog/{year?:\\d{4}}", "Blog::archive")]);

	assert!(parser.parse("/blog", &routes).unwrap().is_some());
	assert!(parser.parse("/blog/2024", &routes).unwrap().is_some());
	assert!(parser.parse("/blog/24", &routes).unwrap().is_none());
}

#[test]
fn extracted_values_win() {
	let parser = PatternParser::new();
	let route = Route::new("/users/{id}", "Users::show")
		.param("id", "0")
		.param("format", "html");
	let routes = vec![Arc::new(route)];

	let matched = parser.parse("/users/7", &routes).unwrap().unwrap();
	assert_eq!(
		matched.parameters(),
		&Params::from([("id", "7"), ("format", "html")])
	);
}

#[test]
fn first_route_wins() {
	let parser = PatternParser::new();
	let routes = routes(&[
		("/static", "Static::page"),
		("/{page}", "Pages::show"),
		("/{slug}", "Posts::show"),
	]);

	let matched = parser.parse("/about", &routes).unwrap().unwrap();
	assert_eq!(matched.route().pattern(), "/{page}");

	// the route without placeholders is not supported by this parser
	let matched = parser.parse("/static", &routes).unwrap().unwrap();
	assert_eq!(matched.route().pattern(), "/{page}");
}

#[test]
fn literal_text_is_escaped() {
	let parser = PatternParser::new();
	let routes = routes(&[("/files/{name}.json", "Files::json")]);

	let matched = parser.parse("/files/data.json", &routes).unwrap().unwrap();
	assert_eq!(matched.param("name"), Some("data"));
	assert!(parser.parse("/files/dataxjson", &routes).unwrap().is_none());
}

#[test]
#[traced_test]
fn invalid_pattern_never_matches() {
	let parser = PatternParser::new();
	let broken = routes(&[("/users/{id:(}", "Users::broken")]);
	assert!(parser.parse("/users/1", &broken).unwrap().is_none());
	assert!(logs_contain("does not compile"));

	let both = routes(&[
		("/users/{id:(}", "Users::broken"),
		("/users/{id}", "Users::show"),
	]);
	let matched = parser.parse("/users/1", &both).unwrap().unwrap();
	assert_eq!(matched.route().pattern(), "/users/{id}");
}
