use fire_router::http::Method;
use fire_router::parsers::{ExactParser, PatternParser};
use fire_router::{
	Error, Handler, Params, RequestContext, RouteConfig, Router,
	UrlReferenceType,
};

#[test]
fn add_config() {
	let mut router = Router::new();
	router
		.add_parser(ExactParser::new())
		.add_parser(PatternParser::new());

	let mut config = RouteConfig::new("user", "/users/{id}", "Users::show");
	config.defaults = Params::from([("tab", "posts")]);
	config.methods = vec!["get".into()];
	router.add_config(config).unwrap();

	let route = router.routes().get_by_name("user").unwrap();
	assert_eq!(route.get_methods(), &[Method::GET]);

	let matched = router.match_uri("/users/1").unwrap();
	assert_eq!(matched.handler(), &Handler::action("Users", "show"));
	assert_eq!(matched.parameters(), &Params::from([("id", "1"), ("tab", "posts")]));
}

#[test]
fn invalid_configs() {
	let mut router = Router::new();

	let err = router
		.add_config(RouteConfig {
			path: Some("/".into()),
			handler: Some("Home::index".into()),
			..Default::default()
		})
		.unwrap_err();
	assert!(
		matches!(&err, Error::InvalidRoute(msg) if msg == "Name is required in route \"/\".")
	);

	let err = router
		.add_config(RouteConfig {
			name: Some("home".into()),
			handler: Some("Home::index".into()),
			..Default::default()
		})
		.unwrap_err();
	assert!(
		matches!(&err, Error::InvalidRoute(msg) if msg == "Path is required in route \"home\".")
	);

	let err = router
		.add_config(RouteConfig {
			name: Some("home".into()),
			path: Some("/".into()),
			..Default::default()
		})
		.unwrap_err();
	assert!(
		matches!(&err, Error::InvalidRoute(msg) if msg == "Handler is required in route \"home\".")
	);

	let mut config = RouteConfig::new("home", "/", "Home::index");
	config.methods = vec!["NOT A METHOD".into()];
	assert!(matches!(router.add_config(config), Err(Error::InvalidRoute(_))));

	assert!(router.routes().is_empty());
}

#[test]
fn deserialize_configs() {
	let json = r#"[
		{ "name": "home", "path": "/", "handler": "Home::index" },
		{
			"name": "post",
			"route": "/blog/{slug}",
			"handler": "Blog::show",
			"defaults": { "format": "html" },
			"methods": ["GET", "HEAD"]
		}
	]"#;

	let configs: Vec<RouteConfig> = serde_json::from_str(json).unwrap();
	let mut router = Router::new();
	for config in configs {
		router.add_config(config).unwrap();
	}

	let post = router.routes().get_by_name("post").unwrap();
	assert_eq!(post.pattern(), "/blog/{slug}");
	assert_eq!(post.parameters().get("format"), Some("html"));
	assert_eq!(post.get_methods(), &[Method::GET, Method::HEAD]);
}

#[test]
fn context_serde() {
	let mut ctx = RequestContext::new();
	ctx.set_scheme("https").set_method(Method::POST);

	let json = serde_json::to_value(&ctx).unwrap();
	assert_eq!(json["scheme"], "https");
	assert_eq!(json["method"], "POST");
	assert_eq!(json["httpsPort"], 443);

	let back: RequestContext = serde_json::from_value(json).unwrap();
	assert_eq!(back, ctx);

	let partial: RequestContext =
		serde_json::from_str(r#"{ "host": "example.com" }"#).unwrap();
	assert_eq!(partial.host(), "example.com");
	assert_eq!(partial.scheme(), "http");

	let ty: UrlReferenceType = serde_json::from_str(r#""network_path""#).unwrap();
	assert_eq!(ty, UrlReferenceType::NetworkPath);
}

#[test]
fn invalid_pattern_is_rejected() {
	let mut router = Router::new();
	let config = RouteConfig::new("user", "/users/{user-id}", "Users::show");

	let err = router.add_config(config).unwrap_err();
	assert!(
		matches!(&err, Error::InvalidPattern { pattern, .. } if pattern == "/users/{user-id}")
	);
	assert!(router.routes().is_empty());
}
