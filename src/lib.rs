#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod params;
pub use params::Params;

pub mod routes;
pub use routes::{Collection, Handler, Route, RouteMatch};

pub mod parsers;

pub mod generator;
pub use generator::{
	ContextOverrides, RequestContext, UrlGenerator, UrlReferenceType,
};

mod router;
pub use router::{normalize_uri, Router};

mod config;
pub use config::RouteConfig;

pub mod dispatch;

pub mod error;
pub use error::{Error, GenerateError, Result};

pub use http;
