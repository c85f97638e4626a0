pub mod config;
pub mod control;
pub mod debounce;
pub mod geocoding;
pub mod language;
pub mod localization;
pub mod logging;
pub mod marker;
pub mod model;
pub mod query;
pub mod runtime;
pub mod session;
pub mod visibility;
