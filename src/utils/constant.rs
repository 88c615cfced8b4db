//! # Application Constants
//!
//! Route paths, fixed response bodies and startup defaults. None of these
//! change at runtime.

use std::net::{IpAddr, Ipv4Addr};

/// Path of the greeting endpoint.
pub const ROOT_PATH: &str = "/";

/// Path of the health endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Body returned by `GET /`.
pub const HELLO_MESSAGE: &str = "Hello World! Spring Boot application is running successfully!";

/// Body returned by `GET /health`.
pub const HEALTH_MESSAGE: &str = "Application is healthy!";

/// Listen address used when `APP_HOST` is unset.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Listen port used when no port variable is set.
pub const DEFAULT_PORT: u16 = 8080;

/// Tracing filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "hello_service=info,tower_http=info";

/// Header carrying a caller-supplied request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";
