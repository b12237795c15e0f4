//! Browser and HTTP helpers for end-to-end tests against a running web server.

pub mod browser;
pub mod test_server;
