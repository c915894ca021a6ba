//! End-to-end helpers: a server process running the `web` package and a
//! headless browser driving it.

pub mod browser;
pub mod test_server;
