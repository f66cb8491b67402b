//! HTTP server module.
//!
//! Plain HTTP only; TLS is terminated by the ingress in front of the pod.
//! The server shuts down gracefully on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
