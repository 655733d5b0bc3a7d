//! HTTP-based document acquisition.
//!
//! The fetch layer is the only collaborator that touches the network.
//! Everything downstream is a pure function over the fetched text, so the
//! whole pipeline can be exercised against archived documents served from
//! a local mock.

pub mod http_client;

pub use http_client::HttpClient;
