//! Terraform Registry Access
//!
//! Client and response types for the registry's v2 HTTP API
//! (<https://registry.terraform.io>). The lookup chain is:
//!
//! 1. Provider listing filtered by name in the hashicorp namespace
//! 2. Provider detail with provider-versions included
//! 3. Provider-docs listing filtered by version id, category and slug
//! 4. The doc's full body
//!
//! All calls are blocking GETs sharing one connection pool; no caching, no
//! retries. The first failure aborts the chain.

pub mod client;
pub mod error;
pub mod types;

pub use client::{HttpClient, RegistryClient, ReqwestClient};
pub use error::RegistryError;

#[cfg(test)]
pub use client::MockHttpClient;
