//! e-Boekhouden SDK for Rust.
//!
//! A typed client for the e-Boekhouden.nl SOAP accounting API: session
//! authentication, typed request/response marshaling, service-reported
//! error detection, and bounded retry of transient transport failures.
//!
//! # What This SDK Provides
//!
//! - High-level client: [`EboekhoudenClient`]
//! - Strong domain models for relations, invoices, ledger accounts,
//!   mutations, cost centers, open items, and balances
//! - A [`Transport`] seam for substituting the wire layer in tests
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use eboekhouden_sdk::{ClientOptions, EboekhoudenClient, RelationFilter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), eboekhouden_sdk::EboekhoudenError> {
//!     let options = ClientOptions::new("username", "code1", "code2");
//!     let client = EboekhoudenClient::new(options);
//!
//!     let relations = client.relations(RelationFilter::default()).await?;
//!     for relation in relations {
//!         println!("{}: {}", relation.code, relation.company);
//!     }
//!
//!     client.close_session().await;
//!     Ok(())
//! }
//! ```
//!
//! # Recommended Workflow
//!
//! 1. Create a [`ClientOptions`] with your username and both security
//!    codes; accountants add the administration GUID to open a
//!    sub-session.
//! 2. Create an [`EboekhoudenClient`]. The transport handle and session
//!    are acquired lazily on first use; call
//!    [`EboekhoudenClient::init`] to surface credential problems early.
//! 3. Call the domain operations. Each one acquires the cached session,
//!    performs its SOAP call with bounded retry, and returns typed
//!    results.
//! 4. Register [`EboekhoudenClient::close_session`] in your shutdown
//!    path — the client is cheap to clone, so hand a clone to the hook.
//!
//! # Logging
//!
//! This crate emits debug-level logs through the
//! [`log`](https://docs.rs/log/) facade for transport and client calls.
//! Configure any compatible logger in your binary, then set
//! `RUST_LOG=debug` to inspect request flow. Enabling the `debug`
//! construction option additionally dumps every raw result envelope.
//!
//! # Errors
//!
//! All fallible operations return [`EboekhoudenError`]. Transport
//! failures are retried up to the configured ceiling (default 3, fixed
//! 1000 ms delay) before surfacing; service-reported errors
//! ([`EboekhoudenError::RemoteOperation`]), missing payloads, and
//! authentication failures surface immediately.
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod soap;
pub mod transport;

// Re-export primary types for convenience.
pub use client::EboekhoudenClient;
pub use config::{ClientOptions, Credentials, DEFAULT_ENDPOINT, DEFAULT_RETRIES};
pub use errors::EboekhoudenError;
pub use models::*;
pub use soap::SoapAction;
pub use transport::{HttpTransport, Transport};
