//! Clients for external collaborators.
//!
//! Each client wraps a reqwest HTTP client with a bounded timeout; a timeout
//! or transport failure surfaces as the collaborator's named
//! [`ExternalError`](crate::server::error::external::ExternalError) variant.

pub mod llm;
pub mod maps;
pub mod storage;
