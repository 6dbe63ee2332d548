//! Infrastructure adapters. Implement outbound ports and the CLI surface.
//!
//! Record sources, filesystem export. Map errors to DomainError.

pub mod cli;
pub mod export;
pub mod source;
