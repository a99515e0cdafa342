//! # IO Module
//!
//! Conversion between the wire DTOs in the `shared` crate and the domain
//! models. Fetching and persisting rows belongs to the remote store; this
//! layer only maps what it returns.

pub mod mappers;
