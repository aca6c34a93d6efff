//! # IO Module
//!
//! The adapter layer between HTTP and the domain. It decodes wire requests
//! into the request types, hands them to the endpoint pipelines, and encodes
//! outcomes (or classified errors) back into JSON responses.

pub mod rest;

pub use rest::*;
