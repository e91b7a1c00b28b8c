//! Generic list-query engine shared by every listing endpoint.
//!
//! A raw query string is classified into a [`value_objects::ListQuery`]
//! (filter, projection, sort, pagination window, relation expansion), run
//! against a [`ports::Collection`], and wrapped in a
//! [`value_objects::ResultEnvelope`].

pub mod ports;
pub mod services;
pub mod value_objects;
