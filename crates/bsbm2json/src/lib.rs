//! Serialize BSBM benchmark objects as RDF/JSON statement records.
//!
//! Objects are expanded into ordered statements by [`conversion::converter`],
//! encoded one record per line by [`emitter::rdf_json`], and spread
//! round-robin over output files by [`emitter::sharded`].
//! [`conversion::serializer::JsonSerializer`] ties the pieces together.

pub mod conversion;
pub mod emitter;
pub mod error;
pub mod model;
