pub mod dates;
pub mod entity;
pub mod iri;
pub mod ontology;
