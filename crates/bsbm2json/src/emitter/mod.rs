pub mod rdf_json;
pub mod sharded;

/// One component of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// Absolute identifier.
    UriRef(String),
    /// Untyped text.
    PlainLiteral(String),
    /// Text with an explicit datatype IRI.
    TypedLiteral { value: String, datatype: String },
    /// Text tagged with a language code.
    LangLiteral { value: String, lang: String },
}

impl Term {
    pub fn uri(value: impl Into<String>) -> Self {
        Term::UriRef(value.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Term::PlainLiteral(value.into())
    }

    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::TypedLiteral {
            value: value.into(),
            datatype: datatype.into(),
        }
    }

    pub fn lang(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Term::LangLiteral {
            value: value.into(),
            lang: lang.into(),
        }
    }
}

/// A subject-predicate-object statement. Subject and predicate are always IRIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}

impl Statement {
    pub fn new(subject: &str, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.to_string(),
            predicate: predicate.into(),
            object,
        }
    }
}

/// Trait for emitting statements in a serialization format.
pub trait TriplesEmitter {
    /// Emit one statement.
    fn emit(&mut self, statement: &Statement);
    /// Return the number of triples emitted so far.
    fn triple_count(&self) -> u64;
}
