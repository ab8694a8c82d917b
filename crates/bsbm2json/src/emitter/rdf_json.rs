//! RDF/JSON statement records.
//!
//! Each statement becomes one line:
//!
//! ```text
//! {"subject":{"type":"uri","value":"…"},"predicate":{"type":"uri","value":"…"},"object":{…}}
//! ```
//!
//! The `encode_*` functions produce the members of one term object, without
//! the surrounding braces.

use super::{Statement, Term, TriplesEmitter};

/// How values are inserted into the JSON text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralEscaping {
    /// Insert values exactly as given. Matches existing benchmark corpora
    /// byte for byte, but a `"` or `\` in a value breaks the record.
    #[default]
    Verbatim,
    /// Escape values as JSON strings.
    Json,
}

impl LiteralEscaping {
    fn quote(self, value: &str) -> String {
        match self {
            LiteralEscaping::Verbatim => format!("\"{value}\""),
            // A `str` always serializes.
            LiteralEscaping::Json => serde_json::to_string(value).unwrap_or_default(),
        }
    }
}

pub fn encode_uri_ref(uri: &str, escaping: LiteralEscaping) -> String {
    format!("\"type\":\"uri\",\"value\":{}", escaping.quote(uri))
}

/// URI reference for `namespace` + `local_name`; no separator is inserted.
pub fn encode_uri_ref_ns(namespace: &str, local_name: &str, escaping: LiteralEscaping) -> String {
    encode_uri_ref(&format!("{namespace}{local_name}"), escaping)
}

pub fn encode_literal(text: &str, escaping: LiteralEscaping) -> String {
    format!("\"type\":\"literal\",\"value\":{}", escaping.quote(text))
}

pub fn encode_typed_literal(text: &str, datatype: &str, escaping: LiteralEscaping) -> String {
    format!(
        "\"type\":\"typed-literal\",\"value\":{},\"datatype\":{}",
        escaping.quote(text),
        escaping.quote(datatype)
    )
}

pub fn encode_lang_literal(text: &str, language: &str, escaping: LiteralEscaping) -> String {
    format!(
        "\"type\":\"literal\",\"value\":{},\"lang\":{}",
        escaping.quote(text),
        escaping.quote(language)
    )
}

pub fn encode_term(term: &Term, escaping: LiteralEscaping) -> String {
    match term {
        Term::UriRef(uri) => encode_uri_ref(uri, escaping),
        Term::PlainLiteral(text) => encode_literal(text, escaping),
        Term::TypedLiteral { value, datatype } => encode_typed_literal(value, datatype, escaping),
        Term::LangLiteral { value, lang } => encode_lang_literal(value, lang, escaping),
    }
}

/// RDF/JSON emitter. Buffers the records of the current object in memory
/// until [`take_output`](Self::take_output) hands them to a writer.
#[derive(Debug, Default)]
pub struct RdfJsonEmitter {
    buffer: String,
    count: u64,
    escaping: LiteralEscaping,
}

impl RdfJsonEmitter {
    pub fn new(escaping: LiteralEscaping) -> Self {
        Self {
            buffer: String::new(),
            count: 0,
            escaping,
        }
    }

    /// Wrap three encoded terms into one newline-terminated record and count it.
    pub fn assemble_statement(&mut self, subject: &str, predicate: &str, object: &str) -> String {
        self.count += 1;
        format!("{{\"subject\":{{{subject}}},\"predicate\":{{{predicate}}},\"object\":{{{object}}}}}\n")
    }

    /// Drain the records emitted since the last call.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

impl TriplesEmitter for RdfJsonEmitter {
    fn emit(&mut self, statement: &Statement) {
        let subject = encode_uri_ref(&statement.subject, self.escaping);
        let predicate = encode_uri_ref(&statement.predicate, self.escaping);
        let object = encode_term(&statement.object, self.escaping);
        let record = self.assemble_statement(&subject, &predicate, &object);
        self.buffer.push_str(&record);
    }

    fn triple_count(&self) -> u64 {
        self.count
    }
}
