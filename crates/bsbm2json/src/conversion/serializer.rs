//! The RDF/JSON serializer: converts objects and spreads them over shards.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::emitter::rdf_json::{LiteralEscaping, RdfJsonEmitter};
use crate::emitter::sharded::ShardedWriter;
use crate::emitter::TriplesEmitter;
use crate::error::Result;
use crate::model::entity::BsbmObject;
use crate::model::iri::IriMinter;
use crate::model::ontology::bsbm;

use super::converter::ConversionContext;
use super::resolver::Resolver;

/// Options fixed for the duration of a run.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    pub instance_ns: String,
    pub forward_chaining: bool,
    pub escaping: LiteralEscaping,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            instance_ns: bsbm::INST_NS.to_string(),
            forward_chaining: false,
            escaping: LiteralEscaping::Verbatim,
        }
    }
}

/// Converts benchmark objects into RDF/JSON records and writes each object
/// to the next shard in round-robin order.
pub struct JsonSerializer<W: Write> {
    writer: ShardedWriter<W>,
    emitter: RdfJsonEmitter,
    iris: IriMinter,
    forward_chaining: bool,
}

impl JsonSerializer<BufWriter<File>> {
    /// Open `shards` output files under `base` (see [`shard_paths`](crate::emitter::sharded::shard_paths)).
    pub fn create(base: &Path, shards: usize, options: ConversionOptions) -> Result<Self> {
        Ok(Self::new(ShardedWriter::create(base, shards)?, options))
    }
}

impl<W: Write> JsonSerializer<W> {
    pub fn new(writer: ShardedWriter<W>, options: ConversionOptions) -> Self {
        Self {
            writer,
            emitter: RdfJsonEmitter::new(options.escaping),
            iris: IriMinter::new(&options.instance_ns),
            forward_chaining: options.forward_chaining,
        }
    }

    /// Serialize one object to RDF/JSON text without writing it.
    ///
    /// Returns `None` for unknown objects. The triple count only moves once
    /// the whole object has converted.
    pub fn convert(&mut self, object: &BsbmObject, resolver: &dyn Resolver) -> Result<Option<String>> {
        let ctx = ConversionContext::new(&self.iris, resolver, self.forward_chaining);
        let Some(statements) = object.to_statements(&ctx)? else {
            return Ok(None);
        };
        for statement in &statements {
            self.emitter.emit(statement);
        }
        Ok(Some(self.emitter.take_output()))
    }

    /// Convert and write a batch of objects in order. Unknown objects are
    /// skipped and do not advance the shard cursor.
    ///
    /// Returns the number of objects written.
    pub fn gather_data<'o, I>(&mut self, objects: I, resolver: &dyn Resolver) -> Result<usize>
    where
        I: IntoIterator<Item = &'o BsbmObject>,
    {
        let mut written = 0;
        let mut skipped = 0;
        for object in objects {
            match self.convert(object, resolver)? {
                Some(text) => {
                    self.writer.write_object(&text)?;
                    written += 1;
                }
                None => skipped += 1,
            }
        }
        debug!(written, skipped, triples = self.triples_generated(), "gathered batch");
        Ok(written)
    }

    /// Write text to the current shard without advancing the cursor.
    pub fn write_string(&mut self, text: &str) -> Result<()> {
        self.writer.write_raw(text)
    }

    pub fn triples_generated(&self) -> u64 {
        self.emitter.triple_count()
    }

    pub fn current_shard(&self) -> usize {
        self.writer.current_shard()
    }

    pub fn shard_count(&self) -> usize {
        self.writer.shard_count()
    }

    /// Flush and close every shard. Returns the sinks for inspection.
    pub fn serialize(self) -> Result<Vec<W>> {
        let triples = self.triples_generated();
        let shards = self.writer.shard_count();
        let sinks = self.writer.finish()?;
        info!(triples, shards, "serialization finished");
        Ok(sinks)
    }
}
