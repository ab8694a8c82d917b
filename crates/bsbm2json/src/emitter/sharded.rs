//! Round-robin distribution of serialized objects over output files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SerializeError};

/// Output file paths for `count` shards of `base`.
///
/// A single shard is written to `{base}.json`. Several shards get a 1-based,
/// zero-padded index as wide as the largest index: `{base}01.json` ..
/// `{base}12.json` for twelve shards.
pub fn shard_paths(base: &Path, count: usize) -> Result<Vec<PathBuf>> {
    if count == 0 {
        return Err(SerializeError::NoDestinations);
    }
    let mut base = base.as_os_str().to_os_string();
    if count == 1 {
        base.push(".json");
        return Ok(vec![PathBuf::from(base)]);
    }
    let width = count.to_string().len();
    Ok((1..=count)
        .map(|i| {
            let mut path = base.clone();
            path.push(format!("{i:0width$}.json"));
            PathBuf::from(path)
        })
        .collect())
}

/// Owns the output sinks for one run and hands each object to the next one.
///
/// The cursor advances once per object, never per statement, so an object's
/// records always land in a single shard.
pub struct ShardedWriter<W: Write> {
    sinks: Vec<W>,
    current: usize,
}

impl ShardedWriter<BufWriter<File>> {
    /// Create every shard file for `base`. Fails on the first file that
    /// cannot be created.
    pub fn create(base: &Path, count: usize) -> Result<Self> {
        let mut sinks = Vec::with_capacity(count);
        for path in shard_paths(base, count)? {
            let file = File::create(&path).map_err(|source| SerializeError::Open {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "opened shard");
            sinks.push(BufWriter::new(file));
        }
        Self::from_sinks(sinks)
    }
}

impl<W: Write> ShardedWriter<W> {
    pub fn from_sinks(sinks: Vec<W>) -> Result<Self> {
        if sinks.is_empty() {
            return Err(SerializeError::NoDestinations);
        }
        Ok(Self { sinks, current: 0 })
    }

    pub fn shard_count(&self) -> usize {
        self.sinks.len()
    }

    /// Index of the shard that receives the next write.
    pub fn current_shard(&self) -> usize {
        self.current
    }

    /// Append one object's records to the current shard, then move to the next.
    pub fn write_object(&mut self, text: &str) -> Result<()> {
        self.write_raw(text)?;
        self.current = (self.current + 1) % self.sinks.len();
        Ok(())
    }

    /// Append text to the current shard without moving the cursor.
    pub fn write_raw(&mut self, text: &str) -> Result<()> {
        let shard = self.current;
        self.sinks[shard]
            .write_all(text.as_bytes())
            .map_err(|source| SerializeError::Write { shard, source })
    }

    /// Flush every shard in order and hand the sinks back.
    pub fn finish(mut self) -> Result<Vec<W>> {
        for (shard, sink) in self.sinks.iter_mut().enumerate() {
            sink.flush()
                .map_err(|source| SerializeError::Close { shard, source })?;
            debug!(shard, "closed shard");
        }
        Ok(self.sinks)
    }
}
