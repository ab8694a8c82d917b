//! Driver loop: conversion, counting and shard placement together.

use std::path::Path;

use bsbm2json::conversion::loader;
use bsbm2json::conversion::resolver::Catalog;
use bsbm2json::conversion::serializer::{ConversionOptions, JsonSerializer};
use bsbm2json::emitter::rdf_json::LiteralEscaping;
use bsbm2json::emitter::sharded::ShardedWriter;
use bsbm2json::error::SerializeError;
use bsbm2json::model::entity::{BsbmObject, Producer};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_fixture() -> Vec<BsbmObject> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/objects.jsonl");
    loader::load_objects(&path).expect("Failed to load fixture")
}

fn in_memory(shards: usize, options: ConversionOptions) -> JsonSerializer<Vec<u8>> {
    let writer = ShardedWriter::from_sinks(vec![Vec::new(); shards]).unwrap();
    JsonSerializer::new(writer, options)
}

fn finish(serializer: JsonSerializer<Vec<u8>>) -> Vec<String> {
    serializer
        .serialize()
        .unwrap()
        .into_iter()
        .map(|s| String::from_utf8(s).unwrap())
        .collect()
}

fn producer(nr: u32, label: &str) -> BsbmObject {
    BsbmObject::Producer(Producer {
        nr,
        label: label.into(),
        comment: "c".into(),
        homepage: format!("http://producer{nr}.example/"),
        country_code: "US".into(),
        publish_date: 1_212_278_400_000,
    })
}

fn subjects(shard: &str) -> Vec<String> {
    shard
        .lines()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).expect("valid JSON line");
            v["subject"]["value"].as_str().unwrap().to_string()
        })
        .collect()
}

/// Triples per fixture object, in fixture order (unknown object excluded).
const FIXTURE_COUNTS: [usize; 10] = [5, 6, 6, 5, 7, 11, 7, 10, 6, 10];

// ---------------------------------------------------------------------------
// Counting
// ---------------------------------------------------------------------------

#[test]
fn zero_objects_leave_counter_at_zero() {
    let mut ser = in_memory(1, ConversionOptions::default());
    let none: Vec<BsbmObject> = Vec::new();
    assert_eq!(ser.gather_data(&none, &Catalog::new()).unwrap(), 0);
    assert_eq!(ser.triples_generated(), 0);
    assert_eq!(finish(ser), vec![String::new()]);
}

#[test]
fn counter_is_sum_of_per_object_counts() {
    let objects = load_fixture();
    let catalog = Catalog::from_objects(&objects);
    let mut ser = in_memory(1, ConversionOptions::default());
    assert_eq!(ser.gather_data(&objects, &catalog).unwrap(), 10);
    let expected: usize = FIXTURE_COUNTS.iter().sum();
    assert_eq!(ser.triples_generated(), expected as u64);

    let out = finish(ser);
    assert_eq!(out[0].lines().count(), expected);
}

#[test]
fn forward_chaining_adds_ancestor_types() {
    let objects = load_fixture();
    let catalog = Catalog::from_objects(&objects);
    let options = ConversionOptions {
        forward_chaining: true,
        ..ConversionOptions::default()
    };
    let mut ser = in_memory(1, options);
    ser.gather_data(&objects, &catalog).unwrap();
    // The fixture product sits two levels below the root type.
    assert_eq!(ser.triples_generated(), 75);
}

#[test]
fn counter_accumulates_across_batches() {
    let mut ser = in_memory(2, ConversionOptions::default());
    let catalog = Catalog::new();
    ser.gather_data(&[producer(1, "a")], &catalog).unwrap();
    ser.gather_data(&[producer(2, "b"), producer(3, "c")], &catalog).unwrap();
    assert_eq!(ser.triples_generated(), 21);
    assert_eq!(ser.current_shard(), 1);
}

// ---------------------------------------------------------------------------
// Sharding
// ---------------------------------------------------------------------------

#[test]
fn object_i_goes_to_shard_i_mod_d() {
    let objects = load_fixture();
    let catalog = Catalog::from_objects(&objects);
    let mut ser = in_memory(3, ConversionOptions::default());
    ser.gather_data(&objects, &catalog).unwrap();
    let out = finish(ser);

    for (d, shard) in out.iter().enumerate() {
        let expected: usize = FIXTURE_COUNTS
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 3 == d)
            .map(|(_, c)| c)
            .sum();
        assert_eq!(shard.lines().count(), expected, "shard {d}");
    }

    // Each object's statements are contiguous and in one shard only.
    let first = subjects(&out[0]);
    let mut seen = Vec::new();
    for s in first {
        if seen.last() != Some(&s) {
            assert!(!seen.contains(&s), "{s} is split within shard 0");
            seen.push(s);
        }
    }
    for other in &out[1..] {
        for s in subjects(other) {
            assert!(!seen.contains(&s), "{s} spans several shards");
        }
    }
}

#[test]
fn unknown_objects_are_skipped_without_advancing() {
    let catalog = Catalog::new();
    let mut ser = in_memory(2, ConversionOptions::default());
    let objects = vec![producer(1, "a"), BsbmObject::Unknown, producer(2, "b")];
    assert_eq!(ser.gather_data(&objects, &catalog).unwrap(), 2);
    assert_eq!(ser.current_shard(), 0);

    let out = finish(ser);
    assert!(subjects(&out[0]).iter().all(|s| s.ends_with("Producer1")));
    assert!(subjects(&out[1]).iter().all(|s| s.ends_with("Producer2")));
}

#[test]
fn write_string_goes_to_current_shard() {
    let catalog = Catalog::new();
    let mut ser = in_memory(2, ConversionOptions::default());
    ser.gather_data(&[producer(1, "a")], &catalog).unwrap();
    ser.write_string("# trailer\n").unwrap();
    assert_eq!(ser.current_shard(), 1);
    let out = finish(ser);
    assert_eq!(out[1], "# trailer\n");
}

// ---------------------------------------------------------------------------
// Output text
// ---------------------------------------------------------------------------

#[test]
fn converting_twice_is_byte_identical() {
    let objects = load_fixture();
    let catalog = Catalog::from_objects(&objects);
    let mut ser = in_memory(1, ConversionOptions::default());
    for object in &objects {
        let first = ser.convert(object, &catalog).unwrap();
        let second = ser.convert(object, &catalog).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn verbatim_mode_keeps_quotes_unescaped() {
    let catalog = Catalog::new();
    let mut ser = in_memory(1, ConversionOptions::default());
    let text = ser
        .convert(&producer(1, "Acme \"Best\""), &catalog)
        .unwrap()
        .unwrap();
    assert!(text.contains(r#""value":"Acme "Best"""#));
}

#[test]
fn json_mode_output_always_parses() {
    let catalog = Catalog::new();
    let options = ConversionOptions {
        escaping: LiteralEscaping::Json,
        ..ConversionOptions::default()
    };
    let mut ser = in_memory(1, options);
    ser.gather_data(&[producer(1, "Acme \"Best\" \\ Co")], &catalog).unwrap();
    let out = finish(ser);
    let label: Vec<serde_json::Value> = out[0]
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid JSON"))
        .filter(|v: &serde_json::Value| {
            v["predicate"]["value"] == "http://www.w3.org/2000/01/rdf-schema#label"
        })
        .collect();
    assert_eq!(label.len(), 1);
    assert_eq!(label[0]["object"]["value"], "Acme \"Best\" \\ Co");
}

#[test]
fn custom_instance_namespace_is_used_for_subjects() {
    let catalog = Catalog::new();
    let options = ConversionOptions {
        instance_ns: "http://example.org/inst/".into(),
        ..ConversionOptions::default()
    };
    let mut ser = in_memory(1, options);
    ser.gather_data(&[producer(1, "a")], &catalog).unwrap();
    let out = finish(ser);
    assert!(subjects(&out[0])
        .iter()
        .all(|s| s == "http://example.org/inst/dataFromProducer1/Producer1"));
}

#[test]
fn conversion_failure_writes_nothing_and_counts_nothing() {
    let objects = load_fixture();
    let mut ser = in_memory(1, ConversionOptions::default());
    // An empty catalog cannot resolve the offer's product.
    let offer: Vec<BsbmObject> = objects
        .into_iter()
        .filter(|o| o.kind() == "offer")
        .collect();
    let err = ser.gather_data(&offer, &Catalog::new()).unwrap_err();
    assert!(matches!(err, SerializeError::UnresolvedReference(_)));
    assert_eq!(ser.triples_generated(), 0);
    assert_eq!(finish(ser), vec![String::new()]);
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

#[test]
fn create_writes_sharded_files() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("dataset");
    let objects = load_fixture();
    let catalog = Catalog::from_objects(&objects);

    let mut ser = JsonSerializer::create(&base, 12, ConversionOptions::default()).unwrap();
    ser.gather_data(&objects, &catalog).unwrap();
    let total = ser.triples_generated();
    ser.serialize().unwrap();

    let mut lines = 0;
    for i in 1..=12 {
        let path = dir.path().join(format!("dataset{i:02}.json"));
        let text = std::fs::read_to_string(&path).unwrap();
        lines += text.lines().count();
        // Ten objects over twelve shards: the last two stay empty.
        assert_eq!(text.is_empty(), i > 10, "{}", path.display());
    }
    assert_eq!(lines as u64, total);
}
