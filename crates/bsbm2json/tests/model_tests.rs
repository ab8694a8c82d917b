use bsbm2json::conversion::loader::{self, LoadError};
use bsbm2json::error::SerializeError;
use bsbm2json::model::dates::{format_date, format_date_time};
use bsbm2json::model::entity::BsbmObject;
use bsbm2json::model::iri::{country_iri, IriMinter};
use bsbm2json::model::ontology::bsbm;
use std::path::Path;

const INST: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/instances/";

// --- Instance IRIs ---

#[test]
fn default_minter_uses_benchmark_instances() {
    let m = IriMinter::default();
    assert_eq!(m.producer_iri(1), format!("{INST}dataFromProducer1/Producer1"));
}

#[test]
fn producer_and_product_iris() {
    let m = IriMinter::default();
    assert_eq!(m.producer_iri(4), format!("{INST}dataFromProducer4/Producer4"));
    assert_eq!(m.product_iri(17, 4), format!("{INST}dataFromProducer4/Product17"));
}

#[test]
fn vendor_and_offer_iris() {
    let m = IriMinter::default();
    assert_eq!(m.vendor_iri(2), format!("{INST}dataFromVendor2/Vendor2"));
    assert_eq!(m.offer_iri(9, 2), format!("{INST}dataFromVendor2/Offer9"));
}

#[test]
fn rating_site_iris() {
    let m = IriMinter::default();
    assert_eq!(m.rating_site_iri(3), format!("{INST}dataFromRatingSite3/RatingSite3"));
    assert_eq!(m.person_iri(5, 3), format!("{INST}dataFromRatingSite3/Reviewer5"));
    assert_eq!(m.review_iri(6, 3), format!("{INST}dataFromRatingSite3/Review6"));
}

#[test]
fn type_feature_and_institution_iris() {
    let m = IriMinter::default();
    assert_eq!(m.product_type_iri(12), format!("{INST}ProductType12"));
    assert_eq!(m.product_feature_iri(7), format!("{INST}ProductFeature7"));
    assert_eq!(
        m.standardization_institution_iri(1),
        format!("{INST}StandardizationInstitution1")
    );
}

#[test]
fn custom_namespace_gets_trailing_slash() {
    let m = IriMinter::new("http://example.org/data");
    assert_eq!(m.product_type_iri(1), "http://example.org/data/ProductType1");
    let hash = IriMinter::new("http://example.org/data#");
    assert_eq!(hash.product_type_iri(1), "http://example.org/data#ProductType1");
}

#[test]
fn country_iri_percent_encodes_odd_codes() {
    let ns = "http://downlode.org/rdf/iso-3166/countries#";
    assert_eq!(country_iri(ns, "US"), "http://downlode.org/rdf/iso-3166/countries#US");
    assert_eq!(country_iri(ns, "A B"), "http://downlode.org/rdf/iso-3166/countries#A%20B");
}

#[test]
fn parameterised_predicates_are_one_based_names() {
    assert_eq!(bsbm::product_property_numeric(4), format!("{}productPropertyNumeric4", bsbm::NS));
    assert_eq!(bsbm::product_property_textual(1), format!("{}productPropertyTextual1", bsbm::NS));
    assert_eq!(bsbm::rating(2), format!("{}rating2", bsbm::NS));
}

// --- Dates ---

#[test]
fn date_of_epoch_millis() {
    assert_eq!(format_date(1_212_278_400_000).unwrap(), "2008-06-01");
}

#[test]
fn date_time_keeps_time_of_day() {
    assert_eq!(
        format_date_time(1_213_963_200_000).unwrap(),
        "2008-06-20T12:00:00"
    );
}

#[test]
fn out_of_range_timestamp_is_an_error() {
    assert!(matches!(
        format_date(i64::MAX),
        Err(SerializeError::InvalidTimestamp(i64::MAX))
    ));
}

// --- Loading ---

fn fixture_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/objects.jsonl")
}

#[test]
fn load_fixture_objects() {
    let objects = loader::load_objects(&fixture_path()).expect("Failed to load fixture");
    assert_eq!(objects.len(), 11);
    let kinds: Vec<&str> = objects.iter().map(BsbmObject::kind).collect();
    for kind in [
        "productType",
        "productFeature",
        "producer",
        "product",
        "vendor",
        "offer",
        "person",
        "review",
    ] {
        assert!(kinds.contains(&kind), "fixture should contain a {kind}");
    }
    assert_eq!(objects.last(), Some(&BsbmObject::Unknown));
}

#[test]
fn sparse_slots_keep_their_holes() {
    let objects = loader::load_objects(&fixture_path()).unwrap();
    let product = objects
        .iter()
        .find_map(|o| match o {
            BsbmObject::Product(p) => Some(p),
            _ => None,
        })
        .expect("fixture product");
    assert_eq!(product.numeric_properties, vec![Some(5), None, None, Some(3)]);
    assert_eq!(product.textual_properties, vec![Some("red".to_string()), None]);
}

#[test]
fn parse_json_array_input() {
    let objects = loader::parse_objects(
        r#"[{"kind":"productType","nr":1,"label":"a","comment":"b","publishDate":0},
            {"kind":"somethingElse"}]"#,
    )
    .unwrap();
    assert_eq!(objects.len(), 2);
    assert!(matches!(&objects[0], BsbmObject::ProductType(pt) if pt.parent.is_none()));
    assert_eq!(objects[1], BsbmObject::Unknown);
}

#[test]
fn parse_error_reports_line() {
    let err = loader::parse_objects("{\"kind\":\"unknownKind\"}\n\n{not json}\n").unwrap_err();
    assert!(matches!(err, LoadError::Json { line: 3, .. }), "got {err}");
}

#[test]
fn load_nonexistent_file_gives_error() {
    let result = loader::load_objects(Path::new("/nonexistent/objects.jsonl"));
    assert!(matches!(result, Err(LoadError::Io(_))));
}
