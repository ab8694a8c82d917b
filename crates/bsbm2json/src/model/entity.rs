//! Serde model for benchmark domain objects.
//!
//! Objects arrive as JSON, one per record, tagged by a `"kind"` member:
//! `{ "kind": "producer", "nr": 1, "label": "...", ... }`.
//!
//! Design notes:
//! - Field names are camelCase on the wire.
//! - Sparse property slots are arrays with `null` holes; slot `i` (0-based)
//!   is property index `i + 1`.
//! - Links to other entities are plain numbers. The product type parent link
//!   in particular is a lookup key, not an owned reference.
//! - Any tag outside the known eight deserializes to [`BsbmObject::Unknown`].
//! - Timestamps are epoch milliseconds, UTC.

use serde::Deserialize;

/// One object from the generator stream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BsbmObject {
    ProductType(ProductType),
    Offer(Offer),
    Product(Product),
    Person(Person),
    Producer(Producer),
    ProductFeature(ProductFeature),
    Vendor(Vendor),
    Review(Review),
    #[serde(other)]
    Unknown,
}

impl BsbmObject {
    /// Variant name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            BsbmObject::ProductType(_) => "productType",
            BsbmObject::Offer(_) => "offer",
            BsbmObject::Product(_) => "product",
            BsbmObject::Person(_) => "person",
            BsbmObject::Producer(_) => "producer",
            BsbmObject::ProductFeature(_) => "productFeature",
            BsbmObject::Vendor(_) => "vendor",
            BsbmObject::Review(_) => "review",
            BsbmObject::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    pub nr: u32,
    pub label: String,
    pub comment: String,
    /// Parent type number; `None` for the hierarchy root.
    #[serde(default)]
    pub parent: Option<u32>,
    pub publish_date: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub nr: u32,
    pub product: u32,
    pub vendor: u32,
    pub price: f64,
    pub valid_from: i64,
    pub valid_to: i64,
    pub delivery_days: i32,
    pub offer_webpage: String,
    pub publish_date: i64,
}

impl Offer {
    /// Price with exactly two decimals.
    pub fn price_string(&self) -> String {
        format!("{:.2}", self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub nr: u32,
    pub label: String,
    pub comment: String,
    pub product_type: u32,
    pub producer: u32,
    #[serde(default)]
    pub numeric_properties: Vec<Option<i64>>,
    #[serde(default)]
    pub textual_properties: Vec<Option<String>>,
    #[serde(default)]
    pub features: Vec<u32>,
    pub publish_date: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub nr: u32,
    pub name: String,
    pub mbox_sha1sum: String,
    pub country_code: String,
    /// Rating site that published this reviewer.
    pub publisher: u32,
    pub publish_date: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Producer {
    pub nr: u32,
    pub label: String,
    pub comment: String,
    pub homepage: String,
    pub country_code: String,
    pub publish_date: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFeature {
    pub nr: u32,
    pub label: String,
    pub comment: String,
    /// Standardization institution that published this feature.
    pub publisher: u32,
    pub publish_date: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub nr: u32,
    pub label: String,
    pub comment: String,
    pub homepage: String,
    pub country_code: String,
    pub publish_date: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub nr: u32,
    pub product: u32,
    pub producer_of_product: u32,
    /// Reviewer (person) number.
    pub person: u32,
    /// Rating site that published this review.
    pub publisher: u32,
    pub review_date: i64,
    pub title: String,
    pub text: String,
    /// Index into the language table.
    pub language: usize,
    #[serde(default)]
    pub ratings: Vec<Option<i64>>,
    pub publish_date: i64,
}
