//! Cross-reference lookups the converters need beyond the object itself.

use std::collections::HashMap;

use crate::model::entity::{BsbmObject, ProductType};
use crate::model::iri::country_iri;
use crate::model::ontology::iso3166;

/// Language codes indexed by a review's `language` field.
pub const DEFAULT_LANGUAGES: &[&str] = &["en", "ja", "zh", "de", "fr", "es", "ru", "ko", "it", "pt"];

/// Lookups into tables owned by the object generator.
pub trait Resolver {
    /// Producer that published the given product.
    fn producer_of_product(&self, product: u32) -> Option<u32>;
    /// Language code at the given index of the language table.
    fn language_code(&self, index: usize) -> Option<&str>;
    /// Product type by number; used to walk parent links.
    fn product_type(&self, nr: u32) -> Option<&ProductType>;
    /// Identifier URI of the country with the given code.
    fn country_iri(&self, code: &str) -> Option<String>;
}

/// In-memory [`Resolver`] indexed from a batch of objects.
#[derive(Debug, Clone)]
pub struct Catalog {
    product_types: HashMap<u32, ProductType>,
    product_producers: HashMap<u32, u32>,
    languages: Vec<String>,
    countries: HashMap<String, String>,
    /// Fallback for codes without an explicit entry.
    country_ns: Option<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            product_types: HashMap::new(),
            product_producers: HashMap::new(),
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            countries: HashMap::new(),
            country_ns: Some(iso3166::NS.to_string()),
        }
    }

    /// Index every product type and product in `objects`.
    pub fn from_objects(objects: &[BsbmObject]) -> Self {
        let mut catalog = Self::new();
        for object in objects {
            catalog.index(object);
        }
        catalog
    }

    /// Replace the language table.
    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    /// Replace the namespace unlisted country codes resolve under. With
    /// `None`, only codes added through [`add_country`](Self::add_country)
    /// resolve.
    pub fn with_country_namespace(mut self, namespace: Option<String>) -> Self {
        self.country_ns = namespace;
        self
    }

    pub fn add_country(&mut self, code: impl Into<String>, iri: impl Into<String>) {
        self.countries.insert(code.into(), iri.into());
    }

    pub fn index(&mut self, object: &BsbmObject) {
        match object {
            BsbmObject::ProductType(pt) => self.add_product_type(pt.clone()),
            BsbmObject::Product(p) => self.add_product(p.nr, p.producer),
            _ => {}
        }
    }

    pub fn add_product_type(&mut self, product_type: ProductType) {
        self.product_types.insert(product_type.nr, product_type);
    }

    pub fn add_product(&mut self, product: u32, producer: u32) {
        self.product_producers.insert(product, producer);
    }

    pub fn product_type_count(&self) -> usize {
        self.product_types.len()
    }
}

impl Resolver for Catalog {
    fn producer_of_product(&self, product: u32) -> Option<u32> {
        self.product_producers.get(&product).copied()
    }

    fn language_code(&self, index: usize) -> Option<&str> {
        self.languages.get(index).map(String::as_str)
    }

    fn product_type(&self, nr: u32) -> Option<&ProductType> {
        self.product_types.get(&nr)
    }

    fn country_iri(&self, code: &str) -> Option<String> {
        if let Some(iri) = self.countries.get(code) {
            return Some(iri.clone());
        }
        self.country_ns.as_deref().map(|ns| country_iri(ns, code))
    }
}
