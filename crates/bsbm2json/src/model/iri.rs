//! IRI minting for benchmark instances.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::ontology::bsbm;

/// Characters that need percent-encoding in an IRI fragment or path segment.
const IRI_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Generates consistent IRIs for benchmark instances.
///
/// Instance IRIs are grouped by the source that published them, e.g. a
/// product lives under `dataFromProducer{producer}/` and a review under
/// `dataFromRatingSite{site}/`.
#[derive(Debug, Clone)]
pub struct IriMinter {
    instance_ns: String,
}

impl Default for IriMinter {
    fn default() -> Self {
        Self::new(bsbm::INST_NS)
    }
}

impl IriMinter {
    /// Create a minter for the given instance namespace. A trailing `/` is
    /// added when the namespace doesn't end in `/` or `#`.
    pub fn new(instance_ns: &str) -> Self {
        let mut instance_ns = instance_ns.to_string();
        if !instance_ns.ends_with('/') && !instance_ns.ends_with('#') {
            instance_ns.push('/');
        }
        Self { instance_ns }
    }

    pub fn product_type_iri(&self, nr: u32) -> String {
        format!("{}ProductType{nr}", self.instance_ns)
    }

    pub fn product_feature_iri(&self, nr: u32) -> String {
        format!("{}ProductFeature{nr}", self.instance_ns)
    }

    pub fn producer_iri(&self, nr: u32) -> String {
        format!("{}dataFromProducer{nr}/Producer{nr}", self.instance_ns)
    }

    /// IRI for a product, scoped under the producer that published it.
    pub fn product_iri(&self, nr: u32, producer: u32) -> String {
        format!("{}dataFromProducer{producer}/Product{nr}", self.instance_ns)
    }

    pub fn vendor_iri(&self, nr: u32) -> String {
        format!("{}dataFromVendor{nr}/Vendor{nr}", self.instance_ns)
    }

    pub fn offer_iri(&self, nr: u32, vendor: u32) -> String {
        format!("{}dataFromVendor{vendor}/Offer{nr}", self.instance_ns)
    }

    pub fn rating_site_iri(&self, nr: u32) -> String {
        format!("{}dataFromRatingSite{nr}/RatingSite{nr}", self.instance_ns)
    }

    /// IRI for a reviewer, scoped under the rating site that published it.
    pub fn person_iri(&self, nr: u32, rating_site: u32) -> String {
        format!(
            "{}dataFromRatingSite{rating_site}/Reviewer{nr}",
            self.instance_ns
        )
    }

    pub fn review_iri(&self, nr: u32, rating_site: u32) -> String {
        format!(
            "{}dataFromRatingSite{rating_site}/Review{nr}",
            self.instance_ns
        )
    }

    pub fn standardization_institution_iri(&self, nr: u32) -> String {
        format!("{}StandardizationInstitution{nr}", self.instance_ns)
    }
}

/// Country IRI under `namespace`; the code is percent-encoded.
pub fn country_iri(namespace: &str, code: &str) -> String {
    format!("{namespace}{}", utf8_percent_encode(code, IRI_ENCODE_SET))
}
