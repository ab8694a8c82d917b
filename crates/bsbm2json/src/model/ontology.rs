//! RDF vocabulary constants for the benchmark dataset.
//!
//! - `bsbm:` (http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/) -- benchmark classes and predicates
//! - `rdf:`, `rdfs:`, `xsd:` -- standard W3C vocabularies
//! - `dc:`, `foaf:`, `rev:` -- provenance, people and review vocabularies

/// Standard RDF/RDFS/XSD terms
pub mod standard {
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    pub const XSD_DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}

/// Dublin Core elements (`dc:` prefix)
pub mod dc {
    pub const PUBLISHER: &str = "http://purl.org/dc/elements/1.1/publisher";
    pub const DATE: &str = "http://purl.org/dc/elements/1.1/date";
    pub const TITLE: &str = "http://purl.org/dc/elements/1.1/title";
}

/// Friend-of-a-friend (`foaf:` prefix)
pub mod foaf {
    pub const PERSON: &str = "http://xmlns.com/foaf/0.1/Person";
    pub const NAME: &str = "http://xmlns.com/foaf/0.1/name";
    pub const MBOX_SHA1SUM: &str = "http://xmlns.com/foaf/0.1/mbox_sha1sum";
    pub const HOMEPAGE: &str = "http://xmlns.com/foaf/0.1/homepage";
}

/// Review vocabulary (`rev:` prefix)
pub mod rev {
    pub const REVIEW: &str = "http://purl.org/stuff/rev#Review";
    pub const REVIEWER: &str = "http://purl.org/stuff/rev#reviewer";
    pub const TEXT: &str = "http://purl.org/stuff/rev#text";
}

/// ISO 3166 country identifiers
pub mod iso3166 {
    pub const NS: &str = "http://downlode.org/rdf/iso-3166/countries#";
}

/// Benchmark vocabulary (`bsbm:` prefix)
pub mod bsbm {
    pub const NS: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/";
    /// Default namespace for instance IRIs.
    pub const INST_NS: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/instances/";

    // Classes
    pub const PRODUCT_TYPE: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/ProductType";
    pub const PRODUCT: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/Product";
    pub const PRODUCT_FEATURE: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/ProductFeature";
    pub const PRODUCER: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/Producer";
    pub const VENDOR: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/Vendor";
    pub const OFFER: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/Offer";

    // Datatypes
    pub const USD: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/USD";

    // Offer predicates
    pub const PRODUCT_PROP: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/product";
    pub const VENDOR_PROP: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/vendor";
    pub const PRICE: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/price";
    pub const VALID_FROM: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/validFrom";
    pub const VALID_TO: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/validTo";
    pub const DELIVERY_DAYS: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/deliveryDays";
    pub const OFFER_WEBPAGE: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/offerWebpage";

    // Product predicates
    pub const PRODUCER_PROP: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/producer";
    pub const PRODUCT_FEATURE_PROP: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/productFeature";

    // Shared
    pub const COUNTRY: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/country";

    // Review predicates
    pub const REVIEW_FOR: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/reviewFor";
    pub const REVIEW_DATE: &str = "http://www4.wiwiss.fu-berlin.de/bizer/bsbm/v01/vocabulary/reviewDate";

    /// `bsbm:productPropertyNumeric{index}` (1-based).
    pub fn product_property_numeric(index: usize) -> String {
        format!("{NS}productPropertyNumeric{index}")
    }

    /// `bsbm:productPropertyTextual{index}` (1-based).
    pub fn product_property_textual(index: usize) -> String {
        format!("{NS}productPropertyTextual{index}")
    }

    /// `bsbm:rating{index}` (1-based).
    pub fn rating(index: usize) -> String {
        format!("{NS}rating{index}")
    }
}
