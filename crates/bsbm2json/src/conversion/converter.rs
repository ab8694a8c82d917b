//! Statement schedules for each kind of benchmark object.
//!
//! Every object expands to a fixed, ordered list of [`Statement`]s whose
//! subject is the object's own IRI. The `rdf:type` assertion always comes
//! first and `dc:publisher` / `dc:date` always come last. Downstream consumers
//! rely on that order, so the schedules below must not be rearranged.

use crate::emitter::{Statement, Term};
use crate::error::{Result, SerializeError};
use crate::model::dates::{format_date, format_date_time};
use crate::model::entity::{
    BsbmObject, Offer, Person, Producer, Product, ProductFeature, ProductType, Review, Vendor,
};
use crate::model::iri::IriMinter;
use crate::model::ontology::{bsbm, dc, foaf, rev, standard};

use super::resolver::Resolver;

/// Upper bound on product type parent links followed in forward-chaining mode.
pub const MAX_TYPE_DEPTH: usize = 64;

/// Everything a conversion may consult besides the object itself.
pub struct ConversionContext<'a> {
    pub iris: &'a IriMinter,
    pub resolver: &'a dyn Resolver,
    /// Assert every ancestor product type on a product, not just the direct one.
    pub forward_chaining: bool,
}

impl<'a> ConversionContext<'a> {
    pub fn new(iris: &'a IriMinter, resolver: &'a dyn Resolver, forward_chaining: bool) -> Self {
        Self {
            iris,
            resolver,
            forward_chaining,
        }
    }
}

/// Conversion of one domain object into its ordered statements.
pub trait ToStatements {
    /// The IRI every statement about this object uses as subject.
    fn subject_iri(&self, ctx: &ConversionContext<'_>) -> String;
    /// The object's statements, in schedule order.
    fn to_statements(&self, ctx: &ConversionContext<'_>) -> Result<Vec<Statement>>;
}

impl BsbmObject {
    /// Convert a known object; `None` for [`BsbmObject::Unknown`].
    pub fn to_statements(&self, ctx: &ConversionContext<'_>) -> Result<Option<Vec<Statement>>> {
        let statements = match self {
            BsbmObject::ProductType(o) => o.to_statements(ctx)?,
            BsbmObject::Offer(o) => o.to_statements(ctx)?,
            BsbmObject::Product(o) => o.to_statements(ctx)?,
            BsbmObject::Person(o) => o.to_statements(ctx)?,
            BsbmObject::Producer(o) => o.to_statements(ctx)?,
            BsbmObject::ProductFeature(o) => o.to_statements(ctx)?,
            BsbmObject::Vendor(o) => o.to_statements(ctx)?,
            BsbmObject::Review(o) => o.to_statements(ctx)?,
            BsbmObject::Unknown => return Ok(None),
        };
        Ok(Some(statements))
    }
}

/// Product type numbers from `product_type` up to the hierarchy root,
/// following parent links in the resolver's type table.
pub fn type_chain(resolver: &dyn Resolver, product_type: u32) -> Result<Vec<u32>> {
    let mut chain = Vec::new();
    let mut next = Some(product_type);
    while let Some(nr) = next {
        if chain.len() == MAX_TYPE_DEPTH {
            return Err(SerializeError::TypeHierarchyTooDeep {
                product_type,
                max: MAX_TYPE_DEPTH,
            });
        }
        let pt = resolver
            .product_type(nr)
            .ok_or_else(|| SerializeError::UnresolvedReference(format!("ProductType{nr}")))?;
        chain.push(pt.nr);
        next = pt.parent;
    }
    Ok(chain)
}

fn date_statement(subject: &str, publish_date: i64) -> Result<Statement> {
    Ok(Statement::new(
        subject,
        dc::DATE,
        Term::typed(format_date(publish_date)?, standard::XSD_DATE),
    ))
}

fn date_time_term(millis: i64) -> Result<Term> {
    Ok(Term::typed(format_date_time(millis)?, standard::XSD_DATE_TIME))
}

fn country_term(ctx: &ConversionContext<'_>, code: &str) -> Result<Term> {
    ctx.resolver
        .country_iri(code)
        .map(Term::uri)
        .ok_or_else(|| SerializeError::UnresolvedReference(format!("country {code}")))
}

fn integer_term(value: impl ToString) -> Term {
    Term::typed(value.to_string(), standard::XSD_INTEGER)
}

impl ToStatements for ProductType {
    fn subject_iri(&self, ctx: &ConversionContext<'_>) -> String {
        ctx.iris.product_type_iri(self.nr)
    }

    fn to_statements(&self, ctx: &ConversionContext<'_>) -> Result<Vec<Statement>> {
        let s = self.subject_iri(ctx);
        let mut out = vec![
            Statement::new(&s, standard::RDF_TYPE, Term::uri(bsbm::PRODUCT_TYPE)),
            Statement::new(&s, standard::RDFS_LABEL, Term::literal(&self.label)),
            Statement::new(&s, standard::RDFS_COMMENT, Term::literal(&self.comment)),
        ];
        if let Some(parent) = self.parent {
            out.push(Statement::new(
                &s,
                standard::RDFS_SUBCLASS_OF,
                Term::uri(ctx.iris.product_type_iri(parent)),
            ));
        }
        out.push(Statement::new(
            &s,
            dc::PUBLISHER,
            Term::uri(ctx.iris.standardization_institution_iri(1)),
        ));
        out.push(date_statement(&s, self.publish_date)?);
        Ok(out)
    }
}

impl ToStatements for Offer {
    fn subject_iri(&self, ctx: &ConversionContext<'_>) -> String {
        ctx.iris.offer_iri(self.nr, self.vendor)
    }

    fn to_statements(&self, ctx: &ConversionContext<'_>) -> Result<Vec<Statement>> {
        let s = self.subject_iri(ctx);
        let producer = ctx
            .resolver
            .producer_of_product(self.product)
            .ok_or_else(|| {
                SerializeError::UnresolvedReference(format!("producer of Product{}", self.product))
            })?;
        let vendor = ctx.iris.vendor_iri(self.vendor);
        Ok(vec![
            Statement::new(&s, standard::RDF_TYPE, Term::uri(bsbm::OFFER)),
            Statement::new(
                &s,
                bsbm::PRODUCT_PROP,
                Term::uri(ctx.iris.product_iri(self.product, producer)),
            ),
            Statement::new(&s, bsbm::VENDOR_PROP, Term::uri(&vendor)),
            Statement::new(&s, bsbm::PRICE, Term::typed(self.price_string(), bsbm::USD)),
            Statement::new(&s, bsbm::VALID_FROM, date_time_term(self.valid_from)?),
            Statement::new(&s, bsbm::VALID_TO, date_time_term(self.valid_to)?),
            Statement::new(&s, bsbm::DELIVERY_DAYS, integer_term(self.delivery_days)),
            Statement::new(&s, bsbm::OFFER_WEBPAGE, Term::uri(&self.offer_webpage)),
            Statement::new(&s, dc::PUBLISHER, Term::uri(vendor)),
            date_statement(&s, self.publish_date)?,
        ])
    }
}

impl ToStatements for Product {
    fn subject_iri(&self, ctx: &ConversionContext<'_>) -> String {
        ctx.iris.product_iri(self.nr, self.producer)
    }

    fn to_statements(&self, ctx: &ConversionContext<'_>) -> Result<Vec<Statement>> {
        let s = self.subject_iri(ctx);
        let producer = ctx.iris.producer_iri(self.producer);
        let mut out = vec![
            Statement::new(&s, standard::RDF_TYPE, Term::uri(bsbm::PRODUCT)),
            Statement::new(&s, standard::RDFS_LABEL, Term::literal(&self.label)),
            Statement::new(&s, standard::RDFS_COMMENT, Term::literal(&self.comment)),
        ];

        if ctx.forward_chaining {
            for nr in type_chain(ctx.resolver, self.product_type)? {
                out.push(Statement::new(
                    &s,
                    standard::RDF_TYPE,
                    Term::uri(ctx.iris.product_type_iri(nr)),
                ));
            }
        } else {
            out.push(Statement::new(
                &s,
                standard::RDF_TYPE,
                Term::uri(ctx.iris.product_type_iri(self.product_type)),
            ));
        }

        out.push(Statement::new(&s, bsbm::PRODUCER_PROP, Term::uri(&producer)));

        for (i, value) in self.numeric_properties.iter().enumerate() {
            if let Some(value) = value {
                out.push(Statement::new(
                    &s,
                    bsbm::product_property_numeric(i + 1),
                    integer_term(value),
                ));
            }
        }
        for (i, value) in self.textual_properties.iter().enumerate() {
            if let Some(value) = value {
                out.push(Statement::new(
                    &s,
                    bsbm::product_property_textual(i + 1),
                    Term::typed(value, standard::XSD_STRING),
                ));
            }
        }
        for feature in &self.features {
            out.push(Statement::new(
                &s,
                bsbm::PRODUCT_FEATURE_PROP,
                Term::uri(ctx.iris.product_feature_iri(*feature)),
            ));
        }

        out.push(Statement::new(&s, dc::PUBLISHER, Term::uri(producer)));
        out.push(date_statement(&s, self.publish_date)?);
        Ok(out)
    }
}

impl ToStatements for Person {
    fn subject_iri(&self, ctx: &ConversionContext<'_>) -> String {
        ctx.iris.person_iri(self.nr, self.publisher)
    }

    fn to_statements(&self, ctx: &ConversionContext<'_>) -> Result<Vec<Statement>> {
        let s = self.subject_iri(ctx);
        Ok(vec![
            Statement::new(&s, standard::RDF_TYPE, Term::uri(foaf::PERSON)),
            Statement::new(&s, foaf::NAME, Term::literal(&self.name)),
            Statement::new(&s, foaf::MBOX_SHA1SUM, Term::literal(&self.mbox_sha1sum)),
            Statement::new(&s, bsbm::COUNTRY, country_term(ctx, &self.country_code)?),
            Statement::new(&s, dc::PUBLISHER, Term::uri(ctx.iris.rating_site_iri(self.publisher))),
            date_statement(&s, self.publish_date)?,
        ])
    }
}

impl ToStatements for Producer {
    fn subject_iri(&self, ctx: &ConversionContext<'_>) -> String {
        ctx.iris.producer_iri(self.nr)
    }

    fn to_statements(&self, ctx: &ConversionContext<'_>) -> Result<Vec<Statement>> {
        let s = self.subject_iri(ctx);
        Ok(vec![
            Statement::new(&s, standard::RDF_TYPE, Term::uri(bsbm::PRODUCER)),
            Statement::new(&s, standard::RDFS_LABEL, Term::literal(&self.label)),
            Statement::new(&s, standard::RDFS_COMMENT, Term::literal(&self.comment)),
            Statement::new(&s, foaf::HOMEPAGE, Term::uri(&self.homepage)),
            Statement::new(&s, bsbm::COUNTRY, country_term(ctx, &self.country_code)?),
            Statement::new(&s, dc::PUBLISHER, Term::uri(&s)),
            date_statement(&s, self.publish_date)?,
        ])
    }
}

impl ToStatements for ProductFeature {
    fn subject_iri(&self, ctx: &ConversionContext<'_>) -> String {
        ctx.iris.product_feature_iri(self.nr)
    }

    fn to_statements(&self, ctx: &ConversionContext<'_>) -> Result<Vec<Statement>> {
        let s = self.subject_iri(ctx);
        Ok(vec![
            Statement::new(&s, standard::RDF_TYPE, Term::uri(bsbm::PRODUCT_FEATURE)),
            Statement::new(&s, standard::RDFS_LABEL, Term::literal(&self.label)),
            Statement::new(&s, standard::RDFS_COMMENT, Term::literal(&self.comment)),
            Statement::new(
                &s,
                dc::PUBLISHER,
                Term::uri(ctx.iris.standardization_institution_iri(self.publisher)),
            ),
            date_statement(&s, self.publish_date)?,
        ])
    }
}

impl ToStatements for Vendor {
    fn subject_iri(&self, ctx: &ConversionContext<'_>) -> String {
        ctx.iris.vendor_iri(self.nr)
    }

    fn to_statements(&self, ctx: &ConversionContext<'_>) -> Result<Vec<Statement>> {
        let s = self.subject_iri(ctx);
        Ok(vec![
            Statement::new(&s, standard::RDF_TYPE, Term::uri(bsbm::VENDOR)),
            Statement::new(&s, standard::RDFS_LABEL, Term::literal(&self.label)),
            Statement::new(&s, standard::RDFS_COMMENT, Term::literal(&self.comment)),
            Statement::new(&s, foaf::HOMEPAGE, Term::uri(&self.homepage)),
            Statement::new(&s, bsbm::COUNTRY, country_term(ctx, &self.country_code)?),
            Statement::new(&s, dc::PUBLISHER, Term::uri(&s)),
            date_statement(&s, self.publish_date)?,
        ])
    }
}

impl ToStatements for Review {
    fn subject_iri(&self, ctx: &ConversionContext<'_>) -> String {
        ctx.iris.review_iri(self.nr, self.publisher)
    }

    fn to_statements(&self, ctx: &ConversionContext<'_>) -> Result<Vec<Statement>> {
        let s = self.subject_iri(ctx);
        let lang = ctx.resolver.language_code(self.language).ok_or_else(|| {
            SerializeError::UnresolvedReference(format!("language index {}", self.language))
        })?;
        let mut out = vec![
            Statement::new(&s, standard::RDF_TYPE, Term::uri(rev::REVIEW)),
            Statement::new(
                &s,
                bsbm::REVIEW_FOR,
                Term::uri(ctx.iris.product_iri(self.product, self.producer_of_product)),
            ),
            Statement::new(
                &s,
                rev::REVIEWER,
                Term::uri(ctx.iris.person_iri(self.person, self.publisher)),
            ),
            Statement::new(&s, bsbm::REVIEW_DATE, date_time_term(self.review_date)?),
            Statement::new(&s, dc::TITLE, Term::literal(&self.title)),
            Statement::new(&s, rev::TEXT, Term::lang(&self.text, lang)),
        ];
        for (i, rating) in self.ratings.iter().enumerate() {
            if let Some(rating) = rating {
                out.push(Statement::new(&s, bsbm::rating(i + 1), integer_term(rating)));
            }
        }
        out.push(Statement::new(
            &s,
            dc::PUBLISHER,
            Term::uri(ctx.iris.rating_site_iri(self.publisher)),
        ));
        out.push(date_statement(&s, self.publish_date)?);
        Ok(out)
    }
}
