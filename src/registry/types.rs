//! Response types for the registry's v2 API
//!
//! All four endpoints return a JSON:API-style envelope (`data`, `included`,
//! `links`, `attributes`). Only the fields the pipeline reads are modeled;
//! serde ignores the rest.

use serde::Deserialize;

/// `GET /v2/providers?filter[...]` response
#[derive(Debug, Deserialize)]
pub struct ProviderListResponse {
    #[serde(default)]
    pub data: Vec<ProviderRecord>,
}

/// One provider entry in a listing
#[derive(Debug, Deserialize)]
pub struct ProviderRecord {
    #[allow(dead_code)]
    pub id: String,
    pub links: ResourceLinks,
}

/// JSON:API `links` object; only the self-link is used
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceLinks {
    #[serde(rename = "self")]
    pub self_link: String,
}

/// `GET {provider_self_link}?include=...` response
///
/// The `data` member repeats the provider record and is not needed; the
/// version records of interest arrive in `included`, mixed with categories,
/// modules and move relations.
#[derive(Debug, Deserialize)]
pub struct ProviderDetailResponse {
    #[serde(default)]
    pub included: Vec<IncludedRecord>,
}

/// One record of the mixed-kind `included` collection
#[derive(Debug, Deserialize)]
pub struct IncludedRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: IncludedAttributes,
}

/// Attributes of an included record; only provider-versions carry `version`
#[derive(Debug, Default, Deserialize)]
pub struct IncludedAttributes {
    pub version: Option<String>,
}

impl IncludedRecord {
    /// Whether this record is a provider version matching `version` exactly
    pub fn is_provider_version(&self, version: &str) -> bool {
        self.kind == "provider-versions" && self.attributes.version.as_deref() == Some(version)
    }
}

/// `GET /v2/provider-docs?filter[...]` response
#[derive(Debug, Deserialize)]
pub struct DocListResponse {
    #[serde(default)]
    pub data: Vec<DocSummary>,
}

/// One doc entry in a listing; the self-link leads to the full body
#[derive(Debug, Deserialize)]
pub struct DocSummary {
    #[allow(dead_code)]
    pub id: String,
    pub links: ResourceLinks,
}

/// `GET {doc_self_link}` response
#[derive(Debug, Deserialize)]
pub struct DocResponse {
    pub data: DocRecord,
}

#[derive(Debug, Deserialize)]
pub struct DocRecord {
    pub attributes: DocAttributes,
}

/// Doc attributes; `content` is the rendered documentation body
#[derive(Debug, Deserialize)]
pub struct DocAttributes {
    pub content: String,
}
