use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use url::Url;

use super::error::RegistryError;
use super::types::{
    DocListResponse, DocResponse, DocSummary, ProviderDetailResponse, ProviderListResponse,
    ProviderRecord,
};

/// HTTP client trait for testing
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str) -> Result<String>;
}

/// Real HTTP client using reqwest
///
/// Built once per run; the four registry fetches share its connection pool.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Create a client. TLS certificate verification is on unless the caller
    /// explicitly opts out.
    pub fn new(insecure: bool) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(insecure)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch URL: {}", url))?;

        if !response.status().is_success() {
            bail!(
                "HTTP request failed with status {}: {}",
                response.status(),
                url
            );
        }

        response
            .text()
            .with_context(|| format!("Failed to read response body from: {}", url))
    }
}

/// Client for the Terraform registry's v2 API
pub struct RegistryClient<H: HttpClient> {
    base_url: Url,
    http_client: H,
}

impl RegistryClient<ReqwestClient> {
    /// Create a registry client with the default HTTP client
    pub fn new(base_url: &str, insecure: bool) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid registry URL: {}", base_url))?;

        Ok(Self {
            base_url,
            http_client: ReqwestClient::new(insecure)?,
        })
    }
}

impl<H: HttpClient> RegistryClient<H> {
    /// Create a registry client with a custom HTTP client (for testing)
    pub fn with_client(base_url: &str, client: H) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid registry URL: {}", base_url))?;

        Ok(Self {
            base_url,
            http_client: client,
        })
    }

    /// Look up a provider by name in the hashicorp namespace.
    ///
    /// Moved and unlisted providers are included so renamed providers still
    /// resolve; version lists are excluded to keep the listing small.
    pub fn find_provider(&self, provider: &str) -> Result<ProviderRecord> {
        let mut url = self.endpoint("/v2/providers")?;
        url.query_pairs_mut()
            .append_pair("filter[namespace]", "hashicorp")
            .append_pair("filter[name]", provider)
            .append_pair("filter[moved]", "true")
            .append_pair("filter[unlisted]", "true")
            .append_pair("filter[without-versions]", "true");

        let response: ProviderListResponse = self.get_json(&url)?;

        response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| {
                RegistryError::ProviderNotFound {
                    provider: provider.to_string(),
                }
                .into()
            })
    }

    /// Resolve the registry's internal id for an exact provider version.
    ///
    /// Fetches the provider detail resource with its version records included
    /// and matches `attributes.version` by string equality. Zero matches is a
    /// lookup failure; more than one means the registry lists duplicate
    /// version strings, which is reported rather than silently resolved.
    pub fn resolve_version_id(
        &self,
        provider: &ProviderRecord,
        provider_name: &str,
        version: &str,
    ) -> Result<String> {
        let mut url = self.endpoint(&provider.links.self_link)?;
        url.query_pairs_mut().append_pair(
            "include",
            "categories,moved-to,potential-fork-of,provider-versions,top-modules",
        );

        let response: ProviderDetailResponse = self.get_json(&url)?;

        let mut matches = response
            .included
            .into_iter()
            .filter(|record| record.is_provider_version(version));

        let record = matches.next().ok_or_else(|| RegistryError::VersionNotFound {
            provider: provider_name.to_string(),
            version: version.to_string(),
        })?;

        let duplicates = matches.count();
        if duplicates > 0 {
            return Err(RegistryError::AmbiguousVersion {
                version: version.to_string(),
                count: duplicates + 1,
            }
            .into());
        }

        Ok(record.id)
    }

    /// Find the resource doc entry for a slug under a provider version.
    ///
    /// The query is constrained to category "resources" and page size 1; the
    /// first (only) result is authoritative.
    pub fn find_resource_doc(&self, version_id: &str, slug: &str) -> Result<DocSummary> {
        let mut url = self.endpoint("/v2/provider-docs")?;
        url.query_pairs_mut()
            .append_pair("filter[provider-version]", version_id)
            .append_pair("filter[category]", "resources")
            .append_pair("filter[slug]", slug)
            .append_pair("page[size]", "1");

        let response: DocListResponse = self.get_json(&url)?;

        response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| {
                RegistryError::DocNotFound {
                    resource: slug.to_string(),
                    version_id: version_id.to_string(),
                }
                .into()
            })
    }

    /// Fetch a doc's full body and return its rendered content
    pub fn fetch_doc_content(&self, doc: &DocSummary) -> Result<String> {
        let url = self.endpoint(&doc.links.self_link)?;
        let response: DocResponse = self.get_json(&url)?;

        Ok(response.data.attributes.content)
    }

    /// Join a registry-relative path onto the base URL
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Invalid registry path: {}", path))
    }

    /// GET a URL and deserialize its JSON body
    fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let body = self.http_client.get(url.as_str())?;

        serde_json::from_str(&body).map_err(|err| {
            RegistryError::MalformedResponse {
                url: url.to_string(),
                detail: err.to_string(),
            }
            .into()
        })
    }
}

/// Mock HTTP client for testing: routes by URL substring, records every
/// request so tests can assert on the exact queries issued
#[cfg(test)]
pub struct MockHttpClient {
    routes: Vec<(&'static str, String)>,
    requests: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new(routes: Vec<(&'static str, &str)>) -> Self {
        Self {
            routes: routes
                .into_iter()
                .map(|(pattern, body)| (pattern, body.to_string()))
                .collect(),
            requests: std::sync::Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    /// Handle onto the request log, usable after the mock is moved into a
    /// [`RegistryClient`]
    pub fn request_log(&self) -> std::sync::Arc<std::sync::Mutex<Vec<String>>> {
        self.requests.clone()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl HttpClient for MockHttpClient {
    fn get(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());

        self.routes
            .iter()
            .find(|(pattern, _)| url.contains(pattern))
            .map(|(_, body)| body.clone())
            .ok_or_else(|| anyhow::anyhow!("No response configured for {}", url))
    }
}
