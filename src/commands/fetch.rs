use anyhow::Result;

use crate::extract::ImportFormatExtractor;
use crate::naming;
use crate::output;
use crate::registry::{HttpClient, RegistryClient};

/// Resolves a provider/version/resource triple against the registry and
/// prints the documented import ID formats
pub struct FetchCommand;

impl FetchCommand {
    /// Execute the lookup against a live registry
    pub fn execute(
        provider: &str,
        version: &str,
        resource: &str,
        registry_url: &str,
        insecure: bool,
    ) -> Result<()> {
        let client = RegistryClient::new(registry_url, insecure)?;
        let formats = Self::lookup(&client, provider, version, resource)?;

        Self::display(resource, &formats);

        Ok(())
    }

    /// Run the lookup chain: normalize the resource name, resolve the
    /// provider, resolve the exact version id, locate the doc, fetch its
    /// body, and extract the import formats. Each step feeds the next; the
    /// first failure aborts the rest.
    fn lookup<H: HttpClient>(
        client: &RegistryClient<H>,
        provider: &str,
        version: &str,
        resource: &str,
    ) -> Result<Vec<String>> {
        let slug = naming::doc_slug(provider, resource);

        let provider_record = client.find_provider(provider)?;
        let version_id = client.resolve_version_id(&provider_record, provider, version)?;
        let doc = client.find_resource_doc(&version_id, slug)?;
        let content = client.fetch_doc_content(&doc)?;

        Ok(ImportFormatExtractor::new().extract(&content))
    }

    /// Print the result: a header plus one bullet per format, or an explicit
    /// notice when the doc carries no import example
    fn display(resource: &str, formats: &[String]) {
        if formats.is_empty() {
            output::warning(&format!(
                "The documentation for '{}' contains no import examples",
                resource
            ));
            return;
        }

        output::header("Resource ID should be in the following formats,");
        for format in formats {
            output::bullet(format);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MockHttpClient;

    const BASE: &str = "https://registry.test";

    /// Canned registry responses for the google provider at 3.67.0, with the
    /// storage_bucket doc carrying two import examples
    fn google_routes() -> Vec<(&'static str, &'static str)> {
        vec![
            (
                "/v2/providers?",
                r#"{"data": [{"type": "providers", "id": "366", "links": {"self": "/v2/providers/366"}}]}"#,
            ),
            (
                "/v2/providers/366?",
                r#"{
                    "included": [
                        {"type": "categories", "id": "7", "attributes": {}},
                        {"type": "provider-versions", "id": "44444", "attributes": {"version": "3.67.0"}},
                        {"type": "provider-versions", "id": "55555", "attributes": {"version": "3.68.0"}}
                    ]
                }"#,
            ),
            (
                "/v2/provider-docs?",
                r#"{"data": [{"type": "provider-docs", "id": "999", "links": {"self": "/v2/provider-docs/999"}}]}"#,
            ),
            (
                "/v2/provider-docs/999",
                r###"{
                    "data": {
                        "type": "provider-docs",
                        "id": "999",
                        "attributes": {
                            "content": "## Import\n\nterraform import google_storage_bucket.default bucket-name\nterraform import google_storage_bucket.default {{project}}/{{name}}\n"
                        }
                    }
                }"###,
            ),
        ]
    }

    #[test]
    fn test_lookup_end_to_end_with_mocked_registry() {
        let mock = MockHttpClient::new(google_routes());
        let log = mock.request_log();
        let client = RegistryClient::with_client(BASE, mock).unwrap();

        let formats =
            FetchCommand::lookup(&client, "google", "3.67.0", "google_storage_bucket").unwrap();

        assert_eq!(
            formats,
            vec![
                "google_storage_bucket.default bucket-name",
                "google_storage_bucket.default {{project}}/{{name}}",
            ]
        );

        // The doc query must carry the normalized slug and resolved version
        // id, in that order within the four-request chain.
        let requests = log.lock().unwrap();
        assert_eq!(requests.len(), 4);
        assert!(requests[2].contains("filter%5Bprovider-version%5D=44444"));
        assert!(requests[2].contains("filter%5Bslug%5D=storage_bucket"));
        assert!(requests[2].contains("page%5Bsize%5D=1"));
    }

    #[test]
    fn test_lookup_stops_at_unknown_provider() {
        let mock = MockHttpClient::new(vec![("/v2/providers?", r#"{"data": []}"#)]);
        let log = mock.request_log();
        let client = RegistryClient::with_client(BASE, mock).unwrap();

        let err = FetchCommand::lookup(&client, "nonexistent", "1.0.0", "nonexistent_thing")
            .unwrap_err();

        assert!(err.to_string().contains("nonexistent"));
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_lookup_unmapped_resource_uses_name_as_slug() {
        let mut routes = google_routes();
        routes[3] = (
            "/v2/provider-docs/999",
            r#"{"data": {"type": "provider-docs", "id": "999", "attributes": {"content": "no examples here"}}}"#,
        );
        let mock = MockHttpClient::new(routes);
        let log = mock.request_log();
        let client = RegistryClient::with_client(BASE, mock).unwrap();

        let formats =
            FetchCommand::lookup(&client, "google", "3.67.0", "google_service_account").unwrap();

        assert!(formats.is_empty());
        assert!(log.lock().unwrap()[2].contains("filter%5Bslug%5D=google_service_account"));
    }
}
