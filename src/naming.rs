//! Resource Name Alternatives
//!
//! Some provider resources are filed in the registry under a different slug
//! than the resource type used in Terraform configuration (e.g. the `google`
//! provider documents `google_storage_bucket` under the slug
//! `storage_bucket`). This module keeps a knowledge base of those mismatches.
//!
//! If you find a resource whose registry slug differs from its Terraform
//! name, add an entry to [`RESOURCE_NAME_ALTERNATIVES`].

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// Per-provider map of Terraform resource name to registry doc slug.
    ///
    /// Read-only after initialization. A provider or resource missing from
    /// the table means the name is already the slug.
    static ref RESOURCE_NAME_ALTERNATIVES: HashMap<&'static str, HashMap<&'static str, &'static str>> = {
        let mut providers = HashMap::new();

        let mut google = HashMap::new();
        google.insert("google_storage_bucket", "storage_bucket");
        google.insert("google_storage_bucket_iam_member", "storage_bucket_iam");
        providers.insert("google", google);

        providers
    };
}

/// Resolve the registry doc slug for a resource.
///
/// Returns the alternate slug when the knowledge base has one for this
/// provider/resource pair, otherwise the resource name unchanged. Unknown
/// providers are not an error.
pub fn doc_slug<'a>(provider: &str, resource: &'a str) -> &'a str {
    RESOURCE_NAME_ALTERNATIVES
        .get(provider)
        .and_then(|alternatives| alternatives.get(resource))
        .copied()
        .unwrap_or(resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_alternative_is_mapped() {
        assert_eq!(doc_slug("google", "google_storage_bucket"), "storage_bucket");
        assert_eq!(
            doc_slug("google", "google_storage_bucket_iam_member"),
            "storage_bucket_iam"
        );
    }

    #[test]
    fn test_unknown_resource_passes_through() {
        assert_eq!(
            doc_slug("google", "google_service_account"),
            "google_service_account"
        );
    }

    #[test]
    fn test_unknown_provider_passes_through() {
        assert_eq!(doc_slug("aws", "aws_s3_bucket"), "aws_s3_bucket");
        assert_eq!(doc_slug("", "anything"), "anything");
    }
}
