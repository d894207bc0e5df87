//! Compliance tag merging
//!
//! Every provisioned resource carries the mandatory compliance tags. Caller
//! tags are preserved, but a mandatory key always wins over a caller tag of
//! the same name: the merge writes mandatory entries last.

use crate::request::WorkspaceRequest;
use arm_client::Tags;

/// Value of the `managed-by` tag on every resource
pub const MANAGED_BY: &str = "lakeops";

/// Value of the `component` tag on every resource
pub const COMPONENT: &str = "databricks-workspace";

/// Merge caller tags with the mandatory set; mandatory keys always win
///
/// Pure function: neither input map is mutated.
pub fn merge_tags(mandatory: &Tags, user_supplied: &Tags) -> Tags {
    let mut merged = user_supplied.clone();
    for (key, value) in mandatory {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Build the full tag set for a request: caller tags plus the mandatory
/// compliance tags derived from the request fields
pub fn compliance_tags(request: &WorkspaceRequest) -> Tags {
    let mut mandatory = Tags::new();
    mandatory.insert("team".to_string(), request.team_name.clone());
    mandatory.insert("environment".to_string(), request.environment.clone());
    mandatory.insert("cost-center".to_string(), request.cost_center.clone());
    mandatory.insert("managed-by".to_string(), MANAGED_BY.to_string());
    mandatory.insert("component".to_string(), COMPONENT.to_string());
    if let Some(classification) = &request.data_classification {
        mandatory.insert("data-classification".to_string(), classification.clone());
    }

    merge_tags(&mandatory, &request.tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::WorkspaceRequest;

    fn request() -> WorkspaceRequest {
        WorkspaceRequest::new("data-science", "westeurope", "sub-123", "10.1.0.0/16")
    }

    #[test]
    fn mandatory_keys_always_present() {
        let tags = compliance_tags(&request());

        assert_eq!(tags.get("team").map(String::as_str), Some("data-science"));
        assert_eq!(tags.get("environment").map(String::as_str), Some("dev"));
        assert_eq!(tags.get("cost-center").map(String::as_str), Some("unassigned"));
        assert_eq!(tags.get("managed-by").map(String::as_str), Some(MANAGED_BY));
        assert_eq!(tags.get("component").map(String::as_str), Some(COMPONENT));
    }

    #[test]
    fn mandatory_values_win_over_caller_collisions() {
        let mut request = request();
        request.tags.insert("team".to_string(), "spoofed".to_string());
        request.tags.insert("managed-by".to_string(), "hand".to_string());
        request.tags.insert("owner".to_string(), "alice".to_string());

        let tags = compliance_tags(&request);

        assert_eq!(tags.get("team").map(String::as_str), Some("data-science"));
        assert_eq!(tags.get("managed-by").map(String::as_str), Some(MANAGED_BY));
        // Non-colliding caller tags survive
        assert_eq!(tags.get("owner").map(String::as_str), Some("alice"));
    }

    #[test]
    fn data_classification_tag_only_when_supplied() {
        let mut request = request();
        assert!(!compliance_tags(&request).contains_key("data-classification"));

        request.data_classification = Some("confidential".to_string());
        assert_eq!(
            compliance_tags(&request)
                .get("data-classification")
                .map(String::as_str),
            Some("confidential")
        );
    }

    #[test]
    fn merge_does_not_mutate_inputs() {
        let mut mandatory = Tags::new();
        mandatory.insert("a".to_string(), "1".to_string());
        let mut user = Tags::new();
        user.insert("a".to_string(), "0".to_string());
        user.insert("b".to_string(), "2".to_string());

        let merged = merge_tags(&mandatory, &user);

        assert_eq!(merged.get("a").map(String::as_str), Some("1"));
        assert_eq!(user.get("a").map(String::as_str), Some("0"));
        assert_eq!(mandatory.len(), 1);
    }
}
