//! The structured description of one generation request.
//!
//! A `Metadata` record is built by a generator strategy from CLI arguments,
//! handed to the renderer read-only, and serialized as a pretty-printed
//! JSON sidecar next to the generated files so a run can be audited or
//! diffed later. Field names serialize in camelCase to keep the sidecar
//! format stable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A prop declaration to inject into the generated component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prop {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// API-client binding for components that talk to a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiClient {
    pub method: String,
    pub service_name: String,
}

/// Everything needed to generate one component.
///
/// Owned exclusively by one generator strategy instance; never shared
/// across generation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Unique name for the component within this run
    pub name: String,
    /// Version of the generator library that produced this record
    pub version: String,
    /// Component kind identifier (registry key)
    pub component: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_client: Option<ApiClient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<IndexMap<String, Prop>>,
    /// Generator-specific parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, serde_json::Value>>,
}

impl Metadata {
    pub fn new(name: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            component: component.into(),
            api_client: None,
            props: None,
            parameters: None,
        }
    }

    /// Insert or fully replace one prop declaration; other keys untouched.
    pub fn update_prop(&mut self, key: impl Into<String>, prop: Prop) {
        self.props.get_or_insert_default().insert(key.into(), prop);
    }

    /// Insert or fully replace one generator parameter; other keys
    /// untouched.
    pub fn update_param(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.parameters
            .get_or_insert_default()
            .insert(key.into(), value.into());
    }

    /// Replace the whole API-client record.
    pub fn update_api_client(
        &mut self,
        method: impl Into<String>,
        service_name: impl Into<String>,
    ) {
        self.api_client = Some(ApiClient {
            method: method.into(),
            service_name: service_name.into(),
        });
    }

    /// Fetch one generator parameter.
    pub fn param(&self, key: &str) -> Option<&serde_json::Value> {
        self.parameters.as_ref().and_then(|params| params.get(key))
    }
}
