use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::core::errors::Result;
use crate::core::models::query_event::QueryCompletedEvent;
use crate::core::traits::field_encoder::FieldEncoder;

/// Writes `context`: who ran the query, from where, and with which
/// session settings. Unknown client fields are left out.
pub struct ContextEncoder;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContextView<'a> {
    user: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    principal: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remote_client_address: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_agent: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_info: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_group_id: Option<&'a str>,
    session_properties: &'a BTreeMap<String, String>,
    server_address: &'a str,
    server_version: &'a str,
    environment: &'a str,
}

impl FieldEncoder for ContextEncoder {
    fn key(&self) -> &'static str {
        "context"
    }

    fn encode(&self, event: &QueryCompletedEvent) -> Result<Option<Value>> {
        let ctx = &event.context;
        let view = ContextView {
            user: &ctx.user,
            principal: ctx.principal.as_deref(),
            remote_client_address: ctx.remote_client_address.as_deref(),
            user_agent: ctx.user_agent.as_deref(),
            client_info: ctx.client_info.as_deref(),
            source: ctx.source.as_deref(),
            catalog: ctx.catalog.as_deref(),
            schema: ctx.schema.as_deref(),
            resource_group_id: ctx.resource_group_id.as_deref(),
            session_properties: &ctx.session_properties,
            server_address: &ctx.server_address,
            server_version: &ctx.server_version,
            environment: &ctx.environment,
        };
        Ok(Some(serde_json::to_value(view)?))
    }
}
