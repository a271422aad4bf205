use serde::Serialize;
use serde_json::Value;

use crate::core::errors::Result;
use crate::core::models::query_event::{
    QueryCompletedEvent, QueryInputMetadata, QueryOutputMetadata,
};
use crate::core::traits::field_encoder::FieldEncoder;

/// Writes `ioMetadata`: the tables read and the table written.
pub struct IoMetadataEncoder;

#[derive(Serialize)]
struct IoMetadataView<'a> {
    inputs: Vec<InputView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<OutputView<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InputView<'a> {
    catalog_name: &'a str,
    schema: &'a str,
    table: &'a str,
    columns: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    connector_info: Option<&'a Value>,
}

impl<'a> From<&'a QueryInputMetadata> for InputView<'a> {
    fn from(input: &'a QueryInputMetadata) -> Self {
        Self {
            catalog_name: &input.catalog_name,
            schema: &input.schema,
            table: &input.table,
            columns: &input.columns,
            connector_info: input.connector_info.as_ref(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputView<'a> {
    catalog_name: &'a str,
    schema: &'a str,
    table: &'a str,
}

impl<'a> From<&'a QueryOutputMetadata> for OutputView<'a> {
    fn from(output: &'a QueryOutputMetadata) -> Self {
        Self {
            catalog_name: &output.catalog_name,
            schema: &output.schema,
            table: &output.table,
        }
    }
}

impl FieldEncoder for IoMetadataEncoder {
    fn key(&self) -> &'static str {
        "ioMetadata"
    }

    fn encode(&self, event: &QueryCompletedEvent) -> Result<Option<Value>> {
        let io = &event.io_metadata;
        let view = IoMetadataView {
            inputs: io.inputs.iter().map(InputView::from).collect(),
            output: io.output.as_ref().map(OutputView::from),
        };
        Ok(Some(serde_json::to_value(view)?))
    }
}
