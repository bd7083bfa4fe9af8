//! Pipeline object, query and expression DTOs

use serde::{Deserialize, Serialize};

/// Key/value attribute of a pipeline object
///
/// The value is either a literal string or a reference to another object's
/// id; the service populates exactly one of the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_value: Option<String>,
}

impl Field {
    /// Field holding a literal string value
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            string_value: Some(value.into()),
            ref_value: None,
        }
    }

    /// Field referencing another pipeline object by id
    pub fn reference(key: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            string_value: None,
            ref_value: Some(object_id.into()),
        }
    }
}

/// Identified, named bag of fields: the atomic unit of a pipeline definition
///
/// The definition graph is opaque to this client; it only transports the
/// flat object list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// Request shape for DescribeObjects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeObjectsRequest {
    pub pipeline_id: String,
    pub object_ids: Vec<String>,
    pub evaluate_expressions: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Response shape for DescribeObjects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeObjectsResponse {
    #[serde(default)]
    pub pipeline_objects: Vec<PipelineObject>,
    #[serde(default)]
    pub has_more_results: bool,
    #[serde(default)]
    pub marker: Option<String>,
}

/// Comparison applied to a queried field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    /// Comparison type (EQ, REF_EQ, LE, GE, BETWEEN)
    #[serde(rename = "type")]
    pub comparison: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Single field selector within a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    pub field_name: String,
    pub operator: Operator,
}

/// Conjunction of selectors; objects matching all of them are returned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub selectors: Vec<Selector>,
}

/// Request shape for QueryObjects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryObjectsRequest {
    pub pipeline_id: String,
    /// Object sphere to query: COMPONENT, INSTANCE or ATTEMPT
    pub sphere: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Query>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Response shape for QueryObjects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryObjectsResponse {
    #[serde(default)]
    pub ids: Vec<String>,
    #[serde(default)]
    pub has_more_results: bool,
    #[serde(default)]
    pub marker: Option<String>,
}

/// Request shape for EvaluateExpression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateExpressionRequest {
    pub pipeline_id: String,
    pub object_id: String,
    pub expression: String,
}

/// Response shape for EvaluateExpression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateExpressionResponse {
    pub evaluated_expression: String,
}
