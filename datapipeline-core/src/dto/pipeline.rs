//! Pipeline lifecycle and definition DTOs

use serde::{Deserialize, Serialize};

use crate::dto::object::{Field, PipelineObject};

/// Request shape for CreatePipeline
///
/// `unique_id` is the caller-supplied idempotency token: retrying the call
/// with the same token returns the already-created pipeline's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePipelineRequest {
    pub name: String,
    pub unique_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response shape for CreatePipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePipelineResponse {
    pub pipeline_id: String,
}

/// Request shape for DeletePipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePipelineRequest {
    pub pipeline_id: String,
}

/// Request shape for ActivatePipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivatePipelineRequest {
    pub pipeline_id: String,
}

/// Request shape for ListPipelines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPipelinesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Id/name pair returned by ListPipelines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineIdName {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Response shape for ListPipelines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPipelinesResponse {
    #[serde(default)]
    pub pipeline_id_list: Vec<PipelineIdName>,
    #[serde(default)]
    pub has_more_results: bool,
    #[serde(default)]
    pub marker: Option<String>,
}

/// Request shape for DescribePipelines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribePipelinesRequest {
    pub pipeline_ids: Vec<String>,
}

/// Metadata for one pipeline in a DescribePipelines response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineDescription {
    pub pipeline_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// Response shape for DescribePipelines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribePipelinesResponse {
    #[serde(default)]
    pub pipeline_description_list: Vec<PipelineDescription>,
}

/// Request shape for GetPipelineDefinition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPipelineDefinitionRequest {
    pub pipeline_id: String,
    /// "latest" (default) or "active"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Response shape for GetPipelineDefinition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPipelineDefinitionResponse {
    #[serde(default)]
    pub pipeline_objects: Vec<PipelineObject>,
}

/// Request shape shared by PutPipelineDefinition and
/// ValidatePipelineDefinition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineDefinitionRequest {
    pub pipeline_id: String,
    pub pipeline_objects: Vec<PipelineObject>,
}

/// Validation failure for one definition object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Non-fatal validation finding for one definition object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationWarning {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Response shape shared by PutPipelineDefinition and
/// ValidatePipelineDefinition
///
/// `errored` set means the definition was rejected and, for Put, not stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineDefinitionResponse {
    #[serde(default)]
    pub errored: bool,
    #[serde(default)]
    pub validation_errors: Vec<ValidationError>,
    #[serde(default)]
    pub validation_warnings: Vec<ValidationWarning>,
}

/// Request shape for SetStatus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStatusRequest {
    pub pipeline_id: String,
    pub object_ids: Vec<String>,
    pub status: String,
}
