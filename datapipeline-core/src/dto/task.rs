//! Task runner DTOs: polling for work and reporting status

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::dto::object::{Field, PipelineObject};

/// Signed EC2 instance identity document, proving to the service which
/// instance is asking for work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Request shape for PollForTask
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollForTaskRequest {
    pub worker_group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_identity: Option<InstanceIdentity>,
}

/// Unit of work assigned by PollForTask
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskObject {
    #[serde(default)]
    pub task_id: String,
    #[serde(default)]
    pub pipeline_id: String,
    #[serde(default)]
    pub attempt_id: Option<String>,
    /// Definition objects needed to run the task, keyed by object id
    #[serde(default)]
    pub objects: HashMap<String, PipelineObject>,
}

/// Response shape for PollForTask
///
/// `task_object` absent means no work is available for the worker group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollForTaskResponse {
    #[serde(default)]
    pub task_object: Option<TaskObject>,
}

/// Request shape for ReportTaskProgress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTaskProgressRequest {
    pub task_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

/// Response shape for ReportTaskProgress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTaskProgressResponse {
    /// Set when the task was canceled server-side; the runner should stop
    #[serde(default)]
    pub canceled: bool,
}

/// Request shape for ReportTaskRunnerHeartbeat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTaskRunnerHeartbeatRequest {
    pub taskrunner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

/// Response shape for ReportTaskRunnerHeartbeat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTaskRunnerHeartbeatResponse {
    /// Set when the service wants this runner instance to shut down
    #[serde(default)]
    pub terminate: bool,
}

/// Request shape for SetTaskStatus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTaskStatusRequest {
    pub task_id: String,
    /// FINISHED, FAILED or FALSE
    pub task_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_stack_trace: Option<String>,
}
