//! Task runner API operations
//!
//! These are the calls a task runner loop makes: poll for work, report
//! progress and heartbeats while running, and report the terminal status.
//! Polling cadence is the caller's responsibility; the client performs a
//! single request per call.

use crate::DataPipelineClient;
use crate::error::Result;
use datapipeline_core::dto::task::{
    PollForTaskRequest, PollForTaskResponse, ReportTaskProgressRequest,
    ReportTaskProgressResponse, ReportTaskRunnerHeartbeatRequest,
    ReportTaskRunnerHeartbeatResponse, SetTaskStatusRequest, TaskObject,
};

impl DataPipelineClient {
    /// Ask the service for a task to run
    ///
    /// Returns `None` when no work is available for the worker group, which
    /// is the normal idle case and not an error.
    ///
    /// # Example
    /// ```no_run
    /// # use datapipeline_client::{Credentials, DataPipelineClient, Region};
    /// # use datapipeline_client::dto::task::PollForTaskRequest;
    /// # async fn example() -> datapipeline_client::Result<()> {
    /// # let client = DataPipelineClient::new(Credentials::new("k", "s"), Region::us_west_2());
    /// let assigned = client.poll_for_task(PollForTaskRequest {
    ///     worker_group: "wg-primary".to_string(),
    ///     hostname: Some("worker-01".to_string()),
    ///     instance_identity: None,
    /// }).await?;
    ///
    /// if let Some(task) = assigned {
    ///     println!("assigned task {}", task.task_id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn poll_for_task(&self, req: PollForTaskRequest) -> Result<Option<TaskObject>> {
        let response: PollForTaskResponse = self.call("PollForTask", &req).await?;
        Ok(response.task_object)
    }

    /// Report that a task is still being worked on
    ///
    /// A response with `canceled` set tells the runner to abandon the task.
    pub async fn report_task_progress(
        &self,
        req: ReportTaskProgressRequest,
    ) -> Result<ReportTaskProgressResponse> {
        self.call("ReportTaskProgress", &req).await
    }

    /// Report that a task runner process is alive
    ///
    /// A response with `terminate` set tells the runner instance to shut
    /// down.
    pub async fn report_task_runner_heartbeat(
        &self,
        req: ReportTaskRunnerHeartbeatRequest,
    ) -> Result<ReportTaskRunnerHeartbeatResponse> {
        self.call("ReportTaskRunnerHeartbeat", &req).await
    }

    /// Report the terminal status of a task, with error details on failure
    pub async fn set_task_status(&self, req: SetTaskStatusRequest) -> Result<()> {
        self.call_no_output("SetTaskStatus", &req).await
    }
}
