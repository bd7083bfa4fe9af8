//! Pipeline lifecycle and definition API operations

use crate::DataPipelineClient;
use crate::error::Result;
use datapipeline_core::dto::pipeline::{
    ActivatePipelineRequest, CreatePipelineRequest, CreatePipelineResponse, DeletePipelineRequest,
    DescribePipelinesRequest, DescribePipelinesResponse, GetPipelineDefinitionRequest,
    GetPipelineDefinitionResponse, ListPipelinesRequest, ListPipelinesResponse,
    PipelineDefinitionRequest, PipelineDefinitionResponse, SetStatusRequest,
};

impl DataPipelineClient {
    // =============================================================================
    // Pipeline Lifecycle
    // =============================================================================

    /// Create a new, empty pipeline
    ///
    /// The pipeline has no definition until one is pushed with
    /// [`put_pipeline_definition`](Self::put_pipeline_definition).
    ///
    /// # Arguments
    /// * `req` - Pipeline name, idempotency token, optional description
    ///
    /// # Returns
    /// The generated pipeline id
    ///
    /// # Example
    /// ```no_run
    /// # use datapipeline_client::{Credentials, DataPipelineClient, Region};
    /// # use datapipeline_client::dto::pipeline::CreatePipelineRequest;
    /// # async fn example() -> datapipeline_client::Result<()> {
    /// # let client = DataPipelineClient::new(Credentials::new("k", "s"), Region::us_west_2());
    /// let created = client.create_pipeline(CreatePipelineRequest {
    ///     name: "clickstream-import".to_string(),
    ///     unique_id: "clickstream-import-2026-01".to_string(),
    ///     description: Some("Hourly clickstream import".to_string()),
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_pipeline(
        &self,
        req: CreatePipelineRequest,
    ) -> Result<CreatePipelineResponse> {
        self.call("CreatePipeline", &req).await
    }

    /// Delete a pipeline, its definition, and its run history
    pub async fn delete_pipeline(&self, req: DeletePipelineRequest) -> Result<()> {
        self.call_no_output("DeletePipeline", &req).await
    }

    /// Activate a pipeline so the service starts running its definition
    pub async fn activate_pipeline(&self, req: ActivatePipelineRequest) -> Result<()> {
        self.call_no_output("ActivatePipeline", &req).await
    }

    /// List pipeline ids and names visible to the caller
    ///
    /// One page per call; pass back the returned marker while
    /// `has_more_results` is set to fetch the rest.
    pub async fn list_pipelines(&self, req: ListPipelinesRequest) -> Result<ListPipelinesResponse> {
        self.call("ListPipelines", &req).await
    }

    /// Describe metadata for a batch of pipelines
    pub async fn describe_pipelines(
        &self,
        req: DescribePipelinesRequest,
    ) -> Result<DescribePipelinesResponse> {
        self.call("DescribePipelines", &req).await
    }

    // =============================================================================
    // Pipeline Definition
    // =============================================================================

    /// Fetch the object list of a pipeline's definition
    pub async fn get_pipeline_definition(
        &self,
        req: GetPipelineDefinitionRequest,
    ) -> Result<GetPipelineDefinitionResponse> {
        self.call("GetPipelineDefinition", &req).await
    }

    /// Store a pipeline definition
    ///
    /// A response with `errored` set means the definition was rejected and
    /// not stored; the per-object findings say why.
    pub async fn put_pipeline_definition(
        &self,
        req: PipelineDefinitionRequest,
    ) -> Result<PipelineDefinitionResponse> {
        self.call("PutPipelineDefinition", &req).await
    }

    /// Validate a pipeline definition without storing it
    ///
    /// Same request and response shapes as
    /// [`put_pipeline_definition`](Self::put_pipeline_definition).
    pub async fn validate_pipeline_definition(
        &self,
        req: PipelineDefinitionRequest,
    ) -> Result<PipelineDefinitionResponse> {
        self.call("ValidatePipelineDefinition", &req).await
    }

    /// Request a status change for a set of definition objects
    ///
    /// The update is asynchronous server-side; a success response only
    /// acknowledges the request.
    pub async fn set_status(&self, req: SetStatusRequest) -> Result<()> {
        self.call_no_output("SetStatus", &req).await
    }
}
