//! Pipeline object query and expression API operations

use crate::DataPipelineClient;
use crate::error::Result;
use datapipeline_core::dto::object::{
    DescribeObjectsRequest, DescribeObjectsResponse, EvaluateExpressionRequest,
    EvaluateExpressionResponse, QueryObjectsRequest, QueryObjectsResponse,
};

impl DataPipelineClient {
    // =============================================================================
    // Object Introspection
    // =============================================================================

    /// Fetch the full object set for a list of object ids
    ///
    /// With `evaluate_expressions` set, field expressions are evaluated
    /// server-side before the objects are returned.
    pub async fn describe_objects(
        &self,
        req: DescribeObjectsRequest,
    ) -> Result<DescribeObjectsResponse> {
        self.call("DescribeObjects", &req).await
    }

    /// Find object ids in a pipeline matching a set of field selectors
    ///
    /// `sphere` restricts the search to components, instances or attempts.
    /// One page per call; pass back the returned marker while
    /// `has_more_results` is set.
    pub async fn query_objects(&self, req: QueryObjectsRequest) -> Result<QueryObjectsResponse> {
        self.call("QueryObjects", &req).await
    }

    /// Evaluate an expression string in the context of one object
    pub async fn evaluate_expression(
        &self,
        req: EvaluateExpressionRequest,
    ) -> Result<EvaluateExpressionResponse> {
        self.call("EvaluateExpression", &req).await
    }
}
