//! Integration tests for the Data Pipeline client operations.
//!
//! These tests use wiremock to simulate service responses and verify the
//! full serialize → sign → POST → decode round trip, including the error
//! envelope translation and the protocol headers.

use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use datapipeline_client::dto::object::Field;
use datapipeline_client::dto::pipeline::{
    CreatePipelineRequest, DeletePipelineRequest, DescribePipelinesRequest,
    ListPipelinesRequest, PipelineDefinitionRequest,
};
use datapipeline_client::dto::task::{PollForTaskRequest, ReportTaskRunnerHeartbeatRequest};
use datapipeline_client::{ClientError, Credentials, DataPipelineClient, Region};

fn test_client(server: &MockServer) -> DataPipelineClient {
    DataPipelineClient::new(
        Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY"),
        Region::new("us-west-2", server.uri()),
    )
}

#[tokio::test]
async fn create_pipeline_sends_protocol_headers_and_decodes_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("Content-Type", "application/x-amz-json-1.1"))
        .and(header("X-Amz-Target", "DataPipeline.CreatePipeline"))
        .and(header_exists("X-Amz-Date"))
        .and(header_exists("Authorization"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"pipelineId": "df-06372391ZG65EXAMPLE"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let created = client
        .create_pipeline(CreatePipelineRequest {
            name: "clickstream-import".to_string(),
            unique_id: "token-8f2e".to_string(),
            description: None,
        })
        .await
        .unwrap();

    assert_eq!(created.pipeline_id, "df-06372391ZG65EXAMPLE");
}

#[tokio::test]
async fn delete_pipeline_sends_single_pipeline_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("X-Amz-Target", "DataPipeline.DeletePipeline"))
        .and(body_json(json!({"pipelineId": "df-06372391ZG65EXAMPLE"})))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client
        .delete_pipeline(DeletePipelineRequest {
            pipeline_id: "df-06372391ZG65EXAMPLE".to_string(),
        })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn service_error_envelope_is_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "__type": "SomeNamespace#ValidationException",
            "message": "bad input"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .list_pipelines(ListPipelinesRequest::default())
        .await
        .unwrap_err();

    match err {
        ClientError::Service {
            status,
            code,
            message,
            ..
        } => {
            assert_eq!(status, 400);
            assert_eq!(code, "ValidationException");
            assert_eq!(message, "bad input");
        }
        other => panic!("expected Service error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_is_not_mistaken_for_a_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>Service Unavailable</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .list_pipelines(ListPipelinesRequest::default())
        .await
        .unwrap_err();

    match err {
        ClientError::MalformedErrorBody { status, .. } => assert_eq!(status, 503),
        other => panic!("expected MalformedErrorBody, got {other:?}"),
    }
}

#[tokio::test]
async fn poll_for_task_distinguishes_no_work_from_failure() {
    let server = MockServer::start().await;

    // The service answers an idle poll with an empty object.
    Mock::given(method("POST"))
        .and(header("X-Amz-Target", "DataPipeline.PollForTask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let assigned = client
        .poll_for_task(PollForTaskRequest {
            worker_group: "wg-primary".to_string(),
            hostname: None,
            instance_identity: None,
        })
        .await
        .unwrap();

    assert!(assigned.is_none());
}

#[tokio::test]
async fn poll_for_task_decodes_assigned_work() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("X-Amz-Target", "DataPipeline.PollForTask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "taskObject": {
                "taskId": "2xaM4wRs5zOsIH8e7LSDyNw",
                "pipelineId": "df-06372391ZG65EXAMPLE",
                "attemptId": "@Activity_2026-01-15T00:00:00_Attempt=1",
                "objects": {
                    "@Activity_2026-01-15T00:00:00": {
                        "id": "@Activity_2026-01-15T00:00:00",
                        "name": "Activity",
                        "fields": [{"key": "command", "stringValue": "echo hello"}]
                    }
                }
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let task = client
        .poll_for_task(PollForTaskRequest {
            worker_group: "wg-primary".to_string(),
            hostname: Some("worker-01".to_string()),
            instance_identity: None,
        })
        .await
        .unwrap()
        .expect("a task should be assigned");

    assert_eq!(task.task_id, "2xaM4wRs5zOsIH8e7LSDyNw");
    assert_eq!(task.pipeline_id, "df-06372391ZG65EXAMPLE");
    assert_eq!(task.objects.len(), 1);
}

#[tokio::test]
async fn pagination_fields_default_when_absent_and_decode_when_present() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("X-Amz-Target", "DataPipeline.ListPipelines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pipelineIdList": [{"id": "df-06372391ZG65EXAMPLE", "name": "clickstream-import"}]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = client
        .list_pipelines(ListPipelinesRequest::default())
        .await
        .unwrap();
    assert_eq!(page.pipeline_id_list.len(), 1);
    assert!(!page.has_more_results);
    assert!(page.marker.is_none());

    server.reset().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pipelineIdList": [],
            "hasMoreResults": true,
            "marker": "eyJzdGFydCI6MX0="
        })))
        .mount(&server)
        .await;

    let page = client
        .list_pipelines(ListPipelinesRequest {
            marker: page.marker,
        })
        .await
        .unwrap();
    assert!(page.has_more_results);
    assert_eq!(page.marker.as_deref(), Some("eyJzdGFydCI6MX0="));
}

#[tokio::test]
async fn put_definition_decodes_validation_findings() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("X-Amz-Target", "DataPipeline.PutPipelineDefinition"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errored": true,
            "validationErrors": [
                {"id": "Default", "errors": ["'schedule' references a non-existent object"]}
            ],
            "validationWarnings": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let outcome = client
        .put_pipeline_definition(PipelineDefinitionRequest {
            pipeline_id: "df-06372391ZG65EXAMPLE".to_string(),
            pipeline_objects: vec![datapipeline_client::dto::object::PipelineObject {
                id: "Default".to_string(),
                name: "Default".to_string(),
                fields: vec![Field::reference("schedule", "MissingSchedule")],
            }],
        })
        .await
        .unwrap();

    assert!(outcome.errored);
    assert_eq!(outcome.validation_errors.len(), 1);
    assert_eq!(outcome.validation_errors[0].id.as_deref(), Some("Default"));
}

#[tokio::test]
async fn heartbeat_decodes_terminate_flag() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("X-Amz-Target", "DataPipeline.ReportTaskRunnerHeartbeat"))
        .and(body_json(json!({"taskrunnerId": "runner-01"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"terminate": true})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let beat = client
        .report_task_runner_heartbeat(ReportTaskRunnerHeartbeatRequest {
            taskrunner_id: "runner-01".to_string(),
            worker_group: None,
            hostname: None,
        })
        .await
        .unwrap();

    assert!(beat.terminate);
}

#[tokio::test]
async fn concurrent_operations_share_one_client_without_interference() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("X-Amz-Target", "DataPipeline.ListPipelines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pipelineIdList": [{"id": "df-06372391ZG65EXAMPLE", "name": "clickstream-import"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(header("X-Amz-Target", "DataPipeline.DescribePipelines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pipelineDescriptionList": [{
                "pipelineId": "df-06372391ZG65EXAMPLE",
                "name": "clickstream-import",
                "fields": [{"key": "@state", "stringValue": "SCHEDULED"}]
            }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let (listed, described) = tokio::join!(
        client.list_pipelines(ListPipelinesRequest::default()),
        client.describe_pipelines(DescribePipelinesRequest {
            pipeline_ids: vec!["df-06372391ZG65EXAMPLE".to_string()],
        }),
    );

    let listed = listed.unwrap();
    let described = described.unwrap();
    assert_eq!(listed.pipeline_id_list[0].name, "clickstream-import");
    assert_eq!(
        described.pipeline_description_list[0].pipeline_id,
        "df-06372391ZG65EXAMPLE"
    );
}

#[tokio::test]
async fn connection_failure_surfaces_as_transport_error() {
    // A pooled server (`MockServer::start`) keeps listening after drop; a
    // bare server shuts its listener down, which this test relies on.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let client = DataPipelineClient::new(
        Credentials::new("AKIDEXAMPLE", "secret"),
        Region::new("us-west-2", uri),
    );

    let err = client
        .list_pipelines(ListPipelinesRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}
