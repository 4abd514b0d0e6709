use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::Mutex};

use sleepwise::adapters::HttpPredictionService;
use sleepwise::domain::PredictionRequest;
use sleepwise::{AssessmentController, Field, PredictionError, PredictionService, SurveyRecord};

#[derive(Clone)]
struct ServerState {
    reply: Arc<(StatusCode, Value)>,
    received: Arc<Mutex<Vec<Value>>>,
}

async fn handle_predict(State(state): State<ServerState>, Json(body): Json<Value>) -> Response {
    state.received.lock().await.push(body);
    let (status, reply) = state.reply.as_ref();
    (*status, Json(reply.clone())).into_response()
}

async fn spawn_prediction_server(
    status: StatusCode,
    reply: Value,
) -> (String, Arc<Mutex<Vec<Value>>>) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = ServerState {
        reply: Arc::new((status, reply)),
        received: received.clone(),
    };
    let app = Router::new()
        .route("/predict", post(handle_predict))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}/predict"), received)
}

fn sample_request() -> PredictionRequest {
    PredictionRequest::from_record(&SurveyRecord::sample()).expect("sample is valid")
}

#[tokio::test]
async fn posts_survey_with_service_keys() {
    let (url, received) =
        spawn_prediction_server(StatusCode::OK, json!({ "prediction": "Insomnia" })).await;
    let service = HttpPredictionService::new(url);

    let label = service.predict(&sample_request()).await.expect("prediction");
    assert_eq!(label, "Insomnia");

    let bodies = received.lock().await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["sleepDuration"], json!(7));
    assert_eq!(bodies[0]["bloodPressure"], json!("120/80"));
    assert_eq!(bodies[0]["bmiCategory"], json!("Normal weight"));
    assert_eq!(bodies[0].as_object().map(|o| o.len()), Some(11));
}

#[tokio::test]
async fn non_success_status_is_failure() {
    let (url, _) =
        spawn_prediction_server(StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "boom" }))
            .await;
    let service = HttpPredictionService::new(url);

    let err = service.predict(&sample_request()).await.expect_err("500");
    assert!(matches!(err, PredictionError::Status(500)));
}

#[tokio::test]
async fn missing_prediction_field_is_decode_failure() {
    let (url, _) = spawn_prediction_server(StatusCode::OK, json!({ "label": "None" })).await;
    let service = HttpPredictionService::new(url);

    let err = service.predict(&sample_request()).await.expect_err("bad body");
    assert!(matches!(err, PredictionError::Decode(_)));
}

#[tokio::test]
async fn unreachable_service_is_transport_failure() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let service = HttpPredictionService::new(format!("http://{addr}/predict"));
    let err = service.predict(&sample_request()).await.expect_err("refused");
    assert!(matches!(err, PredictionError::Transport(_)));
}

#[tokio::test]
async fn controller_round_trip_maps_none_label() {
    let (url, received) =
        spawn_prediction_server(StatusCode::OK, json!({ "prediction": "None" })).await;
    let service = HttpPredictionService::new(url);

    let mut controller = AssessmentController::default();
    controller.replace_record(SurveyRecord::sample());
    assert_eq!(controller.submit_with(&service).await, Some(true));

    assert!(!controller.is_loading());
    assert_eq!(
        controller.displayed_result().map(|p| p.to_string()),
        Some("No disorder".to_string())
    );
    let comparison = controller.comparison().expect("chart");
    assert_eq!(comparison.band.recommended_range(), "7-9 hrs");
    assert_eq!(comparison.sleep_percent, 70);
    assert_eq!(received.lock().await.len(), 1);
}

#[tokio::test]
async fn controller_failure_leaves_result_unset() {
    let (url, _) = spawn_prediction_server(StatusCode::BAD_GATEWAY, json!({})).await;
    let service = HttpPredictionService::new(url);

    let mut controller = AssessmentController::default();
    controller.replace_record(SurveyRecord::sample());
    assert_eq!(controller.submit_with(&service).await, Some(true));

    assert!(!controller.is_loading());
    assert!(controller.displayed_result().is_none());
    assert!(controller.alert().is_some());
}

#[tokio::test]
async fn invalid_record_never_reaches_service() {
    let (url, received) =
        spawn_prediction_server(StatusCode::OK, json!({ "prediction": "None" })).await;
    let service = HttpPredictionService::new(url);

    let mut controller = AssessmentController::default();
    controller.replace_record(SurveyRecord::sample());
    controller.on_field_change(Field::BloodPressure, "12080");
    assert_eq!(controller.submit_with(&service).await, None);

    assert!(controller.errors().contains(Field::BloodPressure));
    assert!(received.lock().await.is_empty());
}
