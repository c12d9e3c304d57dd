use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::Json;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_endpoint_de_prueba() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_ruta_desconocida_es_404() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/no-existe")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metodo_no_permitido() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/permisos/verificar")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_verificar_sin_cuerpo_falla() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/permisos/verificar")
                .header("content-type", "application/json")
                .body(Body::from("no-es-json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_ne!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.status().is_client_error());
}

// Router de prueba con la misma forma de rutas que el servidor, con handlers
// stub que no tocan la base de datos.
fn create_test_app() -> axum::Router {
    axum::Router::new()
        .route(
            "/test",
            get(|| async { Json(json!({ "status": "ok" })) }),
        )
        .route(
            "/api/permisos/verificar",
            post(|Json(body): Json<serde_json::Value>| async move {
                Json(json!({ "permitido": body.get("usuario_id").is_some() }))
            }),
        )
}
