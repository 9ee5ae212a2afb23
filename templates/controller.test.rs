{% set ns = namespace(required=false) %}
{% for f in fields %}
{% if f.mandatory and f.type != "bool" %}
{% set ns.required = true %}
{% endif %}
{% endfor %}
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::{routes, PATH};
use crate::crud::services::ConcreteServices;

/// Router over a pool that never connects; only pages that skip the
/// database can be exercised.
async fn app() -> axum::Router {
    let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "{{ db.url }}".to_string());
    let services = ConcreteServices::connect(&url, "views").await.unwrap();
    routes().with_state(Arc::new(services))
}

#[tokio::test]
async fn test_{{ name_all_lower }}_create_page_renders() {
    let response = app()
        .await
        .oneshot(Request::get(format!("{PATH}/create")).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_{{ name_all_lower }}_unknown_route_is_not_found() {
    let response = app()
        .await
        .oneshot(Request::get(format!("{PATH}/create/extra")).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
{% if ns.required %}

#[tokio::test]
async fn test_{{ name_all_lower }}_invalid_submission_redisplays_form() {
    let body = "{% for f in fields if f.type != "bool" %}{{ f.name_all_lower }}=&{% endfor %}";
    let response = app()
        .await
        .oneshot(
            Request::post(format!("{PATH}/create"))
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
{% endif %}
