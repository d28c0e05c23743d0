pub mod error;
pub mod routes;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use std::path::Path;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::activity_directory::ActivityDirectory;
use crate::services::signup_service::{self, SharedDirectory};
use routes::activities;

#[derive(Clone)]
pub struct AppState {
    pub directory: SharedDirectory,
}

impl AppState {
    pub fn new(directory: ActivityDirectory) -> Self {
        Self {
            directory: signup_service::shared(directory),
        }
    }
}

pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler).delete(activities::unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::seeded_directory;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> (Router, AppState) {
        let state = AppState::new(seeded_directory());
        (build_router(state.clone(), "static"), state)
    }

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn get_activities_returns_seed_data() {
        let (app, _) = app();
        let (status, body) = send(app, Method::GET, "/activities").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Chess Club"]["max_participants"], 12);
        assert_eq!(body.as_object().unwrap().len(), 9);
    }

    #[tokio::test]
    async fn raw_listing_body_is_in_seed_order() {
        let (app, _) = app();
        let response = app
            .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let raw = String::from_utf8(bytes.to_vec()).unwrap();

        let chess = raw.find("\"Chess Club\"").unwrap();
        let gym = raw.find("\"Gym Class\"").unwrap();
        let science = raw.find("\"Science Club\"").unwrap();
        assert!(chess < gym && gym < science);
    }

    #[tokio::test]
    async fn signup_adds_participant() {
        let (app, state) = app();
        let (status, body) = send(
            app,
            Method::POST,
            "/activities/Chess%20Club/signup?email=tester@school.edu",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].as_str().unwrap().starts_with("Signed up"));
        let directory = state.directory.read().await;
        assert!(directory.get("Chess Club").unwrap().is_enrolled("tester@school.edu"));
    }

    #[tokio::test]
    async fn signup_nonexistent_activity_returns_404() {
        let (app, _) = app();
        let (status, body) =
            send(app, Method::POST, "/activities/NoSuchClub/signup?email=foo@bar").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn signup_twice_duplicates_entry() {
        let (app, state) = app();
        let uri = "/activities/Chess%20Club/signup?email=again@school.edu";
        let (first, _) = send(app.clone(), Method::POST, uri).await;
        let (second, _) = send(app, Method::POST, uri).await;

        assert_eq!(first, StatusCode::OK);
        assert_eq!(second, StatusCode::OK);
        let directory = state.directory.read().await;
        let count = directory
            .get("Chess Club")
            .unwrap()
            .participants
            .iter()
            .filter(|p| p.as_str() == "again@school.edu")
            .count();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn signup_without_email_is_unprocessable() {
        let (app, _) = app();
        let (status, body) = send(app, Method::POST, "/activities/Chess%20Club/signup").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "Email is required");
    }

    #[tokio::test]
    async fn signup_with_blank_email_is_accepted() {
        let (app, state) = app();
        let (status, body) =
            send(app, Method::POST, "/activities/Chess%20Club/signup?email=%20").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Signed up   for Chess Club");
        let directory = state.directory.read().await;
        assert!(directory.get("Chess Club").unwrap().is_enrolled(" "));
    }

    #[tokio::test]
    async fn signup_with_empty_email_is_unprocessable() {
        let (app, _) = app();
        let (status, body) =
            send(app, Method::POST, "/activities/Chess%20Club/signup?email=").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "Email is required");
    }

    #[tokio::test]
    async fn unregister_removes_participant() {
        let (app, state) = app();
        state
            .directory
            .write()
            .await
            .get_mut("Chess Club")
            .unwrap()
            .participants
            .push("somebody@school.edu".to_string());

        let (status, body) = send(
            app,
            Method::DELETE,
            "/activities/Chess%20Club/signup?email=somebody@school.edu",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].as_str().unwrap().starts_with("Removed"));
        let directory = state.directory.read().await;
        assert!(!directory.get("Chess Club").unwrap().is_enrolled("somebody@school.edu"));
    }

    #[tokio::test]
    async fn unregister_nonexistent_activity_returns_404() {
        let (app, _) = app();
        let (status, body) = send(app, Method::DELETE, "/activities/NoClub/signup?email=x@x").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn unregister_not_signed_up_returns_404() {
        let (app, _) = app();
        let (status, body) = send(
            app,
            Method::DELETE,
            "/activities/Chess%20Club/signup?email=ghost@school.edu",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Student not signed up");
    }

    #[tokio::test]
    async fn root_redirects_to_static_index() {
        let (app, _) = app();
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(http::header::LOCATION).unwrap(),
            "/static/index.html"
        );
    }

    #[tokio::test]
    async fn static_files_are_served_with_no_store() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hello.txt"), "hi there").unwrap();
        let app = build_router(AppState::new(seeded_directory()), dir.path());

        let response = app
            .oneshot(Request::get("/static/hello.txt").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), "no-store");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"hi there");
    }

    #[tokio::test]
    async fn isolated_instances_do_not_share_state() {
        let (first, first_state) = app();
        let (_, second_state) = app();
        send(
            first,
            Method::POST,
            "/activities/Art%20Studio/signup?email=only@school.edu",
        )
        .await;

        assert!(first_state
            .directory
            .read()
            .await
            .get("Art Studio")
            .unwrap()
            .is_enrolled("only@school.edu"));
        assert!(!second_state
            .directory
            .read()
            .await
            .get("Art Studio")
            .unwrap()
            .is_enrolled("only@school.edu"));
    }
}
