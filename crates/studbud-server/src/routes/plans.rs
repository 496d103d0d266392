use axum::{
    extract::{Form, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use studbud_core::PLAN_FILENAME;
use tracing::info;

use super::AppState;
use crate::form::StudyForm;
use crate::html::{render_page, Outcome};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/plan", post(submit))
        .route("/plan/download", post(download))
}

async fn index() -> Html<String> {
    Html(render_page(&StudyForm::default(), None))
}

async fn submit(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> (StatusCode, Html<String>) {
    let form = StudyForm::from_pairs(pairs);

    let inputs = match form.to_inputs() {
        Ok(inputs) => inputs,
        Err(e) => {
            info!("rejected form submission: {e}");
            let message = e.to_string();
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render_page(&form, Some(Outcome::Invalid(&message)))),
            );
        }
    };

    match state.requester.generate_plan(&inputs).await {
        Ok(plan) => (
            StatusCode::OK,
            Html(render_page(&form, Some(Outcome::Plan(plan.as_str())))),
        ),
        Err(e) => {
            let message = e.user_message();
            (
                StatusCode::BAD_GATEWAY,
                Html(render_page(&form, Some(Outcome::Failed(&message)))),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
struct DownloadForm {
    #[serde(default)]
    plan: String,
}

async fn download(Form(input): Form<DownloadForm>) -> Response {
    // Browsers submit textarea content with CRLF line breaks.
    let body = input.plan.replace("\r\n", "\n");
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PLAN_FILENAME}\""),
            ),
        ],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use studbud_service::{MockGenerator, PlanRequester};
    use tower::ServiceExt;

    use crate::routes::build_router;

    use super::*;

    fn router_with(mock: Arc<MockGenerator>) -> Router {
        build_router(PlanRequester::new(mock))
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    const ANN: &str = "name=Ann&subjects=math&subjects=science&hours=3&goals=pass+exam\
                       &strengths=algebra&weaknesses=geometry&preferences=visual";

    #[tokio::test]
    async fn index_renders_form() {
        let app = router_with(Arc::new(MockGenerator::success("unused")));
        let resp = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.contains("<form method=\"post\" action=\"/plan\">"));
        assert!(html.contains("Computer Science"));
    }

    #[tokio::test]
    async fn submit_renders_plan() {
        let mock = Arc::new(MockGenerator::success("PLAN-XYZ"));
        let app = router_with(mock.clone());
        let resp = app.oneshot(form_post("/plan", ANN)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let html = body_text(resp).await;
        assert!(html.contains("Your Study Plan"));
        assert!(html.contains("<pre class=\"plan\">PLAN-XYZ</pre>"));
        assert!(html.contains("Download Plan"));

        let prompts = mock.prompts();
        assert_eq!(prompts.len(), 1);
        for needle in ["Ann", "Math, Science", "pass exam", "algebra", "geometry", "Visual", "3"] {
            assert!(prompts[0].contains(needle), "missing {needle:?}");
        }
    }

    #[tokio::test]
    async fn submit_failure_shows_retry_message() {
        let app = router_with(Arc::new(MockGenerator::failure("quota exceeded")));
        let resp = app.oneshot(form_post("/plan", ANN)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let html = body_text(resp).await;
        assert!(html.contains("Please try again. Error: request failed: quota exceeded"));
        // Form is still there for another attempt, with the user's values.
        assert!(html.contains("Generate Plan"));
        assert!(html.contains("value=\"Ann\""));
    }

    #[tokio::test]
    async fn out_of_range_hours_rejected_before_generation() {
        let mock = Arc::new(MockGenerator::success("PLAN"));
        let app = router_with(mock.clone());
        let resp = app
            .oneshot(form_post("/plan", "name=Ann&hours=9"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let html = body_text(resp).await;
        assert!(html.contains("hours must be between 1 and 8"));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn boundary_hours_accepted() {
        for hours in ["1", "8"] {
            let mock = Arc::new(MockGenerator::success("PLAN"));
            let app = router_with(mock.clone());
            let resp = app
                .oneshot(form_post("/plan", &format!("hours={hours}")))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK, "hours={hours}");
            assert_eq!(mock.call_count(), 1);
        }
    }

    #[tokio::test]
    async fn empty_submission_generates() {
        let mock = Arc::new(MockGenerator::success("PLAN"));
        let app = router_with(mock.clone());
        let resp = app.oneshot(form_post("/plan", "")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(mock.prompts()[0].contains("Available hours/day: 2"));
    }

    #[tokio::test]
    async fn download_returns_attachment() {
        let app = router_with(Arc::new(MockGenerator::success("unused")));
        let resp = app
            .oneshot(form_post("/plan/download", "plan=Week+1%0D%0AWeek+2"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"study_plan.txt\""
        );
        assert!(resp.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(body_text(resp).await, "Week 1\nWeek 2");
    }
}
