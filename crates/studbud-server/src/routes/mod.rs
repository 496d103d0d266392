pub mod api;
pub mod health;
pub mod plans;

use std::sync::Arc;

use axum::Router;
use studbud_service::PlanRequester;

pub struct InnerAppState {
    pub requester: PlanRequester,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(requester: PlanRequester) -> Router {
    let state = Arc::new(InnerAppState { requester });

    Router::new()
        .merge(health::routes())
        .merge(plans::routes())
        .merge(api::routes())
        .with_state(state)
}
