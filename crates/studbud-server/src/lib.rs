pub mod config;
mod form;
mod html;
mod routes;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;

use anyhow::Result;
use studbud_service::PlanRequester;
use tokio::net::TcpListener;

pub use form::StudyForm;
pub use routes::build_router;

pub async fn serve(listener: TcpListener, requester: PlanRequester) -> Result<()> {
    let app = routes::build_router(requester);
    axum::serve(listener, app).await?;
    Ok(())
}
