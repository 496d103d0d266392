mod blocking;
mod config;
mod gemini;
mod mock;
mod requester;
mod traits;

pub use blocking::BlockingPlanRequester;
pub use config::{GenerationConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use gemini::GeminiGenerator;
pub use mock::MockGenerator;
pub use requester::PlanRequester;
pub use traits::{GenerationError, TextGenerator};
