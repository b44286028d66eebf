pub mod property;
pub mod requests;

pub use property::PropertyRecord;
pub use requests::{
    AskAiRequest, AskAiResponse, HealthCheckRequest, HealthCheckResponse, ValuationInput,
    ValuationRequest, ValuationResponse,
};
