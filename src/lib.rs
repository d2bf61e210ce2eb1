pub mod amortization;
pub mod decimal;
pub mod errors;
pub mod scenario;
pub mod types;

// re-export key types
pub use amortization::{
    monthly_payment, schedule_preview, SchedulePreview, ScheduleRow, DEFAULT_PREVIEW_MONTHS,
};
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use scenario::{LoanScenario, ScenarioDetail, ScenarioStore};
pub use types::{InputField, LoanTerms, ScenarioId, MAX_ANNUAL_RATE_PERCENT, MAX_TERM_MONTHS};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
