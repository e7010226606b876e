pub mod config;
pub mod error;
pub mod mapping;
pub mod status;
pub mod subscriptions;

pub use config::{DiscoveryConfig, TrustConfig};
pub use error::AppError;
pub use mapping::{MappingDocument, MappingEntry};
pub use status::{CheckOutcome, CheckStatus};
pub use subscriptions::SubscriptionSet;
