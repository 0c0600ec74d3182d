pub mod context;
pub mod registration;

pub use crate::domain::model::Dog;
pub use crate::domain::ports::Component;
pub use crate::domain::profiles::{ActiveProfiles, ProfileCondition};
pub use crate::utils::error::Result;
