//! Foundation value objects shared by every domain module.

mod errors;
mod ids;
mod test_date;

pub use errors::ValidationError;
pub use ids::SessionId;
pub use test_date::TestDate;
