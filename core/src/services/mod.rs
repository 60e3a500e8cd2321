//! Domain calculation services
//!
//! Each service is a stateless collection of pure functions; callers load
//! rules and settings from storage and persist or serialize the results.

pub mod goals;
pub mod nutrition;
pub mod pocket_money;
pub mod recurrence;

pub use goals::GoalsService;
pub use nutrition::NutritionService;
pub use pocket_money::PocketMoneyService;
pub use recurrence::RecurrenceService;
