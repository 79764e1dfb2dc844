//! Modal and settings forms. Every form follows the same pipeline: coerce,
//! validate against its declared schema, POST with the session's user id,
//! then invalidate the resource key, reset to defaults and toast.

pub mod finance;
pub mod injury;
pub mod notifications;
pub mod nutrition;
pub mod performance;
pub mod profile;

pub use finance::FinanceForm;
pub use injury::InjuryForm;
pub use notifications::NotificationsForm;
pub use nutrition::NutritionForm;
pub use performance::PerformanceForm;
pub use profile::ProfileForm;
