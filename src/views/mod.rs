pub mod ai_coach;
pub mod auth;
pub mod dashboard;
pub mod finances;
pub mod injuries;
pub mod not_found;
pub mod nutrition;
pub mod performance;
pub mod settings;

pub use ai_coach::AiCoach;
pub use auth::Auth;
pub use dashboard::Dashboard;
pub use finances::Finances;
pub use injuries::Injuries;
pub use not_found::NotFound;
pub use nutrition::Nutrition;
pub use performance::Performance;
pub use settings::Settings;
