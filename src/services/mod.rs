pub mod analytics_service;
pub mod company_service;
pub mod content_service;
pub mod email_service;
pub mod grading_service;
pub mod group_service;
pub mod message_service;
pub mod speech_service;
pub mod test_service;
pub mod user_service;

pub use analytics_service::AnalyticsService;
pub use company_service::CompanyService;
pub use content_service::ContentService;
pub use email_service::EmailService;
pub use grading_service::GradingService;
pub use group_service::GroupService;
pub use message_service::MessageService;
pub use speech_service::SpeechService;
pub use test_service::TestService;
pub use user_service::UserService;
