pub mod analytics_repository;
pub mod company_repository;
pub mod email_log_repository;
pub mod group_repository;
pub mod message_repository;
pub mod test_repository;
pub mod test_result_repository;
pub mod user_repository;

pub use analytics_repository::{AnalyticsRepository, MongoAnalyticsRepository};
pub use company_repository::{CompanyRepository, MongoCompanyRepository};
pub use email_log_repository::{EmailLogRepository, MongoEmailLogRepository};
pub use group_repository::{GroupRepository, MongoGroupRepository};
pub use message_repository::{MessageRepository, MongoMessageRepository};
pub use test_repository::{MongoTestRepository, TestFilter, TestRepository};
pub use test_result_repository::{MongoTestResultRepository, TestResultRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
