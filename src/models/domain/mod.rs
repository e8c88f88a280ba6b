pub mod analytics_event;
pub mod company;
pub mod email_log;
pub mod group;
pub mod level;
pub mod message;
pub mod question;
pub mod test_result;
pub mod user;
pub use analytics_event::AnalyticsEvent;
pub use company::{Company, CompanySettings};
pub use email_log::{EmailLog, EmailStatus, EmailType};
pub use group::{Group, GroupMember};
pub use level::ProficiencyLevel;
pub use message::Message;
pub use question::{Question, QuestionKind};
pub use test::{Test, TestType, TestWithQuestions};
pub use test_result::{GradedAnswer, GradedAttempt, Submission, SubmittedAnswer, TestResult};
pub use user::{User, UserRole};
