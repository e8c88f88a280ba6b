use std::sync::Arc;

use crate::{
    clients::{
        ElevenLabsClient, EmailSender, OpenRouterClient, QuestionGenerator, ResendClient,
        SpeechSynthesizer,
    },
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        AnalyticsRepository, CompanyRepository, EmailLogRepository, GroupRepository,
        MessageRepository, MongoAnalyticsRepository, MongoCompanyRepository,
        MongoEmailLogRepository, MongoGroupRepository, MongoMessageRepository,
        MongoTestRepository, MongoTestResultRepository, MongoUserRepository, TestRepository,
        TestResultRepository, UserRepository,
    },
    services::{
        AnalyticsService, CompanyService, ContentService, EmailService, GroupService,
        MessageService, SpeechService, TestService, UserService,
    },
};

/// Storage backends, one per aggregate.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub companies: Arc<dyn CompanyRepository>,
    pub groups: Arc<dyn GroupRepository>,
    pub tests: Arc<dyn TestRepository>,
    pub results: Arc<dyn TestResultRepository>,
    pub emails: Arc<dyn EmailLogRepository>,
    pub analytics: Arc<dyn AnalyticsRepository>,
    pub messages: Arc<dyn MessageRepository>,
}

impl Repositories {
    pub async fn mongo(db: &Database) -> AppResult<Self> {
        let users = MongoUserRepository::new(db);
        let companies = MongoCompanyRepository::new(db);
        let groups = MongoGroupRepository::new(db);
        let tests = MongoTestRepository::new(db);
        let results = MongoTestResultRepository::new(db);
        let emails = MongoEmailLogRepository::new(db);
        let analytics = MongoAnalyticsRepository::new(db);
        let messages = MongoMessageRepository::new(db);

        users.ensure_indexes().await?;
        companies.ensure_indexes().await?;
        groups.ensure_indexes().await?;
        tests.ensure_indexes().await?;
        results.ensure_indexes().await?;
        emails.ensure_indexes().await?;
        analytics.ensure_indexes().await?;
        messages.ensure_indexes().await?;

        Ok(Self {
            users: Arc::new(users),
            companies: Arc::new(companies),
            groups: Arc::new(groups),
            tests: Arc::new(tests),
            results: Arc::new(results),
            emails: Arc::new(emails),
            analytics: Arc::new(analytics),
            messages: Arc::new(messages),
        })
    }
}

/// Third-party integrations.
#[derive(Clone)]
pub struct Providers {
    pub generator: Arc<dyn QuestionGenerator>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    pub email_sender: Arc<dyn EmailSender>,
}

impl Providers {
    pub fn from_config(config: &Config) -> Self {
        Self {
            generator: Arc::new(OpenRouterClient::new(&config.openrouter)),
            synthesizer: Arc::new(ElevenLabsClient::new(&config.elevenlabs)),
            email_sender: Arc::new(ResendClient::new(&config.resend)),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub company_service: Arc<CompanyService>,
    pub group_service: Arc<GroupService>,
    pub test_service: Arc<TestService>,
    pub content_service: Arc<ContentService>,
    pub speech_service: Arc<SpeechService>,
    pub email_service: Arc<EmailService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub message_service: Arc<MessageService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        let repositories = Repositories::mongo(&db).await?;
        let providers = Providers::from_config(&config);

        Ok(Self::from_parts(config, db, repositories, providers))
    }

    pub fn from_parts(
        config: Config,
        db: Database,
        repositories: Repositories,
        providers: Providers,
    ) -> Self {
        let Repositories {
            users,
            companies,
            groups,
            tests,
            results,
            emails,
            analytics,
            messages,
        } = repositories;

        Self {
            user_service: Arc::new(UserService::new(users.clone())),
            company_service: Arc::new(CompanyService::new(companies, users.clone())),
            group_service: Arc::new(GroupService::new(groups, users)),
            test_service: Arc::new(TestService::new(
                tests.clone(),
                results,
                config.passing_score_default,
            )),
            content_service: Arc::new(ContentService::new(providers.generator)),
            speech_service: Arc::new(SpeechService::new(
                providers.synthesizer,
                tests,
                config.elevenlabs.default_voice_id.clone(),
            )),
            email_service: Arc::new(EmailService::new(
                providers.email_sender,
                emails,
                &config.resend,
            )),
            analytics_service: Arc::new(AnalyticsService::new(analytics)),
            message_service: Arc::new(MessageService::new(messages)),
            db,
            config: Arc::new(config),
        }
    }
}
