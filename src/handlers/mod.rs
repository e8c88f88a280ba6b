pub mod ai_handler;
pub mod analytics_handler;
pub mod audio_handler;
pub mod company_handler;
pub mod email_handler;
pub mod graphql_handler;
pub mod group_handler;
pub mod health_handler;
pub mod message_handler;
pub mod test_handler;
pub mod user_handler;

use actix_web::web;

/// Registers every REST, health and GraphQL route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health_handler::configure)
        .configure(user_handler::configure)
        .configure(company_handler::configure)
        .configure(group_handler::configure)
        .configure(test_handler::configure)
        .configure(ai_handler::configure)
        .configure(audio_handler::configure)
        .configure(email_handler::configure)
        .configure(analytics_handler::configure)
        .configure(message_handler::configure)
        .configure(graphql_handler::configure);
}
