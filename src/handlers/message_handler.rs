use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::SendMessageRequest};

#[get("/api/messages")]
async fn list_messages(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let messages = state.message_service.list_messages().await?;
    Ok(HttpResponse::Ok().json(messages))
}

#[post("/api/messages")]
async fn send_message(
    state: web::Data<Arc<AppState>>,
    request: web::Json<SendMessageRequest>,
) -> Result<HttpResponse, AppError> {
    let message = state
        .message_service
        .send_message(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(message))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_messages).service(send_message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Message;
    use crate::repositories::message_repository::MockMessageRepository;
    use crate::test_utils::{app_state, providers, repositories};
    use actix_web::{http::StatusCode, test, App};

    async fn state_with(messages: MockMessageRepository) -> web::Data<Arc<AppState>> {
        let mut repos = repositories();
        repos.messages = Arc::new(messages);
        web::Data::new(Arc::new(app_state(repos, providers()).await))
    }

    #[actix_web::test]
    async fn posted_message_is_created() {
        let mut messages = MockMessageRepository::new();
        messages
            .expect_create()
            .withf(|m| m.body == "Class moved to room 4" && m.author == "Tom")
            .returning(|m| Ok(m));

        let app = test::init_service(
            App::new()
                .app_data(state_with(messages).await)
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/messages")
            .set_json(serde_json::json!({ "body": "Class moved to room 4", "author": "Tom" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn messages_are_listed_as_returned() {
        let mut messages = MockMessageRepository::new();
        messages.expect_latest().returning(|_| {
            Ok(vec![
                Message::new("second", "Ben"),
                Message::new("first", "Anna"),
            ])
        });

        let app = test::init_service(
            App::new()
                .app_data(state_with(messages).await)
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/messages").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0]["body"], "second");
        assert_eq!(body[1]["author"], "Anna");
    }
}
