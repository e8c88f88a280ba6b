use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::AppResult,
    models::{domain::Message, dto::request::SendMessageRequest},
    repositories::MessageRepository,
};

const LATEST_MESSAGES: i64 = 100;

pub struct MessageService {
    repository: Arc<dyn MessageRepository>,
}

impl MessageService {
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self { repository }
    }

    /// The latest hundred messages, newest first.
    pub async fn list_messages(&self) -> AppResult<Vec<Message>> {
        self.repository.latest(LATEST_MESSAGES).await
    }

    pub async fn send_message(&self, request: SendMessageRequest) -> AppResult<Message> {
        request.validate()?;

        let message = self
            .repository
            .create(Message::new(&request.body, &request.author))
            .await?;
        log::debug!("Message {} posted by {}", message.id, message.author);
        Ok(message)
    }
}
