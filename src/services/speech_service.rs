use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use validator::Validate;

use crate::{
    clients::{SpeechSynthesizer, Voice},
    errors::{AppError, AppResult},
    models::dto::{
        request::{GenerateAudioRequest, QuestionAudioRequest},
        response::{AudioResponse, QuestionAudioResponse},
    },
    repositories::TestRepository,
};

const AUDIO_DATA_URL_PREFIX: &str = "data:audio/mpeg;base64,";

fn audio_data_url(audio: &[u8]) -> String {
    format!("{}{}", AUDIO_DATA_URL_PREFIX, STANDARD.encode(audio))
}

/// Listening-exercise audio.
pub struct SpeechService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    tests: Arc<dyn TestRepository>,
    default_voice_id: String,
}

impl SpeechService {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        tests: Arc<dyn TestRepository>,
        default_voice_id: String,
    ) -> Self {
        Self {
            synthesizer,
            tests,
            default_voice_id,
        }
    }

    pub async fn generate_audio(&self, request: GenerateAudioRequest) -> AppResult<AudioResponse> {
        request.validate()?;

        let voice_id = request
            .voice_id
            .unwrap_or_else(|| self.default_voice_id.clone());
        let audio = self.synthesizer.synthesize(&request.text, &voice_id).await?;

        Ok(AudioResponse {
            audio_data: audio_data_url(&audio),
            voice_id,
        })
    }

    /// Synthesises the text with the default voice and stores it on the question.
    pub async fn generate_question_audio(
        &self,
        question_id: &str,
        request: QuestionAudioRequest,
    ) -> AppResult<QuestionAudioResponse> {
        request.validate()?;

        self.tests.find_question(question_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Question with id '{}' not found", question_id))
        })?;

        let audio = self
            .synthesizer
            .synthesize(&request.text, &self.default_voice_id)
            .await?;
        let audio_url = audio_data_url(&audio);

        self.tests.set_question_audio(question_id, &audio_url).await?;
        log::info!("Attached generated audio to question '{}'", question_id);

        Ok(QuestionAudioResponse {
            question_id: question_id.to_string(),
            audio_url,
        })
    }

    pub async fn list_voices(&self) -> AppResult<Vec<Voice>> {
        self.synthesizer.voices().await
    }
}
