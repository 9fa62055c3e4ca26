use axum::extract::State;
use axum::Json;
use tracing::instrument;

use crate::ai::dto::{
    QuizData, QuizQuestion, QuizRequest, SummarizeData, SummarizeRequest, TranscribeData,
    TranscribeRequest,
};
use crate::auth::middleware::CurrentUser;
use crate::error::ApiError;
use crate::logs::recorder;
use crate::response::ApiResponse;
use crate::state::AppState;

/// First `n` characters of `text`, safe for multibyte input.
fn char_prefix(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

#[instrument(skip(state, user, payload))]
pub async fn summarize(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<SummarizeRequest>,
) -> Result<Json<ApiResponse<SummarizeData>>, ApiError> {
    let text = payload.text.trim();
    if text.is_empty() {
        return Err(ApiError::Validation(
            "Text is required for summarization.".into(),
        ));
    }

    // Placeholder until a real summarization backend is wired in.
    let summary = format!(
        "This is a placeholder summary for: {}...",
        char_prefix(text, 100)
    );

    recorder::record(&state, Some(user.id), "ai_summarize", "success");

    Ok(Json(ApiResponse::with_message(
        "Text summarized successfully.",
        SummarizeData {
            original_length: text.chars().count(),
            summary_length: summary.chars().count(),
            summary,
        },
    )))
}

#[instrument(skip(state, user, payload))]
pub async fn generate_quiz(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<QuizRequest>,
) -> Result<Json<ApiResponse<QuizData>>, ApiError> {
    let topic = payload.topic.trim();
    if topic.is_empty() {
        return Err(ApiError::Validation(
            "Topic is required for quiz generation.".into(),
        ));
    }

    // Placeholder question templates, cycled to the requested count.
    let templates = [
        format!("What is {topic}?"),
        format!("Why is {topic} important?"),
    ];
    let count = payload.num_questions.clamp(1, 10);
    let questions: Vec<QuizQuestion> = (0..count)
        .map(|i| QuizQuestion {
            id: i + 1,
            question: templates[i as usize % templates.len()].clone(),
            options: vec![
                "Option A".into(),
                "Option B".into(),
                "Option C".into(),
                "Option D".into(),
            ],
            correct_answer: i % 4,
        })
        .collect();

    recorder::record(&state, Some(user.id), "ai_quiz_generated", "success");

    Ok(Json(ApiResponse::with_message(
        "Quiz generated successfully.",
        QuizData {
            topic: topic.to_string(),
            num_questions: questions.len(),
            questions,
        },
    )))
}

#[instrument(skip(state, user, payload))]
pub async fn transcribe(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<TranscribeRequest>,
) -> Result<Json<ApiResponse<TranscribeData>>, ApiError> {
    if payload.audio_url.is_none() && payload.audio_file.is_none() {
        return Err(ApiError::Validation(
            "Audio URL or audio file is required for transcription.".into(),
        ));
    }

    // Placeholder until a real transcription backend is wired in.
    let source = payload
        .audio_url
        .unwrap_or_else(|| "File upload".to_string());
    let transcription = format!("This is a placeholder transcription. Audio source: {source}");

    recorder::record(&state, Some(user.id), "ai_transcribe", "success");

    Ok(Json(ApiResponse::with_message(
        "Audio transcribed successfully.",
        TranscribeData {
            transcription,
            source,
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_prefix_is_multibyte_safe() {
        let text = "é".repeat(150);
        let prefix = char_prefix(&text, 100);
        assert_eq!(prefix.chars().count(), 100);
    }

    #[test]
    fn char_prefix_keeps_short_input_whole() {
        assert_eq!(char_prefix("short", 100), "short");
    }
}
