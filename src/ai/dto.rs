use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default = "default_num_questions")]
    pub num_questions: u32,
}

fn default_num_questions() -> u32 {
    5
}

#[derive(Debug, Deserialize)]
pub struct TranscribeRequest {
    pub audio_url: Option<String>,
    pub audio_file: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeData {
    pub original_length: usize,
    pub summary: String,
    pub summary_length: usize,
}

#[derive(Debug, Serialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: u32,
}

#[derive(Debug, Serialize)]
pub struct QuizData {
    pub topic: String,
    pub num_questions: usize,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize)]
pub struct TranscribeData {
    pub transcription: String,
    pub source: String,
}
