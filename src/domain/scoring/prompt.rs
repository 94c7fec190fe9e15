//! Prompt construction for the scoring and summary requests.
//!
//! Pure and deterministic: identical answers always produce byte-identical
//! prompts. Scores are embedded as their human-readable label, never as the
//! bare integer.

use serde::Serialize;

use crate::domain::assessment::AnswerRecord;
use crate::domain::foundation::ReadinessScore;

use super::ScoringStrategy;

/// System role sent with every request.
pub const ASSESSOR_ROLE: &str = "You are an ISO 27001 readiness assessor.";

/// Generation budget for a scoring request.
pub const SCORING_MAX_TOKENS: u32 = 1024;
/// Sampling temperature for a scoring request.
pub const SCORING_TEMPERATURE: f32 = 0.2;
/// Generation budget for the summary request.
pub const SUMMARY_MAX_TOKENS: u32 = 512;
/// Sampling temperature for the summary request.
pub const SUMMARY_TEMPERATURE: f32 = 0.3;

const SUMMARY_INSTRUCTION: &str = "Summarize the following ISO 27001 assessment in a concise paragraph, highlighting strengths, weaknesses, and overall readiness.";

/// What a prompt asks the assessor for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    Scoring,
    Summary,
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptKind::Scoring => write!(f, "scoring"),
            PromptKind::Summary => write!(f, "summary"),
        }
    }
}

/// A fully parameterized completion request payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub kind: PromptKind,
    /// Catalog position for per-item scoring prompts.
    pub item_index: Option<usize>,
    pub system_role: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Every prompt needed for one results request.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSet {
    pub scoring: Vec<Prompt>,
    pub summary: Prompt,
}

/// Builds assessor prompts from answer records.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder {
    strategy: ScoringStrategy,
}

impl PromptBuilder {
    pub fn new(strategy: ScoringStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> ScoringStrategy {
        self.strategy
    }

    /// Builds the scoring prompts and the summary prompt.
    pub fn build(&self, answers: &[AnswerRecord]) -> PromptSet {
        PromptSet {
            scoring: self.scoring_prompts(answers),
            summary: Self::summary_prompt(answers),
        }
    }

    /// Scoring prompts according to the configured strategy.
    pub fn scoring_prompts(&self, answers: &[AnswerRecord]) -> Vec<Prompt> {
        match self.strategy {
            ScoringStrategy::FirstItem => answers
                .first()
                .map(|answer| Self::scoring_prompt(0, answer))
                .into_iter()
                .collect(),
            ScoringStrategy::PerItem => answers
                .iter()
                .enumerate()
                .map(|(index, answer)| Self::scoring_prompt(index, answer))
                .collect(),
        }
    }

    /// Scoring prompt for a single answer.
    pub fn scoring_prompt(index: usize, answer: &AnswerRecord) -> Prompt {
        let scoring_key = ReadinessScore::ALL
            .iter()
            .map(|s| s.display_label())
            .collect::<Vec<_>>()
            .join("\n");

        let user_prompt = format!(
            "{role}\n\
             Given the following question, answer, and comment, assign a score (0-3) and provide a brief justification.\n\
             \n\
             Question: {question}\n\
             Answer: {answer}\n\
             Comment: {comment}\n\
             \n\
             Scoring key:\n\
             {scoring_key}\n\
             \n\
             Respond in this format:\n\
             Score: [score]\n\
             Justification: [your comment]\n",
            role = ASSESSOR_ROLE,
            question = answer.question,
            answer = answer.answer_label(),
            comment = answer.comment,
            scoring_key = scoring_key,
        );

        Prompt {
            kind: PromptKind::Scoring,
            item_index: Some(index),
            system_role: ASSESSOR_ROLE.to_string(),
            user_prompt,
            max_tokens: SCORING_MAX_TOKENS,
            temperature: SCORING_TEMPERATURE,
        }
    }

    /// Summary prompt over every answer, one numbered block each.
    pub fn summary_prompt(answers: &[AnswerRecord]) -> Prompt {
        let mut user_prompt = format!("{}\n\n", SUMMARY_INSTRUCTION);
        for (i, answer) in answers.iter().enumerate() {
            user_prompt.push_str(&format!(
                "{}. Q: {}\nA: {}\nComment: {}\n",
                i + 1,
                answer.question,
                answer.answer_label(),
                answer.comment
            ));
        }

        Prompt {
            kind: PromptKind::Summary,
            item_index: None,
            system_role: ASSESSOR_ROLE.to_string(),
            user_prompt,
            max_tokens: SUMMARY_MAX_TOKENS,
            temperature: SUMMARY_TEMPERATURE,
        }
    }
}
