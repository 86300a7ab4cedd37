//! Answer assembly and generation.

use std::sync::Arc;

use tracing::{error, info};

use finbuddy_model::{ChatModel, Message};

use crate::document::{Answer, Retrieved};

/// Fixed reply when retrieval finds nothing relevant.
pub const NO_RELEVANT_TEXT_MESSAGE: &str = "No relevant text found in the uploaded document.";

const SYSTEM_INSTRUCTION: &str = "You are FinBuddy, a professional financial analyst. \
    You must read the provided document sections and answer the question clearly, \
    summarizing and contextualizing the relevant parts. \
    Be concise, factual, and explain as if presenting to an investor or executive.";

/// Assembles retrieved chunks into a grounded prompt and generates the
/// answer.
///
/// Every retrieved chunk is labeled `[Section N]` in rank order (not
/// document order), and the answer carries a traceability footer naming
/// the sections used.
pub struct AnswerComposer {
    chat: Arc<dyn ChatModel>,
}

impl AnswerComposer {
    /// Create a composer around the given chat model.
    pub fn new(chat: Arc<dyn ChatModel>) -> Self {
        Self { chat }
    }

    /// Generate an answer for `query` grounded in `retrieved`.
    ///
    /// With no retrieved chunks this short-circuits to
    /// [`NO_RELEVANT_TEXT_MESSAGE`] without invoking the model. A model
    /// failure becomes a readable error answer with the reason embedded —
    /// nothing on this path propagates an error to the caller.
    pub async fn compose(&self, query: &str, retrieved: &[Retrieved]) -> Answer {
        if retrieved.is_empty() {
            return Answer { text: NO_RELEVANT_TEXT_MESSAGE.to_string(), sections: Vec::new() };
        }

        let context = retrieved
            .iter()
            .enumerate()
            .map(|(i, r)| format!("[Section {}]: {}", i + 1, r.chunk.text))
            .collect::<Vec<_>>()
            .join("\n\n");

        let messages = [
            Message::system(SYSTEM_INSTRUCTION),
            Message::user(format!("Context from uploaded document:\n{context}\n\nQuestion: {query}")),
        ];

        match self.chat.generate(&messages).await {
            Ok(text) => {
                let sections: Vec<usize> = (1..=retrieved.len()).collect();
                let cited =
                    sections.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
                info!(sections = retrieved.len(), "composed grounded answer");
                Answer {
                    text: format!(
                        "{}\n\n_Response generated using the uploaded document context (Sections {cited})._",
                        text.trim()
                    ),
                    sections,
                }
            }
            Err(err) => {
                error!(error = %err, "answer generation failed");
                Answer { text: format!("Error generating answer: {err}"), sections: Vec::new() }
            }
        }
    }
}
