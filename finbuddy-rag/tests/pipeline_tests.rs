//! End-to-end pipeline scenarios with deterministic collaborators.

use std::sync::Arc;

use async_trait::async_trait;

use finbuddy_model::MockChatModel;
use finbuddy_rag::{
    DocQaPipeline, Document, DocumentKind, EmbeddingProvider, NO_RELEVANT_TEXT_MESSAGE, RagConfig,
    RagError, SessionIndex,
};

const REPORT: &str = "Revenue grew 10%. Profit fell 2%. Outlook is stable.";

const VOCAB: [&str; 3] = ["revenue", "profit", "outlook"];

/// Embeds text as keyword counts over a tiny fixed vocabulary, so nearest
/// neighbors are predictable from word overlap.
struct KeywordEmbedder;

#[async_trait]
impl EmbeddingProvider for KeywordEmbedder {
    async fn embed(&self, text: &str) -> finbuddy_rag::Result<Vec<f32>> {
        let lower = text.to_lowercase();
        Ok(VOCAB.iter().map(|word| lower.matches(word).count() as f32).collect())
    }

    fn dimensions(&self) -> usize {
        VOCAB.len()
    }
}

/// An embedder standing in for an unreachable backend.
struct UnreachableEmbedder;

#[async_trait]
impl EmbeddingProvider for UnreachableEmbedder {
    async fn embed(&self, _text: &str) -> finbuddy_rag::Result<Vec<f32>> {
        Err(RagError::EmbeddingError {
            provider: "test".into(),
            message: "connection refused".into(),
        })
    }

    fn dimensions(&self) -> usize {
        VOCAB.len()
    }
}

fn pipeline(
    chat: Arc<MockChatModel>,
    embedder: Arc<dyn EmbeddingProvider>,
    top_k: usize,
) -> DocQaPipeline {
    DocQaPipeline::builder()
        .config(RagConfig::builder().max_chunk_size(25).top_k(top_k).build().unwrap())
        .embedder(embedder)
        .chat_model(chat)
        .build()
        .unwrap()
}

fn report_document() -> Document {
    Document::new(DocumentKind::PlainText, REPORT.as_bytes())
}

#[tokio::test]
async fn empty_document_answers_with_fixed_message_and_no_model_call() {
    let chat = Arc::new(MockChatModel::replying("should never be generated"));
    let pipeline = pipeline(chat.clone(), Arc::new(KeywordEmbedder), 3);

    let session =
        pipeline.ingest(&Document::new(DocumentKind::PlainText, Vec::new())).await.unwrap();
    assert!(session.is_empty());

    let answer = pipeline.answer(&session, "What was profit?").await;
    assert_eq!(answer.text, NO_RELEVANT_TEXT_MESSAGE);
    assert!(answer.sections.is_empty());
    assert_eq!(chat.calls(), 0);
}

#[tokio::test]
async fn whitespace_only_document_yields_an_empty_session() {
    let chat = Arc::new(MockChatModel::replying("unused"));
    let pipeline = pipeline(chat, Arc::new(KeywordEmbedder), 3);

    let session = pipeline
        .ingest(&Document::new(DocumentKind::PlainText, "  \n\t  ".as_bytes()))
        .await
        .unwrap();
    assert!(session.is_empty());
}

#[tokio::test]
async fn profit_question_retrieves_the_profit_chunk_and_cites_section_one() {
    let chat = Arc::new(MockChatModel::replying("Profit declined by two percent."));
    let pipeline = pipeline(chat.clone(), Arc::new(KeywordEmbedder), 1);

    let session = pipeline.ingest(&report_document()).await.unwrap();
    assert_eq!(session.chunks().len(), 3);

    let retrieved = pipeline.retrieve(&session, "What was profit?").await.unwrap();
    assert_eq!(retrieved.len(), 1);
    assert_eq!(retrieved[0].chunk.text, "Profit fell 2%.");
    assert_eq!(retrieved[0].rank, 0);

    let answer = pipeline.answer(&session, "What was profit?").await;
    assert!(answer.text.starts_with("Profit declined by two percent."));
    assert!(answer.text.contains("(Sections 1)."));
    assert_eq!(answer.sections, [1]);
    assert_eq!(chat.calls(), 1);
}

#[tokio::test]
async fn broad_question_cites_all_retrieved_sections_in_order() {
    let chat = Arc::new(MockChatModel::replying("The report covers all three topics."));
    let pipeline = pipeline(chat, Arc::new(KeywordEmbedder), 3);

    let session = pipeline.ingest(&report_document()).await.unwrap();
    let answer = pipeline.answer(&session, "Summarize revenue, profit, and outlook.").await;

    assert!(answer.text.contains("(Sections 1, 2, 3)."));
    assert_eq!(answer.sections, [1, 2, 3]);
}

#[tokio::test]
async fn model_timeout_becomes_a_readable_error_answer() {
    let chat = Arc::new(MockChatModel::timing_out());
    let pipeline = pipeline(chat.clone(), Arc::new(KeywordEmbedder), 3);

    let session = pipeline.ingest(&report_document()).await.unwrap();
    let answer = pipeline.answer(&session, "What was profit?").await;

    assert!(answer.text.starts_with("Error generating answer"));
    assert!(answer.text.contains("timeout"));
    assert!(answer.sections.is_empty());
    assert_eq!(chat.calls(), 1);
}

#[tokio::test]
async fn ingest_surfaces_an_embedding_failure_as_an_error() {
    let chat = Arc::new(MockChatModel::replying("unused"));
    let pipeline = pipeline(chat, Arc::new(UnreachableEmbedder), 3);

    let err = pipeline.ingest(&report_document()).await.unwrap_err();
    assert!(matches!(err, RagError::PipelineError(_)));
    assert!(err.to_string().contains("connection refused"));
}

#[tokio::test]
async fn retrieval_over_an_empty_session_never_calls_the_embedder() {
    // The embedder would fail if called; an empty session short-circuits first.
    let chat = Arc::new(MockChatModel::replying("unused"));
    let pipeline = pipeline(chat, Arc::new(UnreachableEmbedder), 3);

    let retrieved = pipeline.retrieve(&SessionIndex::empty(), "anything").await.unwrap();
    assert!(retrieved.is_empty());
}

#[tokio::test]
async fn query_embedding_failure_degrades_to_an_error_answer() {
    let chat = Arc::new(MockChatModel::replying("unused"));
    let good = pipeline(chat.clone(), Arc::new(KeywordEmbedder), 3);
    let session = good.ingest(&report_document()).await.unwrap();

    let failing = pipeline(chat.clone(), Arc::new(UnreachableEmbedder), 3);
    let answer = failing.answer(&session, "What was profit?").await;

    assert!(answer.text.starts_with("Error generating answer"));
    assert_eq!(chat.calls(), 0);
}

#[tokio::test]
async fn reingesting_the_same_document_retrieves_identically() {
    let chat = Arc::new(MockChatModel::replying("unused"));
    let pipeline = pipeline(chat, Arc::new(KeywordEmbedder), 2);

    let first = pipeline.ingest(&report_document()).await.unwrap();
    let second = pipeline.ingest(&report_document()).await.unwrap();

    let a = pipeline.retrieve(&first, "How is the outlook?").await.unwrap();
    let b = pipeline.retrieve(&second, "How is the outlook?").await.unwrap();

    let texts_a: Vec<&str> = a.iter().map(|r| r.chunk.text.as_str()).collect();
    let texts_b: Vec<&str> = b.iter().map(|r| r.chunk.text.as_str()).collect();
    assert_eq!(texts_a, texts_b);
    assert_eq!(texts_a[0], "Outlook is stable.");
}
