//! Interactive document question answering from the terminal.
//!
//! Loads one document (PDF, TXT, or CSV), builds the retrieval session,
//! and answers questions read from stdin until an empty line or EOF.
//!
//! Requires `GROQ_API_KEY` (answer generation) and `OPENAI_API_KEY`
//! (embeddings) in the environment or a `.env` file.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use finbuddy_model::groq::GroqClient;
use finbuddy_rag::{
    Chunker, DocQaPipeline, Document, DocumentKind, FixedWindowChunker, OpenAiEmbeddingProvider,
    RagConfig, SentenceChunker,
};

/// Ask questions about a financial document from your terminal.
#[derive(Debug, Parser)]
#[command(name = "finbuddy", version, about)]
struct Cli {
    /// Path to the document to load (PDF, TXT, or CSV).
    document: PathBuf,

    /// Maximum chunk size in characters.
    #[arg(long, default_value_t = 600)]
    max_chunk_size: usize,

    /// Number of document sections retrieved per question.
    #[arg(long, default_value_t = 3)]
    top_k: usize,

    /// Split on fixed character windows instead of sentence boundaries.
    #[arg(long)]
    fixed_windows: bool,
}

/// Infer the document kind from the file extension. Anything that is not
/// a PDF is read as UTF-8 text.
fn document_kind(path: &Path) -> DocumentKind {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => DocumentKind::Pdf,
        _ => DocumentKind::PlainText,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config =
        RagConfig::builder().max_chunk_size(cli.max_chunk_size).top_k(cli.top_k).build()?;
    let chunker: Arc<dyn Chunker> = if cli.fixed_windows {
        Arc::new(FixedWindowChunker::new(cli.max_chunk_size))
    } else {
        Arc::new(SentenceChunker::new(cli.max_chunk_size))
    };

    let pipeline = DocQaPipeline::builder()
        .config(config)
        .embedder(Arc::new(OpenAiEmbeddingProvider::from_env()?))
        .chat_model(Arc::new(GroqClient::from_env()?))
        .chunker(chunker)
        .build()?;

    let bytes = std::fs::read(&cli.document)
        .with_context(|| format!("failed to read {}", cli.document.display()))?;
    let document = Document::new(document_kind(&cli.document), bytes);

    println!("Processing {}...", cli.document.display());
    let session = pipeline.ingest(&document).await?;
    if session.is_empty() {
        println!("No text could be extracted; answers will say so.");
    } else {
        println!(
            "Document processed into {} section(s). Ask a question (empty line to quit).",
            session.chunks().len()
        );
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let question = line?;
        let question = question.trim();
        if question.is_empty() {
            break;
        }

        let answer = pipeline.answer(&session, question).await;
        println!("\n{}\n", answer.text);
    }

    Ok(())
}
