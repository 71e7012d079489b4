//! Query command - ask a question against the indexed content

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::client::RagClient;
use crate::core::types::SourceRef;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the query command
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// The question to answer
    pub question: String,

    /// Number of chunks to retrieve (defaults to configuration)
    #[arg(long, short = 'k')]
    pub top_k: Option<usize>,

    /// Only show source citations (no answer text)
    #[arg(long)]
    pub sources_only: bool,
}

/// Query response
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub sources: Vec<SourceRef>,
}

/// Execute the query command
pub async fn execute(
    args: QueryArgs,
    client: &Arc<RagClient>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.question.trim().is_empty() {
        return Err("Question cannot be empty.".into());
    }

    if args.top_k == Some(0) {
        return Err("top_k must be at least 1.".into());
    }

    let output = client.query(&args.question, args.top_k).await?;

    let response = QueryResponse {
        question: args.question.clone(),
        answer: if args.sources_only {
            None
        } else {
            Some(output.answer.clone())
        },
        sources: output.sources,
    };

    match format {
        OutputFormat::Human => {
            if let Some(answer) = &response.answer {
                println!("{answer}");
            }

            if response.sources.is_empty() {
                println!("\n{}", colors::dim("(no sources)"));
            } else {
                println!("\n{}", colors::label("Sources:"));
                for (i, source) in response.sources.iter().enumerate() {
                    println!(
                        "[{}] {} {}",
                        colors::rank(&(i + 1).to_string()),
                        colors::file_path(&source.source),
                        colors::dim(&format!(
                            "(chunk {}, score: {:.3})",
                            source.sequence_index, source.score
                        ))
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
