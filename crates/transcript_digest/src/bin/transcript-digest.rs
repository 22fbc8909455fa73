use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use transcript_digest::{
    api::ApiClient, azure_openai::AzureOpenAIClient, tracing::init_tracing_subscriber,
    types::SummaryResult, DigestProcessorBuilder, FallbackSummarizer, LlmErrorPolicy,
};

#[derive(Parser)]
#[command(
    name = "transcript-digest",
    about = "Summarize YouTube video transcripts"
)]
struct Cli {
    /// YouTube video ID
    video_id: String,

    /// Base URL for the web app API
    #[arg(long, env = "API_BASE_URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// Output file for the summary (prints to stdout if not specified)
    #[arg(long)]
    output: Option<PathBuf>,

    /// What to do when the LLM provider fails
    #[arg(long, value_enum, default_value_t = OnLlmError::Fallback)]
    on_llm_error: OnLlmError,

    /// Azure OpenAI API key
    #[arg(long, env = "AZURE_OPENAI_API_KEY", hide_env_values = true)]
    azure_api_key: Option<String>,

    /// Azure OpenAI resource endpoint
    #[arg(long, env = "AZURE_OPENAI_ENDPOINT")]
    azure_endpoint: Option<String>,

    /// Azure OpenAI API version
    #[arg(
        long,
        env = "AZURE_OPENAI_API_VERSION",
        default_value = "2024-12-01-preview"
    )]
    azure_api_version: String,

    /// Azure OpenAI chat deployment name
    #[arg(long, env = "AZURE_OPENAI_DEPLOYMENT", default_value = "gpt-4-1")]
    azure_deployment: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum OnLlmError {
    /// Substitute the deterministic excerpt summary
    Fallback,
    /// Exit with the provider error
    Abort,
}

impl From<OnLlmError> for LlmErrorPolicy {
    fn from(value: OnLlmError) -> Self {
        match value {
            OnLlmError::Fallback => LlmErrorPolicy::Fallback,
            OnLlmError::Abort => LlmErrorPolicy::Abort,
        }
    }
}

fn emit(result: &SummaryResult, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let json = serde_json::to_string_pretty(result)?;
            std::fs::write(path, json)?;
            tracing::info!(path = %path.display(), "Summary saved");
        }
        None => {
            let title = result.title.as_deref().unwrap_or("Untitled Video");
            println!("\n{}\n", "=".repeat(40));
            println!("Summary for: {title}\n");
            println!("{}", result.summary);
            println!("\n{}", "=".repeat(40));
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let source = ApiClient::new(&cli.api_url);
    let policy = LlmErrorPolicy::from(cli.on_llm_error);

    tracing::info!(video_id = %cli.video_id, api_url = %cli.api_url, "Starting digest");

    let result = match (cli.azure_api_key, cli.azure_endpoint) {
        (Some(api_key), Some(endpoint)) => {
            let summarizer = AzureOpenAIClient::new(
                endpoint,
                api_key,
                cli.azure_api_version,
                cli.azure_deployment,
            );

            DigestProcessorBuilder::new()
                .source(source)
                .summarizer(summarizer)
                .on_llm_error(policy)
                .build()
                .run(&cli.video_id)
                .await?
        }
        _ => {
            if policy == LlmErrorPolicy::Abort {
                anyhow::bail!(
                    "Azure OpenAI is not configured; set AZURE_OPENAI_API_KEY and \
                     AZURE_OPENAI_ENDPOINT, or use --on-llm-error fallback"
                );
            }
            tracing::warn!("Azure OpenAI is not configured, using the excerpt fallback");

            DigestProcessorBuilder::new()
                .source(source)
                .summarizer(FallbackSummarizer)
                .on_llm_error(policy)
                .build()
                .run(&cli.video_id)
                .await?
        }
    };

    emit(&result, cli.output.as_deref())
}
