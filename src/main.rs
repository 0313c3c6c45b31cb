use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

use docchat_cli::ChatSession;
use docchat_core::{AppConfig, EmbeddingProvider, Error, LlmProvider, ProviderKind, VectorStore};
use docchat_google::{GoogleClient, GoogleConfig};
use docchat_openai::{OpenAiClient, OpenAiConfig};
use docchat_rag::{AnswerPipeline, IngestionPipeline, PgVectorStore};

#[derive(Parser)]
#[command(name = "docchat")]
#[command(about = "Chat with a PDF document through retrieval-augmented generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the configured PDF into the vector collection
    Ingest,
    /// Start the interactive chat
    Chat,
    /// Ask a single question and print the answer
    Ask {
        /// The question, as free text
        #[arg(trailing_var_arg = true)]
        question: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = AppConfig::from_env();

    match cli.command {
        Command::Ingest => run_ingest(&config).await?,
        Command::Chat => run_chat(&config).await?,
        Command::Ask { question } => run_ask(&config, &question).await?,
    }

    Ok(())
}

/// Select the provider once from the configured credentials and hand the
/// same client out under both capability traits.
fn build_providers(
    config: &AppConfig,
) -> docchat_core::Result<(Arc<dyn EmbeddingProvider>, Arc<dyn LlmProvider>)> {
    let kind = ProviderKind::from_credentials(
        config.openai_api_key.as_deref(),
        config.google_api_key.as_deref(),
    )?;

    println!("{}", format!("Usando {}...", kind.display_name()).dimmed());

    match kind {
        ProviderKind::OpenAi => {
            let client = Arc::new(OpenAiClient::new(OpenAiConfig::from_config(config)?)?);
            Ok((
                client.clone() as Arc<dyn EmbeddingProvider>,
                client as Arc<dyn LlmProvider>,
            ))
        }
        ProviderKind::Google => {
            let client = Arc::new(GoogleClient::new(GoogleConfig::from_config(config)?)?);
            Ok((
                client.clone() as Arc<dyn EmbeddingProvider>,
                client as Arc<dyn LlmProvider>,
            ))
        }
    }
}

async fn build_store(config: &AppConfig) -> docchat_core::Result<Arc<dyn VectorStore>> {
    let database_url = config.require_database_url()?;
    let collection = config.require_collection_name()?;

    let mut store = PgVectorStore::new(database_url, collection);
    store.connect().await?;
    Ok(Arc::new(store))
}

async fn build_answer_pipeline(config: &AppConfig) -> docchat_core::Result<AnswerPipeline> {
    let (embedder, llm) = build_providers(config)?;
    let store = build_store(config).await?;
    Ok(AnswerPipeline::new(embedder, llm, store))
}

async fn run_ingest(config: &AppConfig) -> Result<()> {
    let pdf_path = config.require_pdf_path()?.to_string();
    let collection = config.require_collection_name()?.to_string();

    let (embedder, _) = build_providers(config)?;
    let store = build_store(config).await?;

    println!("Carregando PDF: {}", pdf_path);
    let pipeline = IngestionPipeline::new(embedder, store);
    let report = pipeline.run(&pdf_path).await?;

    println!("✓ {} página(s) carregada(s)", report.pages);
    println!("✓ {} chunk(s) criado(s)", report.chunks);
    println!();
    println!("{}", "✅ Ingestão concluída com sucesso!".green());
    println!("   - {} chunks armazenados", report.stored);
    println!("   - Collection: {}", collection);

    Ok(())
}

async fn run_chat(config: &AppConfig) -> Result<()> {
    let pipeline = match build_answer_pipeline(config).await {
        Ok(pipeline) => pipeline,
        Err(e) => {
            println!();
            println!("{} {}", "❌ Erro ao iniciar o sistema:".red().bold(), e);
            println!();
            println!("Verifique se:");
            println!("  1. O arquivo .env está configurado corretamente");
            println!("  2. O PostgreSQL está rodando (docker compose up -d)");
            println!("  3. A ingestão foi executada (docchat ingest)");
            return Err(e.into());
        }
    };

    ChatSession::new(pipeline).run().await?;
    Ok(())
}

async fn run_ask(config: &AppConfig, question: &[String]) -> Result<()> {
    let question = question.join(" ");
    if question.trim().is_empty() {
        return Err(Error::InvalidInput(
            "Uso: docchat ask <sua pergunta>. Exemplo: docchat ask Qual o faturamento da empresa?"
                .to_string(),
        )
        .into());
    }

    let pipeline = build_answer_pipeline(config).await?;

    println!("{} {}", "PERGUNTA:".blue().bold(), question);
    let answer = pipeline.answer(&question).await?;
    println!("{} {}", "RESPOSTA:".green().bold(), answer);

    Ok(())
}
