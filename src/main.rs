use std::io::Write;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scholarsync::api::{ApiClient, ApiError};
use scholarsync::chat::{ChatController, ChatSession};
use scholarsync::config::{ConfigError, DashboardConfig};
use scholarsync::render::{Element, professor, text};
use scholarsync::views::{chat, insights};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to fetch the list of professors")]
    ProfessorListUnavailable,
    #[error("no professor with id {0}")]
    ProfessorNotFound(i64),
    #[error("question must not be blank")]
    BlankQuestion,
    #[error("io failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "scholarsync", about = "Research data insights and professor chat")]
struct Cli {
    /// Analytics API root, e.g. http://127.0.0.1:8000/api
    #[arg(long, env = "SCHOLARSYNC_API_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Statistics overview, trends, accessibility and one professor.
    Insights {
        #[arg(long)]
        professor: Option<i64>,
    },
    /// List every professor available for selection.
    Professors,
    /// Show one professor's detail and publications.
    Professor { id: i64 },
    /// Interactive chat about a professor, read from stdin.
    Chat {
        #[arg(long)]
        professor: Option<i64>,
    },
    /// Ask a single question and print the answer.
    Ask {
        professor: i64,
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scholarsync=info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = DashboardConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url)?;
    }
    let client = ApiClient::new(&config)?;
    tracing::debug!(base_url = client.base_url(), "api client ready");

    match cli.command {
        Command::Insights { professor } => {
            let page = insights::research_insights(&client, professor).await;
            print_elements(&page)
        }
        Command::Professors => {
            let list = client.fetch_all_professors().await;
            print_elements(&professor::professor_list(list.as_deref()))
        }
        Command::Professor { id } => {
            let detail = client.fetch_professor(id).await;
            print_elements(&professor::professor_detail(detail.as_ref()))
        }
        Command::Chat { professor } => run_chat(client, professor).await,
        Command::Ask { professor, question } => run_ask(client, professor, &question.join(" ")).await,
    }
}

fn print_elements(elements: &[Element]) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text::paint(elements).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

async fn run_chat(client: ApiClient, professor_id: Option<i64>) -> Result<(), CliError> {
    let list = client
        .fetch_all_professors()
        .await
        .filter(|l| !l.is_empty())
        .ok_or(CliError::ProfessorListUnavailable)?;
    let selected = chat::pick_professor(&list, professor_id);
    if selected.is_none() {
        return Err(CliError::ProfessorNotFound(professor_id.unwrap_or_default()));
    }

    let controller = ChatController::new(client);
    let mut session = ChatSession::new(selected);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    chat::run_chat(&controller, &mut session, &list, stdin, &mut stdout).await?;
    tracing::info!(messages = session.transcript.len(), "chat session ended");
    Ok(())
}

async fn run_ask(client: ApiClient, professor_id: i64, question: &str) -> Result<(), CliError> {
    if question.trim().is_empty() {
        return Err(CliError::BlankQuestion);
    }
    let list = client
        .fetch_all_professors()
        .await
        .ok_or(CliError::ProfessorListUnavailable)?;
    let professor = chat::pick_professor(&list, Some(professor_id)).ok_or(CliError::ProfessorNotFound(professor_id))?;

    eprintln!("{}", chat::BUSY_MESSAGE);
    let controller = ChatController::new(client);
    let answer = chat::ask_once(&controller, professor, question)
        .await
        .ok_or(CliError::BlankQuestion)?;
    println!("{answer}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
