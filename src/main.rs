pub mod modules;
pub mod shared;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::modules::content_store::adapter::outgoing::sanity::{
    SanityClient, SanityConfig, SanityDocumentQuery, SanityDocumentRepository,
};
use crate::modules::content_store::application::ports::outgoing::{
    DocumentQuery, DocumentRepository,
};
use crate::modules::health::adapter::incoming::cli::check;
use crate::modules::health::application::services::CheckConnectionService;
use crate::modules::maintenance::adapter::incoming::cli::{cleanup, orphans};
use crate::modules::maintenance::adapter::outgoing::{AutoConfirm, TerminalPrompt};
use crate::modules::maintenance::application::domain::TypeCatalog;
use crate::modules::maintenance::application::ports::outgoing::ConfirmationPrompt;
use crate::modules::maintenance::application::services::{
    CleanupOrphansService, FindOrphansService, ReferenceSafeDeletionService,
};
use crate::modules::person::adapter::incoming::cli::person;
use crate::modules::person::adapter::outgoing::SanityPersonProfileQuery;
use crate::modules::person::application::services::GetPersonProfileService;
use crate::modules::schema::adapter::incoming::cli::{create, validate};
use crate::modules::schema::application::helpers::ReferenceResolver;
use crate::modules::schema::application::services::{
    CreateDocumentService, ValidateDocumentsService,
};
use crate::modules::skill_icon::adapter::incoming::cli::import_icons;
use crate::modules::skill_icon::adapter::outgoing::FsIconSource;
use crate::modules::skill_icon::application::services::ImportSkillIconsService;
use crate::shared::cli::CommandReport;

#[cfg(test)]
mod tests;

/// Schema validation and dataset maintenance for the profile CMS
#[derive(Parser)]
#[command(name = "profile-cms", version, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Store project id, overrides SANITY_PROJECT_ID
    #[arg(long, global = true)]
    project: Option<String>,

    /// Dataset name, overrides SANITY_DATASET
    #[arg(long, global = true)]
    dataset: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON document or array of documents
    Validate {
        file: PathBuf,

        /// Also check that references resolve in the dataset
        #[arg(long)]
        check_references: bool,
    },

    /// Create documents from a JSON file after validation
    Create { file: PathBuf },

    /// List documents whose type is not part of the schema
    Orphans {
        #[command(flatten)]
        types: TypeOptions,
    },

    /// Delete orphaned documents that nothing references
    Cleanup {
        /// Skip the interactive confirmation
        #[arg(short, long)]
        yes: bool,

        #[command(flatten)]
        types: TypeOptions,
    },

    /// Import every *.svg in a directory as a skill icon
    ImportIcons { dir: PathBuf },

    /// Export a person profile as JSON
    Person {
        slug: String,

        #[arg(short, long, default_value = person::DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Verify read and write access to the dataset
    Check,
}

#[derive(Args)]
struct TypeOptions {
    /// Types declared by the schema (defaults to the built-in document types)
    #[arg(long = "declared-type", env = "CMS_DECLARED_TYPES", value_delimiter = ',')]
    declared: Vec<String>,

    /// Extra system types that must never be deleted
    #[arg(long = "reserved-type", env = "CMS_RESERVED_TYPES", value_delimiter = ',')]
    reserved: Vec<String>,
}

impl TypeOptions {
    fn catalog(self) -> TypeCatalog {
        TypeCatalog::from_options(self.declared, self.reserved)
    }
}

/// Store adapters shared by every command of one run.
struct Store {
    client: SanityClient,
    query: Arc<dyn DocumentQuery>,
    repository: Arc<dyn DocumentRepository>,
}

impl Store {
    fn connect(project: Option<String>, dataset: Option<String>) -> anyhow::Result<Self> {
        let config = SanityConfig::from_lookup(|key| match key {
            "SANITY_PROJECT_ID" if project.is_some() => project.clone(),
            "SANITY_DATASET" if dataset.is_some() => dataset.clone(),
            _ => env::var(key).ok(),
        })
        .context("Invalid store configuration")?;
        debug!(config = ?config, "Store configuration loaded");

        let client = SanityClient::new(config).context("Failed to build store client")?;
        Ok(Self {
            query: Arc::new(SanityDocumentQuery::new(client.clone())),
            repository: Arc::new(SanityDocumentRepository::new(client.clone())),
            client,
        })
    }
}

fn load_env() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn execute(cli: Cli) -> anyhow::Result<CommandReport> {
    let Cli {
        project,
        dataset,
        command,
        ..
    } = cli;

    let report = match command {
        Commands::Validate {
            file,
            check_references,
        } => {
            let service = if check_references {
                let store = Store::connect(project, dataset)?;
                ValidateDocumentsService::with_resolver(ReferenceResolver::new(store.query))
            } else {
                ValidateDocumentsService::new()
            };
            validate::run(&service, &file, check_references).await
        }
        Commands::Create { file } => {
            let store = Store::connect(project, dataset)?;
            let service = CreateDocumentService::new(store.repository, store.query);
            create::run(&service, &file).await
        }
        Commands::Orphans { types } => {
            let store = Store::connect(project, dataset)?;
            let service = FindOrphansService::new(store.query, types.catalog());
            orphans::run(&service).await
        }
        Commands::Cleanup { yes, types } => {
            let store = Store::connect(project, dataset)?;
            let prompt: Arc<dyn ConfirmationPrompt> = if yes {
                Arc::new(AutoConfirm)
            } else {
                Arc::new(TerminalPrompt::stdio())
            };
            let service = CleanupOrphansService::new(
                Arc::new(FindOrphansService::new(
                    store.query.clone(),
                    types.catalog(),
                )),
                Arc::new(ReferenceSafeDeletionService::new(
                    store.repository,
                    store.query,
                    prompt,
                )),
            );
            cleanup::run(&service).await
        }
        Commands::ImportIcons { dir } => {
            let store = Store::connect(project, dataset)?;
            let service =
                ImportSkillIconsService::new(Arc::new(FsIconSource), store.query, store.repository);
            import_icons::run(&service, &dir).await
        }
        Commands::Person { slug, output } => {
            let store = Store::connect(project, dataset)?;
            let service =
                GetPersonProfileService::new(Arc::new(SanityPersonProfileQuery::new(store.client)));
            person::run(&service, &slug, &output).await
        }
        Commands::Check => {
            let store = Store::connect(project, dataset)?;
            let service =
                CheckConnectionService::new(store.query, store.repository, store.client.has_token());
            check::run(&service).await
        }
    };

    Ok(report)
}

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> ExitCode {
    load_env();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(cli).await {
        Ok(report) => {
            report.print();
            report.exit_code()
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "Command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    start()
}
