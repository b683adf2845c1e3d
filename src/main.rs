//! Checkview - terminal client for checklist assessment results
//!
//! Fetches a completed assessment response, prints a localized summary
//! (statistics plus answers grouped by area), and optionally downloads the
//! PDF report or submits an access-code request.
//!
//! Exit codes:
//!   0 - Success (including failed export / access request; those print a
//!       notice and leave the rest of the run intact)
//!   1 - Load failure, runtime error, or invalid arguments

mod api;
mod cli;
mod config;
mod locale;
mod models;
mod render;
mod summary;
mod view;
mod workflow;

use anyhow::{Context, Result};
use api::HttpResponseApi;
use cli::{Args, OutputFormat};
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use locale::{text, MessageKey};
use models::Language;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;
use view::ViewState;
use workflow::{
    AccessRequestWorkflow, DirectorySink, EnvSessionStore, ExportCoordinator, ExportOutcome,
    ReminderScheduler, SubmitResult,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args);

    info!("Checkview v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run_viewer(args).await {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Viewer failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .checkview.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".checkview.toml");

    if path.exists() {
        eprintln!("⚠️  .checkview.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .checkview.toml")?;

    println!("✅ Created .checkview.toml with default settings.");
    println!("   Edit it to customize the API URL, output directory, and reminder.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// A spinner for the wait on a network operation.
fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Run the complete viewer workflow. Returns exit code (0 or 1).
async fn run_viewer(args: Args) -> Result<i32> {
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let api = Arc::new(
        HttpResponseApi::new(&config.api.base_url, config.api.timeout_seconds)
            .context("Failed to create API client")?,
    );

    let mut reminder = ReminderScheduler::new(Duration::from_millis(config.reminder.delay_ms));
    let reminder_enabled = config.reminder.enabled;
    if reminder_enabled {
        reminder.arm();
    }

    let id = args.response_id().to_string();

    // Step 1: load the record. Ready and Error are terminal for this
    // identifier; the only recovery from Error is leaving.
    let pb = spinner(text(MessageKey::LoadingResults, Language::En));
    let mut view = view::ResponseView::new();
    view.load(api.as_ref(), &id).await;
    pb.finish_and_clear();

    let data = match view.state() {
        ViewState::Ready(data) => data.clone(),
        ViewState::Error(message) => {
            eprintln!("\n❌ {}", message);
            eprintln!("   {}", text(MessageKey::GoHome, Language::En));
            return Ok(1);
        }
        ViewState::Loading => unreachable!("load settles before rendering"),
    };

    let language = data.response.language;

    // Step 2: render the summary.
    match args.format {
        OutputFormat::Text => println!("{}", render::render_summary(&data)),
        OutputFormat::Json => println!("{}", render::render_json(&data)?),
    }

    // Step 3: optional export. Failure surfaces a notice and nothing else;
    // the rendered view above is unaffected. Downloading the report is not
    // a designated interaction, so the reminder stays armed.
    if args.export {
        let sink = Arc::new(DirectorySink::new(&config.export.output_dir));
        let coordinator = ExportCoordinator::new(api.clone(), sink);

        let pb = spinner(text(MessageKey::Downloading, language));
        let result = coordinator.export(&id).await;
        pb.finish_and_clear();

        match result {
            Ok(ExportOutcome::Saved(path)) => {
                println!(
                    "💾 {}: {}",
                    text(MessageKey::ExportSaved, language),
                    path.display()
                );
            }
            Ok(ExportOutcome::AlreadyInFlight) => {
                debug!("duplicate export trigger ignored");
            }
            Err(e) => {
                warn!("export failed: {}", e);
                eprintln!("⚠️  {}", text(MessageKey::ExportFailed, language));
            }
        }
    }

    // Step 4: optional access-code request.
    if args.request_access {
        reminder.mark_interacted();

        println!("\n✉️  {}", text(MessageKey::RequestAccessCode, language));
        println!("   {}", text(MessageKey::AccessPrompt, language));

        let mut workflow = AccessRequestWorkflow::new();
        workflow.open(&EnvSessionStore);
        if let Some(ref email) = args.email {
            workflow.set_email(email.clone());
        }
        if let Some(ref message) = args.message {
            workflow.set_message(message.clone());
        }

        if !workflow.can_submit() {
            eprintln!("⚠️  {}", text(MessageKey::EmailRequired, language));
            workflow.cancel();
        } else {
            let pb = spinner(text(MessageKey::Sending, language));
            let result = workflow.submit(api.as_ref()).await;
            pb.finish_and_clear();

            match result {
                SubmitResult::Accepted => {
                    println!("✉️  {}", text(MessageKey::AccessConfirmation, language));
                }
                SubmitResult::Failed(e) => {
                    warn!("access request failed: {}", e);
                    eprintln!("⚠️  {}", text(MessageKey::AccessFailed, language));
                }
                SubmitResult::Gated => {
                    eprintln!("⚠️  {}", text(MessageKey::EmailRequired, language));
                }
            }
        }
    }

    // Step 5: the engagement reminder. Interactions above keep it hidden;
    // otherwise wait out the countdown and disclose once.
    if reminder_enabled && !reminder.has_interacted() && reminder.wait().await {
        print_reminder(language);
    }

    Ok(0)
}

/// Print the reminder banner with its two shortcut links.
fn print_reminder(language: Language) {
    println!("\n🎯 {}", text(MessageKey::ReminderTitle, language));
    println!("   {}", text(MessageKey::ReminderBody, language));
    println!(
        "   {}: {}",
        text(MessageKey::StartCertification, language),
        render::CERTIFICATION_URL
    );
    println!(
        "   {}: {}",
        text(MessageKey::AccessAcademy, language),
        render::ACADEMY_URL
    );
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .checkview.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
