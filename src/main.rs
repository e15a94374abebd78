use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budgetbook::audit::AuditLogger;
use budgetbook::cli::{
    handle_account_command, handle_budget_command, handle_recurring_command, handle_todo_command,
};
use budgetbook::client::BudgetClient;
use budgetbook::config::{BudgetbookPaths, Settings};

/// Environment variable holding the log filter (e.g. "budgetbook=debug")
const LOG_ENV: &str = "BUDGETBOOK_LOG";

#[derive(Parser)]
#[command(
    name = "budgetbook",
    version,
    about = "Monthly budgets, recurring expenses and post-lock todo lists",
    long_about = "budgetbook plans each month as a budget of income, expense and \
                  savings lines. Once every unit of income is assigned the budget \
                  is locked, and the payments and transfers it calls for are \
                  tracked on a todo list until the month is complete."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(budgetbook::cli::AccountCommands),

    /// Recurring expense templates
    #[command(subcommand, alias = "rec")]
    Recurring(budgetbook::cli::RecurringCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(budgetbook::cli::BudgetCommands),

    /// Todo list of locked budgets
    #[command(subcommand)]
    Todo(budgetbook::cli::TodoCommands),

    /// Show recent activity recorded by this client
    Activity {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration and paths
    Show,
    /// Set the base URL of the budget API
    SetApi {
        /// Base URL, e.g. "https://budget.example.com/api"
        url: String,
    },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so command output stays clean
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetbookPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config(cmd)) => handle_config_command(&paths, &mut settings, cmd)?,
        Some(Commands::Account(cmd)) => {
            let client = BudgetClient::open_local(&paths, settings)?;
            handle_account_command(&client, cmd)?;
        }
        Some(Commands::Recurring(cmd)) => {
            let client = BudgetClient::open_local(&paths, settings)?;
            handle_recurring_command(&client, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            let client = BudgetClient::open_local(&paths, settings)?;
            handle_budget_command(&client, cmd)?;
        }
        Some(Commands::Todo(cmd)) => {
            let client = BudgetClient::open_local(&paths, settings)?;
            handle_todo_command(&client, cmd)?;
        }
        Some(Commands::Activity { count }) => {
            let entries = AuditLogger::new(paths.audit_log()).read_recent(count)?;
            if entries.is_empty() {
                println!("No activity recorded yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        None => {
            println!("budgetbook - monthly budgets from the command line");
            println!();
            println!("Run 'budgetbook --help' for usage information.");
            println!("Run 'budgetbook budget create' to start this month's budget.");
        }
    }

    Ok(())
}

fn handle_config_command(
    paths: &BudgetbookPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("budgetbook Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Snapshot:       {}", paths.snapshot_file().display());
            println!("Activity log:   {}", paths.audit_log().display());
            if !paths.is_initialized() {
                println!("Settings file:  not saved yet, using defaults");
            }
            println!();
            println!("Settings:");
            println!("  API base URL:       {}", settings.api_base_url);
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Date format:        {}", settings.date_format);
            println!("  Todo list fresh for {} min", settings.todo_stale_minutes);
        }
        ConfigCommands::SetApi { url } => {
            let url = url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("API base URL must start with http:// or https://, got '{}'", url);
            }
            settings.api_base_url = url.trim_end_matches('/').to_string();
            settings.save(paths)?;
            tracing::info!(url = %settings.api_base_url, "API base URL updated");
            println!("API base URL set to {}", settings.api_base_url);
        }
    }

    Ok(())
}
