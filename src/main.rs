use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use budgetwise::cli::{
    handle_expense_command, handle_goal_command, handle_income_command,
    handle_investment_command, handle_summary_command, ExpenseCommands, GoalCommands,
    IncomeCommands, InvestmentCommands,
};
use budgetwise::config::{BudgetWisePaths, Settings};
use budgetwise::storage::StorageGateway;

#[derive(Parser)]
#[command(
    name = "budgetwise",
    version,
    about = "Personal finance tracker for income, expenses, investments and goals",
    long_about = "BudgetWise keeps track of monthly income and expenses, simulates \
                  investment values, projects how long savings goals will take, \
                  and suggests where spending could be cut."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income source commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense and subscription commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Investment commands
    #[command(subcommand, alias = "inv")]
    Investment(InvestmentCommands),

    /// Financial goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Show overview, savings advice, portfolio and goals
    Summary,

    /// Show current configuration and paths
    Config,

    /// Delete all stored income, expenses, investments and goals
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = BudgetWisePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    paths.ensure_directories()?;
    let gateway = StorageGateway::open(&paths);

    tracing::debug!(data_dir = %paths.data_dir().display(), "Opened storage");

    match cli.command {
        Some(Commands::Income(cmd)) => handle_income_command(&gateway, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&gateway, &settings, cmd)?,
        Some(Commands::Investment(cmd)) => handle_investment_command(&gateway, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&gateway, &settings, cmd)?,
        Some(Commands::Summary) => handle_summary_command(&gateway, &settings)?,
        Some(Commands::Config) => {
            println!("BudgetWise Configuration");
            println!("========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Simulate on add: {}", settings.simulate_on_add);
            println!();
            println!("Stored collections:");
            let keys = gateway.keys();
            if keys.is_empty() {
                println!("  (none)");
            }
            for key in keys {
                println!("  {}", key);
            }
        }
        Some(Commands::Reset { yes }) => {
            if !yes {
                anyhow::bail!("Refusing to delete all data without --yes");
            }
            gateway.clear_all();
            println!("All stored data has been deleted.");
        }
        None => {
            println!("BudgetWise - personal finance tracker");
            println!();
            println!("Run 'budgetwise --help' for usage information.");
            println!("Run 'budgetwise summary' for an overview of your finances.");
        }
    }

    Ok(())
}
