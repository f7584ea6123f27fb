use std::{io, panic, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use cashbook::{
    App, BlobStore, Ledger, MemoryStore, SqliteStore, TransactionType,
    export::export_transactions_to_csv, logging::setup_logging, models::transaction::format_money,
    ui::run_app,
};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

#[derive(Parser, Debug)]
#[command(name = "cashbook")]
#[command(about = "Log income and expenses and keep a running balance", long_about = None)]
struct Args {
    /// SQLite file holding the stored transactions
    #[arg(long, default_value = "cashbook.db", conflicts_with = "memory")]
    db: PathBuf,

    /// Keep transactions in memory only; nothing is saved on exit
    #[arg(long)]
    memory: bool,

    /// File that receives the application log
    #[arg(long, default_value = "cashbook.log")]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive entry screen (default)
    Tui,
    /// Record a single transaction and print the new totals
    Add {
        /// income or expense
        #[arg(short = 't', long = "type")]
        transaction_type: TransactionType,
        #[arg(short, long)]
        category: String,
        #[arg(short, long)]
        amount: String,
    },
    /// Print every transaction in the order it was added
    List,
    /// Print income, expense and balance totals
    Summary,
    /// Write all transactions to a CSV file
    Export { path: PathBuf },
}

fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_file)?;

    let blobs: Arc<dyn BlobStore> = if args.memory {
        Arc::new(MemoryStore::new())
    } else {
        let store = SqliteStore::open(&args.db)
            .with_context(|| format!("Failed to open database {}", args.db.display()))?;
        Arc::new(store)
    };
    let mut ledger = Ledger::open(blobs)
        .await
        .context("Failed to load stored transactions")?;

    match args.command.unwrap_or(Command::Tui) {
        Command::Tui => run_tui(ledger).await?,
        Command::Add {
            transaction_type,
            category,
            amount,
        } => {
            let added = ledger.add(transaction_type, &category, &amount).await?;
            println!(
                "Added {} {} {}",
                added.transaction_type,
                added.category,
                format_money(added.amount)
            );
            print_summary(&ledger);
        }
        Command::List => {
            for transaction in ledger.transactions() {
                println!(
                    "{:<15} {:<8} {:<20} {:>12}",
                    transaction.id,
                    transaction.transaction_type,
                    transaction.category,
                    format_money(transaction.amount)
                );
            }
        }
        Command::Summary => print_summary(&ledger),
        Command::Export { path } => {
            export_transactions_to_csv(&path, ledger.transactions())?;
            println!("Exported {} transactions to {}", ledger.transactions().len(), path.display());
        }
    }

    Ok(())
}

fn print_summary<S: BlobStore>(ledger: &Ledger<S>) {
    let totals = ledger.totals();
    println!("Total Balance:  {}", format_money(totals.balance));
    println!("Total Income:   {}", format_money(totals.income));
    println!("Total Expenses: {}", format_money(totals.expense));
}

async fn run_tui<S: BlobStore>(ledger: Ledger<S>) -> Result<()> {
    // Restore the terminal before the default hook prints the panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(ledger)).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("Terminal UI stopped: {err:?}");
    }
    res
}
