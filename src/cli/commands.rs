use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::advisor::Advisor;
use crate::gemini::GeminiClient;
use crate::history::{FileStorage, HistoryStore};
use crate::models::{DeviceType, EntryMeta, RepairAnalysis, StoredAnalysis};

#[derive(Parser)]
#[command(name = "repair-advisor")]
#[command(version = "0.1.0")]
#[command(about = "AI-assisted device repair diagnostics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a device problem and estimate the repair cost
    Analyze {
        /// Free-text description of the problem
        description: String,
        /// Type of device the problem concerns
        #[arg(long, value_enum, default_value_t = DeviceType::Phone)]
        device_type: DeviceType,
        /// Device make and model, e.g. "Samsung Galaxy S21"
        #[arg(long, default_value = "")]
        model: String,
    },
    /// Look up the full device name for a model number (e.g. SM-G998B)
    Identify {
        /// Model number printed on the device or its box
        model_number: String,
    },
    /// Show past analyses, most recent first
    History {
        /// Delete all stored analyses instead of listing them
        #[arg(long)]
        clear: bool,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze { description, device_type, model }) => {
            analyze(&description, device_type, &model).await?;
        }
        Some(Commands::Identify { model_number }) => {
            identify(&model_number).await?;
        }
        Some(Commands::History { clear }) => {
            history(clear)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

async fn analyze(description: &str, device_type: DeviceType, model: &str) -> Result<()> {
    let client = GeminiClient::from_env()?;
    let advisor = Advisor::new(client);

    let analysis = advisor.analyze_problem(description, device_type, model).await?;
    print_analysis(&analysis);

    let mut store = HistoryStore::load(FileStorage::at_default_location()?);
    store.insert(
        analysis,
        EntryMeta {
            device_type,
            device_model: model.to_string(),
            problem_description: description.to_string(),
        },
    );
    println!();
    println!("Saved to history ({} entries)", store.len());

    Ok(())
}

async fn identify(model_number: &str) -> Result<()> {
    let client = GeminiClient::from_env()?;
    let advisor = Advisor::new(client);

    let name = advisor.identify_device(model_number).await?;
    println!("{name}");

    Ok(())
}

fn history(clear: bool) -> Result<()> {
    let mut store = HistoryStore::load(FileStorage::at_default_location()?);

    if clear {
        store.clear();
        println!("History cleared");
        return Ok(());
    }

    if store.is_empty() {
        println!("No stored analyses");
        return Ok(());
    }

    println!("Analysis history ({} entries)", store.len());
    println!("================================");
    for entry in store.entries() {
        print_history_entry(entry);
    }

    Ok(())
}

fn print_analysis(analysis: &RepairAnalysis) {
    println!("Problem analysis: {}", analysis.problem_analysis);
    println!("Estimated cost: {} Kč", analysis.estimated_cost_czk);
    if let Some(info) = &analysis.device_info {
        println!("Device info: {info}");
    }
    if !analysis.pros.is_empty() {
        println!("Pros of repairing:");
        for pro in &analysis.pros {
            println!("  + {pro}");
        }
    }
    if !analysis.cons.is_empty() {
        println!("Cons of repairing:");
        for con in &analysis.cons {
            println!("  - {con}");
        }
    }
}

fn print_history_entry(entry: &StoredAnalysis) {
    let when = entry
        .created_at()
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown time".to_string());

    let device = if entry.device_model.is_empty() {
        entry.device_type.to_string()
    } else {
        format!("{} ({})", entry.device_model, entry.device_type)
    };

    println!();
    println!("[{when}] {device}");
    println!("  Problem: {}", entry.problem_description);
    println!("  Analysis: {}", entry.analysis.problem_analysis);
    println!("  Estimated cost: {} Kč", entry.analysis.estimated_cost_czk);
}
