use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use spendview_core::{Report, Ruleset, DEFAULT_PREVIEW_LIMIT};
use spendview_ingest::parse_statement_csv;
use std::path::{Path, PathBuf};

mod render;

#[derive(Parser, Debug)]
#[command(name = "spendview", version, about = "Bank-statement categorizer and spending views")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Categorize a statement CSV and print the three spending views
    Report {
        /// Path to the statement CSV (columns: Date, Description, Amount)
        #[arg(long)]
        csv: PathBuf,

        /// Path to the category ruleset (JSON object: category -> keywords)
        #[arg(long, default_value = "categories.json")]
        rules: PathBuf,

        /// Number of rows in the transactions preview
        #[arg(long, default_value_t = DEFAULT_PREVIEW_LIMIT)]
        limit: usize,
    },

    /// Write a starter categories.json to get going
    InitRules {
        /// Destination path for the ruleset
        #[arg(long, default_value = "categories.json")]
        rules: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Report { csv, rules, limit } => {
            if !csv.exists() {
                bail!("statement not found: {} (pass --csv <path>)", csv.display());
            }

            let ruleset = Ruleset::load(&rules)
                .with_context(|| format!("loading ruleset {}", rules.display()))?;
            let txns = parse_statement_csv(&csv)
                .with_context(|| format!("parsing {}", csv.display()))?;

            println!(
                "Parsed {} transactions from {} ({} categories configured)\n",
                txns.len(),
                csv.display(),
                ruleset.rules().len()
            );

            let report = Report::build(txns, &ruleset, limit);
            render::print_report(&report);
        }

        Command::InitRules { rules } => {
            init_rules(&rules)?;
        }
    }

    Ok(())
}

const STARTER_RULES: &str = r#"{
  "Groceries": ["walmart", "heb", "kroger", "aldi", "market", "grocery"],
  "Dining": ["restaurant", "cafe", "coffee", "doordash", "uber eats"],
  "Transport": ["uber", "lyft", "shell", "chevron", "transit", "parking"],
  "Subscriptions": ["netflix", "spotify", "hulu", "icloud", "prime"],
  "Housing": ["rent", "lease", "mortgage", "apartment"],
  "Income": ["payroll", "salary", "direct deposit"]
}
"#;

fn init_rules(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Ruleset already exists: {}", path.display());
        return Ok(());
    }
    std::fs::write(path, STARTER_RULES).with_context(|| format!("write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
