//! College Finance CLI
//!
//! Command-line front end for the PU college financial model

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use college_finance::export::{export_evaluation, totals_lines};
use college_finance::{format_inr, Evaluation, Record, RecordStore, Totals, Workbook, DEFAULT_DATA_DIR};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "college-finance", version, about = "PU college financial model")]
struct Cli {
    /// Directory holding the persisted tables
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show headline totals and every derived table
    Dashboard,
    /// Re-derive all tables and write them back to the data directory
    Recalculate,
    /// Write the derived tables and totals as CSV files
    Export {
        /// Output directory
        #[arg(long, default_value = "export")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = RecordStore::open(&cli.data_dir)
        .with_context(|| format!("Failed to open data directory {}", cli.data_dir.display()))?;
    let evaluation = Workbook::load(&store).evaluate();

    match cli.command {
        Command::Dashboard => print_dashboard(&evaluation),
        Command::Recalculate => {
            evaluation.save(&store).context("Failed to save recalculated tables")?;
            println!(
                "Data saved successfully! | Net Balance = {}",
                format_inr(evaluation.totals.net_balance)
            );
            println!();
            print_totals(&evaluation.totals);
        }
        Command::Export { out } => {
            let written = export_evaluation(&evaluation, &out)
                .with_context(|| format!("Failed to export to {}", out.display()))?;
            for path in written {
                println!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}

fn print_dashboard(evaluation: &Evaluation) {
    println!("PU College Financial Dashboard");
    println!("==============================\n");
    print_totals(&evaluation.totals);

    let tables = &evaluation.tables;
    print_table("Income Summary", &tables.income);
    print_table("Expense Summary", &tables.expenses);
    print_table("Fund Distribution", &tables.distribution);
    print_table("5-Year Projection", &tables.projection);

    println!("\nAll amounts shown in Indian numbering format (₹10,00,000).");
}

fn print_totals(totals: &Totals) {
    for (label, amount) in totals_lines(totals) {
        println!("  {:<16} {:>16}", label, format_inr(amount));
    }
}

fn print_table<R: Record>(title: &str, rows: &[R]) {
    let headers = R::headers();
    let cells: Vec<Vec<String>> = rows.iter().map(R::display_row).collect();

    // Column widths in characters; the rupee sign is multi-byte
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    println!("\n{}", title);
    println!("{}", "-".repeat(widths.iter().sum::<usize>() + 2 * widths.len()));
    print_row(headers.iter().copied(), &widths);
    for row in &cells {
        print_row(row.iter().map(String::as_str), &widths);
    }
}

fn print_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    println!("  {}", line.join("  ").trim_end());
}
