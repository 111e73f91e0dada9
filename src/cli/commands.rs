use crate::config::ProfileRegistry;
use crate::copy::{copy_exposure, load_table};
use crate::error::CopyResult;
use crate::types::CellValue;
use colored::Colorize;
use std::path::PathBuf;

/// How many table rows a dry run prints before eliding the rest.
const PREVIEW_ROWS: usize = 5;

/// Format a number for display, removing unnecessary decimal places
fn format_number(n: f64) -> String {
    let rounded = (n * 1e6).round() / 1e6;
    format!("{rounded:.6}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

fn format_cell(value: &CellValue) -> String {
    match value {
        CellValue::Empty => "-".to_string(),
        CellValue::Text(s) => s.clone(),
        CellValue::Number(n) => format_number(*n),
        CellValue::Bool(b) => b.to_string(),
    }
}

fn format_row(row: &[CellValue]) -> String {
    let cells: Vec<String> = row.iter().map(format_cell).collect();
    format!("[{}]", cells.join(", "))
}

/// Execute the copy command
pub fn copy(
    raw: PathBuf,
    template: PathBuf,
    fund: String,
    config: PathBuf,
    output: PathBuf,
    dry_run: bool,
    verbose: bool,
) -> CopyResult<()> {
    println!("{}", "📄 Fundcopy - copying exposure table".bold().green());
    println!("   Fund: {}", fund.bright_blue().bold());
    println!("   Raw: {}", raw.display());
    println!("   Template: {}", template.display());
    println!();

    if dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No output file will be written\n".yellow()
        );
    }

    if verbose {
        println!("{}", "📖 Loading fund profiles...".cyan());
    }
    let registry = ProfileRegistry::load(&config)?;
    let profile = registry.get(&fund)?;

    if dry_run {
        let table = load_table(&raw, profile)?;

        println!("{}", "✅ Extracted table:".bold().green());
        println!("   Rows: {} | Cols: {}", table.height(), table.width());
        for row in table.rows().iter().take(PREVIEW_ROWS) {
            println!("   {}", format_row(row));
        }
        if table.height() > PREVIEW_ROWS {
            println!("   ... ({} more rows)", table.height() - PREVIEW_ROWS);
        }

        println!();
        println!("{}", "📋 Dry run complete - no output written".yellow());
        return Ok(());
    }

    if verbose {
        println!("{}", "📥 Extracting table from raw file...".cyan());
        println!("{}", "📤 Placing into template...".cyan());
    }
    copy_exposure(&raw, &template, &output, profile)?;

    println!(
        "{}",
        format!(
            "✅ Copied exposure for {} -> {}",
            profile.name,
            output.display()
        )
        .bold()
        .green()
    );
    Ok(())
}

/// Execute the list-funds command
pub fn list_funds(config: PathBuf) -> CopyResult<()> {
    let registry = ProfileRegistry::load(&config)?;

    println!("{}", "📄 Available fund profiles:".bold().green());
    for name in registry.available() {
        println!("   {}", name.bright_blue());
    }
    Ok(())
}
