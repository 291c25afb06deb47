use crate::config::Settings;
use crate::convert::{convert_directory, discover_workbooks, is_stale};
use crate::error::{SheetpackError, SheetpackResult};
use crate::excel::Workbook;
use crate::filter;
use colored::Colorize;
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebouncedEventKind};
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::Duration;

/// Resolve directories and the incremental flag against the project
/// config. Explicit command-line values always win; a set flag cannot be
/// unset by config.
fn resolve(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    modified_only: bool,
) -> SheetpackResult<(PathBuf, PathBuf, bool)> {
    let settings = Settings::load()?;
    Ok((
        input.unwrap_or(settings.input_path),
        output.unwrap_or(settings.output_path),
        modified_only || settings.only_modified_files,
    ))
}

/// Execute the convert command
pub fn convert(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    modified_only: bool,
    verbose: bool,
) -> SheetpackResult<()> {
    let (input, output, modified_only) = resolve(input, output, modified_only)?;

    println!("{}", "📦 Sheetpack - Converting workbooks".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}", output.display());
    if modified_only {
        println!("   Mode:   {}", "modified files only".bright_yellow());
    }
    println!();

    let report = convert_directory(&input, &output, modified_only)?;

    if verbose {
        println!("   {} workbook files discovered", report.files_discovered);
        println!("   {} skipped (outputs up to date)", report.files_skipped);
        println!("   {} converted", report.files_converted);
        println!();
    }

    println!("{}", "✅ Conversion Complete!".bold().green());
    println!("   {} json files written\n", report.sheets_written);

    Ok(())
}

/// Execute the check command - staleness report, writes nothing
pub fn check(input: Option<PathBuf>, output: Option<PathBuf>) -> SheetpackResult<()> {
    let (input, output, _) = resolve(input, output, false)?;

    println!("{}", "🔍 Sheetpack - Checking workbooks".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    let files = discover_workbooks(&input)?;
    if files.is_empty() {
        println!("{}", "No workbook files found.".yellow());
        return Ok(());
    }

    let mut stale_count = 0;
    for file in &files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if is_stale(file, &output)? {
            stale_count += 1;
            println!("   {} {}", "stale     ".bright_yellow(), name);
        } else {
            println!("   {} {}", "up to date".green(), name);
        }
    }

    println!();
    if stale_count == 0 {
        println!("{}", "✅ All outputs up to date".bold().green());
    } else {
        println!(
            "{}",
            format!("{} workbook file(s) need conversion", stale_count)
                .bold()
                .yellow()
        );
    }

    Ok(())
}

/// Execute the sheets command - list sheet names in one workbook
pub fn sheets(file: PathBuf) -> SheetpackResult<()> {
    println!("{}", "📄 Sheetpack - Workbook sheets".bold().green());
    println!("   File: {}\n", file.display());

    let workbook = Workbook::open(&file)?;
    for sheet_name in workbook.sheet_names() {
        if filter::is_excluded_name(&sheet_name) {
            println!("   {} {}", sheet_name.yellow(), "(excluded)".yellow());
        } else {
            println!(
                "   {} {}",
                sheet_name.bright_blue(),
                format!("→ {}", filter::output_file_name(&sheet_name)).cyan()
            );
        }
    }

    Ok(())
}

/// Execute the watch command
pub fn watch(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    verbose: bool,
) -> SheetpackResult<()> {
    let (input, output, _) = resolve(input, output, false)?;

    println!("{}", "👁️  Sheetpack - Watch Mode".bold().green());
    println!("   Watching: {}", input.display());
    println!("   Output:   {}", output.display());
    println!("   Press {} to stop\n", "Ctrl+C".bold().yellow());

    if !input.is_dir() {
        return Err(SheetpackError::Config(format!(
            "input directory not found: {}",
            input.display()
        )));
    }

    // Channel for file system events
    let (tx, rx) = channel();

    // Debounce to avoid rapid-fire events while the editor saves
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)
        .map_err(|e| SheetpackError::Config(format!("failed to create file watcher: {}", e)))?;

    debouncer
        .watcher()
        .watch(&input, RecursiveMode::NonRecursive)
        .map_err(|e| SheetpackError::Config(format!("failed to watch directory: {}", e)))?;

    // Initial incremental pass
    println!("{}", "🔄 Initial run...".cyan());
    run_watch_action(&input, &output, verbose);
    println!();

    // Watch loop
    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant = events.iter().any(|event| {
                    if event.kind != DebouncedEventKind::Any {
                        return false;
                    }
                    event
                        .path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .map(filter::is_workbook_file)
                        .unwrap_or(false)
                });

                if relevant {
                    println!("\n{}", "🔄 Workbook change detected".cyan());
                    run_watch_action(&input, &output, verbose);
                    println!();
                }
            }
            Ok(Err(error)) => {
                eprintln!("{} Watch error: {}", "❌".red(), error);
            }
            Err(e) => {
                eprintln!("{} Channel error: {}", "❌".red(), e);
                break;
            }
        }
    }

    Ok(())
}

/// Run one incremental conversion pass for watch mode
fn run_watch_action(input: &Path, output: &Path, verbose: bool) {
    match convert_directory(input, output, true) {
        Ok(report) => {
            if verbose {
                println!("   {}", report.summary());
            }
            println!("{}", "✅ Conversion complete".bold().green());
        }
        Err(e) => println!("{} {}", "❌ Conversion failed:".bold().red(), e),
    }
}
