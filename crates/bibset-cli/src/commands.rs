use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use bibset_config::MergeOptions;
use bibset_merge::{find_duplicates, merge};
use bibset_types::Collection;
use colored::Colorize;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Merge(args) => cmd_merge(args),
        Command::Dupes(args) => cmd_dupes(args),
    }
}

fn read_collection(path: &Path) -> anyhow::Result<Collection> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading collection from {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing collection from {}", path.display()))
}

fn build_options(fields: &[String], ignore_case: bool) -> MergeOptions {
    if fields.is_empty() {
        MergeOptions::default().ignore_case(ignore_case)
    } else {
        MergeOptions::checking(fields.iter().cloned()).ignore_case(ignore_case)
    }
}

fn cmd_merge(args: MergeArgs) -> anyhow::Result<()> {
    let first = read_collection(&args.first)?;
    let second = read_collection(&args.second)?;
    let options = build_options(&args.fields, args.ignore_case);

    let merged = merge(&first, &second, &options);
    if let Some(message) = merged.report.message() {
        println!("{} {}", "note:".yellow().bold(), message);
    }

    let json = serde_json::to_string_pretty(&merged.collection)?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("writing merged collection to {}", path.display()))?;
            println!(
                "{} Merged {} records into {}",
                "✓".green().bold(),
                merged.collection.len().to_string().bold(),
                path.display().to_string().bold()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_dupes(args: DupesArgs) -> anyhow::Result<()> {
    let first = read_collection(&args.first)?;
    let second = read_collection(&args.second)?;
    let options = build_options(&args.fields, args.ignore_case);
    if options.whole_record() {
        bail!("`dupes` needs a field subset; `all` only applies to a full merge");
    }

    let duplicates = find_duplicates(
        &first,
        &second,
        &options.fields_to_check,
        options.ignore_case,
    );
    if duplicates.is_empty() {
        println!("{} No duplicates found.", "✓".green());
        return Ok(());
    }

    println!(
        "{} duplicate(s) in {}:",
        duplicates.len().to_string().bold(),
        args.second.display()
    );
    for pos in &duplicates {
        let key = second.records()[*pos].key();
        if first.contains_key(key) {
            println!(
                "  {} {} {}",
                format!("#{}", pos + 1).yellow(),
                key,
                "(key also in first collection)".dimmed()
            );
        } else {
            println!("  {} {}", format!("#{}", pos + 1).yellow(), key);
        }
    }
    Ok(())
}
