use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bibset",
    about = "Merge ordered bibliographic collections, dropping duplicates",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge the second collection into the first
    Merge(MergeArgs),
    /// List the duplicates a merge would drop, without merging
    Dupes(DupesArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    /// The first collection (its records win on duplicates)
    pub first: PathBuf,
    /// The second collection
    pub second: PathBuf,

    /// Field defining record equivalence: `key`, `bibtype`, `all`, or any
    /// field name. Repeatable; defaults to key and bibtype.
    #[arg(short, long = "field")]
    pub fields: Vec<String>,

    /// Case-fold comparison of non-reserved fields
    #[arg(long)]
    pub ignore_case: bool,

    /// Write the merged collection here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct DupesArgs {
    /// The first collection
    pub first: PathBuf,
    /// The second collection to scan for duplicates
    pub second: PathBuf,

    /// Field defining record equivalence (repeatable; defaults to key
    /// and bibtype)
    #[arg(short, long = "field")]
    pub fields: Vec<String>,

    /// Case-fold comparison of non-reserved fields
    #[arg(long)]
    pub ignore_case: bool,
}
