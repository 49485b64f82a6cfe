//! Command-line interface for the importer.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::style;

use crate::document::DocumentOverrides;
use crate::error::Result;
use crate::importer::import_rulebook;
use crate::types::{Document, DocumentFamily};

/// Riftbound importer - Convert plain-text rulebooks into viewer JSON documents.
#[derive(Parser)]
#[command(name = "riftbound-importer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert the Core Rules text file.
    Core(ImportArgs),

    /// Convert the Tournament Rules text file.
    Tournament(ImportArgs),
}

/// Arguments shared by both import commands.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Plain-text rulebook to read
    pub input: PathBuf,

    /// JSON document to write (parent directories are created)
    pub output: PathBuf,

    #[command(flatten)]
    pub metadata: MetadataArgs,
}

/// Document metadata overrides.
#[derive(Args, Debug, Default)]
pub struct MetadataArgs {
    /// Document id (default: CR or TR)
    #[arg(long)]
    pub doc_id: Option<String>,

    /// Document title (default: the rulebook's official title)
    #[arg(long)]
    pub title: Option<String>,

    /// Language code (default: en)
    #[arg(long)]
    pub lang: Option<String>,

    /// Version label (default: "Last Updated: <date>" from the file, else an import label)
    #[arg(long)]
    pub version_label: Option<String>,

    /// Published date in YYYY-MM-DD format (default: date from the file, else today)
    #[arg(long, visible_alias = "published")]
    pub published_date: Option<String>,

    /// Source attribution
    #[arg(long)]
    pub source_name: Option<String>,

    /// Source URL
    #[arg(long)]
    pub source_url: Option<String>,
}

impl From<MetadataArgs> for DocumentOverrides {
    fn from(args: MetadataArgs) -> Self {
        Self {
            doc_id: args.doc_id,
            title: args.title,
            lang: args.lang,
            version_label: args.version_label,
            published_date: args.published_date,
            source_name: args.source_name,
            source_url: args.source_url,
        }
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Core(args) => import_command(DocumentFamily::CoreRules, args),
        Commands::Tournament(args) => import_command(DocumentFamily::TournamentRules, args),
    }
}

/// Execute an import command.
fn import_command(family: DocumentFamily, args: ImportArgs) -> Result<()> {
    let overrides = DocumentOverrides::from(args.metadata);
    let document = import_rulebook(family, &args.input, &args.output, &overrides)?;

    println!("{}", summary_line(&document, &args.output));
    Ok(())
}

/// One-line success summary.
fn summary_line(document: &Document, output: &Path) -> String {
    let mut line = format!(
        "{} wrote {} with {} entries",
        style("OK:").green().bold(),
        output.display(),
        style(document.entries.len()).cyan()
    );

    if let (Some(first), Some(last)) = (document.first_reference(), document.last_reference()) {
        line.push_str(&format!(" (first: {first}, last: {last})"));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentEntry;

    #[test]
    fn test_cli_parse_core() {
        let cli = Cli::parse_from(["riftbound-importer", "core", "cr.txt", "out/cr.json"]);

        let Commands::Core(args) = cli.command else {
            panic!("expected core command");
        };
        assert_eq!(args.input, PathBuf::from("cr.txt"));
        assert_eq!(args.output, PathBuf::from("out/cr.json"));
        assert!(args.metadata.title.is_none());
        assert!(args.metadata.published_date.is_none());
    }

    #[test]
    fn test_cli_parse_tournament_with_overrides() {
        let cli = Cli::parse_from([
            "riftbound-importer",
            "tournament",
            "tr.txt",
            "tr.json",
            "--version-label",
            "draft-import-2025-12-31",
            "--published-date",
            "2025-12-31",
            "--lang",
            "fr",
        ]);

        let Commands::Tournament(args) = cli.command else {
            panic!("expected tournament command");
        };
        let overrides = DocumentOverrides::from(args.metadata);
        assert_eq!(
            overrides.version_label.as_deref(),
            Some("draft-import-2025-12-31")
        );
        assert_eq!(overrides.published_date.as_deref(), Some("2025-12-31"));
        assert_eq!(overrides.lang.as_deref(), Some("fr"));
    }

    #[test]
    fn test_cli_published_alias() {
        let cli = Cli::parse_from([
            "riftbound-importer",
            "core",
            "cr.txt",
            "cr.json",
            "--published",
            "2025-10-01",
        ]);
        let Commands::Core(args) = cli.command else {
            panic!("expected core command");
        };
        assert_eq!(args.metadata.published_date.as_deref(), Some("2025-10-01"));
    }

    #[test]
    fn test_cli_missing_output_is_error() {
        assert!(Cli::try_parse_from(["riftbound-importer", "core", "cr.txt"]).is_err());
    }

    #[test]
    fn test_summary_line() {
        console::set_colors_enabled(false);
        let entry = |r: &str| DocumentEntry {
            key: format!("CR-{r}"),
            reference: r.to_string(),
            heading: Some(String::new()),
            path: Vec::new(),
            text: String::new(),
        };
        let document = Document {
            doc_id: "CR".to_string(),
            title: "Riftbound Core Rules".to_string(),
            lang: "en".to_string(),
            version_label: "import-2026-01-15".to_string(),
            published_date: "2026-01-15".to_string(),
            source_name: String::new(),
            source_url: String::new(),
            entries: vec![entry("000"), entry("103.1.b.2")],
        };

        assert_eq!(
            summary_line(&document, Path::new("cr.json")),
            "OK: wrote cr.json with 2 entries (first: 000, last: 103.1.b.2)"
        );
    }
}
