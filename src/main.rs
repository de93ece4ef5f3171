//! Command-line interface for rss10

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use serde::Serialize;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use rss10::{validators, CharacterReferences, Rdf, RssReader, Serializer};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "rss10")]
#[command(author, version, about = "RSS 1.0 validation and formatting tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that a feed is a structurally valid RSS 1.0 document
    Validate {
        /// Path to the feed
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Re-serialize a feed in canonical form
    Format {
        /// Path to the feed
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write non-ASCII characters as numeric character references
        #[arg(long)]
        ascii: bool,

        /// Skip structural validation while reading
        #[arg(long)]
        no_validate: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize the contents of a feed
    Inspect {
        /// Path to the feed
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { file } => cmd_validate(&file),
        Commands::Format {
            file,
            ascii,
            no_validate,
            output,
        } => cmd_format(&file, ascii, !no_validate, output),
        Commands::Inspect { file, json } => cmd_inspect(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn read_feed(path: &Path, validate: bool) -> rss10::Result<Rdf> {
    RssReader::new().with_validation(validate).parse_file(path)
}

#[cfg(feature = "cli")]
fn cmd_validate(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = read_feed(file, true)
        .and_then(|rdf| validators::validate(&rdf).map_err(|e| e.into()));

    match outcome {
        Ok(()) => {
            println!("✓ Document is valid");
            Ok(())
        }
        Err(e) => {
            println!("✗ Document is invalid");
            println!();
            println!("  - {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "cli")]
fn cmd_format(
    file: &Path,
    ascii: bool,
    validate: bool,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let rdf = read_feed(file, validate)?;

    let serializer = if ascii {
        Serializer::new().with_converter(CharacterReferences)
    } else {
        Serializer::new()
    };
    let xml = serializer.serialize(&rdf, true);

    match output {
        Some(path) => fs::write(path, xml)?,
        None => print!("{}", xml),
    }
    Ok(())
}

#[cfg(feature = "cli")]
#[derive(Serialize, Debug)]
struct Summary<'a> {
    version: &'a str,
    encoding: Option<&'a str>,
    channel: Option<ChannelSummary<'a>>,
    items: Vec<ItemSummary<'a>>,
    has_image: bool,
    has_textinput: bool,
    namespaces: Vec<(&'a str, &'a str)>,
    stylesheets: usize,
    foreign_elements: usize,
}

#[cfg(feature = "cli")]
#[derive(Serialize, Debug)]
struct ChannelSummary<'a> {
    about: Option<&'a str>,
    title: Option<&'a str>,
    link: Option<&'a str>,
    item_references: usize,
}

#[cfg(feature = "cli")]
#[derive(Serialize, Debug)]
struct ItemSummary<'a> {
    about: Option<&'a str>,
    title: Option<&'a str>,
    link: Option<&'a str>,
}

#[cfg(feature = "cli")]
fn summarize(rdf: &Rdf) -> Summary<'_> {
    let channel = rdf.channel.as_ref().map(|channel| ChannelSummary {
        about: channel.about(),
        title: channel.title.as_deref(),
        link: channel.link.as_deref(),
        item_references: channel
            .items
            .as_ref()
            .and_then(|items| items.seq.as_ref())
            .map_or(0, |seq| seq.li.len()),
    });

    let foreign = rdf.others.len()
        + rdf.channel.as_ref().map_or(0, |c| c.others.len())
        + rdf.items.iter().map(|i| i.others.len()).sum::<usize>();

    Summary {
        version: &rdf.version,
        encoding: rdf.encoding.as_deref(),
        channel,
        items: rdf
            .items
            .iter()
            .map(|item| ItemSummary {
                about: item.about(),
                title: item.title.as_deref(),
                link: item.link.as_deref(),
            })
            .collect(),
        has_image: rdf.image.is_some(),
        has_textinput: rdf.textinput.is_some(),
        namespaces: rdf.namespaces().iter().collect(),
        stylesheets: rdf.stylesheets.len(),
        foreign_elements: foreign,
    }
}

#[cfg(feature = "cli")]
fn cmd_inspect(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rdf = read_feed(file, false)?;
    let summary = summarize(&rdf);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("=== RSS {} ===", rdf.rss_version());
    if let Some(channel) = &summary.channel {
        println!("Channel: {}", channel.title.unwrap_or("(untitled)"));
        if let Some(link) = channel.link {
            println!("  Link: {}", link);
        }
        println!("  Item references: {}", channel.item_references);
    } else {
        println!("Channel: (missing)");
    }

    println!("\n=== Items ({}) ===", summary.items.len());
    for item in &summary.items {
        println!(
            "  {} <{}>",
            item.title.unwrap_or("(untitled)"),
            item.about.unwrap_or("")
        );
    }

    println!("\n=== Namespaces ===");
    for (prefix, uri) in &summary.namespaces {
        let prefix = if prefix.is_empty() { "(default)" } else { prefix };
        println!("  {} = {}", prefix, uri);
    }

    if summary.foreign_elements > 0 {
        println!("\nForeign elements: {}", summary.foreign_elements);
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
