//! Command-line front end over the block-document engine: render stored
//! content to HTML, sanitize raw fragments, inspect what a payload decodes
//! to.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use blockdoc_engine::{html, store};
use blockdoc_render::{render_stored_with, RenderOptions};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blockdoc", about = "Block-document engine tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render stored content (block JSON or legacy HTML) to presentation HTML
    Render {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Word budget before a paragraph collapses to a preview
        #[arg(long, default_value_t = RenderOptions::default().paragraph_preview_words)]
        paragraph_words: usize,
        /// Word budget before a column description collapses to a preview
        #[arg(long, default_value_t = RenderOptions::default().description_preview_words)]
        description_words: usize,
    },
    /// Sanitize an HTML fragment the way the store does on save
    Sanitize {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Show how stored content decodes: block count and types, or legacy
    Inspect {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render {
            file,
            paragraph_words,
            description_words,
        } => {
            let input = read_input(file.as_deref())?;
            let opts = RenderOptions {
                paragraph_preview_words: paragraph_words,
                description_preview_words: description_words,
            };
            println!("{}", render_stored_with(&store::parse(&input), &opts));
        }
        Command::Sanitize { file } => {
            let input = read_input(file.as_deref())?;
            println!("{}", html::sanitize(&input));
        }
        Command::Inspect { file } => {
            let input = read_input(file.as_deref())?;
            match store::parse(&input) {
                store::StoredContent::Document(doc) => {
                    println!("document: {} block(s)", doc.blocks.len());
                    for (i, block) in doc.blocks.iter().enumerate() {
                        let id = block.id.as_deref().unwrap_or("-");
                        match block_words(&block.data) {
                            Some(words) => {
                                println!("  {i}: {} (id {id}, {words} word(s))", block.data.kind())
                            }
                            None => println!("  {i}: {} (id {id})", block.data.kind()),
                        }
                    }
                }
                store::StoredContent::LegacyHtml(raw) => {
                    println!(
                        "legacy html: {} byte(s), {} word(s)",
                        raw.len(),
                        html::word_count(&raw)
                    );
                }
            }
        }
    }
    Ok(())
}

/// Word count of a block's rich-text content, for blocks that carry any.
fn block_words(data: &blockdoc_engine::BlockData) -> Option<usize> {
    use blockdoc_engine::BlockData;

    match data {
        BlockData::Paragraph(p) => Some(html::word_count(&p.text)),
        BlockData::Header(h) => Some(html::word_count(&h.text)),
        BlockData::List(l) => Some(l.items.iter().map(|i| html::word_count(i)).sum()),
        BlockData::Table(t) => Some(
            t.content
                .iter()
                .flatten()
                .map(|c| html::word_count(c))
                .sum(),
        ),
        _ => None,
    }
}

fn read_input(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}
