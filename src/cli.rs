use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::Level;
use markup::{MarkupConfig, MarkupParser, RichText, get_color_codes, remove_color_codes};

use crate::log_init::init_logger;

#[derive(Parser)]
#[clap(name = "chatmark", version, about)]
pub(crate) struct Cli {
    /// Append debug logs to this file.
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log trace records too (needs --log-file).
    #[clap(long, global = true)]
    trace: bool,

    #[clap(subcommand)]
    command: Cmd,
}

#[derive(clap::Subcommand)]
enum Cmd {
    /// Print the rich-text tree of each message as JSON.
    #[clap(name = "render")]
    Render(Render),

    /// Print each message with its color codes removed.
    #[clap(name = "strip")]
    Strip(Messages),

    /// Print only the color codes of each message.
    #[clap(name = "codes")]
    Codes(Messages),
}

#[derive(clap::Args)]
struct Messages {
    /// Messages to process; read from stdin, one per line, when empty.
    messages: Vec<String>,
}

#[derive(clap::Args)]
struct Render {
    /// JSON file with a markup config (`block-dark-colors`, `carry-colors`).
    #[clap(long)]
    config: Option<PathBuf>,

    /// Drop colors that are too dark to read.
    #[clap(long)]
    block_dark_colors: bool,

    /// Print one line of JSON per message.
    #[clap(long)]
    compact: bool,

    #[clap(flatten)]
    input: Messages,
}

impl Cli {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        if let Some(path) = &self.log_file {
            let level = if self.trace { Level::Trace } else { Level::Debug };
            init_logger(&path.to_string_lossy(), level)
                .context("failed to install the file logger")?;
        }

        match &self.command {
            Cmd::Render(render) => render.run(),
            Cmd::Strip(input) => input.for_each(|message| {
                println!("{}", remove_color_codes(message));
                Ok(())
            }),
            Cmd::Codes(input) => input.for_each(|message| {
                println!("{}", get_color_codes(message));
                Ok(())
            }),
        }
    }
}

impl Messages {
    fn for_each(&self, mut f: impl FnMut(&str) -> anyhow::Result<()>) -> anyhow::Result<()> {
        if !self.messages.is_empty() {
            return self.messages.iter().try_for_each(|message| f(message.as_str()));
        }

        for line in io::stdin().lock().lines() {
            f(&line.context("failed to read stdin")?)?;
        }
        Ok(())
    }
}

impl Render {
    fn load_config(&self) -> anyhow::Result<MarkupConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let source = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&source)
                    .with_context(|| format!("invalid markup config in {}", path.display()))?
            }
            None => MarkupConfig::default(),
        };
        config.block_dark_colors |= self.block_dark_colors;
        Ok(config)
    }

    fn run(&self) -> anyhow::Result<()> {
        let parser = MarkupParser::new(self.load_config()?);

        self.input.for_each(|message| {
            let text = parser.parse(message).unwrap_or_else(|err| {
                log::warn!("showing {:?} unformatted: {}", message, err);
                RichText::plain(remove_color_codes(message))
            });

            let json = if self.compact {
                serde_json::to_string(&text)?
            } else {
                serde_json::to_string_pretty(&text)?
            };
            println!("{}", json);
            Ok(())
        })
    }
}
