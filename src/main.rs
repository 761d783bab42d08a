//! # chat-content
//!
//! Reads a wire payload from a file or stdin and prints it:
//! documents and message bodies as Markdown, channels as a one-line summary.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::Value;
use tracing::{debug, info};

use chat_content::config::Settings;
use chat_content::domain::content::Render;
use chat_content::domain::decode::{decode_polymorphic, DecodeContext};
use chat_content::domain::{Document, MessageBody, Mentions, ServerChannel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// A bare `{"object": "document"}` tree
    Document,
    /// `{"document": ..., "mentions": ...}`
    Message,
    /// A server channel payload
    Channel,
}

#[derive(Parser)]
#[command(name = "chat-content")]
#[command(about = "Render chat message content as Markdown")]
struct Args {
    /// Path to the JSON payload; reads stdin when omitted
    file: Option<PathBuf>,

    /// What the payload holds
    #[arg(short, long, value_enum, default_value = "document")]
    kind: Kind,

    /// Print the mention summary after the rendered content
    #[arg(short, long)]
    mentions: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load().context("Failed to load configuration")?;
    chat_content::telemetry::init_tracing(&settings.log);
    debug!(environment = %settings.environment, "Settings loaded");

    let input = read_input(args.file.as_ref())?;
    let value: Value = serde_json::from_str(&input).context("Input is not valid JSON")?;

    let mut cx = DecodeContext::new(settings.decode);
    match args.kind {
        Kind::Document => {
            let document = Document::decode_with(value, &mut cx)?;
            print!("{}", document.render());
            if args.mentions {
                print_mentions(&document.mentions());
            }
        }
        Kind::Message => {
            let body = MessageBody::decode_with(value, &mut cx)?;
            print!("{}", body.render());
            if args.mentions {
                match body.mentions() {
                    Some(mentions) => print_mentions(mentions),
                    None => print_mentions(&body.document().mentions()),
                }
            }
        }
        Kind::Channel => {
            let channel: ServerChannel = decode_polymorphic(value, &mut cx)?;
            let info = channel.info();
            println!("#{} ({}) {}", info.name, channel.channel_type(), info.id);
        }
    }

    info!(fallbacks = cx.fallbacks(), "Decoded payload");
    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn print_mentions(mentions: &Mentions) {
    println!();
    println!("everyone: {}", mentions.everyone());
    println!("here: {}", mentions.here());
    println!("users: {:?}", mentions.users());
    println!("roles: {:?}", mentions.roles());
    println!("channels: {:?}", mentions.channels());
}
