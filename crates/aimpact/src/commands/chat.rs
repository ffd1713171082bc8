//! Chat command — talk to the canned assistant.

use std::io::BufRead;

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument, warn};

use aimpact_core::ContentError;
use aimpact_core::chat::{ChatResponder, Conversation, Message, OPENING_MESSAGE};

/// Arguments for the `chat` subcommand.
#[derive(Args, Debug, Default)]
pub struct ChatArgs {
    /// Message to send. Starts an interactive session on stdin when omitted.
    pub message: Option<String>,

    /// Seed for reproducible general replies.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Send one message, or run an interactive session until stdin closes.
#[instrument(name = "cmd_chat", skip_all, fields(seed = ?args.seed))]
pub fn cmd_chat(args: ChatArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(interactive = args.message.is_none(), "executing chat command");

    let responder = args.seed.map_or_else(ChatResponder::new, ChatResponder::seeded);
    let mut conversation = Conversation::new(responder);

    if let Some(ref message) = args.message {
        let reply = conversation.send(message)?;
        if global_json {
            println!("{}", serde_json::to_string_pretty(reply)?);
        } else {
            println!("{}", reply.text);
        }
        return Ok(());
    }

    if global_json {
        print_json_line(&conversation.messages()[0])?;
    } else {
        println!("{} {OPENING_MESSAGE}", "assistant>".cyan());
    }

    for line in std::io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        match conversation.send(&line) {
            Ok(reply) if global_json => print_json_line(reply)?,
            Ok(reply) => println!("{} {}", "assistant>".cyan(), reply.text),
            Err(ContentError::EmptyMessage) => continue,
            Err(err) => {
                warn!(error = %err, "chat message rejected");
                return Err(err.into());
            }
        }
    }

    debug!(messages = conversation.messages().len(), "chat session ended");
    Ok(())
}

fn print_json_line(message: &Message) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(message)?);
    Ok(())
}
