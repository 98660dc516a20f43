//! Chat Bot view: a line-oriented loop over stdin.
//!
//! Plain lines are questions. Slash commands drive the rest of the controller:
//! `/clear`, `/ask <n>`, `/examples`, `/select <id>`, `/history`, `/quit`.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::api::ChatBackend;
use crate::api::types::ProfessorSummary;
use crate::chat::{ChatController, ChatMessage, ChatSession, example_questions};

pub const BUSY_MESSAGE: &str = "Generating response...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Submit(String),
    /// 1-based index into the example questions.
    Ask(usize),
    Select(i64),
    Examples,
    History,
    Clear,
    Quit,
    Blank,
    Invalid(String),
}

#[must_use]
pub fn parse_command(line: &str) -> ChatCommand {
    let line = line.trim();
    if line.is_empty() {
        return ChatCommand::Blank;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return ChatCommand::Submit(line.to_owned());
    };
    let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let arg = arg.trim();
    match name {
        "clear" => ChatCommand::Clear,
        "quit" | "exit" => ChatCommand::Quit,
        "examples" => ChatCommand::Examples,
        "history" => ChatCommand::History,
        "ask" => match arg.parse::<usize>() {
            Ok(n) if n >= 1 => ChatCommand::Ask(n),
            _ => ChatCommand::Invalid(format!("usage: /ask <1-5>, got '{arg}'")),
        },
        "select" => arg
            .parse::<i64>()
            .map_or_else(|_| ChatCommand::Invalid(format!("usage: /select <professor id>, got '{arg}'")), ChatCommand::Select),
        other => ChatCommand::Invalid(format!("unknown command /{other}")),
    }
}

/// Pick the professor matching `id`, or the first one when `id` is `None`.
#[must_use]
pub fn pick_professor(list: &[ProfessorSummary], id: Option<i64>) -> Option<ProfessorSummary> {
    match id {
        Some(id) => list.iter().find(|p| p.id == id).cloned(),
        None => list.first().cloned(),
    }
}

/// One question on a fresh session about `professor`.
///
/// Returns the assistant reply, or `None` for a blank question, in which case
/// the backend is never called.
pub async fn ask_once<B: ChatBackend>(
    controller: &ChatController<B>,
    professor: ProfessorSummary,
    question: &str,
) -> Option<String> {
    let mut session = ChatSession::new(Some(professor));
    controller
        .submit(&mut session, question)
        .await
        .map(|reply| reply.content.clone())
}

/// Run the chat loop until `/quit` or end of input.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
pub async fn run_chat<B, R, W>(
    controller: &ChatController<B>,
    session: &mut ChatSession,
    professors: &[ProfessorSummary],
    input: R,
    out: &mut W,
) -> std::io::Result<()>
where
    B: ChatBackend,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write_intro(session, out)?;
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            ChatCommand::Blank => {}
            ChatCommand::Quit => break,
            ChatCommand::Clear => {
                controller.clear(session);
                writeln!(out, "(chat history cleared)")?;
            }
            ChatCommand::History => {
                for message in session.transcript.messages() {
                    write_message(out, message)?;
                }
            }
            ChatCommand::Examples => write_examples(session, out)?,
            ChatCommand::Select(id) => match pick_professor(professors, Some(id)) {
                Some(professor) => {
                    writeln!(out, "(now asking about {})", professor.name)?;
                    controller.select(session, professor);
                }
                None => writeln!(out, "error: no professor with id {id}")?,
            },
            ChatCommand::Ask(n) => {
                eprintln!("{BUSY_MESSAGE}");
                let asked = controller.quick_ask(session, n - 1).await.is_some();
                if asked {
                    write_last_turn(session, out)?;
                } else {
                    writeln!(out, "error: no example question {n}")?;
                }
            }
            ChatCommand::Submit(text) => {
                eprintln!("{BUSY_MESSAGE}");
                let answered = controller.submit(session, &text).await.is_some();
                if answered {
                    write_last_turn(session, out)?;
                }
            }
            ChatCommand::Invalid(message) => writeln!(out, "error: {message}")?,
        }
        out.flush()?;
    }
    Ok(())
}

fn write_intro<W: Write>(session: &ChatSession, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Chat with an AI assistant about specific professors and their research.")?;
    if let Some(professor) = &session.selected {
        writeln!(out, "Ask about {}'s research:", professor.name)?;
    }
    write_examples(session, out)
}

fn write_examples<W: Write>(session: &ChatSession, out: &mut W) -> std::io::Result<()> {
    let Some(professor) = &session.selected else {
        return Ok(());
    };
    writeln!(out, "Example Questions (use /ask <n>):")?;
    for (i, question) in example_questions(&professor.name).iter().enumerate() {
        writeln!(out, "  {}. {question}", i + 1)?;
    }
    Ok(())
}

fn write_last_turn<W: Write>(session: &ChatSession, out: &mut W) -> std::io::Result<()> {
    let messages = session.transcript.messages();
    for message in &messages[messages.len().saturating_sub(2)..] {
        write_message(out, message)?;
    }
    Ok(())
}

fn write_message<W: Write>(out: &mut W, message: &ChatMessage) -> std::io::Result<()> {
    writeln!(out, "[{}] {}", message.role.as_str(), message.content)
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
