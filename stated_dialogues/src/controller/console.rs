use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use anyhow::Result;

use super::{AnyDialContext, DialogueController};
use crate::dialogues::{Message, OutgoingMessage};

/// Supplies one line of user input per call; `None` once the input is exhausted.
pub trait LineSource {
    fn get_line(&mut self) -> Option<String>;
}

pub trait LineSink {
    fn print(&mut self, message: &str);
}

pub struct StdinSource<R> {
    reader: R,
}

impl StdinSource<io::StdinLock<'static>> {
    pub fn new() -> Self {
        StdinSource {
            reader: io::stdin().lock(),
        }
    }
}

impl Default for StdinSource<io::StdinLock<'static>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> StdinSource<R> {
    pub fn from_reader(reader: R) -> Self {
        StdinSource { reader }
    }
}

impl<R: BufRead> LineSource for StdinSource<R> {
    fn get_line(&mut self) -> Option<String> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                // Invalid UTF-8 becomes replacement chars; the dialog decides what to do with them.
                let line = String::from_utf8_lossy(&buf);
                Some(line.trim_end_matches(&['\n', '\r'][..]).to_string())
            }
            Err(err) => {
                log::error!("Failed input reading: {}", err);
                None
            }
        }
    }
}

pub struct StdoutSink<W> {
    writer: W,
}

impl StdoutSink<io::Stdout> {
    pub fn new() -> Self {
        StdoutSink {
            writer: io::stdout(),
        }
    }
}

impl Default for StdoutSink<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn from_writer(writer: W) -> Self {
        StdoutSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for StdoutSink<W> {
    fn print(&mut self, message: &str) {
        if let Err(err) = writeln!(self.writer, "{}", message).and_then(|_| self.writer.flush()) {
            log::error!("Failed output writing: {}", err);
        }
    }
}

impl LineSource for VecDeque<String> {
    fn get_line(&mut self) -> Option<String> {
        self.pop_front()
    }
}

impl LineSink for Vec<String> {
    fn print(&mut self, message: &str) {
        self.push(message.to_string())
    }
}

fn print_messages<W: LineSink>(sink: &mut W, messages: Vec<OutgoingMessage>) {
    log::debug!("Printing {} messages", messages.len());
    messages
        .iter()
        .for_each(|message| sink.print(message.text()));
}

/// Blocking read-eval-print loop.
///
/// Reads lines from `source` and feeds them to the active dialogue until the
/// dialogue closes itself or the input is exhausted. A failing dialogue is
/// logged and replaced with a fresh one built by `new_context`.
pub fn run_console<F, S, W>(new_context: F, source: &mut S, sink: &mut W) -> Result<()>
where
    F: Fn() -> Box<AnyDialContext>,
    S: LineSource,
    W: LineSink,
{
    let (controller, messages) = DialogueController::create_boxed(new_context())?;
    print_messages(sink, messages);

    let mut controller = Some(controller);
    let mut line_number = 0;
    while let Some(active) = controller.take() {
        let Some(line) = source.get_line() else {
            log::warn!(
                "Input closed after {} lines, {} handled by the active dialog",
                line_number,
                active.handled_messages()
            );
            print_messages(sink, active.shutdown()?);
            break;
        };
        line_number += 1;

        match active.handle(Message::new(line_number, line)) {
            Ok((next, messages)) => {
                print_messages(sink, messages);
                controller = next;
            }
            Err(err) => {
                log::error!("Dialog failed, starting over: {:?}", err);
                let (fresh, messages) = DialogueController::create_boxed(new_context())?;
                print_messages(sink, messages);
                controller = Some(fresh);
            }
        }
    }

    log::debug!("Console session finished after {} lines", line_number);
    Ok(())
}
