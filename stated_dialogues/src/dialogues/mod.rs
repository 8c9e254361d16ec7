use anyhow::Result;
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    text: String,
}
impl OutgoingMessage {
    pub fn new(text: String) -> Self {
        OutgoingMessage { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<String> for OutgoingMessage {
    fn from(val: String) -> Self {
        OutgoingMessage::new(val)
    }
}

impl From<&str> for OutgoingMessage {
    fn from(val: &str) -> Self {
        OutgoingMessage::new(val.into())
    }
}

impl From<OutgoingMessage> for String {
    fn from(val: OutgoingMessage) -> Self {
        val.text
    }
}

pub enum CtxResult {
    Messages(Vec<OutgoingMessage>),
    NewCtx(Box<dyn DialContext + Send + 'static>),
    CloseCtx,
    Nothing,
}

impl Debug for CtxResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Messages(arg0) => f.debug_tuple("Messages").field(arg0).finish(),
            Self::NewCtx(_) => f.debug_tuple("NewCtx(?)").finish(),
            Self::Nothing => write!(f, "Nothing"),
            Self::CloseCtx => write!(f, "CloseCtx"),
        }
    }
}

/// One line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub number: usize,
    pub text: String,
}

impl Message {
    pub fn new(number: usize, text: String) -> Self {
        Message { number, text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

pub trait DialContext {
    fn init(&mut self) -> Result<Vec<CtxResult>>;
    fn shutdown(&mut self) -> Result<Vec<CtxResult>>;
    fn handle_message(&mut self, message: Message) -> Result<Vec<CtxResult>>;
}
