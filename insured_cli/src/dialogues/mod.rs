pub mod add_record;
pub mod delete_record;
pub mod edit_record;
pub mod export_records;
pub mod input;
pub mod menu;
pub mod messages;
pub mod search_records;

use std::sync::Arc;

use insured_store::{export::RecordsExporter, repository::RecordsRepository};
use stated_dialogues::dialogues::{CtxResult, OutgoingMessage};

use self::{
    input::{check_phone, is_valid_name, PhoneError},
    menu::MainMenuDialog,
};

/// What every dialogue works with.
pub struct AppContext<T> {
    pub repo: T,
    pub exporter: Arc<dyn RecordsExporter>,
}

impl<T: Clone> Clone for AppContext<T> {
    fn clone(&self) -> Self {
        AppContext {
            repo: self.repo.clone(),
            exporter: self.exporter.clone(),
        }
    }
}

impl<T> AppContext<T> {
    pub fn new(repo: T, exporter: Arc<dyn RecordsExporter>) -> Self {
        AppContext { repo, exporter }
    }
}

pub(crate) fn back_to_menu<T: RecordsRepository>(ctx: &AppContext<T>) -> CtxResult {
    CtxResult::NewCtx(Box::new(MainMenuDialog::new(ctx.clone())))
}

pub(crate) fn reply<M: Into<OutgoingMessage>>(texts: impl IntoIterator<Item = M>) -> CtxResult {
    CtxResult::Messages(texts.into_iter().map(Into::into).collect())
}

/// Outcome of validating a single field value.
pub(crate) enum FieldInput<V> {
    Accepted(V),
    Rejected(Vec<OutgoingMessage>),
}

pub(crate) fn name_prompt(field: &str) -> OutgoingMessage {
    messages::field_prompt(field).into()
}

/// Rejected names get the error and the prompt again.
pub(crate) fn read_name(text: String, field: &str) -> FieldInput<String> {
    if is_valid_name(&text) {
        FieldInput::Accepted(text)
    } else {
        FieldInput::Rejected(vec![messages::ONLY_LETTERS.into(), name_prompt(field)])
    }
}

pub(crate) fn read_phone(text: String) -> FieldInput<String> {
    match check_phone(&text) {
        Ok(()) => FieldInput::Accepted(text),
        Err(PhoneError::NotDigits) => FieldInput::Rejected(vec![
            messages::PHONE_NOT_DIGITS.into(),
            messages::PHONE_PROMPT.into(),
        ]),
        Err(PhoneError::WrongLength) => FieldInput::Rejected(vec![
            messages::PHONE_LENGTH.into(),
            messages::PHONE_PROMPT.into(),
        ]),
    }
}
