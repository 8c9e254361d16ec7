use anyhow::Result;
use insured_store::record::{RecordId, RecordUpdate};
use insured_store::repository::RecordsRepository;
use stated_dialogues::dialogues::{CtxResult, DialContext, Message};

use super::{
    back_to_menu,
    input::{parse_number, NumberError},
    messages, name_prompt, read_name, read_phone, reply, AppContext, FieldInput,
};

#[derive(Clone)]
enum EditRecordState {
    RecordId,
    Name {
        record_id: RecordId,
    },
    Surname {
        record_id: RecordId,
        name: String,
    },
    Phone {
        record_id: RecordId,
        name: String,
        surname: String,
    },
}

/// Asks for an id, then for the new name, surname and phone.
/// An unknown id ends the dialog without asking again.
pub struct EditRecordDialog<T> {
    ctx: AppContext<T>,
    state: EditRecordState,
}

impl<T> EditRecordDialog<T> {
    pub fn new(ctx: AppContext<T>) -> Self {
        EditRecordDialog {
            ctx,
            state: EditRecordState::RecordId,
        }
    }
}

impl<T> EditRecordDialog<T>
where
    T: RecordsRepository,
{
    fn handle_record_id(&mut self, text: &str) -> Vec<CtxResult> {
        let record = match parse_number::<RecordId>(text) {
            Err(NumberError::NotANumber) => return vec![reply([messages::INVALID_NUMBER])],
            Err(NumberError::OutOfRange) => None,
            Ok(record_id) => self.ctx.repo.get(record_id),
        };

        match record {
            Some(record) => {
                self.state = EditRecordState::Name {
                    record_id: record.id,
                };
                vec![CtxResult::Messages(vec![
                    record.to_string().into(),
                    name_prompt("new name"),
                ])]
            }
            None => {
                log::warn!("Tried to edit record that doesn't exist. input={:?}", text);
                vec![reply([messages::EDIT_NOT_FOUND]), back_to_menu(&self.ctx)]
            }
        }
    }

    fn save(&self, record_id: RecordId, update: RecordUpdate) -> Vec<CtxResult> {
        let result = match self.ctx.repo.update(record_id, update) {
            Ok(record) => messages::record_modified(&record),
            Err(err) => {
                log::warn!("Record disappeared during editing: {}", err);
                messages::EDIT_NOT_FOUND.to_string()
            }
        };

        vec![reply([result]), back_to_menu(&self.ctx)]
    }
}

impl<T> DialContext for EditRecordDialog<T>
where
    T: RecordsRepository,
{
    fn init(&mut self) -> Result<Vec<CtxResult>> {
        Ok(vec![reply([messages::EDIT_ID_PROMPT])])
    }

    fn shutdown(&mut self) -> Result<Vec<CtxResult>> {
        Ok(vec![])
    }

    fn handle_message(&mut self, message: Message) -> Result<Vec<CtxResult>> {
        let text = message.text;
        let result = match self.state.clone() {
            EditRecordState::RecordId => self.handle_record_id(&text),
            EditRecordState::Name { record_id } => match read_name(text, "new name") {
                FieldInput::Accepted(name) => {
                    self.state = EditRecordState::Surname { record_id, name };
                    vec![CtxResult::Messages(vec![name_prompt("new surname")])]
                }
                FieldInput::Rejected(errors) => vec![CtxResult::Messages(errors)],
            },
            EditRecordState::Surname { record_id, name } => {
                match read_name(text, "new surname") {
                    FieldInput::Accepted(surname) => {
                        self.state = EditRecordState::Phone {
                            record_id,
                            name,
                            surname,
                        };
                        vec![reply([messages::PHONE_PROMPT])]
                    }
                    FieldInput::Rejected(errors) => vec![CtxResult::Messages(errors)],
                }
            }
            EditRecordState::Phone {
                record_id,
                name,
                surname,
            } => match read_phone(text) {
                FieldInput::Accepted(phone) => {
                    self.save(record_id, RecordUpdate::new(name, surname, phone))
                }
                FieldInput::Rejected(errors) => vec![CtxResult::Messages(errors)],
            },
        };

        Ok(result)
    }
}
