use anyhow::Result;
use insured_store::record::NewRecord;
use insured_store::repository::RecordsRepository;
use stated_dialogues::dialogues::{CtxResult, DialContext, Message};

use super::{
    back_to_menu,
    input::{parse_age, NumberError},
    messages, name_prompt, read_name, read_phone, reply, AppContext, FieldInput,
};

#[derive(Clone)]
enum AddRecordState {
    Name,
    Surname {
        name: String,
    },
    Phone {
        name: String,
        surname: String,
    },
    Age {
        name: String,
        surname: String,
        phone: String,
    },
}

pub struct AddRecordDialog<T> {
    ctx: AppContext<T>,
    state: AddRecordState,
}

impl<T> AddRecordDialog<T> {
    pub fn new(ctx: AppContext<T>) -> Self {
        AddRecordDialog {
            ctx,
            state: AddRecordState::Name,
        }
    }
}

impl<T> DialContext for AddRecordDialog<T>
where
    T: RecordsRepository,
{
    fn init(&mut self) -> Result<Vec<CtxResult>> {
        Ok(vec![CtxResult::Messages(vec![name_prompt("name")])])
    }

    fn shutdown(&mut self) -> Result<Vec<CtxResult>> {
        Ok(vec![])
    }

    fn handle_message(&mut self, message: Message) -> Result<Vec<CtxResult>> {
        let text = message.text;
        let result = match self.state.clone() {
            AddRecordState::Name => match read_name(text, "name") {
                FieldInput::Accepted(name) => {
                    self.state = AddRecordState::Surname { name };
                    vec![CtxResult::Messages(vec![name_prompt("surname")])]
                }
                FieldInput::Rejected(errors) => vec![CtxResult::Messages(errors)],
            },
            AddRecordState::Surname { name } => match read_name(text, "surname") {
                FieldInput::Accepted(surname) => {
                    self.state = AddRecordState::Phone { name, surname };
                    vec![reply([messages::PHONE_PROMPT])]
                }
                FieldInput::Rejected(errors) => vec![CtxResult::Messages(errors)],
            },
            AddRecordState::Phone { name, surname } => match read_phone(text) {
                FieldInput::Accepted(phone) => {
                    self.state = AddRecordState::Age {
                        name,
                        surname,
                        phone,
                    };
                    vec![reply([messages::AGE_PROMPT])]
                }
                FieldInput::Rejected(errors) => vec![CtxResult::Messages(errors)],
            },
            AddRecordState::Age {
                name,
                surname,
                phone,
            } => match parse_age(&text) {
                Ok(age) => {
                    let record_id = self
                        .ctx
                        .repo
                        .add_record(NewRecord::new(name, surname, phone, age));
                    log::debug!("New record {} added from the console", record_id);
                    vec![reply([messages::RECORD_ADDED]), back_to_menu(&self.ctx)]
                }
                Err(NumberError::NotANumber) => vec![reply([messages::INVALID_NUMBER])],
                Err(NumberError::OutOfRange) => vec![reply([messages::AGE_RANGE])],
            },
        };

        Ok(result)
    }
}
