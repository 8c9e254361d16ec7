use anyhow::Result;
use insured_store::record::RecordId;
use insured_store::repository::RecordsRepository;
use stated_dialogues::dialogues::{CtxResult, DialContext, Message, OutgoingMessage};

use super::{
    back_to_menu,
    input::{parse_number, NumberError},
    messages::{self, records_as_message},
    reply, AppContext,
};

pub struct DeleteRecordDialog<T> {
    ctx: AppContext<T>,
}

impl<T> DeleteRecordDialog<T> {
    pub fn new(ctx: AppContext<T>) -> Self {
        DeleteRecordDialog { ctx }
    }
}

impl<T> DialContext for DeleteRecordDialog<T>
where
    T: RecordsRepository,
{
    fn init(&mut self) -> Result<Vec<CtxResult>> {
        let records = self.ctx.repo.get_records();

        let mut lines: Vec<OutgoingMessage> = vec![];
        if !records.is_empty() {
            lines.push(records_as_message(&records).into());
        }
        lines.push(messages::DELETE_ID_PROMPT.into());

        Ok(vec![CtxResult::Messages(lines)])
    }

    fn shutdown(&mut self) -> Result<Vec<CtxResult>> {
        Ok(vec![])
    }

    fn handle_message(&mut self, message: Message) -> Result<Vec<CtxResult>> {
        let deleted = match parse_number::<RecordId>(message.text()) {
            Err(NumberError::NotANumber) => return Ok(vec![reply([messages::INVALID_NUMBER])]),
            Err(NumberError::OutOfRange) => false,
            Ok(record_id) => self.ctx.repo.delete(record_id),
        };

        let result = if deleted {
            messages::RECORD_DELETED
        } else {
            messages::DELETE_NOT_FOUND
        };

        Ok(vec![reply([result]), back_to_menu(&self.ctx)])
    }
}
