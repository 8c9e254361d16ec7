use anyhow::Result;
use insured_store::repository::RecordsRepository;
use stated_dialogues::dialogues::{CtxResult, DialContext, Message};

use super::{
    back_to_menu,
    messages::{self, records_as_message},
    reply, AppContext,
};

pub struct SearchRecordsDialog<T> {
    ctx: AppContext<T>,
}

impl<T> SearchRecordsDialog<T> {
    pub fn new(ctx: AppContext<T>) -> Self {
        SearchRecordsDialog { ctx }
    }
}

impl<T> DialContext for SearchRecordsDialog<T>
where
    T: RecordsRepository,
{
    fn init(&mut self) -> Result<Vec<CtxResult>> {
        Ok(vec![reply([messages::SEARCH_PROMPT])])
    }

    fn shutdown(&mut self) -> Result<Vec<CtxResult>> {
        Ok(vec![])
    }

    fn handle_message(&mut self, message: Message) -> Result<Vec<CtxResult>> {
        let found = self.ctx.repo.find(message.text());
        log::debug!("Search {:?} found {} records", message.text(), found.len());

        let result = if found.is_empty() {
            messages::NAME_NOT_FOUND.to_string()
        } else {
            records_as_message(&found)
        };

        Ok(vec![reply([result]), back_to_menu(&self.ctx)])
    }
}
