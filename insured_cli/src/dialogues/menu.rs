use anyhow::Result;
use insured_store::repository::RecordsRepository;
use stated_dialogues::dialogues::{CtxResult, DialContext, Message};

use super::{
    add_record::AddRecordDialog,
    back_to_menu,
    delete_record::DeleteRecordDialog,
    edit_record::EditRecordDialog,
    export_records::ExportRecordsDialog,
    input::{parse_number, NumberError},
    messages::{self, records_as_message},
    reply,
    search_records::SearchRecordsDialog,
    AppContext,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddRecord,
    ListRecords,
    SearchRecords,
    EditRecord,
    DeleteRecord,
    ExportRecords,
    End,
}

impl TryFrom<u64> for MenuChoice {
    type Error = NumberError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::AddRecord),
            2 => Ok(MenuChoice::ListRecords),
            3 => Ok(MenuChoice::SearchRecords),
            4 => Ok(MenuChoice::EditRecord),
            5 => Ok(MenuChoice::DeleteRecord),
            6 => Ok(MenuChoice::ExportRecords),
            7 => Ok(MenuChoice::End),
            _ => Err(NumberError::OutOfRange),
        }
    }
}

pub struct MainMenuDialog<T> {
    ctx: AppContext<T>,
}

impl<T> MainMenuDialog<T> {
    pub fn new(ctx: AppContext<T>) -> Self {
        MainMenuDialog { ctx }
    }
}

impl<T> DialContext for MainMenuDialog<T>
where
    T: RecordsRepository,
{
    fn init(&mut self) -> Result<Vec<CtxResult>> {
        Ok(vec![reply([messages::MENU])])
    }

    fn shutdown(&mut self) -> Result<Vec<CtxResult>> {
        Ok(vec![])
    }

    fn handle_message(&mut self, message: Message) -> Result<Vec<CtxResult>> {
        let choice = parse_number::<u64>(message.text()).and_then(MenuChoice::try_from);
        log::debug!("Menu input {}: {:?}", message.number, choice);

        let results = match choice {
            Err(NumberError::NotANumber) => vec![reply([messages::INVALID_NUMBER])],
            Err(NumberError::OutOfRange) => {
                vec![reply([messages::MENU_RANGE, messages::MENU])]
            }
            Ok(MenuChoice::AddRecord) => {
                vec![CtxResult::NewCtx(Box::new(AddRecordDialog::new(self.ctx.clone())))]
            }
            Ok(MenuChoice::ListRecords) => {
                let records = self.ctx.repo.get_records();
                let listing = if records.is_empty() {
                    messages::NO_RECORDS.to_string()
                } else {
                    records_as_message(&records)
                };
                vec![reply([listing]), back_to_menu(&self.ctx)]
            }
            Ok(MenuChoice::SearchRecords) => vec![CtxResult::NewCtx(Box::new(
                SearchRecordsDialog::new(self.ctx.clone()),
            ))],
            Ok(MenuChoice::EditRecord) => {
                vec![CtxResult::NewCtx(Box::new(EditRecordDialog::new(self.ctx.clone())))]
            }
            Ok(MenuChoice::DeleteRecord) => vec![CtxResult::NewCtx(Box::new(
                DeleteRecordDialog::new(self.ctx.clone()),
            ))],
            Ok(MenuChoice::ExportRecords) => vec![CtxResult::NewCtx(Box::new(
                ExportRecordsDialog::new(self.ctx.clone()),
            ))],
            Ok(MenuChoice::End) => vec![reply([messages::GOODBYE]), CtxResult::CloseCtx],
        };

        Ok(results)
    }
}
