use anyhow::Result;
use insured_store::repository::RecordsRepository;
use stated_dialogues::dialogues::{CtxResult, DialContext, Message};

use super::{back_to_menu, messages, reply, AppContext};

#[derive(Clone)]
enum ExportState {
    FileName,
    Folder { file_name: String },
}

pub struct ExportRecordsDialog<T> {
    ctx: AppContext<T>,
    state: ExportState,
}

impl<T> ExportRecordsDialog<T> {
    pub fn new(ctx: AppContext<T>) -> Self {
        ExportRecordsDialog {
            ctx,
            state: ExportState::FileName,
        }
    }
}

impl<T> DialContext for ExportRecordsDialog<T>
where
    T: RecordsRepository,
{
    fn init(&mut self) -> Result<Vec<CtxResult>> {
        Ok(vec![reply([messages::FILE_NAME_PROMPT])])
    }

    fn shutdown(&mut self) -> Result<Vec<CtxResult>> {
        Ok(vec![])
    }

    fn handle_message(&mut self, message: Message) -> Result<Vec<CtxResult>> {
        match self.state.clone() {
            ExportState::FileName => {
                self.state = ExportState::Folder {
                    file_name: message.text,
                };
                Ok(vec![reply([messages::FOLDER_PROMPT])])
            }
            ExportState::Folder { file_name } => {
                let records = self.ctx.repo.get_records();
                let result = match self.ctx.exporter.export(&file_name, message.text(), &records)
                {
                    Ok(path) => {
                        log::debug!("Records file created: {:?}", path);
                        messages::FILE_CREATED.to_string()
                    }
                    Err(err) => {
                        log::error!("Failed records export into {:?}: {}", file_name, err);
                        messages::export_failed(err)
                    }
                };

                Ok(vec![reply([result]), back_to_menu(&self.ctx)])
            }
        }
    }
}
