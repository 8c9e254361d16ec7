use std::sync::Arc;

use anyhow::Result;
use insured_store::{export::RecordsExporter, repository::RecordsRepository};
use stated_dialogues::controller::{
    console::{run_console, LineSink, LineSource},
    AnyDialContext,
};

use crate::dialogues::{menu::MainMenuDialog, AppContext};

/// Menu-driven console over a records repository.
pub struct InsuredController<T, S, W> {
    ctx: AppContext<T>,
    source: S,
    sink: W,
}

impl<T, S, W> InsuredController<T, S, W>
where
    T: RecordsRepository,
    S: LineSource,
    W: LineSink,
{
    pub fn new(repo: T, exporter: Arc<dyn RecordsExporter>, source: S, sink: W) -> Self {
        InsuredController {
            ctx: AppContext::new(repo, exporter),
            source,
            sink,
        }
    }

    /// Runs the menu loop until "End" is chosen or the input is exhausted.
    pub fn run(&mut self) -> Result<()> {
        let ctx = self.ctx.clone();
        let new_menu = move || -> Box<AnyDialContext> {
            Box::new(MainMenuDialog::new(ctx.clone()))
        };

        run_console(new_menu, &mut self.source, &mut self.sink)
    }

    pub fn repo(&self) -> &T {
        &self.ctx.repo
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }
}
