pub mod console;

use crate::dialogues::{CtxResult, DialContext, Message, OutgoingMessage};
use anyhow::{Context, Result};

pub type AnyDialContext = dyn DialContext + Send;

/// Owns the active dialogue context and applies context switches
/// (`NewCtx`/`CloseCtx`) requested by it.
pub struct DialogueController {
    context: Box<AnyDialContext>,
    handled_messages: usize,
}

impl DialogueController {
    pub fn create<T>(context: T) -> Result<(Self, Vec<OutgoingMessage>)>
    where
        T: DialContext + Send + 'static,
    {
        Self::create_boxed(Box::new(context))
    }

    pub fn create_boxed(mut context: Box<AnyDialContext>) -> Result<(Self, Vec<OutgoingMessage>)> {
        let results = context.init()?;
        let (context, results) = process_context_results(context, results)?;
        Ok((
            DialogueController {
                context: context.context("context self destroyed after initialization")?,
                handled_messages: 0,
            },
            results,
        ))
    }

    pub fn handled_messages(&self) -> usize {
        self.handled_messages
    }

    /// Returns `None` in place of the controller once the dialogue is closed.
    pub fn handle(mut self, message: Message) -> Result<(Option<Self>, Vec<OutgoingMessage>)> {
        let message_number = message.number;
        let results = self
            .context
            .handle_message(message)
            .with_context(|| format!("Failed message {} handling", message_number))?;

        let (context, results) = process_context_results(self.context, results)?;

        Ok((
            context.map(|ctx| DialogueController {
                context: ctx,
                handled_messages: self.handled_messages + 1,
            }),
            results,
        ))
    }

    pub fn shutdown(mut self) -> Result<Vec<OutgoingMessage>> {
        let results = self.context.shutdown()?;
        process_context_results(self.context, results).map(|(_, messages)| messages)
    }
}

fn process_context_results(
    context: Box<AnyDialContext>,
    mut results: Vec<CtxResult>,
) -> Result<(Option<Box<AnyDialContext>>, Vec<OutgoingMessage>)> {
    let mut context: Option<Box<AnyDialContext>> = Some(context);

    loop {
        let mut new_results: Vec<CtxResult> = vec![];
        for ctx_result in results {
            match ctx_result {
                CtxResult::NewCtx(mut new_ctx) => {
                    log::debug!("Switching dialog context");
                    if let Some(ref mut old_ctx) = context {
                        new_results
                            .extend(old_ctx.shutdown().context("Failed old context shutdown")?);
                    }
                    new_results
                        .extend(new_ctx.init().context("Failed new context initialization")?);
                    context = Some(new_ctx);
                }
                CtxResult::CloseCtx => {
                    log::debug!("Closing dialog context");
                    if let Some(ref mut old_ctx) = context {
                        new_results.extend(old_ctx.shutdown().context("Failed context shutdown")?);
                    }
                    context = None
                }
                others => new_results.push(others),
            };
        }

        results = new_results;
        if !results
            .iter()
            .any(|res| matches!(res, CtxResult::CloseCtx | CtxResult::NewCtx(_)))
        {
            break;
        }
    }

    Ok((
        context,
        results
            .into_iter()
            .filter_map(|result| match result {
                CtxResult::Messages(messages) => Some(messages),
                CtxResult::Nothing => None,
                CtxResult::CloseCtx => unreachable!(),
                CtxResult::NewCtx(_) => unreachable!(),
            })
            .flatten()
            .collect::<Vec<OutgoingMessage>>(),
    ))
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Result};

    use super::DialogueController;
    use crate::dialogues::{CtxResult, DialContext, Message, OutgoingMessage};

    struct EchoDialog;

    impl DialContext for EchoDialog {
        fn init(&mut self) -> Result<Vec<CtxResult>> {
            Ok(vec![CtxResult::Messages(vec!["echo".into()])])
        }

        fn shutdown(&mut self) -> Result<Vec<CtxResult>> {
            Ok(vec![CtxResult::Messages(vec!["echo off".into()])])
        }

        fn handle_message(&mut self, message: Message) -> Result<Vec<CtxResult>> {
            match message.text() {
                "switch" => Ok(vec![CtxResult::NewCtx(Box::new(CountDialog(0)))]),
                "close" => Ok(vec![CtxResult::Messages(vec!["bye".into()]), CtxResult::CloseCtx]),
                "fail" => Err(anyhow!("broken")),
                text => Ok(vec![CtxResult::Messages(vec![text.into()])]),
            }
        }
    }

    struct CountDialog(usize);

    impl DialContext for CountDialog {
        fn init(&mut self) -> Result<Vec<CtxResult>> {
            Ok(vec![CtxResult::Nothing])
        }

        fn shutdown(&mut self) -> Result<Vec<CtxResult>> {
            Ok(vec![])
        }

        fn handle_message(&mut self, _message: Message) -> Result<Vec<CtxResult>> {
            self.0 += 1;
            match self.0 {
                2 => Ok(vec![CtxResult::NewCtx(Box::new(EchoDialog))]),
                count => Ok(vec![CtxResult::Messages(vec![count.to_string().into()])]),
            }
        }
    }

    fn texts(messages: Vec<OutgoingMessage>) -> Vec<String> {
        messages.into_iter().map(String::from).collect()
    }

    fn message(number: usize, text: &str) -> Message {
        Message::new(number, text.to_string())
    }

    #[test]
    fn test_controller_create() {
        let (controller, messages) = DialogueController::create(EchoDialog).unwrap();

        assert_eq!(texts(messages), vec!["echo"]);
        assert_eq!(controller.handled_messages(), 0);
    }

    #[test]
    fn test_controller_switch_context() {
        let (controller, _) = DialogueController::create(EchoDialog).unwrap();

        let (controller, messages) = controller.handle(message(1, "switch")).unwrap();
        assert_eq!(texts(messages), vec!["echo off"]);

        let (controller, messages) = controller.unwrap().handle(message(2, "any")).unwrap();
        assert_eq!(texts(messages), vec!["1"]);

        let (controller, messages) = controller.unwrap().handle(message(3, "any")).unwrap();
        assert_eq!(texts(messages), vec!["echo"]);

        let controller = controller.unwrap();
        assert_eq!(controller.handled_messages(), 3);
    }

    #[test]
    fn test_controller_close_context() {
        let (controller, _) = DialogueController::create(EchoDialog).unwrap();

        let (controller, messages) = controller.handle(message(1, "close")).unwrap();

        assert!(controller.is_none());
        assert_eq!(texts(messages), vec!["bye", "echo off"]);
    }

    #[test]
    fn test_controller_handle_error() {
        let (controller, _) = DialogueController::create(EchoDialog).unwrap();

        let result = controller.handle(message(4, "fail"));

        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "Failed message 4 handling");
        assert_eq!(err.root_cause().to_string(), "broken");
    }

    #[test]
    fn test_controller_shutdown() {
        let (controller, _) = DialogueController::create(EchoDialog).unwrap();

        assert_eq!(texts(controller.shutdown().unwrap()), vec!["echo off"]);
    }
}
