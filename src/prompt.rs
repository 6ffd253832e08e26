use dialoguer::Confirm as ConfirmPrompt;
use log::warn;

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// Interactive prompt on the terminal. Anything but an explicit yes counts as no.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, message: &str) -> bool {
        match ConfirmPrompt::new()
            .with_prompt(message)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Could not read answer from terminal: {}", e);
                false
            }
        }
    }
}

/// Always gives the same answer, for `--yes` and tests.
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}
