use struggle_core::error::Result;
use struggle_core::record::{Field, FieldUpdate, Status};

use super::types::{Confirmation, Prompted};
use crate::presentation::Presenter;

/// Source of interactive answers.
pub trait Prompter {
    /// Shows `prompt` and reads one line of input.
    ///
    /// Returns `Ok(None)` if the user cancelled instead of answering.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the input fails.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Asks `prompt` until `validate` accepts the trimmed answer.
///
/// Every rejected answer shows `rejection` and asks again.
pub fn prompt_until<T>(
    prompter: &mut dyn Prompter,
    presenter: &mut dyn Presenter,
    prompt: &str,
    rejection: &str,
    mut validate: impl FnMut(&str) -> Option<T>,
) -> Result<Prompted<T>> {
    loop {
        let Some(input) = prompter.read_line(prompt)? else {
            return Ok(Prompted::Cancelled);
        };

        if let Some(value) = validate(input.trim()) {
            return Ok(Prompted::Value(value));
        }

        presenter.warning(rejection)?;
    }
}

/// Builds a numbered menu in the style of the status and update menus.
fn menu(title: &str, options: &[&str]) -> String {
    let rule = "-".repeat(title.len() + 8);
    let mut text = format!("\n    {title}\n{rule}\n");
    for (i, option) in options.iter().enumerate() {
        text.push_str(&format!("    {i}: {option}\n"));
    }
    text.push_str(&rule);
    text.push_str("\nSelection (number): ");
    text
}

/// Parses a menu answer, accepting only `0..len`.
fn menu_choice(input: &str, len: usize) -> Option<usize> {
    input.parse::<usize>().ok().filter(|choice| *choice < len)
}

pub fn prompt_title(
    prompter: &mut dyn Prompter,
    presenter: &mut dyn Presenter,
    company: &str,
) -> Result<Prompted<String>> {
    prompt_until(
        prompter,
        presenter,
        &format!("\nWhat is the title of the position you are applying for at {company}? "),
        "No job title was entered!",
        |input| FieldUpdate::from_input(Field::Title, input).map(|_| input.to_string()),
    )
}

pub fn prompt_status(
    prompter: &mut dyn Prompter,
    presenter: &mut dyn Presenter,
) -> Result<Prompted<Status>> {
    let labels: Vec<&str> = Status::ALL.iter().map(Status::label).collect();

    prompt_until(
        prompter,
        presenter,
        &menu("SELECT JOB STATUS", &labels),
        "Not an option!",
        |input| menu_choice(input, Status::ALL.len()).and_then(Status::from_menu_index),
    )
}

/// Notes are optional, so this only ends early on cancellation.
pub fn prompt_notes(
    prompter: &mut dyn Prompter,
    presenter: &mut dyn Presenter,
) -> Result<Prompted<String>> {
    prompt_until(
        prompter,
        presenter,
        "\nEnter notes regarding this position: ",
        "Not an option!",
        |input| Some(input.to_string()),
    )
}

/// Asks for `y` or `n`, case-insensitively. Anything else is asked again.
pub fn confirm(
    prompter: &mut dyn Prompter,
    presenter: &mut dyn Presenter,
) -> Result<Prompted<Confirmation>> {
    prompt_until(
        prompter,
        presenter,
        "\nConfirm? [y/n] ",
        "Not an option! Try again.",
        |input| match input.to_lowercase().as_str() {
            "y" => Some(Confirmation::Yes),
            "n" => Some(Confirmation::No),
            _ => None,
        },
    )
}

/// Asks for the number of one of `count` listed matches.
///
/// Numbers are 0-based and must be below `count`.
pub fn prompt_selection(
    prompter: &mut dyn Prompter,
    presenter: &mut dyn Presenter,
    count: usize,
    verb: &str,
) -> Result<Prompted<usize>> {
    prompt_until(
        prompter,
        presenter,
        &format!("\nSelect a job to {verb} (number): "),
        "Not an option! Try again.",
        |input| menu_choice(input, count),
    )
}

pub fn prompt_field(
    prompter: &mut dyn Prompter,
    presenter: &mut dyn Presenter,
) -> Result<Prompted<Field>> {
    let labels: Vec<&str> = Field::ALL.iter().map(Field::label).collect();

    prompt_until(
        prompter,
        presenter,
        &menu("UPDATE SECTION", &labels),
        "Not an option!",
        |input| menu_choice(input, Field::ALL.len()).and_then(Field::from_menu_index),
    )
}

/// Asks for the new value of `field`, validated by the field's own rule.
pub fn prompt_field_update(
    prompter: &mut dyn Prompter,
    presenter: &mut dyn Presenter,
    field: Field,
) -> Result<Prompted<FieldUpdate>> {
    let (prompt, rejection) = match field {
        Field::Company => (
            "\nWhat is the new company name? ".to_string(),
            "No company name was entered!",
        ),
        Field::Title => (
            "\nWhat is the new job title? ".to_string(),
            "No job title was entered!",
        ),
        Field::Status => {
            let labels: Vec<&str> = Status::ALL.iter().map(Status::label).collect();
            (menu("SELECT JOB STATUS", &labels), "Not an option!")
        }
        Field::Notes => ("\nWhat are the new notes? ".to_string(), "Not an option!"),
    };

    prompt_until(prompter, presenter, &prompt, rejection, |input| {
        FieldUpdate::from_input(field, input)
    })
}
