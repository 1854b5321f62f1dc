//! Interactive prompt layer.
//!
//! All user interaction goes through the [`Prompter`] trait so the pipeline
//! can run against a terminal, accept every default non-interactively
//! (`--yes`), or be driven by a scripted answer queue in tests. A `None`
//! answer means the user dismissed the prompt; callers map that to
//! [`ModelGenError::Cancelled`] so generation stops with no side effects.

use std::io::{BufRead, Write};

use jsonmodel_core::{ModelGenError, ModelGenResult};

/// A sequence of single-choice picks and free-text inputs
pub trait Prompter {
    /// Single-choice pick. Returns the chosen item, or `None` on cancel.
    fn pick(
        &mut self,
        placeholder: &str,
        choices: &[String],
        default: &str,
    ) -> ModelGenResult<Option<String>>;

    /// Free-text input with a pre-filled default. Returns `None` on cancel.
    fn input(
        &mut self,
        prompt: &str,
        placeholder: &str,
        default: &str,
    ) -> ModelGenResult<Option<String>>;
}

/// Prompter reading answers from stdin, writing prompts to stderr so stdout
/// stays clean for results
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn pick(
        &mut self,
        placeholder: &str,
        choices: &[String],
        default: &str,
    ) -> ModelGenResult<Option<String>> {
        let mut err = std::io::stderr().lock();

        writeln!(err, "? {placeholder}")?;
        for (index, choice) in choices.iter().enumerate() {
            let marker = if choice == default { " (default)" } else { "" };
            writeln!(err, "  {}) {choice}{marker}", index + 1)?;
        }

        loop {
            write!(err, "> ")?;
            err.flush()?;

            let mut line = String::new();
            if std::io::stdin().lock().read_line(&mut line)? == 0 {
                return Ok(None); // EOF
            }

            let answer = line.trim();
            if answer.is_empty() {
                return Ok(Some(default.to_string()));
            }
            if answer.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            if let Ok(number) = answer.parse::<usize>() {
                if (1..=choices.len()).contains(&number) {
                    return Ok(Some(choices[number - 1].clone()));
                }
            }
            if let Some(choice) = choices
                .iter()
                .find(|choice| choice.eq_ignore_ascii_case(answer))
            {
                return Ok(Some(choice.clone()));
            }

            writeln!(
                err,
                "  enter a number 1-{}, a choice name, or q to cancel",
                choices.len()
            )?;
        }
    }

    fn input(
        &mut self,
        prompt: &str,
        placeholder: &str,
        default: &str,
    ) -> ModelGenResult<Option<String>> {
        let mut err = std::io::stderr().lock();

        writeln!(err, "? {prompt} ({placeholder})")?;
        write!(err, "  [{default}] > ")?;
        err.flush()?;

        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None); // EOF
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(Some(default.to_string()));
        }
        Ok(Some(answer.to_string()))
    }
}

/// Prompter that accepts every default, for `--yes` runs
#[derive(Debug, Default)]
pub struct AcceptDefaults;

impl Prompter for AcceptDefaults {
    fn pick(
        &mut self,
        _placeholder: &str,
        _choices: &[String],
        default: &str,
    ) -> ModelGenResult<Option<String>> {
        Ok(Some(default.to_string()))
    }

    fn input(
        &mut self,
        _prompt: &str,
        _placeholder: &str,
        default: &str,
    ) -> ModelGenResult<Option<String>> {
        Ok(Some(default.to_string()))
    }
}

/// Pick with cancellation mapped to [`ModelGenError::Cancelled`]
pub fn pick_or_cancel(
    prompter: &mut dyn Prompter,
    placeholder: &str,
    choices: &[String],
    default: &str,
) -> ModelGenResult<String> {
    prompter
        .pick(placeholder, choices, default)?
        .ok_or(ModelGenError::Cancelled)
}

/// Yes/no pick. Emits the explicit `no`/`yes` pair rather than inferring
/// from absence; cancellation aborts.
pub fn yes_no(
    prompter: &mut dyn Prompter,
    placeholder: &str,
    default_yes: bool,
) -> ModelGenResult<bool> {
    let choices = vec!["no".to_string(), "yes".to_string()];
    let default = if default_yes { "yes" } else { "no" };
    let answer = pick_or_cancel(prompter, placeholder, &choices, default)?;
    Ok(answer == "yes")
}

/// Required free-text input: cancellation aborts, an empty answer is a
/// user-facing [`ModelGenError::MissingInput`] error.
pub fn required_input(
    prompter: &mut dyn Prompter,
    prompt: &str,
    placeholder: &str,
    default: &str,
    field: &str,
) -> ModelGenResult<String> {
    let answer = prompter
        .input(prompt, placeholder, default)?
        .ok_or(ModelGenError::Cancelled)?;

    let answer = answer.trim();
    if answer.is_empty() {
        return Err(ModelGenError::MissingInput(field.to_string()));
    }
    Ok(answer.to_string())
}

/// Scripted prompter for tests: pops pre-loaded answers, accepts the
/// default once the queue runs dry
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<ScriptedAnswer>,
}

#[cfg(test)]
#[derive(Debug)]
enum ScriptedAnswer {
    Answer(String),
    Default,
    Cancel,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, answer: &str) -> Self {
        self.answers
            .push_back(ScriptedAnswer::Answer(answer.to_string()));
        self
    }

    pub fn accept_default(mut self) -> Self {
        self.answers.push_back(ScriptedAnswer::Default);
        self
    }

    pub fn cancel(mut self) -> Self {
        self.answers.push_back(ScriptedAnswer::Cancel);
        self
    }

    fn next(&mut self, default: &str) -> Option<String> {
        match self.answers.pop_front() {
            None | Some(ScriptedAnswer::Default) => Some(default.to_string()),
            Some(ScriptedAnswer::Answer(answer)) => Some(answer),
            Some(ScriptedAnswer::Cancel) => None,
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn pick(
        &mut self,
        _placeholder: &str,
        _choices: &[String],
        default: &str,
    ) -> ModelGenResult<Option<String>> {
        Ok(self.next(default))
    }

    fn input(
        &mut self,
        _prompt: &str,
        _placeholder: &str,
        default: &str,
    ) -> ModelGenResult<Option<String>> {
        Ok(self.next(default))
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn yes_no___maps_answer_to_bool() {
        let mut prompter = ScriptedPrompter::new().answer("yes").answer("no");

        assert!(yes_no(&mut prompter, "Use Lombok?", false).unwrap());
        assert!(!yes_no(&mut prompter, "Use Lombok?", true).unwrap());
    }

    #[test]
    fn yes_no___empty_queue_takes_default() {
        let mut prompter = ScriptedPrompter::new();

        assert!(yes_no(&mut prompter, "Use Lombok?", true).unwrap());
        assert!(!yes_no(&mut prompter, "Use Lombok?", false).unwrap());
    }

    #[test]
    fn yes_no___cancel_aborts() {
        let mut prompter = ScriptedPrompter::new().cancel();

        let err = yes_no(&mut prompter, "Use Lombok?", false).unwrap_err();

        assert!(matches!(err, ModelGenError::Cancelled));
    }

    #[test]
    fn pick_or_cancel___returns_explicit_answer() {
        let mut prompter = ScriptedPrompter::new().answer("array");
        let choices = vec!["array".to_string(), "list".to_string()];

        let answer = pick_or_cancel(&mut prompter, "Array type?", &choices, "list").unwrap();

        assert_eq!(answer, "array");
    }

    #[test]
    fn required_input___empty_answer_is_missing_input() {
        let mut prompter = ScriptedPrompter::new().answer("   ");

        let err = required_input(
            &mut prompter,
            "Enter the package name",
            "e.g., com.example.models",
            "",
            "Package name",
        )
        .unwrap_err();

        assert!(matches!(err, ModelGenError::MissingInput(field) if field == "Package name"));
    }

    #[test]
    fn required_input___cancel_aborts() {
        let mut prompter = ScriptedPrompter::new().cancel();

        let err = required_input(
            &mut prompter,
            "Enter the package name",
            "e.g., com.example.models",
            "com.example.model",
            "Package name",
        )
        .unwrap_err();

        assert!(matches!(err, ModelGenError::Cancelled));
    }

    #[test]
    fn required_input___trims_answer() {
        let mut prompter = ScriptedPrompter::new().answer("  com.acme.models  ");

        let answer = required_input(
            &mut prompter,
            "Enter the package name",
            "e.g., com.example.models",
            "",
            "Package name",
        )
        .unwrap();

        assert_eq!(answer, "com.acme.models");
    }

    #[test]
    fn AcceptDefaults___always_returns_default() {
        let mut prompter = AcceptDefaults;
        let choices = vec!["no".to_string(), "yes".to_string()];

        assert_eq!(
            prompter.pick("?", &choices, "no").unwrap().as_deref(),
            Some("no")
        );
        assert_eq!(
            prompter.input("?", "", "com.example").unwrap().as_deref(),
            Some("com.example")
        );
    }
}
