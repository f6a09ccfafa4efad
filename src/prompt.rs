use anyhow::{Context, Result};
use inquire::{InquireError, Text};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// A parsed reply to a `[Y/N]` question
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// Anything that is neither `y` nor `n`, including an empty line
    Other,
}

impl Answer {
    /// Parses a raw reply, ignoring surrounding whitespace and case
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "y" => Answer::Yes,
            "n" => Answer::No,
            _ => Answer::Other,
        }
    }

    /// Only an explicit `y` confirms; everything else declines
    #[must_use]
    pub fn is_yes(self) -> bool {
        self == Answer::Yes
    }
}

/// Trait for reading a single line of user input
/// This allows the workflow to run against a terminal, a pipe, or a script
pub trait Prompter {
    /// Show `prompt` and return the line the user typed
    ///
    /// # Errors
    /// Returns an error if the input could not be read
    fn read_line(&self, prompt: &str) -> Result<String>;
}

/// Asks a yes/no question and reports whether the user confirmed
///
/// # Errors
/// Returns an error if the prompter fails to read input
pub fn confirm(prompter: &dyn Prompter, prompt: &str) -> Result<bool> {
    let raw = prompter.read_line(prompt)?;
    let answer = Answer::parse(&raw);
    tracing::debug!(?answer, "read confirmation");
    Ok(answer.is_yes())
}

/// Interactive terminal prompt backed by inquire
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn read_line(&self, prompt: &str) -> Result<String> {
        match Text::new(prompt).prompt() {
            Ok(line) => Ok(line),
            // Esc behaves like pressing Enter on an empty line
            Err(InquireError::OperationCanceled) => Ok(String::new()),
            Err(e) => Err(e).context("Failed to read input"),
        }
    }
}

/// Plain line-based prompt for non-interactive stdin (pipes, scripts)
pub struct LinePrompter<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&self, prompt: &str) -> Result<String> {
        {
            let mut output = self.output.borrow_mut();
            writeln!(output, "{}", prompt).context("Failed to write prompt")?;
            output.flush().context("Failed to write prompt")?;
        }

        // EOF leaves the buffer empty, which reads as a decline. Bytes that are
        // not UTF-8 can never spell `y`, so they are kept lossily instead of failing.
        let mut buf = Vec::new();
        self.input
            .borrow_mut()
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Mock implementation for testing that replays predetermined answers
pub struct MockPrompter {
    answers: RefCell<VecDeque<String>>,
    prompts: RefCell<Vec<String>>,
}

impl MockPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// Every prompt shown so far, in order
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Prompter for MockPrompter {
    fn read_line(&self, prompt: &str) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        match self.answers.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            None => anyhow::bail!("Mock prompter has no answer left for '{}'", prompt),
        }
    }
}
