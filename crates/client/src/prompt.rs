//! Line-based prompts over any reader/writer pair.
use std::io::{self, BufRead, Write};

use crate::presentation::warning_msg;

/// One answer of a selection prompt, picked by its first letter.
#[derive(Clone, Debug, PartialEq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Selection keys: upper-cased first letters, or 1-based numbers when two
/// labels share a first letter.
pub fn selection_keys<T>(choices: &[Choice<T>]) -> Vec<String> {
    let letters: Vec<String> = choices
        .iter()
        .map(|c| {
            c.label
                .chars()
                .next()
                .map(|ch| ch.to_uppercase().collect::<String>())
                .unwrap_or_default()
        })
        .collect();

    let unique = letters
        .iter()
        .enumerate()
        .all(|(i, key)| !key.is_empty() && !letters[..i].contains(key));

    if unique {
        letters
    } else {
        (1..=choices.len()).map(|n| n.to_string()).collect()
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a line of text.
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    /// Prints `msg` and reads one trimmed line.
    ///
    /// End of input is an [`io::ErrorKind::UnexpectedEof`] error.
    pub fn ask_line(&mut self, msg: &str) -> io::Result<String> {
        write!(self.output, "{msg}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(line.trim().to_owned())
    }

    /// Lists the choices and re-prompts until a valid key is entered.
    pub fn ask_selection<T: Clone>(&mut self, msg: &str, choices: &[Choice<T>]) -> io::Result<T> {
        let keys = selection_keys(choices);
        let description = keys
            .iter()
            .zip(choices)
            .map(|(key, choice)| format!("{key}: {}", choice.label))
            .collect::<Vec<_>>()
            .join("\n");

        self.prompt_question(&format!("{msg}\n{description}\n"), &keys, choices)
    }

    pub fn ask_yes_no(&mut self, msg: &str) -> io::Result<bool> {
        let keys = ["Y".to_owned(), "N".to_owned()];
        let choices = [Choice::new("Yes", true), Choice::new("No", false)];
        self.prompt_question(&format!("{msg}\nY \\ N: "), &keys, &choices)
    }

    pub fn ask_continue(&mut self) -> io::Result<bool> {
        self.ask_yes_no("Do you want to continue?")
    }

    pub fn press_to_continue(&mut self) -> io::Result<()> {
        self.ask_line("\nPress ENTER to continue.\n").map(drop)
    }

    fn prompt_question<T: Clone>(
        &mut self,
        prompt: &str,
        keys: &[String],
        choices: &[Choice<T>],
    ) -> io::Result<T> {
        loop {
            let answer = self.ask_line(prompt)?.to_uppercase();
            if let Some(index) = keys.iter().position(|key| *key == answer) {
                return Ok(choices[index].value.clone());
            }
            self.say(warning_msg("Your selection is not in the list!"))?;
        }
    }
}
