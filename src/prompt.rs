//! Interactive yes/no confirmation

use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Trait for asking the user a yes/no question
pub trait Confirm: Send + Sync {
    /// Ask once; anything but an explicit yes counts as no
    fn ask_yes_no(&self, prompt: &str) -> io::Result<bool>;
}

/// Returns true iff the answer is exactly `y` or `yes`, ignoring case
///
/// Only the line terminator is stripped; `" yes"` is a no.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim_end_matches(['\r', '\n']).to_lowercase().as_str(),
        "y" | "yes"
    )
}

/// Render the prompt on `writer` and read a single line from `reader`
///
/// End of input is treated as an empty answer.
pub fn ask_yes_no_with<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<bool> {
    write!(writer, "{} (y/N) ", prompt)?;
    writer.flush()?;

    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(is_affirmative(&input))
}

/// Confirmation on the process's stdin and stdout
#[derive(Debug, Default, Clone)]
pub struct StdinConfirm {
    color: bool,
}

impl StdinConfirm {
    /// Create a new stdin confirmation
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Confirm for StdinConfirm {
    fn ask_yes_no(&self, prompt: &str) -> io::Result<bool> {
        let prompt = if self.color {
            prompt.bold().to_string()
        } else {
            prompt.to_string()
        };

        // Both locks are released when this call returns
        let mut input = io::stdin().lock();
        let mut output = io::stdout().lock();
        ask_yes_no_with(&mut input, &mut output, &prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str) -> (bool, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut writer = Vec::new();
        let answer = ask_yes_no_with(&mut reader, &mut writer, "Update?").unwrap();
        (answer, String::from_utf8(writer).unwrap())
    }

    #[test]
    fn test_uppercase_y_is_yes() {
        assert!(ask("Y\n").0);
    }

    #[test]
    fn test_yes_variants() {
        assert!(ask("y\n").0);
        assert!(ask("yes\n").0);
        assert!(ask("YES\r\n").0);
        assert!(ask("Yes").0);
    }

    #[test]
    fn test_surrounding_whitespace_is_no() {
        assert!(!ask("  Yes  \n").0);
        assert!(!ask(" y\n").0);
        assert!(!ask("y \n").0);
    }

    #[test]
    fn test_other_answers_are_no() {
        assert!(!ask("nope\n").0);
        assert!(!ask("n\n").0);
        assert!(!ask("yess\n").0);
        assert!(!ask("y e s\n").0);
    }

    #[test]
    fn test_empty_answer_is_no() {
        assert!(!ask("\n").0);
    }

    #[test]
    fn test_end_of_input_is_no() {
        assert!(!ask("").0);
    }

    #[test]
    fn test_reads_a_single_line() {
        let mut reader = Cursor::new(b"y\nn\n".to_vec());
        let mut writer = Vec::new();
        assert!(ask_yes_no_with(&mut reader, &mut writer, "First?").unwrap());
        assert!(!ask_yes_no_with(&mut reader, &mut writer, "Second?").unwrap());
    }

    #[test]
    fn test_prompt_is_rendered() {
        let (_, output) = ask("y\n");
        assert_eq!(output, "Update? (y/N) ");
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("Y"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("nope"));
    }
}
