//! Interactive confirmation prompts.
//!
//! Prompts read from and write to caller-supplied streams so commands can be
//! driven by stdin in the binary and by byte buffers in tests.

use std::io::{self, BufRead, Write};

/// Answer to "Is this correct?" after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelAnswer {
    /// Keep the detected label.
    Accept,
    /// Use this label instead.
    Replace(String),
}

/// Prompts the user for a yes/no answer with a default.
///
/// Empty input selects the default, and so does end of input.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: bool,
) -> io::Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };

    loop {
        write!(output, "{} {} ", question, hint)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(default);
        }

        match line.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please answer yes or no.")?,
        }
    }
}

/// Asks whether a detected label is correct, offering `options` as corrections.
///
/// Accepts yes/no or the name of a replacement label directly. Answering "no"
/// asks for the replacement. End of input accepts the detected label.
pub fn prompt_label<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &[&str],
) -> io::Result<LabelAnswer> {
    writeln!(output, "Is this correct? Available emotions: {}", options.join(", "))?;

    loop {
        write!(output, "[Y/n/<emotion>] ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(LabelAnswer::Accept);
        }

        let answer = line.trim();
        if let Some(label) = options.iter().find(|o| **o == answer) {
            return Ok(LabelAnswer::Replace(label.to_string()));
        }
        match answer.to_lowercase().as_str() {
            "" | "y" | "yes" => return Ok(LabelAnswer::Accept),
            "n" | "no" => return prompt_choice(input, output, options).map(LabelAnswer::Replace),
            _ => writeln!(output, "Please answer yes, no, or one of the emotions listed.")?,
        }
    }
}

/// Prompts until the user names one of `options`.
///
/// # Errors
///
/// Returns `io::ErrorKind::UnexpectedEof` if input ends before a valid choice.
pub fn prompt_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &[&str],
) -> io::Result<String> {
    loop {
        write!(output, "Choose an emotion ({}): ", options.join(", "))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no emotion chosen",
            ));
        }

        let answer = line.trim();
        if let Some(label) = options.iter().find(|o| **o == answer) {
            return Ok(label.to_string());
        }
        writeln!(output, "'{}' is not one of the available emotions.", answer)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const OPTIONS: &[&str] = &["anger", "joy", "sadness"];

    fn run_yes_no(answers: &str, default: bool) -> (bool, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_yes_no(&mut input, &mut output, "Delete?", default).unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_yes_no_answers() {
        assert!(run_yes_no("y\n", false).0);
        assert!(run_yes_no("YES\n", false).0);
        assert!(!run_yes_no("n\n", true).0);
        assert!(!run_yes_no("\n", false).0);
        assert!(run_yes_no("\n", true).0);
    }

    #[test]
    fn test_yes_no_reprompts_and_defaults_on_eof() {
        let (result, output) = run_yes_no("maybe\ny\n", false);
        assert!(result);
        assert!(output.contains("Please answer yes or no."));
        assert!(output.contains("[y/N]"));

        assert!(!run_yes_no("", false).0);
    }

    #[test]
    fn test_prompt_label() {
        let mut output = Vec::new();

        let mut input = Cursor::new(b"\n".to_vec());
        assert_eq!(
            prompt_label(&mut input, &mut output, OPTIONS).unwrap(),
            LabelAnswer::Accept
        );

        let mut input = Cursor::new(b"sadness\n".to_vec());
        assert_eq!(
            prompt_label(&mut input, &mut output, OPTIONS).unwrap(),
            LabelAnswer::Replace("sadness".to_string())
        );

        let mut input = Cursor::new(b"no\nfear\nanger\n".to_vec());
        assert_eq!(
            prompt_label(&mut input, &mut output, OPTIONS).unwrap(),
            LabelAnswer::Replace("anger".to_string())
        );

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("'fear' is not one of the available emotions."));
    }

    #[test]
    fn test_prompt_choice_eof() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let err = prompt_choice(&mut input, &mut output, OPTIONS).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
