//! Blocking stdin prompts with validation loops.
//!
//! Each helper asks one question, validates the answer, and re-prompts with
//! an explanatory message until it gets something usable. EOF on stdin is an
//! error: the caller is waiting for an answer that can never arrive.
//!
//! The `*_from` variants are generic over the reader/writer so the loops can
//! be tested with in-memory buffers; the public wrappers bind them to
//! stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::output as out;

fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String> {
    write!(output, "{question} ")?;
    output.flush()?;
    let mut buf = String::new();
    let n = input.read_line(&mut buf)?;
    if n == 0 {
        bail!("stdin closed while waiting for an answer to: {question}");
    }
    Ok(buf.trim().to_string())
}

/// Ask for the target directory until an existing directory is given.
pub fn ask_directory_from<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    loop {
        let answer = read_answer(input, output, "Enter the directory path:")?;
        if answer.is_empty() {
            out::warn("Please enter a path.");
            continue;
        }
        let path = PathBuf::from(&answer);
        if !path.exists() {
            out::warn("Directory does not exist.");
            continue;
        }
        if !path.is_dir() {
            out::warn(&format!("Not a directory: {answer}"));
            continue;
        }
        return Ok(path);
    }
}

/// Ask for the search string until it is non-empty.
pub fn ask_search_from<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    loop {
        let answer = read_answer(
            input,
            output,
            "Enter the string you want to replace in filenames:",
        )?;
        if answer.is_empty() {
            out::warn("Please enter a valid string to search for.");
            continue;
        }
        return Ok(answer);
    }
}

/// Ask for the replacement string; an empty answer means "delete the match".
pub fn ask_replacement_from<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    read_answer(input, output, "Enter the replacement string:")
}

/// Ask a yes/no question; an empty answer takes `default`.
pub fn confirm_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: bool,
) -> Result<bool> {
    let suffix = if default { "[Y/n]" } else { "[y/N]" };
    loop {
        let answer = read_answer(input, output, &format!("{question} {suffix}"))?;
        match answer.to_ascii_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => out::warn("Please answer yes or no."),
        }
    }
}

pub fn ask_directory() -> Result<PathBuf> {
    ask_directory_from(&mut io::stdin().lock(), &mut io::stdout())
}

pub fn ask_search() -> Result<String> {
    ask_search_from(&mut io::stdin().lock(), &mut io::stdout())
}

pub fn ask_replacement() -> Result<String> {
    ask_replacement_from(&mut io::stdin().lock(), &mut io::stdout())
}

pub fn confirm(question: &str, default: bool) -> Result<bool> {
    confirm_from(&mut io::stdin().lock(), &mut io::stdout(), question, default)
}
