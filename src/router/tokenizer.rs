//! Nom-based line tokenizer.
//!
//! Splits one raw line into its positional pieces before any grammar is
//! applied:
//!
//! ```text
//! [@tags] [:prefix] <command> [params...] [:trailing]
//! ```

use nom::bytes::complete::{take_until, take_while1};
use nom::character::complete::{char, space0};
use nom::combinator::opt;
use nom::sequence::preceded;
use nom::IResult;

/// Raw positional pieces of a line, borrowed from the input.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawParts<'a> {
    /// Tag block without the leading `@`, if present.
    pub(crate) tags: Option<&'a str>,
    /// Prefix without the leading `:`, if present.
    pub(crate) prefix: Option<&'a str>,
    /// Command token (word or 3-digit numeric).
    pub(crate) command: &'a str,
    /// Positional parameters; a trailing parameter is the last entry.
    pub(crate) params: Vec<&'a str>,
}

fn tag_block(input: &str) -> IResult<&str, &str> {
    preceded(char('@'), take_until(" "))(input)
}

fn prefix(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_while1(|c| c != ' '))(input)
}

fn command(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric())(input)
}

fn spaces(input: &str) -> IResult<&str, &str> {
    space0(input)
}

impl<'a> RawParts<'a> {
    /// Tokenize one line. Returns `None` when the line has no command
    /// token; grammar-level rejection happens in the router.
    pub(crate) fn tokenize(input: &'a str) -> Option<Self> {
        let (input, tags) = opt(tag_block)(input).ok()?;
        let (input, _) = spaces(input).ok()?;
        let (input, prefix) = opt(prefix)(input).ok()?;
        let (input, _) = spaces(input).ok()?;
        let (input, command) = command(input).ok()?;

        let mut params: Vec<&str> = Vec::new();
        let mut rest = input;
        while let Some(b' ') = rest.as_bytes().first().copied() {
            rest = &rest[1..];

            if let Some(b':') = rest.as_bytes().first().copied() {
                // Trailing parameter: everything after `:` to end of line.
                let after_colon = &rest[1..];
                let end = after_colon.find(['\r', '\n']).unwrap_or(after_colon.len());
                params.push(&after_colon[..end]);
                break;
            }

            let mut end = rest.len();
            for stop in [' ', '\r', '\n'] {
                if let Some(i) = rest.find(stop) {
                    end = end.min(i);
                }
            }
            let param = &rest[..end];
            if param.is_empty() {
                break;
            }
            params.push(param);
            rest = &rest[end..];
        }

        Some(RawParts {
            tags,
            prefix,
            command,
            params,
        })
    }
}
