use std::iter::FusedIterator;

use crate::segment::{fragments, is_whitespace, Fragments};

/// Width, in characters, of the chunks long words are cut into.
pub const MAX_TOKEN_CHARS: usize = 7;

const NEWLINE: &str = "\n";

/// Lazily yield the tokens of `text`, in input order.
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens {
        fragments: fragments(text),
        chunking: "",
    }
}

/// Collect the tokens of `text`. Every token borrows from `text`.
pub fn tokenize(text: &str) -> Vec<&str> {
    tokens(text).collect()
}

/// Number of tokens `tokenize` would return, without collecting them.
pub fn count(text: &str) -> usize {
    tokens(text).count()
}

#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    fragments: Fragments<'a>,
    /// Remainder of a long fragment still being cut into chunks.
    chunking: &'a str,
}

enum Emit {
    Whole,
    Chunked,
    Drop,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            if !self.chunking.is_empty() {
                let (chunk, rest) = split_at_char(self.chunking, MAX_TOKEN_CHARS);
                self.chunking = rest;
                return Some(chunk);
            }
            let fragment = self.fragments.next()?;
            match classify(fragment.text) {
                Emit::Whole => return Some(fragment.text),
                Emit::Chunked => self.chunking = fragment.text,
                Emit::Drop => {}
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}

fn classify(fragment: &str) -> Emit {
    // Only a whitespace run that is exactly one newline survives. A newline
    // inside a longer run such as " \n " is dropped with the rest of the run.
    if fragment == NEWLINE {
        return Emit::Whole;
    }
    let trimmed = fragment.trim_matches(is_whitespace);
    if trimmed.is_empty() {
        Emit::Drop
    } else if trimmed.chars().nth(MAX_TOKEN_CHARS).is_some() {
        // Chunks are cut from the untrimmed fragment.
        Emit::Chunked
    } else {
        Emit::Whole
    }
}

/// Split after the first `n` chars, or at the end if `s` is shorter.
fn split_at_char(s: &str, n: usize) -> (&str, &str) {
    let end = s.char_indices().nth(n).map_or(s.len(), |(idx, _)| idx);
    s.split_at(end)
}
