use std::iter::FusedIterator;

/// Characters that always form a fragment of their own.
const PUNCTUATION: [char; 4] = ['.', ',', '!', '?'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Maximal run of whitespace, newlines included.
    Whitespace,
    /// A single `.`, `,`, `!` or `?`.
    Punctuation,
    /// Maximal run of anything else.
    Word,
}

/// One piece of the coarse split, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub kind: FragmentKind,
    pub text: &'a str,
}

/// Split `text` into whitespace runs, single punctuation marks and word runs,
/// keeping the delimiters. Fragments are never empty and concatenate back to
/// `text`.
pub fn fragments(text: &str) -> Fragments<'_> {
    Fragments { rest: text }
}

#[derive(Debug, Clone)]
pub struct Fragments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Fragments<'a> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let (kind, end) = if is_whitespace(first) {
            let end = self
                .rest
                .find(|c: char| !is_whitespace(c))
                .unwrap_or(self.rest.len());
            (FragmentKind::Whitespace, end)
        } else if is_punctuation(first) {
            (FragmentKind::Punctuation, first.len_utf8())
        } else {
            let end = self
                .rest
                .find(|c: char| is_whitespace(c) || is_punctuation(c))
                .unwrap_or(self.rest.len());
            (FragmentKind::Word, end)
        };
        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Fragment { kind, text })
    }
}

impl FusedIterator for Fragments<'_> {}

/// ECMAScript `\s`: Unicode White_Space without U+0085, plus the BOM.
pub(crate) fn is_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(text: &str) -> Vec<(FragmentKind, &str)> {
        fragments(text).map(|f| (f.kind, f.text)).collect()
    }

    #[test]
    fn empty_input_has_no_fragments() {
        assert!(fragments("").next().is_none());
    }

    #[test]
    fn keeps_delimiters_as_fragments() {
        use FragmentKind::*;
        assert_eq!(
            split("Hello, world!"),
            vec![
                (Word, "Hello"),
                (Punctuation, ","),
                (Whitespace, " "),
                (Word, "world"),
                (Punctuation, "!"),
            ]
        );
    }

    #[test]
    fn whitespace_runs_are_maximal_and_include_newlines() {
        use FragmentKind::*;
        assert_eq!(
            split("a \t\n b"),
            vec![(Word, "a"), (Whitespace, " \t\n "), (Word, "b")]
        );
    }

    #[test]
    fn adjacent_punctuation_splits_one_mark_at_a_time() {
        use FragmentKind::*;
        assert_eq!(
            split("wait?!..."),
            vec![
                (Word, "wait"),
                (Punctuation, "?"),
                (Punctuation, "!"),
                (Punctuation, "."),
                (Punctuation, "."),
                (Punctuation, "."),
            ]
        );
    }

    #[test]
    fn hyphens_and_apostrophes_stay_inside_words() {
        use FragmentKind::*;
        assert_eq!(
            split("don't well-known;x"),
            vec![(Word, "don't"), (Whitespace, " "), (Word, "well-known;x")]
        );
    }

    #[test]
    fn unicode_whitespace_follows_ecmascript_set() {
        assert!(is_whitespace('\u{3000}'));
        assert!(is_whitespace('\u{FEFF}'));
        assert!(is_whitespace('\u{A0}'));
        assert!(!is_whitespace('\u{85}'));
        assert!(!is_whitespace('\u{200B}'));
    }

    #[test]
    fn fragments_concatenate_to_input() {
        let text = "  Grüße, 世界!\n\nnext…line?  ";
        let joined: String = fragments(text).map(|f| f.text).collect();
        assert_eq!(joined, text);
    }
}
