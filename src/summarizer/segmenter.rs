//! Sentence segmentation for visit notes
//!
//! Splits on `.`, `!`, `?`, `…` and line breaks. A run of terminators
//! (`?!`, `...`) and any closing quote or bracket after it stay with the
//! sentence they close. A lone period does not end a sentence when it follows
//! a known Spanish abbreviation ("Sr.", "Hna.") or sits inside a token such
//! as a decimal number.

/// Abbreviations whose trailing period is not a sentence boundary
const ABBREVIATIONS: &[&str] = &[
    "sr", "sra", "srta", "sres", "dr", "dra", "ud", "uds", "hno", "hna", "hnos", "hnas", "lic",
    "ing", "prof", "av", "etc", "pág", "aprox", "tel",
];

/// Lazy iterator over the trimmed, non-empty sentences of a note
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Sentences<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

/// Segment `text` into sentences
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences::new(text)
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            let start = self.pos;
            self.pos += boundary(rest);

            let sentence = self.text[start..self.pos].trim();
            if !sentence.is_empty() {
                return Some(sentence);
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Sentences<'_> {}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | '…')
}

fn is_closing(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '»' | '”' | '’')
}

/// Byte length of the first sentence in `rest`, terminators included
fn boundary(rest: &str) -> usize {
    let mut chars = rest.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch == '\n' {
            return idx + ch.len_utf8();
        }
        if !is_terminator(ch) {
            continue;
        }

        let mut end = idx + ch.len_utf8();
        let mut run = 1;
        while let Some(&(next_idx, next)) = chars.peek() {
            if is_terminator(next) || is_closing(next) {
                end = next_idx + next.len_utf8();
                run += 1;
                chars.next();
            } else {
                break;
            }
        }

        if ch == '.' && run == 1 {
            let glued = chars.peek().map_or(false, |&(_, next)| !next.is_whitespace());
            if glued || follows_abbreviation(&rest[..idx]) {
                continue;
            }
        }

        return end;
    }

    rest.len()
}

fn follows_abbreviation(before: &str) -> bool {
    before
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphabetic())
        .last()
        .map_or(false, |(start, _)| {
            ABBREVIATIONS.contains(&before[start..].to_lowercase().as_str())
        })
}
