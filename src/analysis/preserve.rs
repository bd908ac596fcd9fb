//! Preserve-pattern handling.
//!
//! Preserve patterns are regexes whose matches must reach the output with
//! their original text. The matches are searched in the original input (see
//! [`PreservedSpans::find`]) and then reconciled with the tokenizer's segments
//! in one of two ways, chosen by the tokenizer through [`Preservation`]:
//!
//! - [`Preservation::Merge`] replaces the segments covered by a match with a
//!   single verbatim token for the match.
//! - [`Preservation::Protect`] keeps the segments as they are and only marks
//!   the bytes inside a match as protected, so later filters skip them.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use regex::Regex;
//! use tokenkit::analysis::preserve::PreservedSpans;
//!
//! let patterns = vec![Arc::new(Regex::new(r"BRCA\d+").unwrap())];
//! let spans = PreservedSpans::find(&patterns, "Patient BRCA1 test");
//! assert_eq!(spans.as_slice(), &[8..13]);
//! ```

use std::ops::Range;
use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{Token, TokenType};

/// How a tokenizer's segments absorb preserved spans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preservation {
    /// Collapse covered segments into one verbatim token per span.
    #[default]
    Merge,
    /// Keep segment structure; exempt span bytes from later filters.
    Protect,
}

/// Non-overlapping preserve-pattern matches of one input, in text order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreservedSpans {
    spans: Vec<Range<usize>>,
}

impl PreservedSpans {
    /// Search `text` for matches of every pattern.
    ///
    /// Matches are ordered by start offset, then by pattern order. A match is
    /// kept only if it starts at or after the end of the last kept match, so
    /// on overlap the earliest match wins, and among matches starting at the
    /// same offset the first configured pattern wins. Empty matches are
    /// ignored.
    pub fn find(patterns: &[Arc<Regex>], text: &str) -> Self {
        let mut candidates: Vec<(usize, usize, usize)> = patterns
            .iter()
            .enumerate()
            .flat_map(|(index, pattern)| {
                pattern
                    .find_iter(text)
                    .filter(|m| !m.is_empty())
                    .map(move |m| (m.start(), index, m.end()))
            })
            .collect();
        candidates.sort_unstable();

        let mut spans: Vec<Range<usize>> = Vec::with_capacity(candidates.len());
        for (start, _, end) in candidates {
            if spans.last().is_none_or(|last| start >= last.end) {
                spans.push(start..end);
            }
        }

        PreservedSpans { spans }
    }

    /// Whether no pattern matched.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Number of kept spans.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// The kept spans as byte ranges of the searched text.
    pub fn as_slice(&self) -> &[Range<usize>] {
        &self.spans
    }

    /// Reconcile `tokens` with these spans according to `mode`.
    pub fn apply(&self, mode: Preservation, source: &str, tokens: Vec<Token>) -> Vec<Token> {
        if self.is_empty() {
            return tokens;
        }
        match mode {
            Preservation::Merge => self.merge(source, tokens),
            Preservation::Protect => self.protect(source, tokens),
        }
    }

    /// Collapse the tokens covered by each span into one verbatim token.
    ///
    /// Tokens must not overlap each other. A token only partly inside a span
    /// is cut at the span edges; the outside pieces are trimmed and kept
    /// unless nothing but whitespace remains. URL and email tokens are never
    /// cut: a span touching one grows to cover the whole link. Spans that no
    /// token touches are emitted too.
    pub fn merge(&self, source: &str, mut tokens: Vec<Token>) -> Vec<Token> {
        tokens.sort_by_key(|token| token.start_offset);

        let spans = &widen_to_links(&self.spans, &tokens);
        let mut merged = Vec::with_capacity(tokens.len() + spans.len());
        let mut next = 0;
        let mut covered = 0;

        for token in tokens {
            let (start, end) = (token.start_offset, token.end_offset);

            while next < spans.len() && spans[next].end <= start {
                merged.push(Token::preserved(source, spans[next].clone(), 0));
                covered = spans[next].end;
                next += 1;
            }

            let mut cursor = start.max(covered);
            let touched = cursor > start || (next < spans.len() && spans[next].start < end);
            if !touched {
                merged.push(token);
                continue;
            }

            while next < spans.len() && spans[next].start < end {
                let span = spans[next].clone();
                if span.start > cursor {
                    push_piece(&mut merged, source, cursor..span.start);
                }
                cursor = cursor.max(span.end);
                covered = span.end;
                merged.push(Token::preserved(source, span, 0));
                next += 1;
            }
            if cursor < end {
                push_piece(&mut merged, source, cursor..end);
            }
        }

        merged.extend(
            spans[next..]
                .iter()
                .map(|span| Token::preserved(source, span.clone(), 0)),
        );
        merged
    }

    /// Mark the bytes of each token that fall inside a span as protected.
    ///
    /// Only tokens whose text is still the verbatim slice of `source` at
    /// their offsets can be protected; others pass through unchanged.
    pub fn protect(&self, source: &str, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .map(|mut token| {
                let (start, end) = (token.start_offset, token.end_offset);
                if source.get(start..end) != Some(token.text.as_str()) {
                    return token;
                }

                let first = self.spans.partition_point(|span| span.end <= start);
                token.protected = self.spans[first..]
                    .iter()
                    .take_while(|span| span.start < end)
                    .map(|span| span.start.max(start) - start..span.end.min(end) - start)
                    .collect();
                token
            })
            .collect()
    }
}

/// Grow each span to the union with every link token it overlaps, then
/// coalesce spans that now overlap.
fn widen_to_links(spans: &[Range<usize>], tokens: &[Token]) -> Vec<Range<usize>> {
    let links: Vec<Range<usize>> = tokens
        .iter()
        .filter(|token| matches!(token.token_type, TokenType::Url | TokenType::Email))
        .map(|token| token.start_offset..token.end_offset)
        .collect();
    if links.is_empty() {
        return spans.to_vec();
    }

    let mut widened: Vec<Range<usize>> = Vec::with_capacity(spans.len());
    for span in spans {
        let mut span = span.clone();
        for link in &links {
            if link.start < span.end && span.start < link.end {
                span.start = span.start.min(link.start);
                span.end = span.end.max(link.end);
            }
        }
        match widened.last_mut() {
            Some(last) if span.start < last.end => {
                last.start = last.start.min(span.start);
                last.end = last.end.max(span.end);
            }
            _ => widened.push(span),
        }
    }
    widened
}

fn push_piece(tokens: &mut Vec<Token>, source: &str, range: Range<usize>) {
    let piece = &source[range.clone()];
    let trimmed = piece.trim();
    if trimmed.is_empty() {
        return;
    }
    let start = range.start + (piece.len() - piece.trim_start().len());
    tokens.push(Token::from_span(source, start..start + trimmed.len(), 0));
}
