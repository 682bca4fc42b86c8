//! Comment scanning.
//!
//! Produces every comment in a PHP file together with the line it starts
//! on, without building anything beyond the lexer trivia.  Two strategies
//! exist and one is picked when the checker is constructed:
//!
//! - [`ScanStrategy::Tokenizer`] runs the `mago-syntax` parser and keeps
//!   the comment trivia (`//`, `#`, `/* */`, `/** */`).
//! - [`ScanStrategy::WholeFile`] hands the entire file over as a single
//!   pseudo-comment anchored at a caller-provided line.  The annotation
//!   grammar ignores comment markers, so annotations are still found; only
//!   line precision is lost.
//!
//! The tokenizer strategy degrades to the whole-file strategy for a file
//! whose parse panics.

use std::ops::Range;
use std::panic;

use bumpalo::Bump;
use mago_syntax::ast::TriviaKind;
use mago_syntax::parser::parse_file_content;
use serde::Deserialize;

use crate::types::ScannedComment;
use crate::util::count_newlines;

/// How comments are located in a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanStrategy {
    /// Lex the file and keep comment tokens.
    #[default]
    Tokenizer,
    /// Treat the whole file as one comment.
    WholeFile,
}

/// Scan `content` for comments.
///
/// `anchor_line` is the line reported for the pseudo-comment of the
/// whole-file strategy (normally the enclosing class's start line).
pub fn scan_comments(content: &str, strategy: ScanStrategy, anchor_line: u32) -> Comments<'_> {
    match strategy {
        ScanStrategy::Tokenizer => from_spans(content, comment_spans(content), anchor_line),
        ScanStrategy::WholeFile => Comments {
            content,
            state: State::Whole(Some(anchor_line)),
        },
    }
}

/// Build the comment sequence from tokenizer output.  `None` (the
/// tokenizer failed) degrades to the whole-file pseudo-comment.
fn from_spans(content: &str, spans: Option<Vec<Range<usize>>>, anchor_line: u32) -> Comments<'_> {
    let state = match spans {
        Some(spans) => State::Spans {
            spans: spans.into_iter(),
            cursor: 0,
            line: 1,
        },
        None => {
            tracing::warn!("comment tokenizer failed; scanning the whole file instead");
            State::Whole(Some(anchor_line))
        }
    };

    Comments { content, state }
}

/// Lex `content` and collect the byte ranges of its comments, in source
/// order.  `None` when the parser panicked.
fn comment_spans(content: &str) -> Option<Vec<Range<usize>>> {
    // mago-syntax can hit `unreachable!()` on some malformed input
    // (unterminated heredocs and the like).
    let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        let arena = Bump::new();
        let file_id = mago_database::file::FileId::new("input.php");
        let program = parse_file_content(&arena, file_id, content);

        program
            .trivia
            .as_slice()
            .iter()
            .filter(|t| is_comment(&t.kind))
            .map(|t| t.span.start.offset as usize..t.span.end.offset as usize)
            .collect::<Vec<_>>()
    }));

    result.ok()
}

fn is_comment(kind: &TriviaKind) -> bool {
    match kind {
        TriviaKind::SingleLineComment
        | TriviaKind::MultiLineComment
        | TriviaKind::HashComment
        | TriviaKind::DocBlockComment => true,
        TriviaKind::WhiteSpace => false,
    }
}

enum State {
    Spans {
        spans: std::vec::IntoIter<Range<usize>>,
        /// Byte offset up to which newlines have been counted.
        cursor: usize,
        /// Line number at `cursor`.
        line: u32,
    },
    Whole(Option<u32>),
}

/// Lazy, single-pass sequence of the comments in one file.
///
/// Line numbers are computed incrementally as the sequence is consumed.
pub struct Comments<'a> {
    content: &'a str,
    state: State,
}

impl<'a> Iterator for Comments<'a> {
    type Item = ScannedComment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            State::Whole(anchor) => {
                let line = anchor.take()?;
                Some(ScannedComment {
                    text: self.content,
                    line,
                })
            }
            State::Spans {
                spans,
                cursor,
                line,
            } => {
                for range in spans.by_ref() {
                    if range.start < *cursor {
                        continue;
                    }
                    let Some(text) = self.content.get(range.clone()) else {
                        continue;
                    };
                    *line += count_newlines(&self.content.as_bytes()[*cursor..range.start]);
                    *cursor = range.start;
                    return Some(ScannedComment { text, line: *line });
                }
                None
            }
        }
    }
}
