use crate::cue::error::{CueError, CueResult};
use crate::cue::models::Statement;
use std::str::Chars;

/// Quote-aware tokenizer over a cuesheet character stream.
///
/// Words end at whitespace or an end-of-line; a double quote toggles an
/// escaped state in which whitespace no longer delimits. Lines end at CR, LF,
/// or CRLF, each counted once. A byte-order mark on the very first character
/// is stripped before tokenization begins.
pub struct Tokenizer<'a> {
    chars: Chars<'a>,
    /// Previously read character, kept for CRLF detection.
    last: Option<char>,
    buffer: String,
    line: u64,
    eof: bool,
    eol: bool,
    eow: bool,
    escaped: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        Self {
            chars: source.chars(),
            last: None,
            buffer: String::with_capacity(Statement::LINE_WIDTH),
            line: 1,
            eof: false,
            eol: false,
            eow: false,
            escaped: false,
        }
    }

    /// Current line number, starting at 1.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Whether the end of the stream has been reached.
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Whether the last read stopped at an end-of-line.
    pub fn is_eol(&self) -> bool {
        self.eol
    }

    /// Reads the next word, or `None` once the stream is exhausted.
    pub fn read_word(&mut self) -> CueResult<Option<String>> {
        self.read_item(true)
    }

    /// Reads the remainder of the current line, or `None` once the stream is
    /// exhausted.
    pub fn read_line(&mut self) -> CueResult<Option<String>> {
        self.read_item(false)
    }

    fn read_item(&mut self, word: bool) -> CueResult<Option<String>> {
        if self.eof {
            return Ok(None);
        }
        self.buffer.clear();
        loop {
            if self.eol {
                self.line = self.line.saturating_add(1);
                self.eol = false;
            }
            let current = self.chars.next();
            let previous = self.last;
            self.last = current;
            match current {
                Some('"') => {
                    self.eow = false;
                    self.escaped = !self.escaped;
                }
                Some(' ' | '\t') if !self.escaped => {
                    if self.eow {
                        continue;
                    }
                    self.eow = true;
                    if word {
                        return Ok(Some(self.buffer.clone()));
                    }
                }
                // The LF of a CRLF; the CR already ended the line.
                Some('\n') if previous == Some('\r') => continue,
                Some('\n' | '\r') => return self.flush_line_end().map(Some),
                None => {
                    self.eof = true;
                    return self.flush_line_end().map(Some);
                }
                Some(_) => self.eow = false,
            }
            if let Some(current) = current {
                self.buffer.push(current);
            }
        }
    }

    fn flush_line_end(&mut self) -> CueResult<String> {
        self.eol = true;
        self.eow = true;
        if self.escaped {
            return Err(CueError::Misquote(self.line));
        }
        Ok(self.buffer.clone())
    }
}
