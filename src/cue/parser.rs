use crate::cue::ensure_no_quote;
use crate::cue::error::{CueError, CueResult};
use crate::cue::frame;
use crate::cue::models::{CueSheet, Index, Session, Track};
use crate::cue::tokenizer::Tokenizer;
use crate::text::{LineEnding, TextFile};

/// Nesting context of the statement being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Session,
    Track,
    Index,
}

/// Streaming cuesheet parser.
///
/// Drives the [`Tokenizer`] to exhaustion, dispatching each record's first
/// word against the command vocabulary and mutating the session under
/// construction. Parsing is fail-fast: the first error stops it, but the
/// partially built sheet is still handed back.
pub struct CueParser<'a> {
    source: &'a str,
    tokenizer: Tokenizer<'a>,
    sheet: CueSheet,
    mode: Mode,
    /// FILE path and type carried until the next INDEX consumes them.
    pending_file: Option<(String, String)>,
}

impl<'a> CueParser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokenizer: Tokenizer::new(source),
            sheet: CueSheet::new(Session::new()),
            mode: Mode::Session,
            pending_file: None,
        }
    }

    /// Parses a source that was read from a file, tagging the sheet with its
    /// metadata so the original line-ending style can be reproduced.
    pub fn with_file(source: &'a str, file: TextFile) -> Self {
        Self {
            source,
            tokenizer: Tokenizer::new(source),
            sheet: CueSheet::with_file(Session::new(), file),
            mode: Mode::Session,
            pending_file: None,
        }
    }

    /// Consumes the whole stream and returns the built sheet, along with the
    /// error that stopped parsing, if any.
    pub fn parse(mut self) -> (CueSheet, Option<CueError>) {
        let result = self.run();
        (self.sheet, result.err())
    }

    fn run(&mut self) -> CueResult<()> {
        self.detect_line_ending();
        while let Some(word) = self.tokenizer.read_word()? {
            if word.is_empty() {
                continue;
            } else if word.eq_ignore_ascii_case("CATALOG") {
                self.parse_catalog()?;
            } else if word.eq_ignore_ascii_case("CDTEXTFILE") {
                self.parse_cd_text_file()?;
            } else if word.eq_ignore_ascii_case("FILE") {
                self.parse_file()?;
            } else if word.eq_ignore_ascii_case("FLAGS") {
                self.parse_flags(&word)?;
            } else if word.eq_ignore_ascii_case("INDEX") {
                self.parse_index(&word)?;
            } else if word.eq_ignore_ascii_case("ISRC") {
                self.parse_isrc(&word)?;
            } else if word.eq_ignore_ascii_case("PERFORMER") {
                self.parse_performer(&word)?;
            } else if word.eq_ignore_ascii_case("POSTGAP") {
                self.parse_postgap(&word)?;
            } else if word.eq_ignore_ascii_case("PREGAP") {
                self.parse_pregap(&word)?;
            } else if word.eq_ignore_ascii_case("REM") {
                self.parse_rem(&word)?;
            } else if word.eq_ignore_ascii_case("SONGWRITER") {
                self.parse_songwriter(&word)?;
            } else if word.eq_ignore_ascii_case("TITLE") {
                self.parse_title(&word)?;
            } else if word.eq_ignore_ascii_case("TRACK") {
                self.parse_track()?;
            } else {
                self.parse_custom(word)?;
            }
        }
        Ok(())
    }

    /// Fills in the source line-ending style before any token is consumed.
    fn detect_line_ending(&mut self) {
        if let Some(file) = self.sheet.file.as_mut() {
            if !file.has_line_ending() {
                if let Some(ending) = LineEnding::detect(self.source) {
                    file.set_line_ending(ending);
                }
            }
        }
    }

    fn parse_catalog(&mut self) -> CueResult<()> {
        if self.sheet.session.catalog.is_some() {
            return Err(CueError::CatalogAgain(self.tokenizer.line()));
        }
        self.sheet.session.catalog = self.tokenizer.read_word()?;
        Ok(())
    }

    fn parse_cd_text_file(&mut self) -> CueResult<()> {
        self.sheet.session.cd_text_file = self.read_word_unquoted()?;
        Ok(())
    }

    fn parse_file(&mut self) -> CueResult<()> {
        let path = self.read_word_unquoted()?;
        let file_type = self.tokenizer.read_word()?;
        self.pending_file = match (path, file_type) {
            (Some(path), Some(file_type)) => Some((path, file_type)),
            _ => None,
        };
        Ok(())
    }

    fn parse_flags(&mut self, command: &str) -> CueResult<()> {
        match self.mode {
            Mode::Track => {
                let flags = self
                    .flush_line()?
                    .map(|line| line.split_whitespace().map(str::to_string).collect())
                    .unwrap_or_default();
                self.current_track(command)?.flags = flags;
                Ok(())
            }
            Mode::Session | Mode::Index => Err(self.command_unexpected(command)),
        }
    }

    fn parse_index(&mut self, command: &str) -> CueResult<()> {
        let number = self.read_number()?;
        let frame = self.read_time_code()?;
        let mut index = Index::new(number, frame);
        if let Some((path, file_type)) = self.pending_file.take() {
            index.set_file(path, file_type);
        }
        self.current_track(command)?.add_index(index);
        self.mode = Mode::Index;
        Ok(())
    }

    fn parse_isrc(&mut self, command: &str) -> CueResult<()> {
        match self.mode {
            Mode::Track => {
                let isrc = self.tokenizer.read_word()?;
                self.current_track(command)?.isrc = isrc;
                Ok(())
            }
            Mode::Session | Mode::Index => Err(self.command_unexpected(command)),
        }
    }

    fn parse_performer(&mut self, command: &str) -> CueResult<()> {
        let performer = self.read_word_unquoted()?;
        match self.mode {
            Mode::Session => self.sheet.session.performer = performer,
            Mode::Track | Mode::Index => self.current_track(command)?.performer = performer,
        }
        Ok(())
    }

    fn parse_postgap(&mut self, command: &str) -> CueResult<()> {
        match self.mode {
            Mode::Index => {
                let postgap = self.read_time_code()?;
                self.current_track(command)?.postgap = Some(postgap);
                Ok(())
            }
            Mode::Session | Mode::Track => Err(self.command_unexpected(command)),
        }
    }

    fn parse_pregap(&mut self, command: &str) -> CueResult<()> {
        match self.mode {
            Mode::Track => {
                let pregap = self.read_time_code()?;
                self.current_track(command)?.pregap = Some(pregap);
                Ok(())
            }
            Mode::Session | Mode::Index => Err(self.command_unexpected(command)),
        }
    }

    fn parse_rem(&mut self, command: &str) -> CueResult<()> {
        let remark = self.flush_line()?.unwrap_or_default();
        match self.mode {
            Mode::Session => self.sheet.session.add_remark(remark),
            Mode::Track => self.current_track(command)?.add_remark(remark),
            Mode::Index => self.current_index(command)?.add_remark(remark),
        }
        Ok(())
    }

    fn parse_songwriter(&mut self, command: &str) -> CueResult<()> {
        let songwriter = self.read_word_unquoted()?;
        match self.mode {
            Mode::Session => self.sheet.session.songwriter = songwriter,
            Mode::Track | Mode::Index => self.current_track(command)?.songwriter = songwriter,
        }
        Ok(())
    }

    fn parse_title(&mut self, command: &str) -> CueResult<()> {
        let title = self.read_word_unquoted()?;
        match self.mode {
            Mode::Session => self.sheet.session.title = title,
            Mode::Track | Mode::Index => self.current_track(command)?.title = title,
        }
        Ok(())
    }

    fn parse_track(&mut self) -> CueResult<()> {
        let number = self.read_number()?;
        let track_type = self.tokenizer.read_word()?;
        self.sheet.session.add_track(Track::new(number, track_type));
        self.mode = Mode::Track;
        Ok(())
    }

    /// Stores an unrecognized command verbatim on the current mode's target.
    fn parse_custom(&mut self, command: String) -> CueResult<()> {
        let argument = self.flush_line()?.unwrap_or_default();
        match self.mode {
            Mode::Session => self.sheet.session.set_custom(command, argument),
            Mode::Track => {
                let track = self.current_track(&command)?;
                track.set_custom(command, argument);
            }
            Mode::Index => {
                let index = self.current_index(&command)?;
                index.set_custom(command, argument);
            }
        }
        Ok(())
    }

    /// The remainder of the current line, unless the last word already ended
    /// it.
    fn flush_line(&mut self) -> CueResult<Option<String>> {
        if self.tokenizer.is_eol() {
            Ok(None)
        } else {
            self.tokenizer.read_line()
        }
    }

    fn read_word_unquoted(&mut self) -> CueResult<Option<String>> {
        Ok(self
            .tokenizer
            .read_word()?
            .map(|word| ensure_no_quote(&word).to_string()))
    }

    fn read_number(&mut self) -> CueResult<i32> {
        let line = self.tokenizer.line();
        let word = self.tokenizer.read_word()?.unwrap_or_default();
        word.parse::<i32>().map_err(|_| CueError::NumberMisformat {
            line,
            text: word.clone(),
        })
    }

    fn read_time_code(&mut self) -> CueResult<u32> {
        let word = self.tokenizer.read_word()?.unwrap_or_default();
        frame::parse_time_code(&word)
    }

    fn current_track(&mut self, command: &str) -> CueResult<&mut Track> {
        let line = self.tokenizer.line();
        self.sheet
            .session
            .last_track_mut()
            .ok_or_else(|| CueError::CommandUnexpected {
                line,
                command: command.to_string(),
            })
    }

    fn current_index(&mut self, command: &str) -> CueResult<&mut Index> {
        let line = self.tokenizer.line();
        self.sheet
            .session
            .last_track_mut()
            .and_then(Track::last_index_mut)
            .ok_or_else(|| CueError::CommandUnexpected {
                line,
                command: command.to_string(),
            })
    }

    fn command_unexpected(&self, command: &str) -> CueError {
        CueError::CommandUnexpected {
            line: self.tokenizer.line(),
            command: command.to_string(),
        }
    }
}
