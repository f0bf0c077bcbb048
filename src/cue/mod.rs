use crate::cue::error::{CueError, CueResult};
use crate::cue::models::CueSheet;
use crate::cue::parser::CueParser;
use crate::text::TextFile;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::Path;

pub mod error;
pub mod frame;
pub mod models;
pub mod parser;
pub mod tokenizer;
pub mod validator;

lazy_static! {
    /// Enclosed in double quotes.
    static ref REGEX_ENCLOSED: Regex = Regex::new(r#"^".*"$"#).unwrap();
    /// No whitespace nor double quotes.
    static ref REGEX_UNQUOTED: Regex = Regex::new(r#"^[^"\s]*$"#).unwrap();
}

/// Returns whether the given string either needs no quoting or is already
/// quoted.
pub fn check_quote(string: &str) -> bool {
    REGEX_ENCLOSED.is_match(string) || REGEX_UNQUOTED.is_match(string)
}

/// Removes one quotation mark from each end of the given string, if enclosed.
pub fn ensure_no_quote(string: &str) -> &str {
    if REGEX_ENCLOSED.is_match(string) {
        &string[1..string.len() - 1]
    } else {
        string
    }
}

/// Encloses the given string in quotation marks, if not already enclosed.
pub fn ensure_quote(string: &str) -> String {
    if REGEX_ENCLOSED.is_match(string) {
        string.to_string()
    } else {
        format!("\"{string}\"")
    }
}

/// Parses a cuesheet from the given source text.
///
/// Fails on the first lexical or syntactic error; use [`CueParser`] directly
/// to also recover the partially built sheet.
pub fn parse(source: &str) -> CueResult<CueSheet> {
    finish(CueParser::new(source).parse())
}

/// Parses a cuesheet from the given file, tagging the sheet with the file's
/// metadata and detected line-ending style.
pub fn parse_file(path: impl AsRef<Path>) -> CueResult<CueSheet> {
    let text = fs::read_to_string(&path)?;
    finish(CueParser::with_file(&text, TextFile::new(path.as_ref())).parse())
}

fn finish((sheet, error): (CueSheet, Option<CueError>)) -> CueResult<CueSheet> {
    match error {
        Some(error) => Err(error),
        None => Ok(sheet),
    }
}

/// Writes the given cuesheet with the given writer, preserving its detected
/// line-ending style.
pub fn write(sheet: &CueSheet, writer: &mut impl Write) -> CueResult<()> {
    writer.write_all(sheet.render().as_bytes())?;
    Ok(())
}

/// Writes the given cuesheet back to the file it was read from. Does nothing
/// for sheets without file metadata.
pub fn write_file(sheet: &CueSheet) -> CueResult<()> {
    let Some(file) = &sheet.file else {
        return Ok(());
    };
    let mut out = fs::File::create(file.path())?;
    write(sheet, &mut out)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::cue::models::ToStatements;
    use crate::cue::validator::validate;
    use crate::text::LineEnding;

    const ALBUM: &str = "REM ripped with care\n\
                         CATALOG 1234567890123\n\
                         PERFORMER \"Some Band\"\n\
                         TITLE \"Some Album\"\n\
                         FILE \"album.bin\" BINARY\n\
                         \x20 TRACK 01 AUDIO\n\
                         \x20   TITLE \"Opener\"\n\
                         \x20   INDEX 01 00:00:00\n\
                         \x20 TRACK 02 AUDIO\n\
                         \x20   TITLE \"Closer\"\n\
                         \x20   INDEX 00 03:58:12\n\
                         \x20   INDEX 01 04:00:00\n";

    #[test]
    fn quote_helpers_round_each_other_out() {
        assert_eq!(ensure_quote("Some Band"), "\"Some Band\"");
        assert_eq!(ensure_quote("\"Some Band\""), "\"Some Band\"");
        assert_eq!(ensure_no_quote("\"Some Band\""), "Some Band");
        assert_eq!(ensure_no_quote("Plain"), "Plain");
        assert!(check_quote("\"Some Band\""));
        assert!(check_quote("Plain"));
        assert!(!check_quote("Some Band"));
        assert!(!check_quote("\"dangling"));
    }

    #[test]
    fn a_realistic_album_parses_validates_and_round_trips() {
        let sheet = parse(ALBUM).unwrap();
        assert!(validate(&sheet.session).is_empty());
        let rendered = sheet.session.render(LineEnding::Lf);
        assert_eq!(rendered, ALBUM);
        // Canonical output is stable under another parse/render cycle.
        let again = parse(&rendered).unwrap();
        assert_eq!(again.session.render(LineEnding::Lf), rendered);
    }

    #[test]
    fn minimal_input_round_trips_to_canonical_indentation() {
        let sheet = parse("TRACK 01 AUDIO\n  INDEX 01 00:00:00\n").unwrap();
        assert_eq!(
            sheet.session.render(LineEnding::Lf),
            "  TRACK 01 AUDIO\n    INDEX 01 00:00:00\n"
        );
    }

    #[test]
    fn custom_statements_round_trip_verbatim() {
        let sheet = parse("TRACK 01 AUDIO\nFOO bar baz\n  INDEX 01 00:00:00\n").unwrap();
        let rendered = sheet.session.render(LineEnding::Lf);
        assert!(rendered.contains("FOO bar baz\n"));
    }

    #[test]
    fn parse_fails_on_the_first_error() {
        assert!(parse("TRACK 01 AUDIO\n  INDEX one 00:00:00\n").is_err());
    }

    #[test]
    fn file_round_trip_preserves_the_line_ending_style() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("album.cue");
        fs::write(&path, "TRACK 01 AUDIO\r\n  INDEX 01 00:00:00\r\n").unwrap();
        let sheet = parse_file(&path).unwrap();
        assert_eq!(
            sheet.file.as_ref().and_then(|file| file.line_ending()),
            Some(LineEnding::CrLf)
        );
        write_file(&sheet).unwrap();
        let rewritten = fs::read_to_string(&path).unwrap();
        assert_eq!(rewritten, "  TRACK 01 AUDIO\r\n    INDEX 01 00:00:00\r\n");
    }

    #[test]
    fn write_renders_into_any_sink() {
        let sheet = parse("TRACK 01 AUDIO\n  INDEX 01 00:00:00\n").unwrap();
        let mut sink = Vec::new();
        write(&sheet, &mut sink).unwrap();
        assert!(!sink.is_empty());
    }
}
