use std::fmt;
use std::path::{Path, PathBuf};

/// A line-ending style: CR ("Macintosh"), CRLF ("Windows"), or LF ("Unix").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Cr,
    CrLf,
    Lf,
}

impl LineEnding {
    /// First line ending found in the given text, if any.
    pub fn detect(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        while let Some(character) = chars.next() {
            match character {
                '\r' => {
                    return Some(if chars.next() == Some('\n') {
                        LineEnding::CrLf
                    } else {
                        LineEnding::Cr
                    });
                }
                '\n' => return Some(LineEnding::Lf),
                _ => {}
            }
        }
        None
    }

    /// Parses an abbreviated, long, or system name, case-insensitively.
    pub fn parse_name(name: &str) -> Option<Self> {
        let styles = [LineEnding::CrLf, LineEnding::Lf, LineEnding::Cr];
        styles.into_iter().find(|style| {
            name.eq_ignore_ascii_case(style.name())
                || name.eq_ignore_ascii_case(style.long_name())
                || name.eq_ignore_ascii_case(style.system_name())
        })
    }

    /// The line ending of the platform this binary was built for.
    pub fn system() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Cr => "\r",
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }

    /// Abbreviated name, e.g. "CRLF".
    pub fn name(&self) -> &'static str {
        match self {
            LineEnding::Cr => "CR",
            LineEnding::CrLf => "CRLF",
            LineEnding::Lf => "LF",
        }
    }

    /// Long name, e.g. "Carriage Return Line Feed".
    pub fn long_name(&self) -> &'static str {
        match self {
            LineEnding::Cr => "Carriage Return",
            LineEnding::CrLf => "Carriage Return Line Feed",
            LineEnding::Lf => "Line Feed",
        }
    }

    /// Conventional system name, e.g. "Windows".
    pub fn system_name(&self) -> &'static str {
        match self {
            LineEnding::Cr => "Macintosh",
            LineEnding::CrLf => "Windows",
            LineEnding::Lf => "Unix",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Passive metadata of the text file a cuesheet was read from.
#[derive(Debug, Clone)]
pub struct TextFile {
    path: PathBuf,
    charset: String,
    line_ending: Option<LineEnding>,
}

impl TextFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            charset: "UTF-8".to_string(),
            line_ending: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn line_ending(&self) -> Option<LineEnding> {
        self.line_ending
    }

    pub fn has_line_ending(&self) -> bool {
        self.line_ending.is_some()
    }

    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.line_ending = Some(line_ending);
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn detect_recognizes_all_three_styles() {
        assert_eq!(LineEnding::detect("a\r\nb"), Some(LineEnding::CrLf));
        assert_eq!(LineEnding::detect("a\nb"), Some(LineEnding::Lf));
        assert_eq!(LineEnding::detect("a\rb"), Some(LineEnding::Cr));
        assert_eq!(LineEnding::detect("no break"), None);
    }

    #[test]
    fn detect_stops_at_the_first_line_break() {
        assert_eq!(LineEnding::detect("a\nb\r\nc"), Some(LineEnding::Lf));
    }

    #[test]
    fn parse_name_accepts_all_name_forms() {
        assert_eq!(LineEnding::parse_name("crlf"), Some(LineEnding::CrLf));
        assert_eq!(LineEnding::parse_name("Windows"), Some(LineEnding::CrLf));
        assert_eq!(LineEnding::parse_name("line feed"), Some(LineEnding::Lf));
        assert_eq!(LineEnding::parse_name("unix"), Some(LineEnding::Lf));
        assert_eq!(LineEnding::parse_name("Macintosh"), Some(LineEnding::Cr));
        assert_eq!(LineEnding::parse_name("nope"), None);
    }

    #[test]
    fn text_file_starts_without_a_line_ending() {
        let mut file = TextFile::new("album.cue");
        assert_eq!(file.charset(), "UTF-8");
        assert!(!file.has_line_ending());
        file.set_line_ending(LineEnding::Cr);
        assert_eq!(file.line_ending(), Some(LineEnding::Cr));
    }
}
