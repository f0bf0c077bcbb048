use thiserror::Error;

/// Failures raised while lexing, parsing, or validating a cuesheet.
///
/// Every variant carries enough context to form a subject/problem/remedy
/// triple for user display; `Display` renders "subject: problem".
#[derive(Debug, Error)]
pub enum CueError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Line {0}: Quotation marks are unbalanced before the end of the line.")]
    Misquote(u64),

    #[error("Line {line}: `{command}` command is out of place.")]
    CommandUnexpected { line: u64, command: String },

    #[error("Line {line}: `{text}` is not a valid number.")]
    NumberMisformat { line: u64, text: String },

    #[error("`{0}` does not follow the `MM:SS:FF` time code template.")]
    TimeCodeMisformat(String),

    #[error("Line {0}: `CATALOG` is defined again when it has already been defined.")]
    CatalogAgain(u64),

    #[error("Session: The Media Catalog Number (MCN) is malformed.")]
    McnMisformat,

    #[error("Session: The session has no tracks.")]
    SessionEmpty,

    #[error("Session: The session has too many tracks.")]
    SessionOverflow,

    #[error("Track {track:02}: The International Standard Recording Code (ISRC) is malformed.")]
    IsrcMisformat { track: i32 },

    #[error("Track {track:02}: The track has no indexes.")]
    TrackEmpty { track: i32 },

    #[error("Track {track:02}: The track has too many indexes.")]
    TrackOverflow { track: i32 },

    #[error("Track {track:02}: The track number is out of range.")]
    TrackMisnumber { track: i32 },

    #[error("Track {track:02}: The track is out of place.")]
    TrackUnexpected { track: i32 },

    #[error("Track {track:02} Index {index:02}: The index number is out of range.")]
    IndexMisnumber { track: i32, index: i32 },

    #[error("Track {track:02} Index {index:02}: The index is out of place.")]
    IndexUnexpected { track: i32, index: i32 },

    #[error("Track {track:02} Index {index:02}: The frame number or time code is out of place.")]
    FrameUnexpected { track: i32, index: i32 },
}

impl CueError {
    /// The entity the problem is about, e.g. `"Track 02 Index 01"` or `"Line 7"`.
    pub fn subject(&self) -> String {
        match self {
            CueError::Io(_) => "Stream".to_string(),
            CueError::Misquote(line)
            | CueError::CommandUnexpected { line, .. }
            | CueError::NumberMisformat { line, .. }
            | CueError::CatalogAgain(line) => format!("Line {line}"),
            CueError::TimeCodeMisformat(text) => format!("`{text}`"),
            CueError::McnMisformat | CueError::SessionEmpty | CueError::SessionOverflow => {
                "Session".to_string()
            }
            CueError::IsrcMisformat { track }
            | CueError::TrackEmpty { track }
            | CueError::TrackOverflow { track }
            | CueError::TrackMisnumber { track }
            | CueError::TrackUnexpected { track } => format!("Track {track:02}"),
            CueError::IndexMisnumber { track, index }
            | CueError::IndexUnexpected { track, index }
            | CueError::FrameUnexpected { track, index } => {
                format!("Track {track:02} Index {index:02}")
            }
        }
    }

    /// What is wrong with the subject.
    pub fn problem(&self) -> String {
        match self {
            CueError::Io(source) => source.to_string(),
            CueError::Misquote(_) => {
                "Quotation marks are unbalanced before the end of the line.".to_string()
            }
            CueError::CommandUnexpected { command, .. } => {
                format!("`{command}` command is out of place.")
            }
            CueError::NumberMisformat { text, .. } => format!("`{text}` is not a valid number."),
            CueError::TimeCodeMisformat(_) => {
                "It does not follow the `MM:SS:FF` time code template.".to_string()
            }
            CueError::CatalogAgain(_) => {
                "`CATALOG` is defined again when it has already been defined.".to_string()
            }
            CueError::McnMisformat => "The Media Catalog Number (MCN) is malformed.".to_string(),
            CueError::SessionEmpty => "The session has no tracks.".to_string(),
            CueError::SessionOverflow => "The session has too many tracks.".to_string(),
            CueError::IsrcMisformat { .. } => {
                "The International Standard Recording Code (ISRC) is malformed.".to_string()
            }
            CueError::TrackEmpty { .. } => "The track has no indexes.".to_string(),
            CueError::TrackOverflow { .. } => "The track has too many indexes.".to_string(),
            CueError::TrackMisnumber { .. } => "The track number is out of range.".to_string(),
            CueError::TrackUnexpected { .. } => "The track is out of place.".to_string(),
            CueError::IndexMisnumber { .. } => "The index number is out of range.".to_string(),
            CueError::IndexUnexpected { .. } => "The index is out of place.".to_string(),
            CueError::FrameUnexpected { .. } => {
                "The frame number or time code is out of place.".to_string()
            }
        }
    }

    /// A suggested fix for the problem.
    pub fn remedy(&self) -> &'static str {
        match self {
            CueError::Io(_) => "Check the underlying file or stream.",
            CueError::Misquote(_) => "Pair up the quotation marks.",
            CueError::CommandUnexpected { .. } => {
                "Consult the cuesheet command rules for where it may appear."
            }
            CueError::NumberMisformat { .. } => "Correct it to an integer.",
            CueError::TimeCodeMisformat(_) => "Correct it to the `MM:SS:FF` template.",
            CueError::CatalogAgain(_) => "Erase excess `CATALOG` definitions.",
            CueError::McnMisformat => {
                "Correct the MCN to have thirteen alphanumeric characters."
            }
            CueError::SessionEmpty => "Add at least one track.",
            CueError::SessionOverflow => "Reduce the number of tracks to at most 99.",
            CueError::IsrcMisformat { .. } => {
                "Correct the ISRC to five alphanumeric characters followed by seven digits."
            }
            CueError::TrackEmpty { .. } => "Add at least one index.",
            CueError::TrackOverflow { .. } => "Reduce the number of indexes to at most 100.",
            CueError::TrackMisnumber { .. } => "Correct the track number to between 01 and 99.",
            CueError::TrackUnexpected { .. } => "Correct its placement or number.",
            CueError::IndexMisnumber { .. } => "Correct the index number to between 00 and 99.",
            CueError::IndexUnexpected { .. } => "Correct its placement or number.",
            CueError::FrameUnexpected { .. } => {
                "Correct it to follow after that of the previous index."
            }
        }
    }
}

pub type CueResult<T> = Result<T, CueError>;

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn display_is_subject_then_problem() {
        let error = CueError::IndexUnexpected { track: 2, index: 3 };
        assert_eq!(error.subject(), "Track 02 Index 03");
        assert_eq!(error.problem(), "The index is out of place.");
        assert_eq!(
            error.to_string(),
            format!("{}: {}", error.subject(), error.problem())
        );
    }

    #[test]
    fn line_subjects_carry_the_line_number() {
        assert_eq!(CueError::Misquote(7).subject(), "Line 7");
        assert_eq!(
            CueError::CommandUnexpected {
                line: 12,
                command: "FLAGS".to_string(),
            }
            .subject(),
            "Line 12"
        );
    }

    #[test]
    fn every_variant_suggests_a_remedy() {
        let errors = [
            CueError::Misquote(1),
            CueError::McnMisformat,
            CueError::SessionEmpty,
            CueError::TrackUnexpected { track: 1 },
            CueError::FrameUnexpected { track: 1, index: 1 },
        ];
        for error in errors {
            assert!(!error.remedy().is_empty());
        }
    }
}
