use crate::cue::models::{Session, ToStatements, Track};
use crate::text::{LineEnding, TextFile};

/// A parsed cuesheet: one session plus optional source-file metadata.
///
/// Exactly one session per cuesheet; multi-session layouts are not supported.
#[derive(Debug, Clone, Default)]
pub struct CueSheet {
    pub session: Session,
    /// Metadata of the text file this sheet was read from, if any.
    pub file: Option<TextFile>,
}

impl CueSheet {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            file: None,
        }
    }

    pub fn with_file(session: Session, file: TextFile) -> Self {
        Self {
            session,
            file: Some(file),
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.session.tracks
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// Detected line ending of the source file, or the platform default.
    pub fn line_ending(&self) -> LineEnding {
        self.file
            .as_ref()
            .and_then(TextFile::line_ending)
            .unwrap_or_else(LineEnding::system)
    }

    /// Renders the whole sheet with its detected or default line ending.
    pub fn render(&self) -> String {
        self.session.render(self.line_ending())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::cue::models::Index;

    #[test]
    fn render_uses_the_detected_line_ending() {
        let mut track = Track::new(1, Some("AUDIO".to_string()));
        track.add_index(Index::new(1, 0));
        let mut session = Session::new();
        session.add_track(track);
        let mut file = TextFile::new("album.cue");
        file.set_line_ending(LineEnding::CrLf);
        let sheet = CueSheet::with_file(session, file);
        assert_eq!(sheet.render(), "  TRACK 01 AUDIO\r\n    INDEX 01 00:00:00\r\n");
    }

    #[test]
    fn render_falls_back_to_the_platform_line_ending() {
        let sheet = CueSheet::new(Session::new());
        assert_eq!(sheet.render(), "");
        assert_eq!(sheet.line_ending(), LineEnding::system());
    }
}
