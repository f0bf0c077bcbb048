use crate::cue::ensure_quote;
use crate::cue::frame;
use crate::cue::models::index::{get_custom, set_custom};
use crate::cue::models::{
    INDENT, INDENT_2, Index, Statement, ToStatements, custom_statement, file_statement,
    remark_statement,
};

/// A numbered division of a session, subdivided into indexes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    pub number: i32,
    pub track_type: Option<String>,
    pub indexes: Vec<Index>,
    pub flags: Vec<String>,
    pub isrc: Option<String>,
    pub performer: Option<String>,
    pub songwriter: Option<String>,
    pub title: Option<String>,
    /// Pregap and postgap as frame counts.
    pub pregap: Option<u32>,
    pub postgap: Option<u32>,
    pub remarks: Vec<String>,
    pub customs: Vec<(String, String)>,
}

impl Track {
    /// Maximum track number in a CD.
    pub const MAX_NUMBER: i32 = 99;

    /// Minimum track number in a CD.
    pub const MIN_NUMBER: i32 = 1;

    /// Maximum number of tracks in a CD.
    pub const MAX_COUNT: usize =
        (Self::MAX_NUMBER - Self::MIN_NUMBER + 1) as usize;

    pub fn new(number: i32, track_type: Option<String>) -> Self {
        Self {
            number,
            track_type,
            ..Self::default()
        }
    }

    pub fn is_number_valid(number: i32) -> bool {
        (Self::MIN_NUMBER..=Self::MAX_NUMBER).contains(&number)
    }

    pub fn add_index(&mut self, index: Index) {
        self.indexes.push(index);
    }

    pub fn last_index(&self) -> Option<&Index> {
        self.indexes.last()
    }

    pub fn last_index_mut(&mut self) -> Option<&mut Index> {
        self.indexes.last_mut()
    }

    pub fn remove_last_index(&mut self) -> Option<Index> {
        self.indexes.pop()
    }

    pub fn has_indexes(&self) -> bool {
        !self.indexes.is_empty()
    }

    pub fn has_cd_text(&self) -> bool {
        self.isrc.is_some()
            || self.performer.is_some()
            || self.songwriter.is_some()
            || self.title.is_some()
    }

    pub fn clear_cd_text(&mut self) {
        self.isrc = None;
        self.performer = None;
        self.songwriter = None;
        self.title = None;
    }

    pub fn add_remark(&mut self, remark: impl Into<String>) {
        self.remarks.push(remark.into());
    }

    pub fn set_custom(&mut self, command: impl Into<String>, argument: impl Into<String>) {
        set_custom(&mut self.customs, command.into(), argument.into());
    }

    pub fn custom(&self, command: &str) -> Option<&str> {
        get_custom(&self.customs, command)
    }
}

impl ToStatements for Track {
    fn to_statements(&self) -> Vec<Statement> {
        let mut out = Vec::new();
        if let Some(first) = self.indexes.first() {
            if let Some(path) = &first.file_path {
                out.push(file_statement(path, first.file_type.as_deref()));
            }
        }
        out.push(Statement::new(vec![
            Some(format!("{INDENT}TRACK")),
            Some(format!("{:02}", self.number)),
            self.track_type.clone(),
        ]));
        if !self.flags.is_empty() {
            out.push(Statement::new(vec![
                Some(format!("{INDENT_2}FLAGS")),
                Some(self.flags.join(" ")),
            ]));
        }
        for remark in &self.remarks {
            out.push(remark_statement(INDENT_2, remark));
        }
        if let Some(isrc) = &self.isrc {
            out.push(Statement::new(vec![
                Some(format!("{INDENT_2}ISRC")),
                Some(isrc.clone()),
            ]));
        }
        if let Some(title) = &self.title {
            out.push(Statement::new(vec![
                Some(format!("{INDENT_2}TITLE")),
                Some(ensure_quote(title)),
            ]));
        }
        if let Some(performer) = &self.performer {
            out.push(Statement::new(vec![
                Some(format!("{INDENT_2}PERFORMER")),
                Some(ensure_quote(performer)),
            ]));
        }
        if let Some(songwriter) = &self.songwriter {
            out.push(Statement::new(vec![
                Some(format!("{INDENT_2}SONGWRITER")),
                Some(ensure_quote(songwriter)),
            ]));
        }
        for (command, argument) in &self.customs {
            out.push(custom_statement(command, argument));
        }
        if let Some(pregap) = self.pregap {
            out.push(Statement::new(vec![
                Some(format!("{INDENT_2}PREGAP")),
                Some(frame::to_time_code(pregap)),
            ]));
        }
        for (position, index) in self.indexes.iter().enumerate() {
            if position > 0 {
                if let Some(path) = &index.file_path {
                    out.push(file_statement(path, index.file_type.as_deref()));
                }
            }
            out.extend(index.to_statements());
        }
        if let Some(postgap) = self.postgap {
            out.push(Statement::new(vec![
                Some(format!("{INDENT_2}POSTGAP")),
                Some(frame::to_time_code(postgap)),
            ]));
        }
        out
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::text::LineEnding;

    fn audio_track(number: i32) -> Track {
        let mut track = Track::new(number, Some("AUDIO".to_string()));
        track.add_index(Index::new(1, 0));
        track
    }

    #[test]
    fn renders_the_track_line_zero_padded_with_type() {
        let track = audio_track(3);
        assert_eq!(track.to_statements()[0].render(), "  TRACK 03 AUDIO");
    }

    #[test]
    fn renders_a_file_line_before_the_first_index_with_a_path() {
        let mut track = Track::new(1, Some("AUDIO".to_string()));
        let mut index = Index::new(1, 0);
        index.set_file("album.bin", "BINARY");
        track.add_index(index);
        assert_eq!(
            track.render(LineEnding::Lf),
            "FILE \"album.bin\" BINARY\n  TRACK 01 AUDIO\n    INDEX 01 00:00:00\n"
        );
    }

    #[test]
    fn renders_another_file_line_before_a_later_index_with_a_path() {
        let mut track = audio_track(1);
        let mut second = Index::new(2, 300);
        second.set_file("side-b.bin", "BINARY");
        track.add_index(second);
        assert_eq!(
            track.render(LineEnding::Lf),
            "  TRACK 01 AUDIO\n    INDEX 01 00:00:00\n\
             FILE \"side-b.bin\" BINARY\n    INDEX 02 00:04:00\n"
        );
    }

    #[test]
    fn renders_cd_text_flags_and_gaps_in_order() {
        let mut track = audio_track(1);
        track.flags = vec!["DCP".to_string(), "PRE".to_string()];
        track.isrc = Some("ABCDE1234567".to_string());
        track.title = Some("Opener".to_string());
        track.performer = Some("Some Band".to_string());
        track.pregap = Some(150);
        track.postgap = Some(75);
        assert_eq!(
            track.render(LineEnding::Lf),
            "  TRACK 01 AUDIO\n    FLAGS DCP PRE\n    ISRC ABCDE1234567\n\
             \x20   TITLE \"Opener\"\n    PERFORMER \"Some Band\"\n\
             \x20   PREGAP 00:02:00\n    INDEX 01 00:00:00\n    POSTGAP 00:01:00\n"
        );
    }

    #[test]
    fn postgap_renders_its_own_value_not_the_pregap() {
        let mut track = audio_track(1);
        track.pregap = Some(150);
        track.postgap = Some(225);
        let rendered = track.render(LineEnding::Lf);
        assert!(rendered.contains("PREGAP 00:02:00"));
        assert!(rendered.contains("POSTGAP 00:03:00"));
    }

    #[test]
    fn track_without_type_renders_without_a_trailing_space() {
        let track = Track::new(2, None);
        assert_eq!(track.to_statements()[0].render(), "  TRACK 02");
    }
}
