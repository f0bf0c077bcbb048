use crate::cue::ensure_quote;
use crate::cue::models::index::{get_custom, set_custom};
use crate::cue::models::{
    Index, Statement, ToStatements, Track, custom_statement, remark_statement,
};

/// The single disc layout described by one cuesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Tracks in disc order.
    pub tracks: Vec<Track>,
    /// Media Catalog Number (MCN).
    pub catalog: Option<String>,
    pub cd_text_file: Option<String>,
    pub performer: Option<String>,
    pub songwriter: Option<String>,
    pub title: Option<String>,
    pub remarks: Vec<String>,
    pub customs: Vec<(String, String)>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn last_track(&self) -> Option<&Track> {
        self.tracks.last()
    }

    pub fn last_track_mut(&mut self) -> Option<&mut Track> {
        self.tracks.last_mut()
    }

    pub fn remove_last_track(&mut self) -> Option<Track> {
        self.tracks.pop()
    }

    /// Last index of the last track.
    pub fn last_index(&self) -> Option<&Index> {
        self.last_track().and_then(Track::last_index)
    }

    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    pub fn has_cd_text(&self) -> bool {
        self.cd_text_file.is_some()
            || self.performer.is_some()
            || self.songwriter.is_some()
            || self.title.is_some()
    }

    pub fn clear_cd_text(&mut self) {
        self.cd_text_file = None;
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

impl ToStatements for Session {
    fn to_statements(&self) -> Vec<Statement> {
        let mut out = Vec::new();
        for remark in &self.remarks {
            out.push(remark_statement("", remark));
        }
        if let Some(catalog) = &self.catalog {
            out.push(Statement::new(vec![
                Some("CATALOG".to_string()),
                Some(catalog.clone()),
            ]));
        }
        if let Some(cd_text_file) = &self.cd_text_file {
            out.push(Statement::new(vec![
                Some("CDTEXTFILE".to_string()),
                Some(ensure_quote(cd_text_file)),
            ]));
        }
        if let Some(performer) = &self.performer {
            out.push(Statement::new(vec![
                Some("PERFORMER".to_string()),
                Some(ensure_quote(performer)),
            ]));
        }
        if let Some(songwriter) = &self.songwriter {
            out.push(Statement::new(vec![
                Some("SONGWRITER".to_string()),
                Some(ensure_quote(songwriter)),
            ]));
        }
        if let Some(title) = &self.title {
            out.push(Statement::new(vec![
                Some("TITLE".to_string()),
                Some(ensure_quote(title)),
            ]));
        }
        for (command, argument) in &self.customs {
            out.push(custom_statement(command, argument));
        }
        for track in &self.tracks {
            out.extend(track.to_statements());
        }
        out
    }
}
