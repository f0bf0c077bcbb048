use crate::cue::frame;
use crate::cue::models::{INDENT_2, Statement, ToStatements, custom_statement, remark_statement};

/// A numbered sub-position within a track, anchored to an absolute frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    pub number: i32,
    pub frame: u32,
    /// Path of a FILE statement emitted immediately before this index.
    pub file_path: Option<String>,
    pub file_type: Option<String>,
    pub remarks: Vec<String>,
    pub customs: Vec<(String, String)>,
}

impl Index {
    /// Maximum frame number in a CD, just short of 100 minutes.
    pub const MAX_FRAME: u32 = 449_999;

    /// Maximum index number in a track.
    pub const MAX_NUMBER: i32 = 99;

    /// Minimum index number in a track.
    pub const MIN_NUMBER: i32 = 0;

    /// Maximum number of indexes in a track.
    pub const MAX_COUNT: usize =
        (Self::MAX_NUMBER - Self::MIN_NUMBER + 1) as usize;

    pub fn new(number: i32, frame: u32) -> Self {
        Self {
            number,
            frame,
            ..Self::default()
        }
    }

    pub fn is_number_valid(number: i32) -> bool {
        (Self::MIN_NUMBER..=Self::MAX_NUMBER).contains(&number)
    }

    pub fn is_frame_valid(frame: u32) -> bool {
        frame <= Self::MAX_FRAME
    }

    pub fn set_file(&mut self, path: impl Into<String>, file_type: impl Into<String>) {
        self.file_path = Some(path.into());
        self.file_type = Some(file_type.into());
    }

    pub fn unset_file(&mut self) {
        self.file_path = None;
        self.file_type = None;
    }

    pub fn has_file(&self) -> bool {
        self.file_path.is_some() && self.file_type.is_some()
    }

    pub fn add_remark(&mut self, remark: impl Into<String>) {
        self.remarks.push(remark.into());
    }

    /// Sets a custom statement, replacing the value in place if the command
    /// already exists.
    pub fn set_custom(&mut self, command: impl Into<String>, argument: impl Into<String>) {
        set_custom(&mut self.customs, command.into(), argument.into());
    }

    pub fn custom(&self, command: &str) -> Option<&str> {
        get_custom(&self.customs, command)
    }
}

impl ToStatements for Index {
    fn to_statements(&self) -> Vec<Statement> {
        let mut out = vec![Statement::new(vec![
            Some(format!("{INDENT_2}INDEX")),
            Some(format!("{:02}", self.number)),
            Some(frame::to_time_code(self.frame)),
        ])];
        for remark in &self.remarks {
            out.push(remark_statement(INDENT_2, remark));
        }
        for (command, argument) in &self.customs {
            out.push(custom_statement(command, argument));
        }
        out
    }
}

/// Replaces in place to keep insertion order stable across updates.
pub(crate) fn set_custom(customs: &mut Vec<(String, String)>, command: String, argument: String) {
    match customs.iter_mut().find(|(existing, _)| *existing == command) {
        Some((_, value)) => *value = argument,
        None => customs.push((command, argument)),
    }
}

pub(crate) fn get_custom<'a>(customs: &'a [(String, String)], command: &str) -> Option<&'a str> {
    customs
        .iter()
        .find(|(existing, _)| existing == command)
        .map(|(_, argument)| argument.as_str())
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::text::LineEnding;

    #[test]
    fn number_and_frame_validity_ranges() {
        assert!(Index::is_number_valid(0));
        assert!(Index::is_number_valid(99));
        assert!(!Index::is_number_valid(-1));
        assert!(!Index::is_number_valid(100));
        assert!(Index::is_frame_valid(Index::MAX_FRAME));
        assert!(!Index::is_frame_valid(Index::MAX_FRAME + 1));
    }

    #[test]
    fn renders_number_and_time_code_indented() {
        let index = Index::new(1, 155);
        let statements = index.to_statements();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].render(), "    INDEX 01 00:02:05");
    }

    #[test]
    fn renders_remarks_and_customs_after_the_index_line() {
        let mut index = Index::new(0, 0);
        index.add_remark("subindex");
        index.set_custom("FOO", "bar baz");
        assert_eq!(
            index.render(LineEnding::Lf),
            "    INDEX 00 00:00:00\n    REM subindex\nFOO bar baz\n"
        );
    }

    #[test]
    fn set_custom_replaces_in_place() {
        let mut index = Index::new(1, 0);
        index.set_custom("FOO", "one");
        index.set_custom("BAR", "two");
        index.set_custom("FOO", "three");
        assert_eq!(index.custom("FOO"), Some("three"));
        assert_eq!(index.customs[0], ("FOO".to_string(), "three".to_string()));
        assert_eq!(index.customs[1], ("BAR".to_string(), "two".to_string()));
    }
}
