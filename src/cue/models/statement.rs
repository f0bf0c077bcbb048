use std::fmt;

/// One level of statement indentation.
pub const INDENT: &str = "  ";

/// Two levels of statement indentation.
pub const INDENT_2: &str = "    ";

/// A single rendered cuesheet line: an ordered list of argument tokens.
///
/// Arguments may be absent; rendering joins the present ones with single
/// spaces. Indentation is carried in the first argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement {
    arguments: Vec<Option<String>>,
}

impl Statement {
    /// Length of the longest fixed-width statement: a SONGWRITER command with
    /// an 80-character quoted argument. FILE and REM statements can run
    /// longer.
    pub const LINE_WIDTH: usize = 10 + 80 + 2 + 1;

    pub fn new(arguments: Vec<Option<String>>) -> Self {
        Self { arguments }
    }

    pub fn arguments(&self) -> &[Option<String>] {
        &self.arguments
    }

    pub fn push(&mut self, argument: impl Into<String>) {
        self.arguments.push(Some(argument.into()));
    }

    pub fn push_opt(&mut self, argument: Option<String>) {
        self.arguments.push(argument);
    }

    pub fn last_argument(&self) -> Option<&str> {
        self.arguments.last().and_then(|argument| argument.as_deref())
    }

    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }

    /// Renders the present arguments joined by single spaces.
    pub fn render(&self) -> String {
        self.arguments
            .iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.render())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn render_joins_arguments_with_single_spaces() {
        let statement = Statement::new(vec![
            Some("TRACK".to_string()),
            Some("01".to_string()),
            Some("AUDIO".to_string()),
        ]);
        assert_eq!(statement.render(), "TRACK 01 AUDIO");
    }

    #[test]
    fn render_skips_absent_arguments_without_extra_spaces() {
        let statement = Statement::new(vec![
            Some("TRACK".to_string()),
            Some("01".to_string()),
            None,
        ]);
        assert_eq!(statement.render(), "TRACK 01");
        assert_eq!(Statement::new(vec![Some("REM".to_string()), None]).render(), "REM");
    }

    #[test]
    fn empty_statement_renders_empty() {
        assert_eq!(Statement::default().render(), "");
        assert!(!Statement::default().has_arguments());
    }
}
