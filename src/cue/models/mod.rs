use crate::cue::ensure_quote;
use crate::text::LineEnding;

pub mod index;
pub mod session;
pub mod sheet;
pub mod statement;
pub mod track;

pub use index::Index;
pub use session::Session;
pub use sheet::CueSheet;
pub use statement::{INDENT, INDENT_2, Statement};
pub use track::Track;

/// Rendering to an ordered statement sequence, implemented by every layout
/// level of the model.
pub trait ToStatements {
    fn to_statements(&self) -> Vec<Statement>;

    /// Renders its statements joined by the given line ending, each followed
    /// by one terminator.
    fn render(&self, line_ending: LineEnding) -> String {
        let mut out = String::new();
        for statement in self.to_statements() {
            out.push_str(&statement.render());
            out.push_str(line_ending.as_str());
        }
        out
    }
}

/// A REM statement at the given indentation; a blank remark renders bare.
pub(crate) fn remark_statement(indent: &str, remark: &str) -> Statement {
    Statement::new(vec![
        Some(format!("{indent}REM")),
        (!remark.is_empty()).then(|| remark.to_string()),
    ])
}

/// An unrecognized command re-emitted verbatim; a blank argument renders bare.
pub(crate) fn custom_statement(command: &str, argument: &str) -> Statement {
    Statement::new(vec![
        Some(command.to_string()),
        (!argument.is_empty()).then(|| argument.to_string()),
    ])
}

/// A FILE statement with a quoted path and an optional type token.
pub(crate) fn file_statement(path: &str, file_type: Option<&str>) -> Statement {
    Statement::new(vec![
        Some("FILE".to_string()),
        Some(ensure_quote(path)),
        file_type.map(str::to_string),
    ])
}
