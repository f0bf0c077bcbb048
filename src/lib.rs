//! Parses, validates, and re-serializes Compact Disc cuesheets.
//!
//! Raw text flows through the [`cue::tokenizer::Tokenizer`] and
//! [`CueParser`] into a [`CueSheet`]; [`validate`] reports every semantic
//! violation, and [`cue::models::ToStatements`] renders the model back to
//! grammar-correct text, preserving unknown commands and the original
//! line-ending style.

pub mod commands;
pub mod cue;
pub mod text;

pub use cue::error::{CueError, CueResult};
pub use cue::models::{CueSheet, Index, Session, Statement, ToStatements, Track};
pub use cue::parser::CueParser;
pub use cue::validator::validate;
pub use cue::{parse, parse_file, write, write_file};
pub use text::{LineEnding, TextFile};
