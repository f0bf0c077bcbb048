use crate::cue::error::CueError;
use crate::cue::models::{Index, Session, Track};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// International Standard Recording Code: five alphanumerics, seven digits.
    static ref REGEX_ISRC: Regex = Regex::new(r"^[[:alnum:]]{5}[[:digit:]]{7}$").unwrap();
    /// Media Catalog Number: thirteen alphanumerics.
    static ref REGEX_MCN: Regex = Regex::new(r"^[[:alnum:]]{13}$").unwrap();
}

/// Checks the given session exhaustively and returns every violation found.
///
/// Never short-circuits; callers decide which violations are fatal. The
/// previous track's final index is threaded into the next track's first
/// frame-ordering check.
pub fn validate(session: &Session) -> Vec<CueError> {
    let mut out = check_session(session);
    let mut last: Option<&Index> = None;
    for (position, track) in session.tracks.iter().enumerate() {
        out.extend(check_track(track, Some(position as i32 + 1)));
        out.extend(check_track_indexes(track, last));
        last = track.last_index().or(last);
    }
    out
}

/// Session-level checks: catalog format, emptiness, track count.
pub fn check_session(session: &Session) -> Vec<CueError> {
    let mut out = Vec::new();
    if let Some(catalog) = &session.catalog {
        if !REGEX_MCN.is_match(catalog) {
            out.push(CueError::McnMisformat);
        }
    }
    if session.tracks.is_empty() {
        out.push(CueError::SessionEmpty);
    } else if session.tracks.len() > Track::MAX_COUNT {
        out.push(CueError::SessionOverflow);
    }
    out
}

/// Track-level checks: numbering, ISRC format, emptiness, index count.
///
/// `expected` is the position-implied track number; a valid number that
/// differs from it is its own "unexpected" violation.
pub fn check_track(track: &Track, expected: Option<i32>) -> Vec<CueError> {
    let mut out = Vec::new();
    if !Track::is_number_valid(track.number) {
        out.push(CueError::TrackMisnumber {
            track: track.number,
        });
    } else if expected.is_some_and(|expected| track.number != expected) {
        out.push(CueError::TrackUnexpected {
            track: track.number,
        });
    }
    if let Some(isrc) = &track.isrc {
        if !REGEX_ISRC.is_match(isrc) {
            out.push(CueError::IsrcMisformat {
                track: track.number,
            });
        }
    }
    if track.indexes.is_empty() {
        out.push(CueError::TrackEmpty {
            track: track.number,
        });
    } else if track.indexes.len() > Index::MAX_COUNT {
        out.push(CueError::TrackOverflow {
            track: track.number,
        });
    }
    out
}

/// Index-sequence checks within one track.
///
/// The first index must be numbered 0 or 1; a lone index 0 is itself a
/// violation. Every later number must be exactly one more than the previous.
/// `last` is the index to check the first frame number against, usually the
/// final index of the previous track.
pub fn check_track_indexes<'a>(track: &'a Track, mut last: Option<&'a Index>) -> Vec<CueError> {
    let mut out = Vec::new();
    let Some(first) = track.indexes.first() else {
        return out;
    };
    let mut expected = 1;
    if first.number == 0 {
        expected = 0;
        if track.indexes.len() == 1 {
            out.push(CueError::IndexUnexpected {
                track: track.number,
                index: 0,
            });
        }
    }
    for index in &track.indexes {
        out.extend(check_index(track, index, last, expected));
        expected += 1;
        last = Some(index);
    }
    out
}

fn check_index(
    track: &Track,
    index: &Index,
    last: Option<&Index>,
    expected: i32,
) -> Vec<CueError> {
    let mut out = Vec::new();
    if !Index::is_number_valid(index.number) {
        out.push(CueError::IndexMisnumber {
            track: track.number,
            index: index.number,
        });
    } else if index.number != expected {
        out.push(CueError::IndexUnexpected {
            track: track.number,
            index: index.number,
        });
    }
    if last.is_some_and(|last| index.frame < last.frame) {
        out.push(CueError::FrameUnexpected {
            track: track.number,
            index: index.number,
        });
    }
    out
}
