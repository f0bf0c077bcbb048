use crate::cue::error::{CueError, CueResult};

/// Number of frames per second on a CDDA disc.
pub const FPS: u32 = 75;

/// Number of frames per minute.
pub const FPM: u32 = FPS * 60;

/// Parses the given `MM:SS:FF` time code to an absolute frame number.
///
/// The time code must be exactly eight characters: two-digit zero-padded
/// fields separated by `:`.
pub fn parse_time_code(time_code: &str) -> CueResult<u32> {
    let bytes = time_code.as_bytes();
    if bytes.len() != 8 || !time_code.is_ascii() || bytes[2] != b':' || bytes[5] != b':' {
        return Err(CueError::TimeCodeMisformat(time_code.to_string()));
    }
    let field = |text: &str| {
        text.parse::<u32>()
            .map_err(|_| CueError::TimeCodeMisformat(time_code.to_string()))
    };
    Ok(FPM * field(&time_code[0..2])? + FPS * field(&time_code[3..5])? + field(&time_code[6..8])?)
}

/// Formats the given frame number to an `MM:SS:FF` time code.
pub fn to_time_code(frame: u32) -> String {
    let minutes = frame / FPM;
    let seconds = frame % FPM / FPS;
    let frames = frame % FPS;
    format!("{minutes:02}:{seconds:02}:{frames:02}")
}

/// Converts the given frame number to time in seconds.
pub fn to_seconds(frame: u32) -> f32 {
    (frame / FPS) as f32 + (frame % FPS) as f32 / FPS as f32
}
