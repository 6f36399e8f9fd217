use serde::{Deserialize, Serialize};

/// One of the four input channels a note can come down on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    L1,
    L2,
    R1,
    R2,
}

impl Lane {
    /// Every lane, in layout order.
    pub const ALL: [Lane; 4] = [Lane::L1, Lane::L2, Lane::R1, Lane::R2];
}

/// A single expected player input.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Note {
    /// Which lane does this note come down on?
    pub lane: Lane,
}

/// The notes occurring at one rhythmic subdivision. Currently always a
/// single note.
pub type Beat = Vec<Note>;

/// A complete chart: metadata plus an ordered sequence of beats. The field
/// names and types match what the game parses from assets/charts.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Chart {
    /// The name of the chart, also used as its filename stem
    pub chart_name: String,

    /// The song file name in the assets/songs folder
    pub sound_file: String,

    /// How long a beat lasts, in seconds
    pub beat_duration_secs: f32,

    /// Seconds of lead-in before the first beat reaches the target line
    pub lead_time_secs: f32,

    /// Each beat is a list of notes to be played
    pub beats: Vec<Beat>,
}
