//! Background melody sequencing
//!
//! Pure note bookkeeping; whoever owns the timer (a `setInterval` on web)
//! asks for the next note every [`NOTE_INTERVAL_MS`].

/// A single melody note
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Frequency in Hz
    pub freq: f32,
    /// Length in seconds
    pub duration: f64,
}

/// Looping tune: C5 D5 E5 D5 C5 G4 A4 B4
pub const MELODY: [Note; 8] = [
    Note { freq: 523.25, duration: 0.4 },
    Note { freq: 587.33, duration: 0.4 },
    Note { freq: 659.25, duration: 0.4 },
    Note { freq: 587.33, duration: 0.4 },
    Note { freq: 523.25, duration: 0.4 },
    Note { freq: 392.00, duration: 0.4 },
    Note { freq: 440.00, duration: 0.4 },
    Note { freq: 493.88, duration: 0.4 },
];

/// Time between note starts
pub const NOTE_INTERVAL_MS: i32 = 450;

/// Cycles through a melody, one note per scheduled callback
#[derive(Debug, Clone)]
pub struct MusicSequencer {
    notes: &'static [Note],
    index: usize,
}

impl Default for MusicSequencer {
    fn default() -> Self {
        Self::new(&MELODY)
    }
}

impl MusicSequencer {
    pub fn new(notes: &'static [Note]) -> Self {
        Self { notes, index: 0 }
    }

    /// Next note to play, wrapping at the end of the melody
    pub fn next_note(&mut self) -> Option<Note> {
        let note = *self.notes.get(self.index % self.notes.len().max(1))?;
        self.index += 1;
        Some(note)
    }
}
