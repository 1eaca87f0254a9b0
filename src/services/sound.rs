//! Reminder sound playback

use std::{io::Cursor, sync::Arc, thread};

use rodio::{Decoder, OutputStream, Sink};
use tracing::{debug, warn};

/// Something that can play the reminder sound without blocking the caller
pub trait SoundPlayer {
    /// Start playback and return immediately; failures are not reported
    fn play(&self);
}

/// Plays the sound asset through the default output device
#[derive(Debug, Clone)]
pub struct RodioPlayer {
    sound: Arc<[u8]>,
}

impl RodioPlayer {
    /// Create a player for an already validated sound asset
    pub fn new(sound: Arc<[u8]>) -> Self {
        Self { sound }
    }
}

impl SoundPlayer for RodioPlayer {
    fn play(&self) {
        let sound = Arc::clone(&self.sound);
        let spawned = thread::Builder::new()
            .name("reminder-sound".to_string())
            .spawn(move || play_blocking(sound));

        if let Err(e) = spawned {
            warn!("Failed to start sound playback thread: {}", e);
        }
    }
}

/// Decode and play on the current thread until the sound ends
fn play_blocking(sound: Arc<[u8]>) {
    // The stream must stay alive until playback ends
    let (_stream, handle) = match OutputStream::try_default() {
        Ok(output) => output,
        Err(e) => {
            warn!("No audio output available: {}", e);
            return;
        }
    };

    let sink = match Sink::try_new(&handle) {
        Ok(sink) => sink,
        Err(e) => {
            warn!("Failed to open audio sink: {}", e);
            return;
        }
    };

    match Decoder::new(Cursor::new(sound)) {
        Ok(source) => {
            debug!("Playing reminder sound");
            sink.append(source);
            sink.sleep_until_end();
        }
        Err(e) => warn!("Failed to decode reminder sound: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        path::Path,
        time::{Duration, Instant},
    };

    #[test]
    fn play_returns_before_the_sound_ends() {
        let chime = std::fs::read(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/chime.wav"))
            .unwrap();
        let player = RodioPlayer::new(Arc::from(chime));

        let started = Instant::now();
        player.play();
        player.play();
        // The chime alone lasts 600ms
        assert!(started.elapsed() < Duration::from_millis(200));
    }

    #[test]
    fn undecodable_sound_is_not_reported_to_the_caller() {
        let player = RodioPlayer::new(Arc::from(vec![0u8; 16]));
        let started = Instant::now();
        player.play();
        assert!(started.elapsed() < Duration::from_millis(200));
    }
}
