//! Tracing setup
//!
//! Logs go to stderr, which shares the terminal with the countdown window, so
//! output can be paused while the window owns the screen.

use std::{
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use tracing_subscriber::{
    fmt::writer::{EitherWriter, MakeWriter},
    EnvFilter,
};

/// Switch that silences log output while set
#[derive(Debug, Clone, Default)]
pub struct LogPause(Arc<AtomicBool>);

impl LogPause {
    /// Drop every log line until `resume`
    pub fn pause(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Write log lines again
    pub fn resume(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_paused(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Writer that discards output while its `LogPause` is set
#[derive(Debug)]
pub struct PausableWriter<M> {
    inner: M,
    pause: LogPause,
}

impl<M> PausableWriter<M> {
    /// Wrap `inner`, returning the switch that controls it
    pub fn new(inner: M) -> (Self, LogPause) {
        let pause = LogPause::default();
        let writer = Self {
            inner,
            pause: pause.clone(),
        };
        (writer, pause)
    }
}

impl<'a, M: MakeWriter<'a>> MakeWriter<'a> for PausableWriter<M> {
    type Writer = EitherWriter<M::Writer, io::Sink>;

    fn make_writer(&'a self) -> Self::Writer {
        if self.pause.is_paused() {
            EitherWriter::B(io::sink())
        } else {
            EitherWriter::A(self.inner.make_writer())
        }
    }
}

/// Install the global subscriber writing to stderr at `level`
pub fn init_tracing(level: &str) -> LogPause {
    let (writer, pause) = PausableWriter::new(io::stderr);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("twenty_reminder={}", level)))
        .with_writer(writer)
        .init();
    pause
}
