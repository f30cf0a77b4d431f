//! Service context bundling all port trait objects.

use std::path::Path;

use crate::adapters::live::{LiveClock, LiveFileSystem, LiveIdGenerator};
use crate::adapters::recording::{RecordingClock, RecordingFileSystem, RecordingIdGenerator};
use crate::adapters::replaying::{ReplayingClock, ReplayingFileSystem, ReplayingIdGenerator};
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;

/// Bundles the port trait objects a command needs.
///
/// Constructors wire up live, recording, or replaying adapters.
pub struct ServiceContext {
    /// Clock for report timestamps.
    pub clock: Box<dyn Clock>,
    /// Filesystem for resource files, OCR output, and reports.
    pub fs: Box<dyn FileSystem>,
    /// Generator for run IDs.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a context backed by the real disk, clock, and UUIDs.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            id_gen: Box::new(LiveIdGenerator),
        }
    }

    /// Creates a live context whose port calls are recorded to `path`.
    ///
    /// The returned session must be finished after the context is dropped.
    #[must_use]
    pub fn recording_at(path: &Path) -> (Self, RecordingSession) {
        let session = RecordingSession::new(path);
        let ctx = Self {
            clock: Box::new(RecordingClock::new(Box::new(LiveClock), session.recorder())),
            fs: Box::new(RecordingFileSystem::new(Box::new(LiveFileSystem), session.recorder())),
            id_gen: Box::new(RecordingIdGenerator::new(
                Box::new(LiveIdGenerator),
                session.recorder(),
            )),
        };
        (ctx, session)
    }

    /// Creates a context that replays every port from one cassette file.
    ///
    /// Each port gets its own replayer so per-port cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        Ok(Self {
            clock: Box::new(ReplayingClock::new(CassetteReplayer::from_file(path)?)),
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::from_file(path)?)),
            id_gen: Box::new(ReplayingIdGenerator::new(CassetteReplayer::from_file(path)?)),
        })
    }
}
