use crate::error::{LoadError, PlaybackError};

/// Playback engine lifecycle. Browsers start audio contexts `Suspended`
/// until a user gesture; once resumed the context stays `Running`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Suspended,
    Running,
}

/// The audio engine the effects drive. The web front end implements this
/// over `AudioContext`; tests implement it with a recorder.
#[allow(async_fn_in_trait)]
pub trait AudioBackend {
    /// Raw fetched bytes, before decoding.
    type Encoded;
    /// A decoded buffer in the engine's native format.
    type Buffer: Clone;

    fn state(&self) -> EngineState;

    fn resume(&self);

    async fn fetch(&self, url: &str) -> Result<Self::Encoded, LoadError>;

    async fn decode(&self, encoded: Self::Encoded) -> Result<Self::Buffer, LoadError>;

    /// Start a new one-shot voice for `buffer` at `volume`. Every call gets
    /// its own source and gain so overlapping strikes ring together.
    fn play(&self, buffer: &Self::Buffer, volume: f32) -> Result<(), PlaybackError>;
}
