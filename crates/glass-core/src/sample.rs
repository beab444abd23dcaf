//! Named glass samples and their one-time lazy loading.

use crate::backend::AudioBackend;
use crate::error::LoadError;
use std::cell::RefCell;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleName {
    Firm,
    Soft,
}

impl SampleName {
    pub const ALL: [SampleName; 2] = [SampleName::Firm, SampleName::Soft];

    #[inline]
    fn index(self) -> usize {
        match self {
            SampleName::Firm => 0,
            SampleName::Soft => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SampleName::Firm => "firm",
            SampleName::Soft => "soft",
        }
    }
}

impl fmt::Display for SampleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load progress of a single sample, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleStatus {
    Empty,
    Loading,
    Ready,
    /// Fetch or decode failed; never retried for this session.
    Unavailable,
}

enum Slot<B> {
    Empty,
    Loading,
    Ready(B),
    Unavailable,
}

struct Sample<B> {
    source: String,
    slot: Slot<B>,
}

/// Owns every sample. A sample is playable iff its buffer is populated.
///
/// Borrows of the table are never held across an `.await`, so a second
/// `load` that starts while the first is in flight sees `Loading` and
/// skips that sample instead of fetching it again.
pub struct SampleStore<B> {
    samples: RefCell<[Sample<B>; 2]>,
}

impl<B: Clone> SampleStore<B> {
    pub fn new(firm_source: impl Into<String>, soft_source: impl Into<String>) -> Self {
        Self {
            samples: RefCell::new([
                Sample {
                    source: firm_source.into(),
                    slot: Slot::Empty,
                },
                Sample {
                    source: soft_source.into(),
                    slot: Slot::Empty,
                },
            ]),
        }
    }

    pub fn source(&self, name: SampleName) -> String {
        self.samples.borrow()[name.index()].source.clone()
    }

    pub fn status(&self, name: SampleName) -> SampleStatus {
        match self.samples.borrow()[name.index()].slot {
            Slot::Empty => SampleStatus::Empty,
            Slot::Loading => SampleStatus::Loading,
            Slot::Ready(_) => SampleStatus::Ready,
            Slot::Unavailable => SampleStatus::Unavailable,
        }
    }

    /// The decoded buffer, or `None` while the sample is not playable.
    pub fn get(&self, name: SampleName) -> Option<B> {
        match &self.samples.borrow()[name.index()].slot {
            Slot::Ready(buffer) => Some(buffer.clone()),
            _ => None,
        }
    }

    /// Fetch and decode every sample that has not been attempted yet.
    /// Failures are logged and leave that sample unavailable; the other
    /// samples still load.
    pub async fn load<L>(&self, backend: &L)
    where
        L: AudioBackend<Buffer = B>,
    {
        for name in SampleName::ALL {
            let Some(url) = self.claim(name) else {
                continue;
            };
            match fetch_and_decode(backend, &url).await {
                Ok(buffer) => {
                    log::info!("[samples] {} loaded from {}", name, url);
                    self.settle(name, Slot::Ready(buffer));
                }
                Err(e) => {
                    log::error!("[samples] {} ({}) unavailable: {}", name, url, e);
                    self.settle(name, Slot::Unavailable);
                }
            }
        }
    }

    // Move an empty slot to `Loading` and hand back its source.
    fn claim(&self, name: SampleName) -> Option<String> {
        let mut samples = self.samples.borrow_mut();
        let sample = &mut samples[name.index()];
        match sample.slot {
            Slot::Empty => {
                sample.slot = Slot::Loading;
                Some(sample.source.clone())
            }
            _ => None,
        }
    }

    fn settle(&self, name: SampleName, slot: Slot<B>) {
        self.samples.borrow_mut()[name.index()].slot = slot;
    }
}

async fn fetch_and_decode<L: AudioBackend>(backend: &L, url: &str) -> Result<L::Buffer, LoadError> {
    let encoded = backend.fetch(url).await?;
    backend.decode(encoded).await
}
