// Recording audio backend shared by the host-side tests.

#![allow(dead_code)]
use glass_core::{AudioBackend, EngineState, LoadError, PlaybackError};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

pub struct MockBackend {
    pub state: Cell<EngineState>,
    pub resumes: Cell<usize>,
    pub fetches: RefCell<Vec<String>>,
    pub decodes: RefCell<Vec<String>>,
    pub plays: RefCell<Vec<(String, f32)>>,
    pub unreachable: RefCell<Vec<String>>,
    pub corrupt: RefCell<Vec<String>>,
    pub fail_playback: Cell<bool>,
    // When false, resume() is refused and the engine stays suspended.
    pub resume_allowed: Cell<bool>,
    // Suspend once inside fetch so two loads can interleave.
    pub yield_in_fetch: Cell<bool>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            state: Cell::new(EngineState::Suspended),
            resumes: Cell::new(0),
            fetches: RefCell::new(Vec::new()),
            decodes: RefCell::new(Vec::new()),
            plays: RefCell::new(Vec::new()),
            unreachable: RefCell::new(Vec::new()),
            corrupt: RefCell::new(Vec::new()),
            fail_playback: Cell::new(false),
            resume_allowed: Cell::new(true),
            yield_in_fetch: Cell::new(false),
        }
    }

    pub fn fetch_count(&self, url: &str) -> usize {
        self.fetches.borrow().iter().filter(|u| *u == url).count()
    }

    pub fn decode_count(&self, url: &str) -> usize {
        self.decodes.borrow().iter().filter(|u| *u == url).count()
    }

    pub fn played(&self) -> Vec<(String, f32)> {
        self.plays.borrow().clone()
    }
}

impl AudioBackend for MockBackend {
    type Encoded = String;
    type Buffer = String;

    fn state(&self) -> EngineState {
        self.state.get()
    }

    fn resume(&self) {
        self.resumes.set(self.resumes.get() + 1);
        if self.resume_allowed.get() {
            self.state.set(EngineState::Running);
        }
    }

    async fn fetch(&self, url: &str) -> Result<String, LoadError> {
        self.fetches.borrow_mut().push(url.to_string());
        if self.yield_in_fetch.get() {
            YieldOnce(false).await;
        }
        if self.unreachable.borrow().iter().any(|u| u == url) {
            return Err(LoadError::Fetch(format!("{url} unreachable")));
        }
        Ok(url.to_string())
    }

    async fn decode(&self, encoded: String) -> Result<String, LoadError> {
        self.decodes.borrow_mut().push(encoded.clone());
        if self.corrupt.borrow().contains(&encoded) {
            return Err(LoadError::Decode("not a wave file".into()));
        }
        Ok(format!("pcm:{encoded}"))
    }

    fn play(&self, buffer: &String, volume: f32) -> Result<(), PlaybackError> {
        if self.fail_playback.get() {
            return Err(PlaybackError("context closed".into()));
        }
        self.plays.borrow_mut().push((buffer.clone(), volume));
        Ok(())
    }
}

pub struct YieldOnce(pub bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
