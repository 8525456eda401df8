use std::collections::VecDeque;

use log::trace;

use super::{MessageReceiver, RecvError};

/// Simulated network conditions for a best-effort link
#[derive(Clone, Debug, PartialEq)]
pub struct LinkConditionerConfig {
    /// Probability in `[0, 1]` that any given message is dropped
    pub loss: f32,
    /// Shuffle each batch of messages that arrive together
    pub reorder: bool,
    /// Fixed seed for reproducible loss patterns
    pub seed: Option<u64>,
}

impl LinkConditionerConfig {
    pub fn new(loss: f32, reorder: bool) -> Self {
        Self {
            loss: loss.clamp(0.0, 1.0),
            reorder,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Lossless, in order
    pub fn perfect_condition() -> Self {
        Self::new(0.0, false)
    }

    /// Occasional loss, in order
    pub fn good_condition() -> Self {
        Self::new(0.02, false)
    }

    /// Heavy loss with reordering
    pub fn poor_condition() -> Self {
        Self::new(0.2, true)
    }
}

/// Wraps a receiver and applies a [`LinkConditionerConfig`] to what comes out
/// of it. Loss and reordering happen per batch: every message waiting on the
/// inner receiver when the buffer runs dry.
pub struct ConditionedReceiver<M> {
    inner: Box<dyn MessageReceiver<M>>,
    config: LinkConditionerConfig,
    rng: fastrand::Rng,
    pending: VecDeque<M>,
    disconnected: bool,
}

impl<M: Send> ConditionedReceiver<M> {
    pub fn new(inner: Box<dyn MessageReceiver<M>>, config: LinkConditionerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            inner,
            config,
            rng,
            pending: VecDeque::new(),
            disconnected: false,
        }
    }

    fn fill(&mut self) {
        let mut batch = Vec::new();
        loop {
            match self.inner.receive() {
                Ok(Some(message)) => {
                    if self.rng.f32() < self.config.loss {
                        trace!("Link conditioner dropped a message");
                        continue;
                    }
                    batch.push(message);
                }
                Ok(None) => break,
                Err(RecvError::Disconnected) => {
                    self.disconnected = true;
                    break;
                }
            }
        }

        if self.config.reorder {
            self.rng.shuffle(&mut batch);
        }
        self.pending.extend(batch);
    }
}

impl<M: Send> MessageReceiver<M> for ConditionedReceiver<M> {
    fn receive(&mut self) -> Result<Option<M>, RecvError> {
        if self.pending.is_empty() && !self.disconnected {
            self.fill();
        }

        match self.pending.pop_front() {
            Some(message) => Ok(Some(message)),
            None if self.disconnected => Err(RecvError::Disconnected),
            None => Ok(None),
        }
    }
}
