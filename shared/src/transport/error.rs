use thiserror::Error;

/// Errors that can occur while handing a message to a transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendError {
    /// The receiving side has gone away; nothing sent on this link will arrive
    #[error("Failed to send message: the remote end of the link is disconnected")]
    Disconnected,
}

/// Errors that can occur while draining a transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecvError {
    /// Every sender has gone away and no buffered messages remain
    #[error("Failed to receive message: the remote end of the link is disconnected")]
    Disconnected,
}
