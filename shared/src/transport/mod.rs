cfg_if! {
    if #[cfg(feature = "transport_local")] {
        mod channel;
        mod link_conditioner;
        mod local;

        pub use channel::MessageChannel;
        pub use link_conditioner::{ConditionedReceiver, LinkConditionerConfig};
        pub use local::local_endpoints;
    } else {}
}

mod endpoint;
mod error;

pub use endpoint::{AuthorityEndpoint, RemoteEndpoint};
pub use error::{RecvError, SendError};

/// Sending half of a one-way message link
pub trait MessageSender<M>: Send {
    fn send(&self, message: M) -> Result<(), SendError>;
}

/// Receiving half of a one-way message link
pub trait MessageReceiver<M>: Send {
    /// Returns the next available message, or `None` when nothing is waiting
    fn receive(&mut self) -> Result<Option<M>, RecvError>;
}
