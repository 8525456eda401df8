use crate::{SurfaceEvent, SurfacePush};

use super::{MessageReceiver, MessageSender};

/// The authority's view of one remote participant
pub struct AuthorityEndpoint {
    /// Adds and removes, in the order the remote sent them
    pub reliable_requests: Box<dyn MessageReceiver<SurfaceEvent>>,
    /// Updates, possibly lost or reordered
    pub unreliable_requests: Box<dyn MessageReceiver<SurfaceEvent>>,
    pub pushes: Box<dyn MessageSender<SurfacePush>>,
}

/// A remote participant's link to the authority
pub struct RemoteEndpoint {
    pub reliable_requests: Box<dyn MessageSender<SurfaceEvent>>,
    pub unreliable_requests: Box<dyn MessageSender<SurfaceEvent>>,
    pub pushes: Box<dyn MessageReceiver<SurfacePush>>,
}
