use crate::{SurfaceEvent, SurfacePush};

use super::{
    AuthorityEndpoint, ConditionedReceiver, LinkConditionerConfig, MessageChannel,
    MessageReceiver, RemoteEndpoint,
};

/// Connects an authority and a remote participant in-process.
///
/// The reliable request link and the push link are plain ordered channels.
/// When `conditioner` is given it is applied to the unreliable request link
/// only, so updates may be lost or reordered while adds and removes may not.
pub fn local_endpoints(
    conditioner: Option<LinkConditionerConfig>,
) -> (AuthorityEndpoint, RemoteEndpoint) {
    let (reliable_sender, reliable_receiver) = MessageChannel::unbounded::<SurfaceEvent>();
    let (unreliable_sender, unreliable_receiver) = MessageChannel::unbounded::<SurfaceEvent>();
    let (push_sender, push_receiver) = MessageChannel::unbounded::<SurfacePush>();

    let unreliable_receiver: Box<dyn MessageReceiver<SurfaceEvent>> = match conditioner {
        Some(config) => Box::new(ConditionedReceiver::new(unreliable_receiver, config)),
        None => unreliable_receiver,
    };

    let authority = AuthorityEndpoint {
        reliable_requests: reliable_receiver,
        unreliable_requests: unreliable_receiver,
        pushes: push_sender,
    };
    let remote = RemoteEndpoint {
        reliable_requests: reliable_sender,
        unreliable_requests: unreliable_sender,
        pushes: push_receiver,
    };
    (authority, remote)
}
