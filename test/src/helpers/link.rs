use std::time::Duration;

use planesync_client::RemoteProxy;
use planesync_server::{ConnectionKey, LocalAuthority};
use planesync_shared::{
    transport::{local_endpoints, LinkConditionerConfig},
    SurfaceAuthority,
};

pub const TICK: Duration = Duration::from_millis(16);

/// Connects a new in-process remote to `authority`
pub fn connect_remote(
    authority: &mut LocalAuthority,
    is_owner: bool,
    conditioner: Option<LinkConditionerConfig>,
) -> (ConnectionKey, RemoteProxy) {
    let (authority_endpoint, remote_endpoint) = local_endpoints(conditioner);
    let key = authority.connect(authority_endpoint, is_owner);
    (key, RemoteProxy::new(remote_endpoint))
}

/// Runs one tick on the authority, then on each remote
pub fn exchange(authority: &mut LocalAuthority, remotes: &mut [&mut RemoteProxy]) {
    authority.tick(TICK);
    for remote in remotes.iter_mut() {
        remote.tick(TICK);
    }
}

pub fn init_logging() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}
