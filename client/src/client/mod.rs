mod remote_proxy;

pub use remote_proxy::RemoteProxy;
