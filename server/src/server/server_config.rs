use std::default::Default;

/// Which connections receive collection pushes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushCondition {
    /// Every connection
    Always,
    /// Every connection except tracking owners, which keep their own view
    /// by applying their local detections as they forward them
    SkipOwner,
}

/// Contains Config properties which will be used by the LocalAuthority
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Determines which connected participants are sent the collection
    pub push_condition: PushCondition,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            push_condition: PushCondition::SkipOwner,
        }
    }
}
