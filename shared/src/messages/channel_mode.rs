/// Delivery guarantee a message travels with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelMode {
    /// Guaranteed eventual delivery, FIFO per sender
    OrderedReliable,
    /// May be dropped, may arrive out of order
    UnorderedUnreliable,
}

impl ChannelMode {
    pub fn is_reliable(&self) -> bool {
        matches!(self, ChannelMode::OrderedReliable)
    }
}
