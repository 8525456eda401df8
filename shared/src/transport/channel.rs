use crossbeam::channel::{self, Receiver, Sender, TryRecvError};

use super::{MessageReceiver, MessageSender, RecvError, SendError};

/// In-process message link backed by an unbounded channel. Ordered and
/// lossless, i.e. a reliable channel.
pub struct MessageChannel;

impl MessageChannel {
    pub fn unbounded<M: Send + 'static>() -> (Box<dyn MessageSender<M>>, Box<dyn MessageReceiver<M>>)
    {
        let (message_sender, message_receiver) = channel::unbounded();
        let message_receiver = MessageChannelReceiver::new(message_receiver);
        (Box::new(message_sender), Box::new(message_receiver))
    }
}

impl<M: Send> MessageSender<M> for Sender<M> {
    fn send(&self, message: M) -> Result<(), SendError> {
        Sender::send(self, message).map_err(|_| SendError::Disconnected)
    }
}

struct MessageChannelReceiver<M> {
    receiver: Receiver<M>,
}

impl<M> MessageChannelReceiver<M> {
    fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }
}

impl<M: Send> MessageReceiver<M> for MessageChannelReceiver<M> {
    fn receive(&mut self) -> Result<Option<M>, RecvError> {
        match self.receiver.try_recv() {
            Ok(message) => Ok(Some(message)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(RecvError::Disconnected),
        }
    }
}
