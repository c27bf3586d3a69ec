//! Per-party connection task.

use std::sync::Arc;

use bazaar_exchange_session::SessionHandle;
use bytes::Bytes;
use tokio::{
    sync::mpsc::{self, error::SendError},
    task::JoinHandle,
};
use tracing::{debug, warn};

use crate::{ChannelArgs, ClientState, PacketRouter, split_frame};

/// Input consumed by a connection task.
#[derive(Debug)]
pub enum Inbound {
    /// Raw client frame: little-endian packet code followed by the body.
    Frame(Bytes),
    /// The party joined (or left, with `None`) an exchange.
    Exchange(Option<SessionHandle>),
}

/// Sending side of a connection task's inbound queue.
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    inbound: mpsc::Sender<Inbound>,
}

impl ConnectionHandle {
    /// Queue a client frame, waiting while the inbound buffer is full.
    pub async fn send_frame(&self, frame: Bytes) -> Result<(), SendError<Inbound>> {
        self.inbound.send(Inbound::Frame(frame)).await
    }

    pub async fn set_exchange(
        &self,
        exchange: Option<SessionHandle>,
    ) -> Result<(), SendError<Inbound>> {
        self.inbound.send(Inbound::Exchange(exchange)).await
    }

    pub fn is_closed(&self) -> bool {
        self.inbound.is_closed()
    }
}

/// Spawn the task that processes `state`'s inbound frames in arrival order.
///
/// The task ends once every [`ConnectionHandle`] is dropped and yields the
/// final state. Dispatch errors are logged and the frame dropped.
pub fn spawn_connection(
    state: ClientState,
    router: Arc<PacketRouter>,
    args: &ChannelArgs,
) -> (ConnectionHandle, JoinHandle<ClientState>) {
    let (tx, rx) = mpsc::channel(args.inbound_buffer.max(1));
    let task = tokio::spawn(run(state, router, rx));
    (ConnectionHandle { inbound: tx }, task)
}

async fn run(
    mut state: ClientState,
    router: Arc<PacketRouter>,
    mut inbound: mpsc::Receiver<Inbound>,
) -> ClientState {
    debug!(entity = %state.entity_id(), "Channel: connection task started");

    while let Some(message) = inbound.recv().await {
        match message {
            Inbound::Frame(frame) => {
                let result = split_frame(frame)
                    .and_then(|(code, payload)| router.dispatch(&state, code, payload));
                if let Err(error) = result {
                    warn!(
                        entity = %state.entity_id(),
                        account = %state.account_id(),
                        %error,
                        "Channel: dropped client packet"
                    );
                }
            }
            Inbound::Exchange(exchange) => {
                debug!(
                    entity = %state.entity_id(),
                    joined = exchange.is_some(),
                    "Channel: exchange changed"
                );
                state.set_exchange(exchange);
            }
        }
    }

    debug!(entity = %state.entity_id(), "Channel: connection task finished");
    state
}
