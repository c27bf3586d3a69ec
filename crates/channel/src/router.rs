//! Packet code to parser routing.

use std::{collections::HashMap, sync::Arc};

use bazaar_exchange_entrust::EntrustRewardService;
use bazaar_net_codec::{ClientPacketCode, PacketReader};
use bytes::Bytes;
use tracing::trace;

use crate::{ChannelError, ClientState};

/// Handles the body of one client packet code.
#[auto_impl::auto_impl(&, Arc, Box)]
pub trait PacketParser: Send + Sync {
    fn parse(&self, state: &ClientState, payload: Bytes) -> Result<(), ChannelError>;
}

/// Parser for [`ClientPacketCode::EntrustRewardUpdate`].
#[derive(Debug, Clone)]
pub struct EntrustRewardUpdateParser {
    service: EntrustRewardService,
}

impl EntrustRewardUpdateParser {
    pub fn new(service: EntrustRewardService) -> Self {
        Self { service }
    }
}

impl PacketParser for EntrustRewardUpdateParser {
    fn parse(&self, state: &ClientState, payload: Bytes) -> Result<(), ChannelError> {
        self.service.handle(&state.requester(), payload)?;
        Ok(())
    }
}

/// Split a raw frame into its little-endian packet code and body.
pub fn split_frame(frame: Bytes) -> Result<(u16, Bytes), ChannelError> {
    let mut reader = PacketReader::new(frame);
    let code = reader.read_u16_le()?;
    Ok((code, reader.into_remaining()))
}

/// Routes client packets to the parser registered for their code.
#[derive(Default, Clone)]
pub struct PacketRouter {
    parsers: HashMap<ClientPacketCode, Arc<dyn PacketParser>>,
}

impl PacketRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Router with every exchange parser registered.
    pub fn with_entrust(service: EntrustRewardService) -> Self {
        let mut router = Self::new();
        router.register(
            ClientPacketCode::EntrustRewardUpdate,
            EntrustRewardUpdateParser::new(service),
        );
        router
    }

    /// Register `parser` for `code`, replacing any previous one.
    pub fn register(&mut self, code: ClientPacketCode, parser: impl PacketParser + 'static) {
        self.parsers.insert(code, Arc::new(parser));
    }

    pub fn handles(&self, code: ClientPacketCode) -> bool {
        self.parsers.contains_key(&code)
    }

    pub fn dispatch(
        &self,
        state: &ClientState,
        code: u16,
        payload: Bytes,
    ) -> Result<(), ChannelError> {
        let code = ClientPacketCode::from_u16(code).ok_or(ChannelError::UnknownPacketCode(code))?;
        let parser = self.parsers.get(&code).ok_or(ChannelError::Unhandled(code))?;

        trace!(entity = %state.entity_id(), %code, len = payload.len(), "Channel: dispatching packet");
        parser.parse(state, payload)
    }
}

impl std::fmt::Debug for PacketRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PacketRouter")
            .field("codes", &self.parsers.keys().collect::<Vec<_>>())
            .finish()
    }
}
