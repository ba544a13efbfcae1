//! Boundary contract for the external chat collaborator.
//!
//! The background effect and the chat widget are independent: the effect
//! never reaches into this module and nothing here touches the simulation.
//! What lives here is only the agreed surface between the two: the wire
//! shape of one request/response exchange, and a transport trait a host can
//! hand to [`ChatWorker`] to run the exchange off the frame loop.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// One outgoing user message, as it crosses the wire.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// The collaborator's reply: exactly one of the two fields is expected to be
/// set. A populated `error` is a server-signalled failure, already phrased
/// for the user.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ChatReply {
    /// Collapses the two-field wire shape into a single result.
    pub fn into_result(self) -> Result<String> {
        if let Some(error) = self.error {
            return Err(anyhow!(error));
        }
        self.response
            .ok_or_else(|| anyhow!("collaborator reply carried neither response nor error"))
    }
}

/// The single abstract interface through which a host reaches the
/// collaborator. Transport-level failures (unreachable endpoint, malformed
/// body) are `Err`; failures the server phrases itself arrive as a reply
/// with `error` set.
pub trait ChatTransport: Send + 'static {
    fn send_user_message(&self, text: &str) -> Result<ChatReply>;
}

/// One in-flight exchange, run on a background thread so a host UI can keep
/// painting while it waits. Poll each frame; once a result is delivered the
/// worker is spent and should be dropped.
pub struct ChatWorker {
    rx: Receiver<Result<ChatReply>>,
}

impl ChatWorker {
    pub fn spawn<T: ChatTransport>(transport: T, text: String) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(transport.send_user_message(&text));
        });
        Self { rx }
    }

    /// Non-blocking; `None` while the exchange is still in flight.
    pub fn poll(&self) -> Option<Result<String>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result.and_then(ChatReply::into_result)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err(anyhow!("chat worker disconnected before replying")))
            }
        }
    }
}
