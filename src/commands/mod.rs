//! Backend Command Wrappers
//!
//! Frontend bindings to the backend's command envelope, organized by domain.

mod component;
mod global;
mod guard;
mod meal;

use std::sync::Arc;

use async_trait::async_trait;
use ipc_contract::{variant_of, Command, ErrorPayload, Reply};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::config::DISPATCH_COMMAND;
use crate::error::IpcError;
use crate::notify::Notifier;

pub use component::*;
pub use global::*;
pub use guard::{expect_variant, Expected};
pub use meal::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Carries one command to the backend and returns its raw reply.
///
/// No timeout, retry or ordering: every call stands alone.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, command: &Command) -> Result<Value, IpcError>;
}

/// Transport over the Tauri `invoke` bridge.
pub struct TauriTransport;

#[derive(Serialize)]
struct DispatchArgs<'a> {
    command: &'a Command,
}

#[async_trait(?Send)]
impl Transport for TauriTransport {
    async fn send(&self, command: &Command) -> Result<Value, IpcError> {
        // Maps must arrive as plain objects, not ES `Map`s.
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_args = DispatchArgs { command }
            .serialize(&serializer)
            .map_err(|e| IpcError::Transport(e.to_string()))?;

        match invoke(DISPATCH_COMMAND, js_args).await {
            Ok(result) => serde_wasm_bindgen::from_value(result)
                .map_err(|e| IpcError::Malformed(e.to_string())),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsValue) -> IpcError {
    match serde_wasm_bindgen::from_value::<ErrorPayload>(rejection.clone()) {
        Ok(payload) => IpcError::from_payload(payload),
        Err(_) => IpcError::Transport(format!("{:?}", rejection)),
    }
}

/// Marks a failure that has already been presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reported;

/// IPC client: a transport plus the channel its failures are reported on.
#[derive(Clone)]
pub struct Ipc {
    transport: Arc<dyn Transport>,
    notifier: Notifier,
}

impl Ipc {
    pub fn new(transport: Arc<dyn Transport>, notifier: Notifier) -> Self {
        Self { transport, notifier }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Sends a command and resolves with the backend's raw reply.
    pub async fn send(&self, command: impl Into<Command>) -> Result<Value, IpcError> {
        let command = command.into();
        log::debug!("[IPC] {}.{}", command.domain(), command.name());
        self.transport.send(&command).await
    }

    /// Sends, checks the variant tag and decodes the reply.
    ///
    /// Every failure is reported exactly once before `Err(Reported)` returns.
    pub async fn request<R: Reply>(
        &self,
        command: impl Into<Command>,
        expected: Expected,
    ) -> Result<R, Reported> {
        let raw = self.send(command).await.map_err(|e| self.report(e))?;
        if !expect_variant(expected, variant_of(&raw).unwrap_or_default(), &self.notifier) {
            return Err(Reported);
        }
        serde_json::from_value(raw).map_err(|e| self.report(e.into()))
    }

    /// Rejects a decoded reply whose case the caller did not ask for.
    pub(crate) fn unexpected<T>(&self, expected: Expected, reply: &impl Reply) -> Result<T, Reported> {
        Err(self.report(IpcError::UnexpectedVariant {
            expected: expected.to_string(),
            received: reply.variant().to_string(),
        }))
    }

    fn report(&self, error: IpcError) -> Reported {
        self.notifier.error(&error);
        Reported
    }
}
