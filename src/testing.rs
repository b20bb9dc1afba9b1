//! Test Doubles
//!
//! Scripted transport and recording notice sink for driving view state
//! machines without a backend.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ipc_contract::Command;
use serde_json::Value;

use crate::commands::{Ipc, Transport};
use crate::error::IpcError;
use crate::i18n::Locale;
use crate::notify::{Notice, NoticeSink, Notifier};

/// Replies from per-operation queues and records every command sent.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<&'static str, VecDeque<Result<Value, IpcError>>>>,
    sent: Mutex<Vec<Command>>,
}

impl MockTransport {
    /// Queues a reply for the next `sub.cmd == name` command.
    pub fn reply(&self, name: &'static str, value: Value) -> &Self {
        self.push(name, Ok(value))
    }

    pub fn reject(&self, name: &'static str, error: IpcError) -> &Self {
        self.push(name, Err(error))
    }

    fn push(&self, name: &'static str, reply: Result<Value, IpcError>) -> &Self {
        self.replies.lock().unwrap().entry(name).or_default().push_back(reply);
        self
    }

    pub fn sent(&self) -> Vec<Command> {
        self.sent.lock().unwrap().clone()
    }

    /// How many commands named `name` were sent.
    pub fn count(&self, name: &str) -> usize {
        self.sent.lock().unwrap().iter().filter(|c| c.name() == name).count()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, command: &Command) -> Result<Value, IpcError> {
        self.sent.lock().unwrap().push(command.clone());
        self.replies
            .lock()
            .unwrap()
            .get_mut(command.name())
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(IpcError::Transport(format!("no reply scripted for {}", command.name()))))
    }
}

#[derive(Default)]
pub struct RecordingSink {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingSink {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl NoticeSink for RecordingSink {
    fn push(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// English client wired to a fresh mock and sink.
pub fn harness() -> (Arc<MockTransport>, Arc<RecordingSink>, Ipc) {
    let mock = Arc::new(MockTransport::default());
    let sink = Arc::new(RecordingSink::default());
    let notifier = Notifier::new(sink.clone(), Locale::En);
    let ipc = Ipc::new(mock.clone(), notifier);
    (mock, sink, ipc)
}
