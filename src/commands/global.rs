//! Global Commands
//!
//! Session state and dataset lifecycle.

use ipc_contract::{AvailableDatasets, DatasetRef, GlobalCmd, GlobalReply, SessionState};

use super::{Expected, Ipc, Reported};

/// Advisory flags returned when a dataset is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenedDataset {
    pub mismatch: bool,
    pub is_backup: bool,
}

pub async fn get_state(ipc: &Ipc) -> Result<SessionState, Reported> {
    let expected = Expected::One("gotState");
    match ipc.request::<GlobalReply>(GlobalCmd::GetState, expected).await? {
        GlobalReply::GotState { state } => Ok(state),
        other => ipc.unexpected(expected, &other),
    }
}

pub async fn get_available_datasets(ipc: &Ipc) -> Result<AvailableDatasets, Reported> {
    let expected = Expected::One("gotDatasets");
    match ipc.request::<GlobalReply>(GlobalCmd::GetAvailableDatasets, expected).await? {
        GlobalReply::GotDatasets(datasets) => Ok(datasets),
        other => ipc.unexpected(expected, &other),
    }
}

pub async fn new_dataset(ipc: &Ipc, next_month: bool) -> Result<(), Reported> {
    let expected = Expected::One("createdDataset");
    match ipc.request::<GlobalReply>(GlobalCmd::NewDataset { next_month }, expected).await? {
        GlobalReply::CreatedDataset => Ok(()),
        other => ipc.unexpected(expected, &other),
    }
}

pub async fn open_dataset(ipc: &Ipc, dataset: DatasetRef) -> Result<OpenedDataset, Reported> {
    let expected = Expected::One("openedDataset");
    let cmd = GlobalCmd::OpenDataset { year: dataset.year, month: dataset.month };
    match ipc.request::<GlobalReply>(cmd, expected).await? {
        GlobalReply::OpenedDataset { mismatch, is_backup } => Ok(OpenedDataset { mismatch, is_backup }),
        other => ipc.unexpected(expected, &other),
    }
}

pub async fn close_dataset(ipc: &Ipc) -> Result<(), Reported> {
    let expected = Expected::One("closedDataset");
    match ipc.request::<GlobalReply>(GlobalCmd::CloseDataset, expected).await? {
        GlobalReply::ClosedDataset => Ok(()),
        other => ipc.unexpected(expected, &other),
    }
}

pub async fn save(ipc: &Ipc) -> Result<(), Reported> {
    let expected = Expected::One("saved");
    match ipc.request::<GlobalReply>(GlobalCmd::Save, expected).await? {
        GlobalReply::Saved => Ok(()),
        other => ipc.unexpected(expected, &other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IpcError;
    use crate::testing::harness;
    use ipc_contract::Command;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_state_loaded() {
        let (mock, sink, ipc) = harness();
        mock.reply("getState", json!({
            "variant": "gotState",
            "state": {"state": "loaded", "year": 2024, "month": 3}
        }));

        let state = get_state(&ipc).await.unwrap();
        assert_eq!(state, SessionState::Loaded { year: 2024, month: 3 });
        assert!(sink.notices().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_variant_reports_once() {
        let (mock, sink, ipc) = harness();
        mock.reply("save", json!({"variant": "closedDataset"}));

        assert_eq!(save(&ipc).await, Err(Reported));
        assert_eq!(sink.notices().len(), 1);
    }

    #[tokio::test]
    async fn test_backend_rejection_is_normalized() {
        let (mock, sink, ipc) = harness();
        mock.reject("newDataset", IpcError::from_text("error.global.dataset_exists: 2024/3"));

        assert_eq!(new_dataset(&ipc, false).await, Err(Reported));
        let notices = sink.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "A dataset for this month already exists");
    }

    #[tokio::test]
    async fn test_malformed_payload_reports_once() {
        let (mock, sink, ipc) = harness();
        mock.reply("getAvailableDatasets", json!({"variant": "gotDatasets", "data": 5}));

        assert!(get_available_datasets(&ipc).await.is_err());
        assert_eq!(sink.notices().len(), 1);
        assert_eq!(sink.notices()[0].message, "The backend sent a response that could not be read");
    }

    #[tokio::test]
    async fn test_open_dataset_sends_period() {
        let (mock, _, ipc) = harness();
        mock.reply("openDataset", json!({"variant": "openedDataset", "mismatch": false, "isBackup": true}));

        let dataset = DatasetRef::new(2024, 3).unwrap();
        let opened = open_dataset(&ipc, dataset).await.unwrap();
        assert_eq!(opened, OpenedDataset { mismatch: false, is_backup: true });
        assert_eq!(
            mock.sent(),
            vec![Command::from(GlobalCmd::OpenDataset { year: 2024, month: 3 })]
        );
    }
}
