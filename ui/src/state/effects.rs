use api::Backend;

use super::{Request, Response};

/// Run a controller request against the backend. Never fails: errors travel inside the
/// response so the controller decides what they mean.
pub async fn perform<B: Backend + ?Sized>(backend: &B, request: Request) -> Response {
    match request {
        Request::Summary { id, generation } => {
            let outcome = backend.summary(&id).await;
            Response::Summary {
                id,
                generation,
                outcome,
            }
        }
        Request::Report { id } => {
            let outcome = backend.report(&id).await;
            Response::Report { id, outcome }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use anyhow::{anyhow, Result};
    use api::{EquipmentResult, HistoryEntry, RecordId};
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    use super::*;
    use crate::state::tests::result;
    use crate::state::{AppController, Command, Followup};

    /// Backend whose summary fetches stay pending until the test releases them.
    #[derive(Default)]
    struct GatedBackend {
        gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
        reports: RefCell<Vec<RecordId>>,
    }

    impl GatedBackend {
        fn gate(&self, id: &str) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().insert(id.to_string(), rx);
            tx
        }
    }

    #[async_trait(?Send)]
    impl Backend for GatedBackend {
        async fn upload(&self, _file_name: &str, _bytes: Vec<u8>) -> Result<EquipmentResult> {
            Err(anyhow!("not used"))
        }

        async fn history(&self) -> Result<Vec<HistoryEntry>> {
            Ok(Vec::new())
        }

        async fn summary(&self, id: &RecordId) -> Result<EquipmentResult> {
            let gate = self.gates.borrow_mut().remove(id.as_str());
            if let Some(gate) = gate {
                gate.await.map_err(|_| anyhow!("gate dropped"))?;
            }
            if id.as_str() == "broken" {
                return Err(anyhow!("404 Not Found"));
            }
            Ok(result(id.as_str()))
        }

        async fn report(&self, id: &RecordId) -> Result<Vec<u8>> {
            self.reports.borrow_mut().push(id.clone());
            Ok(format!("%PDF {id}").into_bytes())
        }
    }

    /// Mirrors what the dashboard does: dispatch, run the request, resolve.
    fn trigger(
        pool: &LocalPool,
        backend: &Rc<GatedBackend>,
        controller: &Rc<RefCell<AppController>>,
        command: Command,
    ) -> Rc<RefCell<Option<Followup>>> {
        let followup = Rc::new(RefCell::new(None));
        let Some(request) = controller.borrow_mut().dispatch(command) else {
            return followup;
        };

        let backend = backend.clone();
        let controller = controller.clone();
        let slot = followup.clone();
        pool.spawner()
            .spawn_local(async move {
                let response = perform(backend.as_ref(), request).await;
                let outcome = controller.borrow_mut().resolve(response);
                *slot.borrow_mut() = Some(outcome);
            })
            .unwrap();
        followup
    }

    #[test]
    fn later_selection_wins_even_when_earlier_fetch_resolves_last() {
        let mut pool = LocalPool::new();
        let backend = Rc::new(GatedBackend::default());
        let controller = Rc::new(RefCell::new(AppController::default()));

        let release_a = backend.gate("A");
        let release_b = backend.gate("B");

        trigger(&pool, &backend, &controller, Command::HistorySelected(RecordId::new("A")));
        trigger(&pool, &backend, &controller, Command::HistorySelected(RecordId::new("B")));
        pool.run_until_stalled();
        assert!(controller.borrow().current().is_none());

        release_b.send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(controller.borrow().current(), Some(&result("B")));

        release_a.send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(controller.borrow().current(), Some(&result("B")));
    }

    #[test]
    fn in_order_resolution_shows_latest_selection() {
        let mut pool = LocalPool::new();
        let backend = Rc::new(GatedBackend::default());
        let controller = Rc::new(RefCell::new(AppController::default()));

        let release_a = backend.gate("A");
        let release_b = backend.gate("B");
        trigger(&pool, &backend, &controller, Command::HistorySelected(RecordId::new("A")));
        trigger(&pool, &backend, &controller, Command::HistorySelected(RecordId::new("B")));

        release_a.send(()).unwrap();
        pool.run_until_stalled();
        assert!(controller.borrow().current().is_none());

        release_b.send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(controller.borrow().current(), Some(&result("B")));
    }

    #[test]
    fn failed_fetch_is_swallowed() {
        let mut pool = LocalPool::new();
        let backend = Rc::new(GatedBackend::default());
        let controller = Rc::new(RefCell::new(AppController::default()));
        controller
            .borrow_mut()
            .dispatch(Command::UploadCompleted(result("1")));

        trigger(&pool, &backend, &controller, Command::HistorySelected(RecordId::new("broken")));
        pool.run_until_stalled();
        assert_eq!(controller.borrow().current(), Some(&result("1")));
    }

    #[test]
    fn download_runs_report_fetch_for_current_id() {
        let mut pool = LocalPool::new();
        let backend = Rc::new(GatedBackend::default());
        let controller = Rc::new(RefCell::new(AppController::default()));

        let idle = trigger(&pool, &backend, &controller, Command::DownloadRequested);
        pool.run_until_stalled();
        assert!(idle.borrow().is_none());
        assert!(backend.reports.borrow().is_empty());

        controller
            .borrow_mut()
            .dispatch(Command::UploadCompleted(result("42")));
        let followup = trigger(&pool, &backend, &controller, Command::DownloadRequested);
        pool.run_until_stalled();

        assert_eq!(*backend.reports.borrow(), [RecordId::new("42")]);
        assert_eq!(
            followup.borrow_mut().take(),
            Some(Followup::SaveReport {
                file_name: "report_42.pdf".into(),
                bytes: b"%PDF 42".to_vec(),
            })
        );
    }
}
