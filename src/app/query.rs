use std::sync::mpsc;
use std::thread;

use crate::error::{Error, GENERIC_FAILURE};

/// What a screen renders for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// A fetch running on a worker thread, reported back over a channel.
///
/// Restarting drops the previous receiver, so a superseded worker's result is
/// discarded when it arrives and the last request always wins.
pub struct Query<T> {
    state: ViewState<T>,
    receiver: Option<mpsc::Receiver<Result<T, Error>>>,
}

impl<T: Send + 'static> Query<T> {
    pub fn spawn<F>(fetch: F) -> Self
    where
        F: FnOnce() -> Result<T, Error> + Send + 'static,
    {
        let mut query = Self {
            state: ViewState::Loading,
            receiver: None,
        };
        query.restart(fetch);
        query
    }

    pub fn restart<F>(&mut self, fetch: F)
    where
        F: FnOnce() -> Result<T, Error> + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        self.state = ViewState::Loading;
        self.receiver = Some(receiver);

        thread::spawn(move || {
            // Fails only when the request was superseded.
            let _ = sender.send(fetch());
        });
    }

    /// Picks up a finished fetch. Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = &self.receiver else {
            return false;
        };

        let outcome = match receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(mpsc::TryRecvError::Empty) => return false,
            Err(mpsc::TryRecvError::Disconnected) => {
                tracing::error!("fetch worker exited without a result");
                self.receiver = None;
                self.state = ViewState::Error(GENERIC_FAILURE.to_string());
                return true;
            }
        };

        self.receiver = None;
        self.state = match outcome {
            Ok(data) => ViewState::Success(data),
            Err(e) => {
                tracing::warn!(error = %e, "showing failure panel");
                ViewState::Error(GENERIC_FAILURE.to_string())
            }
        };
        true
    }
}

impl<T> Query<T> {
    /// A query that never fetches, already in `state`.
    pub fn settled(state: ViewState<T>) -> Self {
        Self {
            state,
            receiver: None,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }
}

/// Joins two page fetches: loading wins over error, error wins over data.
pub fn combined<'a, A, B>(a: &'a ViewState<A>, b: &'a ViewState<B>) -> ViewState<(&'a A, &'a B)> {
    match (a, b) {
        (ViewState::Loading, _) | (_, ViewState::Loading) => ViewState::Loading,
        (ViewState::Error(e), _) | (_, ViewState::Error(e)) => ViewState::Error(e.clone()),
        (ViewState::Success(a), ViewState::Success(b)) => ViewState::Success((a, b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::{Duration, Instant};

    fn wait<T: Send + 'static>(query: &mut Query<T>) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while query.state().is_loading() {
            query.poll();
            assert!(Instant::now() < deadline, "query never settled");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn starts_loading_then_succeeds() {
        let (release, gate) = mpsc::channel::<()>();
        let mut query = Query::spawn(move || {
            gate.recv().unwrap();
            Ok(42)
        });
        assert!(query.state().is_loading());
        assert!(!query.poll());

        release.send(()).unwrap();
        wait(&mut query);
        assert_eq!(query.state(), &ViewState::Success(42));
    }

    #[test]
    fn failure_becomes_generic_error() {
        let mut query: Query<u32> = Query::spawn(|| {
            Err(Error::Status {
                endpoint: "popular",
                status: 503,
            })
        });
        wait(&mut query);
        assert_eq!(query.state(), &ViewState::Error(GENERIC_FAILURE.to_string()));
    }

    #[test]
    fn last_request_wins() {
        let (release_first, first_gate) = mpsc::channel::<()>();
        let (first_done, first_finished) = mpsc::channel::<()>();
        let mut query = Query::spawn(move || {
            first_gate.recv().unwrap();
            let _ = first_done.send(());
            Ok("first")
        });

        query.restart(|| Ok("second"));
        wait(&mut query);
        assert_eq!(query.state(), &ViewState::Success("second"));

        release_first.send(()).unwrap();
        first_finished.recv().unwrap();
        assert!(!query.poll());
        assert_eq!(query.state(), &ViewState::Success("second"));
    }

    #[test]
    fn restart_returns_to_loading() {
        let mut query = Query::spawn(|| Ok(1));
        wait(&mut query);

        let (_release, gate) = mpsc::channel::<()>();
        query.restart(move || {
            let _ = gate.recv();
            Ok(2)
        });
        assert!(query.state().is_loading());
    }

    #[test]
    fn combined_prefers_loading_then_error() {
        let loading: ViewState<u8> = ViewState::Loading;
        let failed: ViewState<u8> = ViewState::Error("boom".into());
        let ok: ViewState<u8> = ViewState::Success(1);

        assert!(combined(&loading, &failed).is_loading());
        assert!(combined(&ok, &loading).is_loading());
        assert_eq!(combined(&ok, &failed), ViewState::Error("boom".into()));
        assert_eq!(combined(&ok, &ok), ViewState::Success((&1, &1)));
    }
}
