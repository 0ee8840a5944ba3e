//! Mutation Client
//!
//! Submits validate/invalidate requests for single voters and turns the
//! response into a tagged outcome. At most one request per voter is in
//! flight at a time.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{error, info};
use thiserror::Error;

use crate::commands::{MutationTransport, ValidationArgs, ValidationResponse};

/// Result of a request the server answered
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Success { validated: bool },
    /// Application-level failure; `message` is for the log only
    Failure { message: String },
}

impl MutationOutcome {
    pub fn from_response(response: ValidationResponse, desired: bool) -> Self {
        if response.is_success() {
            MutationOutcome::Success { validated: desired }
        } else {
            MutationOutcome::Failure {
                message: response
                    .error
                    .unwrap_or_else(|| format!("unexpected result {:?}", response.result)),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    #[error("a validation request for voter {0} is already in flight")]
    InFlight(String),

    #[error("no campaign is associated with this page")]
    MissingCampaign,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("malformed response: {0}")]
    Decode(String),
}

type InFlight = Arc<Mutex<HashSet<String>>>;

fn lock(ids: &Mutex<HashSet<String>>) -> MutexGuard<'_, HashSet<String>> {
    ids.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Releases a voter id from the in-flight set when the request settles
struct InFlightGuard {
    ids: InFlight,
    voter_id: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        lock(&self.ids).remove(&self.voter_id);
    }
}

#[derive(Clone)]
pub struct MutationClient {
    transport: Arc<dyn MutationTransport>,
    campaign_id: Option<u32>,
    in_flight: InFlight,
}

impl MutationClient {
    pub fn new(transport: Arc<dyn MutationTransport>, campaign_id: Option<u32>) -> Self {
        Self {
            transport,
            campaign_id,
            in_flight: Arc::default(),
        }
    }

    pub fn is_in_flight(&self, voter_id: &str) -> bool {
        lock(&self.in_flight).contains(voter_id)
    }

    fn claim(&self, voter_id: &str) -> Result<InFlightGuard, MutationError> {
        if !lock(&self.in_flight).insert(voter_id.to_string()) {
            return Err(MutationError::InFlight(voter_id.to_string()));
        }
        Ok(InFlightGuard {
            ids: Arc::clone(&self.in_flight),
            voter_id: voter_id.to_string(),
        })
    }

    /// Ask the server to set `voter_id`'s validated flag to `desired`.
    ///
    /// A second call for a voter whose request has not settled is rejected
    /// with [`MutationError::InFlight`] without sending anything.
    pub async fn submit(&self, voter_id: &str, desired: bool) -> Result<MutationOutcome, MutationError> {
        let Some(campaign_id) = self.campaign_id else {
            error!("[Validation] Cannot submit voter {voter_id}: {}", MutationError::MissingCampaign);
            return Err(MutationError::MissingCampaign);
        };
        let _guard = self.claim(voter_id)?;

        let args = ValidationArgs {
            voter_id: voter_id.to_string(),
            campaign_id,
            val: desired,
        };

        match self.transport.post_validation(&args).await {
            Ok(response) => {
                let outcome = MutationOutcome::from_response(response, desired);
                match &outcome {
                    MutationOutcome::Success { validated } => {
                        info!("[Validation] Voter {voter_id} validated={validated} for campaign {campaign_id}");
                    }
                    MutationOutcome::Failure { message } => {
                        error!("[Validation] Server rejected voter {voter_id}: {message}");
                    }
                }
                Ok(outcome)
            }
            Err(e) => {
                error!("[Validation] Request for voter {voter_id} failed: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use log::{Log, Metadata, Record};

    /// Transport answering every request with the same canned result
    pub(crate) struct FakeTransport {
        response: Result<ValidationResponse, MutationError>,
        pub(crate) calls: Mutex<Vec<ValidationArgs>>,
    }

    impl FakeTransport {
        pub(crate) fn replying(result: &str, error: Option<&str>) -> Self {
            Self {
                response: Ok(ValidationResponse {
                    result: result.to_string(),
                    error: error.map(str::to_string),
                }),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing(err: MutationError) -> Self {
            Self {
                response: Err(err),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait(?Send)]
    impl MutationTransport for FakeTransport {
        async fn post_validation(&self, args: &ValidationArgs) -> Result<ValidationResponse, MutationError> {
            self.calls.lock().unwrap().push(args.clone());
            self.response.clone()
        }
    }

    /// Transport that blocks until the test releases the response
    struct GatedTransport {
        gate: Mutex<Option<oneshot::Receiver<ValidationResponse>>>,
    }

    #[async_trait(?Send)]
    impl MutationTransport for GatedTransport {
        async fn post_validation(&self, _args: &ValidationArgs) -> Result<ValidationResponse, MutationError> {
            let rx = self.gate.lock().unwrap().take().expect("gate used once");
            rx.await.map_err(|_| MutationError::Transport("gate dropped".to_string()))
        }
    }

    struct CaptureLogger;

    static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());
    static CAPTURE: CaptureLogger = CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            CAPTURED.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    fn capture_logs() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Trace);
    }

    fn captured_contains(needle: &str) -> bool {
        CAPTURED.lock().unwrap().iter().any(|line| line.contains(needle))
    }

    #[tokio::test]
    async fn test_success_reports_desired_state() {
        let transport = Arc::new(FakeTransport::replying("success", None));
        let client = MutationClient::new(transport.clone(), Some(4));

        let outcome = client.submit("7", true).await.unwrap();
        assert_eq!(outcome, MutationOutcome::Success { validated: true });

        let calls = transport.calls.lock().unwrap();
        assert_eq!(
            calls.as_slice(),
            &[ValidationArgs { voter_id: "7".to_string(), campaign_id: 4, val: true }]
        );
    }

    #[tokio::test]
    async fn test_failure_detail_goes_to_log() {
        capture_logs();
        let transport = Arc::new(FakeTransport::replying("error", Some("db down")));
        let client = MutationClient::new(transport, Some(1));

        let outcome = client.submit("8", false).await.unwrap();
        assert_eq!(outcome, MutationOutcome::Failure { message: "db down".to_string() });
        assert!(captured_contains("db down"));
    }

    #[tokio::test]
    async fn test_unknown_result_without_error_is_failure() {
        let client = MutationClient::new(Arc::new(FakeTransport::replying("nope", None)), Some(1));
        let outcome = client.submit("8", true).await.unwrap();
        assert!(matches!(outcome, MutationOutcome::Failure { message } if message.contains("nope")));
    }

    #[tokio::test]
    async fn test_transport_error_is_returned() {
        let transport = Arc::new(FakeTransport::failing(MutationError::Timeout(10_000)));
        let client = MutationClient::new(transport, Some(1));

        assert_eq!(client.submit("9", true).await, Err(MutationError::Timeout(10_000)));
        assert!(!client.is_in_flight("9"));
    }

    #[tokio::test]
    async fn test_missing_campaign_sends_nothing() {
        let transport = Arc::new(FakeTransport::replying("success", None));
        let client = MutationClient::new(transport.clone(), None);

        assert_eq!(client.submit("7", true).await, Err(MutationError::MissingCampaign));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_second_submit_for_same_voter_is_rejected() {
        let (tx, rx) = oneshot::channel();
        let transport = Arc::new(GatedTransport { gate: Mutex::new(Some(rx)) });
        let client = MutationClient::new(transport, Some(1));

        let first = client.submit("7", true);
        futures::pin_mut!(first);
        assert!(futures::poll!(first.as_mut()).is_pending());
        assert!(client.is_in_flight("7"));

        assert_eq!(
            client.submit("7", false).await,
            Err(MutationError::InFlight("7".to_string()))
        );

        tx.send(ValidationResponse { result: "success".to_string(), error: None }).unwrap();
        assert_eq!(first.await, Ok(MutationOutcome::Success { validated: true }));
        assert!(!client.is_in_flight("7"));
    }

    #[tokio::test]
    async fn test_different_voters_do_not_block_each_other() {
        let client = MutationClient::new(Arc::new(FakeTransport::replying("success", None)), Some(1));
        let (a, b) = futures::join!(client.submit("1", true), client.submit("2", false));
        assert_eq!(a, Ok(MutationOutcome::Success { validated: true }));
        assert_eq!(b, Ok(MutationOutcome::Success { validated: false }));
    }
}
