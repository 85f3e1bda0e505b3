use std::sync::Arc;

use shared::{
    domain::ParameterField,
    error::ValidationError,
    protocol::{PredictionRequest, PredictionResult},
};
use tokio::sync::broadcast;
use tracing::{debug, error, info};

pub mod error;
pub mod host;
pub mod input;
pub mod transport;

pub use error::PredictionError;
pub use host::{ModalFlag, ModalHost};
pub use input::{DecimalInput, ParameterInputs};
pub use transport::{HttpPredictionTransport, PredictionTransport, DEFAULT_PREDICTION_ENDPOINT};

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Success(PredictionResult),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    FieldUpdated {
        field: ParameterField,
        value: String,
    },
    StateChanged(RequestState),
}

/// What the presentation layer should draw right now.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalView<'a> {
    Hidden,
    Recommendation(&'a PredictionResult),
    InputCollection {
        fields: [(ParameterField, &'a str); 3],
        error: Option<&'a str>,
        loading: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation refused the inputs; no request was sent.
    Invalid(ValidationError),
    Predicted(PredictionResult),
    /// The request failed. Logged only, nothing is shown to the user.
    Failed,
}

/// Drives the calculator modal: keystroke-gated inputs, one prediction
/// request per submission, and the idle/loading/success/error view state.
///
/// There is no request fencing. A host that calls [`begin_submit`] again
/// while a request is in flight gets a second request, and whichever
/// [`finish_submit`] runs last wins.
///
/// [`begin_submit`]: RequestLifecycleController::begin_submit
/// [`finish_submit`]: RequestLifecycleController::finish_submit
pub struct RequestLifecycleController {
    transport: Arc<dyn PredictionTransport>,
    host: Arc<dyn ModalHost>,
    inputs: ParameterInputs,
    loading: bool,
    error: Option<String>,
    result: Option<PredictionResult>,
    events: broadcast::Sender<ControllerEvent>,
}

impl RequestLifecycleController {
    pub fn new(transport: Arc<dyn PredictionTransport>, host: Arc<dyn ModalHost>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            transport,
            host,
            inputs: ParameterInputs::default(),
            loading: false,
            error: None,
            result: None,
            events,
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ControllerEvent> {
        self.events.subscribe()
    }

    /// For hosts that drive the request themselves between
    /// `begin_submit` and `finish_submit`.
    pub fn transport(&self) -> Arc<dyn PredictionTransport> {
        Arc::clone(&self.transport)
    }

    /// Replaces a field's text. Returns false, leaving the field untouched,
    /// when `raw` is not a decimal prefix.
    pub fn update_field(&mut self, field: ParameterField, raw: &str) -> bool {
        if !self.inputs.get_mut(field).try_set(raw) {
            return false;
        }
        self.emit_field(field);
        true
    }

    pub fn type_char(&mut self, field: ParameterField, ch: char) -> bool {
        if !self.inputs.get_mut(field).try_append(ch) {
            return false;
        }
        self.emit_field(field);
        true
    }

    pub fn backspace(&mut self, field: ParameterField) -> Option<char> {
        let removed = self.inputs.get_mut(field).backspace();
        if removed.is_some() {
            self.emit_field(field);
        }
        removed
    }

    pub fn field(&self, field: ParameterField) -> &str {
        self.inputs.get(field).as_str()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn state(&self) -> RequestState {
        if self.loading {
            RequestState::Loading
        } else if let Some(result) = &self.result {
            RequestState::Success(result.clone())
        } else if let Some(message) = &self.error {
            RequestState::Error(message.clone())
        } else {
            RequestState::Idle
        }
    }

    pub fn view(&self) -> ModalView<'_> {
        if !self.host.is_open() {
            return ModalView::Hidden;
        }
        if let Some(result) = &self.result {
            return ModalView::Recommendation(result);
        }
        ModalView::InputCollection {
            fields: ParameterField::ALL.map(|field| (field, self.field(field))),
            error: self.error(),
            loading: self.loading,
        }
    }

    /// Validates the inputs and enters `Loading`. The caller is expected to
    /// send the returned request and hand the outcome to [`finish_submit`].
    ///
    /// [`finish_submit`]: RequestLifecycleController::finish_submit
    pub fn begin_submit(&mut self) -> Result<PredictionRequest, ValidationError> {
        let request = match self.inputs.parse() {
            Ok(request) => request,
            Err(err) => {
                self.error = Some(err.to_string());
                self.emit_state();
                return Err(err);
            }
        };

        self.loading = true;
        self.emit_state();
        debug!(
            battery_capacity = request.battery_capacity,
            hourly_consumption = request.hourly_consumption,
            current_charge = request.current_charge,
            "prediction request started"
        );
        Ok(request)
    }

    /// Settles a request started by [`begin_submit`]. Either way the error
    /// text, inputs and loading flag are cleared.
    ///
    /// [`begin_submit`]: RequestLifecycleController::begin_submit
    pub fn finish_submit(
        &mut self,
        outcome: Result<PredictionResult, PredictionError>,
    ) -> SubmitOutcome {
        let outcome = match outcome {
            Ok(result) => {
                info!(decision = %result.decision, "prediction received");
                self.result = Some(result.clone());
                SubmitOutcome::Predicted(result)
            }
            Err(err) => {
                error!(error = %err, "prediction request failed");
                SubmitOutcome::Failed
            }
        };

        self.loading = false;
        self.error = None;
        self.inputs.clear_all();
        self.emit_state();
        outcome
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(err) => return SubmitOutcome::Invalid(err),
        };

        let outcome = self.transport().predict(&request).await;
        self.finish_submit(outcome)
    }

    /// Drops the recommendation and returns to input collection.
    pub fn reset(&mut self) {
        if self.result.take().is_some() {
            self.emit_state();
        }
    }

    /// Opens the modal on a fresh form: empty inputs, no result, no error.
    /// A request still in flight from before can land afterwards.
    pub fn open(&mut self) {
        self.host.open();
        self.inputs.clear_all();
        self.result = None;
        self.error = None;
        self.loading = false;
        self.emit_state();
    }

    pub fn close(&self) {
        self.host.close();
    }

    fn emit_field(&self, field: ParameterField) {
        let _ = self.events.send(ControllerEvent::FieldUpdated {
            field,
            value: self.field(field).to_string(),
        });
    }

    fn emit_state(&self) {
        let _ = self.events.send(ControllerEvent::StateChanged(self.state()));
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
