//! Resource registration/edit workflow.
//!
//! [`ResourceForm`] holds everything the resource modal knows: whether it
//! is open, which resource it edits and the current field values. The
//! modal component binds its inputs to it and forwards user actions;
//! the form decides what happens and tells the component which request
//! to send and which feedback to show.
//!
//! ```text
//!   Closed ──show(create)──▶ OpenForCreate ─┐
//!     ▲  ──show(edit)────▶ OpenForEdit ─────┤ submit (valid)
//!     │                        ▲            ▼
//!     │   complete(Ok)         └──────── Submitting
//!     └────────────────────────────────── complete(Err) returns to open
//! ```

use crate::services::ResourceApi;
use crate::types::{
    AppResult, RegisterResourceRequest, ResourceModalData, ToastMessage, UpdateResourceRequest,
};

pub const SUCCESS_MESSAGE: &str = "Success";
pub const INVALID_FORM_MESSAGE: &str = "Hrmmm, are you sure everything in the form is correct?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    OpenForCreate,
    OpenForEdit,
    Submitting,
}

/// Values currently entered in the modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceFields {
    pub name: String,
    pub address: String,
    pub is_default: bool,
}

impl ResourceFields {
    /// Name and address are required; the default flag is free.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.address.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The request variant produced by an accepted submit.
#[derive(Clone, Debug, PartialEq)]
pub enum ResourceRequest {
    Register(RegisterResourceRequest),
    Update(UpdateResourceRequest),
}

impl ResourceRequest {
    /// Issue the matching service call, once.
    pub async fn send(&self, api: &dyn ResourceApi) -> AppResult<()> {
        match self {
            ResourceRequest::Register(request) => api.register(request).await,
            ResourceRequest::Update(request) => api.update_resource(request).await,
        }
    }
}

/// Outcome of [`ResourceForm::submit`].
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    /// Closed, or a request is already in flight.
    Ignored,
    /// A required field is empty; nothing was sent.
    Invalid(ToastMessage),
    /// Validation passed; the caller must send this request and report
    /// the result through [`ResourceForm::complete`].
    Send(ResourceRequest),
}

/// Outcome of [`ResourceForm::complete`].
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    /// Saved; the modal closed and the parent should refresh.
    Saved(ToastMessage),
    /// The call failed; the modal is open again with values intact.
    Failed(ToastMessage),
    /// No submit was pending.
    Stale,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResourceForm {
    state: ModalState,
    fields: ResourceFields,
    editing_id: Option<String>,
}

impl Default for ResourceForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceForm {
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
            fields: ResourceFields::default(),
            editing_id: None,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn fields(&self) -> &ResourceFields {
        &self.fields
    }

    pub fn is_open(&self) -> bool {
        self.state != ModalState::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.state == ModalState::Submitting
    }

    pub fn set_name(&mut self, name: String) {
        self.fields.name = name;
    }

    pub fn set_address(&mut self, address: String) {
        self.fields.address = address;
    }

    pub fn set_default(&mut self, is_default: bool) {
        self.fields.is_default = is_default;
    }

    /// Open the modal, pre-filling the fields when `data` asks for an edit.
    pub fn show(&mut self, data: Option<&ResourceModalData>) {
        if self.is_submitting() {
            log::warn!("Ignoring show() while a resource request is in flight");
            return;
        }

        match data {
            Some(data) if data.is_edit => match &data.id {
                Some(id) => {
                    self.editing_id = Some(id.clone());
                    self.fields = ResourceFields {
                        name: data.resource_name.clone(),
                        address: data.resource_address.clone(),
                        is_default: data.is_default,
                    };
                    self.state = ModalState::OpenForEdit;
                }
                None => {
                    log::warn!("Edit requested without a resource id, opening in create mode");
                    self.open_for_create();
                }
            },
            _ => self.open_for_create(),
        }
    }

    fn open_for_create(&mut self) {
        self.editing_id = None;
        self.fields.clear();
        self.state = ModalState::OpenForCreate;
    }

    /// Validate and build the request for the current mode.
    pub fn submit(&mut self) -> Submission {
        let mode = self.state;
        if !matches!(mode, ModalState::OpenForCreate | ModalState::OpenForEdit) {
            return Submission::Ignored;
        }

        if !self.fields.is_valid() {
            return Submission::Invalid(ToastMessage::new(INVALID_FORM_MESSAGE));
        }

        let request = match (&self.editing_id, mode) {
            (Some(id), ModalState::OpenForEdit) => ResourceRequest::Update(UpdateResourceRequest {
                id: id.clone(),
                name: self.fields.name.clone(),
                address: self.fields.address.clone(),
                is_default: self.fields.is_default,
            }),
            _ => ResourceRequest::Register(RegisterResourceRequest {
                name: self.fields.name.clone(),
                address: self.fields.address.clone(),
                is_default: self.fields.is_default,
            }),
        };

        self.state = ModalState::Submitting;
        Submission::Send(request)
    }

    /// Apply the result of the request returned by [`submit`](Self::submit).
    pub fn complete(&mut self, result: AppResult<()>) -> Completion {
        if !self.is_submitting() {
            return Completion::Stale;
        }

        match result {
            Ok(()) => {
                log::info!("Resource saved");
                self.fields.clear();
                self.editing_id = None;
                self.state = ModalState::Closed;
                Completion::Saved(ToastMessage::new(SUCCESS_MESSAGE))
            }
            Err(e) => {
                log::error!("Failed to save resource: {}", e);
                self.state = if self.editing_id.is_some() {
                    ModalState::OpenForEdit
                } else {
                    ModalState::OpenForCreate
                };
                Completion::Failed(ToastMessage::new(format!("Could not save the resource. {}", e)))
            }
        }
    }

    /// Dismiss the modal, discarding entered values.
    pub fn close(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.fields.clear();
        self.editing_id = None;
        self.state = ModalState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppError, ResourceResponse};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingApi {
        registered: RefCell<Vec<RegisterResourceRequest>>,
        updated: RefCell<Vec<UpdateResourceRequest>>,
        fail_with: Option<AppError>,
    }

    impl RecordingApi {
        fn outcome(&self) -> AppResult<()> {
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }

        fn calls(&self) -> usize {
            self.registered.borrow().len() + self.updated.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl ResourceApi for RecordingApi {
        async fn get_resources(&self) -> AppResult<Vec<ResourceResponse>> {
            Ok(Vec::new())
        }

        async fn register(&self, request: &RegisterResourceRequest) -> AppResult<()> {
            self.registered.borrow_mut().push(request.clone());
            self.outcome()
        }

        async fn update_resource(&self, request: &UpdateResourceRequest) -> AppResult<()> {
            self.updated.borrow_mut().push(request.clone());
            self.outcome()
        }

        async fn remove_resource(&self, _id: &str) -> AppResult<()> {
            self.outcome()
        }
    }

    /// Mirrors what the modal component does on a submit click.
    fn run_submit(form: &mut ResourceForm, api: &RecordingApi) -> Option<Completion> {
        match form.submit() {
            Submission::Send(request) => {
                let result = block_on(request.send(api));
                Some(form.complete(result))
            }
            _ => None,
        }
    }

    fn printer() -> ResourceModalData {
        ResourceModalData::edit("r1", "Printer", "10.0.0.5", true)
    }

    #[test]
    fn test_show_without_data_opens_create_mode_empty() {
        let mut form = ResourceForm::new();
        form.set_name("leftover".to_string());

        form.show(None);

        assert_eq!(form.state(), ModalState::OpenForCreate);
        assert_eq!(form.fields(), &ResourceFields::default());
    }

    #[test]
    fn test_show_edit_prefills_fields() {
        let mut form = ResourceForm::new();
        form.show(Some(&printer()));

        assert_eq!(form.state(), ModalState::OpenForEdit);
        assert_eq!(form.fields().name, "Printer");
        assert_eq!(form.fields().address, "10.0.0.5");
        assert!(form.fields().is_default);
    }

    #[test]
    fn test_show_edit_is_idempotent() {
        let mut form = ResourceForm::new();
        form.show(Some(&printer()));
        let first = form.clone();

        form.set_name("Changed".to_string());
        form.show(Some(&printer()));

        assert_eq!(form, first);
    }

    #[test]
    fn test_edit_without_id_falls_back_to_create() {
        let mut form = ResourceForm::new();
        let data = ResourceModalData {
            id: None,
            ..printer()
        };
        form.show(Some(&data));

        assert_eq!(form.state(), ModalState::OpenForCreate);
        assert_eq!(form.fields(), &ResourceFields::default());
    }

    #[test]
    fn test_empty_name_is_rejected_without_service_call() {
        let api = RecordingApi::default();
        let mut form = ResourceForm::new();
        form.show(None);
        form.set_address("10.0.0.1".to_string());

        let submission = form.submit();

        assert_eq!(
            submission,
            Submission::Invalid(ToastMessage::new(INVALID_FORM_MESSAGE))
        );
        assert_eq!(form.state(), ModalState::OpenForCreate);
        assert_eq!(form.fields().address, "10.0.0.1");
        assert!(run_submit(&mut form, &api).is_none());
        assert_eq!(api.calls(), 0);
    }

    #[test]
    fn test_empty_address_is_rejected() {
        let mut form = ResourceForm::new();
        form.show(Some(&ResourceModalData::edit("r1", "Printer", "", false)));

        assert!(matches!(form.submit(), Submission::Invalid(_)));
        assert_eq!(form.state(), ModalState::OpenForEdit);
    }

    #[test]
    fn test_create_sends_register_once() {
        let api = RecordingApi::default();
        let mut form = ResourceForm::new();
        form.show(None);
        form.set_name("Front door".to_string());
        form.set_address("10.0.0.1".to_string());
        form.set_default(true);

        let completion = run_submit(&mut form, &api);

        assert_eq!(
            *api.registered.borrow(),
            vec![RegisterResourceRequest {
                name: "Front door".to_string(),
                address: "10.0.0.1".to_string(),
                is_default: true,
            }]
        );
        assert!(api.updated.borrow().is_empty());
        assert_eq!(completion, Some(Completion::Saved(ToastMessage::new(SUCCESS_MESSAGE))));
    }

    #[test]
    fn test_edit_sends_update_with_original_id() {
        let api = RecordingApi::default();
        let mut form = ResourceForm::new();
        form.show(Some(&printer()));

        run_submit(&mut form, &api);

        assert_eq!(
            *api.updated.borrow(),
            vec![UpdateResourceRequest {
                id: "r1".to_string(),
                name: "Printer".to_string(),
                address: "10.0.0.5".to_string(),
                is_default: true,
            }]
        );
        assert!(api.registered.borrow().is_empty());
    }

    #[test]
    fn test_success_clears_and_closes() {
        let api = RecordingApi::default();
        let mut form = ResourceForm::new();
        form.show(Some(&printer()));

        let completion = run_submit(&mut form, &api);

        assert!(matches!(completion, Some(Completion::Saved(_))));
        assert_eq!(form.state(), ModalState::Closed);
        assert_eq!(form.fields(), &ResourceFields::default());
    }

    #[test]
    fn test_failure_keeps_form_open_with_values() {
        let api = RecordingApi {
            fail_with: Some(AppError::from_status(500, "database unavailable")),
            ..Default::default()
        };
        let mut form = ResourceForm::new();
        form.show(Some(&printer()));
        form.set_address("10.0.0.9".to_string());

        let completion = run_submit(&mut form, &api);

        match completion {
            Some(Completion::Failed(toast)) => assert!(toast.message.contains("database unavailable")),
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(form.state(), ModalState::OpenForEdit);
        assert_eq!(form.fields().name, "Printer");
        assert_eq!(form.fields().address, "10.0.0.9");

        // A retry still targets the same resource.
        assert!(matches!(
            form.submit(),
            Submission::Send(ResourceRequest::Update(UpdateResourceRequest { ref id, .. })) if id == "r1"
        ));
    }

    #[test]
    fn test_create_failure_returns_to_create_mode() {
        let api = RecordingApi {
            fail_with: Some(AppError::Network("offline".to_string())),
            ..Default::default()
        };
        let mut form = ResourceForm::new();
        form.show(None);
        form.set_name("Front door".to_string());
        form.set_address("10.0.0.1".to_string());

        run_submit(&mut form, &api);

        assert_eq!(form.state(), ModalState::OpenForCreate);
        assert_eq!(form.fields().name, "Front door");
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        let mut form = ResourceForm::new();
        form.show(Some(&printer()));

        assert!(matches!(form.submit(), Submission::Send(_)));
        assert_eq!(form.submit(), Submission::Ignored);
        assert!(form.is_submitting());
    }

    #[test]
    fn test_submit_when_closed_is_ignored() {
        let mut form = ResourceForm::new();
        assert_eq!(form.submit(), Submission::Ignored);
    }

    #[test]
    fn test_close_clears_without_service_call() {
        let api = RecordingApi::default();
        let mut form = ResourceForm::new();
        form.show(Some(&printer()));

        form.close();

        assert_eq!(form.state(), ModalState::Closed);
        assert_eq!(form.fields(), &ResourceFields::default());
        assert_eq!(api.calls(), 0);

        // Reopening for create must not remember the edited resource.
        form.show(None);
        form.set_name("New".to_string());
        form.set_address("10.0.0.2".to_string());
        assert!(matches!(form.submit(), Submission::Send(ResourceRequest::Register(_))));
    }

    #[test]
    fn test_close_and_show_ignored_while_submitting() {
        let mut form = ResourceForm::new();
        form.show(Some(&printer()));
        form.submit();

        form.close();
        form.show(None);

        assert!(form.is_submitting());
        assert_eq!(form.fields().name, "Printer");
    }

    #[test]
    fn test_complete_without_pending_submit_is_stale() {
        let mut form = ResourceForm::new();
        form.show(None);
        assert_eq!(form.complete(Ok(())), Completion::Stale);
        assert_eq!(form.state(), ModalState::OpenForCreate);
    }
}
