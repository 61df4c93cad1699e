//! Submission gating and failure handling.

use std::cell::{Cell, RefCell};

use asmt_draft::{AssignmentDraft, UploadCoordinator};
use asmt_model::{AssignmentMeta, PendingFile, PersistedMedia, PreviewRef};
use asmt_submit::{
    AssignmentPayload, FileUploadService, NotificationSink, ServiceError, SubmissionService,
    SubmitError, SubmitMode, can_proceed, run_upload, submit_draft,
};

#[derive(Default)]
struct RecordingBackend {
    calls: Cell<usize>,
    reject_with: Option<String>,
}

impl SubmissionService for RecordingBackend {
    fn create(&self, _payload: &AssignmentPayload) -> Result<(), ServiceError> {
        self.calls.set(self.calls.get() + 1);
        match &self.reject_with {
            Some(message) => Err(ServiceError::new(message.clone())),
            None => Ok(()),
        }
    }

    fn update(&self, payload: &AssignmentPayload) -> Result<(), ServiceError> {
        self.create(payload)
    }
}

#[derive(Default)]
struct RecordingSink {
    successes: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl NotificationSink for RecordingSink {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

struct FailingTransport;

impl FileUploadService for FailingTransport {
    fn upload(&self, _file: &PendingFile) -> Result<PersistedMedia, ServiceError> {
        Err(ServiceError::new("gateway timeout"))
    }
}

fn valid_draft() -> AssignmentDraft {
    let mut draft = AssignmentDraft::new();
    draft.meta = AssignmentMeta {
        code: "RUST-01".to_string(),
        name: "Rust basics".to_string(),
        duration_minutes: 60,
        instructions: "Answer everything".to_string(),
    };
    draft.set_question_text(0, "Which keyword moves a value?").unwrap();
    draft.add_answer(0).unwrap();
    draft.set_answer_text(0, 0, "move").unwrap();
    draft.set_correct_answer(0, 0).unwrap();
    draft
}

fn pending(name: &str) -> PendingFile {
    PendingFile::new(name, 64, PreviewRef::detached(format!("blob:{name}"))).unwrap()
}

#[test]
fn submit_blocked_while_upload_in_flight() {
    let mut draft = valid_draft();
    let mut coordinator = UploadCoordinator::default();
    let file = pending("a.png");
    let _ticket = coordinator.begin(&draft, 0, None, &file).unwrap();

    let backend = RecordingBackend::default();
    let sink = RecordingSink::default();
    let result = submit_draft(&mut draft, &coordinator, SubmitMode::Create, &backend, &sink);

    assert!(matches!(result, Err(SubmitError::UploadInFlight)));
    // The backend is never reached while the coordinator is uploading.
    assert_eq!(backend.calls.get(), 0);
    assert!(!can_proceed(&mut draft, &coordinator));
}

#[test]
fn submit_blocked_by_validation_errors() {
    let mut draft = AssignmentDraft::new();
    let coordinator = UploadCoordinator::default();
    let backend = RecordingBackend::default();
    let sink = RecordingSink::default();

    let result = submit_draft(&mut draft, &coordinator, SubmitMode::Create, &backend, &sink);
    match result {
        Err(SubmitError::Invalid { report }) => {
            assert!(report.error_count() > 0);
            assert_eq!(report.first_invalid, Some(0));
        }
        other => panic!("expected validation rejection, got {other:?}"),
    }
    assert_eq!(backend.calls.get(), 0);
}

#[test]
fn submission_failure_preserves_draft_and_notifies() {
    let mut draft = valid_draft();
    let coordinator = UploadCoordinator::default();
    let backend = RecordingBackend {
        calls: Cell::new(0),
        reject_with: Some("duplicate code".to_string()),
    };
    let sink = RecordingSink::default();

    let result = submit_draft(&mut draft, &coordinator, SubmitMode::Create, &backend, &sink);
    assert!(matches!(result, Err(SubmitError::Service(_))));
    assert_eq!(backend.calls.get(), 1);
    assert_eq!(sink.errors.borrow().as_slice(), ["duplicate code"]);
    // Draft preserved in full for a user-initiated retry.
    assert_eq!(draft.len(), 1);
    assert_eq!(draft.question(0).unwrap().answers.len(), 1);
}

#[test]
fn successful_submit_notifies_per_mode() {
    let mut draft = valid_draft();
    let coordinator = UploadCoordinator::default();
    let backend = RecordingBackend::default();
    let sink = RecordingSink::default();

    submit_draft(&mut draft, &coordinator, SubmitMode::Update, &backend, &sink).unwrap();
    assert_eq!(sink.successes.borrow().as_slice(), ["Assignment updated"]);
    assert!(can_proceed(&mut draft, &coordinator));
}

#[test]
fn failed_upload_surfaces_error_and_leaves_draft_unchanged() {
    let mut draft = valid_draft();
    let mut coordinator = UploadCoordinator::default();
    let sink = RecordingSink::default();

    let result = run_upload(
        &mut coordinator,
        &mut draft,
        0,
        None,
        pending("a.png"),
        &FailingTransport,
        &sink,
    );
    assert!(matches!(result, Err(SubmitError::Upload(_))));
    assert!(!coordinator.is_uploading());
    assert_eq!(sink.errors.borrow().len(), 1);
    assert!(draft.question(0).unwrap().media.is_empty());
}

#[test]
fn oversized_upload_never_reaches_transport() {
    struct PanickingTransport;
    impl FileUploadService for PanickingTransport {
        fn upload(&self, _file: &PendingFile) -> Result<PersistedMedia, ServiceError> {
            panic!("transport must not be called for an oversized file");
        }
    }

    let mut draft = valid_draft();
    let mut coordinator = UploadCoordinator::default();
    let sink = RecordingSink::default();
    let file = PendingFile::new(
        "huge.png",
        11 * 1024 * 1024,
        PreviewRef::detached("blob:huge"),
    )
    .unwrap();

    let result = run_upload(
        &mut coordinator,
        &mut draft,
        0,
        None,
        file,
        &PanickingTransport,
        &sink,
    );
    assert!(matches!(
        result,
        Err(SubmitError::Upload(asmt_draft::UploadError::FileTooLarge { .. }))
    ));
    assert_eq!(sink.errors.borrow().len(), 1);
}
