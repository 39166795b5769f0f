//! End-to-end signup flow against in-memory port implementations.
//!
//! Exercises the presentation contract the way a real screen would: edit,
//! blur, read the per-field views, submit, and observe the emitted
//! notifications and navigation requests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use cad_app::SignupController;
use cad_core::form::{FieldKey, RegistrationPayload, SubmitStatus};
use cad_core::ports::{
    Destination, NavigationPort, NotificationPort, RegistrationError, RegistrationPort,
};
use cad_core::validation::schema::messages;

#[derive(Default)]
struct RecordingRegistration {
    payloads: Mutex<Vec<RegistrationPayload>>,
    fail_next: Mutex<bool>,
}

#[async_trait]
impl RegistrationPort for RecordingRegistration {
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), RegistrationError> {
        self.payloads.lock().await.push(payload.clone());
        if std::mem::take(&mut *self.fail_next.lock().await) {
            return Err(RegistrationError::Service {
                status: 500,
                message: "internal error".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNotifications {
    messages: Mutex<Vec<(bool, String)>>,
}

#[async_trait]
impl NotificationPort for RecordingNotifications {
    async fn registration_succeeded(&self, message: &str) -> anyhow::Result<()> {
        self.messages.lock().await.push((true, message.to_string()));
        Ok(())
    }

    async fn registration_failed(&self, message: &str) -> anyhow::Result<()> {
        self.messages.lock().await.push((false, message.to_string()));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNavigation {
    requests: Mutex<Vec<Destination>>,
}

#[async_trait]
impl NavigationPort for RecordingNavigation {
    async fn navigate_to(&self, destination: Destination) -> anyhow::Result<()> {
        self.requests.lock().await.push(destination);
        Ok(())
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct Harness {
    controller: SignupController,
    registration: Arc<RecordingRegistration>,
    notifications: Arc<RecordingNotifications>,
    navigation: Arc<RecordingNavigation>,
}

fn harness() -> Harness {
    init_tracing();
    let registration = Arc::new(RecordingRegistration::default());
    let notifications = Arc::new(RecordingNotifications::default());
    let navigation = Arc::new(RecordingNavigation::default());
    Harness {
        controller: SignupController::new(
            registration.clone(),
            notifications.clone(),
            navigation.clone(),
        ),
        registration,
        notifications,
        navigation,
    }
}

async fn type_valid_form(controller: &SignupController) {
    for (key, value) in [
        (FieldKey::Name, "Ana"),
        (FieldKey::SurName, "Silva"),
        (FieldKey::Email, "ana@x.com"),
        (FieldKey::Pwd, "secret1"),
        (FieldKey::RegNum, "123"),
    ] {
        controller.update_field(key, value).await;
        controller.blur_field(key).await;
    }
    controller.set_terms_accepted(true).await;
}

#[tokio::test]
async fn blur_surfaces_errors_and_fixing_the_value_clears_them() {
    let h = harness();

    h.controller.update_field(FieldKey::Email, "not-an-email").await;
    let view = h.controller.field(FieldKey::Email).await;
    assert!(!view.touched);
    assert!(view.error.is_none(), "errors wait for the first blur");

    h.controller.blur_field(FieldKey::Email).await;
    let view = h.controller.field(FieldKey::Email).await;
    assert!(view.touched);
    assert_eq!(view.error.as_deref(), Some(messages::EMAIL_FORMAT));

    h.controller.update_field(FieldKey::Email, "ana@x.com").await;
    let view = h.controller.field(FieldKey::Email).await;
    assert!(view.error.is_none());
}

#[tokio::test]
async fn full_signup_registers_notifies_and_navigates_to_login() {
    let h = harness();
    type_valid_form(&h.controller).await;

    let state = h.controller.submit().await;
    assert_eq!(state.status, SubmitStatus::Success);

    let payloads = h.registration.payloads.lock().await;
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].email, "ana@x.com");

    let notices = h.notifications.messages.lock().await;
    assert_eq!(
        notices.as_slice(),
        [(true, "User registered successfully.".to_string())]
    );

    let navigations = h.navigation.requests.lock().await;
    assert_eq!(navigations.as_slice(), [Destination::Login]);
}

#[tokio::test]
async fn rejected_submit_keeps_the_user_on_the_form_with_all_errors_visible() {
    let h = harness();

    let state = h.controller.submit().await;
    assert_eq!(state.status, SubmitStatus::Idle);
    assert_eq!(state.errors.len(), FieldKey::ALL.len());
    assert_eq!(state.terms_error.as_deref(), Some(messages::TERMS_REQUIRED));

    assert!(h.registration.payloads.lock().await.is_empty());
    assert!(h.notifications.messages.lock().await.is_empty());
    assert!(h.navigation.requests.lock().await.is_empty());
}

#[tokio::test]
async fn service_failure_notifies_generically_and_allows_a_retry() {
    let h = harness();
    type_valid_form(&h.controller).await;
    *h.registration.fail_next.lock().await = true;

    let state = h.controller.submit().await;
    assert_eq!(state.status, SubmitStatus::Idle);

    {
        let notices = h.notifications.messages.lock().await;
        assert_eq!(
            notices.as_slice(),
            [(false, "Failed to register user.".to_string())],
            "the service detail must never reach the user"
        );
        assert!(h.navigation.requests.lock().await.is_empty());
    }

    let state = h.controller.submit().await;
    assert_eq!(state.status, SubmitStatus::Success);
    assert_eq!(h.registration.payloads.lock().await.len(), 2);
}
