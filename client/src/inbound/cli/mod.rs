//! Terminal presentation of the user directory.
//!
//! [`UserListView`] owns the displayed list; the data-access layer never
//! mutates it. Each load or submission derives a [`StatusMessage`] from the
//! result's provenance so fallback data is always called out.

use std::io::{self, Write};

use crate::domain::ports::UserDirectory;
use crate::domain::{FetchResult, NewUser, User, UserValidationError};

const USERS_LOADED: &str = "users loaded";
const USER_CREATED: &str = "user created";
const NO_USERS: &str = "no users";

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// The remote service served the request.
    Success,
    /// Fallback data is being shown.
    Error,
}

/// Status line shown above the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Text shown to the user.
    pub text: String,
    /// Severity used to style the line.
    pub kind: MessageKind,
}

impl StatusMessage {
    fn from_result<T>(result: &FetchResult<T>, success_text: &str) -> Self {
        match result.message() {
            Some(message) => Self {
                text: message.to_owned(),
                kind: MessageKind::Error,
            },
            None => Self {
                text: success_text.to_owned(),
                kind: MessageKind::Success,
            },
        }
    }
}

/// Presentation state: the displayed users plus the latest status line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListView {
    users: Vec<User>,
    status: Option<StatusMessage>,
}

impl UserListView {
    /// Users currently displayed.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Latest status line, if any operation has completed.
    #[must_use]
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Replace the displayed list with a freshly loaded result.
    pub fn load(&mut self, result: FetchResult<Vec<User>>) {
        self.status = Some(StatusMessage::from_result(&result, USERS_LOADED));
        self.users = result.into_payload();
    }

    /// Append a newly created user.
    pub fn push_created(&mut self, result: FetchResult<User>) {
        self.status = Some(StatusMessage::from_result(&result, USER_CREATED));
        self.users.push(result.into_payload());
    }

    /// Write the status line followed by one line per user.
    ///
    /// # Errors
    ///
    /// Propagates failures from `out`.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        if let Some(status) = &self.status {
            let marker = match status.kind {
                MessageKind::Success => "ok",
                MessageKind::Error => "warning",
            };
            writeln!(out, "[{marker}] {}", status.text)?;
        }
        if self.users.is_empty() {
            return writeln!(out, "{NO_USERS}");
        }
        for user in &self.users {
            writeln!(out, "{} <{}>", user.name(), user.email())?;
        }
        Ok(())
    }
}

/// Load the directory into `view`.
pub async fn load_users(directory: &dyn UserDirectory, view: &mut UserListView) {
    view.load(directory.get_users().await);
}

/// Validate the form input, create the user, and append it to `view`.
///
/// # Errors
///
/// Returns [`UserValidationError`] without calling the directory when either
/// field is blank.
pub async fn submit_user(
    directory: &dyn UserDirectory,
    view: &mut UserListView,
    name: &str,
    email: &str,
) -> Result<(), UserValidationError> {
    let candidate = NewUser::new(name, email)?;
    view.push_created(directory.create_user(candidate).await);
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Coverage for presentation state transitions and rendering.

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use rstest::rstest;

    use super::*;
    use crate::domain::UserId;

    struct ScriptedDirectory {
        fallback: bool,
        creates: AtomicUsize,
    }

    impl ScriptedDirectory {
        fn new(fallback: bool) -> Self {
            Self {
                fallback,
                creates: AtomicUsize::new(0),
            }
        }

        fn wrap<T>(&self, payload: T) -> FetchResult<T> {
            if self.fallback {
                FetchResult::mock(payload, "server error — showing fallback data")
            } else {
                FetchResult::remote(payload)
            }
        }
    }

    #[async_trait]
    impl UserDirectory for ScriptedDirectory {
        async fn get_users(&self) -> FetchResult<Vec<User>> {
            self.wrap(vec![User::new(9, "lu", "lu@x.com")])
        }

        async fn create_user(&self, candidate: NewUser) -> FetchResult<User> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            self.wrap(candidate.into_user(UserId::new(42)))
        }
    }

    fn rendered(view: &UserListView) -> String {
        let mut out = Vec::new();
        view.render(&mut out).expect("render to buffer");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[rstest]
    fn empty_view_renders_placeholder() {
        assert_eq!(rendered(&UserListView::default()), "no users\n");
    }

    #[rstest]
    #[tokio::test]
    async fn remote_load_reports_success() {
        let mut view = UserListView::default();
        load_users(&ScriptedDirectory::new(false), &mut view).await;

        assert_eq!(
            view.status(),
            Some(&StatusMessage {
                text: "users loaded".to_owned(),
                kind: MessageKind::Success,
            })
        );
        assert_eq!(rendered(&view), "[ok] users loaded\nlu <lu@x.com>\n");
    }

    #[rstest]
    #[tokio::test]
    async fn fallback_load_surfaces_message_as_error() {
        let mut view = UserListView::default();
        load_users(&ScriptedDirectory::new(true), &mut view).await;

        let status = view.status().expect("status set");
        assert_eq!(status.kind, MessageKind::Error);
        assert_eq!(status.text, "server error — showing fallback data");
        assert_eq!(view.users().len(), 1);
    }

    #[rstest]
    #[case(false, MessageKind::Success)]
    #[case(true, MessageKind::Error)]
    #[tokio::test]
    async fn submission_appends_created_user(#[case] fallback: bool, #[case] kind: MessageKind) {
        let directory = ScriptedDirectory::new(fallback);
        let mut view = UserListView::default();
        load_users(&directory, &mut view).await;

        submit_user(&directory, &mut view, " ana ", "ana@x.com")
            .await
            .expect("valid submission");

        assert_eq!(view.users().len(), 2);
        assert_eq!(view.users()[1], User::new(42, "ana", "ana@x.com"));
        assert_eq!(view.status().map(|status| status.kind), Some(kind));
    }

    #[rstest]
    #[tokio::test]
    async fn blank_submission_never_reaches_directory() {
        let directory = ScriptedDirectory::new(false);
        let mut view = UserListView::default();

        let error = submit_user(&directory, &mut view, "ana", "  ")
            .await
            .expect_err("blank email rejected");

        assert_eq!(error, UserValidationError::EmptyEmail);
        assert_eq!(directory.creates.load(Ordering::SeqCst), 0);
        assert!(view.users().is_empty());
        assert!(view.status().is_none());
    }

    #[rstest]
    fn load_replaces_previous_users() {
        let mut view = UserListView::default();
        view.load(FetchResult::remote(vec![User::new(1, "a", "a@x.com")]));
        view.load(FetchResult::mock(Vec::new(), "resource not found — showing fallback data"));

        assert!(view.users().is_empty());
        assert_eq!(
            rendered(&view),
            "[warning] resource not found — showing fallback data\nno users\n"
        );
    }
}
