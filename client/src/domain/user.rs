//! User data model.

use std::fmt;

/// Validation errors returned by [`NewUser::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The name was empty once trimmed of whitespace.
    EmptyName,
    /// The email was empty once trimmed of whitespace.
    EmptyEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// User identifier assigned by whichever source created the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directory user as returned by the remote service or the mock source.
///
/// ## Invariants
/// - `id` is unique within the source that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Build a user from its parts.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Source-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Candidate submitted for creation.
///
/// ## Invariants
/// - `name` and `email` are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Validate and construct a creation candidate.
    ///
    /// # Examples
    /// ```
    /// use client::domain::{NewUser, UserValidationError};
    ///
    /// let candidate = NewUser::new(" ana ", "ana@x.com").expect("valid candidate");
    /// assert_eq!(candidate.name(), "ana");
    /// assert_eq!(
    ///     NewUser::new("ana", "   "),
    ///     Err(UserValidationError::EmptyEmail)
    /// );
    /// ```
    pub fn new(
        name: impl AsRef<str>,
        email: impl AsRef<str>,
    ) -> Result<Self, UserValidationError> {
        let trimmed_name = name.as_ref().trim();
        if trimmed_name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        let trimmed_email = email.as_ref().trim();
        if trimmed_email.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self {
            name: trimmed_name.to_owned(),
            email: trimmed_email.to_owned(),
        })
    }

    /// Candidate name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Candidate email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Promote the candidate to a user carrying `id`.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}
