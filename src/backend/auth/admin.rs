//! Administrator allow-list
//!
//! The set of e-mail addresses allowed to list every message. Loaded from
//! configuration at startup; addresses compare case-insensitively.

use std::collections::HashSet;
use std::sync::Arc;

use crate::shared::Principal;

#[derive(Debug, Clone, Default)]
pub struct AdminAllowList {
    emails: Arc<HashSet<String>>,
}

impl AdminAllowList {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let emails = emails
            .into_iter()
            .map(|email| email.as_ref().trim().to_lowercase())
            .filter(|email| !email.is_empty())
            .collect();
        Self {
            emails: Arc::new(emails),
        }
    }

    pub fn contains(&self, email: &str) -> bool {
        self.emails.contains(&email.trim().to_lowercase())
    }

    /// A principal without an e-mail claim is never an admin
    pub fn is_admin(&self, principal: &Principal) -> bool {
        principal
            .email
            .as_deref()
            .is_some_and(|email| self.contains(email))
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}
