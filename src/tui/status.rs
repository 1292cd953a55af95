//! Status bar — the current key, selection progress, and the last notice.

use crate::session::Session;
use crate::theory::{Family, Swara};

/// Severity of a status-bar notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A one-line message shown until the next action replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// "S R2 G? M1 P D? N? S'" style summary of what has been chosen so far.
pub fn selection_summary(session: &Session) -> String {
    let selection = session.selection();
    let mut parts = Vec::with_capacity(8);
    parts.push(Swara::Sa.token().to_string());
    for family in Family::MOVABLE {
        let part = match selection.get(family) {
            Some(swara) => swara.token().to_string(),
            None => format!("{}?", family.label()),
        };
        parts.push(part);
        if family == Family::Ma {
            parts.push(Swara::Pa.token().to_string());
        }
    }
    parts.push(Swara::TaraSa.token().to_string());
    parts.join(" ")
}

/// Families that still need a variant, in scale order.
pub fn missing_families(session: &Session) -> Vec<Family> {
    Family::MOVABLE
        .into_iter()
        .filter(|&f| session.selection().get(f).is_none())
        .collect()
}
