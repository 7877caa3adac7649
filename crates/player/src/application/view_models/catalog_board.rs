//! Catalog board: the GM's four catalog lists plus one draft input per kind
//!
//! Creating an entry is split in three so the UI never holds the board across
//! an await: `begin_create` validates the draft and marks the kind busy,
//! `submit_entry` does the network work, and `finish_create` writes back only
//! what the request changed.

use roster_domain::{CatalogKind, CatalogName};

use crate::application::error::ClientError;
use crate::application::services::{CatalogLists, CatalogService};

pub const NOT_AUTHORIZED: &str = "Not authorized (are you the GM?)";
const CREATE_FALLBACK: &str = "Could not create the entry.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogBoard {
    pub lists: CatalogLists,
    drafts: [String; 4],
    in_flight: [bool; 4],
    pub message: Option<String>,
}

/// Result of one create request.
#[derive(Debug)]
pub enum CreateOutcome {
    /// The POST succeeded; carries the follow-up reload.
    Created(Result<CatalogLists, ClientError>),
    Rejected(ClientError),
}

fn slot(kind: CatalogKind) -> usize {
    match kind {
        CatalogKind::Race => 0,
        CatalogKind::Skill => 1,
        CatalogKind::Power => 2,
        CatalogKind::Equipment => 3,
    }
}

impl CatalogBoard {
    pub fn draft(&self, kind: CatalogKind) -> &str {
        &self.drafts[slot(kind)]
    }

    pub fn set_draft(&mut self, kind: CatalogKind, value: impl Into<String>) {
        self.drafts[slot(kind)] = value.into();
    }

    pub fn is_busy(&self, kind: CatalogKind) -> bool {
        self.in_flight[slot(kind)]
    }

    /// Apply the result of a full reload. Any failure empties every list.
    pub fn apply_load(&mut self, result: Result<CatalogLists, ClientError>) {
        match result {
            Ok(lists) => {
                self.lists = lists;
                self.message = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog load failed");
                self.lists = CatalogLists::default();
                self.message = Some(NOT_AUTHORIZED.to_string());
            }
        }
    }

    /// Validate the draft for `kind`; an empty draft is a silent no-op.
    pub fn pending_name(&self, kind: CatalogKind) -> Option<Result<CatalogName, ClientError>> {
        let draft = self.draft(kind);
        if draft.trim().is_empty() {
            return None;
        }
        Some(CatalogName::new(draft).map_err(ClientError::from))
    }

    /// Claim `kind` for a create request. Returns `None` when there is nothing
    /// to send: a blank draft, an invalid one (reported in `message`), or a
    /// request for this kind already running.
    pub fn begin_create(&mut self, kind: CatalogKind) -> Option<CatalogName> {
        if self.is_busy(kind) {
            return None;
        }
        match self.pending_name(kind)? {
            Ok(name) => {
                self.in_flight[slot(kind)] = true;
                Some(name)
            }
            Err(e) => {
                self.message = Some(e.user_message(CREATE_FALLBACK));
                None
            }
        }
    }

    /// Release `kind` and apply the request's outcome. The draft is cleared
    /// only if it still holds the name that was sent.
    pub fn finish_create(&mut self, kind: CatalogKind, sent: &CatalogName, outcome: CreateOutcome) {
        self.in_flight[slot(kind)] = false;
        match outcome {
            CreateOutcome::Created(reloaded) => {
                if self.draft(kind).trim() == sent.as_str() {
                    self.set_draft(kind, "");
                }
                self.apply_load(reloaded);
            }
            CreateOutcome::Rejected(e) if e.is_unauthorized() => {
                self.message = Some(NOT_AUTHORIZED.to_string());
            }
            CreateOutcome::Rejected(e) => self.message = Some(e.user_message(CREATE_FALLBACK)),
        }
    }
}

/// POST the entry and, if it was accepted, reload all four lists.
pub async fn submit_entry(
    service: &CatalogService,
    kind: CatalogKind,
    name: &CatalogName,
) -> CreateOutcome {
    match service.create(kind, name).await {
        Ok(_) => CreateOutcome::Created(service.list_all().await),
        Err(e) => CreateOutcome::Rejected(e),
    }
}
