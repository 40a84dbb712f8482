//! Generic list page: paging, search, filters, modal editor and deletes.
//!
//! `ListState` is plain data so the same transitions drive both the Leptos
//! signals in the browser and the async `ListPage` used in tests.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use seva_kendra_shared::form::{FieldError, FormValues, form_set};
use seva_kendra_shared::pagination::Pagination;
use seva_kendra_shared::record::{Record, RecordPage};
use seva_kendra_shared::schema::CategorySchema;

use crate::api::records::{ListQuery, RecordsApi};
use crate::error::ApiError;
use crate::notify::Notice;
use crate::request::HttpClient;
use crate::storage::{KeyValueStore, Navigator};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Create,
    Edit(Record),
    View(Record),
    ConfirmDelete(Record),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// Whether the form editor is showing.
    pub fn is_editing(&self) -> bool {
        matches!(self, ModalState::Create | ModalState::Edit(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitCommand {
    Create(FormValues),
    Update { id: String, values: FormValues },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub notice: Option<Notice>,
    /// Exactly one list reload is owed
    pub refetch: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub schema: &'static CategorySchema,
    pub records: Vec<Record>,
    pub pagination: Pagination,
    pub loading: bool,
    pub submitting: bool,
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub modal: ModalState,
    pub form: FormValues,
    pub form_errors: Vec<FieldError>,
}

impl ListState {
    pub fn new(schema: &'static CategorySchema, page_size: u32) -> Self {
        Self {
            schema,
            records: Vec::new(),
            pagination: Pagination::new(page_size),
            loading: false,
            submitting: false,
            search: String::new(),
            filters: BTreeMap::new(),
            modal: ModalState::Closed,
            form: schema.blank_form(),
            form_errors: Vec::new(),
        }
    }

    // =========================================================
    // Fetching
    // =========================================================

    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.pagination.page,
            limit: self.pagination.limit,
            search: self.search.trim().to_string(),
            filters: self.filters.clone(),
        }
    }

    pub fn begin_fetch(&mut self) -> ListQuery {
        self.loading = true;
        self.query()
    }

    /// Apply a list response. A failure keeps the previous rows on screen.
    pub fn finish_fetch(&mut self, result: Result<RecordPage, ApiError>) -> Option<Notice> {
        self.loading = false;
        match result {
            Ok(page) => {
                self.records = page.records;
                self.pagination = page.pagination;
                None
            }
            Err(err) => {
                log_error!("{}: list request failed: {}", self.schema.title, err);
                Notice::from_error(
                    &format!("Failed to fetch {}", self.schema.title.to_lowercase()),
                    &err,
                )
            }
        }
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.pagination.page = 1;
    }

    pub fn set_filter(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            self.filters.remove(name);
        } else {
            self.filters.insert(name.to_string(), value.to_string());
        }
        self.pagination.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.search.clear();
        self.pagination.page = 1;
    }

    /// Move to `page`; returns false when it is out of range or current.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let page = self.pagination.clamp_page(page);
        if page == self.pagination.page {
            return false;
        }
        self.pagination.page = page;
        true
    }

    // =========================================================
    // Modal
    // =========================================================

    pub fn open_create(&mut self) {
        self.form = self.schema.blank_form();
        self.form_errors.clear();
        self.modal = ModalState::Create;
    }

    pub fn open_edit(&mut self, record: Record) {
        self.form = self.schema.form_from_record(&record);
        self.form_errors.clear();
        self.modal = ModalState::Edit(record);
    }

    pub fn open_view(&mut self, record: Record) {
        self.modal = ModalState::View(record);
    }

    pub fn request_delete(&mut self, record: Record) {
        self.modal = ModalState::ConfirmDelete(record);
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
        self.form = self.schema.blank_form();
        self.form_errors.clear();
        self.submitting = false;
    }

    pub fn set_field(&mut self, path: &str, value: Value) {
        form_set(&mut self.form, path, value);
        self.form_errors.retain(|e| e.field != path);
    }

    pub fn field_error(&self, path: &str) -> Option<&str> {
        self.form_errors
            .iter()
            .find(|e| e.field == path)
            .map(|e| e.message.as_str())
    }

    // =========================================================
    // Mutations
    // =========================================================

    /// Check the form and produce the call to make.
    ///
    /// Returns `Err(None)` when no editor is open or a submit is in flight.
    pub fn begin_submit(&mut self) -> Result<SubmitCommand, Option<Notice>> {
        if self.submitting {
            return Err(None);
        }
        let command = match &self.modal {
            ModalState::Create => SubmitCommand::Create(self.form.clone()),
            ModalState::Edit(record) => SubmitCommand::Update {
                id: record.id.clone(),
                values: self.form.clone(),
            },
            _ => return Err(None),
        };
        self.form_errors = self.schema.validate_form(&self.form);
        if let Some(first) = self.form_errors.first() {
            return Err(Some(Notice::error(first.message.clone())));
        }
        self.submitting = true;
        Ok(command)
    }

    pub fn finish_submit(&mut self, result: Result<Record, ApiError>) -> SubmitOutcome {
        self.submitting = false;
        let (done, action) = match self.modal {
            ModalState::Edit(_) => ("updated", "update"),
            _ => ("created", "create"),
        };
        match result {
            Ok(_) => {
                self.close_modal();
                SubmitOutcome {
                    notice: Some(Notice::success(format!(
                        "{} {} successfully",
                        self.schema.noun, done
                    ))),
                    refetch: true,
                }
            }
            Err(err) => {
                log_error!("{}: {} failed: {}", self.schema.title, action, err);
                SubmitOutcome {
                    notice: Notice::from_error(
                        &format!("Failed to {} {}", action, self.schema.noun.to_lowercase()),
                        &err,
                    ),
                    refetch: false,
                }
            }
        }
    }

    /// Id of the record awaiting confirmation, if any.
    pub fn begin_delete(&mut self) -> Option<String> {
        if self.submitting {
            return None;
        }
        let ModalState::ConfirmDelete(record) = &self.modal else {
            return None;
        };
        self.submitting = true;
        Some(record.id.clone())
    }

    /// Close the dialog and reload whatever the backend answered.
    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> SubmitOutcome {
        self.close_modal();
        let notice = match result {
            Ok(()) => Some(Notice::success(format!(
                "{} deleted successfully",
                self.schema.noun
            ))),
            Err(err) => {
                log_error!("{}: delete failed: {}", self.schema.title, err);
                Notice::from_error(
                    &format!("Failed to delete {}", self.schema.noun.to_lowercase()),
                    &err,
                )
            }
        };
        SubmitOutcome {
            notice,
            refetch: true,
        }
    }
}

// =========================================================
// Data source
// =========================================================

/// Backend operations a list page needs.
#[async_trait(?Send)]
pub trait RecordSource {
    fn schema(&self) -> &'static CategorySchema;
    async fn list(&self, query: &ListQuery) -> Result<RecordPage, ApiError>;
    async fn create(&self, values: &FormValues) -> Result<Record, ApiError>;
    async fn update(&self, id: &str, values: &FormValues) -> Result<Record, ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl<C: HttpClient, S: KeyValueStore, N: Navigator> RecordSource for RecordsApi<C, S, N> {
    fn schema(&self) -> &'static CategorySchema {
        RecordsApi::schema(self)
    }

    async fn list(&self, query: &ListQuery) -> Result<RecordPage, ApiError> {
        self.get_all(query).await
    }

    async fn create(&self, values: &FormValues) -> Result<Record, ApiError> {
        RecordsApi::create(self, values).await
    }

    async fn update(&self, id: &str, values: &FormValues) -> Result<Record, ApiError> {
        RecordsApi::update(self, id, values).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        RecordsApi::delete(self, id).await
    }
}

/// Drives a `ListState` against a `RecordSource`, collecting notices.
pub struct ListPage<A> {
    source: A,
    pub state: ListState,
    pub notices: Vec<Notice>,
}

impl<A: RecordSource> ListPage<A> {
    pub fn new(source: A, page_size: u32) -> Self {
        let state = ListState::new(source.schema(), page_size);
        Self {
            source,
            state,
            notices: Vec::new(),
        }
    }

    fn push(&mut self, notice: Option<Notice>) {
        self.notices.extend(notice);
    }

    pub async fn refresh(&mut self) {
        let query = self.state.begin_fetch();
        let result = self.source.list(&query).await;
        let notice = self.state.finish_fetch(result);
        self.push(notice);
    }

    /// Submit the open editor; returns whether it succeeded.
    pub async fn submit(&mut self) -> bool {
        let command = match self.state.begin_submit() {
            Ok(command) => command,
            Err(notice) => {
                self.push(notice);
                return false;
            }
        };
        let result = match &command {
            SubmitCommand::Create(values) => self.source.create(values).await,
            SubmitCommand::Update { id, values } => self.source.update(id, values).await,
        };
        let outcome = self.state.finish_submit(result);
        self.push(outcome.notice);
        if outcome.refetch {
            self.refresh().await;
        }
        outcome.refetch
    }

    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.state.begin_delete() else {
            return;
        };
        let result = self.source.delete(&id).await;
        let outcome = self.state.finish_delete(result);
        self.push(outcome.notice);
        if outcome.refetch {
            self.refresh().await;
        }
    }

    pub async fn search(&mut self, term: &str) {
        self.state.set_search(term);
        self.refresh().await;
    }

    pub async fn filter(&mut self, name: &str, value: &str) {
        self.state.set_filter(name, value);
        self.refresh().await;
    }

    pub async fn go_to_page(&mut self, page: u32) {
        if self.state.go_to_page(page) {
            self.refresh().await;
        }
    }
}

// =========================================================
// Debounce
// =========================================================

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Generation counter: only the newest scheduled ticket may fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn schedule(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }

    /// Drop every pending ticket.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}
