use arboard::Clipboard;
use crossterm::event::KeyEvent;
use ratatui::widgets::ListState;

use crate::config::Config;
use crate::constants::ui::PAGE_SIZE;
use crate::error::{Error, Result};
use crate::formatter::{coerce_content, format_content, highlight_keywords};
use crate::image::ImageRef;
use crate::input::{self, Action, InputContext};
use crate::search::filter_ids;
use crate::store::{CatalogStore, Record};

/// Which pane receives scroll keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Records,
    Formatted,
    Raw,
}

impl Focus {
    pub const fn next(self) -> Self {
        match self {
            Self::Records => Self::Formatted,
            Self::Formatted => Self::Raw,
            Self::Raw => Self::Records,
        }
    }
}

/// Everything shown for the selected record.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub id: String,
    /// Structured content markup.
    pub formatted: String,
    /// Raw content with keyword emphasis only.
    pub highlighted_raw: String,
    pub image: ImageRef,
    pub fields: Vec<(String, String)>,
}

impl DetailView {
    /// Build the detail view for a record; fails on an unusable image reference.
    pub fn build(record: &Record) -> Result<Self> {
        let raw = coerce_content(record.content.as_deref());
        let image = ImageRef::parse(&record.image_ref)?;

        Ok(Self {
            id: record.id.clone(),
            formatted: format_content(&raw),
            highlighted_raw: highlight_keywords(&raw),
            image,
            fields: record.fields.clone(),
        })
    }
}

pub struct App {
    pub config: Config,
    pub store: Option<CatalogStore>,
    /// Why the catalog could not be loaded.
    pub load_error: Option<String>,
    /// Indices into `store.ids()` currently listed.
    pub visible: Vec<usize>,
    pub record_list_state: ListState,
    pub detail: Option<DetailView>,
    /// Failure while preparing the selected record.
    pub detail_error: Option<String>,
    pub focus: Focus,
    pub formatted_scroll: u16,
    pub raw_scroll: u16,
    pub search_active: bool,
    pub search_query: String,
    pub show_help: bool,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let loaded = CatalogStore::open(&config.catalog_path);
        let mut app = Self::empty(config);
        app.install(loaded);
        app
    }

    /// App over an already loaded catalog.
    pub fn with_store(config: Config, store: CatalogStore) -> Self {
        let mut app = Self::empty(config);
        app.install(Ok(store));
        app
    }

    fn empty(config: Config) -> Self {
        Self {
            config,
            store: None,
            load_error: None,
            visible: Vec::new(),
            record_list_state: ListState::default(),
            detail: None,
            detail_error: None,
            focus: Focus::default(),
            formatted_scroll: 0,
            raw_scroll: 0,
            search_active: false,
            search_query: String::new(),
            show_help: false,
            error_message: None,
            status_message: None,
            should_quit: false,
        }
    }

    fn install(&mut self, loaded: Result<CatalogStore>) {
        match loaded {
            Ok(store) => {
                self.visible = (0..store.ids().len()).collect();
                self.store = Some(store);
                self.load_error = None;
                self.select_index(if self.visible.is_empty() { None } else { Some(0) });
            }
            Err(e) => {
                tracing::warn!("Catalog load failed: {e}");
                self.store = None;
                self.visible.clear();
                self.load_error = Some(e.to_string());
                self.select_index(None);
            }
        }
    }

    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub const fn has_modal(&self) -> bool {
        self.show_help || self.error_message.is_some() || self.status_message.is_some()
    }

    /// Identifier of the highlighted list row.
    pub fn selected_id(&self) -> Option<&str> {
        let store = self.store.as_ref()?;
        let row = self.record_list_state.selected()?;
        let idx = *self.visible.get(row)?;
        store.ids().get(idx).map(String::as_str)
    }

    /// Select a row of the visible list and rebuild the detail view.
    pub fn select_index(&mut self, row: Option<usize>) {
        self.record_list_state.select(row);
        self.formatted_scroll = 0;
        self.raw_scroll = 0;
        self.refresh_detail();
    }

    fn refresh_detail(&mut self) {
        self.detail = None;
        self.detail_error = None;

        let Some(id) = self.selected_id().map(str::to_string) else {
            return;
        };
        let Some(record) = self.store.as_ref().and_then(|s| s.get(&id)) else {
            return;
        };

        tracing::debug!("Selected record {id}");
        match DetailView::build(record) {
            Ok(detail) => self.detail = Some(detail),
            Err(e) => {
                tracing::warn!("Failed to prepare record {id}: {e}");
                self.detail_error =
                    Some(format!("An error occurred while processing record {id}: {e}"));
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctx = InputContext {
            search_active: self.search_active,
            has_modal: self.has_modal(),
        };
        let action = input::dispatch(key, &ctx);
        self.apply(action);
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Dismiss => {
                self.show_help = false;
                self.error_message = None;
                self.status_message = None;
            }
            Action::Up => self.scroll_or_move(-1),
            Action::Down => self.scroll_or_move(1),
            #[allow(clippy::cast_possible_wrap)]
            Action::PageUp => self.scroll_or_move(-(PAGE_SIZE as isize)),
            #[allow(clippy::cast_possible_wrap)]
            Action::PageDown => self.scroll_or_move(PAGE_SIZE as isize),
            Action::First => self.move_to(0),
            Action::Last => self.move_to(self.visible.len().saturating_sub(1)),
            Action::CycleFocus => self.focus = self.focus.next(),
            Action::StartSearch => {
                self.search_active = true;
                self.focus = Focus::Records;
            }
            Action::SearchInput(c) => {
                self.search_query.push(c);
                self.apply_filter();
            }
            Action::SearchBackspace => {
                self.search_query.pop();
                self.apply_filter();
            }
            Action::SearchSubmit => self.search_active = false,
            Action::SearchCancel => {
                self.search_active = false;
                self.search_query.clear();
                self.apply_filter();
            }
            Action::CopyImageRef => self.copy_image_ref(),
            Action::Reload => self.reload(),
        }
    }

    fn scroll_or_move(&mut self, delta: isize) {
        let step = u16::try_from(delta.unsigned_abs()).unwrap_or(u16::MAX);
        let scroll = match self.focus {
            Focus::Records => {
                let current = self.record_list_state.selected().unwrap_or(0);
                self.move_to(current.saturating_add_signed(delta));
                return;
            }
            Focus::Formatted => &mut self.formatted_scroll,
            Focus::Raw => &mut self.raw_scroll,
        };
        *scroll = if delta < 0 {
            scroll.saturating_sub(step)
        } else {
            scroll.saturating_add(step)
        };
    }

    fn move_to(&mut self, row: usize) {
        if self.visible.is_empty() {
            return;
        }
        let row = row.min(self.visible.len() - 1);
        if self.record_list_state.selected() != Some(row) {
            self.select_index(Some(row));
        }
    }

    /// Re-filter the list, keeping the current record selected when still listed.
    fn apply_filter(&mut self) {
        let Some(store) = &self.store else { return };
        let current = self
            .record_list_state
            .selected()
            .and_then(|row| self.visible.get(row).copied());

        self.visible = filter_ids(&self.search_query, store.ids());

        let row = current
            .and_then(|idx| self.visible.iter().position(|&v| v == idx))
            .or(if self.visible.is_empty() { None } else { Some(0) });
        let new_idx = row.and_then(|r| self.visible.get(r).copied());

        if new_idx == current && new_idx.is_some() {
            // same record, only its row moved
            self.record_list_state.select(row);
        } else {
            self.select_index(row);
        }
    }

    fn copy_image_ref(&mut self) {
        let Some(detail) = &self.detail else {
            self.error_message = Some("No image reference to copy".to_string());
            return;
        };
        let text = detail.image.as_str();

        let copied = Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.clone()))
            .map_err(|e| Error::Clipboard(e.to_string()));

        match copied {
            Ok(()) => self.status_message = Some(format!("Copied {text}")),
            Err(e) => {
                tracing::warn!("{e}");
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn reload(&mut self) {
        let selected = self.selected_id().map(str::to_string);
        let loaded = CatalogStore::open(&self.config.catalog_path);
        let ok = loaded.is_ok();
        self.search_query.clear();
        self.search_active = false;
        self.install(loaded);

        if let (Some(id), Some(store)) = (selected, &self.store) {
            if let Some(row) = store.ids().iter().position(|s| *s == id) {
                self.select_index(Some(row));
            }
        }
        if ok {
            let count = self.store.as_ref().map_or(0, CatalogStore::len);
            self.status_message = Some(format!("Reloaded {count} records"));
        }
    }
}
