use arboard::Clipboard;
use ratatui::crossterm::event::KeyEvent;
use std::time::Instant;
use tracing::{debug, info, trace};

use crate::dataset::ProjectRecord;
use crate::domain::{Field, HELP_TEXT, InputTarget, Message, PDError, SortConfig, SortDirection};
use crate::inputter::{InputResult, Inputter};

// How many records one table page holds.
pub const PAGE_SIZE: usize = 5;

#[derive(Debug, PartialEq)]
pub enum Status {
    READY,
    QUITTING,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Modus {
    TABLE,
    POPUP,
    INPUT,
}

// One substring per filterable column. An empty string means the filter is
// inactive. `name` has no column of its own and matches the client field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub name: String,
    pub country: String,
    pub email: String,
    pub project: String,
    pub status: String,
}

// Everything the user controls about what the table shows. Owned by the
// Model, reset to defaults on startup, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub sort: Option<SortConfig>,
    pub filters: Filters,
    pub search: String,
    pub page: usize, // 1-based
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            sort: None,
            filters: Filters::default(),
            search: String::new(),
            page: 1,
        }
    }
}

// Index sequences into the record list, recomputed from scratch after every
// query change. Nothing in here is cached across interactions.
#[derive(Debug, Default)]
pub struct DerivedView {
    pub filtered: Vec<usize>,
    pub page_rows: Vec<usize>,
    pub total_pages: usize,
}

// Sorting the column that is already sorted ascending flips it to
// descending; any other constellation starts a fresh ascending sort.
pub fn toggle_sort(current: Option<SortConfig>, field: Field) -> SortConfig {
    match current {
        Some(cfg) if cfg.field == field && cfg.direction == SortDirection::ASCENDING => {
            SortConfig {
                field,
                direction: SortDirection::DESCENDING,
            }
        }
        _ => SortConfig {
            field,
            direction: SortDirection::ASCENDING,
        },
    }
}

// Stable argsort over the full record list. Comparison is raw byte-wise
// string ordering, case is not normalized.
fn ordering(projects: &[ProjectRecord], sort: Option<SortConfig>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..projects.len()).collect();
    if let Some(cfg) = sort {
        order.sort_by(|&a, &b| {
            let va = projects[a].field(cfg.field);
            let vb = projects[b].field(cfg.field);
            match cfg.direction {
                SortDirection::ASCENDING => va.cmp(vb),
                SortDirection::DESCENDING => vb.cmp(va),
            }
        });
    }
    order
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_search(project: &ProjectRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    project
        .values()
        .iter()
        .any(|value| value.to_lowercase().contains(&needle))
}

// A record passes when every non-empty filter matches its column. All five
// are required together, there is no OR between them.
fn matches_filters(project: &ProjectRecord, filters: &Filters) -> bool {
    contains_ci(&project.client, &filters.name)
        && contains_ci(&project.country, &filters.country)
        && contains_ci(&project.email, &filters.email)
        && contains_ci(&project.project, &filters.project)
        && contains_ci(&project.status, &filters.status)
}

// The whole pipeline: sort the full record list, filter the sorted order,
// slice out the requested page. Zero matches still report one empty page; a
// page outside the valid range yields an empty slice instead of an error.
pub fn derive_view(projects: &[ProjectRecord], query: &QueryState) -> DerivedView {
    let filtered: Vec<usize> = ordering(projects, query.sort)
        .into_iter()
        .filter(|&idx| {
            matches_search(&projects[idx], &query.search)
                && matches_filters(&projects[idx], &query.filters)
        })
        .collect();

    let total_pages = std::cmp::max(1, filtered.len().div_ceil(PAGE_SIZE));

    let begin = query.page.saturating_sub(1) * PAGE_SIZE;
    let end = std::cmp::min(begin + PAGE_SIZE, filtered.len());
    let page_rows = if begin < end {
        filtered[begin..end].to_vec()
    } else {
        Vec::new()
    };

    DerivedView {
        filtered,
        page_rows,
        total_pages,
    }
}

// Snapshot the UI renders from. Rebuilt by the model after every update so
// the drawing code never touches query logic.
pub struct UIData {
    pub rows: Vec<ProjectRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub sort: Option<SortConfig>,
    pub filters: Filters,
    pub search: String,
    pub selected_row: usize,
    pub show_popup: bool,
    pub popup_title: String,
    pub popup_message: String,
    pub cmdinput: InputResult,
    pub input_target: Option<InputTarget>,
    pub active_cmdinput: bool,
    pub status_message: String,
    pub last_status_message_update: Instant,
}

impl UIData {
    pub fn empty() -> Self {
        UIData {
            rows: Vec::new(),
            page: 1,
            total_pages: 1,
            filtered_count: 0,
            total_count: 0,
            sort: None,
            filters: Filters::default(),
            search: String::new(),
            selected_row: 0,
            show_popup: false,
            popup_title: String::new(),
            popup_message: String::new(),
            cmdinput: InputResult::default(),
            input_target: None,
            active_cmdinput: false,
            status_message: String::new(),
            last_status_message_update: Instant::now(),
        }
    }
}

pub struct Model {
    pub status: Status,
    modus: Modus,
    projects: Vec<ProjectRecord>,
    query: QueryState,
    query_backup: QueryState,
    derived: DerivedView,
    selected_row: usize,
    input: Inputter,
    input_target: Option<InputTarget>,
    last_input: InputResult,
    popup_title: String,
    popup_message: String,
    clipboard: Option<Clipboard>,
    status_message: String,
    last_status_message_update: Instant,
    uidata: UIData,
}

impl Model {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        info!("Loaded {} projects", projects.len());
        let mut model = Self {
            status: Status::READY,
            modus: Modus::TABLE,
            status_message: format!("Loaded {} projects", projects.len()),
            projects,
            query: QueryState::default(),
            query_backup: QueryState::default(),
            derived: DerivedView::default(),
            selected_row: 0,
            input: Inputter::default(),
            input_target: None,
            last_input: InputResult::default(),
            popup_title: String::new(),
            popup_message: String::new(),
            clipboard: Clipboard::new().ok(),
            last_status_message_update: Instant::now(),
            uidata: UIData::empty(),
        };
        model.recompute();
        model
    }

    pub fn get_uidata(&self) -> &UIData {
        &self.uidata
    }

    // While a prompt is open, key events bypass the normal keymap.
    pub fn raw_keyevents(&self) -> bool {
        self.modus == Modus::INPUT
    }

    pub fn quit(&mut self) {
        self.status = Status::QUITTING;
    }

    pub fn update(&mut self, message: Message) -> Result<(), PDError> {
        match self.modus {
            Modus::TABLE => match message {
                Message::Quit => self.quit(),
                Message::Help => self.show_help(),
                Message::MoveUp => self.move_selection_up(),
                Message::MoveDown => self.move_selection_down(),
                Message::PrevPage => self.previous_page(),
                Message::NextPage => self.next_page(),
                Message::SortBy(field) => self.sort_by(field),
                Message::Search => self.enter_input(InputTarget::SEARCH),
                Message::EditFilter(target) => self.enter_input(target),
                Message::CopyRow => self.copy_selected_row(),
                Message::Enter => self.show_record_details(),
                Message::ResetQuery => self.reset_query(),
                _ => (),
            },
            Modus::POPUP => match message {
                Message::Quit => self.quit(),
                Message::Exit | Message::Enter => self.close_popup(),
                _ => (),
            },
            Modus::INPUT => {
                if let Message::RawKey(key) = message {
                    self.raw_input(key);
                }
            }
        }
        Ok(())
    }

    // -------------------- derived state ---------------------- //

    fn recompute(&mut self) {
        self.derived = derive_view(&self.projects, &self.query);
        if self.selected_row >= self.derived.page_rows.len() {
            self.selected_row = self.derived.page_rows.len().saturating_sub(1);
        }
        self.update_uidata();
    }

    fn update_uidata(&mut self) {
        self.uidata = UIData {
            rows: self
                .derived
                .page_rows
                .iter()
                .map(|&idx| self.projects[idx].clone())
                .collect(),
            page: self.query.page,
            total_pages: self.derived.total_pages,
            filtered_count: self.derived.filtered.len(),
            total_count: self.projects.len(),
            sort: self.query.sort,
            filters: self.query.filters.clone(),
            search: self.query.search.clone(),
            selected_row: self.selected_row,
            show_popup: self.modus == Modus::POPUP,
            popup_title: self.popup_title.clone(),
            popup_message: self.popup_message.clone(),
            cmdinput: self.last_input.clone(),
            input_target: self.input_target,
            active_cmdinput: self.modus == Modus::INPUT,
            status_message: self.status_message.clone(),
            last_status_message_update: self.last_status_message_update,
        };
    }

    fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.last_status_message_update = Instant::now();
        self.update_uidata();
    }

    // -------------------- control handling ---------------------- //

    fn sort_by(&mut self, field: Field) {
        let cfg = toggle_sort(self.query.sort, field);
        self.query.sort = Some(cfg);
        debug!("Sorting by {} {}", cfg.field.label(), cfg.direction.label());
        self.recompute();
        self.set_status_message(format!(
            "Sorted by {} ({})",
            cfg.field.label(),
            cfg.direction.label()
        ));
    }

    fn previous_page(&mut self) {
        if self.query.page > 1 {
            self.query.page -= 1;
            self.selected_row = 0;
            self.recompute();
        }
    }

    fn next_page(&mut self) {
        if self.query.page < self.derived.total_pages {
            self.query.page += 1;
            self.selected_row = 0;
            self.recompute();
        }
    }

    fn move_selection_up(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
            self.update_uidata();
        }
    }

    fn move_selection_down(&mut self) {
        if self.selected_row + 1 < self.derived.page_rows.len() {
            self.selected_row += 1;
            self.update_uidata();
        }
    }

    fn reset_query(&mut self) {
        self.query = QueryState::default();
        self.selected_row = 0;
        self.recompute();
        self.set_status_message("Reset search, filters and sort");
    }

    fn enter_input(&mut self, target: InputTarget) {
        trace!("Editing {:?}", target);
        self.modus = Modus::INPUT;
        self.input_target = Some(target);
        self.query_backup = self.query.clone();
        let current = match target {
            InputTarget::SEARCH => self.query.search.as_str(),
            InputTarget::NAME => self.query.filters.name.as_str(),
            InputTarget::COUNTRY => self.query.filters.country.as_str(),
            InputTarget::EMAIL => self.query.filters.email.as_str(),
            InputTarget::PROJECT => self.query.filters.project.as_str(),
            InputTarget::STATUS => self.query.filters.status.as_str(),
        }
        .to_string();
        self.input.clear();
        self.input.set(&current);
        self.last_input = self.input.get();
        self.update_uidata();
    }

    // Editing is live. Every keystroke rewrites the edited parameter and
    // recomputes the view; Esc rolls the whole query back, Enter keeps it.
    fn raw_input(&mut self, key: KeyEvent) {
        self.last_input = self.input.read(key);
        if self.last_input.canceled {
            self.query = self.query_backup.clone();
            self.recompute();
        } else {
            let value = self.last_input.input.clone();
            self.apply_input_value(value);
        }
        if self.last_input.finished {
            self.modus = Modus::TABLE;
            self.input_target = None;
        }
        self.update_uidata();
    }

    fn apply_input_value(&mut self, value: String) {
        let Some(target) = self.input_target else {
            return;
        };
        let slot = match target {
            InputTarget::SEARCH => &mut self.query.search,
            InputTarget::NAME => &mut self.query.filters.name,
            InputTarget::COUNTRY => &mut self.query.filters.country,
            InputTarget::EMAIL => &mut self.query.filters.email,
            InputTarget::PROJECT => &mut self.query.filters.project,
            InputTarget::STATUS => &mut self.query.filters.status,
        };
        if *slot != value {
            *slot = value;
            // editing a filter or the search snaps back to the first page
            self.query.page = 1;
            self.recompute();
        }
    }

    fn show_help(&mut self) {
        self.open_popup("help", HELP_TEXT.to_string());
    }

    fn show_record_details(&mut self) {
        let Some(&idx) = self.derived.page_rows.get(self.selected_row) else {
            return;
        };
        let p = &self.projects[idx];
        let text = format!(
            "Client   {}\nCountry  {}\nEmail    {}\nProject  {}\nStatus   {}\nDate     {}\nImage    {}",
            p.client, p.country, p.email, p.project, p.status, p.date, p.image
        );
        let title = p.project.clone();
        self.open_popup(&title, text);
    }

    fn open_popup(&mut self, title: &str, message: String) {
        self.modus = Modus::POPUP;
        self.popup_title = title.to_string();
        self.popup_message = message;
        self.update_uidata();
    }

    fn close_popup(&mut self) {
        self.modus = Modus::TABLE;
        self.popup_message.clear();
        self.update_uidata();
    }

    fn wrap_cell_content(cell: &str) -> String {
        let needs_escaping = cell.contains('"');
        let needs_wrapping = cell.chars().any(|c| c == ' ' || c == '\t' || c == ',');
        let mut out = String::from(cell);

        if needs_escaping {
            out = out.replace('"', "\"\"");
        }
        if needs_wrapping {
            out = format!("\"{out}\"");
        }
        out
    }

    fn copy_selected_row(&mut self) {
        let Some(&idx) = self.derived.page_rows.get(self.selected_row) else {
            return;
        };
        let row = self.projects[idx]
            .values()
            .iter()
            .map(|value| Self::wrap_cell_content(value))
            .collect::<Vec<String>>()
            .join(",");

        let message = match self.clipboard.as_mut() {
            Some(clipboard) => match clipboard.set_text(row) {
                Ok(_) => "Copied row to clipboard".to_string(),
                Err(e) => {
                    trace!("Error copying to clipboard: {:?}", e);
                    "Clipboard error".to_string()
                }
            },
            None => "No clipboard available".to_string(),
        };
        self.set_status_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyCode;

    fn rec(client: &str, country: &str, status: &str) -> ProjectRecord {
        ProjectRecord {
            image: format!("https://example.com/{}.jpg", client.to_lowercase()),
            client: client.to_string(),
            country: country.to_string(),
            email: format!("{}@example.com", client.to_lowercase()),
            project: format!("{} Project", client),
            status: status.to_string(),
            date: "01/01/2024".to_string(),
        }
    }

    fn twelve() -> Vec<ProjectRecord> {
        (0..12)
            .map(|i| rec(&format!("Client{i:02}"), "USA", "Pending"))
            .collect()
    }

    fn page_clients(projects: &[ProjectRecord], view: &DerivedView) -> Vec<String> {
        view.page_rows
            .iter()
            .map(|&idx| projects[idx].client.clone())
            .collect()
    }

    fn key(code: KeyCode) -> Message {
        Message::RawKey(KeyEvent::from(code))
    }

    #[test]
    fn toggle_sort_alternates_direction() {
        let first = toggle_sort(None, Field::CLIENT);
        assert_eq!(first.direction, SortDirection::ASCENDING);

        let second = toggle_sort(Some(first), Field::CLIENT);
        assert_eq!(second.direction, SortDirection::DESCENDING);

        let third = toggle_sort(Some(second), Field::CLIENT);
        assert_eq!(third.direction, SortDirection::ASCENDING);
    }

    #[test]
    fn toggle_sort_new_field_starts_ascending() {
        let client_asc = toggle_sort(None, Field::CLIENT);
        let country = toggle_sort(Some(client_asc), Field::COUNTRY);
        assert_eq!(country.field, Field::COUNTRY);
        assert_eq!(country.direction, SortDirection::ASCENDING);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let projects = vec![
            rec("Beerus", "Japan", "Pending"),
            rec("Alfred", "Japan", "Pending"),
            rec("Champa", "Iceland", "Pending"),
        ];
        let query = QueryState {
            sort: Some(SortConfig {
                field: Field::COUNTRY,
                direction: SortDirection::ASCENDING,
            }),
            ..QueryState::default()
        };
        let view = derive_view(&projects, &query);
        // the two Japan records keep their input order
        assert_eq!(page_clients(&projects, &view), ["Champa", "Beerus", "Alfred"]);
    }

    #[test]
    fn sort_is_case_sensitive() {
        let projects = vec![
            rec("apple", "USA", "Pending"),
            rec("Banana", "USA", "Pending"),
        ];
        let query = QueryState {
            sort: Some(SortConfig {
                field: Field::CLIENT,
                direction: SortDirection::ASCENDING,
            }),
            ..QueryState::default()
        };
        let view = derive_view(&projects, &query);
        // raw byte order, uppercase sorts before lowercase
        assert_eq!(page_clients(&projects, &view), ["Banana", "apple"]);
    }

    // Filters are conjunctive: every non-empty filter must match. This is
    // the intended semantics, not the OR-leaking precedence of the original
    // composition.
    #[test]
    fn filters_require_every_match() {
        let projects = vec![
            rec("Ann", "USA", "Pending"),
            rec("Bob", "USA", "Complete"),
            rec("Cyd", "Germany", "Pending"),
            rec("Dee", "Australia", "Pending"),
        ];
        let query = QueryState {
            filters: Filters {
                country: "us".to_string(),
                status: "pending".to_string(),
                ..Filters::default()
            },
            ..QueryState::default()
        };
        let view = derive_view(&projects, &query);
        assert_eq!(page_clients(&projects, &view), ["Ann", "Dee"]);
    }

    #[test]
    fn name_filter_matches_client_field() {
        let mut charlie = rec("Charlie", "USA", "Pending");
        charlie.email = "alfonso@example.com".to_string();
        let projects = vec![rec("Alfred", "UK", "Pending"), charlie];
        let query = QueryState {
            filters: Filters {
                name: "alf".to_string(),
                ..Filters::default()
            },
            ..QueryState::default()
        };
        let view = derive_view(&projects, &query);
        // "alf" in Charlie's email does not count, name only checks client
        assert_eq!(page_clients(&projects, &view), ["Alfred"]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let projects = vec![rec("Alfred", "UK", "Pending"), rec("Bob", "USA", "Complete")];

        let query = QueryState {
            search: "ALFRED".to_string(),
            ..QueryState::default()
        };
        let view = derive_view(&projects, &query);
        assert_eq!(page_clients(&projects, &view), ["Alfred"]);

        let query = QueryState {
            search: "complete".to_string(),
            ..QueryState::default()
        };
        let view = derive_view(&projects, &query);
        assert_eq!(page_clients(&projects, &view), ["Bob"]);

        // the image URI participates in the search as well
        let query = QueryState {
            search: "JPG".to_string(),
            ..QueryState::default()
        };
        let view = derive_view(&projects, &query);
        assert_eq!(view.filtered.len(), 2);
    }

    #[test]
    fn empty_search_matches_everything() {
        let projects = twelve();
        let view = derive_view(&projects, &QueryState::default());
        assert_eq!(view.filtered.len(), 12);
    }

    #[test]
    fn pagination_slices_exactly() {
        let projects = twelve();

        let view = derive_view(&projects, &QueryState::default());
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.page_rows.len(), 5);

        let page2 = QueryState {
            page: 2,
            ..QueryState::default()
        };
        assert_eq!(derive_view(&projects, &page2).page_rows.len(), 5);

        let page3 = QueryState {
            page: 3,
            ..QueryState::default()
        };
        let view = derive_view(&projects, &page3);
        assert_eq!(page_clients(&projects, &view), ["Client10", "Client11"]);
    }

    // A query matching nothing still reports one (empty) page.
    #[test]
    fn empty_filter_result_still_has_one_page() {
        let projects = twelve();
        let query = QueryState {
            filters: Filters {
                status: "nosuchstatus".to_string(),
                ..Filters::default()
            },
            ..QueryState::default()
        };
        let view = derive_view(&projects, &query);
        assert_eq!(view.total_pages, 1);
        assert!(view.page_rows.is_empty());
    }

    #[test]
    fn out_of_range_page_yields_empty_slice() {
        let projects = twelve();
        let query = QueryState {
            page: 99,
            ..QueryState::default()
        };
        let view = derive_view(&projects, &query);
        assert_eq!(view.total_pages, 3);
        assert!(view.page_rows.is_empty());
    }

    #[test]
    fn sort_messages_follow_end_to_end_scenario() {
        let projects = ["Beerus", "Alfred", "Champa", "Zeno", "Goku", "Vegeta"]
            .map(|client| rec(client, "Japan", "Pending"))
            .to_vec();
        let mut model = Model::new(projects);

        model.update(Message::SortBy(Field::CLIENT)).unwrap();
        assert_eq!(model.get_uidata().rows[0].client, "Alfred");

        model.update(Message::SortBy(Field::CLIENT)).unwrap();
        assert_eq!(model.get_uidata().rows[0].client, "Zeno");
        assert_eq!(
            model.get_uidata().sort.unwrap().direction,
            SortDirection::DESCENDING
        );
    }

    #[test]
    fn page_navigation_stops_at_boundaries() {
        let mut model = Model::new(twelve());
        assert_eq!(model.get_uidata().page, 1);

        model.update(Message::PrevPage).unwrap();
        assert_eq!(model.get_uidata().page, 1);

        model.update(Message::NextPage).unwrap();
        model.update(Message::NextPage).unwrap();
        assert_eq!(model.get_uidata().page, 3);

        model.update(Message::NextPage).unwrap();
        assert_eq!(model.get_uidata().page, 3);
    }

    #[test]
    fn filter_editing_is_live_and_resets_page() {
        let mut model = Model::new(twelve());
        model.update(Message::NextPage).unwrap();
        assert_eq!(model.get_uidata().page, 2);

        model
            .update(Message::EditFilter(InputTarget::COUNTRY))
            .unwrap();
        assert!(model.raw_keyevents());

        model.update(key(KeyCode::Char('u'))).unwrap();
        let uidata = model.get_uidata();
        assert_eq!(uidata.filters.country, "u");
        assert_eq!(uidata.page, 1);

        model.update(key(KeyCode::Enter)).unwrap();
        assert_eq!(model.get_uidata().filters.country, "u");
        assert!(!model.raw_keyevents());
    }

    #[test]
    fn canceling_input_restores_query() {
        let mut model = Model::new(twelve());
        model.update(Message::NextPage).unwrap();

        model
            .update(Message::EditFilter(InputTarget::STATUS))
            .unwrap();
        model.update(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(model.get_uidata().filtered_count, 0);

        model.update(key(KeyCode::Esc)).unwrap();
        let uidata = model.get_uidata();
        assert_eq!(uidata.filters.status, "");
        assert_eq!(uidata.page, 2);
        assert_eq!(uidata.filtered_count, 12);
        assert!(!model.raw_keyevents());
    }

    #[test]
    fn selection_is_bounded_by_page_slice() {
        let mut model = Model::new(twelve());
        for _ in 0..8 {
            model.update(Message::MoveDown).unwrap();
        }
        assert_eq!(model.get_uidata().selected_row, 4);

        for _ in 0..8 {
            model.update(Message::MoveUp).unwrap();
        }
        assert_eq!(model.get_uidata().selected_row, 0);
    }

    #[test]
    fn help_popup_opens_and_closes() {
        let mut model = Model::new(twelve());
        model.update(Message::Help).unwrap();
        let uidata = model.get_uidata();
        assert!(uidata.show_popup);
        assert_eq!(uidata.popup_message, HELP_TEXT);

        // table keys are inert while the popup is open
        model.update(Message::NextPage).unwrap();
        assert_eq!(model.get_uidata().page, 1);

        model.update(Message::Exit).unwrap();
        assert!(!model.get_uidata().show_popup);
    }

    #[test]
    fn quit_message_sets_quitting() {
        let mut model = Model::new(twelve());
        model.update(Message::Quit).unwrap();
        assert_eq!(model.status, Status::QUITTING);
    }
}
