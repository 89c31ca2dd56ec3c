use std::io::Error;

use derive_setters::Setters;
use ratatui::crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum PDError {
    IoError(Error),
    LogSetup(String),
}

impl From<Error> for PDError {
    fn from(err: Error) -> Self {
        PDError::IoError(err)
    }
}

// Runtime tunables. The page size is deliberately not in here, it is a fixed
// constant of the table (see model::PAGE_SIZE).
#[derive(Debug, Clone, Setters)]
#[setters(into)]
pub struct PDConfig {
    pub event_poll_time: u64,
    pub status_message_timeout: u64,
}

impl Default for PDConfig {
    fn default() -> Self {
        Self {
            event_poll_time: 100,
            status_message_timeout: 4,
        }
    }
}

// Record fields a sort can be keyed on. The UI only exposes client, country
// and date, but the comparator works over the whole set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CLIENT,
    COUNTRY,
    EMAIL,
    PROJECT,
    STATUS,
    DATE,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::CLIENT => "client",
            Field::COUNTRY => "country",
            Field::EMAIL => "email",
            Field::PROJECT => "project",
            Field::STATUS => "status",
            Field::DATE => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    ASCENDING,
    DESCENDING,
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::ASCENDING => "ascending",
            SortDirection::DESCENDING => "descending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub field: Field,
    pub direction: SortDirection,
}

// Which query parameter an active text input is editing. NAME filters on the
// client column, the dataset has no separate name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    SEARCH,
    NAME,
    COUNTRY,
    EMAIL,
    PROJECT,
    STATUS,
}

impl InputTarget {
    pub fn label(&self) -> &'static str {
        match self {
            InputTarget::SEARCH => "search",
            InputTarget::NAME => "name",
            InputTarget::COUNTRY => "country",
            InputTarget::EMAIL => "email",
            InputTarget::PROJECT => "project",
            InputTarget::STATUS => "status",
        }
    }
}

#[derive(Debug)]
pub enum Message {
    Quit,
    Help,
    MoveUp,
    MoveDown,
    PrevPage,
    NextPage,
    SortBy(Field),
    Search,
    EditFilter(InputTarget),
    CopyRow,
    ResetQuery,
    Enter,
    Exit,
    RawKey(KeyEvent),
}

pub const HELP_TEXT: &str = "\
q        quit
?        this help
↑ / ↓    select row
enter    record details
← / →    previous / next page
c o d    sort by client / country / date (again to flip)
/        search all fields
1 - 5    edit filter: 1 name, 2 country, 3 email, 4 project, 5 status
y        copy selected row
r        reset search, filters and sort
esc      close popup / cancel input";
