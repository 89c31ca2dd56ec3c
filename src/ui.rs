use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Cell, Clear, List, ListItem, Paragraph, Row, Table, TableState, Wrap},
};

use crate::domain::{Field, PDConfig, SortDirection};
use crate::model::{Model, UIData};

pub const SIDEBAR_WIDTH: u16 = 20;
pub const HEADER_HEIGHT: u16 = 2;
pub const STATUSLINE_HEIGHT: u16 = 1;

const NAV_ITEMS: [&str; 5] = ["Dashboard", "Projects", "Clients", "Reports", "Settings"];
// The task progress column is a fixed glyph, nothing computes a real value
const PROGRESS_PLACEHOLDER: &str = "▰▰▰▱▱";
const ACTIONS_GLYPH: &str = "⋯";
const KEY_HINTS: &str = " q quit · ? help · c/o/d sort · / search · 1-5 filter · ←/→ page";

// Column headers and the sort field each one exposes, if any.
const COLUMNS: [(&str, Option<Field>); 9] = [
    ("Image", None),
    ("Client", Some(Field::CLIENT)),
    ("Country", Some(Field::COUNTRY)),
    ("Email", None),
    ("Project", None),
    ("Progress", None),
    ("Status", None),
    ("Date", Some(Field::DATE)),
    ("", None),
];

const COLUMN_WIDTHS: [Constraint; 9] = [
    Constraint::Length(22), // image
    Constraint::Length(12), // client
    Constraint::Length(14), // country
    Constraint::Length(22), // email
    Constraint::Length(18), // project
    Constraint::Length(10), // progress
    Constraint::Length(11), // status
    Constraint::Length(10), // date
    Constraint::Length(3),  // actions
];

pub struct TableUI {
    config: PDConfig,
    table_state: TableState,
}

impl TableUI {
    pub fn new(cfg: &PDConfig) -> Self {
        Self {
            config: cfg.clone(),
            table_state: TableState::default(),
        }
    }

    pub fn draw(&mut self, model: &Model, frame: &mut Frame) {
        let uidata = model.get_uidata();

        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(frame.area());
        self.draw_sidebar(frame, sidebar);

        let [header, table, footer, statusline] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(STATUSLINE_HEIGHT),
        ])
        .areas(main);

        self.draw_header(uidata, frame, header);
        self.draw_table(uidata, frame, table);
        self.draw_footer(uidata, frame, footer);
        self.draw_statusline(uidata, frame, statusline);

        if uidata.show_popup {
            self.draw_popup(uidata, frame);
        }
    }

    fn draw_sidebar(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = NAV_ITEMS
            .iter()
            .map(|&item| {
                if item == "Projects" {
                    ListItem::new(Line::from(item.bold().yellow()))
                } else {
                    ListItem::new(Line::from(item.dim()))
                }
            })
            .collect();
        let block = Block::bordered().title(Line::from(" pdash ".bold()).centered());
        frame.render_widget(List::new(items).block(block), area);
    }

    fn draw_header(&self, uidata: &UIData, frame: &mut Frame, area: Rect) {
        let title = Line::from(" Projects ".bold());
        let summary = Line::from(format!(" {}", Self::query_summary(uidata)).dim());
        frame.render_widget(Paragraph::new(vec![title, summary]), area);
    }

    fn query_summary(uidata: &UIData) -> String {
        let mut parts = Vec::new();
        if !uidata.search.is_empty() {
            parts.push(format!("search \"{}\"", uidata.search));
        }
        let filters = [
            ("name", &uidata.filters.name),
            ("country", &uidata.filters.country),
            ("email", &uidata.filters.email),
            ("project", &uidata.filters.project),
            ("status", &uidata.filters.status),
        ];
        for (label, value) in filters {
            if !value.is_empty() {
                parts.push(format!("{label}~{value}"));
            }
        }
        if let Some(sort) = uidata.sort {
            parts.push(format!(
                "sort {} {}",
                sort.field.label(),
                sort.direction.label()
            ));
        }
        if parts.is_empty() {
            "all projects".to_string()
        } else {
            parts.join("  ")
        }
    }

    fn draw_table(&mut self, uidata: &UIData, frame: &mut Frame, area: Rect) {
        let header_cells = COLUMNS.iter().map(|&(name, field)| {
            let marker = match (uidata.sort, field) {
                (Some(sort), Some(field)) if sort.field == field => match sort.direction {
                    SortDirection::ASCENDING => " ▲",
                    SortDirection::DESCENDING => " ▼",
                },
                _ => "",
            };
            Cell::from(format!("{name}{marker}"))
        });
        let header = Row::new(header_cells).style(Style::new().bold());

        let rows = uidata.rows.iter().map(|p| {
            Row::new(vec![
                Cell::from(p.image.as_str()),
                Cell::from(p.client.as_str()),
                Cell::from(p.country.as_str()),
                Cell::from(p.email.as_str()),
                Cell::from(p.project.as_str()),
                Cell::from(PROGRESS_PLACEHOLDER),
                Cell::from(Self::status_cell(&p.status)),
                Cell::from(p.date.as_str()),
                Cell::from(ACTIONS_GLYPH),
            ])
        });

        let table = Table::new(rows, COLUMN_WIDTHS)
            .header(header)
            .block(Block::bordered())
            .row_highlight_style(Style::new().reversed())
            .column_spacing(1);

        self.table_state.select(if uidata.rows.is_empty() {
            None
        } else {
            Some(uidata.selected_row)
        });
        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn status_cell(status: &str) -> Span<'_> {
        match status {
            "Complete" => status.green(),
            "Pending" => status.yellow(),
            "In Progress" => status.cyan(),
            _ => Span::raw(status),
        }
    }

    fn draw_footer(&self, uidata: &UIData, frame: &mut Frame, area: Rect) {
        let footer = Line::from(vec![
            format!(" Page {}/{}", uidata.page, uidata.total_pages).bold(),
            format!(
                "  ·  {} of {} projects",
                uidata.filtered_count, uidata.total_count
            )
            .into(),
        ]);
        frame.render_widget(Paragraph::new(footer), area);
    }

    fn draw_statusline(&self, uidata: &UIData, frame: &mut Frame, area: Rect) {
        if uidata.active_cmdinput {
            let target = uidata
                .input_target
                .map(|t| t.label())
                .unwrap_or("input");
            let prompt = format!(" {}: {}", target, uidata.cmdinput.input);
            frame.render_widget(Paragraph::new(prompt.clone().yellow()), area);
            let cursor_x = area.x + 3 + target.len() as u16 + uidata.cmdinput.cursor_pos as u16;
            frame.set_cursor_position((cursor_x, area.y));
        } else if !uidata.status_message.is_empty()
            && uidata.last_status_message_update.elapsed().as_secs()
                < self.config.status_message_timeout
        {
            frame.render_widget(
                Paragraph::new(format!(" {}", uidata.status_message).italic()),
                area,
            );
        } else {
            frame.render_widget(Paragraph::new(KEY_HINTS.dim()), area);
        }
    }

    fn draw_popup(&self, uidata: &UIData, frame: &mut Frame) {
        let area = Self::popup_area(frame.area(), 60, 60);
        let block = Block::bordered()
            .title(Line::from(format!(" {} ", uidata.popup_title).bold()).centered())
            .border_set(border::THICK);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(uidata.popup_message.as_str())
                .wrap(Wrap { trim: false })
                .block(block),
            area,
        );
    }

    fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
        let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
        let [area] = vertical.areas(area);
        let [area] = horizontal.areas(area);
        area
    }
}
