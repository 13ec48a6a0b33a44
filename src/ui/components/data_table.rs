use dioxus::prelude::*;

use crate::domain::entities::column::ColumnDef;
use crate::domain::entities::query::{SortDirection, SortSpec};
use crate::domain::entities::record::Record;
use crate::ui::styles::{table_header_cell_style, TABLE_BODY_CELL_STYLE, TABLE_STYLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Up,
    Down,
}

impl SortIndicator {
    pub fn glyph(self) -> &'static str {
        match self {
            SortIndicator::Up => "▲",
            SortIndicator::Down => "▼",
        }
    }
}

/// Sort after clicking `column`'s header: asc, then desc, then cleared.
///
/// Returns `None` when the column cannot be sorted.
pub fn next_sort(column: &ColumnDef, current: Option<&SortSpec>) -> Option<Option<SortSpec>> {
    if !column.sortable {
        return None;
    }

    let next = match current {
        Some(sort) if sort.name == column.name => {
            if sort.is_descending() {
                None
            } else {
                Some(SortSpec::desc(&column.name))
            }
        }
        _ => Some(SortSpec::asc(&column.name)),
    };
    Some(next)
}

pub fn sort_indicator(column: &ColumnDef, sort: Option<&SortSpec>) -> Option<SortIndicator> {
    let sort = sort.filter(|sort| column.sortable && sort.name == column.name)?;
    match sort.direction {
        Some(SortDirection::Desc) => Some(SortIndicator::Down),
        Some(SortDirection::Asc) | None => Some(SortIndicator::Up),
    }
}

#[component]
pub fn DataTable(
    columns: Vec<ColumnDef>,
    data: Vec<Record>,
    sort: Option<SortSpec>,
    on_change_sort: Option<EventHandler<Option<SortSpec>>>,
) -> Element {
    rsx! {
        table { style: "{TABLE_STYLE}",
            thead {
                tr {
                    {columns.iter().map(|column| {
                        let column = column.clone();
                        let style = table_header_cell_style(column.sortable);
                        let indicator = sort_indicator(&column, sort.as_ref())
                            .map(|indicator| indicator.glyph())
                            .unwrap_or("");
                        let current = sort.clone();
                        let key = column.name.clone();
                        let title = column.title.clone();
                        rsx!(
                            th {
                                key: "{key}",
                                style: "{style}",
                                onclick: move |_| {
                                    let Some(handler) = on_change_sort else {
                                        return;
                                    };
                                    if let Some(next) = next_sort(&column, current.as_ref()) {
                                        handler.call(next);
                                    }
                                },
                                "{title} {indicator}"
                            }
                        )
                    })}
                }
            }
            tbody {
                {data.iter().enumerate().map(|(row_idx, row)| {
                    rsx!(
                        tr { key: "{row_idx}",
                            {columns.iter().map(|column| {
                                let value = row.display(&column.name);
                                rsx!(
                                    td { key: "{column.name}", style: "{TABLE_BODY_CELL_STYLE}", "{value}" }
                                )
                            })}
                        }
                    )
                })}
            }
        }
    }
}
