use dioxus::prelude::*;

use crate::ui::styles::{pager_item_style, PAGER_LIST_STYLE};

pub const DEFAULT_SHOW_PAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItemKind {
    First,
    Prev,
    Page,
    Next,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerItem {
    pub kind: PagerItemKind,
    pub target: usize,
    pub disabled: bool,
    pub active: bool,
}

impl PagerItem {
    /// Page to request when clicked; `None` for inert items.
    pub fn click_target(&self) -> Option<usize> {
        if self.disabled || self.active {
            None
        } else {
            Some(self.target)
        }
    }

    pub fn label(&self) -> String {
        match self.kind {
            PagerItemKind::First => "«".to_string(),
            PagerItemKind::Prev => "‹".to_string(),
            PagerItemKind::Page => self.target.to_string(),
            PagerItemKind::Next => "›".to_string(),
            PagerItemKind::Last => "»".to_string(),
        }
    }
}

/// Inclusive range of page numbers around `page`.
pub fn page_window(page: usize, page_count: usize, show_pages: usize) -> (usize, usize) {
    if page_count == 0 {
        return (1, 0);
    }
    let show_pages = show_pages.max(1);
    if page_count <= show_pages {
        return (1, page_count);
    }
    let page = page.clamp(1, page_count);

    let start = page
        .saturating_sub(show_pages / 2)
        .clamp(1, page_count - show_pages + 1);
    (start, start + show_pages - 1)
}

/// Items of the pager control, or `None` when there is nothing to page.
pub fn pager_items(page: usize, page_count: usize, show_pages: usize) -> Option<Vec<PagerItem>> {
    if page_count == 0 {
        return None;
    }
    let page = page.max(1);
    let is_first = page == 1;
    let is_last = page >= page_count;

    let edge = |kind, target, disabled| PagerItem {
        kind,
        target,
        disabled,
        active: false,
    };

    let (start, end) = page_window(page, page_count, show_pages);
    let mut items = vec![
        edge(PagerItemKind::First, 1, is_first),
        edge(PagerItemKind::Prev, page.saturating_sub(1).max(1), is_first),
    ];
    items.extend((start..=end).map(|num| PagerItem {
        kind: PagerItemKind::Page,
        target: num,
        disabled: false,
        active: num == page,
    }));
    items.push(edge(PagerItemKind::Next, page + 1, is_last));
    items.push(edge(PagerItemKind::Last, page_count, is_last));

    Some(items)
}

#[component]
pub fn Pager(
    page: usize,
    page_count: usize,
    #[props(default = DEFAULT_SHOW_PAGES)] show_pages: usize,
    on_change_page: EventHandler<usize>,
) -> Element {
    let Some(items) = pager_items(page, page_count, show_pages) else {
        return rsx! {};
    };

    rsx! {
        ul { style: "{PAGER_LIST_STYLE}",
            {items.into_iter().map(|item| {
                let key = format!("{:?}-{}", item.kind, item.target);
                let style = pager_item_style(item.active, item.disabled);
                let label = item.label();
                rsx!(
                    li {
                        key: "{key}",
                        style: "{style}",
                        onclick: move |_| {
                            if let Some(target) = item.click_target() {
                                on_change_page.call(target);
                            }
                        },
                        "{label}"
                    }
                )
            })}
        }
    }
}
