use std::sync::Arc;

use anyhow::Result;
use dioxus::prelude::*;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::domain::entities::column::default_columns;
use crate::domain::entities::query::SortSpec;
use crate::infra::cache::CachedSource;
use crate::platform::desktop::timer::sleep;
use crate::ui::components::data_table::DataTable;
use crate::ui::components::pager::Pager;
use crate::ui::state::app_state::AppState;
use crate::ui::state::controller::{
    QueryTicket, TeardownGuard, PAGE_SIZE_OPTIONS, SEARCH_DEBOUNCE,
};
use crate::ui::styles::{
    table_container_style, ERROR_BANNER_STYLE, HEADER_STYLE, PANEL_STYLE, ROOT_STYLE,
};
use crate::usecase::services::query_service::QueryService;

fn build_query_service(config: &AppConfig) -> Result<Arc<QueryService>> {
    let source = config.open_source()?;
    info!(source = %source.describe(), "dataset source resolved");
    Ok(Arc::new(QueryService::new(Arc::new(CachedSource::new(
        source,
    )))))
}

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::resolve);
    let service = use_hook({
        let config = config.clone();
        move || build_query_service(&config).map_err(|err| format!("{err:#}"))
    });

    let AppState {
        mut controller,
        mut search_task,
    } = AppState::new(config.default_page_size);
    let columns = use_hook(default_columns);

    let teardown = use_hook(TeardownGuard::default);
    let teardown_for_drop = teardown.clone();
    use_drop(move || teardown_for_drop.tear_down());

    let ready_service = service.clone().ok();
    let teardown_for_query = teardown.clone();
    let run_query = use_callback(move |ticket: QueryTicket| {
        let Some(service) = ready_service.clone() else {
            return;
        };
        let teardown = teardown_for_query.clone();
        spawn(async move {
            let result = service
                .get_paged_data(&ticket.params)
                .await
                .map_err(|err| err.to_string());
            if teardown.is_torn_down() {
                debug!(seq = ticket.seq, "discarding result after teardown");
                return;
            }
            if !controller.write().apply_result(ticket.seq, result) {
                debug!(seq = ticket.seq, "discarding superseded result");
            }
        });
    });

    let service_ready = service.is_ok();
    use_effect(move || {
        if !service_ready {
            return;
        }
        let ticket = controller.write().initial_query();
        run_query.call(ticket);
    });

    if let Err(err) = service {
        return rsx! {
            div {
                p { "Unable to open dataset: {err}" }
            }
        };
    }

    let (page, page_size, page_count, total_count, sort, rows, loading, error) = {
        let current = controller.read();
        (
            current.state().page,
            current.state().page_size,
            current.page_count(),
            current.total_count(),
            current.state().sort.clone(),
            current.data().to_vec(),
            current.loading(),
            current.error().map(str::to_string),
        )
    };

    let teardown_for_search = teardown.clone();

    rsx! {
        div { style: "{ROOT_STYLE}",
            div { style: "{HEADER_STYLE}",
                h2 { style: "margin: 0;", "People DataTable" }
            }

            div { style: "{PANEL_STYLE}",
                label {
                    "Search: "
                    input {
                        r#type: "search",
                        oninput: move |event: FormEvent| {
                            let ticket = controller.write().schedule_search(event.value());
                            if let Some(previous) = search_task.write().take() {
                                previous.cancel();
                            }
                            let teardown = teardown_for_search.clone();
                            let task = spawn(async move {
                                sleep(SEARCH_DEBOUNCE).await;
                                if teardown.is_torn_down() {
                                    return;
                                }
                                let next = controller.write().fire_search(ticket);
                                if let Some(query) = next {
                                    run_query.call(query);
                                }
                            });
                            search_task.set(Some(task));
                        },
                    }
                }

                label {
                    "Page size: "
                    select {
                        value: "{page_size}",
                        onchange: move |event: FormEvent| {
                            let value = event.value();
                            let Ok(size) = value.parse::<usize>() else {
                                warn!(value = %value, "ignoring non-numeric page size");
                                return;
                            };
                            let next = controller.write().change_page_size(size);
                            match next {
                                Ok(ticket) => run_query.call(ticket),
                                Err(err) => warn!("rejected page size: {err}"),
                            }
                        },
                        for size in PAGE_SIZE_OPTIONS {
                            option { value: "{size}", "{size}" }
                        }
                    }
                }

                Pager {
                    page,
                    page_count,
                    on_change_page: move |target: usize| {
                        let ticket = controller.write().change_page(target);
                        run_query.call(ticket);
                    },
                }

                span { "{total_count} records" }
                if loading {
                    span { style: "color: #888;", "Loading…" }
                }
            }

            {error.map(|message| rsx! {
                div { style: "{ERROR_BANNER_STYLE}", "Failed to load data: {message}" }
            })}

            div { style: "{table_container_style()}",
                DataTable {
                    columns: columns.clone(),
                    data: rows,
                    sort,
                    on_change_sort: move |next: Option<SortSpec>| {
                        let ticket = controller.write().change_sort(next);
                        run_query.call(ticket);
                    },
                }
            }
        }
    }
}
