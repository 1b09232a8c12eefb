use std::sync::Arc;

use dioxus::prelude::*;
use tracker_core::model::ProgressState;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{EssayRowVm, NotePanels, RowEffect, RowIntent, apply_row_intent, map_essay_rows};

#[derive(Clone, Debug, PartialEq)]
struct EssayListData {
    rows: Vec<EssayRowVm>,
    initial: ProgressState,
}

/// The whole page: loads the catalog once, then hands the rows and the
/// validated progress state to the interactive list.
#[component]
pub fn EssayListView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = ctx.progress();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let progress = progress.clone();
        async move {
            // The single suspension point: until this resolves the list
            // container stays empty. A catalog failure aborts initialization
            // and is rendered in place of the rows.
            let essays = catalog.load().await.map_err(|err| {
                eprintln!("catalog load failed: {err}");
                ViewError::Catalog(err.to_string())
            })?;
            let initial = progress.load(essays.len()).await;
            Ok::<_, ViewError>(EssayListData {
                rows: map_essay_rows(&essays),
                initial,
            })
        }
    });

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page essays-page",
            header { class: "view-header",
                h2 { class: "view-title", "Essays" }
                p { class: "view-subtitle", "Mark what you have read and keep notes." }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    div { class: "essay-list" }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "load-error", "{err.message()}" }
                },
                ViewState::Ready(data) => rsx! {
                    EssayList { rows: data.rows, initial: data.initial }
                },
            }
        }
    }
}

#[component]
fn EssayList(rows: Vec<EssayRowVm>, initial: ProgressState) -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.progress();
    let row_count = rows.len();

    let state = use_signal(move || initial);
    let panels = use_signal(move || NotePanels::new(row_count));
    let mut storage_warning = use_signal(|| false);

    // One dispatch point for every interactive element in the list. Each
    // element was bound to its semantic intent when the row was built, so no
    // handler needs to inspect where in the row the event landed.
    let apply = use_callback(move |intent: RowIntent| {
        let mut state = state;
        let mut panels = panels;
        let effect = {
            let mut state_guard = state.write();
            let mut panels_guard = panels.write();
            match apply_row_intent(&mut state_guard, &mut panels_guard, intent) {
                Ok(effect) => effect,
                Err(_) => return,
            }
        };
        if effect == RowEffect::Persist {
            let service = Arc::clone(&service);
            let snapshot = state.peek().clone();
            spawn(async move {
                if service.save(&snapshot).await.is_err() {
                    storage_warning.set(true);
                }
            });
        }
    });

    let items = rows.iter().map(|row| {
        let id = row.id;
        let read = state.read().is_read(id);
        let expanded = panels.read().is_expanded(id);
        let note = state.read().note(id).to_string();
        rsx! {
            div {
                key: "{id}",
                class: if expanded { "essay-item open" } else { "essay-item" },
                div { class: "essay-header",
                    onclick: move |_| apply.call(RowIntent::ToggleNotes(id)),
                    button {
                        class: if read { "status-dot is-read" } else { "status-dot" },
                        r#type: "button",
                        aria_label: "Toggle read",
                        // Flipping the flag must not also toggle the notes.
                        onclick: move |evt| {
                            evt.stop_propagation();
                            apply.call(RowIntent::ToggleRead(id));
                        },
                    }
                    span { class: "essay-title", "{row.title}" }
                    a {
                        class: "external-link",
                        href: "{row.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        title: "Open the essay in a new tab",
                        // Let native navigation proceed, keep the panel shut.
                        onclick: move |evt| {
                            evt.stop_propagation();
                            apply.call(RowIntent::OpenLink(id));
                        },
                        svg {
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
                            path { d: "M15 3h6v6" }
                            path { d: "M10 14L21 3" }
                        }
                    }
                }
                div { class: "notes-section",
                    textarea {
                        placeholder: "Your notes...",
                        value: "{note}",
                        oninput: move |evt| apply.call(RowIntent::EditNote(id, evt.value())),
                    }
                }
            }
        }
    });

    rsx! {
        if storage_warning() {
            p { class: "storage-warning",
                "Progress can't be saved right now; changes are kept for this session only."
            }
        }
        div { class: "essay-list",
            {items}
        }
    }
}
