// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::rc::Rc;

use futures_signals::map_ref;
use futures_signals::signal::{Mutable, SignalExt};
use gloo::events::EventListener;
use todomvc_core::{Store, Todo, TodoEdit, TodoFilter, TodoId};
use wasm_bindgen::UnwrapThrowExt;
use web_sys::{HtmlInputElement, KeyboardEvent};

use crate::dom::{self, el};
use crate::effect::Effect;
use crate::events::on;
use crate::{WebError, event_target_input};

const ENTER_KEY: &str = "Enter";
const ESCAPE_KEY: &str = "Escape";

/// The TodoMVC user interface for a [`Store`].
///
/// The DOM is kept up to date until this is dropped; dropping it detaches all
/// listeners and removes the rendered elements.
///
/// The DOM is updated on the microtask queue, so all changes made by one event handler
/// are rendered at once.
#[derive(Debug)]
pub struct TodoApp {
    store: Rc<Store>,
    editing: Mutable<Option<TodoId>>,
    nodes: Vec<web_sys::Element>,
    _effects: Vec<Effect>,
    _listeners: Vec<EventListener>,
}

/// Everything the event handlers of a single todo item need.
#[derive(Clone)]
struct ItemContext {
    document: web_sys::Document,
    store: Rc<Store>,
    editing: Mutable<Option<TodoId>>,
}

impl TodoApp {
    /// Render the app for `store` at the end of `parent`.
    ///
    /// Fails if `parent` can't hold the app's elements, e.g. if it is a document which
    /// already has a root element.
    pub fn mount(
        document: &web_sys::Document,
        parent: &web_sys::Node,
        store: Rc<Store>,
    ) -> Result<Self, WebError> {
        let editing = Mutable::new(None);
        let item_cx = ItemContext {
            document: document.clone(),
            store: Rc::clone(&store),
            editing: editing.clone(),
        };

        let new_todo: HtmlInputElement = el(document, "input")
            .class("new-todo")
            .attr("placeholder", "What needs to be done?")
            .attr("autofocus", "")
            .build_as();
        let toggle_all: HtmlInputElement = el(document, "input")
            .class("toggle-all")
            .attr("id", "toggle-all")
            .attr("type", "checkbox")
            .build_as();
        let list = el(document, "ul").class("todo-list").build();
        let count = el(document, "span").class("todo-count").build();
        let clear_completed = dom::html(
            el(document, "button")
                .class("clear-completed")
                .text("Clear completed")
                .build(),
        );
        let filter_links: Vec<(TodoFilter, web_sys::Element)> = TodoFilter::ALL
            .into_iter()
            .map(|filter| {
                let link = el(document, "a")
                    .attr("href", filter.fragment())
                    .text(filter.label())
                    .build();
                (filter, link)
            })
            .collect();
        let filters = filter_links.iter().fold(
            el(document, "ul").class("filters"),
            |filters, (_, link)| filters.child(el(document, "li").child(link)),
        );

        let main = dom::html(
            el(document, "main")
                .class("main")
                .child(
                    el(document, "div")
                        .class("toggle-all-container")
                        .child(&toggle_all)
                        .child(
                            el(document, "label")
                                .class("toggle-all-label")
                                .attr("for", "toggle-all")
                                .text("Mark all as complete"),
                        ),
                )
                .child(&list)
                .build(),
        );
        let footer = dom::html(
            el(document, "footer")
                .class("footer")
                .child(&count)
                .child(filters)
                .child(&clear_completed)
                .build(),
        );
        let app = el(document, "section")
            .class("todoapp")
            .child(
                el(document, "header")
                    .class("header")
                    .child(el(document, "h1").text("todos"))
                    .child(&new_todo),
            )
            .child(&main)
            .child(&footer)
            .build();
        let info = info_footer(document);

        // Both elements are inserted at once, or not at all.
        let fragment = document.create_document_fragment();
        fragment.append_child(&app)?;
        fragment.append_child(&info)?;
        parent.append_child(&fragment)?;

        let listeners = vec![
            on(&new_todo, "keydown", {
                let store = Rc::clone(&store);
                move |event: KeyboardEvent| {
                    if event.key() != ENTER_KEY {
                        return;
                    }
                    let Some(input) = event_target_input(&event) else {
                        return;
                    };
                    store.todos.add(&input.value());
                    input.set_value("");
                }
            }),
            EventListener::new(&toggle_all, "change", {
                let store = Rc::clone(&store);
                move |_| store.todos.toggle_all()
            }),
            EventListener::new(&clear_completed, "click", {
                let store = Rc::clone(&store);
                move |_| {
                    store.todos.clear_completed();
                }
            }),
        ];

        let effects = vec![
            list_effect(item_cx, list),
            Effect::new(store.active_count_signal(), {
                let document = document.clone();
                move |active| render_count(&document, &count, active)
            }),
            Effect::new(
                store.completed_signal().map(|completed| completed.is_empty()),
                move |empty| clear_completed.set_hidden(empty),
            ),
            Effect::new(
                store.todos.signal_ref(|todos| {
                    (todos.is_empty(), todos.iter().all(|todo| todo.completed))
                }),
                move |(empty, all_completed)| {
                    main.set_hidden(empty);
                    footer.set_hidden(empty);
                    toggle_all.set_checked(!empty && all_completed);
                },
            ),
            Effect::new(store.filter.signal(), move |selected| {
                for (filter, link) in &filter_links {
                    dom::set_class(link, "selected", *filter == selected);
                }
            }),
        ];

        tracing::debug!("mounted todo app");
        Ok(Self {
            store,
            editing,
            nodes: vec![app, info],
            _effects: effects,
            _listeners: listeners,
        })
    }

    /// The store this app renders.
    pub fn store(&self) -> &Rc<Store> {
        &self.store
    }

    /// The todo whose text is being edited, if any.
    pub fn editing(&self) -> Option<TodoId> {
        self.editing.get()
    }
}

impl Drop for TodoApp {
    fn drop(&mut self) {
        for node in &self.nodes {
            node.remove();
        }
    }
}

/// Re-renders the todo list whenever the visible todos, or the todo being edited, change.
fn list_effect(cx: ItemContext, list: web_sys::Element) -> Effect {
    let rendered = map_ref! {
        let todos = cx.store.filtered_signal(),
        let editing = cx.editing.signal() =>
        (todos.clone(), *editing)
    };
    // Handlers of the currently rendered items, replaced on every render.
    let mut item_listeners = Vec::new();
    Effect::new(rendered, move |(todos, editing)| {
        let mut listeners = Vec::new();
        let mut edit_input = None;
        let items: Vec<web_sys::Element> = todos
            .iter()
            .map(|todo| {
                let is_editing = editing == Some(todo.id);
                let (item, input) = todo_item(&cx, todo, is_editing, &mut listeners);
                if is_editing {
                    edit_input = input;
                }
                item
            })
            .collect();
        dom::replace_children(&list, &items);
        drop(std::mem::replace(&mut item_listeners, listeners));
        if let Some(input) = edit_input {
            input.focus().unwrap_throw();
        }
    })
}

/// Build a single `li` of the todo list.
///
/// Returns the edit input along with the item, if the todo is being edited.
fn todo_item(
    cx: &ItemContext,
    todo: &Todo,
    editing: bool,
    listeners: &mut Vec<EventListener>,
) -> (web_sys::Element, Option<HtmlInputElement>) {
    let document = &cx.document;
    let id = todo.id;

    let toggle: HtmlInputElement = el(document, "input")
        .class("toggle")
        .attr("type", "checkbox")
        .build_as();
    toggle.set_checked(todo.completed);
    let label = el(document, "label").text(&todo.text).build();
    let destroy = el(document, "button").class("destroy").build();

    listeners.push(EventListener::new(&toggle, "change", {
        let store = Rc::clone(&cx.store);
        let toggle = toggle.clone();
        move |_| {
            store
                .todos
                .update(TodoEdit::new(id).completed(toggle.checked()));
        }
    }));
    listeners.push(EventListener::new(&label, "dblclick", {
        let editing = cx.editing.clone();
        move |_| editing.set(Some(id))
    }));
    listeners.push(EventListener::new(&destroy, "click", {
        let store = Rc::clone(&cx.store);
        move |_| store.todos.delete(id)
    }));

    let item = el(document, "li")
        .attr("data-id", &id.to_string())
        .child(
            el(document, "div")
                .class("view")
                .child(&toggle)
                .child(&label)
                .child(&destroy),
        )
        .build();
    dom::set_class(&item, "completed", todo.completed);
    dom::set_class(&item, "editing", editing);

    if !editing {
        return (item, None);
    }

    let input: HtmlInputElement = el(document, "input").class("edit").build_as();
    input.set_value(&todo.text);
    listeners.push(on(&input, "keydown", {
        let cx = cx.clone();
        let input = input.clone();
        move |event: KeyboardEvent| match event.key().as_str() {
            ENTER_KEY => commit_edit(&cx, id, &input),
            ESCAPE_KEY => {
                tracing::debug!(%id, "cancelled editing");
                cx.editing.set(None);
            }
            _ => {}
        }
    }));
    listeners.push(EventListener::new(&input, "blur", {
        let cx = cx.clone();
        let input = input.clone();
        move |_| {
            // Leaving edit mode removes the input, which may blur it once more.
            if cx.editing.get() == Some(id) {
                commit_edit(&cx, id, &input);
            }
        }
    }));
    item.append_child(&input).unwrap_throw();
    (item, Some(input))
}

/// Leave edit mode and store the edited text; the list is rendered once for both changes.
fn commit_edit(cx: &ItemContext, id: TodoId, input: &HtmlInputElement) {
    let text = input.value();
    cx.editing.set(None);
    cx.store.todos.commit_edit(id, &text);
}

fn render_count(document: &web_sys::Document, count: &web_sys::Element, active: usize) {
    let unit = if active == 1 { "item" } else { "items" };
    let number = el(document, "strong").text(&active.to_string()).build();
    let rest = document.create_text_node(&format!(" {unit} left"));
    count.set_text_content(None);
    count.append_child(&number).unwrap_throw();
    count.append_child(&rest).unwrap_throw();
}

fn link(document: &web_sys::Document, href: &str, text: &str) -> web_sys::Element {
    el(document, "a").attr("href", href).text(text).build()
}

fn info_footer(document: &web_sys::Document) -> web_sys::Element {
    let project = link(document, "https://github.com/heyMP/signals-todo-mvc", "Signals Todo MVC");
    let author = link(document, "https://github.com/heyMP", "heyMP");
    let signals = link(document, "https://github.com/heyMP/signals", "@heymp/signals");
    let todomvc = link(document, "http://todomvc.com", "TodoMVC");
    el(document, "footer")
        .class("info")
        .child(el(document, "p").text("Double-click to edit a todo"))
        .child(el(document, "p").child(project))
        .child(
            el(document, "p")
                .text("Created by the ")
                .child(author)
                .append_text(" using ")
                .child(signals),
        )
        .child(el(document, "p").text("Part of ").child(todomvc))
        .build()
}
