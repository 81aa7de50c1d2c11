// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Browser tests for the rendered app.
//!
//! Run with `wasm-pack test --headless --firefox todomvc_web`.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use futures_signals::signal::Mutable;
use gloo_timers::future::TimeoutFuture;
use todomvc_core::{Store, TodoFilter};
use todomvc_web::{Config, FilterRoute, TodoApp, WebError, document, mount, window};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

/// Wait until the effects scheduled so far have updated the DOM.
async fn settle() {
    TimeoutFuture::new(0).await;
}

/// An app mounted into its own container, removed again when dropped.
struct Fixture {
    container: Element,
    app: TodoApp,
}

impl Fixture {
    async fn new(filter: TodoFilter) -> Self {
        let document = document().unwrap();
        let container = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&container).unwrap();
        let app = TodoApp::mount(&document, &container, Rc::new(Store::new(filter))).unwrap();
        settle().await;
        Self { container, app }
    }

    fn store(&self) -> &Store {
        self.app.store()
    }

    fn query(&self, selector: &str) -> Element {
        query(&self.container, selector)
    }

    fn input(&self, selector: &str) -> HtmlInputElement {
        self.query(selector).dyn_into().unwrap()
    }

    fn html(&self, selector: &str) -> HtmlElement {
        self.query(selector).dyn_into().unwrap()
    }

    fn text(&self, selector: &str) -> Option<String> {
        self.query(selector).text_content()
    }

    fn item_count(&self) -> u32 {
        self.query(".todo-list").child_element_count()
    }

    async fn type_new_todo(&self, text: &str) {
        let input = self.input(".new-todo");
        input.set_value(text);
        press(&input, "Enter");
        settle().await;
    }

    async fn click(&self, selector: &str) {
        self.html(selector).click();
        settle().await;
    }

    async fn edit(&self, selector: &str) -> HtmlInputElement {
        fire(&self.query(selector), "dblclick");
        settle().await;
        self.input(".todo-list li .edit")
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.container.remove();
    }
}

fn query(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches `{selector}`"))
}

fn press(target: &Element, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn fire(target: &Element, event: &str) {
    let event = web_sys::Event::new(event).unwrap();
    target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
async fn renders_skeleton_hidden_while_empty() {
    let fixture = Fixture::new(TodoFilter::All).await;
    assert_eq!(fixture.text("h1").as_deref(), Some("todos"));
    assert_eq!(fixture.item_count(), 0);
    assert!(fixture.html(".main").hidden());
    assert!(fixture.html(".footer").hidden());
    assert_eq!(
        fixture.text(".info p:nth-child(3)").as_deref(),
        Some("Created by the heyMP using @heymp/signals")
    );
}

#[wasm_bindgen_test]
async fn enter_adds_todo_and_clears_input() {
    let fixture = Fixture::new(TodoFilter::All).await;
    fixture.type_new_todo("  Buy milk ").await;
    assert_eq!(fixture.item_count(), 1);
    assert_eq!(fixture.input(".new-todo").value(), "");
    assert_eq!(fixture.text(".todo-list li label").as_deref(), Some("Buy milk"));
    assert!(!fixture.html(".main").hidden());
    assert_eq!(fixture.text(".todo-count").as_deref(), Some("1 item left"));

    fixture.type_new_todo("   ").await;
    assert_eq!(fixture.item_count(), 1, "blank todos are ignored");
}

#[wasm_bindgen_test]
async fn other_keys_do_not_add() {
    let fixture = Fixture::new(TodoFilter::All).await;
    let input = fixture.input(".new-todo");
    input.set_value("Buy milk");
    press(&input, "a");
    settle().await;
    assert_eq!(fixture.item_count(), 0);
    assert_eq!(input.value(), "Buy milk");
}

#[wasm_bindgen_test]
async fn toggling_updates_counter_and_clear_button() {
    let fixture = Fixture::new(TodoFilter::All).await;
    fixture.type_new_todo("a").await;
    fixture.type_new_todo("b").await;
    assert_eq!(fixture.text(".todo-count").as_deref(), Some("2 items left"));
    assert!(fixture.html(".clear-completed").hidden());

    fixture.click(".todo-list li .toggle").await;
    assert_eq!(fixture.text(".todo-count").as_deref(), Some("1 item left"));
    assert!(fixture.query(".todo-list li").class_list().contains("completed"));
    assert!(!fixture.html(".clear-completed").hidden());

    fixture.click(".clear-completed").await;
    assert_eq!(fixture.item_count(), 1);
    assert!(fixture.html(".clear-completed").hidden());
}

#[wasm_bindgen_test]
async fn toggle_all_and_destroy() {
    let fixture = Fixture::new(TodoFilter::All).await;
    fixture.type_new_todo("a").await;
    fixture.type_new_todo("b").await;

    fixture.click(".toggle-all").await;
    assert!(fixture.store().todos.all_completed());
    assert!(fixture.input(".toggle-all").checked());

    fixture.click(".toggle-all").await;
    assert_eq!(fixture.store().active_count(), 2);
    assert!(!fixture.input(".toggle-all").checked());

    fixture.click(".todo-list li .destroy").await;
    assert_eq!(fixture.item_count(), 1);
    assert_eq!(fixture.store().todos.len(), 1);
}

#[wasm_bindgen_test]
async fn double_click_edits_and_enter_commits() {
    let fixture = Fixture::new(TodoFilter::All).await;
    fixture.type_new_todo("tea").await;
    let edit = fixture.edit(".todo-list li label").await;
    assert!(fixture.app.editing().is_some());
    assert!(fixture.query(".todo-list li").class_list().contains("editing"));
    assert_eq!(edit.value(), "tea");

    edit.set_value(" coffee ");
    press(&edit, "Enter");
    assert_eq!(fixture.app.editing(), None);
    assert_eq!(fixture.store().todos.get()[0].text, "coffee");
    settle().await;
    assert!(!fixture.query(".todo-list li").class_list().contains("editing"));
    assert_eq!(fixture.text(".todo-list li label").as_deref(), Some("coffee"));
}

#[wasm_bindgen_test]
async fn escape_cancels_and_empty_edit_deletes() {
    let fixture = Fixture::new(TodoFilter::All).await;
    fixture.type_new_todo("tea").await;

    let edit = fixture.edit(".todo-list li label").await;
    edit.set_value("coffee");
    press(&edit, "Escape");
    settle().await;
    assert_eq!(fixture.app.editing(), None);
    assert_eq!(fixture.store().todos.get()[0].text, "tea");

    let edit = fixture.edit(".todo-list li label").await;
    edit.set_value("  ");
    fire(&edit, "blur");
    settle().await;
    assert_eq!(fixture.item_count(), 0);
    assert!(fixture.store().todos.is_empty());
}

#[wasm_bindgen_test]
async fn filter_shows_matching_todos_and_selects_link() {
    let fixture = Fixture::new(TodoFilter::Active).await;
    fixture.type_new_todo("a").await;
    fixture.type_new_todo("b").await;
    fixture.click(".todo-list li .toggle").await;
    assert_eq!(fixture.item_count(), 1);
    assert!(
        fixture
            .query(".filters a[href='#/active']")
            .class_list()
            .contains("selected")
    );

    fixture.store().set_filter(TodoFilter::Completed);
    settle().await;
    assert_eq!(fixture.item_count(), 1);
    assert_eq!(fixture.text(".todo-list li label").as_deref(), Some("a"));
    assert!(
        !fixture
            .query(".filters a[href='#/active']")
            .class_list()
            .contains("selected")
    );

    fixture.store().set_filter(TodoFilter::All);
    settle().await;
    assert_eq!(fixture.item_count(), 2);
}

#[wasm_bindgen_test]
fn hash_change_updates_filter() {
    let window = window().unwrap();
    let filter = Mutable::new(TodoFilter::All);
    let _route = FilterRoute::attach(&window, filter.clone());

    window.location().set_hash("#/completed").unwrap();
    window.dispatch_event(&web_sys::Event::new("hashchange").unwrap()).unwrap();
    assert_eq!(filter.get(), TodoFilter::Completed);

    window.location().set_hash("#/bogus").unwrap();
    window.dispatch_event(&web_sys::Event::new("hashchange").unwrap()).unwrap();
    assert_eq!(filter.get(), TodoFilter::All);

    window.location().set_hash("").unwrap();
}

#[wasm_bindgen_test]
async fn mount_follows_url_and_configured_element() {
    let window = window().unwrap();
    let document = document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id("todo-mount");
    document.body().unwrap().append_child(&container).unwrap();
    window.location().set_hash("#/completed").unwrap();

    let config = Config::default().with_overrides(Some("todo-mount"), None);
    let running = mount(&config).unwrap();
    let store = running.app.store();
    assert_eq!(store.filter.get(), TodoFilter::Completed);
    let a = store.todos.add("a").unwrap();
    store.todos.add("b");
    store.todos.toggle(a);
    settle().await;

    assert_eq!(container.child_element_count(), 2, "app and info footer");
    assert_eq!(query(&container, ".todo-list").child_element_count(), 1);
    assert_eq!(
        query(&container, ".todo-list li label").text_content().as_deref(),
        Some("a")
    );
    assert_eq!(
        query(&container, ".filters a.selected")
            .get_attribute("href")
            .as_deref(),
        Some("#/completed")
    );

    drop(running);
    window.location().set_hash("").unwrap();
    container.remove();
}

#[wasm_bindgen_test]
fn mount_into_missing_element_fails() {
    let config = Config::default().with_overrides(Some("no-such-element"), None);
    let err = mount(&config).unwrap_err();
    assert!(
        matches!(&err, WebError::MissingMount(id) if id == "no-such-element"),
        "unexpected error: {err}"
    );
}

#[wasm_bindgen_test]
fn mount_reports_dom_exceptions() {
    let document = document().unwrap();
    // A document only takes a single root element, and already has one.
    let err = TodoApp::mount(&document, &document, Rc::new(Store::default())).unwrap_err();
    assert!(matches!(err, WebError::Js(_)), "unexpected error: {err}");
    assert!(document.query_selector(".todoapp").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn dropping_the_app_removes_it() {
    let document = document().unwrap();
    let container = document.create_element("div").unwrap();
    let store = Rc::new(Store::default());
    let app = TodoApp::mount(&document, &container, Rc::clone(&store)).unwrap();
    settle().await;
    assert_eq!(container.child_element_count(), 2);
    let list = query(&container, ".todo-list");

    drop(app);
    assert_eq!(container.child_element_count(), 0);
    store.todos.add("still works without a view");
    settle().await;
    assert_eq!(list.child_element_count(), 0, "effects are gone");
}
