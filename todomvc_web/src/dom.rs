// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A tiny builder for DOM elements.

use wasm_bindgen::{JsCast, UnwrapThrowExt};

/// Builds a [`web_sys::Element`] with its attributes and children.
pub(crate) struct ElementBuilder {
    element: web_sys::Element,
}

/// Start building a `tag` element.
pub(crate) fn el(document: &web_sys::Document, tag: &str) -> ElementBuilder {
    ElementBuilder {
        element: document.create_element(tag).unwrap_throw(),
    }
}

impl ElementBuilder {
    pub(crate) fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    pub(crate) fn attr(self, name: &str, value: &str) -> Self {
        self.element.set_attribute(name, value).unwrap_throw();
        self
    }

    pub(crate) fn text(self, text: &str) -> Self {
        self.element.set_text_content(Some(text));
        self
    }

    /// Append a text node after the current children.
    pub(crate) fn append_text(self, text: &str) -> Self {
        self.element.append_with_str_1(text).unwrap_throw();
        self
    }

    pub(crate) fn child(self, child: impl AsRef<web_sys::Node>) -> Self {
        self.element.append_child(child.as_ref()).unwrap_throw();
        self
    }

    pub(crate) fn build(self) -> web_sys::Element {
        self.element
    }

    /// Build and cast to a specific element type, e.g. [`web_sys::HtmlInputElement`].
    pub(crate) fn build_as<E: JsCast>(self) -> E {
        self.element.dyn_into().unwrap_throw()
    }
}

impl AsRef<web_sys::Node> for ElementBuilder {
    fn as_ref(&self) -> &web_sys::Node {
        self.element.as_ref()
    }
}

/// Add or remove `class` from `element`.
pub(crate) fn set_class(element: &web_sys::Element, class: &str, enabled: bool) {
    element
        .class_list()
        .toggle_with_force(class, enabled)
        .unwrap_throw();
}

/// Replace all children of `parent` with `children`.
pub(crate) fn replace_children<'a>(
    parent: &web_sys::Node,
    children: impl IntoIterator<Item = &'a web_sys::Element>,
) {
    parent.set_text_content(None);
    for child in children {
        parent.append_child(child).unwrap_throw();
    }
}

/// Upcast a freshly built element to a [`web_sys::HtmlElement`], to show or hide it.
pub(crate) fn html(element: web_sys::Element) -> web_sys::HtmlElement {
    element.unchecked_into()
}
