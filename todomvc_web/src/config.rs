// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use tracing::Level;

use crate::{WebError, util};

/// The `<body>` attribute naming the element to mount into.
pub const MOUNT_ATTRIBUTE: &str = "data-mount";
/// The `<body>` attribute with the maximum log level.
pub const LOG_LEVEL_ATTRIBUTE: &str = "data-log-level";

/// Where the app is rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Mount {
    /// Append to `<body>`.
    #[default]
    Body,
    /// Append to the element with this id.
    ElementId(String),
}

impl Mount {
    pub(crate) fn resolve(
        &self,
        document: &web_sys::Document,
    ) -> Result<web_sys::Element, WebError> {
        match self {
            Self::Body => Ok(document.body().ok_or(WebError::NoBody)?.into()),
            Self::ElementId(id) => document
                .get_element_by_id(id)
                .ok_or_else(|| WebError::MissingMount(id.clone())),
        }
    }
}

/// Run-time configuration of the app.
#[derive(Clone, Debug)]
pub struct Config {
    /// Where to render.
    pub mount: Mount,
    /// The most verbose level logged to the console.
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mount: Mount::Body,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// The default configuration, overridden by the `data-mount` and `data-log-level`
    /// attributes of `<body>`.
    ///
    /// Outside of a browser document, this is the default configuration.
    pub fn from_document() -> Self {
        let Ok(body) = util::document_body() else {
            return Self::default();
        };
        Self::default().with_overrides(
            body.get_attribute(MOUNT_ATTRIBUTE).as_deref(),
            body.get_attribute(LOG_LEVEL_ATTRIBUTE).as_deref(),
        )
    }

    /// Apply overrides given as strings, ignoring empty or invalid values.
    ///
    /// This runs before logging is set up, so invalid values can't be reported.
    pub fn with_overrides(mut self, mount: Option<&str>, log_level: Option<&str>) -> Self {
        if let Some(id) = mount.map(str::trim).filter(|id| !id.is_empty()) {
            self.mount = Mount::ElementId(id.to_owned());
        }
        if let Some(level) = log_level.and_then(|level| level.trim().parse().ok()) {
            self.log_level = level;
        }
        self
    }
}
