// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The TodoMVC web app.

use todomvc_web::Config;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    console_error_panic_hook::set_once();
    let config = Config::from_document();
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(config.log_level)
            .build(),
    );
    if let Err(err) = todomvc_web::start(&config) {
        tracing::error!("couldn't start the todo app: {err}");
    }
}
