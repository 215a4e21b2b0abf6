//! `setTimeout`-backed scheduler.

use std::time::Duration;

use futures::future::LocalBoxFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::log;
use crate::controller::Scheduler;

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: LocalBoxFuture<'static, ()>) {
        let Some(window) = web_sys::window() else {
            log!("[fundme] no window, dropping scheduled task");
            return;
        };
        let callback = Closure::once_into_js(move || wasm_bindgen_futures::spawn_local(task));
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis) {
            log!("[fundme] setTimeout failed: {:?}", e);
        }
    }
}
