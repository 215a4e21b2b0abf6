//! Page bootstrap: config, DOM lookup, listeners, auto-connect.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { mount } from 'fundme';
//!
//! window.addEventListener('DOMContentLoaded', async () => {
//!     await init();
//!     mount({ contractAddress: CONTRACT, ownerAddress: OWNER });
//! });
//! ```

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom::{self, DomBinder, DomStatus};
use super::provider::InjectedProvider;
use super::timer::TimeoutScheduler;
use super::{console_error, log};
use crate::config::ControllerConfig;
use crate::controller::{Action, ControllerContext, TransactionController};

/// Wire the controller to the page. Refuses to initialize (and logs) when a
/// required element is missing; nothing is bound in that case.
#[wasm_bindgen]
pub fn mount(config: JsValue) -> Result<(), JsValue> {
    let config: ControllerConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("invalid config: {e}")))?;
    config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;

    let document = dom::document().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let binder = match DomBinder::from_document(&document) {
        Ok(binder) => binder,
        Err(e) => {
            console_error(&e.to_string());
            return Err(JsValue::from_str(&e.to_string()));
        }
    };

    let provider = InjectedProvider::new();
    let controller = TransactionController::new(
        config,
        Rc::new(provider.clone()),
        ControllerContext {
            binder: Rc::new(binder.clone()),
            status: Rc::new(DomStatus::from_document(&document)),
            scheduler: Rc::new(TimeoutScheduler),
        },
    );

    for action in Action::ALL {
        let controller = controller.clone();
        let binder_for_click = binder.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            let controller = controller.clone();
            let amount = binder_for_click.amount();
            wasm_bindgen_futures::spawn_local(async move {
                let _ = match action {
                    Action::Connect => controller.connect().await,
                    Action::Fund => controller.fund(&amount).await,
                    Action::Withdraw => controller.withdraw().await,
                    Action::Balance => controller.query_balance().await,
                };
            });
        });
        binder
            .button(action)
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    let on_change = controller.clone();
    provider.on_accounts_changed(move |accounts| on_change.handle_accounts_changed(&accounts))?;

    log!("[fundme] controller bound to {}", controller.config().contract_address);
    wasm_bindgen_futures::spawn_local(async move { controller.initialize().await });
    Ok(())
}
