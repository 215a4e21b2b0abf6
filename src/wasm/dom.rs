//! DOM side of the affordance contract: buttons, amount input, status text.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlInputElement};

use super::log;
use crate::controller::{Action, Affordance, AffordanceBinder};
use crate::core::constants::dom;
use crate::status::StatusSink;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window/document")]
    NoDocument,
    #[error("Required DOM element not found: #{0}")]
    MissingElement(&'static str),
}

fn element<T: JsCast>(document: &Document, id: &'static str) -> Result<T, DomError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(DomError::MissingElement(id))
}

pub(crate) fn document() -> Result<Document, DomError> {
    web_sys::window().and_then(|w| w.document()).ok_or(DomError::NoDocument)
}

/// The four action buttons plus the amount input. All are required.
#[derive(Clone)]
pub struct DomBinder {
    connect: HtmlButtonElement,
    fund: HtmlButtonElement,
    withdraw: HtmlButtonElement,
    balance: HtmlButtonElement,
    amount: HtmlInputElement,
}

impl DomBinder {
    pub fn from_document(document: &Document) -> Result<Self, DomError> {
        Ok(Self {
            connect: element(document, dom::CONNECT_BUTTON)?,
            fund: element(document, dom::FUND_BUTTON)?,
            withdraw: element(document, dom::WITHDRAW_BUTTON)?,
            balance: element(document, dom::BALANCE_BUTTON)?,
            amount: element(document, dom::AMOUNT_INPUT)?,
        })
    }

    pub fn button(&self, action: Action) -> &HtmlButtonElement {
        match action {
            Action::Connect => &self.connect,
            Action::Fund => &self.fund,
            Action::Withdraw => &self.withdraw,
            Action::Balance => &self.balance,
        }
    }

    pub fn amount(&self) -> String {
        self.amount.value()
    }
}

impl AffordanceBinder for DomBinder {
    fn render(&self, action: Action, affordance: &Affordance) {
        let button = self.button(action);
        button.set_inner_html(&affordance.label);
        button.set_disabled(!affordance.enabled);
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Status text node (optional on the page) mirrored to the console.
pub struct DomStatus {
    element: Option<HtmlElement>,
}

impl DomStatus {
    pub fn from_document(document: &Document) -> Self {
        Self { element: element(document, dom::STATUS).ok() }
    }
}

impl StatusSink for DomStatus {
    fn publish(&self, message: &str) {
        if let Some(el) = &self.element {
            el.set_text_content(Some(message));
        }
        log!("{}", message);
    }
}
