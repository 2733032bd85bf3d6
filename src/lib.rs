//! # kcal
//!
//! A calorie counter for the terminal, written in the Model-View-Update style:
//!
//! ```text
//! key press -> Msg -> update(Model) -> view(Model) -> diff(old, new) -> patch(Document) -> paint
//! ```
//!
//! 1. [`models`] - meal rows and the calorie total.
//! 2. [`vdom`] - the render tree, its structural diff and the live [`vdom::Document`].
//! 3. [`runtime`] - the [`runtime::Program`] contract and the [`runtime::Runtime`] shell that owns
//!    the model, the current render tree and the document.
//! 4. [`ui`] - the calorie counter itself (messages, update, view) plus the terminal painter
//!    and keymap.
//! 5. [`config`] - TOML configuration for labels, mount point and log filter.

pub mod config;
pub mod error;
pub mod models;
pub mod runtime;
pub mod ui;
pub mod vdom;

pub use error::{Error, Result};
