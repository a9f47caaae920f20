//! Product Details UI Module
//!
//! MVVM split:
//! - form.rs: plain form state, validation and the submit/cancel state machine
//! - view_model.rs: ViewModel wiring the form state to signals and callbacks
//! - view.rs: Leptos component (pure UI)

pub mod form;
mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
