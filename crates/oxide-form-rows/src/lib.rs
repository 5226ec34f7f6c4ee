//! # oxide-form-rows
//!
//! Decorated form rows: every form field is wrapped in a row holding its
//! label, an optional required marker, an optional hint and an optional
//! error message.
//!
//! This crate provides:
//! - A row decorator (`form_wow_row`) that assembles one row of markup
//! - A form builder whose field operations decorate themselves
//! - Grouping of several fields into one row with a shared error summary
//! - A registry for making custom field kinds decoratable
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_form_rows::{FieldOptions, FormTag, FormWow, Record, RowOptions};
//!
//! let wow = FormWow::default();
//! let person = Record::new()
//!     .with_value("email", "ada@example")
//!     .with_error("email", "is invalid");
//!
//! let html = wow
//!     .form_for("person", Some(&person), &FormTag::new("/people"), |f| {
//!         f.concat(f.text_field(
//!             "first_name",
//!             FieldOptions::new().required().hint("As on passport"),
//!         ));
//!         f.concat(f.text_field("email", FieldOptions::new()));
//!         f.row("Address", RowOptions::new(), |f| {
//!             f.concat(f.text_field("street", FieldOptions::new()));
//!             f.concat(f.text_field("city", FieldOptions::new()));
//!             Ok(())
//!         })
//!     })
//!     .unwrap();
//!
//! assert!(html.contains("As on passport"));
//! assert!(html.contains("is invalid"));
//! ```
//!
//! ## Suppressing Decoration
//!
//! ```rust
//! use oxide_form_rows::{FieldOptions, FormWow};
//!
//! let wow = FormWow::default();
//! let html = wow
//!     .fields_for("search", None, |f| {
//!         f.no_decoration(|f| {
//!             f.concat(f.text_field("q", FieldOptions::new()));
//!             Ok(())
//!         })
//!     })
//!     .unwrap();
//! assert_eq!(html, r#"<input type="text" name="search[q]" class="text" id="search_q">"#);
//! ```
//!
//! ## Custom Field Kinds
//!
//! ```rust
//! use oxide_form_rows::{FieldOptions, FormWow};
//! use oxide_form_rows::widgets::TextArea;
//!
//! let mut wow = FormWow::default();
//! wow.upgrade_helper_method("tinymce", "tinymce", false);
//!
//! let html = wow
//!     .fields_for("post", None, |f| {
//!         let editor = f.helper("tinymce", "body", &TextArea::new(20, 80), FieldOptions::new())?;
//!         f.concat(editor);
//!         Ok(())
//!     })
//!     .unwrap();
//! assert!(html.contains("tinymce"));
//! ```

mod builder;
mod config;
mod error;
mod form;
pub mod inflect;
mod object;
mod options;
mod registry;
mod row;
mod template;
pub mod widgets;

pub use builder::FormBuilder;
pub use config::{FormWowConfig, GroupingMode, FORM_WOW_ROW};
pub use error::{FormError, Result, ValidationErrors};
pub use form::{FormTag, FormWow};
pub use object::{FormObject, Record};
pub use options::{FieldOptions, RowOptions};
pub use registry::{HelperRegistry, HelperSpec};
pub use row::{form_wow_row, DecoratorRegistry, FormWowRow, RowDecorator};
pub use template::Template;
