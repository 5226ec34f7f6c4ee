//! Renders a sign-up form with decorated rows and prints the markup.
//!
//! Pass `--verbose` to see the per-field trace logs.

use oxide_form_rows::widgets::TextArea;
use oxide_form_rows::{FieldOptions, FormTag, FormWow, FormWowConfig, Record, RowOptions};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let verbose = std::env::args().any(|arg| arg == "--verbose");
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if verbose { Level::TRACE } else { Level::INFO })
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = FormWowConfig::from_json(
        r#"{
            "required_symbol": "*",
            "wrap_field_errors": false,
            "custom_helpers": [
                {"name": "rich_text", "row_class": "rich-text", "append_class_to_field": false}
            ]
        }"#,
    )?;
    let wow = FormWow::new(config);

    let person = Record::from_json(
        r#"{
            "first_name": "Ada",
            "email": "ada@example",
            "country": "gb",
            "errors": {
                "email": ["is invalid"],
                "last_name": ["is required"]
            }
        }"#,
    )?;

    let tag = FormTag::new("/people").class("signup").id("new_person");
    let html = wow.form_for("person", Some(&person), &tag, |f| {
        f.row("Name", RowOptions::new().required(), |f| {
            f.concat(f.text_field("first_name", FieldOptions::new()));
            f.concat(f.text_field("last_name", FieldOptions::new()));
            Ok(())
        })?;
        f.concat(f.text_field(
            "email",
            FieldOptions::new().required().hint("We send the confirmation here"),
        ));
        f.concat(f.password_field("password", FieldOptions::new().required()));
        f.concat(f.select(
            "country",
            [("gb", "United Kingdom"), ("nl", "Netherlands")],
            FieldOptions::new(),
        ));
        f.concat(f.helper("rich_text", "bio", &TextArea::new(8, 60), FieldOptions::new())?);
        f.concat(f.check_box(
            "terms",
            FieldOptions::new().label("I accept the terms"),
            "1",
            "0",
        ));
        f.no_decoration(|f| {
            f.concat(f.text_field("referral", FieldOptions::new().attr("autocomplete", "off")));
            Ok(())
        })
    })?;

    info!(bytes = html.len(), "Rendered sign-up form");
    println!("{html}");
    Ok(())
}
