//! Tests for single-field decoration: labels, required markers, hints,
//! errors and row classes.

mod common;
use common::*;

use oxide_form_rows::widgets::{Select, TextInput, Widget, WidgetAttrs};
use oxide_form_rows::{FieldOptions, FormTag, FormWow, FormWowConfig, Record};

#[test]
fn test_first_name_with_required_and_hint() {
    let wow = FormWow::default();
    let html = render(&wow, None, |f| {
        f.concat(f.text_field(
            "first_name",
            FieldOptions::new().required().hint("As on passport"),
        ));
        Ok(())
    });

    assert!(html.starts_with(r#"<div class="row required">"#));
    let label = between(&html, "<label", "</label>");
    assert!(label.contains(r#"for="person_first_name""#));
    assert!(label.find("required_symbol").unwrap() < label.find("First Name").unwrap());
    assert!(html.contains("As on passport"));
    assert!(!html.contains(r#"class="error""#));
    assert!(html.ends_with(
        r#"<input type="text" name="person[first_name]" class="text" id="person_first_name"></div>"#
    ));
}

#[test]
fn test_bare_field_has_no_optional_fragments() {
    let html = render(&wow(), None, |f| {
        f.concat(f.text_field("nickname", FieldOptions::new()));
        Ok(())
    });
    assert!(html.starts_with(r#"<div class="row">"#));
    assert!(!html.contains("hint"));
    assert!(!html.contains("required_symbol"));
    assert!(!html.contains(r#"class="error""#));
}

#[test]
fn test_structural_kinds_add_their_class_to_the_row() {
    let html = render(&wow(), None, |f| {
        f.concat(f.text_area("bio", FieldOptions::new()));
        Ok(())
    });
    assert!(html.starts_with(r#"<div class="row textarea">"#));

    let html = render(&wow(), None, |f| {
        f.concat(f.select("role", [("user", "User"), ("admin", "Admin")], FieldOptions::new()));
        Ok(())
    });
    assert!(html.starts_with(r#"<div class="row select">"#));
    assert!(html.contains(r#"<option value="admin">Admin</option>"#));
}

#[test]
fn test_required_symbol_override_and_config_default() {
    let html = render(&wow(), None, |f| {
        f.concat(f.text_field("email", FieldOptions::new().required().required_symbol("(req)")));
        Ok(())
    });
    assert!(html.contains("(req)"));
    assert!(!html.contains(">*<"));

    let wow = FormWow::new(FormWowConfig::new().required_symbol("!"));
    let html = render(&wow, None, |f| {
        f.concat(f.text_field("email", FieldOptions::new().required()));
        Ok(())
    });
    assert!(html.contains(">!<"));
}

#[test]
fn test_explicit_error_marks_row_invalid_without_object() {
    let html = render(&wow(), None, |f| {
        f.concat(f.text_field("email", FieldOptions::new().error("is taken")));
        Ok(())
    });
    assert!(html.starts_with(r#"<div class="row invalid">"#));
    assert_eq!(between(&html, r#"<span class="error">"#, "</span>"), "is taken");
    assert!(html.contains(r#"class="text invalid""#));
}

#[test]
fn test_object_errors_consulted_only_without_explicit_error() {
    let person = Record::new()
        .with_error("age", "is not a number")
        .with_error("age", "is too low");

    let html = render(&wow(), Some(&person), |f| {
        f.concat(f.text_field("age", FieldOptions::new()));
        Ok(())
    });
    assert_eq!(
        between(&html, r#"<span class="error">"#, "</span>"),
        "is not a number, is too low"
    );

    let html = render(&wow(), Some(&person), |f| {
        f.concat(f.text_field("age", FieldOptions::new().error("Enter your age")));
        Ok(())
    });
    assert_eq!(
        between(&html, r#"<span class="error">"#, "</span>"),
        "Enter your age"
    );
}

#[test]
fn test_values_come_from_the_bound_object() {
    let person = Record::from_json(r#"{"role": "admin", "bio": "Hello", "admin": "1"}"#).unwrap();
    let html = render(&wow(), Some(&person), |f| {
        f.concat(f.select("role", [("user", "User"), ("admin", "Admin")], FieldOptions::new()));
        f.concat(f.text_area("bio", FieldOptions::new()));
        f.concat(f.check_box("admin", FieldOptions::new(), "1", "0"));
        Ok(())
    });
    assert!(html.contains(r#"<option value="admin" selected="selected">Admin</option>"#));
    assert!(html.contains(">Hello</textarea>"));
    assert!(html.contains(r#"checked="checked""#));
}

#[test]
fn test_class_append_is_a_set_union() {
    let html = render(&wow(), Some(&Record::new().with_error("email", "is invalid")), |f| {
        f.concat(f.text_field(
            "email",
            FieldOptions::new().class("text").class("invalid").row_class("wide"),
        ));
        Ok(())
    });
    assert!(html.contains(r#"class="text invalid""#));
    assert!(!html.contains("text text"));
    assert!(!html.contains("invalid invalid"));
    assert!(html.starts_with(r#"<div class="row invalid wide">"#));
}

#[test]
fn test_custom_helper_registration_is_idempotent() {
    let mut once = wow();
    once.upgrade_helper_method("color_field", "color", true);
    let mut twice = wow();
    twice
        .upgrade_helper_method("color_field", "color", true)
        .upgrade_helper_method("color_field", "color", true);

    struct ColorInput;
    impl Widget for ColorInput {
        fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
            TextInput
                .render(name, value, attrs)
                .replacen(r#"type="text""#, r#"type="color""#, 1)
        }
    }

    let render_color = |wow: &FormWow| {
        render(wow, None, |f| {
            f.concat(f.helper("color_field", "favourite", &ColorInput, FieldOptions::new())?);
            Ok(())
        })
    };
    let a = render_color(&once);
    let b = render_color(&twice);
    assert_eq!(a, b);
    assert!(a.contains(
        r#"<input type="color" name="person[favourite]" class="color" id="person_favourite">"#
    ));
}

#[test]
fn test_helper_accepts_custom_widget_for_builtin_kind() {
    let html = render(&wow(), None, |f| {
        let country = Select::new([("nl", "Netherlands")]).include_blank("Choose");
        let options = FieldOptions::new().label("Country of birth");
        f.concat(f.helper("select", "country", &country, options)?);
        Ok(())
    });
    assert!(html.contains(r#"<option value="">Choose</option>"#));
    assert!(html.contains("Country of birth"));
}

#[test]
fn test_id_attribute_is_used_by_label_and_field() {
    let html = render(&wow(), None, |f| {
        f.concat(f.text_field("email", FieldOptions::new().attr("id", "contact-email")));
        Ok(())
    });
    let label = between(&html, "<label", ">");
    assert_eq!(label, r#" for="contact-email""#);
    assert!(html.ends_with(
        r#"<input type="text" name="person[email]" class="text" id="contact-email"></div>"#
    ));
}

#[test]
fn test_form_for_wraps_rows_in_form_element() {
    let tag = FormTag::new("/people").id("new_person");
    let html = wow()
        .form_for("person", None, &tag, |f| {
            f.concat(f.text_field("email", FieldOptions::new()));
            Ok(())
        })
        .unwrap();
    assert!(html.starts_with("<form"));
    assert!(html.contains(r#"action="/people""#));
    assert!(html.contains(r#"method="post""#));
    assert!(html.contains(r#"<div><div class="row">"#));
    assert!(html.ends_with("</div></div></form>"));
}
