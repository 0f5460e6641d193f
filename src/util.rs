//! Console logging, date formatting and CSV export helpers.

use wasm_bindgen::{JsCast, JsValue};

pub fn cerror(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

/// Human-readable sign-in date: "Never" when absent, locale date
/// otherwise, "Invalid date" for anything js Date cannot parse.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return "Never".to_string();
    };
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return "Invalid date".to_string();
    }
    date.to_locale_date_string("en-US", &JsValue::UNDEFINED).into()
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Renders the visible user rows as CSV, header row included.
pub fn users_to_csv(users: &[&crate::model::User]) -> String {
    let mut out = String::from("Name,Email,Domain,Department,License,Last Sign-in,Status\n");
    for u in users {
        let row = [
            csv_field(&u.display_name),
            csv_field(&u.email),
            csv_field(&u.domain),
            csv_field(u.department.as_deref().unwrap_or("")),
            csv_field(u.license_type.as_deref().unwrap_or("")),
            csv_field(u.last_sign_in.as_deref().unwrap_or("Never")),
            csv_field(if u.account_enabled { "Active" } else { "Disabled" }),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Hands `content` to the browser as a file download via a Blob object
/// URL and a synthetic anchor click.
pub fn download_csv(filename: &str, content: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let props = web_sys::BlobPropertyBag::new();
    props.set_type("text/csv");
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &props) else {
        cerror("csv export: failed to build blob");
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        cerror("csv export: failed to create object URL");
        return;
    };
    if let Ok(el) = document.create_element("a") {
        if let Ok(anchor) = el.dyn_into::<web_sys::HtmlAnchorElement>() {
            anchor.set_href(&url);
            anchor.set_download(filename);
            anchor.click();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    fn user(name: &str) -> User {
        User {
            id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            display_name: name.to_string(),
            domain: "example.com".to_string(),
            last_sign_in: Some("2024-03-01T00:00:00Z".to_string()),
            account_enabled: true,
            license_type: Some("Business Basic".to_string()),
            department: None,
            manager: None,
        }
    }

    #[test]
    fn csv_has_header_and_one_line_per_user() {
        let a = user("Ada Lovelace");
        let b = user("Grace Hopper");
        let csv = users_to_csv(&[&a, &b]);
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name,Email"));
        assert!(lines[1].contains("Ada Lovelace"));
        assert!(lines[2].ends_with("Active"));
    }

    #[test]
    fn csv_quotes_commas_and_doubles_quotes() {
        let mut u = user("Lovelace, Ada \"The First\"");
        u.department = Some("R&D\nOps".to_string());
        let csv = users_to_csv(&[&u]);
        assert!(csv.contains("\"Lovelace, Ada \"\"The First\"\"\""));
        assert!(csv.contains("\"R&D\nOps\""));
    }

    #[test]
    fn csv_shows_never_for_missing_sign_in() {
        let mut u = user("Ada");
        u.last_sign_in = None;
        u.account_enabled = false;
        let csv = users_to_csv(&[&u]);
        assert!(csv.contains(",Never,Disabled"));
    }
}
