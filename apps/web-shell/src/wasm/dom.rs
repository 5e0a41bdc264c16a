use super::*;

/// Writes panel output into the page template. Every missing element turns
/// the corresponding write into a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct DomPanelView;

impl PanelView for DomPanelView {
    fn apply_render(&self, target: &PanelTarget, render: &PanelRender) {
        let Some(document) = document() else {
            return;
        };
        if let Some(list) = document.get_element_by_id(&target.list_id) {
            if let Err(error) = render_list(&document, &list, &render.list) {
                warn!(target = %target.name, %error, "failed to render notification list");
            }
        }
        if let Some(badge) = document.get_element_by_id(&target.badge_id) {
            render_badge(&badge, render.badge);
        }
    }

    fn set_dropdown_visible(&self, dropdown_id: &str, visible: bool) {
        let Some(dropdown) = document().and_then(|document| document.get_element_by_id(dropdown_id))
        else {
            return;
        };
        set_hidden(&dropdown, !visible);
    }
}

pub(super) fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub(super) fn set_hidden(element: &Element, hidden: bool) {
    let classes = element.class_list();
    let _ = if hidden {
        classes.add_1(HIDDEN_CLASS)
    } else {
        classes.remove_1(HIDDEN_CLASS)
    };
}

pub(super) fn is_hidden(element: &Element) -> bool {
    element.class_list().contains(HIDDEN_CLASS)
}

fn render_list(
    document: &web_sys::Document,
    list: &Element,
    view: &ListView,
) -> Result<(), String> {
    list.set_inner_html("");
    match view {
        ListView::Empty => {
            let placeholder = create_with_classes(document, "p", EMPTY_PLACEHOLDER_CLASSES)?;
            placeholder.set_text_content(Some(EMPTY_LIST_PLACEHOLDER));
            append(list, &placeholder)
        }
        ListView::Rows(rows) => {
            for row in rows {
                let element = render_row(document, row)?;
                append(list, &element)?;
            }
            Ok(())
        }
    }
}

fn render_row(document: &web_sys::Document, row: &NotificationRow) -> Result<Element, String> {
    let container = create_with_classes(document, "div", ROW_CLASSES)?;

    let message = create_with_classes(document, "p", &row_message_classes(row.emphasized))?;
    message.set_text_content(Some(&row.message));
    append(&container, &message)?;

    let age = create_with_classes(document, "p", ROW_AGE_CLASSES)?;
    age.set_text_content(Some(&age_label(&row.age)));
    append(&container, &age)?;

    Ok(container)
}

fn render_badge(badge: &Element, view: BadgeView) {
    match view.label() {
        Some(label) => {
            badge.set_text_content(Some(&label));
            set_hidden(badge, false);
        }
        None => set_hidden(badge, true),
    }
}

fn age_label(age: &RelativeAge) -> String {
    match age {
        RelativeAge::Date(created_at) => locale_date_string(created_at.timestamp_millis()),
        other => other.to_string(),
    }
}

fn locale_date_string(epoch_millis: i64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(epoch_millis as f64));
    String::from(date.to_locale_date_string(&browser_locale(), &JsValue::UNDEFINED))
}

fn browser_locale() -> String {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .filter(|language| !language.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
}

pub(super) fn apply_attachment_preview(input: &HtmlInputElement) -> Result<(), String> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(());
    };
    let preview = AttachmentPreview::from_file(&file.name(), file.size());

    let Some(label) = input
        .closest("label")
        .map_err(|_| "failed to look up attachment label".to_string())?
    else {
        return Ok(());
    };
    let document = document().ok_or_else(|| "document is unavailable".to_string())?;

    if let Some(text) = label
        .query_selector("p")
        .map_err(|_| "failed to look up attachment text".to_string())?
    {
        text.set_inner_html("");
        let name = create_with_classes(&document, "span", ATTACHMENT_NAME_CLASS)?;
        name.set_text_content(Some(&preview.file_name));
        let line_break = document
            .create_element("br")
            .map_err(|_| "failed to create br element".to_string())?;
        let size = create_with_classes(&document, "span", ATTACHMENT_SIZE_CLASS)?;
        size.set_text_content(Some(&preview.size_label));
        append(&text, &name)?;
        append(&text, &line_break)?;
        append(&text, &size)?;
    }

    if let Some(icon) = label
        .query_selector("svg")
        .map_err(|_| "failed to look up attachment icon".to_string())?
    {
        set_hidden(&icon, true);
    }
    Ok(())
}

fn create_with_classes(
    document: &web_sys::Document,
    tag: &str,
    classes: &str,
) -> Result<Element, String> {
    let element = document
        .create_element(tag)
        .map_err(|_| format!("failed to create {tag} element"))?;
    element.set_class_name(classes);
    Ok(element)
}

fn append(parent: &Element, child: &Element) -> Result<(), String> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|_| "failed to append element".to_string())
}
