//! Drag-and-drop upload zone with optional click-to-browse.

use dioxus::core::Task;
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use filedrop_core::{DropZone, MessageDurations, Outcome, Texts, ZoneConfig, ZoneStyles};

use crate::{dialog, timer};

/// Props for the [`FileDropZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileDropZoneProps {
    /// Called with the whole batch once it passes validation.
    on_upload: EventHandler<Vec<FileData>>,
    /// Content the zone wraps.
    children: Element,
    /// Maximum files per batch. `0` means unlimited.
    #[props(default)]
    count: usize,
    /// Accepted filename extensions, e.g. `["jpg", "png"]`. Empty means
    /// any file is accepted.
    #[props(default)]
    formats: Vec<String>,
    /// Hover, success, and error copy.
    #[props(default)]
    texts: Texts,
    /// Inline CSS overrides.
    #[props(default)]
    styles: ZoneStyles,
    /// How long success and error messages stay visible.
    #[props(default)]
    durations: MessageDurations,
    /// Open the native file picker when the zone is clicked.
    #[props(default)]
    open_dialog_on_click: bool,
    /// Fired on every `dragenter`, after internal handling.
    on_drag_enter: Option<EventHandler<DragEvent>>,
    /// Fired on every `dragleave`, after internal handling.
    on_drag_leave: Option<EventHandler<DragEvent>>,
    /// Fired on every `drop`, after internal handling.
    on_drop: Option<EventHandler<DragEvent>>,
}

/// Which side of a drag crossing a zone boundary.
#[derive(Debug, Clone, Copy)]
enum Crossing {
    Enter,
    Leave,
}

/// Hand an event to an optional observer.
fn notify<T: 'static>(observer: Option<EventHandler<T>>, evt: T) {
    if let Some(observer) = observer {
        observer.call(evt);
    }
}

/// Count one `dragenter`/`dragleave` against the zone, then pass it on.
///
/// The observer sees every event, including the ones on nested children
/// that leave the hover state unchanged.
fn track_drag<T: 'static>(
    mut zone: Signal<DropZone>,
    crossing: Crossing,
    observer: Option<EventHandler<T>>,
    evt: T,
) {
    match crossing {
        Crossing::Enter => zone.write().drag_enter(),
        Crossing::Leave => zone.write().drag_leave(),
    };
    notify(observer, evt);
}

/// A container that accepts dropped files.
///
/// While a payload hovers over the zone (or any of its children) a hover
/// overlay covers the content. Dropped or picked files are checked
/// against `count` and `formats`; an accepted batch goes to `on_upload`
/// and a short success message is shown, a rejected batch only shows an
/// error message. Configuration is read once, when the zone mounts.
#[component]
#[allow(clippy::too_many_lines)]
pub fn FileDropZone(props: FileDropZoneProps) -> Element {
    let mut zone = use_signal(|| {
        DropZone::new(
            ZoneConfig {
                max_files: std::num::NonZeroUsize::new(props.count),
                formats: props.formats.clone(),
                durations: props.durations,
                open_dialog_on_click: props.open_dialog_on_click,
            },
            props.texts.clone(),
        )
    });
    let pending = use_signal(|| Option::<Task>::None);
    let input_id = use_hook(dialog::next_input_id);

    let on_upload = props.on_upload;
    let on_drag_enter = props.on_drag_enter;
    let on_drag_leave = props.on_drag_leave;
    let on_drop = props.on_drop;

    // Validate and forward a batch. Shared by the drop and file-picker
    // paths so both go through identical rules.
    let mut submit = move |files: Vec<FileData>, dropped: bool| {
        let names: Vec<String> = files.iter().map(FileData::name).collect();
        let outcome = if dropped {
            zone.write().drop(&names)
        } else {
            zone.write().select(&names)
        };
        if let Some(scheduled) = outcome.scheduled() {
            timer::schedule_dismissal(zone, pending, scheduled);
        }
        match outcome {
            Outcome::Accepted(_) => on_upload.call(files),
            Outcome::Rejected(rejection, _) => {
                web_sys::console::debug_1(&format!("filedrop: rejected batch: {rejection}").into());
            }
            Outcome::Empty => {}
        }
    };

    let handle_drag_enter = move |evt: DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        track_drag(zone, Crossing::Enter, on_drag_enter, evt);
    };

    let handle_drag_leave = move |evt: DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        track_drag(zone, Crossing::Leave, on_drag_leave, evt);
    };

    // Without this the browser navigates to the dragged file.
    let handle_drag_over = move |evt: DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        submit(evt.files(), true);
        notify(on_drop, evt);
    };

    let click_id = input_id.clone();
    let handle_click = move |_: MouseEvent| {
        if !zone.peek().config().open_dialog_on_click {
            return;
        }
        if let Err(e) = dialog::open(&click_id) {
            web_sys::console::warn_1(&format!("filedrop: cannot open file dialog: {e}").into());
        }
    };

    let change_id = input_id.clone();
    let handle_files = move |evt: FormEvent| {
        submit(evt.files(), false);
        if let Err(e) = dialog::reset(&change_id) {
            web_sys::console::warn_1(&format!("filedrop: cannot reset file input: {e}").into());
        }
    };

    let (message, hovering, hover_text, dialog_enabled, multiple, accept) = {
        let z = zone.read();
        (
            z.message().cloned(),
            z.is_hovering(),
            z.hover_text(),
            z.config().open_dialog_on_click,
            z.rules().allows_multiple(),
            z.rules().accept_attribute(),
        )
    };

    let styles = &props.styles;
    let container_style = if dialog_enabled {
        format!("{} cursor: pointer;", styles.container_style())
    } else {
        styles.container_style()
    };
    let hover_style = styles.hover_style();

    rsx! {
        div {
            class: "filedrop",
            style: "{container_style}",
            ondragenter: handle_drag_enter,
            ondragleave: handle_drag_leave,
            ondragover: handle_drag_over,
            ondrop: handle_drop,
            onclick: handle_click,

            if let Some(message) = message {
                div {
                    class: "filedrop__message filedrop__message--{message.kind.as_str()}",
                    style: "{styles.message_style(message.kind)}",
                    role: "status",
                    "{message.text}"
                }
            }

            if hovering {
                div {
                    class: "filedrop__message",
                    style: "{hover_style}",
                    "{hover_text}"
                }
            }

            {props.children}

            if dialog_enabled {
                input {
                    id: "{input_id}",
                    r#type: "file",
                    style: "display: none;",
                    multiple: multiple,
                    accept: accept,
                    // The programmatic click bubbles; keep it from
                    // re-triggering the zone's own click handler.
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    onchange: handle_files,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use dioxus::core::VirtualDom;
    use filedrop_core::style::CONTAINER;

    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn ignore(_: Vec<FileData>) {}

    fn drop_only() -> Element {
        rsx! {
            FileDropZone { on_upload: ignore, count: 3, formats: vec!["jpg".to_owned()],
                span { "zone body" }
            }
        }
    }

    fn browsable() -> Element {
        rsx! {
            FileDropZone {
                on_upload: ignore,
                count: 3,
                formats: vec!["jpg".to_owned(), "png".to_owned()],
                open_dialog_on_click: true,
                span { "zone body" }
            }
        }
    }

    fn browsable_single() -> Element {
        rsx! {
            FileDropZone { on_upload: ignore, count: 1, open_dialog_on_click: true,
                span { "zone body" }
            }
        }
    }

    #[test]
    fn drop_only_zone_has_no_file_input() {
        let html = render(drop_only);
        assert!(!html.contains("<input"), "{html}");
        assert!(html.contains(CONTAINER), "{html}");
        assert!(!html.contains("cursor: pointer"), "{html}");
    }

    #[test]
    fn children_render_without_overlays() {
        let html = render(drop_only);
        assert!(html.contains("zone body"), "{html}");
        assert!(!html.contains("filedrop__message"), "{html}");
    }

    #[test]
    fn browsable_zone_renders_file_input() {
        let html = render(browsable);
        assert!(html.contains("<input"), "{html}");
        assert!(html.contains(r#"type="file""#), "{html}");
        assert!(html.contains(r#"accept=".jpg,.png""#), "{html}");
        assert!(html.contains("multiple"), "{html}");
        assert!(html.contains("cursor: pointer"), "{html}");
        assert!(html.contains("zone body"), "{html}");
    }

    #[test]
    fn single_file_input_is_not_multiple_or_filtered() {
        let html = render(browsable_single);
        assert!(html.contains(r#"type="file""#), "{html}");
        assert!(!html.contains("multiple=true"), "{html}");
        assert!(!html.contains(r#"multiple="true""#), "{html}");
        assert!(!html.contains("accept="), "{html}");
    }

    thread_local! {
        static OBSERVED: Cell<usize> = const { Cell::new(0) };
        static HOVERING: RefCell<Vec<bool>> = const { RefCell::new(Vec::new()) };
    }

    fn nested_drag() -> Element {
        let zone = use_signal(|| DropZone::new(ZoneConfig::default(), Texts::default()));
        use_hook(move || {
            let observer = EventHandler::new(|(): ()| OBSERVED.set(OBSERVED.get() + 1));
            // Zone, child, back out of the child, out of the zone.
            for crossing in [
                Crossing::Enter,
                Crossing::Enter,
                Crossing::Leave,
                Crossing::Leave,
            ] {
                track_drag(zone, crossing, Some(observer), ());
                HOVERING.with_borrow_mut(|h| h.push(zone.peek().is_hovering()));
            }
        });
        rsx! {}
    }

    #[test]
    fn observers_see_every_crossing() {
        render(nested_drag);
        assert_eq!(OBSERVED.get(), 4);
        HOVERING.with_borrow(|h| assert_eq!(*h, [true, true, true, false]));
    }
}
