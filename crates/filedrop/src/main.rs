use dioxus::html::FileData;
use dioxus::prelude::*;
use filedrop_io::{FileDropZone, Text, Texts, ZoneStyles};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Mounts two zones: a drop-only zone taking up to three JPEGs, and a
/// click-to-browse zone taking a single image with custom copy.
fn app() -> Element {
    let mut uploaded = use_signal(Vec::<String>::new);

    let on_upload = move |files: Vec<FileData>| {
        let names: Vec<String> = files.iter().map(FileData::name).collect();
        web_sys::console::log_1(&format!("uploaded: {}", names.join(", ")).into());
        uploaded.set(names);
    };

    let single_texts = Texts {
        hover: Text::template(|ctx| format!("Drop one of: {}", ctx.formats.join(", "))),
        success: Text::template(|ctx| format!("Got {}", ctx.files.join(", "))),
        ..Texts::default()
    };

    let framed = ZoneStyles {
        container: "width: 320px; height: 200px; border: 1px dashed #cccccc;".into(),
        ..ZoneStyles::default()
    };

    rsx! {
        div { style: "display: flex; gap: 24px; padding: 24px; font-family: Tahoma, sans-serif;",
            FileDropZone {
                on_upload: on_upload,
                count: 3,
                formats: vec!["jpg".to_owned()],
                styles: framed.clone(),
                div { style: "display: flex; height: 100%; align-items: center; justify-content: center;",
                    "Hey, drop me some files"
                }
            }

            FileDropZone {
                on_upload: on_upload,
                count: 1,
                formats: vec!["jpg".to_owned(), "png".to_owned(), "svg".to_owned()],
                texts: single_texts,
                styles: framed,
                open_dialog_on_click: true,
                div { style: "display: flex; height: 100%; align-items: center; justify-content: center;",
                    "Drop or click to pick an image"
                }
            }
        }

        if !uploaded().is_empty() {
            ul { style: "padding: 0 24px;",
                for name in uploaded() {
                    li { "{name}" }
                }
            }
        }
    }
}
