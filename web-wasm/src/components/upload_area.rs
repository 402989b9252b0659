//! アップロードエリアコンポーネント
//!
//! ファイル1つを選択する。新しく選んだファイルは前の選択を置き換える。
//! 種類の検証はしない（判定はAPI側）。

use crate::staging;
use farmguard_common::StagedFile;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader, HtmlInputElement};

#[component]
pub fn UploadArea<F>(is_busy: Signal<bool>, on_file_selected: F) -> impl IntoView
where
    F: Fn(StagedFile, String) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let is_enabled = move || !is_busy.get();

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if !is_enabled() {
                return;
            }

            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                read_file(file, on_file_selected.clone());
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if is_enabled() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if is_enabled() {
            open_file_dialog(on_file_selected.clone());
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if !is_enabled() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>"Drag & drop a plant photo, or click to select"</p>
            <p class="text-muted">"Supported: JPEG, PNG"</p>
        </div>
    }
}

fn open_file_dialog<F>(on_file_selected: F)
where
    F: Fn(StagedFile, String) + 'static + Clone,
{
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(input) = document
        .create_element("input")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    input.set_type("file");
    input.set_accept("image/*");

    let picker = input.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(file) = picker.files().and_then(|files| files.get(0)) {
            read_file(file, on_file_selected.clone());
        }
    }) as Box<dyn FnMut(_)>);

    input.set_onchange(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
    input.click();
}

fn read_file<F>(file: File, on_file_selected: F)
where
    F: Fn(StagedFile, String) + 'static,
{
    let Ok(reader) = FileReader::new() else {
        return;
    };

    let file_name = file.name();
    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        let Some(data_url) = reader_clone.result().ok().and_then(|r| r.as_string()) else {
            return;
        };
        match staging::staged_file_from_data_url(&file_name, &data_url) {
            Some(staged) => on_file_selected(staged, data_url),
            None => gloo::console::warn!(format!("could not read {}", file_name)),
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(e) = reader.read_as_data_url(&file) {
        gloo::console::error!(e);
    }
}
