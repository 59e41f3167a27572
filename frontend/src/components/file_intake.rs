//! FileIntake component - drop zone, file picker and uploaded file preview

use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FileList, HtmlInputElement};
use yew::prelude::*;

use docqa_shared::{ApiError, UploadResponse};

use crate::api;
use crate::controllers::FileIntakeController;
use crate::utils;

/// Messages for the FileIntake component
pub enum FileIntakeMsg {
    /// Files chosen in the picker dialog
    FilesSelected(Vec<File>),
    DragOver,
    DragLeave,
    /// Files dropped on the drop zone
    FilesDropped(FileList),
    Remove,
    /// Upload request finished
    Uploaded {
        file_name: String,
        result: Result<UploadResponse, ApiError>,
    },
}

pub struct FileIntake {
    controller: FileIntakeController<File>,
    file_input_ref: NodeRef,
}

fn files_of(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

impl FileIntake {
    fn start_upload(ctx: &Context<Self>, file: File) {
        let link = ctx.link().clone();
        spawn_local(async move {
            let file_name = file.name();
            log::debug!("Uploading {} ({} bytes)", file_name, file.size());
            let result = api::upload_file(&file).await;
            link.send_message(FileIntakeMsg::Uploaded { file_name, result });
        });
    }
}

impl Component for FileIntake {
    type Message = FileIntakeMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: FileIntakeController::new(),
            file_input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FileIntakeMsg::FilesSelected(files) => {
                if let Some(file) = self.controller.select(files) {
                    Self::start_upload(ctx, file);
                }
                false
            }
            FileIntakeMsg::DragOver => self.controller.drag_over(),
            FileIntakeMsg::DragLeave => self.controller.drag_leave(),
            FileIntakeMsg::FilesDropped(list) => {
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    input.set_files(Some(&list));
                }
                if let Some(file) = self.controller.drop(files_of(&list)) {
                    Self::start_upload(ctx, file);
                }
                true
            }
            FileIntakeMsg::Remove => {
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
                self.controller.remove();
                true
            }
            FileIntakeMsg::Uploaded { file_name, result } => {
                if let Some(message) = self.controller.finish_upload(file_name, result) {
                    utils::alert(&message);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let on_change = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files = input.files().map(|list| files_of(&list)).unwrap_or_default();
            FileIntakeMsg::FilesSelected(files)
        });
        let on_drag_over = link.callback(|e: DragEvent| {
            e.prevent_default();
            FileIntakeMsg::DragOver
        });
        let on_drag_leave = link.callback(|_: DragEvent| FileIntakeMsg::DragLeave);
        let on_drop = link.callback(|e: DragEvent| {
            e.prevent_default();
            match e.data_transfer().and_then(|dt| dt.files()) {
                Some(list) => FileIntakeMsg::FilesDropped(list),
                None => FileIntakeMsg::DragLeave,
            }
        });
        let on_remove = link.callback(|_: MouseEvent| FileIntakeMsg::Remove);

        let drop_zone_class = classes!(
            "drop-zone",
            self.controller.is_drag_over().then_some("drag-over")
        );

        html! {
            <section class="file-intake">
                <div
                    class={drop_zone_class}
                    ondragover={on_drag_over}
                    ondragleave={on_drag_leave}
                    ondrop={on_drop}
                >
                    <p class="drop-zone-hint">{ "Drag & drop a document here, or" }</p>
                    <label class="file-picker">
                        { "Browse files" }
                        <input
                            ref={self.file_input_ref.clone()}
                            type="file"
                            class="hidden-file-input"
                            onchange={on_change}
                        />
                    </label>
                </div>
                if let Some(name) = self.controller.preview() {
                    <div class="file-info">
                        <span class="file-name">{ name }</span>
                        <button class="remove-file" onclick={on_remove} title="Remove file">
                            { "\u{2715}" }
                        </button>
                    </div>
                }
            </section>
        }
    }
}
