//! ChatPanel component - question box and scrolling transcript

use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

use docqa_shared::{ApiError, AskResponse};

use crate::api;
use crate::controllers::ChatController;
use crate::utils;

/// Messages for the ChatPanel component
pub enum ChatPanelMsg {
    UpdateInput(String),
    SendQuestion,
    /// Question request finished
    Answered(Result<AskResponse, ApiError>),
}

pub struct ChatPanel {
    controller: ChatController,
    messages_ref: NodeRef,
}

impl Component for ChatPanel {
    type Message = ChatPanelMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: ChatController::new(),
            messages_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.controller.take_scroll() {
            if let Some(element) = self.messages_ref.cast::<Element>() {
                element.set_scroll_top(element.scroll_height());
            }
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatPanelMsg::UpdateInput(value) => {
                self.controller.set_input(value);
                true
            }
            ChatPanelMsg::SendQuestion => {
                let Some(question) = self.controller.submit() else {
                    return false;
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::ask_question(&question).await;
                    link.send_message(ChatPanelMsg::Answered(result));
                });
                true
            }
            ChatPanelMsg::Answered(result) => {
                if let Some(message) = self.controller.resolve(result) {
                    utils::alert(message);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let handle_input = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatPanelMsg::UpdateInput(input.value())
        });
        let on_send = link.callback(|_: MouseEvent| ChatPanelMsg::SendQuestion);

        html! {
            <section class="chat">
                <div class="chat-messages" ref={self.messages_ref.clone()}>
                    {
                        self.controller.transcript().iter().map(|entry| {
                            html! { <div class={entry.role.css_class()}>{ &entry.text }</div> }
                        }).collect::<Html>()
                    }
                </div>
                <div class="chat-input">
                    <input
                        type="text"
                        class="question-input"
                        placeholder="Ask a question about your document..."
                        value={self.controller.input().to_string()}
                        oninput={handle_input}
                    />
                    <button type="button" class="send-question" onclick={on_send}>
                        { "Send" }
                    </button>
                </div>
            </section>
        }
    }
}
