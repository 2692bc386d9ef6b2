//! Yew component tree for the page.
//!
//! # Design
//! - One handler and one set of request generations per page load.
//! - Form text is held in a single `FieldValues` state; buttons read a
//!   snapshot at click time.
//! - Each output region is its own state so actions only re-render their block.

mod surface;
mod transport;

use std::rc::Rc;

use codedesk_client::{Action, ActionHandler, Field, FieldValues, OutputTarget};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::desk::{ActionGenerations, page_config};
use crate::layout::{Control, LANGUAGE_PLACEHOLDER, LANGUAGES, SECTIONS, button_label};
use surface::{DialogNotifier, StateRegion};
use transport::GlooTransport;

struct Desk {
    handler: Result<ActionHandler<GlooTransport>, String>,
    generations: ActionGenerations,
}

impl Desk {
    fn new() -> Self {
        let handler = page_config()
            .map(|config| ActionHandler::new(config, GlooTransport))
            .map_err(|err| err.to_string());
        Self {
            handler,
            generations: ActionGenerations::new(),
        }
    }
}

#[derive(Clone)]
struct Outputs {
    execution: UseStateHandle<String>,
    ai: UseStateHandle<String>,
    backend: UseStateHandle<String>,
    git: UseStateHandle<String>,
}

impl Outputs {
    fn handle(&self, target: OutputTarget) -> UseStateHandle<String> {
        match target {
            OutputTarget::ExecutionOutput => self.execution.clone(),
            OutputTarget::AiFeedback => self.ai.clone(),
            OutputTarget::BackendFeedback => self.backend.clone(),
            OutputTarget::GitOutput => self.git.clone(),
        }
    }
}

#[function_component(CodeDeskApp)]
fn codedesk_app() -> Html {
    let desk = use_memo(|_| Desk::new(), ());
    let form = use_state(FieldValues::new);
    let outputs = Outputs {
        execution: use_state(String::new),
        ai: use_state(String::new),
        backend: use_state(String::new),
        git: use_state(String::new),
    };
    let refresh = use_force_update();

    let on_edit = {
        let form = form.clone();
        Callback::from(move |(field, value): (Field, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let on_trigger = {
        let desk = Rc::clone(&desk);
        let form = form.clone();
        let outputs = outputs.clone();
        Callback::from(move |action: Action| {
            let desk = Rc::clone(&desk);
            let fields = (*form).clone();
            let region = StateRegion(outputs.handle(action.output()));
            let refresh = refresh.clone();
            spawn_local(async move {
                let Ok(handler) = &desk.handler else {
                    return;
                };
                let generation = desk.generations.of(action);
                if let Err(err) = handler
                    .invoke(action, &fields, &region, &DialogNotifier, generation)
                    .await
                {
                    region.0.set(format!("Error: {err}"));
                }
                refresh.force_update();
            });
        })
    };

    let config_error = desk.handler.as_ref().err().map(|err| {
        html! { <p class="config-error">{format!("Backend URL is misconfigured: {err}")}</p> }
    });

    html! {
        <main class="codedesk">
            { for config_error }
            { for SECTIONS.iter().map(|section| html! {
                <section class="desk-section">
                    <h2>{section.title}</h2>
                    { for section.fields.iter().map(|field| field_control(*field, form.get(*field), &on_edit)) }
                    <div class="desk-actions">
                        { for section.actions.iter().map(|action| {
                            let action = *action;
                            let on_trigger = on_trigger.clone();
                            html! {
                                <button
                                    id={action.trigger_id()}
                                    disabled={desk.generations.busy(action)}
                                    onclick={Callback::from(move |_: MouseEvent| on_trigger.emit(action))}>
                                    {button_label(action)}
                                </button>
                            }
                        }) }
                    </div>
                    <pre id={section.output.element_id()} class="desk-output">
                        {(*outputs.handle(section.output)).clone()}
                    </pre>
                </section>
            }) }
        </main>
    }
}

fn field_control(field: Field, value: &str, on_edit: &Callback<(Field, String)>) -> Html {
    let id = field.element_id();
    let label = html! { <label for={id}>{field.label()}</label> };
    let control = match Control::for_field(field) {
        Control::LanguageSelect => {
            let on_edit = on_edit.clone();
            let onchange = Callback::from(move |event: Event| {
                if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                    on_edit.emit((field, select.value()));
                }
            });
            html! {
                <select {id} {onchange}>
                    <option value="" selected={value.is_empty()}>{LANGUAGE_PLACEHOLDER}</option>
                    { for LANGUAGES.iter().map(|(option, caption)| html! {
                        <option value={*option} selected={value == *option}>{*caption}</option>
                    }) }
                </select>
            }
        }
        Control::TextArea => {
            let on_edit = on_edit.clone();
            let oninput = Callback::from(move |event: InputEvent| {
                if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                    on_edit.emit((field, area.value()));
                }
            });
            html! { <textarea {id} value={value.to_string()} {oninput} /> }
        }
        Control::TextInput => {
            let on_edit = on_edit.clone();
            let oninput = Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    on_edit.emit((field, input.value()));
                }
            });
            html! { <input {id} type="text" value={value.to_string()} {oninput} /> }
        }
    };
    html! { <div class="desk-field">{label}{control}</div> }
}

/// Mount the page on `#root`, or on `<body>` when no such element exists.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CodeDeskApp>::with_root(root).render();
    } else {
        yew::Renderer::<CodeDeskApp>::new().render();
    }
}
