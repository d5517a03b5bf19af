//! Console input line with history navigation.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Input line. Disabled while the console is busy.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<String>,
    on_history_nav: Callback<i32, Option<String>>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (input_value, set_input_value) = signal(String::new());

    // Focus input on mount and whenever the console becomes idle again
    Effect::new(move || {
        if !busy.get()
            && let Some(input) = input_ref.get()
        {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            on_submit.run(input_value.get());
            set_input_value.set(String::new());
        }
        "ArrowUp" => {
            ev.prevent_default();
            if let Some(cmd) = on_history_nav.run(-1) {
                set_input_value.set(cmd);
                move_cursor_to_end();
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            set_input_value.set(on_history_nav.run(1).unwrap_or_default());
        }
        "c" if ev.ctrl_key() => {
            set_input_value.set(String::new());
        }
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            on_clear.run(());
        }
        _ => {}
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_input_value.set(input.value());
    };

    view! {
        <div class=css::line>
            <span class=css::prompt>{prompt}</span>
            <input
                node_ref=input_ref
                type="text"
                class=css::input
                data-console-input=""
                autocomplete="off"
                spellcheck="false"
                disabled=busy
                prop:value=input_value
                on:input=handle_input
                on:keydown=handle_keydown
            />
        </div>
    }
}
