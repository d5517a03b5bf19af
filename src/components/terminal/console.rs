//! Console window: header, output log and input line.

use leptos::prelude::*;

use super::{Input, Output};
use crate::app::ConsoleState;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/console.module.css");

/// Auto-scroll output to bottom when the log changes.
fn setup_autoscroll_effect(state: ConsoleState, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        state.view.track();
        if let Some(el) = output_ref.get() {
            dom::scroll_to_bottom(&el);
        }
    });
}

#[component]
pub fn ConsoleWindow(state: ConsoleState) -> impl IntoView {
    let output_ref = NodeRef::<leptos::html::Div>::new();
    setup_autoscroll_effect(state, output_ref);

    let label = Signal::derive(move || state.view.with(|v| v.label.clone()));
    let prompt = Signal::derive(move || state.view.with(|v| v.prompt.clone()));
    let busy = Signal::derive(move || state.view.with(|v| v.busy));

    let on_submit = Callback::new(move |line: String| state.submit(line));
    let on_history_nav = Callback::new(move |direction: i32| state.recall(direction));
    let on_clear = Callback::new(move |()| state.clear_screen());

    view! {
        <div class=css::window on:click=move |_| dom::focus_console_input()>
            <div class=css::header>
                <span class=css::label>{label}</span>
                <div class=css::lights>
                    <span class=css::light></span>
                    <span class=css::light></span>
                    <span class=format!("{} {}", css::light, css::lightActive)></span>
                </div>
            </div>

            <div node_ref=output_ref class=css::output>
                <For
                    each=move || state.view.with(|v| v.lines.clone())
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
                <Input
                    prompt=prompt
                    busy=busy
                    on_submit=on_submit
                    on_history_nav=on_history_nav
                    on_clear=on_clear
                />
            </div>
        </div>
    }
}
