//! Root application module.
//!
//! Contains the App component, the reactive [`ConsoleState`] wrapper around
//! the core [`Console`], and application-level setup logic following Leptos
//! conventions.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::terminal::ConsoleWindow;
use crate::config::APP_NAME;
use crate::core::{Console, ConsoleSignal, Submission, VirtualFs};
use crate::models::{LogLine, SiteConfig};
use crate::services::{browser_services, load_site_config};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// ConsoleView
// ============================================================================

/// Everything the console window renders, captured after each change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConsoleView {
    pub lines: Vec<LogLine>,
    pub prompt: String,
    pub label: String,
    pub busy: bool,
}

impl ConsoleView {
    fn capture(console: &Console) -> Self {
        Self {
            lines: console.lines().to_vec(),
            prompt: console.prompt(),
            label: console.shell_label(),
            busy: console.is_busy(),
        }
    }
}

// ============================================================================
// ConsoleState
// ============================================================================

/// Reactive handle to the console.
///
/// The controller itself is not reactive; it lives in a local
/// [`StoredValue`] and every operation republishes a [`ConsoleView`]
/// snapshot. Pending tasks are driven with `spawn_local` and resolved back
/// into the same controller.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena handles.
#[derive(Clone, Copy)]
pub struct ConsoleState {
    console: StoredValue<Console, LocalStorage>,
    /// Latest snapshot for rendering.
    pub view: RwSignal<ConsoleView>,
    /// Raised once the host granted an admin session.
    pub admin: RwSignal<bool>,
}

impl ConsoleState {
    pub fn new(console: Console) -> Self {
        let view = RwSignal::new(ConsoleView::capture(&console));
        Self {
            console: StoredValue::new_local(console),
            view,
            admin: RwSignal::new(false),
        }
    }

    /// Submit a line typed by the user.
    pub fn submit(&self, line: String) {
        let submission = self.console.try_update_value(|c| c.submit(&line));
        self.handle(submission);
    }

    /// Start the inquiry wizard from the host button.
    pub fn start_inquiry(&self) {
        let submission = self.console.try_update_value(|c| c.start_inquiry());
        self.handle(submission);
    }

    /// Clear the output (Ctrl+L). Never reaches the wizard as an answer.
    pub fn clear_screen(&self) {
        if self.console.try_update_value(|c| c.clear_screen()) == Some(true) {
            self.refresh();
        }
    }

    /// Step through command history.
    pub fn recall(&self, direction: i32) -> Option<String> {
        self.console
            .try_update_value(|c| c.recall(direction))
            .flatten()
    }

    fn handle(&self, submission: Option<Submission>) {
        match submission {
            Some(Submission::Pending(task)) => {
                self.refresh();
                let state = *self;
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = task.run().await;
                    let signal = state.console.try_update_value(|c| c.resolve(outcome));
                    state.apply_signal(signal.flatten());
                    state.refresh();
                });
            }
            Some(Submission::Completed(signal)) => {
                self.apply_signal(signal);
                self.refresh();
            }
            Some(Submission::Ignored) | None => {}
        }
    }

    fn apply_signal(&self, signal: Option<ConsoleSignal>) {
        if signal == Some(ConsoleSignal::AdminAccessGranted) {
            self.admin.set(true);
        }
    }

    fn refresh(&self) {
        if let Some(view) = self.console.try_with_value(ConsoleView::capture) {
            self.view.set(view);
        }
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Loads the site configuration (boot screen until it arrives)
/// - Builds the console with browser collaborators
/// - Renders the console window, the inquiry button and the admin banner
#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(None::<SiteConfig>);

    wasm_bindgen_futures::spawn_local(async move {
        let loaded = load_site_config().await;
        log::info!("{} config loaded: {}", APP_NAME, loaded.title);
        dom::set_title(&loaded.title);
        config.set(Some(loaded));
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fault>
                    <h1>"SYSTEM FAULT"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = dom::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "REBOOT"
                    </button>
                </div>
            }
        >
            {move || match config.get() {
                Some(config) => view! { <Site config=config /> }.into_any(),
                None => view! { <div class=css::boot>"V9_OS KERNEL LOADING..."</div> }.into_any(),
            }}
        </ErrorBoundary>
    }
}

/// Page body once the configuration is known.
#[component]
fn Site(config: SiteConfig) -> impl IntoView {
    let services = browser_services(&config);
    let title = config.title.clone();
    let button_label = config.inquiry_button.clone();
    let console = Console::new(config, Rc::new(VirtualFs::bundled()), services);
    let state = ConsoleState::new(console);

    let busy = move || state.view.with(|v| v.busy);

    view! {
        <main class=css::page>
            <header class=css::header>
                <h1 class=css::title>{title}</h1>
                <Show when=move || state.admin.get()>
                    <span class=css::adminBanner>"ADMIN SESSION ACTIVE"</span>
                </Show>
            </header>

            <ConsoleWindow state=state />

            <button
                class=css::inquiryButton
                disabled=busy
                on:click=move |_| {
                    state.start_inquiry();
                    dom::focus_console_input();
                }
            >
                {button_label}
            </button>
        </main>
    }
}
