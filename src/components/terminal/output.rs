use leptos::prelude::*;

use crate::models::{LineKind, LogLine};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// CSS class for a line kind.
fn kind_class(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Command => css::command,
        LineKind::Error => css::error,
        LineKind::Success => css::success,
        LineKind::Info => css::info,
    }
}

#[component]
pub fn Output(line: LogLine) -> impl IntoView {
    let marker = if line.kind == LineKind::Command { "> " } else { "" };

    view! {
        <div class=css::line data-kind=line.kind.as_str()>
            <span class=css::timestamp>{format!("[{}]", line.timestamp)}</span>
            <pre class=format!("{} {}", css::text, kind_class(line.kind))>
                {marker}{line.text}
            </pre>
        </div>
    }
}
