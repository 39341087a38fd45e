use leptos::html::Div;
use leptos::prelude::*;

use crate::frontend::hooks::{Motion, use_motion, use_reveal};
use crate::motion::RevealConfig;

#[derive(Clone, Copy)]
struct RevealGroup {
    revealed: ReadSignal<bool>,
    config: RevealConfig,
    motion: Motion,
}

/// Observed container of a staggered reveal. Its [`RevealItem`] descendants
/// animate in, in index order, once the container crosses the threshold.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] config: Option<RevealConfig>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let node = NodeRef::<Div>::new();
    let revealed = use_reveal(node, config.threshold);

    provide_context(RevealGroup {
        revealed,
        config,
        motion: use_motion(),
    });

    view! {
        <div node_ref=node id=id class=class>
            {children()}
        </div>
    }
}

#[component]
pub fn RevealItem(
    children: Children,
    #[prop(optional)] index: usize,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let group = use_context::<RevealGroup>();
    let style = move || {
        group
            .map(|g| g.config.child_style(index, g.revealed.get(), g.motion.get()))
            .unwrap_or_default()
    };

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}
