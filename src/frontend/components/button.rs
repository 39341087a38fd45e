use leptos::prelude::*;

use crate::frontend::components::IconSvg;
use crate::models::Icon;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Light,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            Self::Primary => "bg-blue-600 text-white shadow-lg shadow-blue-600/25 hover:bg-blue-700 focus:ring-blue-500",
            Self::Light => "bg-white text-blue-700 shadow-lg hover:bg-blue-50 focus:ring-white",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 rounded-full px-7 py-3.5 text-base font-semibold transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2";

/// A call-to-action link styled as a button, with a trailing arrow.
#[component]
pub fn LinkButton(
    children: Children,
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
) -> impl IntoView {
    view! {
        <a href=href class=format!("{BASE_CLASSES} {}", variant.classes())>
            {children()}
            <IconSvg icon=Icon::ArrowRight class="h-4 w-4"/>
        </a>
    }
}

#[component]
pub fn SubmitButton(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=format!(
                "{BASE_CLASSES} {} {class}",
                variant.classes(),
            )
        >
            {children()}
        </button>
    }
}
