mod dom;
mod home;
mod projects;
mod sections;

use crate::content::{PROFILE, SECTIONS};
use crate::motion::Phase;
use crate::theme::classes;
use dom::{
    after_first_paint, apply_theme, prefers_reduced_motion, resolve_theme, scroll_to_section,
    switch_theme,
};
use home::Home;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub dark_mode: bool,
}

/// Mount-triggered entrance: `Hidden` for the first paint, then `Visible` until
/// the component is unmounted.
#[hook]
pub(crate) fn use_entrance() -> Phase {
    let phase = use_state(|| {
        if prefers_reduced_motion() {
            Phase::Visible
        } else {
            Phase::Hidden
        }
    });

    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            if *phase == Phase::Hidden {
                after_first_paint(Callback::from(move |_| phase.set(Phase::Visible)));
            }
            || ()
        });
    }

    *phase
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(resolve_theme);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            switch_theme(next);
            theme.set(next);
        })
    };

    let dark_mode = theme.is_dark();

    html! {
        <>
            <a class="skip-link" href="#home">{"Skip to main content"}</a>
            <header class={classes!(classes::site_header(dark_mode))}>
                <span class="site-name">{PROFILE.name}</span>
                <nav class="site-nav" aria-label="Sections">
                    { for SECTIONS.iter().map(|(id, label)| {
                        let id = *id;
                        let onclick = Callback::from(move |event: MouseEvent| {
                            event.prevent_default();
                            scroll_to_section(id);
                        });
                        html! { <a href={format!("#{id}")} {onclick}>{*label}</a> }
                    }) }
                </nav>
                <button
                    class="theme-toggle"
                    type="button"
                    aria-label={(*theme).toggle_label()}
                    aria-pressed={(*theme).pressed().to_string()}
                    onclick={on_toggle}
                >
                    <span aria-hidden="true">{(*theme).icon()}</span>
                </button>
            </header>
            <main>
                <Home {dark_mode} />
            </main>
        </>
    }
}

#[cfg(target_arch = "wasm32")]
pub fn run() {
    yew::Renderer::<App>::with_root(
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}

/// Server-renders `C` without hydration markers for markup assertions.
#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) async fn render_static<C>(props: C::Properties) -> scraper::Html
where
    C: yew::BaseComponent,
{
    let markup = yew::LocalServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await;
    scraper::Html::parse_fragment(&markup)
}
