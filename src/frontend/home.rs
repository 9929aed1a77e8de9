use super::projects::Projects;
use super::sections::{Contact, Education, Experience, Skills};
use super::dom::scroll_to_section;
use super::{use_entrance, SectionProps};
use crate::content::{Icon, ABOUT_CARDS, PROFILE};
use crate::motion::{
    presets::{ABOUT_CARD, CTA_BUTTON, HOME_CONTAINER, HOME_ITEM, PHOTO, PHOTO_HOVER},
    stagger_delay,
};
use crate::theme::classes;
use yew::prelude::*;

#[function_component(Home)]
pub(super) fn home(props: &SectionProps) -> Html {
    let dark = props.dark_mode;
    let phase = use_entrance();
    let container = HOME_CONTAINER.transition();

    let explore = Callback::from(|_: MouseEvent| scroll_to_section("projects"));

    html! {
        <div class="animated-gradient">
            <div
                class={classes!("container", classes::page_text(dark))}
                style={HOME_CONTAINER.style(phase, 0.0)}
            >
                <section id="home">
                    <div class={classes!("intro-panel", classes::glass_panel(dark))}>
                        <div
                            class="photo-slot"
                            style={PHOTO.style(phase, stagger_delay(&container, 0))}
                        >
                            <div class="photo-frame gesture" style={PHOTO_HOVER.style()}>
                                <img class="photo-image" src={PROFILE.photo_src} alt={PROFILE.name} />
                            </div>
                        </div>
                        <div
                            class="intro-copy"
                            style={HOME_ITEM.style(phase, stagger_delay(&container, 1))}
                        >
                            <h1 class={classes!(classes::hero_heading(dark))}>{PROFILE.headline}</h1>
                            <p class={classes!(classes::body_text(dark), "intro-text")}>{PROFILE.intro}</p>
                            <button
                                type="button"
                                class={classes!(classes::cta_button(dark), "gesture")}
                                style={CTA_BUTTON.style()}
                                onclick={explore}
                            >
                                <span class={classes!(Icon::Rocket.class())} aria-hidden="true">
                                    {Icon::Rocket.glyph()}
                                </span>
                                {"Explore My Work"}
                            </button>
                        </div>
                    </div>

                    <div class="about" style={HOME_ITEM.style(phase, stagger_delay(&container, 2))}>
                        <h2 class="section-title text-accent">{"About Me"}</h2>
                        <div class="about-grid">
                            { for ABOUT_CARDS.iter().enumerate().map(|(index, card)| html! {
                                <div
                                    key={index}
                                    class={classes!(classes::about_card(dark), "gesture")}
                                    style={ABOUT_CARD.style()}
                                >
                                    <span class={classes!(Icon::Code.class(), "about-icon")} aria-hidden="true">
                                        {Icon::Code.glyph()}
                                    </span>
                                    <h3 class="about-title">{card.title}</h3>
                                    <p class={classes!(classes::body_text(dark))}>{card.desc}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="experience">
                    <Experience dark_mode={dark} />
                </section>

                <section id="skills">
                    <Skills dark_mode={dark} />
                </section>

                <section id="projects">
                    <Projects dark_mode={dark} />
                </section>

                <section id="education">
                    <Education dark_mode={dark} />
                </section>

                <section id="contact">
                    <Contact dark_mode={dark} />
                </section>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::content::{PROJECTS, SECTIONS};
    use crate::frontend::render_static;
    use scraper::{CaseSensitivity, Selector};

    fn selector(css: &str) -> Selector {
        Selector::parse(css).expect("valid selector")
    }

    #[tokio::test]
    async fn sections_render_in_nav_order() {
        let page = render_static::<Home>(SectionProps { dark_mode: false }).await;

        let ids: Vec<_> = page
            .select(&selector("section[id]"))
            .filter_map(|section| section.value().attr("id"))
            .collect();
        let expected: Vec<_> = SECTIONS.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, expected);
        assert_eq!(page.select(&selector(".about-card")).count(), ABOUT_CARDS.len());
    }

    #[tokio::test]
    async fn section_containers_follow_dark_flag() {
        let cases = [(true, "text-white", "text-black"), (false, "text-black", "text-white")];
        for (dark_mode, wanted, unwanted) in cases {
            let page = render_static::<Home>(SectionProps { dark_mode }).await;
            let containers: Vec<_> = page.select(&selector("section > .container")).collect();
            assert_eq!(containers.len(), SECTIONS.len() - 1);

            for container in containers {
                let class = container.value();
                assert!(class.has_class(wanted, CaseSensitivity::CaseSensitive));
                assert!(!class.has_class(unwanted, CaseSensitivity::CaseSensitive));
            }
        }
    }

    #[tokio::test]
    async fn project_titles_do_not_depend_on_theme() {
        let titles = |page: &scraper::Html| -> Vec<String> {
            page.select(&selector("#projects .card-title"))
                .map(|title| title.text().collect())
                .collect()
        };

        let dark = titles(&render_static::<Home>(SectionProps { dark_mode: true }).await);
        let light = titles(&render_static::<Home>(SectionProps { dark_mode: false }).await);
        assert_eq!(dark, light);
        assert_eq!(dark.len(), PROJECTS.len());
    }
}
