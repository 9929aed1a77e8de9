use super::dom::after_delay;
use super::{use_entrance, SectionProps};
use crate::card::{grid_slots, CardAffordances, CardEvent, CardState};
use crate::content::{Icon, ProjectRecord, TechItem, PROJECTS};
use crate::motion::{
    presets::{
        CARD_LINK, CARD_OVERLAY, GRID_ITEM, OVERLAY_CONTENT, OVERLAY_LINK, PROJECTS_GRID,
        PROJECT_CARD, SECTION_FADE,
    },
    Phase,
};
use crate::theme::classes;
use std::rc::Rc;
use yew::prelude::*;

impl Reducible for CardState {
    type Action = CardEvent;

    fn reduce(self: Rc<Self>, action: CardEvent) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub(super) struct TechIconProps {
    pub item: TechItem,
}

#[function_component(TechIcon)]
pub(super) fn tech_icon(props: &TechIconProps) -> Html {
    let TechItem { icon, name } = props.item;

    html! {
        <div class="tech-icon" title={name}>
            <span class={classes!(icon.class())} aria-hidden="true">{icon.glyph()}</span>
            <span class="tech-name">{name}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct OverlayProps {
    title: AttrValue,
    preview_src: AttrValue,
    visit: Option<AttrValue>,
    exiting: bool,
}

#[function_component(Overlay)]
fn overlay(props: &OverlayProps) -> Html {
    let entrance = use_entrance();
    let phase = if props.exiting { Phase::Hidden } else { entrance };

    html! {
        <div class="card-overlay" style={CARD_OVERLAY.style(phase, 0.0)}>
            <div class="overlay-content" style={OVERLAY_CONTENT.style(entrance, 0.0)}>
                <iframe
                    class="overlay-frame"
                    src={props.preview_src.clone()}
                    title={props.title.clone()}
                    frameborder="0"
                />
                if let Some(link) = props.visit.clone() {
                    <a
                        class="overlay-link gesture"
                        style={OVERLAY_LINK.style()}
                        href={link}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <span class={classes!(Icon::ExternalLink.class())} aria-hidden="true">
                            {Icon::ExternalLink.glyph()}
                        </span>
                        <span>{"Visit Project"}</span>
                    </a>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    record: &'static ProjectRecord,
    dark_mode: bool,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let dark = props.dark_mode;
    let record = props.record;
    let links = CardAffordances::for_record(record);
    let card = use_reducer(CardState::default);

    {
        let card = card.clone();
        use_effect_with(card.exiting_generation(), move |exiting| {
            if let Some(generation) = *exiting {
                let exit = CARD_OVERLAY.transition().duration();
                after_delay(
                    exit,
                    Callback::from(move |_| card.dispatch(CardEvent::ExitElapsed { generation })),
                );
            }
            || ()
        });
    }

    let onmouseenter = {
        let card = card.clone();
        Callback::from(move |_| card.dispatch(CardEvent::PointerEnter))
    };

    let onmouseleave = {
        let card = card.clone();
        Callback::from(move |_| card.dispatch(CardEvent::PointerLeave))
    };

    html! {
        <div
            class={classes!(classes::card_surface(dark), "gesture")}
            style={PROJECT_CARD.style()}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="card-body">
                <h3 class="card-title">{record.title}</h3>
                <p class={classes!(classes::muted_text(dark), "card-description")}>
                    {record.description}
                </p>
                <div class="tech-stack">
                    { for record.tech_stack.iter().enumerate().map(|(index, item)| html! {
                        <TechIcon key={index} item={*item} />
                    }) }
                </div>
                <div class="card-links">
                    if let Some(github) = links.github {
                        <a
                            class={classes!(classes::icon_link(dark), "gesture")}
                            style={CARD_LINK.style()}
                            href={github}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="GitHub repository"
                        >
                            <span class={classes!(Icon::GitHub.class())} aria-hidden="true">
                                {Icon::GitHub.glyph()}
                            </span>
                        </a>
                    }
                    if let Some(visit) = links.visit {
                        <a
                            class={classes!(classes::icon_link(dark), "narrow-only", "gesture")}
                            style={CARD_LINK.style()}
                            href={visit}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <span class={classes!(Icon::ExternalLink.class())} aria-hidden="true">
                                {Icon::ExternalLink.glyph()}
                            </span>
                            <span>{"Visit Project"}</span>
                        </a>
                    }
                </div>
            </div>
            if card.overlay_mounted() {
                <Overlay
                    title={record.title}
                    preview_src={links.preview_src}
                    visit={links.overlay_visit.map(AttrValue::from)}
                    exiting={!card.hovered}
                />
            }
        </div>
    }
}

#[function_component(Projects)]
pub(super) fn projects(props: &SectionProps) -> Html {
    let dark = props.dark_mode;
    let phase = use_entrance();
    let slots = grid_slots(PROJECTS, &PROJECTS_GRID.transition());

    html! {
        <div
            class={classes!("container", classes::section_text(dark))}
            style={SECTION_FADE.style(phase, 0.0)}
        >
            <h2 class="section-title">{"Projects"}</h2>
            <div class="project-grid" style={PROJECTS_GRID.style(phase, 0.0)}>
                { for slots.into_iter().map(|slot| html! {
                    <div
                        key={slot.index}
                        class="grid-item"
                        style={GRID_ITEM.style(phase, slot.delay)}
                    >
                        <ProjectCard record={slot.record} dark_mode={dark} />
                    </div>
                }) }
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::frontend::render_static;
    use scraper::{ElementRef, Html as Document, Selector};

    static BARE: ProjectRecord = ProjectRecord {
        title: "X",
        description: "Y",
        link: None,
        github_link: None,
        tech_stack: &[],
    };

    fn selector(css: &str) -> Selector {
        Selector::parse(css).expect("valid selector")
    }

    fn text_of(element: ElementRef<'_>) -> String {
        element.text().collect()
    }

    fn count(page: &Document, css: &str) -> usize {
        page.select(&selector(css)).count()
    }

    #[tokio::test]
    async fn grid_renders_one_card_per_record_in_order() {
        for dark_mode in [false, true] {
            let page = render_static::<Projects>(SectionProps { dark_mode }).await;

            let titles: Vec<String> = page
                .select(&selector(".project-card .card-title"))
                .map(text_of)
                .collect();
            let expected: Vec<&str> = PROJECTS.iter().map(|record| record.title).collect();
            assert_eq!(titles, expected);
            assert_eq!(count(&page, ".grid-item"), PROJECTS.len());
            assert_eq!(count(&page, ".card-overlay"), 0);
        }
    }

    #[tokio::test]
    async fn surfaces_follow_dark_flag() {
        let dark = render_static::<Projects>(SectionProps { dark_mode: true }).await;
        assert_eq!(count(&dark, ".project-card.surface--dark"), PROJECTS.len());
        assert_eq!(count(&dark, ".project-card.surface--light"), 0);
        assert_eq!(count(&dark, ".container.text-white"), 1);

        let light = render_static::<Projects>(SectionProps { dark_mode: false }).await;
        assert_eq!(count(&light, ".project-card.surface--light"), PROJECTS.len());
        assert_eq!(count(&light, ".project-card.surface--dark"), 0);
        assert_eq!(count(&light, ".container.text-black"), 1);
    }

    #[tokio::test]
    async fn only_linked_records_get_visit_anchor() {
        let page = render_static::<Projects>(SectionProps { dark_mode: false }).await;
        assert_eq!(count(&page, r#"a[aria-label="GitHub repository"]"#), 0);

        let cards: Vec<_> = page.select(&selector(".project-card")).collect();
        assert_eq!(cards.len(), PROJECTS.len());
        for (card, record) in cards.into_iter().zip(PROJECTS) {
            let visits: Vec<_> = card
                .select(&selector("a.narrow-only"))
                .filter_map(|anchor| anchor.value().attr("href"))
                .collect();
            let expected: Vec<&str> = record.link.into_iter().collect();
            assert_eq!(visits, expected, "{}", record.title);
        }
    }

    #[tokio::test]
    async fn bare_record_renders_plain_card() {
        let page = render_static::<ProjectCard>(ProjectCardProps {
            record: &BARE,
            dark_mode: true,
        })
        .await;

        let title = page.select(&selector(".card-title")).next().expect("title");
        assert_eq!(text_of(title), "X");
        let description = page
            .select(&selector(".card-description"))
            .next()
            .expect("description");
        assert_eq!(text_of(description), "Y");
        assert_eq!(count(&page, ".tech-icon"), 0);
        assert_eq!(count(&page, "a"), 0);
        assert_eq!(count(&page, "iframe"), 0);
    }

    #[tokio::test]
    async fn tech_icon_shows_name_and_tooltip() {
        let item = PROJECTS[1].tech_stack[0];
        let page = render_static::<TechIcon>(TechIconProps { item }).await;

        let icon = page.select(&selector(".tech-icon")).next().expect("icon");
        assert_eq!(icon.value().attr("title"), Some(item.name));
        let name = page.select(&selector(".tech-name")).next().expect("name");
        assert_eq!(text_of(name), item.name);
        assert_eq!(count(&page, r#"span[aria-hidden="true"]"#), 1);
    }
}
