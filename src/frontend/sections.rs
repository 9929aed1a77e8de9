use super::projects::TechIcon;
use super::{use_entrance, SectionProps};
use crate::content::{Icon, CONTACT_LINKS, EDUCATION, EXPERIENCE, SKILLS};
use crate::motion::presets::{CARD_LINK, SECTION_FADE};
use crate::theme::classes;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct SectionFrameProps {
    dark_mode: bool,
    title: AttrValue,
    children: Html,
}

/// Heading plus fade-in shared by the sections around the project grid.
#[function_component(SectionFrame)]
fn section_frame(props: &SectionFrameProps) -> Html {
    let phase = use_entrance();

    html! {
        <div
            class={classes!("container", classes::section_text(props.dark_mode))}
            style={SECTION_FADE.style(phase, 0.0)}
        >
            <h2 class="section-title">{props.title.clone()}</h2>
            {props.children.clone()}
        </div>
    }
}

#[function_component(Experience)]
pub(super) fn experience(props: &SectionProps) -> Html {
    let dark = props.dark_mode;

    html! {
        <SectionFrame dark_mode={dark} title="Experience">
            <div class="entry-list">
                { for EXPERIENCE.iter().map(|entry| html! {
                    <article class={classes!(classes::card_surface(dark), "entry")}>
                        <span class={classes!(Icon::Briefcase.class())} aria-hidden="true">
                            {Icon::Briefcase.glyph()}
                        </span>
                        <h3 class="card-title">{entry.role}</h3>
                        <p class={classes!(classes::muted_text(dark))}>{entry.organization}{" · "}{entry.period}</p>
                        <ul class="entry-highlights">
                            { for entry.highlights.iter().map(|line| html! { <li>{*line}</li> }) }
                        </ul>
                    </article>
                }) }
            </div>
        </SectionFrame>
    }
}

#[function_component(Skills)]
pub(super) fn skills(props: &SectionProps) -> Html {
    let dark = props.dark_mode;

    html! {
        <SectionFrame dark_mode={dark} title="Skills">
            <div class="skill-grid">
                { for SKILLS.iter().map(|group| html! {
                    <div class={classes!(classes::card_surface(dark), "skill-group")}>
                        <h3 class="card-title">{group.title}</h3>
                        <div class="tech-stack">
                            { for group.items.iter().map(|item| html! { <TechIcon item={*item} /> }) }
                        </div>
                    </div>
                }) }
            </div>
        </SectionFrame>
    }
}

#[function_component(Education)]
pub(super) fn education(props: &SectionProps) -> Html {
    let dark = props.dark_mode;

    html! {
        <SectionFrame dark_mode={dark} title="Education">
            <div class="entry-list">
                { for EDUCATION.iter().map(|entry| html! {
                    <article class={classes!(classes::card_surface(dark), "entry")}>
                        <span class={classes!(Icon::GraduationCap.class())} aria-hidden="true">
                            {Icon::GraduationCap.glyph()}
                        </span>
                        <h3 class="card-title">{entry.degree}</h3>
                        <p class={classes!(classes::muted_text(dark))}>{entry.institution}</p>
                        <p>{entry.detail}</p>
                    </article>
                }) }
            </div>
        </SectionFrame>
    }
}

#[function_component(Contact)]
pub(super) fn contact(props: &SectionProps) -> Html {
    let dark = props.dark_mode;

    html! {
        <SectionFrame dark_mode={dark} title="Contact">
            <ul class="contact-list">
                { for CONTACT_LINKS.iter().map(|contact| html! {
                    <li>
                        <a
                            class={classes!(classes::icon_link(dark), "gesture")}
                            style={CARD_LINK.style()}
                            href={contact.href}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <span class={classes!(contact.icon.class())} aria-hidden="true">
                                {contact.icon.glyph()}
                            </span>
                            <span>{contact.label}</span>
                        </a>
                    </li>
                }) }
            </ul>
        </SectionFrame>
    }
}
