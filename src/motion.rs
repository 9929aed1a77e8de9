//! Declarative animation descriptors.
//!
//! A descriptor names a target for each phase and how to get there. Nothing here
//! drives frames: descriptors are rendered into inline CSS and the browser's
//! transition engine interpolates between the two phases.

const SPRING_MIN_SECONDS: f64 = 0.2;
const SPRING_MAX_SECONDS: f64 = 1.5;
const OVERSHOOT_CURVE: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";
const SETTLE_CURVE: &str = "cubic-bezier(0.22, 1, 0.36, 1)";
const TWEEN_CURVE: &str = "ease-out";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visual {
    pub opacity: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
    pub rotate_y: f64,
}

impl Visual {
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        rotate_y: 0.0,
    };

    pub const fn opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub const fn y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    pub const fn scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub const fn rotate(self, rotate: f64) -> Self {
        Self { rotate, ..self }
    }

    pub const fn rotate_y(self, rotate_y: f64) -> Self {
        Self { rotate_y, ..self }
    }

    /// True when both visuals sit at the same offset, scale and rotation.
    pub fn same_placement(&self, other: &Self) -> bool {
        self.y == other.y
            && self.scale == other.scale
            && self.rotate == other.rotate
            && self.rotate_y == other.rotate_y
    }

    pub fn transform(&self) -> String {
        format!(
            "translateY({}px) scale({}) rotate({}deg) rotateY({}deg)",
            self.y, self.scale, self.rotate, self.rotate_y
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Tween { duration: f64 },
    Spring { stiffness: f64, damping: f64, mass: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orchestration {
    Together,
    /// The parent finishes its own transition before the first child starts.
    BeforeChildren,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub easing: Easing,
    pub delay: f64,
    pub stagger_children: f64,
    pub when: Orchestration,
}

impl Transition {
    pub const fn tween(duration: f64) -> Self {
        Self {
            easing: Easing::Tween { duration },
            delay: 0.0,
            stagger_children: 0.0,
            when: Orchestration::Together,
        }
    }

    pub const fn spring(stiffness: f64, damping: f64) -> Self {
        Self {
            easing: Easing::Spring {
                stiffness,
                damping,
                mass: 1.0,
            },
            delay: 0.0,
            stagger_children: 0.0,
            when: Orchestration::Together,
        }
    }

    pub const fn delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub const fn stagger(self, stagger_children: f64) -> Self {
        Self {
            stagger_children,
            ..self
        }
    }

    pub const fn before_children(self) -> Self {
        Self {
            when: Orchestration::BeforeChildren,
            ..self
        }
    }

    /// Wall-clock length of the transition, excluding delay.
    pub fn duration(&self) -> f64 {
        match self.easing {
            Easing::Tween { duration } => duration,
            Easing::Spring {
                stiffness,
                damping,
                mass,
            } => spring_settle_seconds(stiffness, damping, mass),
        }
    }

    pub fn timing_function(&self) -> &'static str {
        match self.easing {
            Easing::Tween { .. } => TWEEN_CURVE,
            Easing::Spring {
                stiffness,
                damping,
                mass,
            } => {
                if damping_ratio(stiffness, damping, mass) < 1.0 {
                    OVERSHOOT_CURVE
                } else {
                    SETTLE_CURVE
                }
            }
        }
    }

    /// CSS `transition` value; `transform` is listed only when `with_transform`.
    pub fn css(&self, extra_delay: f64, with_transform: bool) -> String {
        let duration = self.duration();
        let curve = self.timing_function();
        let delay = self.delay + extra_delay;
        let fade = format!("opacity {duration:.3}s {curve} {delay:.3}s");
        if with_transform {
            format!("{fade}, transform {duration:.3}s {curve} {delay:.3}s")
        } else {
            fade
        }
    }
}

/// Transition used when a variant does not carry its own.
pub const DEFAULT_TRANSITION: Transition = Transition::spring(500.0, 25.0);

fn damping_ratio(stiffness: f64, damping: f64, mass: f64) -> f64 {
    damping / (2.0 * (stiffness * mass).sqrt())
}

fn spring_settle_seconds(stiffness: f64, damping: f64, mass: f64) -> f64 {
    if stiffness <= 0.0 || mass <= 0.0 {
        return SPRING_MAX_SECONDS;
    }

    let omega = (stiffness / mass).sqrt();
    let zeta = damping_ratio(stiffness, damping, mass);
    let decay = if zeta < 1.0 {
        zeta * omega
    } else {
        omega * (zeta - (zeta * zeta - 1.0).sqrt())
    };

    if decay <= 0.0 {
        return SPRING_MAX_SECONDS;
    }

    (4.0 / decay).clamp(SPRING_MIN_SECONDS, SPRING_MAX_SECONDS)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variants {
    pub hidden: Visual,
    pub visible: Visual,
    pub transition: Option<Transition>,
}

impl Variants {
    pub const fn new(hidden: Visual, visible: Visual) -> Self {
        Self {
            hidden,
            visible,
            transition: None,
        }
    }

    pub const fn with_transition(self, transition: Transition) -> Self {
        Self {
            transition: Some(transition),
            ..self
        }
    }

    pub fn target(&self, phase: Phase) -> Visual {
        match phase {
            Phase::Hidden => self.hidden,
            Phase::Visible => self.visible,
        }
    }

    pub fn transition(&self) -> Transition {
        self.transition.unwrap_or(DEFAULT_TRANSITION)
    }

    pub fn moves(&self) -> bool {
        !self.hidden.same_placement(&self.visible)
    }

    /// Inline style for `phase`; `delay` is added by a staggering parent.
    pub fn style(&self, phase: Phase, delay: f64) -> String {
        let target = self.target(phase);
        let transition = self.transition().css(delay, self.moves());
        if self.moves() {
            format!(
                "opacity: {}; transform: {}; transition: {transition};",
                target.opacity,
                target.transform()
            )
        } else {
            format!("opacity: {}; transition: {transition};", target.opacity)
        }
    }
}

/// Start offset of the child at `index` under a staggering parent.
pub fn stagger_delay(parent: &Transition, index: usize) -> f64 {
    let lead = match parent.when {
        Orchestration::BeforeChildren => parent.delay + parent.duration(),
        Orchestration::Together => parent.delay,
    };
    lead + parent.stagger_children * index as f64
}

/// Transforms applied while hovered or pressed, exposed as CSS custom properties.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub hover: Option<Visual>,
    pub tap: Option<Visual>,
    pub transition: Transition,
}

impl Gesture {
    pub const fn hover(hover: Visual, transition: Transition) -> Self {
        Self {
            hover: Some(hover),
            tap: None,
            transition,
        }
    }

    pub const fn with_tap(self, tap: Visual) -> Self {
        Self {
            tap: Some(tap),
            ..self
        }
    }

    pub fn style(&self) -> String {
        let hover = self.hover.unwrap_or(Visual::IDENTITY);
        let tap = self.tap.unwrap_or(hover);
        format!(
            "--hover-scale: {}; --hover-rotate-y: {}deg; --tap-scale: {}; \
             --gesture-duration: {:.3}s; --gesture-curve: {};",
            hover.scale,
            hover.rotate_y,
            tap.scale,
            self.transition.duration(),
            self.transition.timing_function()
        )
    }
}

pub mod presets {
    use super::{Gesture, Transition, Variants, Visual};

    const FADED: Visual = Visual::IDENTITY.opacity(0.0);

    pub const HOME_CONTAINER: Variants = Variants::new(FADED, Visual::IDENTITY)
        .with_transition(Transition::tween(0.5).before_children().stagger(0.2));

    pub const HOME_ITEM: Variants = Variants::new(FADED.y(20.0), Visual::IDENTITY);

    pub const PHOTO: Variants = Variants::new(
        Visual::IDENTITY.scale(0.0).rotate(-180.0),
        Visual::IDENTITY,
    )
    .with_transition(Transition::spring(260.0, 20.0));

    pub const SECTION_FADE: Variants =
        Variants::new(FADED, Visual::IDENTITY).with_transition(Transition::tween(0.5));

    pub const PROJECTS_GRID: Variants = Variants::new(FADED, Visual::IDENTITY)
        .with_transition(Transition::tween(0.3).stagger(0.2));

    pub const GRID_ITEM: Variants = Variants::new(FADED.y(50.0), Visual::IDENTITY);

    pub const CARD_OVERLAY: Variants =
        Variants::new(FADED, Visual::IDENTITY).with_transition(Transition::tween(0.3));

    pub const OVERLAY_CONTENT: Variants = Variants::new(FADED.scale(0.8), Visual::IDENTITY)
        .with_transition(Transition::tween(0.3).delay(0.1));

    pub const PHOTO_HOVER: Gesture =
        Gesture::hover(Visual::IDENTITY.scale(1.05), Transition::spring(300.0, 10.0));

    pub const CTA_BUTTON: Gesture =
        Gesture::hover(Visual::IDENTITY.scale(1.05), Transition::tween(0.3))
            .with_tap(Visual::IDENTITY.scale(0.95));

    pub const ABOUT_CARD: Gesture = Gesture::hover(
        Visual::IDENTITY.scale(1.05).rotate_y(10.0),
        Transition::spring(300.0, 10.0),
    );

    pub const PROJECT_CARD: Gesture =
        Gesture::hover(Visual::IDENTITY.scale(1.05), Transition::tween(0.3));

    pub const CARD_LINK: Gesture =
        Gesture::hover(Visual::IDENTITY.scale(1.1), Transition::tween(0.2));

    pub const OVERLAY_LINK: Gesture =
        Gesture::hover(Visual::IDENTITY.scale(1.1), Transition::tween(0.2))
            .with_tap(Visual::IDENTITY.scale(0.9));
}
