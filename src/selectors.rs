//! The DOM contract of the interaction layer, declared in one place.
//!
//! Every selector the wiring queries is listed here with its expected
//! presence, so a page can opt into failing fast instead of silently losing
//! a behavior when markup drifts.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hook {
    AnchorLinks,
    RevealTargets,
    MenuToggle,
    MenuLinks,
    MenuLinkItems,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HookSpec {
    pub hook: Hook,
    pub selector: &'static str,
    pub presence: Presence,
    pub description: &'static str,
}

impl Hook {
    pub fn selector(self) -> &'static str {
        match self {
            Hook::AnchorLinks => r##"a[href^="#"]"##,
            Hook::RevealTargets => ".card, .hero-content",
            Hook::MenuToggle => ".menu-toggle",
            Hook::MenuLinks => ".links",
            Hook::MenuLinkItems => ".links a",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Hook::AnchorLinks => "In-page fragment links given smooth scrolling.",
            Hook::RevealTargets => "Elements faded in when they enter the viewport.",
            Hook::MenuToggle => "Mobile navigation toggle button.",
            Hook::MenuLinks => "Mobile navigation link container.",
            Hook::MenuLinkItems => "Navigation links that collapse the menu when chosen.",
        }
    }

    pub fn all() -> &'static [Hook] {
        &[
            Hook::AnchorLinks,
            Hook::RevealTargets,
            Hook::MenuToggle,
            Hook::MenuLinks,
            Hook::MenuLinkItems,
        ]
    }
}

/// Every hook Optional: missing markup disables a behavior, never the page.
pub fn default_hooks() -> Vec<HookSpec> {
    Hook::all()
        .iter()
        .map(|&hook| HookSpec {
            hook,
            selector: hook.selector(),
            presence: Presence::Optional,
            description: hook.description(),
        })
        .collect()
}

/// Upgrades the listed hooks to Required in place.
pub fn require(hooks: &mut [HookSpec], which: &[Hook]) {
    for spec in hooks.iter_mut() {
        if which.contains(&spec.hook) {
            spec.presence = Presence::Required;
        }
    }
}

/// Required hooks the presence check does not find. Attach refuses to install
/// anything while this is non-empty.
pub fn missing_required<F>(hooks: &[HookSpec], mut present: F) -> Vec<HookSpec>
where
    F: FnMut(&HookSpec) -> bool,
{
    let mut missing = Vec::new();
    for spec in hooks {
        if spec.presence == Presence::Required && !present(spec) {
            missing.push(*spec);
        }
    }
    missing
}
