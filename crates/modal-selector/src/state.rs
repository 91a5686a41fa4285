use selector_core::StateHolder;

use crate::{MultiSelection, SelectMode, SelectOption, SelectorProps};

/// What the trigger currently reflects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Label of the last pick, or the configured initial value.
    Single(String),
    Multi(MultiSelection),
}

impl Selection {
    pub fn mode(&self) -> SelectMode {
        match self {
            Selection::Single(_) => SelectMode::Single,
            Selection::Multi(_) => SelectMode::Multi,
        }
    }

    pub fn as_multi(&self) -> Option<&MultiSelection> {
        match self {
            Selection::Multi(m) => Some(m),
            Selection::Single(_) => None,
        }
    }
}

/// Immutable snapshot of one selector instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorState {
    pub visible: bool,
    pub selection: Selection,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorEvent {
    Open,
    Close,
    /// Single-select commit: record the label and close.
    Pick(SelectOption),
    /// Multi-select toggle. The overlay stays open.
    Toggle { option: SelectOption, on: bool },
    /// Replace the selection, e.g. after the initial value changed.
    Reseed(Selection),
}

impl SelectorState {
    /// Closed, with the selection seeded from `props`.
    pub fn initial(props: &SelectorProps) -> Self {
        Self {
            visible: false,
            selection: seed(props),
        }
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }
}

impl StateHolder for SelectorState {
    type Event = SelectorEvent;

    fn reduce(&self, event: SelectorEvent) -> Self {
        match (event, &self.selection) {
            (SelectorEvent::Open, _) => Self {
                visible: true,
                ..self.clone()
            },
            (SelectorEvent::Close, _) => Self {
                visible: false,
                ..self.clone()
            },
            (SelectorEvent::Pick(option), Selection::Single(_)) if !option.section => Self {
                visible: false,
                selection: Selection::Single(option.label),
            },
            (SelectorEvent::Toggle { option, on }, Selection::Multi(current))
                if !option.section =>
            {
                let mut next = current.clone();
                if on {
                    next.insert(option);
                } else {
                    next.remove(&option.key);
                }
                Self {
                    visible: self.visible,
                    selection: Selection::Multi(next),
                }
            }
            (SelectorEvent::Reseed(selection), _) => Self {
                visible: self.visible,
                selection,
            },
            (event, _) => {
                log::debug!("selector: ignoring {event:?} in {:?} mode", self.selection.mode());
                self.clone()
            }
        }
    }
}

fn seed(props: &SelectorProps) -> Selection {
    match props.mode() {
        SelectMode::Single => Selection::Single(props.init_value.clone()),
        SelectMode::Multi => Selection::Multi(props.init_multi_selected.clone()),
    }
}

/// State after the configuration moved from `old` to `new`.
///
/// Only a change of the initial value for the active mode re-seeds the
/// selection (or a change of mode, which has to). Any other difference,
/// including an identical initial value, leaves `state` as it is.
pub fn reconcile(old: &SelectorProps, new: &SelectorProps, state: &SelectorState) -> SelectorState {
    let reseed = match (old.mode(), new.mode()) {
        (SelectMode::Single, SelectMode::Single) => old.init_value != new.init_value,
        (SelectMode::Multi, SelectMode::Multi) => {
            old.init_multi_selected != new.init_multi_selected
        }
        _ => true,
    };
    if reseed {
        log::debug!("selector: initial value changed, re-seeding selection");
        state.reduce(SelectorEvent::Reseed(seed(new)))
    } else {
        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> SelectOption {
        SelectOption::new("a", "Apple")
    }

    #[test]
    fn open_close_leave_selection_alone() {
        let s0 = SelectorState::initial(&SelectorProps::default());
        let s1 = s0.reduce(SelectorEvent::Open);
        assert!(s1.visible);
        let s2 = s1.reduce(SelectorEvent::Open).reduce(SelectorEvent::Close);
        assert_eq!(s2, s0);
        assert_eq!(s2.reduce(SelectorEvent::Close), s0);
    }

    #[test]
    fn pick_records_label_and_closes() {
        let open = SelectorState::initial(&SelectorProps::default()).reduce(SelectorEvent::Open);
        let picked = open.reduce(SelectorEvent::Pick(apple()));
        assert!(!picked.visible);
        assert_eq!(picked.selection, Selection::Single("Apple".into()));
    }

    #[test]
    fn sections_are_never_selected() {
        let header = SelectOption::section("fruit", "Fruit");
        let single = SelectorState::initial(&SelectorProps::default()).reduce(SelectorEvent::Open);
        assert_eq!(single.reduce(SelectorEvent::Pick(header.clone())), single);

        let multi = SelectorState::initial(&SelectorProps::default().multi_select(true));
        let toggled = multi.reduce(SelectorEvent::Toggle {
            option: header,
            on: true,
        });
        assert_eq!(toggled, multi);
    }

    #[test]
    fn toggle_keeps_overlay_open() {
        let props = SelectorProps::default().multi_select(true);
        let open = SelectorState::initial(&props).reduce(SelectorEvent::Open);
        let on = open.reduce(SelectorEvent::Toggle {
            option: apple(),
            on: true,
        });
        assert!(on.visible);
        assert!(on.selection.as_multi().is_some_and(|m| m.contains("a")));

        let off = on.reduce(SelectorEvent::Toggle {
            option: apple(),
            on: false,
        });
        assert!(off.selection.as_multi().is_some_and(|m| m.is_empty()));
    }

    #[test]
    fn mismatched_events_are_ignored() {
        let single = SelectorState::initial(&SelectorProps::default());
        assert_eq!(
            single.reduce(SelectorEvent::Toggle {
                option: apple(),
                on: true
            }),
            single
        );
        let multi = SelectorState::initial(&SelectorProps::default().multi_select(true));
        assert_eq!(multi.reduce(SelectorEvent::Pick(apple())), multi);
    }

    #[test]
    fn reconcile_reseeds_only_on_init_value_change() {
        let old = SelectorProps::default().init_value("Pick a fruit");
        let state = SelectorState::initial(&old).reduce(SelectorEvent::Pick(apple()));

        let unrelated = old.clone().cancel_text("nope").disabled(true);
        assert_eq!(reconcile(&old, &unrelated, &state), state);

        let changed = old.clone().init_value("Pick a vegetable");
        let next = reconcile(&old, &changed, &state);
        assert_eq!(next.selection, Selection::Single("Pick a vegetable".into()));
        assert_eq!(next.visible, state.visible);
    }

    #[test]
    fn reconcile_reseeds_multi_and_mode_switch() {
        let old = SelectorProps::default().multi_select(true);
        let state = SelectorState::initial(&old);

        let seeded = old.clone().init_multi_selected([apple()]);
        let next = reconcile(&old, &seeded, &state);
        assert_eq!(
            next.selection.as_multi().and_then(|m| m.display_text()),
            Some("Apple".to_string())
        );

        let single = old.clone().multi_select(false);
        let switched = reconcile(&old, &single, &next);
        assert_eq!(switched.selection, Selection::Single("Select me!".into()));
    }
}
