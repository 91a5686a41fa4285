#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Toggle {
        on: bool,
        flips: u32,
    }

    impl StateHolder for Toggle {
        type Event = bool;

        fn reduce(&self, on: bool) -> Self {
            if on == self.on {
                return self.clone();
            }
            Toggle {
                on,
                flips: self.flips + 1,
            }
        }
    }

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);
        assert_eq!(sig.with(|v| v + 1), 101);
    }

    #[test]
    fn test_signal_unsubscribe() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        let id = sig.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        sig.set(1);
        sig.unsubscribe(id);
        sig.set(2);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_subscriber_can_read_signal() {
        let sig = signal(String::from("a"));
        let read_back = Rc::new(RefCell::new(String::new()));

        let (sig2, read_back2) = (sig.clone(), read_back.clone());
        sig.subscribe(move |_| *read_back2.borrow_mut() = sig2.get());

        sig.set("b".into());
        assert_eq!(*read_back.borrow(), "b");
    }

    #[test]
    fn test_subscriber_can_write_and_resubscribe() {
        let sig = signal(0u32);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let (sig2, seen2) = (sig.clone(), seen.clone());
        sig.subscribe(move |v| {
            seen2.borrow_mut().push(*v);
            if *v == 1 {
                sig2.set(0);
                sig2.subscribe(|_| {});
            }
        });

        sig.set(1);
        assert_eq!(sig.get(), 0);
        assert_eq!(*seen.borrow(), vec![1, 0]);
    }

    #[test]
    fn test_store_preview_does_not_commit() {
        let store = Store::new(Toggle {
            on: false,
            flips: 0,
        });

        let next = store.preview(true);
        assert!(next.on);
        assert!(!store.get().on);

        store.dispatch(true);
        store.dispatch(true);
        assert_eq!(
            store.get(),
            Toggle {
                on: true,
                flips: 1
            }
        );
    }

    #[test]
    fn test_store_notifies_after_commit() {
        let store = Store::new(Toggle {
            on: false,
            flips: 0,
        });
        let observed = Rc::new(RefCell::new(None));

        let observed2 = observed.clone();
        store.subscribe(move |s: &Toggle| *observed2.borrow_mut() = Some(s.on));

        store.dispatch(true);
        assert_eq!(*observed.borrow(), Some(true));
    }

    #[test]
    fn test_key_based_remember_and_forget() {
        COMPOSER.with(|c| c.borrow_mut().keyed_slots.clear());

        let val1 = remember_with_key("test", || 42);
        let val2 = remember_with_key("test", || 100);
        assert_eq!(*val1, 42);
        assert_eq!(*val2, 42);

        assert!(forget_key("test"));
        assert!(!forget_key("test"));
        let val3 = remember_with_key("test", || 7);
        assert_eq!(*val3, 7);
    }

    #[test]
    fn test_view_ids_restart_each_pass() {
        let build = || {
            let root = View::new(next_view_id(), ViewKind::Column);
            let a = View::new(next_view_id(), ViewKind::Box);
            let b = View::new(next_view_id(), ViewKind::Box);
            root.with_children(vec![a, b])
        };

        let first = compose(build);
        let second = compose(build);

        let ids = |v: &View| {
            let mut out = Vec::new();
            v.walk(&mut |n| out.push(n.id));
            out
        };
        assert_eq!(ids(&first), vec![1, 2, 3]);
        assert_eq!(ids(&second), ids(&first));
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#FF5733"), Color(255, 87, 51, 255));
        assert_eq!(Color::from_hex("#FF5733AA"), Color(255, 87, 51, 170));
        assert_eq!(Color::from_hex("nope"), Color::BLACK);
    }

    #[test]
    fn test_modifier_merge_keeps_unset_defaults() {
        let base = Modifier::new()
            .padding(8.0)
            .background(Color::WHITE)
            .border(1.0, Color::BLACK, 4.0);
        let overrides = Modifier::new()
            .background(Color::BLACK)
            .margin_values(PaddingValues::symmetric(0.0, 4.0));

        let merged = base.merge(&overrides);
        assert_eq!(merged.padding, Some(8.0));
        assert_eq!(merged.background, Some(Color::BLACK));
        assert_eq!(merged.margin.map(|m| m.top), Some(4.0));
        assert_eq!(merged.border.map(|b| b.radius), Some(4.0));
    }

    #[test]
    fn test_theme_scoping() {
        let dark = Theme {
            on_surface: Color::WHITE,
            ..Theme::default()
        };
        with_theme(dark, || assert_eq!(theme().on_surface, Color::WHITE));
        assert_eq!(theme(), Theme::default());
    }

    #[test]
    fn test_presentation_hints_parse() {
        assert_eq!(
            "portrait-upside-down".parse::<Orientation>(),
            Ok(Orientation::PortraitUpsideDown)
        );
        assert_eq!(Orientation::LandscapeRight.to_string(), "landscape-right");
        assert_eq!("fade".parse::<AnimationType>(), Ok(AnimationType::Fade));
        assert_eq!(
            "handled".parse::<KeyboardPersistTaps>(),
            Ok(KeyboardPersistTaps::Handled)
        );
        assert_eq!(KeyboardPersistTaps::from(false), KeyboardPersistTaps::Never);
    }

    #[test]
    fn test_presentation_hint_errors() {
        let err = "sideways".parse::<Orientation>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownOrientation("sideways".into()));
        assert_eq!(err.to_string(), "unknown orientation `sideways`");
        assert!("bounce".parse::<AnimationType>().is_err());
    }

    #[test]
    fn test_view_find_and_text() {
        let tree = View::new(0, ViewKind::Column).with_children(vec![
            View::new(0, ViewKind::Box).key("a").with_children(vec![View::new(
                0,
                ViewKind::Text {
                    text: "Apple".into(),
                    color: Color::BLACK,
                    font_size: 16.0,
                },
            )]),
            View::new(
                0,
                ViewKind::Text {
                    text: "Banana".into(),
                    color: Color::BLACK,
                    font_size: 16.0,
                },
            ),
        ]);

        assert_eq!(tree.collect_text(), vec!["Apple", "Banana"]);
        let a = tree.find_by_key("a").expect("row a");
        assert_eq!(a.collect_text(), vec!["Apple"]);
        assert!(tree.find_by_key("z").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_presentation_hints_serde() {
        let json = serde_json::to_string(&Orientation::LandscapeLeft).unwrap();
        assert_eq!(json, "\"landscape-left\"");
        let anim: AnimationType = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(anim, AnimationType::None);
    }
}
