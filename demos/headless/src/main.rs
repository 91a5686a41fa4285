//! Drives a single- and a multi-select selector with synthetic input and
//! logs the tree after every step. Run with `RUST_LOG=debug` to see the
//! selector's own transitions.

use anyhow::{Context, bail};
use modal_selector::*;
use selector_core::{View, compose};
use selector_ui::interact::{outline, press_key, press_text, request_close, toggle_key};

fn fruit() -> Vec<SelectOption> {
    vec![
        SelectOption::section("fruit", "Fruit"),
        SelectOption::new("a", "Apple"),
        SelectOption::new("b", "Banana"),
        SelectOption::section("veg", "Vegetables"),
        SelectOption::new("c", "Carrot"),
    ]
}

fn frame(handle: &SelectorHandle, props: &SelectorProps) -> View {
    let view = compose(|| ModalSelector(handle, props.clone()));
    log::info!("{}\n{}", handle.key(), outline(&view));
    view
}

fn single() -> anyhow::Result<()> {
    let props = SelectorProps::new(fruit())
        .init_value("Pick a fruit")
        .on_change(|o: &SelectOption| log::info!("picked {} ({})", o.label, o.key));
    let handle = remember_selector("single", &props);

    let view = frame(&handle, &props);
    if !press_text(&view, "Pick a fruit") {
        bail!("trigger did not take the press");
    }
    let view = frame(&handle, &props);
    press_text(&view, "Banana");
    frame(&handle, &props);

    println!("single: {}", handle.trigger_text());
    Ok(())
}

fn multi() -> anyhow::Result<()> {
    let props = SelectorProps::new(fruit())
        .multi_select(true)
        .backdrop_press_to_close(true)
        .on_change_multi_select(|m: &MultiSelection| {
            log::info!("selection now {:?}", m.keys().collect::<Vec<_>>())
        });
    let handle = remember_selector("multi", &props);

    handle.open();
    for key in ["a", "c"] {
        let view = frame(&handle, &props);
        toggle_key(&view, key, true);
    }
    let view = frame(&handle, &props);
    press_key(&view, FOOTER_KEY)
        .then_some(())
        .context("done row missing")?;

    handle.open();
    request_close(&frame(&handle, &props));
    frame(&handle, &props);

    println!("multi: {}", handle.trigger_text());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    single()?;
    multi()?;
    Ok(())
}
