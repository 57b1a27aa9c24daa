use std::panic::Location;

use dioxus_core::{use_hook, Callback};
use dioxus_signals::{CopyValue, ReadableExt, Signal, WritableExt};

use crate::{InputBinding, InputEvent};

/// Creates a controlled text input driven by form events.
///
/// Returns the [`InputBinding`] for the input and a callback that resets it to the initial value.
/// The change handler takes the new text from the event's `value()`.
///
/// ```rust, no_run
/// use dioxus::prelude::*;
/// use dioxus_input::use_input;
///
/// fn NameField() -> Element {
///     let (name, reset) = use_input(|| "Ferris".to_string());
///
///     rsx! {
///         input {
///             value: "{name}",
///             oninput: move |evt| name.onchange().call(evt),
///         }
///         if name.is_modified() {
///             button { onclick: move |_| reset.call(()), "Undo" }
///         }
///     }
/// }
/// ```
#[cfg(feature = "html")]
#[track_caller]
#[must_use]
pub fn use_input(
    initial_value: impl FnOnce() -> String,
) -> (InputBinding<dioxus_html::FormEvent, String>, Callback<()>) {
    use_input_with::<dioxus_html::FormEvent>(initial_value)
}

/// Creates a controlled input whose change handler receives events of type `E`.
///
/// Each time the handler runs, the new value is read from the event with
/// [`InputEvent::target_value`].
#[track_caller]
#[must_use]
pub fn use_input_with<E: InputEvent>(
    initial_value: impl FnOnce() -> E::Value,
) -> (InputBinding<E, E::Value>, Callback<()>)
where
    E::Value: Clone + PartialEq + 'static,
{
    use_binding(initial_value, |event: E| event.target_value())
}

/// Creates a controlled input whose change handler receives the new value itself.
///
/// This is the mode for editors and other widgets that report their value directly rather than
/// through an event. Any `T: Clone + PartialEq` is stored exactly as it is passed in.
///
/// ```rust
/// use dioxus::prelude::*;
/// use dioxus_input::use_editor_input;
///
/// fn app() -> Element {
///     let (count, reset) = use_editor_input(|| 0);
///
///     rsx! {
///         button { onclick: move |_| count.onchange().call(42), "{count}" }
///         button { onclick: move |_| reset.call(()), "reset" }
///     }
/// }
///
/// let mut dom = VirtualDom::new(app);
/// dom.rebuild_in_place();
/// ```
#[track_caller]
#[must_use]
pub fn use_editor_input<T: Clone + PartialEq + 'static>(
    initial_value: impl FnOnce() -> T,
) -> (InputBinding<T, T>, Callback<()>) {
    use_binding(initial_value, |value: T| value)
}

/// Build the binding and reset callback once for the current component. Later renders return the
/// same handles.
#[track_caller]
fn use_binding<A: 'static, T: Clone + PartialEq + 'static>(
    initial_value: impl FnOnce() -> T,
    extract: impl Fn(A) -> T + 'static,
) -> (InputBinding<A, T>, Callback<()>) {
    let location = Location::caller();

    use_hook(move || {
        let initial_value = initial_value();
        let value = Signal::new(initial_value.clone());
        let initial = CopyValue::new(initial_value);

        let onchange = Callback::new(move |arg: A| {
            tracing::trace!("input created at {location} changed");
            assign(value, extract(arg), location);
        });

        let reset = Callback::new(move |_: ()| {
            tracing::trace!("input created at {location} reset");
            assign(value, T::clone(&initial.peek()), location);
        });

        (
            InputBinding {
                value,
                initial,
                onchange,
            },
            reset,
        )
    })
}

/// Write `next` into the input unless it already holds an equal value.
fn assign<T: PartialEq + 'static>(mut value: Signal<T>, next: T, location: &Location<'static>) {
    let unchanged = *value.peek() == next;
    if unchanged {
        tracing::trace!("input created at {location} already holds this value, skipping write");
        return;
    }

    value.set(next);
}
