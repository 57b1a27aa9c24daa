use std::fmt::{Debug, Display};

use dioxus_core::Callback;
use dioxus_signals::{CopyValue, ReadableExt, Signal};

use crate::InputError;

/// The value of a controlled input together with the handler that changes it.
///
/// Created by [`use_input`](crate::use_input), [`use_input_with`](crate::use_input_with) and
/// [`use_editor_input`](crate::use_editor_input). The binding is `Copy` and can be moved into event
/// handlers and passed to child components freely. `A` is the argument the change handler accepts
/// and `T` is the value it stores.
///
/// The binding only exposes reads. The value changes through [`InputBinding::onchange`] or the
/// reset callback returned next to it.
pub struct InputBinding<A: 'static, T: 'static> {
    pub(crate) value: Signal<T>,
    pub(crate) initial: CopyValue<T>,
    pub(crate) onchange: Callback<A>,
}

impl<A: 'static, T: Clone + 'static> InputBinding<A, T> {
    /// Get the current value. If this is called in a component or a reactive scope, it will
    /// re-run when the value changes.
    #[track_caller]
    pub fn value(&self) -> T {
        self.value.cloned()
    }

    /// Get the current value without subscribing to it.
    #[track_caller]
    pub fn peek(&self) -> T {
        T::clone(&self.value.peek())
    }

    /// Try to get the current value.
    ///
    /// Fails instead of panicking if the component that owns the input has been dropped.
    #[track_caller]
    pub fn try_value(&self) -> Result<T, InputError> {
        let value = self.value.try_read()?;
        Ok(T::clone(&value))
    }

    /// The value the input was created with. Resetting the input restores this value.
    #[track_caller]
    pub fn initial(&self) -> T {
        T::clone(&self.initial.peek())
    }
}

impl<A: 'static, T: PartialEq + 'static> InputBinding<A, T> {
    /// Check if the current value differs from the value the input was created with.
    #[track_caller]
    pub fn is_modified(&self) -> bool {
        *self.value.read() != *self.initial.peek()
    }
}

impl<A: 'static, T: 'static> InputBinding<A, T> {
    /// The change handler for the input.
    ///
    /// The same handler is returned for the whole lifetime of the component, so it compares equal
    /// across renders.
    pub fn onchange(&self) -> Callback<A> {
        self.onchange
    }
}

impl<A: 'static, T: 'static> Clone for InputBinding<A, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static, T: 'static> Copy for InputBinding<A, T> {}

impl<A: 'static, T: 'static> PartialEq for InputBinding<A, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.onchange == other.onchange
    }
}

impl<A: 'static, T: Display + 'static> Display for InputBinding<A, T> {
    #[track_caller]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&*self.value.read(), f)
    }
}

impl<A: 'static, T: Debug + 'static> Debug for InputBinding<A, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputBinding")
            .field("value", &*self.value.peek())
            .field("initial", &*self.initial.peek())
            .finish()
    }
}
