/// An event-like argument that carries the current value of the element that fired it.
///
/// This is the typed replacement for reaching into `event.target.value`: a change handler created
/// with [`use_input_with`](crate::use_input_with) only accepts arguments that know how to produce
/// the new value, so a handler can never be fed an event without one.
///
/// ```rust
/// use dioxus_input::InputEvent;
///
/// struct SliderMoved {
///     position: f32,
/// }
///
/// impl InputEvent for SliderMoved {
///     type Value = f32;
///
///     fn target_value(&self) -> f32 {
///         self.position
///     }
/// }
///
/// assert_eq!(SliderMoved { position: 0.5 }.target_value(), 0.5);
/// ```
pub trait InputEvent: 'static {
    /// The value the event reports.
    type Value;

    /// Read the current value of the element that fired this event.
    fn target_value(&self) -> Self::Value;
}

#[cfg(feature = "html")]
impl InputEvent for dioxus_html::FormEvent {
    type Value = String;

    fn target_value(&self) -> String {
        self.value()
    }
}
