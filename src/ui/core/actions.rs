/// Side effect requested by a component after handling an event.
///
/// The event loop carries these out; components never touch the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Switch the terminal to the alternate (full-screen) buffer
    EnterAltScreen,
    /// Stop the event loop
    Quit,
    None,
}
