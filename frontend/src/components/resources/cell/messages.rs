pub enum Msg {
    BeginEdit,
    Draft(String),
    /// Enter or blur on free-text widgets.
    Commit,
    /// A discrete widget picked a value.
    Select(String),
    Cancel,
}
