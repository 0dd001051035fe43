/// Side effects the event handler asks the main loop to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SaveConfig,
    Quit,
}
