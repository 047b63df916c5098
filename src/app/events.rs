use crossterm::event::Event;

pub enum AppEvent {
    Input(Event),
    RecipientsUpdate(Vec<String>),
    Tick,
}
