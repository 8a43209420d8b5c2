use crate::setup::SetupCoordinator;

pub trait SetupObserver {
    fn alert(&mut self, _message: &str) {}

    fn credential_saved(&mut self, _created_new: bool) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SetupObserver for NoopObserver {}

pub trait SetupScreen {
    fn coordinator(&mut self) -> &mut SetupCoordinator;

    fn init(&mut self) {
        self.coordinator().load_config(None);
    }

    fn render(&mut self);

    fn teardown(&mut self) {}
}
