use tokio::sync::mpsc;
use tracing::trace;

use super::action::Action;
use super::component::{Component, Effect, Element};
use super::components::App;
use super::reducer::reduce;
use super::state::AppState;

/// Component runtime - owns the state and processes actions
///
/// The Runtime is responsible for:
/// - Dispatching actions through the reducer
/// - Executing side effects asynchronously
/// - Building the virtual component tree
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Actions produced by completed effects
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,
}

impl Runtime {
    /// Create a new runtime and spawn its effect executor
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx).await;
        });

        Self {
            state: initial_state,
            action_rx,
            effect_tx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    fn execute_effect(&self, effect: Effect) {
        if let Effect::Async(_) = effect {
            trace!("ACTION: Queueing effect for async execution");
            let _ = self.effect_tx.send(effect);
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Build the virtual element tree from current state
    pub fn build(&self) -> Element {
        App.view(&self.state)
    }

    /// Execute effects as they arrive, feeding resulting actions back
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            if let Effect::Async(future) = effect {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigKey, ConfigStore};
    use crate::tui::action::PanelAction;
    use crate::tui::panel::Panel;
    use crate::tui::types::Function;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;
    use tokio::time::{sleep, Duration, Instant};

    /// Process queued actions until `done` holds or a second has passed
    async fn process_until(runtime: &mut Runtime, done: impl Fn(&AppState) -> bool) {
        let start = Instant::now();
        while start.elapsed() < Duration::from_secs(1) {
            runtime.process_actions();
            if done(runtime.state()) {
                return;
            }
            sleep(Duration::from_millis(10)).await;
        }
    }

    #[tokio::test]
    async fn test_runtime_starts_on_first_entry() {
        let runtime = Runtime::new(AppState::new(ConfigStore::default()));

        assert_eq!(runtime.state().navigation.selected, Some(Function::Overview));
        assert_eq!(runtime.state().panel, Panel::Label(Function::Overview));
    }

    #[tokio::test]
    async fn test_dispatch_action() {
        let mut runtime = Runtime::new(AppState::default());

        runtime.dispatch(Action::SelectFunction(Function::Capture));

        assert_eq!(runtime.state().navigation.selected, Some(Function::Capture));
    }

    #[tokio::test]
    async fn test_process_actions_without_effects() {
        let mut runtime = Runtime::new(AppState::default());

        assert_eq!(runtime.process_actions(), 0);
        assert_eq!(runtime.state().navigation.selected, None);
    }

    #[tokio::test]
    async fn test_effect_execution() {
        let mut runtime = Runtime::new(AppState::default());

        let executed = Arc::new(Mutex::new(false));
        let executed_clone = executed.clone();
        let effect = Effect::Async(Box::pin(async move {
            *executed_clone.lock().unwrap() = true;
            Action::SelectFunction(Function::Help)
        }));

        runtime.effect_tx.send(effect).unwrap();
        process_until(&mut runtime, |state| state.navigation.selected.is_some()).await;

        assert!(*executed.lock().unwrap());
        assert_eq!(runtime.state().navigation.selected, Some(Function::Help));
    }

    #[tokio::test]
    async fn test_none_effect_queues_nothing() {
        let mut runtime = Runtime::new(AppState::default());

        runtime.execute_effect(Effect::None);
        sleep(Duration::from_millis(20)).await;

        assert_eq!(runtime.process_actions(), 0);
    }

    #[tokio::test]
    async fn test_settings_submit_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bookholder.yaml");
        let config = ConfigStore::load_from(&path, Vec::new()).unwrap();
        let mut runtime = Runtime::new(AppState::new(config));

        runtime.dispatch(Action::SelectFunction(Function::Settings));
        runtime.dispatch(Action::FocusContent);
        for c in "books.internal".chars() {
            runtime.dispatch(Action::PanelAction(PanelAction::InsertChar(c)));
        }
        runtime.dispatch(Action::PanelAction(PanelAction::Submit));
        process_until(&mut runtime, |state| {
            state
                .system
                .status_message
                .as_deref()
                .is_some_and(|m| m.starts_with("Configuration saved"))
        })
        .await;

        let status = runtime.state().system.status_message.clone().unwrap_or_default();
        assert!(status.starts_with("Configuration saved at "), "status: {}", status);
        let reloaded = ConfigStore::load_from(&path, Vec::new()).unwrap();
        assert_eq!(reloaded.get(ConfigKey::Server), "books.internal");
    }

    #[tokio::test]
    async fn test_build_returns_component_tree() {
        let runtime = Runtime::new(AppState::default());

        match runtime.build() {
            Element::Container { children, .. } => assert_eq!(children.len(), 2),
            other => panic!("Expected container element from App component, got {:?}", other),
        }
    }
}
