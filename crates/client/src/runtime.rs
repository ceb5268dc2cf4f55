//! The client event loop: wires gestures and timers to the dispatcher and
//! keeps the rendered page in sync with the state.

use std::time::Duration;

use marquee_core::filter::distinct_categories;
use marquee_core::hero::ROTATION_INTERVAL_MS;
use marquee_core::movie::Movie;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::app::{Action, ClientApp, RenderEffect};
use crate::timer::{Debouncer, RotationTimer, SEARCH_DEBOUNCE_MS};
use crate::view::{
    indicator_state, render_grid, render_hero, render_modal, render_page, IndicatorState,
};

/// The rendered surface: the DOM stand-in the view synchronizer writes to.
/// `document` is the full structural render; the partial fields hold the
/// fragments replaced by partial render passes.
#[derive(Debug)]
pub struct Page {
    pub document: String,
    pub grid: String,
    pub hero: String,
    pub modal: String,
    pub indicators: IndicatorState,
}

/// Owns the whole client state, the action channel, and both timers.
///
/// Every mutation path converges here: direct gestures call [`Runtime::
/// handle`], search keystrokes go through the debouncer, and timer fires
/// arrive over the action channel and are applied by [`Runtime::step`]. The
/// state itself is only ever touched from this single logical thread.
pub struct Runtime {
    app: ClientApp,
    page: Page,
    actions_tx: UnboundedSender<Action>,
    actions_rx: UnboundedReceiver<Action>,
    debouncer: Debouncer,
    rotation: RotationTimer,
}

impl Runtime {
    /// Build the initial state from a fetched catalog, perform the full
    /// structural render plus the initial grid pass, and arm the hero
    /// auto-advance timer when there is anything to rotate.
    pub fn new(catalog: Vec<Movie>) -> Self {
        let (actions_tx, actions_rx) = mpsc::unbounded_channel();
        let app = ClientApp::new(catalog);

        let page = Page {
            document: render_page(&app),
            grid: render_grid(app.store.visible(), app.store.filters()),
            hero: render_hero(&app.hero),
            modal: render_modal(&app.overlay),
            indicators: indicator_state(
                &distinct_categories(app.store.all()),
                app.store.filters(),
            ),
        };

        let mut runtime = Self {
            app,
            page,
            actions_tx,
            actions_rx,
            debouncer: Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
            rotation: RotationTimer::new(Duration::from_millis(ROTATION_INTERVAL_MS)),
        };

        if !runtime.app.hero.is_empty() {
            runtime.rotation.start(&runtime.actions_tx);
        }
        runtime
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn app(&self) -> &ClientApp {
        &self.app
    }

    /// Sender used by markup event bindings and timers to enqueue actions.
    pub fn sender(&self) -> UnboundedSender<Action> {
        self.actions_tx.clone()
    }

    /// A raw search keystroke. Commits as [`Action::SetSearch`] only after
    /// the quiet period, with the latest value.
    pub fn search_input(&mut self, value: &str) {
        self.debouncer.input(value.to_string(), &self.actions_tx);
    }

    /// Await one queued action (timer fire or forwarded gesture) and apply it.
    pub async fn step(&mut self) {
        if let Some(action) = self.actions_rx.recv().await {
            self.handle(action);
        }
    }

    /// Apply one action and run the render passes it requests.
    pub fn handle(&mut self, action: Action) {
        tracing::debug!(?action, "Dispatching");
        let effects = self.app.dispatch(action);
        for effect in effects {
            match effect {
                RenderEffect::Grid => {
                    self.page.grid =
                        render_grid(self.app.store.visible(), self.app.store.filters());
                }
                RenderEffect::Indicators => {
                    self.page.indicators = indicator_state(
                        &distinct_categories(self.app.store.all()),
                        self.app.store.filters(),
                    );
                }
                RenderEffect::Hero => {
                    self.page.hero = render_hero(&self.app.hero);
                }
                RenderEffect::Overlay => {
                    self.page.modal = render_modal(&self.app.overlay);
                }
                RenderEffect::RestartRotation => {
                    self.rotation.start(&self.actions_tx);
                }
            }
        }
    }
}
