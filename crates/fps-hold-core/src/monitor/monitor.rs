//! Hold-to-limit monitor.
//!
//! Owns the settings, the current state, the press window and the activity
//! log. It is driven exclusively by [`MonitorEvent`]s read from one queue, so
//! a `Stop` racing a `Released` edge is simply handled in arrival order.
//!
//! Every failure is caught here and turned into an activity log entry; the
//! only forced transition is back to `Idle` when registration fails.

use crate::{
    ActivityLog,
    hotkey::{EdgeCallback, EdgeState, HotkeyRegistrar},
    limiter::{LimiterCommand, LimiterInvoker},
    monitor::{
        MonitorEvent, MonitorReceiver, MonitorSender, MonitorSnapshot, MonitorState, PressWindow,
    },
    settings::{Binding, RateLimit, Settings, Target},
    store::SettingsStore,
};

use std::{ops::ControlFlow, time::Duration};

use tokio::sync::{mpsc::WeakUnboundedSender, watch};
use tracing::{debug, error, info, instrument, warn};

/// Press-and-hold frame rate limit controller.
pub struct Monitor<R, L, S> {
    registrar: R,
    limiter: L,
    store: S,
    settings: Settings,
    state: MonitorState,
    last_hold: Option<Duration>,
    log: ActivityLog,
    // Weak so the queue closes once every external sender is gone.
    events_tx: WeakUnboundedSender<MonitorEvent>,
    status_tx: watch::Sender<MonitorSnapshot>,
}

impl<R, L, S> Monitor<R, L, S>
where
    R: HotkeyRegistrar,
    L: LimiterInvoker,
    S: SettingsStore,
{
    /// Create an `Idle` monitor, loading settings from `store`.
    ///
    /// `events_tx` must feed the receiver later passed to [`Monitor::run`];
    /// registered hotkeys push their edges through it.
    pub fn new(
        registrar: R,
        limiter: L,
        store: S,
        events_tx: &MonitorSender,
    ) -> (Self, watch::Receiver<MonitorSnapshot>) {
        let mut log = ActivityLog::new();
        let settings = load_settings(&store, &mut log);
        let (status_tx, status_rx) = watch::channel(MonitorSnapshot::default());

        let monitor = Self {
            registrar,
            limiter,
            store,
            settings,
            state: MonitorState::Idle,
            last_hold: None,
            log,
            events_tx: events_tx.downgrade(),
            status_tx,
        };
        monitor.publish();

        (monitor, status_rx)
    }

    /// Current state.
    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Settings in effect.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Duration of the last completed hold.
    pub fn last_hold(&self) -> Option<Duration> {
        self.last_hold
    }

    /// Activity log so far.
    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Consume events until `Shutdown` or until every sender is dropped.
    ///
    /// Either way the hotkey is released before returning.
    #[instrument(skip_all)]
    pub async fn run(mut self, mut events_rx: MonitorReceiver) {
        info!("Monitor started");

        loop {
            let Some(event) = events_rx.recv().await else {
                info!("Monitor queue closed, shutting down");
                self.shutdown().await;
                break;
            };

            if self.handle(event).await.is_break() {
                break;
            }
        }

        info!("Monitor stopped");
    }

    /// Handle one event and publish the resulting snapshot.
    ///
    /// Returns `Break` once the monitor has shut down.
    pub async fn handle(&mut self, event: MonitorEvent) -> ControlFlow<()> {
        debug!(?event, state = ?self.state, "Handling monitor event");

        let flow = match event {
            MonitorEvent::Start => {
                self.start().await;
                ControlFlow::Continue(())
            }
            MonitorEvent::Stop => {
                self.stop().await;
                ControlFlow::Continue(())
            }
            MonitorEvent::ResetSettings => {
                self.replace_settings(Settings::reset_defaults(), "Default settings restored");
                ControlFlow::Continue(())
            }
            MonitorEvent::ReloadSettings => {
                if self.ensure_idle("reload settings") {
                    self.settings = load_settings(&self.store, &mut self.log);
                }
                ControlFlow::Continue(())
            }
            MonitorEvent::UpdateSettings(settings) => {
                self.replace_settings(settings, "Settings updated");
                ControlFlow::Continue(())
            }
            MonitorEvent::Edge(EdgeState::Pressed) => {
                self.on_pressed().await;
                ControlFlow::Continue(())
            }
            MonitorEvent::Edge(EdgeState::Released) => {
                self.on_released().await;
                ControlFlow::Continue(())
            }
            MonitorEvent::Shutdown => {
                self.shutdown().await;
                ControlFlow::Break(())
            }
        };

        self.publish();
        flow
    }

    #[instrument(skip(self))]
    async fn start(&mut self) {
        if self.state.is_monitoring() {
            debug!("Already monitoring, start ignored");
            return;
        }

        let (Some(binding), Some(target), Some(_)) = (
            self.settings.binding.clone(),
            self.settings.target.clone(),
            self.settings.rate,
        ) else {
            debug!(settings = %self.settings, "Settings incomplete, start ignored");
            return;
        };

        match self.store.save(&self.settings) {
            Ok(()) => self.log.append("Settings saved"),
            Err(e) => {
                error!(error = ?e, "Failed to save settings");
                self.log.append(format!("Failed to save settings: {}", e));
            }
        }

        // Known baseline before arming.
        self.run_limiter(LimiterCommand::clear(&target)).await;
        self.log.append("Monitoring started");

        let on_edge = self.edge_callback();
        match self.registrar.register(&binding, on_edge).await {
            Ok(()) => {
                self.state = MonitorState::Armed;
                info!(binding = %binding, target = %target, "Hotkey armed");
                self.log.append(format!("Hotkey {} registered", binding));
            }
            Err(e) => {
                error!(binding = %binding, error = ?e, "Hotkey registration failed");
                self.log
                    .append(format!("Failed to register hotkey {}: {}", binding, e));
                self.log.append("Monitoring stopped");
                self.state = MonitorState::Idle;
            }
        }
    }

    #[instrument(skip(self))]
    async fn stop(&mut self) {
        if !self.state.is_monitoring() {
            debug!("Not monitoring, stop ignored");
            return;
        }

        if let Some(target) = self.settings.target.clone() {
            self.run_limiter(LimiterCommand::clear(&target)).await;
        }
        self.release_hotkey().await;

        self.state = MonitorState::Idle;
        self.log.append("Monitoring stopped");
    }

    async fn on_pressed(&mut self) {
        let Some((binding, target, rate)) = self.armed_scope() else {
            debug!("Pressed edge while idle ignored");
            return;
        };

        match self.state {
            MonitorState::Held { window } => {
                warn!(hold_id = %window.hold_id, "Duplicate pressed edge");
            }
            _ => {
                let window = PressWindow::open();
                info!(hold_id = %window.hold_id, "Hold started");
                self.log.append(format!("Hotkey {} pressed", binding));
                self.state = MonitorState::Held { window };
            }
        }

        self.run_limiter(LimiterCommand::set(&target, rate)).await;
    }

    async fn on_released(&mut self) {
        let Some((binding, target, _)) = self.armed_scope() else {
            debug!("Released edge while idle ignored");
            return;
        };

        self.log.append(format!("Hotkey {} released", binding));

        let closed = match self.state {
            MonitorState::Held { window } => Some((window, window.started_at.elapsed())),
            _ => {
                warn!("Released edge without a press, clearing limit anyway");
                None
            }
        };

        self.run_limiter(LimiterCommand::clear(&target)).await;

        if let Some((window, duration)) = closed {
            self.last_hold = Some(duration);
            self.state = MonitorState::Armed;
            info!(
                hold_id = %window.hold_id,
                duration_ms = duration.as_millis(),
                "Hold finished"
            );
            self.log
                .append(format!("Hold duration: {} ms", duration.as_millis()));
        }
    }

    #[instrument(skip(self))]
    async fn shutdown(&mut self) {
        if let (true, Some(target)) = (self.state.is_monitoring(), self.settings.target.clone()) {
            self.run_limiter(LimiterCommand::clear(&target)).await;
        }

        if let Err(e) = self.registrar.unregister_all().await {
            error!(error = ?e, "Failed to unregister hotkeys on shutdown");
            self.log
                .append(format!("Failed to unregister hotkeys: {}", e));
        }

        self.state = MonitorState::Idle;
    }

    async fn release_hotkey(&mut self) {
        let Some(binding) = self.settings.binding.clone() else {
            return;
        };

        if !self.registrar.is_registered(&binding).await {
            self.log.append(format!("Hotkey {} not registered", binding));
            return;
        }

        self.log.append(format!("Unregistering hotkey {}", binding));
        match self.registrar.unregister_all().await {
            Ok(()) => self.log.append(format!("Hotkey {} unregistered", binding)),
            Err(e) => {
                error!(binding = %binding, error = ?e, "Failed to unregister hotkey");
                self.log
                    .append(format!("Failed to unregister hotkey {}: {}", binding, e));
            }
        }
    }

    /// Log, run and log the output of one limiter command.
    ///
    /// Failures leave the state untouched; the command is best-effort.
    async fn run_limiter(&mut self, command: LimiterCommand) {
        self.log
            .append(format!("Limiter command executed: {}", command));

        match self.limiter.run(command.args()).await {
            Ok(output) => {
                self.log.append(format!("Limiter output: {}", output.stdout));
            }
            Err(e) => {
                error!(command = %command, error = ?e, "Limiter command failed");
                self.log
                    .append(format!("Failed to run limiter command: {}", e));
            }
        }
    }

    fn replace_settings(&mut self, settings: Settings, message: &str) {
        if self.ensure_idle("change settings") {
            self.settings = settings;
            self.log.append(format!("{}: {}", message, self.settings));
        }
    }

    fn ensure_idle(&mut self, action: &str) -> bool {
        if self.state.is_monitoring() {
            self.log
                .append(format!("Cannot {} while monitoring", action));
            return false;
        }
        true
    }

    /// Binding, target and rate while monitoring; `None` when idle.
    fn armed_scope(&self) -> Option<(Binding, Target, RateLimit)> {
        if !self.state.is_monitoring() {
            return None;
        }

        Some((
            self.settings.binding.clone()?,
            self.settings.target.clone()?,
            self.settings.rate?,
        ))
    }

    fn edge_callback(&self) -> EdgeCallback {
        let events_tx = self.events_tx.clone();

        Box::new(move |state| {
            let Some(tx) = events_tx.upgrade() else {
                debug!(?state, "Monitor gone, edge dropped");
                return;
            };
            if tx.send(MonitorEvent::Edge(state)).is_err() {
                warn!(?state, "Monitor queue closed, edge dropped");
            }
        })
    }

    fn publish(&self) {
        self.status_tx.send_replace(MonitorSnapshot {
            phase: self.state.phase(),
            settings: self.settings.clone(),
            last_hold: self.last_hold,
            latest_log: self.log.latest().map(ToString::to_string),
        });
    }
}

/// Read settings, falling back to defaults on any error.
fn load_settings<S: SettingsStore>(store: &S, log: &mut ActivityLog) -> Settings {
    match store.load() {
        Ok(settings) => {
            log.append("Settings loaded");
            settings
        }
        Err(e) => {
            warn!(error = ?e, "Failed to load settings, using defaults");
            log.append(format!("Failed to load settings: {}", e));
            Settings::default()
        }
    }
}
