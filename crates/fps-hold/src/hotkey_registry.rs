//! Global hotkey registration backed by `global-hotkey`.
//!
//! [`HotkeyRegistry`] owns the [`GlobalHotKeyManager`] and must stay on the
//! main thread: on Windows the `tao` event loop pumps the `WM_HOTKEY`
//! messages. The monitor runs elsewhere and reaches it through
//! [`MainThreadRegistrar`], which posts [`HotkeyRequest`]s to the event loop
//! and awaits the reply.

use crate::{AppError, AppResult, UiCommand};

use std::{
    panic::Location,
    sync::{Mutex, PoisonError},
};

use error_location::ErrorLocation;
use fps_hold_core::{Binding, CoreError, CoreResult, EdgeCallback, EdgeState, HotkeyRegistrar};
use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    hotkey::{HotKey, Modifiers},
};
use tao::event_loop::EventLoopProxy;
use tokio::sync::oneshot;
use tracing::{debug, info, instrument, warn};

/// Convert a chord into a `global-hotkey` [`HotKey`].
///
/// Modifiers come from the parsed binding; the key token is resolved by
/// `global-hotkey`'s own parser (`F1`, `A`, `CapsLock`, `Space`, ...).
#[track_caller]
pub fn to_hotkey(binding: &Binding) -> CoreResult<HotKey> {
    let key = binding
        .key()
        .parse::<HotKey>()
        .map_err(|e| CoreError::InvalidBinding {
            binding: binding.to_string(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?
        .key;

    let chord = binding.modifiers();
    let mut mods = Modifiers::empty();
    mods.set(Modifiers::CONTROL, chord.ctrl);
    mods.set(Modifiers::ALT, chord.alt);
    mods.set(Modifiers::SHIFT, chord.shift);
    mods.set(Modifiers::SUPER, chord.meta);

    Ok(HotKey::new((!mods.is_empty()).then_some(mods), key))
}

/// Main-thread owner of the single registered chord.
pub struct HotkeyRegistry {
    manager: GlobalHotKeyManager,
    active: Option<(Binding, HotKey)>,
}

impl HotkeyRegistry {
    /// Create the OS hotkey manager. Call on the main thread.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyRegistryError {
                reason: format!("Failed to create manager: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            manager,
            active: None,
        })
    }

    /// Reserve `binding` and route its press/release edges to `on_edge`.
    #[track_caller]
    #[instrument(skip(self, on_edge))]
    pub fn register(&mut self, binding: &Binding, on_edge: EdgeCallback) -> CoreResult<()> {
        if let Some((active, _)) = &self.active {
            return Err(CoreError::HotkeyConflict {
                binding: binding.to_string(),
                reason: format!("{} is already registered by this process", active),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let hotkey = to_hotkey(binding)?;

        self.manager
            .register(hotkey)
            .map_err(|e| CoreError::HotkeyConflict {
                binding: binding.to_string(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let hotkey_id = hotkey.id();
        GlobalHotKeyEvent::set_event_handler(Some(move |event: GlobalHotKeyEvent| {
            if event.id != hotkey_id {
                return;
            }
            on_edge(match event.state {
                HotKeyState::Pressed => EdgeState::Pressed,
                HotKeyState::Released => EdgeState::Released,
            });
        }));

        self.active = Some((binding.clone(), hotkey));
        info!(hotkey_id, "Global hotkey registered");

        Ok(())
    }

    /// Whether `binding` is the chord currently held.
    pub fn is_registered(&self, binding: &Binding) -> bool {
        self.active
            .as_ref()
            .is_some_and(|(active, _)| active == binding)
    }

    /// Release the held chord, if any, and stop edge delivery.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn unregister_all(&mut self) -> CoreResult<()> {
        let Some((binding, hotkey)) = self.active.take() else {
            debug!("No hotkey registered, nothing to unregister");
            return Ok(());
        };

        GlobalHotKeyEvent::set_event_handler(None::<fn(GlobalHotKeyEvent)>);

        self.manager
            .unregister_all(&[hotkey])
            .map_err(|e| CoreError::HotkeyUnregisterFailed {
                binding: binding.to_string(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(binding = %binding, "Global hotkey unregistered");

        Ok(())
    }

    /// Serve a request posted by [`MainThreadRegistrar`].
    pub fn handle(&mut self, request: HotkeyRequest) {
        // A dropped receiver means the monitor gave up waiting; nothing to do.
        match request {
            HotkeyRequest::Register {
                binding,
                on_edge,
                reply,
            } => {
                let _ = reply.send(self.register(&binding, on_edge));
            }
            HotkeyRequest::IsRegistered { binding, reply } => {
                let _ = reply.send(self.is_registered(&binding));
            }
            HotkeyRequest::UnregisterAll { reply } => {
                let _ = reply.send(self.unregister_all());
            }
        }
    }
}

/// Registry operation posted to the main thread.
pub enum HotkeyRequest {
    /// See [`HotkeyRegistry::register`].
    Register {
        /// Chord to reserve.
        binding: Binding,
        /// Edge sink for the chord.
        on_edge: EdgeCallback,
        /// Outcome.
        reply: oneshot::Sender<CoreResult<()>>,
    },
    /// See [`HotkeyRegistry::is_registered`].
    IsRegistered {
        /// Chord to look up.
        binding: Binding,
        /// Outcome.
        reply: oneshot::Sender<bool>,
    },
    /// See [`HotkeyRegistry::unregister_all`].
    UnregisterAll {
        /// Outcome.
        reply: oneshot::Sender<CoreResult<()>>,
    },
}

/// [`HotkeyRegistrar`] usable from the monitor's thread.
pub struct MainThreadRegistrar {
    // Mutex only to make the proxy `Sync` on every platform.
    proxy: Mutex<EventLoopProxy<UiCommand>>,
}

impl MainThreadRegistrar {
    /// Registrar forwarding to the event loop behind `proxy`.
    pub fn new(proxy: EventLoopProxy<UiCommand>) -> Self {
        Self {
            proxy: Mutex::new(proxy),
        }
    }

    #[track_caller]
    fn post(&self, request: HotkeyRequest) -> CoreResult<()> {
        self.proxy
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .send_event(UiCommand::Hotkey(request))
            .map_err(|_| CoreError::RegistrarUnavailable {
                reason: "event loop closed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

#[track_caller]
fn no_reply() -> CoreError {
    CoreError::RegistrarUnavailable {
        reason: "event loop dropped the request".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

impl HotkeyRegistrar for MainThreadRegistrar {
    async fn register(&mut self, binding: &Binding, on_edge: EdgeCallback) -> CoreResult<()> {
        let (reply, outcome) = oneshot::channel();
        self.post(HotkeyRequest::Register {
            binding: binding.clone(),
            on_edge,
            reply,
        })?;

        outcome.await.map_err(|_| no_reply())?
    }

    async fn is_registered(&self, binding: &Binding) -> bool {
        let (reply, outcome) = oneshot::channel();
        if let Err(e) = self.post(HotkeyRequest::IsRegistered {
            binding: binding.clone(),
            reply,
        }) {
            warn!(error = ?e, "Could not query hotkey registration");
            return false;
        }

        outcome.await.unwrap_or(false)
    }

    async fn unregister_all(&mut self) -> CoreResult<()> {
        let (reply, outcome) = oneshot::channel();
        self.post(HotkeyRequest::UnregisterAll { reply })?;

        outcome.await.map_err(|_| no_reply())?
    }
}
