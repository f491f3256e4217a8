//! Contract for the OS-level global hotkey registry.
//!
//! The registry itself lives in the binary (it needs the platform event
//! loop); the monitor only sees this trait.

use crate::{CoreResult, settings::Binding};

use std::future::Future;

/// Physical transition reported for the registered chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeState {
    /// Chord went down.
    Pressed,
    /// Chord came back up.
    Released,
}

/// Receives edges for the registered chord, on whatever thread the OS
/// delivers them.
pub type EdgeCallback = Box<dyn Fn(EdgeState) + Send + Sync + 'static>;

/// Binds and unbinds one global key combination.
pub trait HotkeyRegistrar {
    /// Reserve `binding` globally and route its edges to `on_edge`.
    ///
    /// Fails with `HotkeyConflict` when the chord is already owned, or
    /// `InvalidBinding` when the OS layer does not recognise it.
    fn register(
        &mut self,
        binding: &Binding,
        on_edge: EdgeCallback,
    ) -> impl Future<Output = CoreResult<()>> + Send;

    /// Whether `binding` is currently held by this process.
    fn is_registered(&self, binding: &Binding) -> impl Future<Output = bool> + Send;

    /// Release every chord this process holds. A no-op when none is held.
    fn unregister_all(&mut self) -> impl Future<Output = CoreResult<()>> + Send;
}
