//! Drains reducer-emitted [`RuntimeEffect`]s against the host boundary.

use leptos::*;

use crate::{reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Installs the executor effect on the runtime's effect queue.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        // Nested dispatches from a running effect (a pointer release detaching its own listeners)
        // must land in a fresh queue.
        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in coalesce_batch(queued) {
            host.run_runtime_effect(runtime, effect);
        }
    });
}

/// Keeps only the last pin write of a batch; every write reads the current pins anyway.
fn coalesce_batch(queued: Vec<RuntimeEffect>) -> Vec<RuntimeEffect> {
    let last_persist = queued
        .iter()
        .rposition(|effect| *effect == RuntimeEffect::PersistPins);

    queued
        .into_iter()
        .enumerate()
        .filter(|(index, effect)| {
            *effect != RuntimeEffect::PersistPins || Some(*index) == last_persist
        })
        .map(|(_, effect)| effect)
        .collect()
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ApplicationId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowId;

    #[test]
    fn repeated_pin_writes_collapse_to_the_last_one() {
        let terminal = WindowId::from(ApplicationId::trusted("terminal"));
        let batch = vec![
            RuntimeEffect::PersistPins,
            RuntimeEffect::AttachPointerListeners(terminal.clone()),
            RuntimeEffect::PersistPins,
            RuntimeEffect::DetachPointerListeners(terminal.clone()),
        ];

        assert_eq!(
            coalesce_batch(batch),
            vec![
                RuntimeEffect::AttachPointerListeners(terminal.clone()),
                RuntimeEffect::PersistPins,
                RuntimeEffect::DetachPointerListeners(terminal),
            ]
        );
    }

    #[test]
    fn batches_without_pin_writes_pass_through_in_order() {
        let notes = WindowId::from(ApplicationId::trusted("notes"));
        let batch = vec![
            RuntimeEffect::FocusWindowInput(notes.clone()),
            RuntimeEffect::AttachPointerListeners(notes),
        ];

        assert_eq!(coalesce_batch(batch.clone()), batch);
    }
}
