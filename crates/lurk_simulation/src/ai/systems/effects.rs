//! Применение воздействий guard'ов на intruder'а.

use bevy::prelude::*;

use crate::ai::agent::TargetEffect;
use crate::ai::events::TargetEffectEvent;
use crate::components::Intruder;

/// Система: TargetEffectEvent → Intruder
///
/// Идёт после `guard_ai_tick`, так что все guard'ы тика видели один и тот
/// же snapshot intruder'а.
pub fn apply_target_effects(
    mut effects: EventReader<TargetEffectEvent>,
    mut intruders: Query<&mut Intruder>,
) {
    for event in effects.read() {
        let Ok(mut intruder) = intruders.get_mut(event.target) else {
            crate::log_warning(&format!(
                "Target effect {:?} from {:?}: target {:?} not found",
                event.effect, event.guard, event.target
            ));
            continue;
        };

        match event.effect {
            TargetEffect::Restrain => {
                intruder.restrain();
                crate::log(&format!("Intruder restrained by {:?}", event.guard));
            }
            TargetEffect::Kill => {
                if intruder.alive {
                    intruder.kill();
                    crate::log_info(&format!("💀 Intruder killed by {:?}", event.guard));
                }
            }
        }
    }
}
