//! Button edge resolution.
//!
//! Runs before finger input each frame. It reads the state finger input
//! settled on last frame, fires the once-per-transition side effects
//! (sounds, the button's action, events), then resets `curr_state` so finger
//! input can recompute it from scratch.

use hecs::World;
use tracing::debug;

use panorama_core::components::{Button, NodeRef};
use panorama_core::enums::{ButtonKind, ButtonState};
use panorama_core::events::ViewerEvent;
use panorama_core::interfaces::AudioBackend;

/// Run the button system for one frame.
pub fn run(world: &mut World, audio: Option<&dyn AudioBackend>, events: &mut Vec<ViewerEvent>) {
    let audio = audio.filter(|backend| backend.is_ready());

    for (entity, (node, button, kind)) in
        world.query_mut::<(&NodeRef, &mut Button, Option<&ButtonKind>)>()
    {
        if button.resting_y.is_none() {
            button.resting_y = Some(node.0.position().y);
        }
        if let Some(audio) = audio {
            bind_sounds(button, audio);
        }

        let entity = entity.to_bits().get();
        let kind = kind.copied();
        let (curr, prev) = (button.curr_state, button.prev_state);

        if curr.is_in_contact() && !prev.is_in_contact() {
            events.push(ViewerEvent::ButtonPressed { entity, kind });
        }

        if curr == ButtonState::FullyPressed && prev != ButtonState::FullyPressed {
            if let Some(sound) = &button.press_sound {
                sound.play();
            }
            button.action.invoke();
            debug!(entity, kind = ?kind, "button fully pressed");
            events.push(ViewerEvent::ButtonFullyPressed { entity, kind });
        }

        if curr == ButtonState::Recovering && prev != ButtonState::Recovering {
            if let Some(sound) = &button.release_sound {
                sound.play();
            }
            debug!(entity, kind = ?kind, "button released");
            events.push(ViewerEvent::ButtonReleased { entity, kind });
        }

        button.prev_state = curr;
        button.curr_state = ButtonState::Resting;
    }
}

/// Resolve sound cues that are not bound yet. Bound handles are never replaced.
fn bind_sounds(button: &mut Button, audio: &dyn AudioBackend) {
    if button.press_sound.is_none() {
        if let Some(cue) = button.press_cue.as_deref() {
            button.press_sound = audio.load(cue);
        }
    }
    if button.release_sound.is_none() {
        if let Some(cue) = button.release_cue.as_deref() {
            button.release_sound = audio.load(cue);
        }
    }
}
