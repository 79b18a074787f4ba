use tracing::warn;
use trajectory_sim::core::ParameterSource;

use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.clear {
        state.sim.clear_trajectory();
        state.set_status("Trajectory cleared");
    }

    if actions.reset {
        state.sim.clear_trajectory();
        let defaults = state.sim.reset_parameters();
        state.form.fill(defaults);
        state.set_status("Parameters reset");
    }

    if actions.play {
        let launched = state
            .form
            .read_parameters()
            .and_then(|params| state.sim.launch(params));
        match launched {
            Ok(()) => state.set_status("Launched"),
            Err(err) => {
                warn!(error = %err, "launch refused");
                state.set_error(err.to_string());
            }
        }
    }
}

pub(crate) fn step_active_flight(state: &mut AppRuntime, now_s: f64) {
    let was_playing = state.sim.is_playing();
    state.sim.tick(now_s);
    if was_playing && !state.sim.is_playing() {
        state.set_status("Landed");
    }
}
