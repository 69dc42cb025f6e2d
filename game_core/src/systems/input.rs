use crate::host::HostRequest;
use crate::{Config, InputQueue, InputState, MenuStateMachine};

/// Feed queued key events through the menu state machine.
///
/// Returns true if any event asked to exit.
pub fn ingest_inputs(
    queue: &mut InputQueue,
    menu: &mut MenuStateMachine,
    config: &mut Config,
    input: &mut InputState,
    requests: &mut Vec<HostRequest>,
) -> bool {
    let start = requests.len();
    for event in queue.drain() {
        menu.handle_key(event, config, input, requests);
    }
    requests[start..].contains(&HostRequest::Exit)
}
