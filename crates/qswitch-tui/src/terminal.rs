//! Terminal setup and restoration

use crate::selector::restore_terminal;

/// Install a panic hook that restores the terminal before reporting.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));
}
