//! Panic hook that hands the terminal back before the report is printed.

use std::panic;

use super::setup::restore_stdout;

/// Chain a terminal restore in front of the current panic hook.
///
/// Call after `color_eyre::install()` so its report is the one printed.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_stdout();
        previous(info);
    }));
}
