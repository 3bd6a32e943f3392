use std::{io, sync::Once};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostic output on stderr.
///
/// `verbosity` counts `-v` flags: 0 installs nothing, 1 logs `info`,
/// 2 `debug`, 3 and above `trace`. Safe to call more than once; only the
/// first call has an effect.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => return,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::new(format!("tally={level}"));
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr)
                              .with_target(true)
                              .with_level(true))
            .with(filter)
            .init();
    });
}
