//! codedesk page wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() {
    codedesk_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    let mut stderr = io::stderr().lock();
    writeln!(
        stderr,
        "The codedesk page targets wasm32; build it with `trunk build` or `cargo build --target wasm32-unknown-unknown -p codedesk-ui`.\nIt will talk to {}.",
        codedesk_ui::desk::configured_base_url()
    )?;
    Ok(())
}
