//! Binary entrypoint for the browser-hosted component gallery.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    ui_atoms_showcase::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `ui_atoms_showcase` for wasm32 with the `csr` feature and serve it with trunk."
    );
}
