// WASM entrypoint for Trunk.
//
// Native builds emit the bundler entry manifest as JSON; the real browser
// wiring is behind `--features web` and `wasm32`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sitewire::manifest;

    let entries = manifest::entry_points(Some(manifest::SECONDARY_LOCALE));
    match manifest::to_json(&entries) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("manifest: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No-op; the wasm start hook below drives the page.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    sitewire::start();
}
