use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::error::Error;
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUTPUT_DIR: &str = "assets/dist";

// Bundle the shell's stylesheets (layout + menu) into one minified file
fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all(OUTPUT_DIR)?;

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .map_err(|e| format!("failed to bundle {ENTRY}: {e}"))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("failed to minify CSS: {e}"))?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("failed to print CSS: {e}"))?;

    fs::write(Path::new(OUTPUT_DIR).join("bundle.css"), css.code)?;
    Ok(())
}
