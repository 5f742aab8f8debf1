use indoc::indoc;
use std::env;
use std::fs;
use std::path::Path;

const HELP_REL: &str = "assets/help.md";

fn main() {
    let manifest = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let help_basename = Path::new(HELP_REL)
        .file_name()
        .and_then(|s| s.to_str())
        .expect("invalid help asset filename");
    let help_path = Path::new(&manifest).join(HELP_REL);
    println!("cargo:rerun-if-changed={}", help_path.display());

    // Copy the help markdown into OUT_DIR so the compiled crate can include it
    // with `include_bytes!(concat!(env!("OUT_DIR"), "/<basename>"))`, keeping
    // generated artifacts out of the tracked source tree.
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let help_dest = Path::new(&out_dir).join(help_basename);
    fs::copy(&help_path, &help_dest).expect("failed to copy help.md to OUT_DIR");

    let gen_path = Path::new(&out_dir).join("generated_help.rs");
    let gen_src = format!(
        indoc!(
            r#"
                pub struct EmbeddedHelp {{ pub content: &'static [u8] }}

                pub const EMBEDDED_HELP: EmbeddedHelp = EmbeddedHelp {{
                    content: include_bytes!(concat!(env!("OUT_DIR"), "/{basename}")),
                }};
            "#
        ),
        basename = help_basename,
    );
    fs::write(&gen_path, gen_src).expect("failed to write generated_help.rs to OUT_DIR");
}
