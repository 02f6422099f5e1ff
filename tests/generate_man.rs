use clap::CommandFactory;
use std::fs;

#[path = "../src/cli.rs"]
mod cli;
#[path = "../src/man.rs"]
mod man;

fn generated_page() -> String {
    let extra_md =
        fs::read_to_string("doc/shorten-extra.md").expect("Failed to read doc/shorten-extra.md");
    man::render_man_page(cli::Cli::command(), &extra_md).expect("Failed to render man page")
}

#[test]
fn man_page_up_to_date() {
    let generated = generated_page();
    let checked_in = fs::read_to_string("doc/shorten.1").expect("Failed to read doc/shorten.1");

    if generated != checked_in {
        let temp_path = std::env::temp_dir().join("shorten.1.generated");
        fs::write(&temp_path, &generated).expect("Failed to write temp file");
        eprintln!("doc/shorten.1 is out of date");
        eprintln!("Compare with: diff doc/shorten.1 {}", temp_path.display());
        eprintln!("Regenerate: cargo test --test generate_man -- --ignored");
        panic!("Man page is out of date");
    }
}

#[test]
fn man_page_covers_options_and_extras() {
    let page = generated_page();
    for needle in ["ellipsis", "headless", "MODES", "CONFIGURATION"] {
        assert!(page.contains(needle), "man page lacks {}", needle);
    }
}

/// Rewrite doc/shorten.1 from the current sources
#[test]
#[ignore]
fn regenerate_man_page() {
    fs::write("doc/shorten.1", generated_page()).expect("Failed to write doc/shorten.1");
}
