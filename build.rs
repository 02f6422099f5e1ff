use clap::CommandFactory;
use std::fs;
use std::path::Path;

#[path = "src/cli.rs"]
mod cli;
#[path = "src/man.rs"]
mod man;

fn main() {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/man.rs");
    println!("cargo:rerun-if-changed=doc/shorten-extra.md");

    let doc_dir = Path::new("doc");
    fs::create_dir_all(doc_dir).expect("Failed to create doc directory");

    let extra_md = fs::read_to_string(doc_dir.join("shorten-extra.md"))
        .expect("Failed to read doc/shorten-extra.md");
    let page = man::render_man_page(cli::Cli::command(), &extra_md)
        .expect("Failed to render man page");

    fs::write(doc_dir.join("shorten.1"), page).expect("Failed to write doc/shorten.1");
}
