//! Man page rendering shared by `build.rs` and the man page test.

use clap::Command;

/// Render `cmd` as roff and append `extra_md` converted from markdown
pub fn render_man_page(cmd: Command, extra_md: &str) -> std::io::Result<String> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;
    let mut page = String::from_utf8_lossy(&buffer).into_owned();

    // mandown emits its own .TH header; clap already wrote one
    let extra_roff = mandown::convert(extra_md, "SHORTEN", 1);
    let extra_roff = extra_roff
        .lines()
        .skip_while(|line| line.starts_with(".TH") || line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    page.push('\n');
    page.push_str(&extra_roff);
    page.push('\n');
    Ok(page)
}
