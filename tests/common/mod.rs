use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::Path;

#[allow(dead_code)]
pub const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Mauris ornare finibus turpis, vel venenatis felis dignissi eu. In sed mattis eros, sit amet pulvinar velit. Donec vehicula metus ac libero condimentum, eget mollis enim ullamcorper.";

/// A `shorten` command isolated from the user's config file
pub fn shorten_cmd(config_home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("shorten");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env_remove("SHORTEN_LOG")
        .env_remove("RUST_LOG");
    cmd
}
