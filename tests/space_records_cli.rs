//! Behavioural tests for the `space_records` binary.

use cap_std::ambient_authority;
use cap_std::fs::Dir;
use eyre::{Result, ensure, eyre};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn binary_path() -> Result<PathBuf> {
    std::env::var_os("CARGO_BIN_EXE_space_records")
        .map(PathBuf::from)
        .ok_or_else(|| {
            eyre!("CARGO_BIN_EXE_space_records is not set; ensure the binary is built")
        })
}

fn run_binary(args: &[OsString]) -> Result<Output> {
    let path = binary_path()?;
    Command::new(&path)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .map_err(|err| eyre!(err))
}

fn open_temp_dir() -> Result<(Dir, PathBuf)> {
    let path = std::env::temp_dir();
    let dir = Dir::open_ambient_dir(&path, ambient_authority()).map_err(|err| eyre!(err))?;
    Ok((dir, path))
}

fn write_temp_payload(label: &str, contents: &str) -> Result<PathBuf> {
    let filename = format!("space_records_{label}_{}.json", std::process::id());
    let (dir, path) = open_temp_dir()?;
    let mut file = dir.create(&filename).map_err(|err| eyre!(err))?;
    file.write_all(contents.as_bytes())
        .map_err(|err| eyre!(err))?;
    Ok(path.join(filename))
}

fn remove_temp_file(path: &Path) -> Result<()> {
    let (dir, _) = open_temp_dir()?;
    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("temp file path must include a file name"))?;
    dir.remove_file(file_name).map_err(|err| eyre!(err))?;
    Ok(())
}

#[test]
fn runs_every_exercise_by_default() -> Result<()> {
    let output = run_binary(&[])?;
    ensure!(output.status.success(), "expected success status");
    let stdout = String::from_utf8_lossy(&output.stdout);
    for title in [
        "Space Station Data Validation",
        "Alien Contact Log Validation",
        "Space Mission Crew Validation",
    ] {
        ensure!(stdout.contains(title), "expected title {title}");
    }
    ensure!(
        stdout.contains("telepathic contact requires at least 3 witnesses"),
        "expected the telepathic rejection"
    );
    Ok(())
}

#[test]
fn rejects_unknown_exercise() -> Result<()> {
    let output = run_binary(&[OsString::from("probe")])?;
    ensure!(!output.status.success(), "expected failure status");
    let stderr = String::from_utf8_lossy(&output.stderr);
    ensure!(
        stderr.contains("unknown exercise 'probe'"),
        "expected unknown exercise error"
    );
    Ok(())
}

#[test]
fn rejects_payload_without_single_exercise() -> Result<()> {
    let output = run_binary(&[OsString::from("all"), OsString::from("payload.json")])?;
    ensure!(!output.status.success(), "expected failure status");
    let stderr = String::from_utf8_lossy(&output.stderr);
    ensure!(
        stderr.contains("a payload requires a single exercise"),
        "expected payload selection error"
    );
    Ok(())
}

#[test]
fn validates_contact_payload() -> Result<()> {
    let payload = write_temp_payload(
        "contact",
        r#"{
            "contact_id": "AC2024009",
            "location": "Roswell, New Mexico",
            "contact_type": "physical",
            "signal_strength": 3.0,
            "duration_minutes": 61,
            "witness_count": 2
        }"#,
    )?;

    let result = run_binary(&[OsString::from("contact"), payload.clone().into_os_string()]);
    remove_temp_file(&payload)?;
    let output = result?;

    ensure!(output.status.success(), "expected success status");
    let stdout = String::from_utf8_lossy(&output.stdout);
    ensure!(
        stdout.contains("Validation error:\nphysical contact reports must be verified"),
        "expected the physical verification rejection, got {stdout}"
    );
    Ok(())
}

#[test]
fn reports_unparseable_payload() -> Result<()> {
    let payload = write_temp_payload("garbled", "not-json")?;

    let result = run_binary(&[OsString::from("station"), payload.clone().into_os_string()]);
    remove_temp_file(&payload)?;
    let output = result?;

    ensure!(!output.status.success(), "expected failure status");
    let stderr = String::from_utf8_lossy(&output.stderr);
    ensure!(
        stderr.contains("PayloadParse"),
        "expected payload parse error, got {stderr}"
    );
    Ok(())
}
