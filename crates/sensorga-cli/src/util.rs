use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context;

use crate::schema::RunRecord;

/// Writes `value` as pretty JSON to `output_path`, or to stdout when no path
/// is given.
pub fn save_json<T>(value: &T, output_path: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    match output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_json(BufWriter::new(file), value)
                .with_context(|| format!("Failed to write JSON to {}", path.display()))
        }
        None => write_json(io::stdout().lock(), value).context("Failed to write JSON to stdout"),
    }
}

fn write_json<W, T>(mut writer: W, value: &T) -> anyhow::Result<()>
where
    W: Write,
    T: serde::Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Reads a saved run, checking that its configuration is still valid.
pub fn read_run_file<P>(path: P) -> anyhow::Result<RunRecord>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let record: RunRecord = read_json_file("run", path)?;
    record
        .config
        .validate()
        .with_context(|| format!("Invalid configuration in run file: {}", path.display()))?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use sensorga_engine::GaConfig;

    use super::*;

    #[test]
    fn test_write_json_ends_with_newline() {
        let mut out = Vec::new();
        write_json(&mut out, &GaConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        let config: GaConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(config, GaConfig::default());
    }
}
