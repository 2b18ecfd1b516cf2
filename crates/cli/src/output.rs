use anyhow::Context;
use dnsdiff_domain::{ComparisonConfig, HostDiff};
use std::fs::File;
use std::io::{self, BufWriter, Write};

const INDENT: &str = "    ";

/// Opens stdout or the configured output file.
pub fn open_output(config: &ComparisonConfig) -> anyhow::Result<Box<dyn Write + Send>> {
    if config.writes_to_stdout() {
        return Ok(Box::new(io::stdout()));
    }

    let file = File::create(&config.out_path)
        .with_context(|| format!("Failed to create output file {}", config.out_path))?;
    Ok(Box::new(BufWriter::new(file)))
}

pub fn render_host(host: &str, diff: &HostDiff) -> String {
    if diff.is_empty() {
        return format!("{} same or delegated\n", host);
    }

    let mut out = format!("{}\n", host);
    for line in diff.lines() {
        out.push_str(INDENT);
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn write_host<W: Write + ?Sized>(out: &mut W, host: &str, diff: &HostDiff) -> io::Result<()> {
    out.write_all(render_host(host, diff).as_bytes())?;
    out.flush()
}
