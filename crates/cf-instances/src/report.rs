use std::io::{self, Write};

use crate::stats::{Instance, InstanceCollection};

const BYTES_PER_MB: u64 = 1_048_576;

/// Whole megabytes, truncated.
pub fn to_mb(bytes: u64) -> u64 {
    bytes / BYTES_PER_MB
}

/// Write one block per instance in collection order, then a blank line.
pub fn render<W: Write>(collection: &InstanceCollection, out: &mut W) -> io::Result<()> {
    for (index, instance) in collection.iter() {
        write_instance(out, index, instance)?;
    }
    writeln!(out)?;
    out.flush()
}

pub fn render_to_string(collection: &InstanceCollection) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render(collection, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn write_instance<W: Write>(out: &mut W, index: &str, instance: &Instance) -> io::Result<()> {
    let stats = &instance.stats;
    write!(
        out,
        "\nInstance: {index}\nName: {}\nHost: {}\nPort: {}\nMemory: {}MB / {}MB\n",
        stats.name,
        stats.host,
        stats.port,
        to_mb(stats.usage.mem),
        to_mb(stats.mem_quota),
    )
}
