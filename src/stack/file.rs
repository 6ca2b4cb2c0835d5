//! On-disk codec for the swap stack.
//!
//! The format is plain UTF-8 text: one branch name per line in stack order,
//! every line newline-terminated, nothing else. An empty file is an empty stack.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

/// Open the stack file for reading and writing, creating it if absent.
///
/// Newly created files are readable and writable by the owner only.
pub fn open_stack_file(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options.open(path)
}

/// Read every line of the stack file, in order
pub fn read_entries<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Write entries one per line
pub fn write_entries<W: Write>(writer: &mut W, entries: &[String]) -> io::Result<()> {
    for entry in entries {
        writer.write_all(entry.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Replace the whole content of an open stack file with `entries`
pub fn rewrite(file: &mut File, entries: &[String]) -> io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;

    let mut writer = BufWriter::new(&mut *file);
    write_entries(&mut writer, entries)?;
    writer.flush()?;
    drop(writer);

    file.sync_data()
}
