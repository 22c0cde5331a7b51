use std::io::{self, Write};

pub fn write_stdout_text(text: &str) -> io::Result<()> {
    write_tolerating_closed_pipe(&mut io::stdout().lock(), text, false)
}

pub fn write_stdout_line(text: &str) -> io::Result<()> {
    write_tolerating_closed_pipe(&mut io::stdout().lock(), text, true)
}

/// A reader that hangs up early (`ledgerdesk bill list | head`) is not an error.
fn write_tolerating_closed_pipe<W>(writer: &mut W, text: &str, newline: bool) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let result = write_and_flush(writer, text, newline);

    match result {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn write_and_flush<W>(writer: &mut W, text: &str, newline: bool) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writer.write_all(text.as_bytes())?;
    if newline {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
